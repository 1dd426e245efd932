//! Implements the base structures for stress evaluations

mod enums;
mod options;
pub use crate::base::enums::*;
pub use crate::base::options::*;
