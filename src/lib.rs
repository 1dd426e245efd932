mod base;
mod error;
mod invariants;
mod job;
mod kinematics;
mod models;
mod plotting;
mod stress;
mod symbolic;
pub use crate::base::*;
pub use crate::error::*;
pub use crate::invariants::*;
pub use crate::job::*;
pub use crate::kinematics::*;
pub use crate::models::*;
pub use crate::plotting::*;
pub use crate::stress::*;
pub use crate::symbolic::*;
