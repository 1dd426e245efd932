//! Implements the stress derivation: assembly, constraints, and evaluation

mod assembler;
mod constraint;
mod evaluator;
mod solver;
pub use crate::stress::assembler::*;
pub use crate::stress::constraint::*;
pub use crate::stress::evaluator::*;
pub use crate::stress::solver::*;
