//! Implements the symbolic algebra: expressions, calculus, solving, and compilation

mod algebra;
mod compile;
mod expr;
mod rational;
mod simplify;
mod solve;
mod symbol;
mod tensor;
pub use crate::symbolic::algebra::*;
pub use crate::symbolic::compile::*;
pub use crate::symbolic::expr::*;
pub use crate::symbolic::rational::*;
pub use crate::symbolic::simplify::simplify;
pub use crate::symbolic::solve::*;
pub use crate::symbolic::symbol::*;
pub use crate::symbolic::tensor::*;
