use super::{simplify, solve, CompiledFunction, Expr, Substitution, Symbol};
use crate::Result;

/// Defines the symbolic-algebra capability used by the stress engine
pub trait SymbolicAlgebra {
    /// Differentiates an expression with respect to a symbol
    fn differentiate(&self, expr: &Expr, var: &Symbol) -> Expr;

    /// Replaces symbols by expressions
    fn substitute(&self, expr: &Expr, mapping: &Substitution) -> Expr;

    /// Solves `lhs = 0` for a symbol, returning all closed-form solutions found
    fn solve(&self, lhs: &Expr, var: &Symbol) -> Vec<Expr>;

    /// Compiles an expression into a numeric function with ordered arguments
    fn compile(&self, expr: &Expr, args: &[Symbol]) -> Result<CompiledFunction>;
}

/// Implements the symbolic algebra on canonical polynomial forms
#[derive(Clone, Copy, Debug, Default)]
pub struct Cas;

impl SymbolicAlgebra for Cas {
    fn differentiate(&self, expr: &Expr, var: &Symbol) -> Expr {
        simplify(&expr.derivative(var))
    }

    fn substitute(&self, expr: &Expr, mapping: &Substitution) -> Expr {
        simplify(&expr.replace(mapping))
    }

    fn solve(&self, lhs: &Expr, var: &Symbol) -> Vec<Expr> {
        solve(lhs, var)
    }

    fn compile(&self, expr: &Expr, args: &[Symbol]) -> Result<CompiledFunction> {
        CompiledFunction::new(expr, args)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
