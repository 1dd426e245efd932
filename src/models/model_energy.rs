use crate::symbolic::{Expr, Symbol};

/// Defines a trait for strain-energy models W(I1, I2, J)
///
/// The energy must be written in terms of the shared invariant symbols
/// (see [crate::invariants()]); the material parameters are symbols owned by the model.
pub trait EnergyModel: Send + Sync {
    /// Returns the name of the model
    fn name(&self) -> &'static str;

    /// Indicates that the energy depends on the volume ratio J
    fn compressible(&self) -> bool {
        false
    }

    /// Returns the strain-energy density expression
    fn energy(&self) -> Expr;

    /// Returns the parameter symbols in the order of the numeric parameter vector
    fn parameter_ordering(&self) -> &[Symbol];
}

/// Returns `x − 3` for an invariant symbol
pub(crate) fn shifted(invariant: &Symbol) -> Expr {
    Expr::sym(invariant) - 3
}
