use super::{shifted, EnergyModel};
use crate::invariants::invariants;
use crate::symbolic::{Expr, Symbol};

/// Implements the four-term Klosner-Segal model
///
/// ```text
/// W = c11 (I1 − 3) + c21 (I2 − 3) + c22 (I2 − 3)² + c23 (I2 − 3)³
/// ```
pub struct ModelKlosnerSegal {
    params: Vec<Symbol>,
}

impl ModelKlosnerSegal {
    /// Allocates a new instance with parameters `[c11, c21, c22, c23]`
    pub fn new() -> Self {
        ModelKlosnerSegal {
            params: ["a_c11", "b_c21", "c_c22", "d_c23"].iter().map(|n| Symbol::new(n)).collect(),
        }
    }
}

impl EnergyModel for ModelKlosnerSegal {
    fn name(&self) -> &'static str {
        "klosner_segal"
    }

    fn energy(&self) -> Expr {
        let sym = invariants();
        let c: Vec<Expr> = self.params.iter().map(Expr::sym).collect();
        let x1 = shifted(&sym.i1);
        let x2 = shifted(&sym.i2);
        c[0].clone() * x1 + c[1].clone() * x2.clone() + c[2].clone() * x2.clone().powi(2) + c[3].clone() * x2.powi(3)
    }

    fn parameter_ordering(&self) -> &[Symbol] {
        &self.params
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
