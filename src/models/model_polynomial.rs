use super::{shifted, EnergyModel};
use crate::invariants::invariants;
use crate::symbolic::{Expr, Symbol};

/// Holds the parameter names and the powers (i, j) of (I1 − 3)ⁱ (I2 − 3)ʲ
const TERMS: [(&str, i64, i64); 9] = [
    ("a_c10", 1, 0),
    ("b_c01", 0, 1),
    ("c_c20", 2, 0),
    ("d_c11", 1, 1),
    ("e_c02", 0, 2),
    ("f_c30", 3, 0),
    ("g_c21", 2, 1),
    ("h_c12", 1, 2),
    ("i_c03", 0, 3),
];

/// Implements the nine-term (third-order) polynomial model
///
/// ```text
/// W = Σ cij (I1 − 3)ⁱ (I2 − 3)ʲ   with 1 ≤ i + j ≤ 3
/// ```
///
/// The parameters are `[c10, c01, c20, c11, c02, c30, c21, c12, c03]`. With all
/// second- and third-order coefficients set to zero, the model reduces to Mooney-Rivlin.
pub struct ModelPolynomial {
    params: Vec<Symbol>,
}

impl ModelPolynomial {
    /// Allocates a new instance
    pub fn new() -> Self {
        ModelPolynomial {
            params: TERMS.iter().map(|(name, _, _)| Symbol::new(name)).collect(),
        }
    }
}

impl EnergyModel for ModelPolynomial {
    fn name(&self) -> &'static str {
        "polynomial"
    }

    fn energy(&self) -> Expr {
        let sym = invariants();
        let x1 = shifted(&sym.i1);
        let x2 = shifted(&sym.i2);
        TERMS
            .iter()
            .zip(&self.params)
            .map(|((_, i, j), c)| Expr::sym(c) * x1.clone().powi(*i) * x2.clone().powi(*j))
            .fold(Expr::zero(), |acc, t| acc + t)
    }

    fn parameter_ordering(&self) -> &[Symbol] {
        &self.params
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
