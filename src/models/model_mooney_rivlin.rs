use super::{shifted, EnergyModel};
use crate::invariants::invariants;
use crate::symbolic::{Expr, Symbol};

/// Implements the two-parameter Mooney-Rivlin model
///
/// ```text
/// W = c10 (I1 − 3) + c01 (I2 − 3)
/// ```
pub struct ModelMooneyRivlin {
    params: Vec<Symbol>,
}

impl ModelMooneyRivlin {
    /// Allocates a new instance with parameters `[c10, c01]`
    pub fn new() -> Self {
        ModelMooneyRivlin {
            params: vec![Symbol::new("a_c10"), Symbol::new("b_c01")],
        }
    }
}

impl EnergyModel for ModelMooneyRivlin {
    fn name(&self) -> &'static str {
        "mooney_rivlin"
    }

    fn energy(&self) -> Expr {
        let sym = invariants();
        let (c10, c01) = (Expr::sym(&self.params[0]), Expr::sym(&self.params[1]));
        c10 * shifted(&sym.i1) + c01 * shifted(&sym.i2)
    }

    fn parameter_ordering(&self) -> &[Symbol] {
        &self.params
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ModelMooneyRivlin;
    use crate::invariants::invariants;
    use crate::models::EnergyModel;

    #[test]
    fn new_works() {
        let model = ModelMooneyRivlin::new();
        assert_eq!(model.parameter_ordering().len(), 2);
        let w = model.energy();
        assert!(w.contains(&invariants().i1));
        assert!(w.contains(&invariants().i2));
        assert!(!model.compressible());
    }
}
