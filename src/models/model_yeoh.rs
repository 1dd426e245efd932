use super::{shifted, EnergyModel};
use crate::invariants::invariants;
use crate::symbolic::{Expr, Symbol};

/// Implements the three-term Yeoh model
///
/// ```text
/// W = c10 (I1 − 3) + c20 (I1 − 3)² + c30 (I1 − 3)³
/// ```
pub struct ModelYeoh {
    params: Vec<Symbol>,
}

impl ModelYeoh {
    /// Allocates a new instance with parameters `[c10, c20, c30]`
    pub fn new() -> Self {
        ModelYeoh {
            params: ["a_c10", "b_c20", "c_c30"].iter().map(|n| Symbol::new(n)).collect(),
        }
    }
}

impl EnergyModel for ModelYeoh {
    fn name(&self) -> &'static str {
        "yeoh"
    }

    fn energy(&self) -> Expr {
        let sym = invariants();
        let x1 = shifted(&sym.i1);
        self.params
            .iter()
            .enumerate()
            .map(|(i, c)| Expr::sym(c) * x1.clone().powi(i as i64 + 1))
            .fold(Expr::zero(), |acc, t| acc + t)
    }

    fn parameter_ordering(&self) -> &[Symbol] {
        &self.params
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ModelYeoh;
    use crate::invariants::invariants;
    use crate::models::EnergyModel;

    #[test]
    fn new_works() {
        let model = ModelYeoh::new();
        assert_eq!(model.name(), "yeoh");
        let names: Vec<_> = model.parameter_ordering().iter().map(|s| s.name()).collect();
        assert_eq!(names, &["a_c10", "b_c20", "c_c30"]);
        let w = model.energy();
        assert!(w.contains(&invariants().i1));
        assert!(!w.contains(&invariants().i2));
        assert!(!w.contains(&invariants().jj));
        for p in model.parameter_ordering() {
            assert!(w.contains(p));
        }
        assert!(!model.compressible());
    }
}
