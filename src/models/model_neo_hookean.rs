use super::{shifted, EnergyModel};
use crate::invariants::invariants;
use crate::symbolic::{Expr, Symbol};

/// Implements the Neo-Hookean model
///
/// ```text
/// W = μ/2 (I1 − 3)                      (incompressible)
/// W = μ/2 (I1 − 3) + K/2 (J − 1)²       (compressible)
/// ```
///
/// The parameters are `[μ]` or, if compressible, `[K, μ]`.
pub struct ModelNeoHookean {
    compressible: bool,
    mu: Symbol,
    kk: Option<Symbol>,
    params: Vec<Symbol>,
}

impl ModelNeoHookean {
    /// Allocates a new instance
    pub fn new(compressible: bool) -> Self {
        let mu = Symbol::new("a_mu");
        let kk = if compressible { Some(Symbol::new("a_K")) } else { None };
        let mut params = Vec::new();
        if let Some(k) = &kk {
            params.push(k.clone()); // K first to match [K, μ]
        }
        params.push(mu.clone());
        ModelNeoHookean {
            compressible,
            mu,
            kk,
            params,
        }
    }
}

impl EnergyModel for ModelNeoHookean {
    fn name(&self) -> &'static str {
        if self.compressible {
            "neo_hookean_compressible"
        } else {
            "neo_hookean"
        }
    }

    fn compressible(&self) -> bool {
        self.compressible
    }

    fn energy(&self) -> Expr {
        let sym = invariants();
        let mut w = Expr::sym(&self.mu) / 2 * shifted(&sym.i1);
        if let Some(k) = &self.kk {
            w = w + Expr::sym(k) / 2 * (Expr::sym(&sym.jj) - 1).powi(2);
        }
        w
    }

    fn parameter_ordering(&self) -> &[Symbol] {
        &self.params
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
