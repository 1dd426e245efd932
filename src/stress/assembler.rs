use crate::base::StressType;
use crate::invariants::invariants;
use crate::kinematics::Kinematics;
use crate::models::EnergyModel;
use crate::symbolic::{Expr, SymTensor, Symbol, SymbolicAlgebra};
use tracing::debug;

/// Holds the assembled Cauchy stress and the pressure field, if any
#[derive(Clone, Debug)]
pub struct StressTensor {
    /// Cauchy stress σ (possibly containing the pressure symbol)
    pub sigma: SymTensor,

    /// Pressure symbol P of incompressible models
    pub pressure: Option<Symbol>,
}

/// Assembles the Cauchy stress tensor
///
/// The energy is differentiated with respect to the invariant symbols first; only
/// then the kinematic expressions are substituted for I1, I2 and J:
///
/// ```text
/// σ = 2 ∂W/∂I1 b − 2 ∂W/∂I2 b⁻¹ + J ∂W/∂J I      (compressible)
/// σ = 2 ∂W/∂I1 b − 2 ∂W/∂I2 b⁻¹ − P I            (incompressible)
/// ```
pub fn assemble_cauchy(algebra: &dyn SymbolicAlgebra, model: &dyn EnergyModel, kin: &Kinematics) -> StressTensor {
    let sym = invariants();
    let energy = model.energy();
    let mapping = kin.invariant_substitution();
    let derivative = |invariant: &Symbol| algebra.substitute(&algebra.differentiate(&energy, invariant), &mapping);
    let dw_di1 = derivative(&sym.i1);
    let dw_di2 = derivative(&sym.i2);
    debug!(model = model.name(), %dw_di1, %dw_di2, "energy derivatives");
    let isochoric = kin
        .bb
        .scaled(&(Expr::from(2) * dw_di1))
        .minus(&kin.bb_inv.scaled(&(Expr::from(2) * dw_di2)));
    let identity = SymTensor::identity();
    if model.compressible() {
        let dw_dj = derivative(&sym.jj);
        let volumetric = identity.scaled(&(kin.jj.clone() * dw_dj));
        StressTensor {
            sigma: isochoric.plus(&volumetric),
            pressure: None,
        }
    } else {
        let pp = Expr::sym(&sym.pressure);
        StressTensor {
            sigma: isochoric.minus(&identity.scaled(&pp)),
            pressure: Some(sym.pressure.clone()),
        }
    }
}

/// Projects the Cauchy stress onto the requested stress measure
///
/// ```text
/// cauchy:    σ
/// piola:     J (σ − P I) · F⁻ᵀ
/// 2nd-piola: F⁻¹ · J (σ − P I) · F⁻ᵀ
/// ```
///
/// The extra pressure term exists only if the model carries a pressure field; for
/// compressible models it is zero. J simplifies to one for incompressible kinematics.
pub fn project(tensor: &StressTensor, stress_type: StressType, kin: &Kinematics) -> SymTensor {
    if stress_type == StressType::Cauchy {
        return tensor.sigma.clone();
    }
    let base = match &tensor.pressure {
        Some(p) => tensor.sigma.minus(&SymTensor::identity().scaled(&Expr::sym(p))),
        None => tensor.sigma.clone(),
    };
    let piola = base.dot(&kin.ff_inv_t).scaled(&kin.jj);
    match stress_type {
        StressType::SecondPiola => kin.ff_inv.dot(&piola),
        _ => piola,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
