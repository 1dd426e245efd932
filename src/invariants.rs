use crate::symbolic::Symbol;
use std::sync::OnceLock;

/// Holds the process-wide symbols shared by all energy models and kinematics
///
/// Substitution matches symbols by identity; thus, the invariants referenced by the
/// energy expressions must be the very same symbols replaced by the kinematics.
/// The registry is created once (see [invariants]) and never modified.
#[derive(Debug)]
pub struct InvariantSymbols {
    /// First invariant `I1 = tr(b)`
    pub i1: Symbol,

    /// Second invariant `I2 = ½ (tr(b)² − tr(b²))`
    pub i2: Symbol,

    /// Volume ratio `J = det(F)`
    pub jj: Symbol,

    /// Pressure field (Lagrange multiplier of incompressibility)
    pub pressure: Symbol,

    /// Uniaxial stretch λ
    pub lambda: Symbol,

    /// First in-plane biaxial stretch λ1
    pub lambda1: Symbol,

    /// Second in-plane biaxial stretch λ2
    pub lambda2: Symbol,

    /// Shear strain γ
    pub gamma: Symbol,

    /// Squared lateral stretch (relaxed compressible uniaxial)
    pub lateral_sq: Symbol,

    /// Out-of-plane stretch (relaxed compressible biaxial)
    pub transverse: Symbol,
}

static INVARIANTS: OnceLock<InvariantSymbols> = OnceLock::new();

/// Returns the process-wide registry of invariant and kinematic symbols
pub fn invariants() -> &'static InvariantSymbols {
    INVARIANTS.get_or_init(|| InvariantSymbols {
        i1: Symbol::new("I1"),
        i2: Symbol::new("I2"),
        jj: Symbol::new("J"),
        pressure: Symbol::new("P"),
        lambda: Symbol::new("lambda"),
        lambda1: Symbol::new("lambda1"),
        lambda2: Symbol::new("lambda2"),
        gamma: Symbol::new("gamma"),
        lateral_sq: Symbol::new("s"),
        transverse: Symbol::new("t"),
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
