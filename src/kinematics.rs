use crate::base::Protocol;
use crate::invariants::invariants;
use crate::symbolic::{simplify, Expr, Rational, Substitution, SymTensor, Symbol};
use crate::Result;

/// Holds the deformation gradient of a loading protocol and its derived quantities
///
/// All tensors are symbolic in the strain variables of the protocol (see
/// [Kinematics::strain_symbols]). An instance is built fresh for each evaluation.
#[derive(Clone, Debug)]
pub struct Kinematics {
    /// Loading protocol
    pub protocol: Protocol,

    /// Indicates that the volume may change (J ≠ 1)
    pub compressible: bool,

    /// Deformation gradient F
    pub ff: SymTensor,

    /// F⁻¹
    pub ff_inv: SymTensor,

    /// F⁻ᵀ
    pub ff_inv_t: SymTensor,

    /// Left Cauchy-Green tensor b = F·Fᵀ
    pub bb: SymTensor,

    /// b⁻¹
    pub bb_inv: SymTensor,

    /// b² = b·b
    pub bb2: SymTensor,

    /// First invariant I1 = tr(b)
    pub i1: Expr,

    /// Second invariant I2 = ½ (tr(b)² − tr(b²))
    pub i2: Expr,

    /// Volume ratio J = det(F)
    pub jj: Expr,

    /// Lateral (transverse) stretch variable still to be eliminated, if any
    pub lateral: Option<Symbol>,
}

impl Kinematics {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `protocol` -- the loading protocol
    /// * `compressible` -- the model allows volume changes
    /// * `lateral_contraction` -- (compressible uniaxial or biaxial only) let the
    ///   transverse stretch free, to be found from the traction-free condition
    ///
    /// ```text
    /// uniaxial,   incompressible:   F = diag(λ, λ^(-½), λ^(-½))
    /// uniaxial,   compressible:     F = diag(λ, 1, 1)        or diag(λ, √s, √s) with lateral contraction
    /// simple_shear:                 F = I + γ e₁⊗e₂
    /// biaxial,    incompressible:   F = diag(λ1, λ2, 1/(λ1 λ2))
    /// biaxial,    compressible:     F = diag(λ1, λ2, 1)      or diag(λ1, λ2, t) with lateral contraction
    /// ```
    pub fn new(protocol: Protocol, compressible: bool, lateral_contraction: bool) -> Result<Self> {
        let sym = invariants();
        let relaxed = compressible && lateral_contraction;
        let mut lateral = None;
        let ff = match protocol {
            Protocol::Uniaxial => {
                let lam = Expr::sym(&sym.lambda);
                if !compressible {
                    let lat = lam.clone().pow(Rational::new(-1, 2));
                    SymTensor::diagonal(lam, lat.clone(), lat)
                } else if relaxed {
                    lateral = Some(sym.lateral_sq.clone());
                    let lat = Expr::sym(&sym.lateral_sq).sqrt();
                    SymTensor::diagonal(lam, lat.clone(), lat)
                } else {
                    SymTensor::diagonal(lam, Expr::one(), Expr::one())
                }
            }
            Protocol::SimpleShear => SymTensor::from_components([
                [Expr::one(), Expr::sym(&sym.gamma), Expr::zero()],
                [Expr::zero(), Expr::one(), Expr::zero()],
                [Expr::zero(), Expr::zero(), Expr::one()],
            ]),
            Protocol::Biaxial => {
                let l1 = Expr::sym(&sym.lambda1);
                let l2 = Expr::sym(&sym.lambda2);
                let l3 = if !compressible {
                    (l1.clone() * l2.clone()).recip()
                } else if relaxed {
                    lateral = Some(sym.transverse.clone());
                    Expr::sym(&sym.transverse)
                } else {
                    Expr::one()
                };
                SymTensor::diagonal(l1, l2, l3)
            }
        };
        Kinematics::from_deformation_gradient(protocol, compressible, ff, lateral)
    }

    /// Computes all derived quantities from F
    fn from_deformation_gradient(
        protocol: Protocol,
        compressible: bool,
        ff: SymTensor,
        lateral: Option<Symbol>,
    ) -> Result<Self> {
        let ff_inv = ff.inverse()?;
        let ff_inv_t = ff_inv.transpose();
        let bb = ff.dot(&ff.transpose());
        let bb_inv = bb.inverse()?;
        let bb2 = bb.dot(&bb);
        let tr_b = bb.trace();
        let i1 = tr_b.clone();
        let i2 = simplify(&(Expr::rational(1, 2) * (tr_b.powi(2) - bb2.trace())));
        let jj = ff.determinant();
        Ok(Kinematics {
            protocol,
            compressible,
            ff,
            ff_inv,
            ff_inv_t,
            bb,
            bb_inv,
            bb2,
            i1,
            i2,
            jj,
            lateral,
        })
    }

    /// Returns the strain variables in calling order
    ///
    /// ```text
    /// uniaxial:     [λ]
    /// simple_shear: [γ]
    /// biaxial:      [λ1, λ2]
    /// ```
    pub fn strain_symbols(&self) -> Vec<Symbol> {
        let sym = invariants();
        match self.protocol {
            Protocol::Uniaxial => vec![sym.lambda.clone()],
            Protocol::SimpleShear => vec![sym.gamma.clone()],
            Protocol::Biaxial => vec![sym.lambda1.clone(), sym.lambda2.clone()],
        }
    }

    /// Returns the mapping of the invariant symbols onto their kinematic expressions
    pub fn invariant_substitution(&self) -> Substitution {
        let sym = invariants();
        let mut mapping = Substitution::new();
        mapping.insert(sym.i1.clone(), self.i1.clone());
        mapping.insert(sym.i2.clone(), self.i2.clone());
        mapping.insert(sym.jj.clone(), self.jj.clone());
        mapping
    }

    /// Replaces the lateral stretch variable by its solution and recomputes all quantities
    pub fn eliminate_lateral(&self, value: &Expr) -> Result<Self> {
        match &self.lateral {
            Some(var) => {
                let mut mapping = Substitution::new();
                mapping.insert(var.clone(), value.clone());
                let ff = self.ff.substitute(&mapping);
                Kinematics::from_deformation_gradient(self.protocol, self.compressible, ff, None)
            }
            None => Ok(self.clone()),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
