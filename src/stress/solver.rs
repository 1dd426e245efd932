use super::{assemble_cauchy, evaluate, first_solution, project, resolve, ComponentDerivation};
use super::{StrainInput, StressValues};
use crate::base::{Protocol, StressOptions};
use crate::invariants::invariants;
use crate::kinematics::Kinematics;
use crate::models::EnergyModel;
use crate::plotting::plot_response;
use crate::symbolic::{Cas, Expr, SymTensor, Symbol, SymbolicAlgebra};
use crate::{Error, Result};
use russell_tensor::Tensor2;
use tracing::{debug, info};

/// Holds the closed-form stress of a model under a loading protocol
#[derive(Clone, Debug)]
pub struct StressDerivation {
    /// Name of the model
    pub model: String,

    /// Options used in the derivation
    pub options: StressOptions,

    /// Kinematics (with the lateral stretch already eliminated)
    pub kinematics: Kinematics,

    /// Projected stress tensor with the pressure replaced by its solution
    ///
    /// In simple shear the pressure is not constrained and may remain in the
    /// normal components.
    pub tensor: SymTensor,

    /// Solution of the pressure field, if any
    pub pressure: Option<Expr>,

    /// Derived components
    pub components: Vec<ComponentDerivation>,

    /// Declared parameter ordering of the model
    pub parameters: Vec<Symbol>,
}

/// Holds the results of a stress evaluation
#[derive(Clone, Debug)]
pub struct StressResponse {
    /// Name of the model
    pub model: String,

    /// Options used in the evaluation
    pub options: StressOptions,

    /// Kinematics (F, b, invariants)
    pub kinematics: Kinematics,

    /// Projected stress tensor (see [StressDerivation::tensor])
    pub tensor: SymTensor,

    /// Solution of the pressure field, if any
    pub pressure: Option<Expr>,

    /// Derived components
    pub components: Vec<ComponentDerivation>,

    /// Numeric values
    pub values: StressValues,

    /// Path of the saved figure, if any
    pub plot_path: Option<String>,

    parameters: Vec<Symbol>,
}

/// Evaluates the full stress tensor at a point
///
/// The strain values come first (λ; γ; or λ1, λ2) followed by the parameters
/// in the declared ordering of the model.
fn full_tensor(
    kinematics: &Kinematics,
    tensor: &SymTensor,
    parameters: &[Symbol],
    options: &StressOptions,
    strain: &[f64],
    params: &[f64],
) -> Result<Tensor2> {
    if tensor.contains(&invariants().pressure) {
        return Err(Error::UnresolvedPressure {
            protocol: options.protocol.name().to_string(),
            stress_type: options.stress_type.name().to_string(),
        });
    }
    let mut args = kinematics.strain_symbols();
    if strain.len() != args.len() {
        return Err(Error::InvalidStrainShape("the number of strain values must match the protocol"));
    }
    args.extend_from_slice(parameters);
    let mut x: Vec<f64> = strain.iter().map(|v| options.strain_type.to_stretch(*v)).collect();
    x.extend_from_slice(params);
    tensor.evaluate(&args, &x)
}

impl StressDerivation {
    /// Evaluates the derived components
    ///
    /// # Input
    ///
    /// * `strain` -- the strain data in the measure given by the options
    /// * `params` -- the material parameters in the declared ordering
    pub fn evaluate(&self, strain: &StrainInput, params: &[f64]) -> Result<StressValues> {
        let stretch = strain.to_stretch(self.options.strain_type);
        evaluate(&self.components, &stretch, params)
    }

    /// Evaluates the full stress tensor at a point
    pub fn tensor_at(&self, strain: &[f64], params: &[f64]) -> Result<Tensor2> {
        full_tensor(&self.kinematics, &self.tensor, &self.parameters, &self.options, strain, params)
    }
}

impl StressResponse {
    /// Evaluates the full stress tensor at a point
    ///
    /// # Input
    ///
    /// * `strain` -- one value (uniaxial, simple shear) or two (biaxial), in the strain measure of the options
    /// * `params` -- the material parameters in the declared ordering
    pub fn tensor_at(&self, strain: &[f64], params: &[f64]) -> Result<Tensor2> {
        full_tensor(&self.kinematics, &self.tensor, &self.parameters, &self.options, strain, params)
    }
}

/// Derives and evaluates stresses of hyperelastic models
pub struct StressSolver<A: SymbolicAlgebra = Cas> {
    algebra: A,
}

impl StressSolver<Cas> {
    /// Allocates a new instance with the default algebra
    pub fn new() -> Self {
        StressSolver { algebra: Cas }
    }
}

impl<A: SymbolicAlgebra> StressSolver<A> {
    /// Allocates a new instance with a given algebra
    pub fn with_algebra(algebra: A) -> Self {
        StressSolver { algebra }
    }

    /// Derives the closed-form stress components
    pub fn derive(&self, model: &dyn EnergyModel, options: &StressOptions) -> Result<StressDerivation> {
        let algebra: &dyn SymbolicAlgebra = &self.algebra;
        let protocol = options.protocol;
        let compressible = model.compressible();
        debug!(model = model.name(), protocol = protocol.name(), compressible, "deriving stress");

        // kinematics
        let mut kin = Kinematics::new(protocol, compressible, options.lateral_contraction)?;
        let traction_free = kin.lateral.is_some();
        if let Some(var) = kin.lateral.clone() {
            let lateral = match protocol {
                Protocol::Biaxial => 2,
                _ => 1,
            };
            let cauchy = assemble_cauchy(algebra, model, &kin);
            let solution = first_solution(algebra, cauchy.sigma.get(lateral, lateral), &var, protocol)?;
            debug!(variable = var.name(), %solution, "lateral stretch");
            kin = kin.eliminate_lateral(&solution)?;
        }
        debug!(i1 = %kin.i1, i2 = %kin.i2, jj = %kin.jj, "invariants");

        // stress
        let stressed = assemble_cauchy(algebra, model, &kin);
        let projected = project(&stressed, options.stress_type, &kin);
        let res = resolve(
            algebra,
            model,
            &kin,
            &stressed,
            &projected,
            options.stress_type,
            traction_free,
        )?;
        Ok(StressDerivation {
            model: model.name().to_string(),
            options: options.clone(),
            kinematics: kin,
            tensor: res.tensor,
            pressure: res.pressure,
            components: res.components,
            parameters: model.parameter_ordering().to_vec(),
        })
    }

    /// Computes the stress response of a model
    ///
    /// # Input
    ///
    /// * `model` -- the strain-energy model
    /// * `strain` -- the strain data in the measure given by the options
    /// * `params` -- the material parameters in the declared ordering of the model
    /// * `options` -- the protocol, stress measure, strain measure and plotting options
    pub fn stress(
        &self,
        model: &dyn EnergyModel,
        strain: &StrainInput,
        params: &[f64],
        options: &StressOptions,
    ) -> Result<StressResponse> {
        if model.compressible() && params.len() < 2 {
            return Err(Error::InvalidParameterCount {
                expected: 2,
                found: params.len(),
            });
        }
        let derivation = self.derive(model, options)?;
        let values = derivation.evaluate(strain, params)?;
        let mut response = StressResponse {
            model: derivation.model,
            options: derivation.options,
            kinematics: derivation.kinematics,
            tensor: derivation.tensor,
            pressure: derivation.pressure,
            components: derivation.components,
            values,
            plot_path: None,
            parameters: derivation.parameters,
        };
        if options.plot {
            let path = plot_response(strain, &response)?;
            info!(path = path.as_str(), "saved stress-strain figure");
            response.plot_path = Some(path);
        }
        Ok(response)
    }
}

/// Computes the stress response of a model with the default algebra
///
/// See [StressSolver::stress()].
pub fn stress(
    model: &dyn EnergyModel,
    strain: &StrainInput,
    params: &[f64],
    options: &StressOptions,
) -> Result<StressResponse> {
    StressSolver::new().stress(model, strain, params, options)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
