use super::StressTensor;
use crate::base::{Protocol, StressType};
use crate::kinematics::Kinematics;
use crate::models::EnergyModel;
use crate::symbolic::{sort_symbols, CompiledFunction, Expr, Substitution, SymTensor, Symbol, SymbolicAlgebra};
use crate::{Error, Result};
use tracing::debug;

/// Defines how the arguments of a compiled component are ordered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgumentOrdering {
    /// Strain variables followed by the model's declared parameter ordering
    Declared,

    /// Strain variables followed by the free symbols of the expression, sorted by name
    Extracted,
}

/// Holds a derived stress component
#[derive(Clone, Debug)]
pub struct ComponentDerivation {
    /// Zero-based (row, column) of the component
    pub component: (usize, usize),

    /// Closed-form expression of the component
    pub expression: Expr,

    /// How the arguments were ordered
    pub ordering: ArgumentOrdering,

    /// Number of leading strain arguments
    pub n_strain: usize,

    /// Compiled numeric function
    pub function: CompiledFunction,
}

impl ComponentDerivation {
    /// Compiles a component
    fn new(
        algebra: &dyn SymbolicAlgebra,
        tensor: &SymTensor,
        component: (usize, usize),
        strain: &[Symbol],
        declared: &[Symbol],
        ordering: ArgumentOrdering,
    ) -> Result<Self> {
        let expression = tensor.get(component.0, component.1).clone();
        let args = match ordering {
            ArgumentOrdering::Declared => {
                let mut args = strain.to_vec();
                args.extend_from_slice(declared);
                args
            }
            ArgumentOrdering::Extracted => sort_symbols(expression.free_symbols(), strain),
        };
        let function = algebra.compile(&expression, &args)?;
        debug!(row = component.0, col = component.1, %expression, arity = args.len(), "compiled component");
        Ok(ComponentDerivation {
            component,
            expression,
            ordering,
            n_strain: strain.len(),
            function,
        })
    }

    /// Returns the ordered argument symbols (strain variables first)
    pub fn args(&self) -> &[Symbol] {
        self.function.args()
    }

    /// Returns the names of the ordered arguments
    pub fn arg_names(&self) -> Vec<String> {
        self.args().iter().map(|s| s.name().to_string()).collect()
    }

    /// Returns the parameter symbols (arguments after the strain variables)
    pub fn parameters(&self) -> &[Symbol] {
        &self.args()[self.n_strain..]
    }

    /// Checks the number of supplied parameters
    ///
    /// Extracted orderings report a mismatch with the free symbols of the expression;
    /// declared orderings report the parameter count of the model.
    pub fn check_parameters(&self, supplied: usize) -> Result<()> {
        let params = self.parameters();
        if params.len() == supplied {
            return Ok(());
        }
        match self.ordering {
            ArgumentOrdering::Extracted => Err(Error::ParameterSymbolMismatch {
                extracted: params.len(),
                supplied,
                names: params.iter().map(|s| s.name().to_string()).collect(),
            }),
            ArgumentOrdering::Declared => Err(Error::InvalidParameterCount {
                expected: params.len(),
                found: supplied,
            }),
        }
    }
}

/// Holds the result of the protocol-specific constraint and projection
#[derive(Clone, Debug)]
pub struct ProtocolProjection {
    /// Projected stress tensor with the pressure replaced by its solution (if found)
    pub tensor: SymTensor,

    /// Solution of the pressure field, if the protocol constrains it
    pub pressure: Option<Expr>,

    /// Derived components: one for uniaxial and simple shear; (1,1) and (2,2) for biaxial
    pub components: Vec<ComponentDerivation>,
}

/// Solves the traction-free condition of a protocol and extracts the stress components
///
/// # Input
///
/// * `projected` -- the stress tensor already projected onto the requested measure
/// * `stressed` -- the assembled Cauchy stress (gives the pressure symbol, if any)
/// * `traction_free` -- the lateral stretch was already found from σ = 0 on the free faces
///
/// ```text
/// uniaxial:     solve T22 = 0 for P;  extract T11
/// simple_shear: extract T12
/// biaxial:      solve T33 = 0 for P;  extract T11 and T22
/// ```
pub fn resolve(
    algebra: &dyn SymbolicAlgebra,
    model: &dyn EnergyModel,
    kin: &Kinematics,
    stressed: &StressTensor,
    projected: &SymTensor,
    stress_type: StressType,
    traction_free: bool,
) -> Result<ProtocolProjection> {
    let protocol = kin.protocol;
    let strain = kin.strain_symbols();
    let declared = model.parameter_ordering();
    let pressure = stressed.pressure.as_ref();
    let eliminate = |row: usize| -> Result<(SymTensor, Option<Expr>)> {
        match pressure {
            Some(p) => {
                let solution = first_solution(algebra, projected.get(row, row), p, protocol)?;
                debug!(protocol = protocol.name(), %solution, "pressure solution");
                let mut mapping = Substitution::new();
                mapping.insert(p.clone(), solution.clone());
                let tensor = SymTensor::from_fn(|i, j| algebra.substitute(projected.get(i, j), &mapping));
                Ok((tensor, Some(solution)))
            }
            None if traction_free || protocol == Protocol::Uniaxial => Ok((projected.clone(), None)),
            None => Err(Error::UnsolvableConstraint {
                protocol: protocol.name().to_string(),
                variable: "P".to_string(),
            }),
        }
    };
    match protocol {
        Protocol::Uniaxial => {
            let (tensor, solution) = eliminate(1)?;
            let c11 = ComponentDerivation::new(algebra, &tensor, (0, 0), &strain, declared, ArgumentOrdering::Declared)?;
            Ok(ProtocolProjection {
                tensor,
                pressure: solution,
                components: vec![c11],
            })
        }
        Protocol::SimpleShear => {
            if let Some(p) = pressure {
                if projected.get(0, 1).contains(p) {
                    return Err(Error::UnresolvedPressure {
                        protocol: protocol.name().to_string(),
                        stress_type: stress_type.name().to_string(),
                    });
                }
            }
            let c12 =
                ComponentDerivation::new(algebra, projected, (0, 1), &strain, declared, ArgumentOrdering::Extracted)?;
            Ok(ProtocolProjection {
                tensor: projected.clone(),
                pressure: None,
                components: vec![c12],
            })
        }
        Protocol::Biaxial => {
            let (tensor, solution) = eliminate(2)?;
            let ordering = ArgumentOrdering::Extracted;
            let c11 = ComponentDerivation::new(algebra, &tensor, (0, 0), &strain, declared, ordering)?;
            let c22 = ComponentDerivation::new(algebra, &tensor, (1, 1), &strain, declared, ordering)?;
            Ok(ProtocolProjection {
                tensor,
                pressure: solution,
                components: vec![c11, c22],
            })
        }
    }
}

/// Solves `lhs = 0` and returns the first solution
pub(crate) fn first_solution(
    algebra: &dyn SymbolicAlgebra,
    lhs: &Expr,
    var: &Symbol,
    protocol: Protocol,
) -> Result<Expr> {
    algebra
        .solve(lhs, var)
        .into_iter()
        .next()
        .ok_or_else(|| Error::UnsolvableConstraint {
            protocol: protocol.name().to_string(),
            variable: var.name().to_string(),
        })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
