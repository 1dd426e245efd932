use super::ComponentDerivation;
use crate::base::StrainType;
use crate::{Error, Result};
use russell_lab::{Matrix, Vector};

/// Holds the strain data of an evaluation
///
/// Uniaxial and simple shear take a scalar or an array; biaxial takes a matrix with two
/// rows (row 0 feeds λ1 and row 1 feeds λ2).
#[derive(Clone, Debug)]
pub enum StrainInput {
    Scalar(f64),
    Array(Vector),
    Rows(Matrix),
}

/// Holds the computed stress values (same shape as the strain input)
#[derive(Clone, Debug)]
pub enum StressValues {
    Scalar(f64),
    Array(Vector),
    Pair(Vector, Vector),
}

impl StrainInput {
    /// Converts the data to stretches
    pub fn to_stretch(&self, strain_type: StrainType) -> StrainInput {
        match self {
            StrainInput::Scalar(x) => StrainInput::Scalar(strain_type.to_stretch(*x)),
            StrainInput::Array(v) => {
                let mut res = v.clone();
                for i in 0..v.dim() {
                    res[i] = strain_type.to_stretch(v[i]);
                }
                StrainInput::Array(res)
            }
            StrainInput::Rows(m) => {
                let (nrow, ncol) = m.dims();
                let mut res = m.clone();
                for i in 0..nrow {
                    for j in 0..ncol {
                        res.set(i, j, strain_type.to_stretch(m.get(i, j)));
                    }
                }
                StrainInput::Rows(res)
            }
        }
    }

    /// Returns the strain values as a flat list (row-major for matrices)
    pub fn as_list(&self) -> Vec<f64> {
        match self {
            StrainInput::Scalar(x) => vec![*x],
            StrainInput::Array(v) => v.as_data().clone(),
            StrainInput::Rows(m) => {
                let (nrow, ncol) = m.dims();
                (0..nrow).flat_map(|i| (0..ncol).map(move |j| m.get(i, j))).collect()
            }
        }
    }
}

impl StressValues {
    /// Returns the scalar value, if any
    pub fn scalar(&self) -> Option<f64> {
        match self {
            StressValues::Scalar(x) => Some(*x),
            _ => None,
        }
    }

    /// Returns the array of values, if any
    pub fn array(&self) -> Option<&Vector> {
        match self {
            StressValues::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the pair of arrays (biaxial), if any
    pub fn pair(&self) -> Option<(&Vector, &Vector)> {
        match self {
            StressValues::Pair(a, b) => Some((a, b)),
            _ => None,
        }
    }
}

/// Calls a compiled component with the strain values first and the parameters next
fn call(component: &ComponentDerivation, strain: &[f64], params: &[f64]) -> Result<f64> {
    let mut x = Vec::with_capacity(strain.len() + params.len());
    x.extend_from_slice(strain);
    x.extend_from_slice(params);
    component.function.call(&x)
}

/// Evaluates the derived components over the (stretch) data
///
/// # Input
///
/// * `components` -- one component (uniaxial, simple shear) or two (biaxial)
/// * `stretch` -- the strain data already converted to stretches
/// * `params` -- the material parameters
pub fn evaluate(components: &[ComponentDerivation], stretch: &StrainInput, params: &[f64]) -> Result<StressValues> {
    for component in components {
        component.check_parameters(params.len())?;
    }
    match components {
        [single] => match stretch {
            StrainInput::Scalar(x) => Ok(StressValues::Scalar(call(single, &[*x], params)?)),
            StrainInput::Array(v) => {
                let mut res = Vector::new(v.dim());
                for i in 0..v.dim() {
                    res[i] = call(single, &[v[i]], params)?;
                }
                Ok(StressValues::Array(res))
            }
            StrainInput::Rows(_) => Err(Error::InvalidStrainShape(
                "uniaxial and simple shear take a scalar or an array",
            )),
        },
        [first, second] => match stretch {
            StrainInput::Rows(m) if m.dims().0 == 2 => {
                let n = m.dims().1;
                let mut res1 = Vector::new(n);
                let mut res2 = Vector::new(n);
                for j in 0..n {
                    let point = [m.get(0, j), m.get(1, j)];
                    res1[j] = call(first, &point, params)?;
                    res2[j] = call(second, &point, params)?;
                }
                Ok(StressValues::Pair(res1, res2))
            }
            _ => Err(Error::InvalidStrainShape("biaxial takes a matrix with two rows")),
        },
        _ => Err(Error::InvalidStrainShape("cannot evaluate this number of components")),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
