use crate::base::StressOptions;
use crate::models::{ModelHyperelastic, ParamHyperelastic};
use crate::stress::{StrainInput, StressResponse, StressSolver, StressValues};
use crate::{Error, Result};
use russell_lab::{Matrix, Vector};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the strain data of a job file
///
/// A number, a list (uniaxial, simple shear), or two lists (biaxial λ1 and λ2).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StrainData {
    Scalar(f64),
    List(Vec<f64>),
    Rows(Vec<Vec<f64>>),
}

impl StrainData {
    /// Converts the data into the input of the evaluator
    pub fn to_input(&self) -> Result<StrainInput> {
        match self {
            StrainData::Scalar(x) => Ok(StrainInput::Scalar(*x)),
            StrainData::List(values) => Ok(StrainInput::Array(Vector::from(values))),
            StrainData::Rows(rows) => {
                let ncol = rows.first().map(|r| r.len()).unwrap_or(0);
                if rows.iter().any(|r| r.len() != ncol) {
                    return Err(Error::InvalidStrainShape("all rows must have the same length"));
                }
                Ok(StrainInput::Rows(Matrix::from(rows)))
            }
        }
    }
}

/// Holds a stress evaluation job read from a JSON file
///
/// Example:
///
/// ```json
/// {
///     "model": "mooney_rivlin",
///     "params": [0.3, 0.1],
///     "strain": [1.0, 1.5, 2.0],
///     "options": { "protocol": "uniaxial", "stress_type": "piola" }
/// }
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StressJob {
    /// Model selection
    pub model: ParamHyperelastic,

    /// Material parameters in the declared ordering of the model
    pub params: Vec<f64>,

    /// Strain data
    pub strain: StrainData,

    /// Evaluation options
    #[serde(default)]
    pub options: StressOptions,
}

impl StressJob {
    /// Reads a JSON file containing the job
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let job = serde_json::from_reader(reader)?;
        Ok(job)
    }

    /// Runs the job
    pub fn run(&self) -> Result<StressResponse> {
        let model = ModelHyperelastic::new(&self.model);
        let strain = self.strain.to_input()?;
        StressSolver::new().stress(model.base.as_ref(), &strain, &self.params, &self.options)
    }
}

/// Holds a derived component in a report
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ComponentReport {
    /// One-based (row, column) of the component
    pub component: (usize, usize),

    /// Closed-form expression
    pub expression: String,

    /// Ordered argument names
    pub args: Vec<String>,
}

/// Holds the serializable summary of a stress evaluation
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StressReport {
    /// Name of the model
    pub model: String,

    /// Options of the evaluation
    pub options: StressOptions,

    /// Deformation gradient (row-major expressions)
    pub deformation_gradient: Vec<Vec<String>>,

    /// Pressure solution, if any
    pub pressure: Option<String>,

    /// Derived components
    pub components: Vec<ComponentReport>,

    /// Stress values; one list per component
    pub values: Vec<Vec<f64>>,
}

impl StressReport {
    /// Allocates a new instance from a response
    pub fn new(response: &StressResponse) -> Self {
        let ff = &response.kinematics.ff;
        let values = match &response.values {
            StressValues::Scalar(x) => vec![vec![*x]],
            StressValues::Array(v) => vec![v.as_data().clone()],
            StressValues::Pair(a, b) => vec![a.as_data().clone(), b.as_data().clone()],
        };
        StressReport {
            model: response.model.clone(),
            options: response.options.clone(),
            deformation_gradient: (0..3)
                .map(|i| (0..3).map(|j| ff.get(i, j).to_string()).collect())
                .collect(),
            pressure: response.pressure.as_ref().map(|p| p.to_string()),
            components: response
                .components
                .iter()
                .map(|c| ComponentReport {
                    component: (c.component.0 + 1, c.component.1 + 1),
                    expression: c.expression.to_string(),
                    args: c.arg_names(),
                })
                .collect(),
            values,
        }
    }

    /// Writes a JSON file with the report
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<()>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p)?;
        }
        let mut file = File::create(&path)?;
        serde_json::to_writer_pretty(&mut file, &self)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
