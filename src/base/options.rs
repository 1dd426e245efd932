use super::{Protocol, StrainType, StressType};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Holds the options of a stress evaluation
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StressOptions {
    /// Loading protocol (default: uniaxial)
    pub protocol: Protocol,

    /// Stress measure (default: cauchy)
    pub stress_type: StressType,

    /// Strain measure of the input data (default: stretch)
    pub strain_type: StrainType,

    /// Saves a stress-strain figure after the evaluation
    pub plot: bool,

    /// Path of the figure; defaults to `/tmp/libela/<model>_<protocol>.svg`
    pub plot_path: Option<String>,

    /// Lets compressible models contract laterally
    ///
    /// When true, the transverse stretch of compressible uniaxial and biaxial tests is
    /// obtained from the traction-free condition instead of being fixed to one.
    /// Incompressible models and simple shear are not affected.
    pub lateral_contraction: bool,
}

impl Default for StressOptions {
    fn default() -> Self {
        StressOptions {
            protocol: Protocol::Uniaxial,
            stress_type: StressType::Cauchy,
            strain_type: StrainType::Stretch,
            plot: false,
            plot_path: None,
            lateral_contraction: false,
        }
    }
}

impl StressOptions {
    /// Allocates a new instance with the given protocol and default values otherwise
    pub fn new(protocol: Protocol) -> Self {
        StressOptions {
            protocol,
            ..Default::default()
        }
    }

    /// Parses the options from their names
    ///
    /// # Input
    ///
    /// * `protocol` -- "uniaxial", "simple_shear", or "biaxial"
    /// * `stress_type` -- "cauchy", "piola", or "2nd-piola"
    /// * `strain_type` -- "stretch" or "engineering"
    pub fn from_names(protocol: &str, stress_type: &str, strain_type: &str) -> Result<Self> {
        Ok(StressOptions {
            protocol: protocol.parse()?,
            stress_type: stress_type.parse()?,
            strain_type: strain_type.parse()?,
            ..Default::default()
        })
    }

    /// Sets the stress measure
    pub fn with_stress_type(mut self, stress_type: StressType) -> Self {
        self.stress_type = stress_type;
        self
    }

    /// Sets the strain measure
    pub fn with_strain_type(mut self, strain_type: StrainType) -> Self {
        self.strain_type = strain_type;
        self
    }

    /// Sets the lateral contraction flag
    pub fn with_lateral_contraction(mut self, enabled: bool) -> Self {
        self.lateral_contraction = enabled;
        self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
