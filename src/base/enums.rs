use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defines the loading protocols (kinematics of the experimental test)
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum Protocol {
    /// Uniaxial tension or compression along the first axis
    Uniaxial,

    /// Simple shear in the 1-2 plane
    SimpleShear,

    /// Equibiaxial or general biaxial stretching in the 1-2 plane
    Biaxial,
}

/// Defines the stress measures
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum StressType {
    /// True (Cauchy) stress σ
    Cauchy,

    /// First Piola-Kirchhoff (nominal) stress
    Piola,

    /// Second Piola-Kirchhoff stress
    SecondPiola,
}

/// Defines the strain measures accepted as input
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum StrainType {
    /// Stretch λ (passed through)
    Stretch,

    /// Engineering strain ε, converted with λ = 1 + ε
    Engineering,
}

impl Protocol {
    /// Returns the name of the protocol
    pub fn name(&self) -> &'static str {
        match self {
            Protocol::Uniaxial => "uniaxial",
            Protocol::SimpleShear => "simple_shear",
            Protocol::Biaxial => "biaxial",
        }
    }
}

impl StressType {
    /// Returns the name of the stress measure
    pub fn name(&self) -> &'static str {
        match self {
            StressType::Cauchy => "cauchy",
            StressType::Piola => "piola",
            StressType::SecondPiola => "2nd-piola",
        }
    }
}

impl StrainType {
    /// Returns the name of the strain measure
    pub fn name(&self) -> &'static str {
        match self {
            StrainType::Stretch => "stretch",
            StrainType::Engineering => "engineering",
        }
    }

    /// Converts a strain value into a stretch
    pub fn to_stretch(&self, value: f64) -> f64 {
        match self {
            StrainType::Stretch => value,
            StrainType::Engineering => 1.0 + value,
        }
    }
}

impl FromStr for Protocol {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniaxial" => Ok(Protocol::Uniaxial),
            "simple_shear" => Ok(Protocol::SimpleShear),
            "biaxial" => Ok(Protocol::Biaxial),
            _ => Err(Error::InvalidProtocol(s.to_string())),
        }
    }
}

impl FromStr for StressType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cauchy" => Ok(StressType::Cauchy),
            "piola" => Ok(StressType::Piola),
            "2nd-piola" => Ok(StressType::SecondPiola),
            _ => Err(Error::InvalidStressType(s.to_string())),
        }
    }
}

impl FromStr for StrainType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stretch" => Ok(StrainType::Stretch),
            "engineering" => Ok(StrainType::Engineering),
            _ => Err(Error::InvalidStrainType(s.to_string())),
        }
    }
}

macro_rules! impl_string_conversions {
    ($t:ty) => {
        impl TryFrom<String> for $t {
            type Error = Error;
            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> String {
                value.name().to_string()
            }
        }

        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.name())
            }
        }
    };
}

impl_string_conversions!(Protocol);
impl_string_conversions!(StressType);
impl_string_conversions!(StrainType);

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
