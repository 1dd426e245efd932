//! Error types for stress derivation and evaluation

use thiserror::Error;

/// Result type alias using the libela Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while deriving, compiling, or evaluating stresses
#[derive(Error, Debug)]
pub enum Error {
    /// Unknown strain measure
    #[error("invalid strain type `{0}`; use 'engineering' or 'stretch'")]
    InvalidStrainType(String),

    /// Unknown loading protocol
    #[error("unknown protocol `{0}`; supported protocols are 'uniaxial', 'simple_shear', 'biaxial'")]
    InvalidProtocol(String),

    /// Unknown stress measure
    #[error("invalid stress type `{0}`; use 'cauchy', 'piola' or '2nd-piola'")]
    InvalidStressType(String),

    /// Wrong number of material parameters
    #[error("invalid number of parameters: {expected} required, {found} given")]
    InvalidParameterCount { expected: usize, found: usize },

    /// The equilibrium constraint has no closed-form solution
    #[error("the constraint on `{variable}` has no closed-form solution ({protocol})")]
    UnsolvableConstraint { protocol: String, variable: String },

    /// The free symbols of a stress expression do not match the supplied parameters
    #[error("the stress expression depends on {extracted} parameters {names:?}, but {supplied} were given")]
    ParameterSymbolMismatch {
        extracted: usize,
        supplied: usize,
        names: Vec<String>,
    },

    /// The pressure field survives in a component that is not constrained
    #[error("the pressure field cannot be eliminated from the {stress_type} stress in {protocol}")]
    UnresolvedPressure { protocol: String, stress_type: String },

    /// An expression refers to a symbol missing from the argument list
    #[error("symbol `{0}` is not bound to any argument")]
    UnboundSymbol(String),

    /// The strain input does not fit the protocol
    #[error("invalid strain input: {0}")]
    InvalidStrainShape(&'static str),

    /// A symbolic tensor has a zero determinant
    #[error("cannot invert a tensor with zero determinant")]
    SingularTensor,

    /// Errors reported by the numerical and plotting libraries
    #[error("{0}")]
    Numeric(&'static str),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<&'static str> for Error {
    fn from(message: &'static str) -> Self {
        Error::Numeric(message)
    }
}
