//! Implements the strain-energy models

mod model_energy;
mod model_hyperelastic;
mod model_klosner_segal;
mod model_mooney_rivlin;
mod model_neo_hookean;
mod model_polynomial;
mod model_yeoh;
pub use crate::models::model_energy::*;
pub use crate::models::model_hyperelastic::*;
pub use crate::models::model_klosner_segal::*;
pub use crate::models::model_mooney_rivlin::*;
pub use crate::models::model_neo_hookean::*;
pub use crate::models::model_polynomial::*;
pub use crate::models::model_yeoh::*;
