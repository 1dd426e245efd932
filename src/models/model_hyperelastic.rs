use super::{EnergyModel, ModelKlosnerSegal, ModelMooneyRivlin, ModelNeoHookean, ModelPolynomial, ModelYeoh};
use serde::{Deserialize, Serialize};

/// Defines the available hyperelastic models
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamHyperelastic {
    NeoHookean {
        #[serde(default)]
        compressible: bool, // adds the volumetric term K/2 (J − 1)²
    },
    MooneyRivlin,
    KlosnerSegal,
    Yeoh,
    Polynomial,
}

/// Implements a hyperelastic model selected by its parameters
pub struct ModelHyperelastic {
    /// Holds the energy model
    pub base: Box<dyn EnergyModel>,
}

impl ModelHyperelastic {
    /// Allocates a new instance
    pub fn new(param: &ParamHyperelastic) -> Self {
        let base: Box<dyn EnergyModel> = match *param {
            ParamHyperelastic::NeoHookean { compressible } => Box::new(ModelNeoHookean::new(compressible)),
            ParamHyperelastic::MooneyRivlin => Box::new(ModelMooneyRivlin::new()),
            ParamHyperelastic::KlosnerSegal => Box::new(ModelKlosnerSegal::new()),
            ParamHyperelastic::Yeoh => Box::new(ModelYeoh::new()),
            ParamHyperelastic::Polynomial => Box::new(ModelPolynomial::new()),
        };
        ModelHyperelastic { base }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ModelHyperelastic, ParamHyperelastic};

    #[test]
    fn new_works() {
        let cases = [
            (ParamHyperelastic::NeoHookean { compressible: false }, "neo_hookean", 1),
            (ParamHyperelastic::NeoHookean { compressible: true }, "neo_hookean_compressible", 2),
            (ParamHyperelastic::MooneyRivlin, "mooney_rivlin", 2),
            (ParamHyperelastic::KlosnerSegal, "klosner_segal", 4),
            (ParamHyperelastic::Yeoh, "yeoh", 3),
            (ParamHyperelastic::Polynomial, "polynomial", 9),
        ];
        for (param, name, n_param) in cases {
            let model = ModelHyperelastic::new(&param);
            assert_eq!(model.base.name(), name);
            assert_eq!(model.base.parameter_ordering().len(), n_param);
        }
    }

    #[test]
    fn deserialize_works() {
        let param: ParamHyperelastic = serde_json::from_str(r#"{"neo_hookean": {"compressible": true}}"#).unwrap();
        assert_eq!(param, ParamHyperelastic::NeoHookean { compressible: true });
        let param: ParamHyperelastic = serde_json::from_str(r#""yeoh""#).unwrap();
        assert_eq!(param, ParamHyperelastic::Yeoh);
    }
}
