use libela::*;

#[test]
fn test_options_from_names() -> Result<()> {
    // Parsing of the evaluation options
    //
    // TEST GOAL
    //
    // Verifies the names of protocols, stress types and strain types, and the
    // errors of unknown names.

    let opt = StressOptions::from_names("biaxial", "2nd-piola", "engineering")?;
    assert_eq!(opt.protocol, Protocol::Biaxial);
    assert_eq!(opt.stress_type, StressType::SecondPiola);
    assert_eq!(opt.strain_type, StrainType::Engineering);
    assert_eq!(opt.plot, false);

    let err = StressOptions::from_names("quadaxial", "cauchy", "stretch").err().unwrap();
    assert!(matches!(err, Error::InvalidProtocol(..)));
    let message = err.to_string();
    for name in ["uniaxial", "simple_shear", "biaxial"] {
        assert!(message.contains(name));
    }

    assert!(matches!(
        StressOptions::from_names("uniaxial", "bogus", "stretch"),
        Err(Error::InvalidStressType(..))
    ));
    assert!(matches!(
        StressOptions::from_names("uniaxial", "cauchy", "bogus"),
        Err(Error::InvalidStrainType(..))
    ));
    Ok(())
}

#[test]
fn test_options_from_json() -> Result<()> {
    // Options given in a JSON job
    //
    // TEST GOAL
    //
    // Verifies defaults and the deserialization errors.

    let opt: StressOptions = serde_json::from_str(r#"{"protocol": "simple_shear"}"#)?;
    assert_eq!(opt.protocol, Protocol::SimpleShear);
    assert_eq!(opt.stress_type, StressType::Cauchy);
    assert_eq!(opt.strain_type, StrainType::Stretch);
    assert_eq!(opt.lateral_contraction, false);
    let res: std::result::Result<StressOptions, _> = serde_json::from_str(r#"{"protocol": "quadaxial"}"#);
    assert!(res.is_err());
    Ok(())
}

#[test]
fn test_parameter_count() -> Result<()> {
    // Wrong number of parameters
    //
    // TEST GOAL
    //
    // Verifies the errors for compressible and incompressible models.

    let strain = StrainInput::Scalar(1.5);
    let opt = StressOptions::new(Protocol::Uniaxial);
    let compressible = ModelNeoHookean::new(true);
    assert_eq!(
        stress(&compressible, &strain, &[1.0], &opt).err().map(|e| e.to_string()),
        Some("invalid number of parameters: 2 required, 1 given".to_string())
    );
    let mooney = ModelMooneyRivlin::new();
    assert!(matches!(
        stress(&mooney, &strain, &[1.0], &opt),
        Err(Error::InvalidParameterCount { expected: 2, found: 1 })
    ));
    assert_eq!(
        stress(&mooney, &strain, &[1.0, 0.5, 0.2], &opt).err().map(|e| e.to_string()),
        Some("invalid number of parameters: 2 required, 3 given".to_string())
    );
    Ok(())
}
