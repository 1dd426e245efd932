use libela::*;
use russell_lab::{approx_eq, Vector};

#[test]
fn test_simple_shear_neo_hookean_and_mooney_rivlin() -> Result<()> {
    // Simple shear F = I + γ e1⊗e2
    //
    // Neo-Hookean:    τ = μ γ
    // Mooney-Rivlin:  τ = 2 (c10 + c01) γ
    //
    // TEST GOAL
    //
    // Verifies the shear component and the argument ordering [γ, sorted parameters].

    let opt = StressOptions::new(Protocol::SimpleShear);
    let gamma = Vector::from(&[0.0, 0.25, 0.5, 1.0]);

    let neo = ModelNeoHookean::new(false);
    let res = stress(&neo, &StrainInput::Scalar(1.0), &[1.0], &opt)?;
    approx_eq(res.values.scalar().unwrap(), 1.0, 1e-15);
    assert_eq!(res.components[0].component, (0, 1));
    assert_eq!(res.components[0].arg_names(), &["gamma", "a_mu"]);

    let mooney = ModelMooneyRivlin::new();
    let (c10, c01) = (0.3, 0.1);
    let res = stress(&mooney, &StrainInput::Array(gamma.clone()), &[c10, c01], &opt)?;
    let values = res.values.array().unwrap();
    for i in 0..gamma.dim() {
        approx_eq(values[i], 2.0 * (c10 + c01) * gamma[i], 1e-15);
    }

    // the first Piola shear stress equals the Cauchy shear stress
    let opt = opt.with_stress_type(StressType::Piola);
    let res = stress(&mooney, &StrainInput::Array(gamma.clone()), &[c10, c01], &opt)?;
    let values = res.values.array().unwrap();
    for i in 0..gamma.dim() {
        approx_eq(values[i], 2.0 * (c10 + c01) * gamma[i], 1e-15);
    }
    Ok(())
}

#[test]
fn test_simple_shear_captures_errors() -> Result<()> {
    // Simple shear with unconstrained pressure or unused parameters
    //
    // TEST GOAL
    //
    // Verifies the errors of the shear projection.

    let neo = ModelNeoHookean::new(false);

    // the pressure survives in S12 = σ12 − γ (σ22 − 2P)
    let opt = StressOptions::new(Protocol::SimpleShear).with_stress_type(StressType::SecondPiola);
    assert_eq!(
        stress(&neo, &StrainInput::Scalar(0.5), &[1.0], &opt).err().map(|e| e.to_string()),
        Some("the pressure field cannot be eliminated from the 2nd-piola stress in simple_shear".to_string())
    );

    // too many parameters for the extracted symbols
    let opt = StressOptions::new(Protocol::SimpleShear);
    assert!(matches!(
        stress(&neo, &StrainInput::Scalar(0.5), &[1.0, 2.0], &opt),
        Err(Error::ParameterSymbolMismatch {
            extracted: 1,
            supplied: 2,
            ..
        })
    ));

    // the bulk modulus does not appear in σ12 because J = 1
    let compressible = ModelNeoHookean::new(true);
    let res = stress(&compressible, &StrainInput::Scalar(0.5), &[100.0, 1.0], &opt);
    match res {
        Err(Error::ParameterSymbolMismatch { names, .. }) => assert_eq!(names, &["a_mu"]),
        _ => panic!("ParameterSymbolMismatch should be returned"),
    }
    Ok(())
}

#[test]
fn test_simple_shear_invariants() -> Result<()> {
    // Invariants of simple shear
    //
    // I1 = I2 = 3 + γ²,  J = 1
    //
    // TEST GOAL
    //
    // Verifies the kinematics returned with the response.

    let model = ModelYeoh::new();
    let opt = StressOptions::new(Protocol::SimpleShear);
    let res = stress(&model, &StrainInput::Scalar(0.2), &[0.5, 0.0, 0.0], &opt)?;
    let gamma = invariants().gamma.clone();
    let i1 = CompiledFunction::new(&res.kinematics.i1, &[gamma.clone()])?;
    let i2 = CompiledFunction::new(&res.kinematics.i2, &[gamma])?;
    approx_eq(i1.call(&[0.2])?, 3.04, 1e-15);
    approx_eq(i2.call(&[0.2])?, 3.04, 1e-15);
    assert_eq!(res.kinematics.jj, Expr::one());
    // Yeoh with c20 = c30 = 0 reduces to Neo-Hookean with μ = 2 c10
    approx_eq(res.values.scalar().unwrap(), 0.2, 1e-15);
    Ok(())
}
