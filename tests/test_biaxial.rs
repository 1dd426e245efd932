use libela::*;
use russell_lab::{approx_eq, Matrix, Vector};

fn all_models() -> Vec<(ModelHyperelastic, Vec<f64>)> {
    vec![
        (ModelHyperelastic::new(&ParamHyperelastic::NeoHookean { compressible: false }), vec![0.5]),
        (ModelHyperelastic::new(&ParamHyperelastic::MooneyRivlin), vec![0.3, 0.1]),
        (ModelHyperelastic::new(&ParamHyperelastic::KlosnerSegal), vec![0.3, 0.1, 0.01, 0.001]),
        (ModelHyperelastic::new(&ParamHyperelastic::Yeoh), vec![0.5, -0.01, 0.001]),
        (
            ModelHyperelastic::new(&ParamHyperelastic::Polynomial),
            vec![0.3, 0.1, 0.01, 0.02, 0.03, 0.001, 0.002, 0.003, 0.004],
        ),
    ]
}

#[test]
fn test_biaxial_reference_state() -> Result<()> {
    // Biaxial test at λ1 = λ2 = 1
    //
    // TEST GOAL
    //
    // Verifies that all incompressible models are stress-free in the reference state
    // and that equibiaxial stretching gives σ11 = σ22.

    let opt = StressOptions::new(Protocol::Biaxial);
    let strain = StrainInput::Rows(Matrix::from(&[[1.0, 1.2, 1.5], [1.0, 1.2, 1.5]]));
    for (model, params) in all_models() {
        let res = stress(model.base.as_ref(), &strain, &params, &opt)?;
        let (s11, s22) = res.values.pair().unwrap();
        approx_eq(s11[0], 0.0, 1e-14);
        approx_eq(s22[0], 0.0, 1e-14);
        for j in 1..3 {
            approx_eq(s11[j], s22[j], 1e-13);
            assert!(s11[j] > 0.0);
        }
        assert_eq!(res.components[0].arg_names()[..2], ["lambda1", "lambda2"]);
        assert_eq!(res.components[1].component, (1, 1));
    }
    Ok(())
}

#[test]
fn test_biaxial_neo_hookean() -> Result<()> {
    // Incompressible Neo-Hookean under biaxial stretching
    //
    // σ11 = μ (λ1² − 1/(λ1 λ2)²),  σ22 = μ (λ2² − 1/(λ1 λ2)²)
    //
    // TEST GOAL
    //
    // Verifies the pressure elimination from σ33 = 0 and the row-wise evaluation.

    let model = ModelNeoHookean::new(false);
    let mu = 2.0;
    let rows = [[1.1, 1.5, 2.0], [1.0, 1.2, 0.9]];
    let strain = StrainInput::Rows(Matrix::from(&rows));
    let res = stress(&model, &strain, &[mu], &StressOptions::new(Protocol::Biaxial))?;
    let (s11, s22) = res.values.pair().unwrap();
    for j in 0..3 {
        let (l1, l2) = (rows[0][j], rows[1][j]);
        let l3 = 1.0 / (l1 * l2);
        approx_eq(s11[j], mu * (l1 * l1 - l3 * l3), 1e-14);
        approx_eq(s22[j], mu * (l2 * l2 - l3 * l3), 1e-14);
    }
    let tt = res.tensor_at(&[1.5, 1.2], &[mu])?;
    approx_eq(tt.get(0, 0), s11[1], 1e-14);
    approx_eq(tt.get(2, 2), 0.0, 1e-14);
    Ok(())
}

#[test]
fn test_biaxial_stress_measures() -> Result<()> {
    // Biaxial test with the Piola and 2nd-Piola stresses
    //
    // P11 = σ11/λ1,  P22 = σ22/λ2,  S11 = σ11/λ1²,  S22 = σ22/λ2²
    //
    // TEST GOAL
    //
    // Verifies the pressure elimination on the projected tensor (T33 = 0) by comparing
    // the Piola and 2nd-Piola components with the Cauchy ones.

    let rows = [[1.3, 1.1, 0.95], [0.9, 1.2, 1.05]];
    let strain = StrainInput::Rows(Matrix::from(&rows));
    let cauchy = StressOptions::new(Protocol::Biaxial);
    let piola = StressOptions::new(Protocol::Biaxial).with_stress_type(StressType::Piola);
    let second = StressOptions::new(Protocol::Biaxial).with_stress_type(StressType::SecondPiola);
    for (model, params) in all_models() {
        let sig = stress(model.base.as_ref(), &strain, &params, &cauchy)?;
        let pp = stress(model.base.as_ref(), &strain, &params, &piola)?;
        let ss = stress(model.base.as_ref(), &strain, &params, &second)?;
        let (sig11, sig22) = sig.values.pair().unwrap();
        let (p11, p22) = pp.values.pair().unwrap();
        let (s11, s22) = ss.values.pair().unwrap();
        for j in 0..3 {
            let (l1, l2) = (rows[0][j], rows[1][j]);
            approx_eq(p11[j], sig11[j] / l1, 1e-12);
            approx_eq(p22[j], sig22[j] / l2, 1e-12);
            approx_eq(s11[j], sig11[j] / (l1 * l1), 1e-12);
            approx_eq(s22[j], sig22[j] / (l2 * l2), 1e-12);
        }
        let tt = pp.tensor_at(&[rows[0][0], rows[1][0]], &params)?;
        approx_eq(tt.get(2, 2), 0.0, 1e-12);
    }
    Ok(())
}

#[test]
fn test_biaxial_captures_errors() -> Result<()> {
    // Biaxial test with invalid input
    //
    // TEST GOAL
    //
    // Verifies the strain shape check and the unsolvable constraint of compressible
    // models without lateral contraction.

    let model = ModelNeoHookean::new(false);
    let opt = StressOptions::new(Protocol::Biaxial);
    assert_eq!(
        stress(&model, &StrainInput::Array(Vector::from(&[1.0, 1.2])), &[1.0], &opt)
            .err()
            .map(|e| e.to_string()),
        Some("invalid strain input: biaxial takes a matrix with two rows".to_string())
    );
    let three_rows = StrainInput::Rows(Matrix::from(&[[1.0], [1.0], [1.0]]));
    assert!(matches!(
        stress(&model, &three_rows, &[1.0], &opt),
        Err(Error::InvalidStrainShape(..))
    ));

    // P does not appear in σ33 of compressible models
    let compressible = ModelNeoHookean::new(true);
    let strain = StrainInput::Rows(Matrix::from(&[[1.1], [1.1]]));
    assert!(matches!(
        stress(&compressible, &strain, &[10.0, 1.0], &opt),
        Err(Error::UnsolvableConstraint { .. })
    ));
    Ok(())
}

#[test]
fn test_biaxial_compressible_lateral_contraction() -> Result<()> {
    // Compressible Neo-Hookean under biaxial stretching with free thickness
    //
    // F = diag(λ1, λ2, t) with t found from σ33 = 0
    //
    // TEST GOAL
    //
    // Verifies the traction-free condition and the parameter ordering [K, μ].

    let model = ModelNeoHookean::new(true);
    let (kk, mu) = (50.0, 1.0);
    let opt = StressOptions::new(Protocol::Biaxial).with_lateral_contraction(true);
    let strain = StrainInput::Rows(Matrix::from(&[[1.2], [1.1]]));
    let res = stress(&model, &strain, &[kk, mu], &opt)?;
    assert_eq!(res.components[0].arg_names(), &["lambda1", "lambda2", "a_K", "a_mu"]);
    assert!(res.kinematics.lateral.is_none());
    let tt = res.tensor_at(&[1.2, 1.1], &[kk, mu])?;
    approx_eq(tt.get(2, 2), 0.0, 1e-12);
    let (s11, _) = res.values.pair().unwrap();
    approx_eq(tt.get(0, 0), s11[0], 1e-12);
    Ok(())
}
