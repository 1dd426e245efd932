use libela::*;
use russell_lab::{approx_eq, Matrix, Vector};

#[test]
fn test_large_bulk_modulus_uniaxial() -> Result<()> {
    // Compressible Neo-Hookean with free lateral contraction
    //
    // F = diag(λ, √s, √s) with s found from σ22 = 0:
    //
    // σ11 = μ (λ² − 1/λ) + μ² / (K λ²)
    //
    // TEST GOAL
    //
    // Verifies that the compressible response approaches the incompressible one
    // as the bulk modulus grows and that J approaches one.

    let mu = 1.0;
    let lambda = Vector::from(&[0.9, 1.5, 2.0]);
    let strain = StrainInput::Array(lambda.clone());
    let incompressible = ModelNeoHookean::new(false);
    let reference = stress(&incompressible, &strain, &[mu], &StressOptions::new(Protocol::Uniaxial))?;
    let reference = reference.values.array().unwrap().clone();

    let model = ModelNeoHookean::new(true);
    let opt = StressOptions::new(Protocol::Uniaxial).with_lateral_contraction(true);
    let mut previous = f64::MAX;
    for kk in [1e2, 1e4, 1e8] {
        let res = stress(&model, &strain, &[kk, mu], &opt)?;
        let values = res.values.array().unwrap();
        let mut error = 0.0;
        for i in 0..lambda.dim() {
            let l = lambda[i];
            approx_eq(values[i], mu * (l * l - 1.0 / l) + mu * mu / (kk * l * l), 1e-12);
            error = f64::max(error, f64::abs(values[i] - reference[i]));
        }
        assert!(error < previous);
        previous = error;

        // J = 1 − μ/(K λ)
        let sym = invariants();
        let args = [sym.lambda.clone(), model.parameter_ordering()[0].clone(), model.parameter_ordering()[1].clone()];
        let jj = CompiledFunction::new(&res.kinematics.jj, &args)?;
        approx_eq(jj.call(&[2.0, kk, mu])?, 1.0 - mu / (kk * 2.0), 1e-14);
    }
    assert!(previous < 1e-7);
    Ok(())
}

#[test]
fn test_large_bulk_modulus_biaxial() -> Result<()> {
    // Compressible Neo-Hookean under biaxial stretching with free thickness
    //
    // TEST GOAL
    //
    // Verifies that the compressible response approaches the incompressible one
    // as the bulk modulus grows.

    let mu = 0.5;
    let strain = StrainInput::Rows(Matrix::from(&[[1.1, 1.5], [1.2, 1.0]]));
    let incompressible = ModelNeoHookean::new(false);
    let reference = stress(&incompressible, &strain, &[mu], &StressOptions::new(Protocol::Biaxial))?;
    let (r11, r22) = reference.values.pair().unwrap();

    let model = ModelNeoHookean::new(true);
    let opt = StressOptions::new(Protocol::Biaxial).with_lateral_contraction(true);
    let res = stress(&model, &strain, &[1e7, mu], &opt)?;
    let (s11, s22) = res.values.pair().unwrap();
    for j in 0..2 {
        approx_eq(s11[j], r11[j], 1e-5);
        approx_eq(s22[j], r22[j], 1e-5);
    }
    Ok(())
}
