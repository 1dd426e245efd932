use super::{simplify, CompiledFunction, Expr, Substitution, Symbol};
use crate::{Error, Result};
use russell_tensor::{Mandel, Tensor2};
use std::fmt;

/// Holds a 3×3 tensor of symbolic expressions (in canonical form)
#[derive(Clone, Debug, PartialEq)]
pub struct SymTensor {
    comps: [[Expr; 3]; 3],
}

impl SymTensor {
    /// Allocates a new instance from the components (simplifying them)
    pub fn from_components(comps: [[Expr; 3]; 3]) -> Self {
        SymTensor {
            comps: comps.map(|row| row.map(|e| simplify(&e))),
        }
    }

    /// Returns the identity tensor
    pub fn identity() -> Self {
        SymTensor::diagonal(Expr::one(), Expr::one(), Expr::one())
    }

    /// Returns a diagonal tensor
    pub fn diagonal(d0: Expr, d1: Expr, d2: Expr) -> Self {
        SymTensor::from_components([
            [d0, Expr::zero(), Expr::zero()],
            [Expr::zero(), d1, Expr::zero()],
            [Expr::zero(), Expr::zero(), d2],
        ])
    }

    /// Returns a component (zero-based indices)
    pub fn get(&self, i: usize, j: usize) -> &Expr {
        &self.comps[i][j]
    }

    /// Allocates a new instance from a component function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(usize, usize) -> Expr,
    {
        SymTensor::from_components(std::array::from_fn(|i| std::array::from_fn(|j| f(i, j))))
    }

    /// Returns the transpose
    pub fn transpose(&self) -> Self {
        SymTensor::from_fn(|i, j| self.comps[j][i].clone())
    }

    /// Returns the single contraction `self · other`
    pub fn dot(&self, other: &SymTensor) -> Self {
        SymTensor::from_fn(|i, j| Expr::Add((0..3).map(|k| self.comps[i][k].clone() * other.comps[k][j].clone()).collect()))
    }

    /// Returns `self + other`
    pub fn plus(&self, other: &SymTensor) -> Self {
        SymTensor::from_fn(|i, j| self.comps[i][j].clone() + other.comps[i][j].clone())
    }

    /// Returns `self − other`
    pub fn minus(&self, other: &SymTensor) -> Self {
        SymTensor::from_fn(|i, j| self.comps[i][j].clone() - other.comps[i][j].clone())
    }

    /// Returns `alpha · self`
    pub fn scaled(&self, alpha: &Expr) -> Self {
        SymTensor::from_fn(|i, j| alpha.clone() * self.comps[i][j].clone())
    }

    /// Returns the trace
    pub fn trace(&self) -> Expr {
        simplify(&Expr::Add((0..3).map(|i| self.comps[i][i].clone()).collect()))
    }

    fn cofactor(&self, i: usize, j: usize) -> Expr {
        let (r0, r1) = ((i + 1) % 3, (i + 2) % 3);
        let (c0, c1) = ((j + 1) % 3, (j + 2) % 3);
        let a = &self.comps;
        a[r0][c0].clone() * a[r1][c1].clone() - a[r0][c1].clone() * a[r1][c0].clone()
    }

    /// Returns the determinant
    pub fn determinant(&self) -> Expr {
        simplify(&Expr::Add((0..3).map(|j| self.comps[0][j].clone() * self.cofactor(0, j)).collect()))
    }

    /// Returns the inverse computed from the adjugate
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det.is_zero() {
            return Err(Error::SingularTensor);
        }
        let inv_det = det.recip();
        Ok(SymTensor::from_fn(|i, j| inv_det.clone() * self.cofactor(j, i)))
    }

    /// Replaces symbols in all components
    pub fn substitute(&self, mapping: &Substitution) -> Self {
        SymTensor::from_fn(|i, j| self.comps[i][j].replace(mapping))
    }

    /// Returns true if the symbol appears in any component
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.comps.iter().flatten().any(|e| e.contains(symbol))
    }

    /// Evaluates all components at a point
    ///
    /// # Input
    ///
    /// * `args` -- the ordered symbols
    /// * `x` -- the values of the symbols (same length as `args`)
    pub fn evaluate(&self, args: &[Symbol], x: &[f64]) -> Result<Tensor2> {
        let mut values = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                values[i][j] = CompiledFunction::new(&self.comps[i][j], args)?.call(x)?;
            }
        }
        Ok(Tensor2::from_matrix(&values, Mandel::General)?)
    }
}

impl fmt::Display for SymTensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.comps {
            writeln!(f, "[{}, {}, {}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SymTensor;
    use crate::symbolic::{simplify, Expr, Symbol};
    use crate::Error;
    use russell_lab::approx_eq;

    #[test]
    fn simple_shear_tensors_work() {
        let g = Symbol::new("gamma");
        let mut ff = SymTensor::identity();
        ff.comps[0][1] = Expr::sym(&g);
        assert_eq!(ff.determinant(), Expr::one());
        let bb = ff.dot(&ff.transpose());
        assert_eq!(*bb.get(0, 0), simplify(&(Expr::sym(&g).powi(2) + 1)));
        assert_eq!(*bb.get(0, 1), Expr::sym(&g));
        assert_eq!(bb.determinant(), Expr::one());
        let bi = bb.inverse().unwrap();
        assert_eq!(*bi.get(0, 1), simplify(&(-Expr::sym(&g))));
        assert_eq!(*bi.get(1, 1), simplify(&(Expr::sym(&g).powi(2) + 1)));
        assert_eq!(bb.dot(&bi), SymTensor::identity());
    }

    #[test]
    fn inverse_of_diagonal_works() {
        let lam = Symbol::new("lambda");
        let ff = SymTensor::diagonal(Expr::sym(&lam), Expr::from(2), Expr::one());
        let fi = ff.inverse().unwrap();
        assert_eq!(*fi.get(0, 0), simplify(&Expr::sym(&lam).recip()));
        assert_eq!(*fi.get(1, 1), Expr::rational(1, 2));
        assert_eq!(ff.trace(), simplify(&(Expr::sym(&lam) + 3)));
        let zz = SymTensor::diagonal(Expr::sym(&lam), Expr::zero(), Expr::one());
        assert!(matches!(zz.inverse().err(), Some(Error::SingularTensor)));
    }

    #[test]
    fn evaluate_works() {
        let lam = Symbol::new("lambda");
        let ff = SymTensor::diagonal(Expr::sym(&lam), Expr::sym(&lam).sqrt(), Expr::one());
        let tt = ff.evaluate(&[lam], &[4.0]).unwrap();
        approx_eq(tt.get(0, 0), 4.0, 1e-15);
        approx_eq(tt.get(1, 1), 2.0, 1e-15);
        approx_eq(tt.get(2, 2), 1.0, 1e-15);
        approx_eq(tt.get(0, 1), 0.0, 1e-15);
    }
}
