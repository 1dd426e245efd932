use super::{Expr, Rational, Symbol};
use num::bigint::BigInt;
use num::integer::Roots;
use num::traits::{Signed, ToPrimitive};
use std::collections::BTreeMap;

/// Maps each base (a symbol, an irreducible sum, or an irrational constant) onto its exponent
type Monomial = BTreeMap<Expr, Rational>;

/// Holds an expression in canonical form: a sum of monomials with rational coefficients
///
/// ```text
/// p = Σₖ cₖ Πᵢ xᵢ^eᵢₖ
/// ```
///
/// Exponents are rational; sums raised to negative or fractional powers are kept as
/// (canonical) bases; sums raised to non-negative integer powers are always expanded.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Poly {
    terms: BTreeMap<Monomial, Rational>,
}

/// Brings an expression to its canonical (expanded and collected) form
pub fn simplify(expr: &Expr) -> Expr {
    Poly::from_expr(expr).to_expr()
}

/// Computes the `n`-th root of a non-negative integer, if exact
fn exact_root(value: &BigInt, n: u32) -> Option<BigInt> {
    if n == 0 || value.is_negative() {
        return None;
    }
    let root = value.nth_root(n);
    if num::pow(root.clone(), n as usize) == *value {
        Some(root)
    } else {
        None
    }
}

/// Computes c^r exactly, if possible
fn rational_pow(c: &Rational, r: &Rational) -> Option<Rational> {
    if let Some(n) = r.to_integer() {
        return c.powi(n);
    }
    if c.is_one() {
        return Some(Rational::one());
    }
    let p = r.numer().to_i64()?;
    let q = r.denom().to_u32()?;
    let powered = c.powi(p)?;
    let num = exact_root(powered.numer(), q)?;
    let den = exact_root(powered.denom(), q)?;
    Some(Rational::from_big(num, den))
}

impl Poly {
    pub(crate) fn constant(value: Rational) -> Self {
        let mut poly = Poly::default();
        poly.add_term(Monomial::new(), value);
        poly
    }

    fn base(base: Expr, exponent: Rational) -> Self {
        let mut mono = Monomial::new();
        mono.insert(base, exponent);
        Poly::settle(mono, Rational::one())
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    fn add_term(&mut self, mono: Monomial, coeff: Rational) {
        if coeff.is_zero() {
            return;
        }
        let sum = match self.terms.get(&mono) {
            Some(c) => c.clone() + coeff,
            None => coeff,
        };
        if sum.is_zero() {
            self.terms.remove(&mono);
        } else {
            self.terms.insert(mono, sum);
        }
    }

    pub(crate) fn add(&self, other: &Poly) -> Poly {
        let mut res = self.clone();
        for (mono, c) in &other.terms {
            res.add_term(mono.clone(), c.clone());
        }
        res
    }

    pub(crate) fn scale(&self, alpha: Rational) -> Poly {
        let mut res = Poly::default();
        for (mono, c) in &self.terms {
            res.add_term(mono.clone(), c * &alpha);
        }
        res
    }

    pub(crate) fn mul(&self, other: &Poly) -> Poly {
        let mut res = Poly::default();
        for (ma, ca) in &self.terms {
            for (mb, cb) in &other.terms {
                let mut mono = ma.clone();
                for (base, e) in mb {
                    let exponent = match mono.get(base) {
                        Some(x) => x.clone() + e.clone(),
                        None => e.clone(),
                    };
                    mono.insert(base.clone(), exponent);
                }
                res = res.add(&Poly::settle(mono, ca * cb));
            }
        }
        res
    }

    /// Normalizes a single term
    ///
    /// Drops zero exponents, folds integer powers of constants into the coefficient,
    /// and expands sums carrying a positive integer exponent.
    fn settle(mono: Monomial, coeff: Rational) -> Poly {
        let mut kept = Monomial::new();
        let mut coeff = coeff;
        let mut expansions = Vec::new();
        for (base, e) in mono {
            if e.is_zero() {
                continue;
            }
            match (&base, e.to_integer()) {
                (Expr::Num(c), _) => match rational_pow(c, &e) {
                    Some(v) => coeff = coeff * v,
                    None => {
                        kept.insert(base, e);
                    }
                },
                (Expr::Add(_), Some(n)) if n > 0 => expansions.push((base, n as u32)),
                _ => {
                    kept.insert(base, e);
                }
            }
        }
        let mut res = Poly::default();
        res.add_term(kept, coeff);
        for (base, n) in expansions {
            res = res.mul(&Poly::from_expr(&base).powi(n));
        }
        res
    }

    pub(crate) fn powi(&self, n: u32) -> Poly {
        let mut res = Poly::constant(Rational::one());
        for _ in 0..n {
            res = res.mul(self);
        }
        res
    }

    pub(crate) fn pow(&self, r: Rational) -> Poly {
        if let Some(n) = r.to_integer() {
            if n >= 0 {
                return self.powi(n as u32);
            }
        }
        if let (1, Some((mono, c))) = (self.terms.len(), self.terms.iter().next()) {
            // (c Πᵢ xᵢ^eᵢ)^r = c^r Πᵢ xᵢ^(eᵢ r), assuming positive bases (stretches)
            let mut res = Monomial::new();
            for (base, e) in mono {
                res.insert(base.clone(), e * &r);
            }
            return match rational_pow(c, &r) {
                Some(cr) => Poly::settle(res, cr),
                None => {
                    let mut poly = Poly::settle(res, Rational::one());
                    poly = poly.mul(&Poly::base(Expr::Num(c.clone()), r));
                    poly
                }
            };
        }
        Poly::base(self.to_expr(), r)
    }

    pub(crate) fn from_expr(expr: &Expr) -> Poly {
        match expr {
            Expr::Num(r) => Poly::constant(r.clone()),
            Expr::Sym(_) => Poly::base(expr.clone(), Rational::one()),
            Expr::Add(terms) => terms
                .iter()
                .fold(Poly::default(), |acc, t| acc.add(&Poly::from_expr(t))),
            Expr::Mul(factors) => factors
                .iter()
                .fold(Poly::constant(Rational::one()), |acc, f| acc.mul(&Poly::from_expr(f))),
            Expr::Pow(base, r) => Poly::from_expr(base).pow(r.clone()),
        }
    }

    pub(crate) fn to_expr(&self) -> Expr {
        let mut terms: Vec<Expr> = self
            .terms
            .iter()
            .map(|(mono, c)| {
                let mut factors = Vec::new();
                if !c.is_one() || mono.is_empty() {
                    factors.push(Expr::Num(c.clone()));
                }
                for (base, e) in mono {
                    if e.is_one() {
                        factors.push(base.clone());
                    } else {
                        factors.push(Expr::Pow(Box::new(base.clone()), e.clone()));
                    }
                }
                if factors.len() == 1 {
                    factors.swap_remove(0)
                } else {
                    Expr::Mul(factors)
                }
            })
            .collect();
        match terms.len() {
            0 => Expr::zero(),
            1 => terms.swap_remove(0),
            _ => Expr::Add(terms),
        }
    }

    /// Splits the polynomial into coefficients of integer powers of `var`
    ///
    /// Returns None if `var` appears inside a base (e.g., under a root or in a
    /// denominator) or with a negative or fractional exponent.
    pub(crate) fn coefficients(&self, var: &Symbol) -> Option<BTreeMap<u32, Poly>> {
        let key = Expr::Sym(var.clone());
        let mut res: BTreeMap<u32, Poly> = BTreeMap::new();
        for (mono, c) in &self.terms {
            let mut rest = mono.clone();
            let degree = match rest.remove(&key) {
                Some(e) => match e.to_integer() {
                    Some(n) if n > 0 => n as u32,
                    _ => return None,
                },
                None => 0,
            };
            if rest.keys().any(|base| base.contains(var)) {
                return None;
            }
            let entry = res.entry(degree).or_default();
            entry.add_term(rest, c.clone());
        }
        res.retain(|_, p| !p.is_zero());
        Some(res)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
