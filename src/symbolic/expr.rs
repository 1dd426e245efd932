use super::{Rational, Symbol};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Maps symbols onto the expressions replacing them
pub type Substitution = HashMap<Symbol, Expr>;

/// Defines a symbolic scalar expression
///
/// The constructors and operators only build the tree; call
/// [crate::symbolic::simplify] to bring an expression to its canonical form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Expr {
    /// Exact rational constant
    Num(Rational),

    /// Symbolic identifier
    Sym(Symbol),

    /// Sum of terms
    Add(Vec<Expr>),

    /// Product of factors
    Mul(Vec<Expr>),

    /// Base raised to a rational exponent
    Pow(Box<Expr>, Rational),
}

impl Expr {
    pub fn zero() -> Self {
        Expr::Num(Rational::zero())
    }

    pub fn one() -> Self {
        Expr::Num(Rational::one())
    }

    /// Returns a rational constant `num / den`
    pub fn rational(num: i64, den: i64) -> Self {
        Expr::Num(Rational::new(num as i128, den as i128))
    }

    /// Returns the symbol as an expression
    pub fn sym(symbol: &Symbol) -> Self {
        Expr::Sym(symbol.clone())
    }

    /// Returns `self^exponent`
    pub fn pow(self, exponent: Rational) -> Self {
        Expr::Pow(Box::new(self), exponent)
    }

    /// Returns `self^n`
    pub fn powi(self, n: i64) -> Self {
        self.pow(Rational::integer(n))
    }

    /// Returns `√self`
    pub fn sqrt(self) -> Self {
        self.pow(Rational::new(1, 2))
    }

    /// Returns `1 / self`
    pub fn recip(self) -> Self {
        self.powi(-1)
    }

    /// Returns true if the expression is the constant zero
    ///
    /// **Note:** Only canonical (simplified) expressions are reliably detected.
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Num(r) if r.is_zero())
    }

    /// Returns the constant value, if the expression is a number
    pub fn as_number(&self) -> Option<Rational> {
        match self {
            Expr::Num(r) => Some(r.clone()),
            _ => None,
        }
    }

    /// Returns true if the symbol appears anywhere in the expression
    pub fn contains(&self, symbol: &Symbol) -> bool {
        match self {
            Expr::Num(_) => false,
            Expr::Sym(s) => s == symbol,
            Expr::Add(terms) | Expr::Mul(terms) => terms.iter().any(|t| t.contains(symbol)),
            Expr::Pow(base, _) => base.contains(symbol),
        }
    }

    /// Returns the set of symbols appearing in the expression
    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        let mut set = BTreeSet::new();
        self.collect_symbols(&mut set);
        set
    }

    fn collect_symbols(&self, set: &mut BTreeSet<Symbol>) {
        match self {
            Expr::Num(_) => (),
            Expr::Sym(s) => {
                set.insert(s.clone());
            }
            Expr::Add(terms) | Expr::Mul(terms) => terms.iter().for_each(|t| t.collect_symbols(set)),
            Expr::Pow(base, _) => base.collect_symbols(set),
        }
    }

    /// Replaces symbols by expressions (without simplifying)
    pub fn replace(&self, mapping: &Substitution) -> Expr {
        match self {
            Expr::Num(_) => self.clone(),
            Expr::Sym(s) => match mapping.get(s) {
                Some(e) => e.clone(),
                None => self.clone(),
            },
            Expr::Add(terms) => Expr::Add(terms.iter().map(|t| t.replace(mapping)).collect()),
            Expr::Mul(terms) => Expr::Mul(terms.iter().map(|t| t.replace(mapping)).collect()),
            Expr::Pow(base, e) => Expr::Pow(Box::new(base.replace(mapping)), e.clone()),
        }
    }

    /// Computes the derivative with respect to a symbol (without simplifying)
    pub fn derivative(&self, var: &Symbol) -> Expr {
        if !self.contains(var) {
            return Expr::zero();
        }
        match self {
            Expr::Num(_) => Expr::zero(),
            Expr::Sym(_) => Expr::one(), // contains(var) holds, thus s == var
            Expr::Add(terms) => Expr::Add(terms.iter().map(|t| t.derivative(var)).collect()),
            Expr::Mul(factors) => {
                // product rule: Σᵢ (dfᵢ Πⱼ≠ᵢ fⱼ)
                let mut sum = Vec::new();
                for (i, fi) in factors.iter().enumerate() {
                    if !fi.contains(var) {
                        continue;
                    }
                    let mut product = vec![fi.derivative(var)];
                    for (j, fj) in factors.iter().enumerate() {
                        if j != i {
                            product.push(fj.clone());
                        }
                    }
                    sum.push(Expr::Mul(product));
                }
                Expr::Add(sum)
            }
            Expr::Pow(base, e) => Expr::Mul(vec![
                Expr::Num(e.clone()),
                Expr::Pow(base.clone(), e.clone() - Rational::one()),
                base.derivative(var),
            ]),
        }
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Num(Rational::integer(value))
    }
}

impl From<Rational> for Expr {
    fn from(value: Rational) -> Self {
        Expr::Num(value)
    }
}

impl From<&Symbol> for Expr {
    fn from(symbol: &Symbol) -> Self {
        Expr::Sym(symbol.clone())
    }
}

impl Add for Expr {
    type Output = Expr;
    fn add(self, rhs: Expr) -> Expr {
        Expr::Add(vec![self, rhs])
    }
}

impl Sub for Expr {
    type Output = Expr;
    fn sub(self, rhs: Expr) -> Expr {
        Expr::Add(vec![self, -rhs])
    }
}

impl Mul for Expr {
    type Output = Expr;
    fn mul(self, rhs: Expr) -> Expr {
        Expr::Mul(vec![self, rhs])
    }
}

impl Div for Expr {
    type Output = Expr;
    fn div(self, rhs: Expr) -> Expr {
        Expr::Mul(vec![self, rhs.recip()])
    }
}

impl Neg for Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        Expr::Mul(vec![Expr::from(-1), self])
    }
}

impl Add<i64> for Expr {
    type Output = Expr;
    fn add(self, rhs: i64) -> Expr {
        self + Expr::from(rhs)
    }
}

impl Sub<i64> for Expr {
    type Output = Expr;
    fn sub(self, rhs: i64) -> Expr {
        self + Expr::from(-rhs)
    }
}

impl Mul<i64> for Expr {
    type Output = Expr;
    fn mul(self, rhs: i64) -> Expr {
        Expr::from(rhs) * self
    }
}

impl Div<i64> for Expr {
    type Output = Expr;
    fn div(self, rhs: i64) -> Expr {
        Expr::rational(1, rhs) * self
    }
}

impl Mul<Expr> for i64 {
    type Output = Expr;
    fn mul(self, rhs: Expr) -> Expr {
        Expr::from(self) * rhs
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(r) => write!(f, "{}", r),
            Expr::Sym(s) => write!(f, "{}", s),
            Expr::Add(terms) => {
                if terms.is_empty() {
                    return write!(f, "0");
                }
                for (i, t) in terms.iter().enumerate() {
                    if i > 0 {
                        write!(f, " + ")?;
                    }
                    write!(f, "{}", t)?;
                }
                Ok(())
            }
            Expr::Mul(factors) => {
                if factors.is_empty() {
                    return write!(f, "1");
                }
                for (i, x) in factors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "*")?;
                    }
                    match x {
                        Expr::Add(_) => write!(f, "({})", x)?,
                        Expr::Num(r) if !r.is_integer() => write!(f, "({})", r)?,
                        _ => write!(f, "{}", x)?,
                    }
                }
                Ok(())
            }
            Expr::Pow(base, e) => {
                match base.as_ref() {
                    Expr::Sym(_) => write!(f, "{}", base)?,
                    Expr::Num(r) if r.is_integer() && !r.is_negative() => write!(f, "{}", base)?,
                    _ => write!(f, "({})", base)?,
                }
                if e.is_integer() && !e.is_negative() {
                    write!(f, "^{}", e)
                } else {
                    write!(f, "^({})", e)
                }
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Expr, Substitution};
    use crate::symbolic::{simplify, Rational, Symbol};

    #[test]
    fn operators_build_trees() {
        let x = Symbol::new("x");
        let e = Expr::sym(&x) * 2 - 3;
        assert!(e.contains(&x));
        assert_eq!(format!("{}", e), "2*x + -3");
    }

    #[test]
    fn free_symbols_and_replace_work() {
        let x = Symbol::new("x");
        let y = Symbol::new("y");
        let e = Expr::sym(&x) * Expr::sym(&y) + 1;
        assert_eq!(e.free_symbols().len(), 2);
        let mut mapping = Substitution::new();
        mapping.insert(y.clone(), Expr::from(4));
        let r = simplify(&e.replace(&mapping));
        assert!(!r.contains(&y));
        assert_eq!(simplify(&(r - (Expr::sym(&x) * 4 + 1))), Expr::zero());
    }

    #[test]
    fn derivative_works() {
        let x = Symbol::new("x");
        let y = Symbol::new("y");
        // d/dx (x³ y + √x) = 3x²y + ½x^(-½)
        let e = Expr::sym(&x).powi(3) * Expr::sym(&y) + Expr::sym(&x).sqrt();
        let d = simplify(&e.derivative(&x));
        let correct = Expr::from(3) * Expr::sym(&x).powi(2) * Expr::sym(&y)
            + Expr::rational(1, 2) * Expr::sym(&x).pow(Rational::new(-1, 2));
        assert_eq!(d, simplify(&correct));
        assert_eq!(simplify(&e.derivative(&Symbol::new("z"))), Expr::zero());
    }
}
