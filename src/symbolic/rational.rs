use num::bigint::BigInt;
use num::rational::BigRational;
use num::traits::{One, Signed, ToPrimitive, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Holds an exact rational number `num / den` in lowest terms with `den > 0`
///
/// The numerator and denominator are arbitrary-precision integers, thus the
/// arithmetic never overflows.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(BigRational);

impl Rational {
    /// Allocates a new rational number
    ///
    /// # Panics
    ///
    /// A panic will occur if `den` is zero.
    pub fn new(num: i128, den: i128) -> Self {
        assert!(den != 0, "the denominator of a rational number must not be zero");
        Rational(BigRational::new(BigInt::from(num), BigInt::from(den)))
    }

    /// Allocates a new rational number from arbitrary-precision integers (`den != 0`)
    pub(crate) fn from_big(num: BigInt, den: BigInt) -> Self {
        Rational(BigRational::new(num, den))
    }

    /// Returns an integer as a rational number
    pub fn integer(value: i64) -> Self {
        Rational(BigRational::from_integer(BigInt::from(value)))
    }

    pub fn zero() -> Self {
        Rational(BigRational::zero())
    }

    pub fn one() -> Self {
        Rational(BigRational::one())
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Returns the integer value if the denominator is one and the value fits an i64
    pub fn to_integer(&self) -> Option<i64> {
        if self.0.is_integer() {
            self.0.numer().to_i64()
        } else {
            None
        }
    }

    /// Returns the closest floating-point number (NaN if out of range)
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }

    /// Returns the reciprocal or None if the number is zero
    pub fn recip(&self) -> Option<Self> {
        if self.0.is_zero() {
            None
        } else {
            Some(Rational(self.0.recip()))
        }
    }

    /// Raises the number to an integer power
    ///
    /// Returns None for a negative power of zero.
    pub fn powi(&self, n: i64) -> Option<Self> {
        let base = if n < 0 { self.recip()? } else { self.clone() };
        let exponent = usize::try_from(n.unsigned_abs()).ok()?;
        Some(Rational(num::pow(base.0, exponent)))
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational::integer(value)
    }
}

impl Add for Rational {
    type Output = Rational;
    fn add(self, rhs: Rational) -> Rational {
        Rational(self.0 + rhs.0)
    }
}

impl Sub for Rational {
    type Output = Rational;
    fn sub(self, rhs: Rational) -> Rational {
        Rational(self.0 - rhs.0)
    }
}

impl Mul for Rational {
    type Output = Rational;
    fn mul(self, rhs: Rational) -> Rational {
        Rational(self.0 * rhs.0)
    }
}

impl<'a> Mul<&'a Rational> for &'a Rational {
    type Output = Rational;
    fn mul(self, rhs: &'a Rational) -> Rational {
        Rational(&self.0 * &rhs.0)
    }
}

impl Div for Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// A panic will occur if `rhs` is zero.
    fn div(self, rhs: Rational) -> Rational {
        Rational(self.0 / rhs.0)
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Rational;
    use num::bigint::BigInt;

    #[test]
    fn new_reduces_and_normalizes_sign() {
        let r = Rational::new(6, -4);
        assert_eq!(*r.numer(), BigInt::from(-3));
        assert_eq!(*r.denom(), BigInt::from(2));
        assert_eq!(format!("{}", r), "-3/2");
        assert_eq!(format!("{}", Rational::new(8, 4)), "2");
    }

    #[test]
    fn arithmetic_works() {
        let a = Rational::new(1, 2);
        let b = Rational::new(1, 3);
        assert_eq!(a.clone() + b.clone(), Rational::new(5, 6));
        assert_eq!(a.clone() - b.clone(), Rational::new(1, 6));
        assert_eq!(&a * &b, Rational::new(1, 6));
        assert_eq!(a.clone() / b.clone(), Rational::new(3, 2));
        assert_eq!(-a.clone(), Rational::new(-1, 2));
        assert!(b < a);
    }

    #[test]
    fn powi_and_recip_work() {
        let a = Rational::new(2, 3);
        assert_eq!(a.powi(3), Some(Rational::new(8, 27)));
        assert_eq!(a.powi(-2), Some(Rational::new(9, 4)));
        assert_eq!(a.powi(0), Some(Rational::one()));
        assert_eq!(Rational::zero().powi(-1), None);
        assert_eq!(Rational::zero().recip(), None);
        assert_eq!(Rational::integer(7).to_integer(), Some(7));
        assert_eq!(Rational::new(1, 2).to_integer(), None);
    }

    #[test]
    fn large_values_do_not_overflow() {
        // (2^100 / 3^70)² and the comparison of two nearby huge fractions
        let big = Rational::integer(2).powi(100).unwrap() * Rational::integer(3).powi(-70).unwrap();
        let squared = &big * &big;
        assert_eq!(squared, Rational::integer(2).powi(200).unwrap() * Rational::integer(3).powi(-140).unwrap());
        let x = Rational::new(i128::MAX, i128::MAX - 1);
        let y = Rational::new(i128::MAX - 1, i128::MAX - 2);
        assert!(x < y);
        let sum = x.clone() + y.clone();
        assert_eq!(sum - y, x);
        assert_eq!(Rational::integer(2).powi(100).unwrap().to_integer(), None);
        assert!(squared.to_f64() > 0.0);
    }
}
