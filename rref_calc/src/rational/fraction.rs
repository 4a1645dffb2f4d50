use std::fmt;

use serde::Serialize;

use crate::error::{CalcError, CalcResult};
use crate::EPSILON;

// 10^0 through 10^14 are tried as denominators; a value that matches none of
// them falls through to 10^15.
const MAX_DECIMAL_DIGITS: u32 = 15;

/// A display-only fraction: `numerator / denominator` with the denominator
/// kept positive and both parts reduced by their gcd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rational {
    numerator: i128,
    denominator: i128,
}

impl Rational {
    pub fn new(numerator: i128, denominator: i128) -> CalcResult<Self> {
        if denominator == 0 {
            return Err(CalcError::InvalidFraction);
        }
        let (numerator, denominator) = if denominator < 0 {
            numerator
                .checked_neg()
                .zip(denominator.checked_neg())
                .ok_or(CalcError::FractionOverflow)?
        } else {
            (numerator, denominator)
        };
        Ok(Self::reduced(numerator, denominator))
    }

    pub fn zero() -> Self {
        Self {
            numerator: 0,
            denominator: 1,
        }
    }

    /// Approximates `value` by searching powers of ten as denominators.
    ///
    /// Exact for terminating decimals up to 14 fractional digits. Values
    /// such as 1/3 come back as a long decimal fraction
    /// (333333333333333/10^15), never as a low-denominator fraction.
    pub fn from_decimal(value: f64, tolerance: f64) -> Self {
        if value.abs() < tolerance {
            return Self::zero();
        }
        let sign = if value < 0.0 { -1 } else { 1 };
        let magnitude = value.abs();
        let mut denominator: i128 = 1;
        let mut scaled = magnitude;
        for _ in 0..MAX_DECIMAL_DIGITS {
            if (scaled - scaled.round()).abs() < tolerance {
                break;
            }
            denominator *= 10;
            scaled = magnitude * denominator as f64;
        }
        Self::reduced(sign * scaled.round() as i128, denominator)
    }

    pub fn numerator(&self) -> i128 {
        self.numerator
    }

    pub fn denominator(&self) -> i128 {
        self.denominator
    }

    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// `self * rhs`, or `FractionOverflow` when the reduced result does not
    /// fit in `i128`.
    pub fn checked_mul(self, rhs: Rational) -> CalcResult<Rational> {
        let left = common_divisor(self.numerator, rhs.denominator);
        let right = common_divisor(rhs.numerator, self.denominator);
        let numerator = (self.numerator / left).checked_mul(rhs.numerator / right);
        let denominator = (self.denominator / right).checked_mul(rhs.denominator / left);
        match (numerator, denominator) {
            (Some(n), Some(d)) => Ok(Self::reduced(n, d)),
            _ => Err(CalcError::FractionOverflow),
        }
    }

    /// `self + rhs`, or `FractionOverflow` when the reduced result does not
    /// fit in `i128`.
    pub fn checked_add(self, rhs: Rational) -> CalcResult<Rational> {
        let shared = common_divisor(self.denominator, rhs.denominator);
        let (left_scale, right_scale) = (rhs.denominator / shared, self.denominator / shared);
        let numerator = self
            .numerator
            .checked_mul(left_scale)
            .zip(rhs.numerator.checked_mul(right_scale))
            .and_then(|(a, b)| a.checked_add(b));
        let denominator = self.denominator.checked_mul(left_scale);
        match (numerator, denominator) {
            (Some(n), Some(d)) => Ok(Self::reduced(n, d)),
            _ => Err(CalcError::FractionOverflow),
        }
    }

    // denominator must be positive
    fn reduced(numerator: i128, denominator: i128) -> Self {
        let divisor = common_divisor(numerator, denominator);
        Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        }
    }
}

// gcd of the magnitudes. Never exceeds `b` when `b > 0`, so it fits back in
// `i128` for every positive denominator.
fn common_divisor(a: i128, b: i128) -> i128 {
    gcd(a.unsigned_abs(), b.unsigned_abs()) as i128
}

fn gcd(a: u128, b: u128) -> u128 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Shorthand for [`Rational::from_decimal`] at the default tolerance.
pub fn to_rational(value: f64) -> Rational {
    Rational::from_decimal(value, EPSILON)
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn half_and_zero() {
        let half = to_rational(0.5);
        assert_eq!((half.numerator(), half.denominator()), (1, 2));
        let zero = to_rational(0.0);
        assert_eq!((zero.numerator(), zero.denominator()), (0, 1));
        assert_eq!(to_rational(-3e-11), Rational::zero());
    }

    #[test]
    fn terminating_decimals() {
        assert_eq!(to_rational(-0.75).to_string(), "-3/4");
        assert_eq!(to_rational(2.0).to_string(), "2");
        assert_eq!(to_rational(0.1).to_string(), "1/10");
        assert_eq!(to_rational(-1.25).to_string(), "-5/4");
    }

    #[test]
    fn thirds_stay_decimal() {
        let third = to_rational(1.0 / 3.0);
        assert_eq!(third.denominator(), 1_000_000_000_000_000);
        assert_eq!(third.numerator(), 333_333_333_333_333);
    }

    #[test]
    fn coarse_tolerance_stops_early() {
        assert_eq!(Rational::from_decimal(2.5000001, 1e-3).to_string(), "5/2");
    }

    #[test]
    fn construction_normalizes() {
        let r = Rational::new(4, -8).unwrap();
        assert_eq!((r.numerator(), r.denominator()), (-1, 2));
        assert_eq!(Rational::new(0, -5).unwrap(), Rational::zero());
        assert_eq!(Rational::new(1, 0), Err(CalcError::InvalidFraction));
    }

    #[test]
    fn arithmetic() {
        let a = Rational::new(1, 2).unwrap();
        let b = Rational::new(1, 3).unwrap();
        assert_eq!(a.checked_add(b).unwrap().to_string(), "5/6");
        assert_eq!(a.checked_mul(b).unwrap().to_string(), "1/6");
        let two = Rational::new(2, 1).unwrap();
        assert_eq!(a.checked_mul(two).unwrap().to_string(), "1");
        let minus_half = Rational::new(-1, 2).unwrap();
        assert_eq!(a.checked_add(minus_half), Ok(Rational::zero()));
        assert!((b.to_f64() - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn three_thirds_overflow_instead_of_panicking() {
        let t = to_rational(1.0 / 3.0);
        let squared = t.checked_mul(t).unwrap();
        assert_eq!(squared.denominator(), 10_i128.pow(30));
        assert_eq!(squared.checked_mul(t), Err(CalcError::FractionOverflow));

        let sum = t.checked_add(t).and_then(|s| s.checked_add(t)).unwrap();
        assert_eq!(sum.numerator(), 999_999_999_999_999);
        assert_eq!(sum.denominator(), 1_000_000_000_000_000);

        let big = Rational::new(i128::MAX, 1).unwrap();
        assert_eq!(big.checked_add(big), Err(CalcError::FractionOverflow));
    }

    #[test]
    fn extreme_numerators_do_not_panic() {
        let min = Rational::new(i128::MIN, 1).unwrap();
        assert_eq!((min.numerator(), min.denominator()), (i128::MIN, 1));
        let halved = Rational::new(i128::MIN, 2).unwrap();
        assert_eq!(halved.numerator(), i128::MIN / 2);
        assert_eq!(Rational::new(i128::MIN, -1), Err(CalcError::FractionOverflow));
        assert_eq!(Rational::new(1, i128::MIN), Err(CalcError::FractionOverflow));
    }
}
