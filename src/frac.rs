use std::{
    cmp::Ordering,
    fmt::{self, Display},
    ops::{Add, Mul, Neg, Sub},
};

use rug::{ops::NegAssign, Integer};
use thiserror::Error;

use crate::traits::{One, Zero};

#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Error,
)]
#[error("Division by zero")]
pub struct DivisionByZero;

/// Exact rational number
///
/// The denominator is always positive and coprime to the numerator,
/// so two fractions are equal exactly if their representations are.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Fraction {
    num: Integer,
    den: Integer,
}

impl Fraction {
    /// Construct the reduced fraction `num / den`
    pub fn new(num: Integer, den: Integer) -> Result<Self, DivisionByZero> {
        if den.cmp0().is_eq() {
            return Err(DivisionByZero);
        }
        Ok(Self::from_nonzero_den(num, den))
    }

    // caller guarantees `den != 0`
    fn from_nonzero_den(mut num: Integer, mut den: Integer) -> Self {
        debug_assert!(!den.cmp0().is_eq());
        let gcd = Integer::from(num.gcd_ref(&den));
        if !gcd.is_one() {
            num.div_exact_mut(&gcd);
            den.div_exact_mut(&gcd);
        }
        if den.is_negative() {
            num.neg_assign();
            den.neg_assign();
        }
        Self { num, den }
    }

    pub fn num(&self) -> &Integer {
        &self.num
    }

    pub fn den(&self) -> &Integer {
        &self.den
    }

    pub fn into_num_den(self) -> (Integer, Integer) {
        (self.num, self.den)
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Checked division, fails if `rhs` is zero
    pub fn try_div(&self, rhs: &Self) -> Result<Self, DivisionByZero> {
        if rhs.is_zero() {
            return Err(DivisionByZero);
        }
        let num = Integer::from(&self.num * &rhs.den);
        let den = Integer::from(&self.den * &rhs.num);
        Ok(Self::from_nonzero_den(num, den))
    }

    /// Compare the absolute values of the numerators
    ///
    /// The denominators are ignored, so this is only a comparison of
    /// magnitudes if both denominators agree. Pivot selection relies on
    /// exactly this ordering.
    pub fn cmp_num_abs(&self, other: &Self) -> Ordering {
        self.num.cmp_abs(&other.num)
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self {
            num: Integer::new(),
            den: Integer::from(1),
        }
    }

    fn is_zero(&self) -> bool {
        self.num.cmp0().is_eq()
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self {
            num: Integer::from(1),
            den: Integer::from(1),
        }
    }

    fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }
}

impl From<Integer> for Fraction {
    fn from(num: Integer) -> Self {
        Self {
            num,
            den: Integer::from(1),
        }
    }
}

impl From<i64> for Fraction {
    fn from(num: i64) -> Self {
        Integer::from(num).into()
    }
}

impl Add<&Fraction> for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Self::Output {
        let mut num = Integer::from(&self.num * &rhs.den);
        num += &rhs.num * &self.den;
        let den = Integer::from(&self.den * &rhs.den);
        Fraction::from_nonzero_den(num, den)
    }
}

impl Sub<&Fraction> for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: &Fraction) -> Self::Output {
        let mut num = Integer::from(&self.num * &rhs.den);
        num -= &rhs.num * &self.den;
        let den = Integer::from(&self.den * &rhs.den);
        Fraction::from_nonzero_den(num, den)
    }
}

impl Mul<&Fraction> for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Self::Output {
        let num = Integer::from(&self.num * &rhs.num);
        let den = Integer::from(&self.den * &rhs.den);
        Fraction::from_nonzero_den(num, den)
    }
}

macro_rules! impl_owned_binop {
    ( $( $op:ident, $fn:ident ),* ) => {
        $(
            impl $op for Fraction {
                type Output = Fraction;

                fn $fn(self, rhs: Fraction) -> Self::Output {
                    (&self).$fn(&rhs)
                }
            }

            impl $op<&Fraction> for Fraction {
                type Output = Fraction;

                fn $fn(self, rhs: &Fraction) -> Self::Output {
                    (&self).$fn(rhs)
                }
            }
        )*
    };
}

impl_owned_binop!(Add, add, Sub, sub, Mul, mul);

impl Neg for Fraction {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.num.neg_assign();
        self
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = Integer::from(&self.num * &other.den);
        let rhs = Integer::from(&other.num * &self.den);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
