use std::fmt::{self, Display};

use itertools::Itertools;
use rug::Integer;

use crate::{
    frac::Fraction,
    traits::{Eval, Zero},
};

/// Univariate polynomial with rational coefficients
///
/// The coefficients are stored from the highest power down to the
/// constant term, which is also the order in which they are displayed.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct InterpPoly {
    coeff: Vec<Fraction>,
}

impl InterpPoly {
    pub fn from_coeff(coeff: Vec<Fraction>) -> Self {
        Self { coeff }
    }

    pub fn coeffs(&self) -> &[Fraction] {
        &self.coeff
    }

    pub fn into_coeff(self) -> Vec<Fraction> {
        self.coeff
    }

    /// Number of stored coefficients
    ///
    /// Leading zero coefficients are kept, so this is `k` for a
    /// polynomial through `k` points.
    pub fn len(&self) -> usize {
        self.coeff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeff.is_empty()
    }

    /// Degree, ignoring vanishing leading coefficients
    ///
    /// `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        let first_nonzero = self.coeff.iter().position(|c| !c.is_zero())?;
        Some(self.coeff.len() - 1 - first_nonzero)
    }
}

impl Eval<Integer> for InterpPoly {
    type Output = Fraction;

    fn eval(&self, x: &Integer) -> Fraction {
        let x = Fraction::from(x.clone());
        self.coeff
            .iter()
            .fold(Zero::zero(), |acc: Fraction, c| &(acc * &x) + c)
    }
}

impl Eval<u32> for InterpPoly {
    type Output = Fraction;

    fn eval(&self, x: &u32) -> Fraction {
        self.eval(&Integer::from(*x))
    }
}

impl Display for InterpPoly {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.coeff.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(num: i64, den: i64) -> Fraction {
        Fraction::new(num.into(), den.into()).unwrap()
    }

    #[test]
    fn display() {
        let p = InterpPoly::from_coeff(vec![frac(1, 2), frac(-3, 1), frac(0, 1)]);
        assert_eq!(p.to_string(), "1/2, -3, 0");
        assert_eq!(InterpPoly::default().to_string(), "");
    }

    #[test]
    fn eval() {
        // x^2/2 - 3x + 1
        let p = InterpPoly::from_coeff(vec![frac(1, 2), frac(-3, 1), frac(1, 1)]);
        assert_eq!(p.eval(&0u32), frac(1, 1));
        assert_eq!(p.eval(&1u32), frac(-3, 2));
        assert_eq!(p.eval(&Integer::from(-2)), frac(9, 1));
    }

    #[test]
    fn degree() {
        let p = InterpPoly::from_coeff(vec![frac(0, 1), frac(2, 1), frac(1, 1)]);
        assert_eq!(p.len(), 3);
        assert_eq!(p.degree(), Some(1));
        let zero = InterpPoly::from_coeff(vec![Zero::zero(); 2]);
        assert_eq!(zero.degree(), None);
    }
}
