use log::trace;
use rug::{ops::Pow, Integer};

use crate::{frac::Fraction, matrix::Matrix};

/// An interpolation point
///
/// `x` is the ordinal position of the point among those used for
/// interpolation, starting from 1.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Point {
    pub x: usize,
    pub y: Integer,
}

impl Point {
    pub fn new(x: usize, y: Integer) -> Self {
        Self { x, y }
    }
}

/// Set up the augmented system for the coefficients of the polynomial
/// of degree `k - 1` through the first `k` points
///
/// Row `i` evaluates the monomials `x^(k-1), ..., x, 1` at the
/// abscissa `i + 1`, followed by the ordinate of the `i`th point. The
/// abscissae stored in the points are not consulted. With fewer than
/// `k` points the system has one row per point.
pub fn build(points: &[Point], k: usize) -> Matrix<Fraction> {
    let nrows = points.len().min(k);
    let mut elem = Vec::with_capacity(k * (k + 1));
    for (x, pt) in (1u32..).zip(points.iter().take(k)) {
        for j in 0..k {
            let exp = (k - 1 - j) as u32;
            elem.push(Integer::from(x).pow(exp).into());
        }
        elem.push(pt.y.clone().into());
    }
    let eqs = Matrix::from_vec_unchecked(nrows, k + 1, elem);
    trace!("Built system\n{eqs}");
    eqs
}
