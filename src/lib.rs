//! Exact polynomial interpolation
//!
//! Recovers the coefficients of the unique polynomial of degree `k - 1`
//! through `k` points with abscissae `1, ..., k`. The ordinates are
//! arbitrary-precision integers, usually decoded from numerals in
//! some base with [numeral::parse]. All arithmetic is done with exact
//! [Fraction]s, so the coefficients are exact rational numbers.
//!
//! ```
//! use ratinterp::{solve, Integer, Point};
//!
//! let pts = [Point::new(1, Integer::from(1)), Point::new(2, Integer::from(3))];
//! let poly = solve(&pts, 2).unwrap();
//! assert_eq!(poly.to_string(), "2, -1");
//! ```
pub mod frac;
pub mod gauss;
pub mod matrix;
pub mod numeral;
pub mod poly;
pub mod record;
pub mod system;
pub mod traits;

use log::debug;
use thiserror::Error;

pub use frac::Fraction;
pub use gauss::SolveError;
pub use poly::InterpPoly;
pub use rug::Integer;
pub use system::Point;

use record::{Record, RecordError};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Need at least {k} points, found {found}")]
    NotEnoughPoints { k: usize, found: usize },
    #[error(transparent)]
    Solve(#[from] SolveError),
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Find the polynomial of degree `k - 1` through the first `k` points
///
/// The `i`th point is taken to lie at `x = i`, counting from 1,
/// independent of the abscissa stored in the point. Further points
/// are ignored.
pub fn solve(points: &[Point], k: usize) -> Result<InterpPoly, Error> {
    if k == 0 || points.len() < k {
        return Err(Error::NotEnoughPoints {
            k: k.max(1),
            found: points.len(),
        });
    }
    debug!("Interpolating {k} of {} points", points.len());
    let eqs = system::build(points, k);
    let coeff = gauss::solve(eqs)?;
    Ok(InterpPoly::from_coeff(coeff))
}

/// Parse a JSON record and interpolate its points
///
/// See [record] for the format.
pub fn solve_record(record: &str) -> Result<InterpPoly, Error> {
    let record: Record = record.parse()?;
    let points = record.points()?;
    solve(&points, record.k())
}
