use std::cmp::Ordering;

use log::{debug, trace};
use thiserror::Error;

use crate::{
    frac::{DivisionByZero, Fraction},
    matrix::Matrix,
    traits::{One, Zero},
};

#[derive(Error, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SolveError {
    #[error("Expected a k x (k + 1) system, got {nrows} x {ncols}")]
    Shape { nrows: usize, ncols: usize },
    #[error("Singular system: no pivot in column {col}")]
    Singular { col: usize },
    #[error(transparent)]
    DivisionByZero(#[from] DivisionByZero),
}

/// Solve an augmented `k x (k + 1)` system by Gauss-Jordan elimination
///
/// Returns the last column of the reduced row-echelon form, i.e. the
/// solution for the unknown belonging to each of the `k` columns.
///
/// In each column the pivot is the candidate with the numerator of
/// largest absolute value, see [Fraction::cmp_num_abs]. Ties go to the
/// uppermost row.
pub fn solve(mut eqs: Matrix<Fraction>) -> Result<Vec<Fraction>, SolveError> {
    let k = eqs.nrows();
    if k > 0 && eqs.ncols() != k + 1 {
        return Err(SolveError::Shape { nrows: k, ncols: eqs.ncols() });
    }
    debug!("Gauss-Jordan elimination for {k} unknowns");
    for col in 0..k {
        let pivot_row = ((col + 1)..k).fold(col, |best, row| {
            if eqs[(row, col)].cmp_num_abs(&eqs[(best, col)]) == Ordering::Greater {
                row
            } else {
                best
            }
        });
        if pivot_row != col {
            debug!("Swapping rows {col} and {pivot_row}");
            eqs.swap_rows(col, pivot_row);
        }
        if eqs[(col, col)].is_zero() {
            debug!("No pivot in column {col}");
            return Err(SolveError::Singular { col });
        }

        let pivot = std::mem::replace(&mut eqs[(col, col)], Fraction::one());
        for e in &mut eqs.row_mut(col)[(col + 1)..] {
            *e = e.try_div(&pivot)?;
        }

        let (pivot_eq, other_eqs) = eqs.split_row_mut(col);
        for (_, row) in other_eqs {
            let fact = std::mem::replace(&mut row[col], Zero::zero());
            if fact.is_zero() {
                continue;
            }
            for (e, p) in row[(col + 1)..].iter_mut().zip(&pivot_eq[(col + 1)..]) {
                *e = &*e - &(p * &fact);
            }
        }
    }
    trace!("Reduced system\n{eqs}");
    Ok(eqs.into_rows().into_iter().filter_map(|mut row| row.pop()).collect())
}

#[cfg(test)]
mod tests {
    use rug::Integer;

    use super::*;

    fn log_init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn frac(num: i64, den: i64) -> Fraction {
        Fraction::new(num.into(), den.into()).unwrap()
    }

    fn system(rows: &[&[i64]]) -> Matrix<Fraction> {
        Matrix::from_rows(
            rows.iter().map(|row| row.iter().map(|&e| Fraction::from(e))),
        )
        .unwrap()
    }

    #[test]
    fn solve_linear() {
        log_init();
        // x - y = 1, x + y = 1
        let sys = system(&[&[1, -1, 1], &[1, 1, 1]]);
        let x = solve(sys).unwrap();
        assert_eq!(x, [Fraction::one(), Fraction::zero()]);
    }

    #[test]
    fn solve_rational() {
        log_init();
        // 2x + y = 1, x + 3y = 1
        let sys = system(&[&[2, 1, 1], &[1, 3, 1]]);
        let x = solve(sys).unwrap();
        assert_eq!(x, [frac(2, 5), frac(1, 5)]);
    }

    #[test]
    fn rational_line() {
        log_init();
        // line through (1, 1) and (3, 2): a + b = 1, 3a + b = 2
        let sys = system(&[&[1, 1, 1], &[3, 1, 2]]);
        let x = solve(sys).unwrap();
        assert_eq!(x, [frac(1, 2), frac(1, 2)]);
    }

    #[test]
    fn needs_swap() {
        log_init();
        // y = 2, x + y = 5
        let sys = system(&[&[0, 1, 2], &[1, 1, 5]]);
        let x = solve(sys).unwrap();
        assert_eq!(x, [frac(3, 1), frac(2, 1)]);
    }

    #[test]
    fn singular() {
        log_init();
        let sys = system(&[&[1, 1, 5], &[1, 1, 7]]);
        assert_eq!(solve(sys), Err(SolveError::Singular { col: 1 }));
        let sys = system(&[&[0, 1, 5], &[0, 2, 7]]);
        assert_eq!(solve(sys), Err(SolveError::Singular { col: 0 }));
    }

    #[test]
    fn wrong_shape() {
        log_init();
        let sys = system(&[&[1, 2], &[3, 4], &[5, 6]]);
        assert_eq!(solve(sys), Err(SolveError::Shape { nrows: 3, ncols: 2 }));
        let sys = system(&[&[1, 2], &[3, 4]]);
        assert_eq!(solve(sys), Err(SolveError::Shape { nrows: 2, ncols: 2 }));
        let sys = system(&[&[1, 2, 3, 4], &[5, 6, 7, 8]]);
        assert_eq!(solve(sys), Err(SolveError::Shape { nrows: 2, ncols: 4 }));
    }

    #[test]
    fn empty() {
        let sys = Matrix::from_vec(0, Vec::new()).unwrap();
        assert!(solve(sys).unwrap().is_empty());
    }

    #[test]
    fn solve_large_entries() {
        log_init();
        let big = Integer::from(Integer::u_pow_u(10, 40));
        let sys = Matrix::from_rows([
            vec![frac(1, 1), frac(1, 1), Fraction::from(big.clone())],
            vec![frac(2, 1), frac(1, 1), Fraction::from(Integer::from(&big * 3))],
        ])
        .unwrap();
        let x = solve(sys).unwrap();
        assert_eq!(x, [Fraction::from(Integer::from(&big * 2)), -Fraction::from(big)]);
    }
}
