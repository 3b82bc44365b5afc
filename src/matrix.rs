use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

/// Dense row-major matrix
///
/// Rows are stored back to back, so swapping two rows exchanges two
/// disjoint slices of the same buffer.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Matrix<T> {
    nrows: usize,
    ncols: usize,
    elem: Vec<T>,
}

impl<T> Matrix<T> {
    /// Build a matrix from its entries in row-major order
    ///
    /// Returns `None` if the entries can't be split into `nrows` rows
    /// of equal length
    pub fn from_vec(nrows: usize, elem: Vec<T>) -> Option<Self> {
        if elem.is_empty() {
            return Some(Self { nrows, ncols: 0, elem });
        }
        if nrows == 0 || elem.len() % nrows != 0 {
            return None;
        }
        let ncols = elem.len() / nrows;
        Some(Self { nrows, ncols, elem })
    }

    pub(crate) fn from_vec_unchecked(
        nrows: usize,
        ncols: usize,
        elem: Vec<T>,
    ) -> Self {
        debug_assert_eq!(nrows * ncols, elem.len());
        Self { nrows, ncols, elem }
    }

    /// Build a matrix from rows of equal length
    ///
    /// Returns `None` if the row lengths differ
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Option<Self>
    where
        R: IntoIterator<Item = T>,
    {
        let mut nrows = 0;
        let mut ncols = None;
        let mut elem = Vec::new();
        for row in rows {
            let len_before = elem.len();
            elem.extend(row);
            let row_len = elem.len() - len_before;
            if *ncols.get_or_insert(row_len) != row_len {
                return None;
            }
            nrows += 1;
        }
        Some(Self {
            nrows,
            ncols: ncols.unwrap_or_default(),
            elem,
        })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn row(&self, r: usize) -> &[T] {
        let start_idx = r * self.ncols;
        &self.elem[start_idx..(start_idx + self.ncols)]
    }

    pub fn row_mut(&mut self, r: usize) -> &mut [T] {
        let start_idx = r * self.ncols;
        &mut self.elem[start_idx..(start_idx + self.ncols)]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.nrows).map(|r| self.row(r))
    }

    /// Split into the row `r` and a mutable view of all other rows
    ///
    /// The other rows are returned in order, with row indices paired
    pub fn split_row_mut(
        &mut self,
        r: usize,
    ) -> (&[T], impl Iterator<Item = (usize, &mut [T])>) {
        let ncols = self.ncols;
        let (before, rest) = self.elem.split_at_mut(r * ncols);
        let (row, after) = rest.split_at_mut(ncols);
        let before = before.chunks_exact_mut(ncols.max(1)).enumerate();
        let after = after
            .chunks_exact_mut(ncols.max(1))
            .enumerate()
            .map(move |(i, row)| (i + r + 1, row));
        (&*row, before.chain(after))
    }

    pub fn swap_rows(&mut self, mut i: usize, mut j: usize) {
        if i == j {
            return;
        }
        if i > j {
            std::mem::swap(&mut i, &mut j);
        }
        let row_length = self.ncols();
        let elems = &mut self.elem[i * row_length..];
        let (first_row, rest) = elems.split_at_mut(row_length);
        let second_row_idx = (j - i - 1) * row_length;
        let second_row =
            &mut rest[second_row_idx..(second_row_idx + row_length)];
        first_row.swap_with_slice(second_row)
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        let ncols = self.ncols;
        let mut rows = Vec::with_capacity(self.nrows);
        let mut elem = self.elem.into_iter();
        for _ in 0..self.nrows {
            rows.push(elem.by_ref().take(ncols).collect());
        }
        rows
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, col) = index;
        debug_assert!(col < self.ncols);
        &self.elem[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (row, col) = index;
        debug_assert!(col < self.ncols);
        &mut self.elem[row * self.ncols + col]
    }
}

impl<T: Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.nrows() == 0 {
            return writeln!(f, "[]");
        }
        for row in self.rows() {
            write!(f, "|")?;
            for e in row {
                write!(f, " {e}")?;
            }
            writeln!(f, " |")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap() {
        let mut m = Matrix::from_vec(3, (0..6).collect()).unwrap();
        assert_eq!(m.ncols(), 2);
        m.swap_rows(2, 0);
        assert_eq!(m.row(0), [4, 5]);
        assert_eq!(m.row(1), [2, 3]);
        assert_eq!(m.row(2), [0, 1]);
        m.swap_rows(1, 1);
        assert_eq!(m[(1, 0)], 2);
        m.swap_rows(0, 1);
        assert_eq!(m.into_rows(), [vec![2, 3], vec![4, 5], vec![0, 1]]);
    }

    #[test]
    fn rows() {
        let m = Matrix::from_rows([vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m[(1, 2)], 6);
        assert_eq!(m.to_string(), "| 1 2 3 |\n| 4 5 6 |\n");
        assert!(Matrix::from_rows([vec![1], vec![2, 3]]).is_none());
        assert!(Matrix::from_vec(0, vec![1]).is_none());
        assert!(Matrix::from_vec(2, vec![1, 2, 3]).is_none());
        let empty = Matrix::<i32>::from_rows(Vec::<Vec<i32>>::new()).unwrap();
        assert_eq!(empty.nrows(), 0);
        assert_eq!(empty.to_string(), "[]\n");
    }

    #[test]
    fn split() {
        let mut m = Matrix::from_vec(3, (0..6).collect()).unwrap();
        let (pivot, others) = m.split_row_mut(1);
        assert_eq!(pivot, [2, 3]);
        let mut seen = Vec::new();
        for (i, row) in others {
            row[0] += 10;
            seen.push(i);
        }
        assert_eq!(seen, [0, 2]);
        assert_eq!(m.into_rows(), [vec![10, 1], vec![2, 3], vec![14, 5]]);
    }
}
