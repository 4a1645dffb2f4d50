use std::fmt;
use std::ops::{Index, Range};

use itertools::Itertools;
use serde::{Serialize, Serializer};

use crate::error::{CalcError, CalcResult};

/// Dense row-major matrix of `f64`.
///
/// A `Matrix` always has at least one row and one column and all rows have
/// the same length; the only way to build one from outside the crate is
/// through [`Matrix::from_rows`], which checks that.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    number_of_columns: usize,
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> CalcResult<Self> {
        let Some(first) = rows.first() else {
            return Err(CalcError::InvalidShape(
                "matrix must have at least one row".to_string(),
            ));
        };
        let number_of_columns = first.len();
        if number_of_columns == 0 {
            return Err(CalcError::InvalidShape(
                "matrix must have at least one column".to_string(),
            ));
        }
        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != number_of_columns)
        {
            return Err(CalcError::InvalidShape(format!(
                "row {} has {} entries, expected {}",
                idx + 1,
                row.len(),
                number_of_columns
            )));
        }
        Ok(Self {
            number_of_columns,
            rows,
        })
    }

    pub fn zeroes(rows: usize, cols: usize) -> CalcResult<Self> {
        Self::from_rows(vec![vec![0.0; cols]; rows])
    }

    pub fn identity(n: usize) -> CalcResult<Self> {
        let mut identity = Self::zeroes(n, n)?;
        for idx in 0..n {
            identity.rows[idx][idx] = 1.0;
        }
        Ok(identity)
    }

    pub fn number_of_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn number_of_columns(&self) -> usize {
        self.number_of_columns
    }

    pub fn is_square(&self) -> bool {
        self.number_of_rows() == self.number_of_columns
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, r: usize) -> &[f64] {
        &self.rows[r]
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }

    /// `[self | right]`, or `None` when the row counts differ.
    pub fn augment(&self, right: &Matrix) -> Option<Matrix> {
        if self.number_of_rows() != right.number_of_rows() {
            return None;
        }
        let rows = self
            .rows
            .iter()
            .zip(right.rows.iter())
            .map(|(l, r)| l.iter().chain(r.iter()).copied().collect_vec())
            .collect_vec();
        Some(Self {
            number_of_columns: self.number_of_columns + right.number_of_columns,
            rows,
        })
    }

    /// The block made of the columns in `range`, or `None` if the range is
    /// empty or reaches past the last column.
    pub fn columns(&self, range: Range<usize>) -> Option<Matrix> {
        if range.is_empty() || range.end > self.number_of_columns {
            return None;
        }
        let number_of_columns = range.len();
        let rows = self
            .rows
            .iter()
            .map(|row| row[range.clone()].to_vec())
            .collect_vec();
        Some(Self {
            number_of_columns,
            rows,
        })
    }

    /// Standard matrix product, `None` on mismatched inner dimensions.
    pub fn multiply(&self, other: &Matrix) -> Option<Matrix> {
        if self.number_of_columns != other.number_of_rows() {
            return None;
        }
        let rows = self
            .rows
            .iter()
            .map(|row| {
                (0..other.number_of_columns)
                    .map(|c| {
                        row.iter()
                            .enumerate()
                            .map(|(k, v)| v * other.rows[k][c])
                            .sum::<f64>()
                    })
                    .collect_vec()
            })
            .collect_vec();
        Some(Self {
            number_of_columns: other.number_of_columns,
            rows,
        })
    }

    /// Same shape and every pair of entries within `tolerance`.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.number_of_columns == other.number_of_columns
            && self.number_of_rows() == other.number_of_rows()
            && self
                .rows
                .iter()
                .flatten()
                .zip(other.rows.iter().flatten())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// Rows joined by newlines, cells by `separator`.
    pub fn to_delimited(&self, separator: &str) -> String {
        self.rows
            .iter()
            .map(|row| row.iter().join(separator))
            .join("\n")
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    pub(crate) fn divide_row(&mut self, r: usize, divisor: f64) {
        for v in self.rows[r].iter_mut() {
            *v /= divisor;
        }
    }

    /// `row[target] -= factor * row[source]`
    pub(crate) fn subtract_scaled_row(&mut self, target: usize, source: usize, factor: f64) {
        debug_assert_ne!(target, source);
        let source = self.rows[source].clone();
        for (v, s) in self.rows[target].iter_mut().zip(source) {
            *v -= factor * s;
        }
    }

    pub(crate) fn clean_near_zero(&mut self, tolerance: f64) {
        for v in self.rows.iter_mut().flatten() {
            if v.abs() < tolerance {
                *v = 0.0;
            }
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        &self.rows[r][c]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = CalcError;

    fn try_from(rows: Vec<Vec<f64>>) -> CalcResult<Self> {
        Self::from_rows(rows)
    }
}

// space separated rows, the format users paste back into the calculator
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_delimited(" "))
    }
}

impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reject_empty_and_ragged_rows() {
        assert!(matches!(
            Matrix::from_rows(vec![]),
            Err(CalcError::InvalidShape(_))
        ));
        assert!(matches!(
            Matrix::from_rows(vec![vec![], vec![]]),
            Err(CalcError::InvalidShape(_))
        ));
        assert_eq!(
            Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(CalcError::InvalidShape(
                "row 2 has 1 entries, expected 2".to_string()
            ))
        );
    }

    #[test]
    fn augment_with_identity_and_split_back() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let augmented = a.augment(&Matrix::identity(2).unwrap()).unwrap();
        assert_eq!(augmented.number_of_columns(), 4);
        assert_eq!(augmented.row(1), &[3.0, 4.0, 0.0, 1.0]);
        assert_eq!(augmented.columns(0..2).unwrap(), a);
        assert_eq!(
            augmented.columns(2..4).unwrap(),
            Matrix::identity(2).unwrap()
        );
        assert!(augmented.columns(2..5).is_none());
        assert!(a.augment(&Matrix::identity(3).unwrap()).is_none());
    }

    #[test]
    fn multiply_by_identity() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(a.multiply(&Matrix::identity(3).unwrap()).unwrap(), a);
        assert_eq!(Matrix::identity(2).unwrap().multiply(&a).unwrap(), a);
        assert!(a.multiply(&a).is_none());
    }

    #[test]
    fn row_operations() {
        let mut m = Matrix::from_rows(vec![vec![2.0, 4.0], vec![1.0, 3.0]]).unwrap();
        m.swap_rows(0, 1);
        assert_eq!(m.row(0), &[1.0, 3.0]);
        m.divide_row(1, 2.0);
        assert_eq!(m.row(1), &[1.0, 2.0]);
        m.subtract_scaled_row(0, 1, 1.0);
        assert_eq!(m.row(0), &[0.0, 1.0]);
        assert_eq!(m[(1, 1)], 2.0);
    }

    #[test]
    fn clipboard_and_csv_text() {
        let m = Matrix::from_rows(vec![vec![1.0, 0.5], vec![-2.0, 0.0]]).unwrap();
        assert_eq!(m.to_string(), "1 0.5\n-2 0");
        assert_eq!(m.to_delimited(","), "1,0.5\n-2,0");
    }
}
