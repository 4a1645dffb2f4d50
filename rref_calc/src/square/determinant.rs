use crate::matrix::Matrix;
use crate::EPSILON;

/// Determinant by upper-triangularization with partial pivoting.
///
/// `None` for non-square input. A column whose best pivot is below
/// `EPSILON` makes the matrix singular and the result is exactly `0.0`.
pub fn determinant(matrix: &Matrix) -> Option<f64> {
    if !matrix.is_square() {
        return None;
    }
    let n = matrix.number_of_rows();
    let mut working = matrix.clone();
    let mut product = 1.0;
    let mut swaps = 0;

    for col in 0..n {
        let mut pivot_row = col;
        for row_index in col + 1..n {
            if working[(row_index, col)].abs() > working[(pivot_row, col)].abs() {
                pivot_row = row_index;
            }
        }
        if working[(pivot_row, col)].abs() < EPSILON {
            log::debug!("column {col} has no pivot, determinant is zero");
            return Some(0.0);
        }
        if pivot_row != col {
            working.swap_rows(col, pivot_row);
            swaps += 1;
        }
        let pivot = working[(col, col)];
        product *= pivot;
        for row_index in col + 1..n {
            let factor = working[(row_index, col)] / pivot;
            working.subtract_scaled_row(row_index, col, factor);
        }
    }

    Some(if swaps % 2 == 0 { product } else { -product })
}

#[cfg(test)]
mod test {
    use super::*;

    fn det(rows: Vec<Vec<f64>>) -> Option<f64> {
        determinant(&Matrix::from_rows(rows).unwrap())
    }

    #[test]
    fn identity_is_one() {
        for n in 1..6 {
            assert_eq!(determinant(&Matrix::identity(n).unwrap()), Some(1.0));
        }
    }

    #[test]
    fn zero_row_is_zero() {
        assert_eq!(det(vec![vec![1.0, 2.0], vec![0.0, 0.0]]), Some(0.0));
    }

    #[test]
    fn non_square_has_none() {
        assert_eq!(det(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]), None);
    }

    #[test]
    fn row_swap_flips_sign() {
        let a = det(vec![
            vec![2.0, -1.0, 0.0],
            vec![-1.0, 2.0, -1.0],
            vec![0.0, -1.0, 2.0],
        ])
        .unwrap();
        let b = det(vec![
            vec![-1.0, 2.0, -1.0],
            vec![2.0, -1.0, 0.0],
            vec![0.0, -1.0, 2.0],
        ])
        .unwrap();
        assert!((a - 4.0).abs() < 1e-9);
        assert!((a + b).abs() < 1e-9);
    }

    #[test]
    fn dependent_rows_are_singular() {
        assert_eq!(det(vec![vec![1.0, 2.0], vec![2.0, 4.0]]), Some(0.0));
    }
}
