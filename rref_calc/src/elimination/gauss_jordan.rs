use crate::format::NumberFormat;
use crate::matrix::Matrix;
use crate::EPSILON;

use super::step::{EliminationStep, PivotPosition, RowOperation};
use super::EliminationResult;

/// Gauss-Jordan reduction with partial pivoting.
///
/// Sweeps the columns left to right. Each pivot is normalized and cleared
/// above and below as soon as it is found, so the sweep lands directly on
/// the reduced row-echelon form with no back-substitution pass.
pub struct GaussJordan {
    pub number_of_columns: usize,
    pub number_of_rows: usize,
    active_column: usize,
    current_row: usize,
    working: Matrix,
    format: NumberFormat,
    steps: Vec<EliminationStep>,
    pivots: Vec<PivotPosition>,
}

impl GaussJordan {
    // the caller's matrix is copied; only the copy is ever mutated
    pub fn from_matrix(m: &Matrix, format: NumberFormat) -> Self {
        Self {
            number_of_columns: m.number_of_columns(),
            number_of_rows: m.number_of_rows(),
            active_column: 0,
            current_row: 0,
            working: m.clone(),
            format,
            steps: Vec::new(),
            pivots: Vec::new(),
        }
    }

    pub fn go_to_reduced_echelon_form(mut self) -> EliminationResult {
        while self.is_not_in_reduced_echelon_form() {
            self.pivot_active_column();
            self.go_to_next_column();
        }
        self.working.clean_near_zero(EPSILON);
        log::debug!(
            "reduced {}x{} matrix in {} steps, rank {}",
            self.number_of_rows,
            self.number_of_columns,
            self.steps.len(),
            self.pivots.len()
        );
        EliminationResult {
            rref: self.working,
            steps: self.steps,
            pivots: self.pivots,
        }
    }

    fn is_not_in_reduced_echelon_form(&self) -> bool {
        self.active_column < self.number_of_columns && self.current_row < self.number_of_rows
    }

    fn pivot_active_column(&mut self) {
        let Some(pivot_row) = self.find_pivot() else {
            log::debug!("column {} has no usable pivot, skipping", self.active_column);
            return;
        };
        if pivot_row != self.current_row {
            self.record(RowOperation::Swap {
                row1: self.current_row,
                row2: pivot_row,
            });
        }
        self.pivots.push(PivotPosition {
            row: self.current_row,
            column: self.active_column,
        });
        self.normalize_pivot_row();
        self.clear_active_column();
        self.current_row += 1;
    }

    // largest magnitude in the active column at or below the current row;
    // ties keep the upper row
    fn find_pivot(&self) -> Option<usize> {
        let mut pivot_row = self.current_row;
        let mut max_value = self.working[(self.current_row, self.active_column)].abs();
        for row_index in self.current_row + 1..self.number_of_rows {
            let candidate = self.working[(row_index, self.active_column)].abs();
            if candidate > max_value {
                max_value = candidate;
                pivot_row = row_index;
            }
        }
        if max_value < EPSILON {
            None
        } else {
            Some(pivot_row)
        }
    }

    fn normalize_pivot_row(&mut self) {
        let pivot = self.working[(self.current_row, self.active_column)];
        if (pivot - 1.0).abs() > EPSILON {
            self.record(RowOperation::Scale {
                row: self.current_row,
                pivot,
            });
        }
    }

    fn clear_active_column(&mut self) {
        for row_index in 0..self.number_of_rows {
            if row_index == self.current_row {
                continue;
            }
            let factor = self.working[(row_index, self.active_column)];
            if factor.abs() < EPSILON {
                continue;
            }
            self.record(RowOperation::Combine {
                target: row_index,
                source: self.current_row,
                factor,
            });
        }
    }

    fn record(&mut self, operation: RowOperation) {
        operation.apply(&mut self.working);
        let description = operation.describe(self.format);
        log::trace!("step {}: {}", self.steps.len() + 1, description);
        self.steps.push(EliminationStep {
            operation,
            description,
            snapshot: self.working.clone(),
        });
    }

    fn go_to_next_column(&mut self) {
        self.active_column += 1;
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    fn reduce(rows: Vec<Vec<f64>>) -> EliminationResult {
        let m = Matrix::from_rows(rows).unwrap();
        GaussJordan::from_matrix(&m, NumberFormat::Decimal).go_to_reduced_echelon_form()
    }

    #[test]
    fn do_nothing_if_already_reduced() {
        let identity = Matrix::identity(3).unwrap();
        let result =
            GaussJordan::from_matrix(&identity, NumberFormat::Decimal).go_to_reduced_echelon_form();
        assert!(result.steps.is_empty());
        assert_eq!(result.rref, identity);
        assert_eq!(
            result.pivots.iter().map(|p| (p.row, p.column)).collect_vec(),
            vec![(0, 0), (1, 1), (2, 2)]
        );
    }

    #[test]
    fn compute_the_good_reduced_form() {
        let result = reduce(vec![vec![2.0, 1.0, 5.0], vec![1.0, -1.0, 1.0]]);
        assert!(result.rref.approx_eq(
            &Matrix::from_rows(vec![vec![1.0, 0.0, 2.0], vec![0.0, 1.0, 1.0]]).unwrap(),
            EPSILON
        ));
        assert_eq!(
            result.steps.iter().map(|s| s.description.as_str()).collect_vec(),
            vec![
                "R1 ← R1 / 2.0000",
                "R2 ← R2 - 1.0000·R1",
                "R2 ← R2 / -1.5000",
                "R1 ← R1 - 0.5000·R2",
            ]
        );
    }

    #[test]
    fn swap_in_the_largest_pivot() {
        let result = reduce(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(
            result.steps[0].operation,
            RowOperation::Swap { row1: 0, row2: 1 }
        );
        assert_eq!(result.steps[0].snapshot.row(0), &[3.0, 4.0]);
        assert!(result
            .rref
            .approx_eq(&Matrix::identity(2).unwrap(), EPSILON));
    }

    #[test]
    fn skip_zero_columns_without_advancing_the_row() {
        let result = reduce(vec![
            vec![0.0, 1.0, 2.0],
            vec![0.0, 2.0, 4.0],
            vec![0.0, 0.0, 1.0],
        ]);
        assert_eq!(
            result.pivots,
            vec![
                PivotPosition { row: 0, column: 1 },
                PivotPosition { row: 1, column: 2 }
            ]
        );
        assert_eq!(result.rref.row(2), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_matrix_records_nothing() {
        let result = reduce(vec![vec![0.0, 0.0], vec![0.0, 0.0]]);
        assert!(result.steps.is_empty());
        assert!(result.pivots.is_empty());
    }

    #[test]
    fn caller_matrix_is_untouched() {
        let m = Matrix::from_rows(vec![vec![0.0, 2.0], vec![4.0, 8.0]]).unwrap();
        let before = m.clone();
        let result =
            GaussJordan::from_matrix(&m, NumberFormat::Decimal).go_to_reduced_echelon_form();
        assert_eq!(m, before);
        assert_ne!(result.rref, before);
    }
}
