pub mod gauss_jordan;
pub mod step;

use serde::Serialize;

use crate::error::CalcResult;
use crate::format::NumberFormat;
use crate::matrix::Matrix;

pub use gauss_jordan::GaussJordan;
pub use step::{EliminationStep, PivotPosition, RowOperation};

/// Output of one elimination run: the RREF, every row operation in the
/// order it was applied, and the pivots in row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EliminationResult {
    pub rref: Matrix,
    pub steps: Vec<EliminationStep>,
    pub pivots: Vec<PivotPosition>,
}

impl EliminationResult {
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// Re-applies the recorded operations to `original`, returning the matrix
    /// after each one. For the matrix the result was computed from, the
    /// i-th entry equals the i-th step's snapshot.
    pub fn replay(&self, original: &Matrix) -> Vec<Matrix> {
        let mut working = original.clone();
        self.steps
            .iter()
            .map(|step| {
                step.operation.apply(&mut working);
                working.clone()
            })
            .collect()
    }
}

pub fn eliminate(matrix: &Matrix) -> EliminationResult {
    eliminate_with(matrix, NumberFormat::Decimal)
}

/// Like [`eliminate`], with step descriptions written in `format`.
pub fn eliminate_with(matrix: &Matrix, format: NumberFormat) -> EliminationResult {
    GaussJordan::from_matrix(matrix, format).go_to_reduced_echelon_form()
}

/// Entry point for unvalidated row data; fails with `InvalidShape` on
/// ragged or empty input.
pub fn eliminate_rows(rows: &[Vec<f64>]) -> CalcResult<EliminationResult> {
    let matrix = Matrix::from_rows(rows.to_vec())?;
    Ok(eliminate(&matrix))
}
