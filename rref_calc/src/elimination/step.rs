use serde::Serialize;

use crate::format::NumberFormat;
use crate::matrix::Matrix;

/// One elementary row operation. Row indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RowOperation {
    Swap { row1: usize, row2: usize },
    /// Divides `row` by `pivot`, i.e. scales it by `1 / pivot`.
    Scale { row: usize, pivot: f64 },
    /// `row[target] -= factor * row[source]`
    Combine {
        target: usize,
        source: usize,
        factor: f64,
    },
}

impl RowOperation {
    pub fn apply(&self, matrix: &mut Matrix) {
        match *self {
            Self::Swap { row1, row2 } => matrix.swap_rows(row1, row2),
            Self::Scale { row, pivot } => matrix.divide_row(row, pivot),
            Self::Combine {
                target,
                source,
                factor,
            } => matrix.subtract_scaled_row(target, source, factor),
        }
    }

    /// The multiplier applied to a row, `None` for swaps.
    pub fn factor(&self) -> Option<f64> {
        match *self {
            Self::Swap { .. } => None,
            Self::Scale { pivot, .. } => Some(1.0 / pivot),
            Self::Combine { factor, .. } => Some(factor),
        }
    }

    pub fn describe(&self, format: NumberFormat) -> String {
        match *self {
            Self::Swap { row1, row2 } => format!("R{} ↔ R{}", row1 + 1, row2 + 1),
            Self::Scale { row, pivot } => {
                format!("R{0} ← R{0} / {1}", row + 1, format.operand(pivot))
            }
            Self::Combine {
                target,
                source,
                factor,
            } => {
                let sign = if factor > 0.0 { '-' } else { '+' };
                format!(
                    "R{0} ← R{0} {1} {2}·R{3}",
                    target + 1,
                    sign,
                    format.operand(factor.abs()),
                    source + 1
                )
            }
        }
    }
}

/// A recorded row operation together with the matrix right after it.
///
/// The snapshot is an independent copy; nothing else holds a reference to
/// it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EliminationStep {
    pub operation: RowOperation,
    pub description: String,
    #[serde(rename = "matrix")]
    pub snapshot: Matrix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PivotPosition {
    pub row: usize,
    pub column: usize,
}
