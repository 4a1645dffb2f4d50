pub mod export;
pub mod report;

use serde::Serialize;

use crate::elimination::{eliminate_with, EliminationResult};
use crate::format::NumberFormat;
use crate::matrix::Matrix;
use crate::solution::{analyze, SolutionAnalysis};
use crate::square::{determinant, inverse};
use crate::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalculationOptions {
    /// Treat the last column as the right-hand side of a linear system.
    pub is_augmented: bool,
    pub format: NumberFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub input: Matrix,
    pub elimination: EliminationResult,
    pub analysis: SolutionAnalysis,
    pub determinant: Option<f64>,
    pub inverse: Option<Matrix>,
}

impl Calculation {
    /// Determinant and inverse are only attempted for square, non-augmented
    /// input, and the inverse only when the determinant is not zero.
    pub fn run(input: Matrix, options: CalculationOptions) -> Self {
        let elimination = eliminate_with(&input, options.format);
        let analysis = analyze(&elimination.rref, options.is_augmented);
        log::info!(
            "rank {} with {} steps, solution: {}",
            analysis.rank,
            elimination.steps.len(),
            analysis.kind
        );

        let (determinant, inverse) = if input.is_square() && !options.is_augmented {
            let det = determinant(&input);
            let inv = det
                .filter(|d| d.abs() > EPSILON)
                .and_then(|_| inverse(&input));
            (det, inv)
        } else {
            (None, None)
        };

        Self {
            input,
            elimination,
            analysis,
            determinant,
            inverse,
        }
    }
}
