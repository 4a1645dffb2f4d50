use itertools::Itertools;

use crate::format::NumberFormat;
use crate::matrix::Matrix;
use crate::solution::{render_solution, SolutionKind};

use super::Calculation;

/// Bracketed grid with right-aligned cells.
pub fn render_matrix(matrix: &Matrix, format: NumberFormat) -> Vec<String> {
    let cells = matrix
        .rows()
        .iter()
        .map(|row| row.iter().map(|v| format.cell(*v)).collect_vec())
        .collect_vec();
    let width = cells
        .iter()
        .flatten()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(1);
    cells
        .iter()
        .map(|row| {
            format!(
                "[ {} ]",
                row.iter().map(|c| format!("{c:>width$}")).join("  ")
            )
        })
        .collect()
}

impl Calculation {
    /// The text the command line prints.
    pub fn report(&self, format: NumberFormat, with_steps: bool) -> Vec<String> {
        let mut lines = vec!["Reduced Row Echelon Form (RREF):".to_string()];
        lines.extend(render_matrix(&self.elimination.rref, format));
        lines.push(String::new());
        lines.push(format!("Rank: {}", self.analysis.rank));
        if !self.analysis.pivot_columns.is_empty() {
            lines.push(format!(
                "Pivot Columns: {}",
                self.analysis.pivot_columns.iter().map(|c| c + 1).join(", ")
            ));
        }
        if self.analysis.kind != SolutionKind::NotApplicable {
            lines.push(format!("Solution Type: {}", self.analysis.kind));
            lines.push(String::new());
            lines.extend(render_solution(&self.analysis, format));
        }
        if let Some(det) = self.determinant {
            lines.push(format!("Determinant: {}", format.scalar(det)));
        }
        if let Some(inverse) = &self.inverse {
            lines.push(String::new());
            lines.push("Matrix Inverse:".to_string());
            lines.extend(render_matrix(inverse, format));
        }
        if with_steps && !self.elimination.steps.is_empty() {
            lines.push(String::new());
            lines.push(format!(
                "Gauss-Jordan Steps ({}):",
                self.elimination.steps.len()
            ));
            for (idx, step) in self.elimination.steps.iter().enumerate() {
                lines.push(format!("{}. {}", idx + 1, step.description));
                lines.extend(
                    render_matrix(&step.snapshot, format)
                        .into_iter()
                        .map(|l| format!("   {l}")),
                );
            }
        }
        lines
    }
}
