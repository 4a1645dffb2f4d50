use itertools::Itertools;

use crate::format::NumberFormat;

use super::analysis::{Solution, SolutionAnalysis, VariableExpression};

/// Human-readable lines for the solution set. Variables are written
/// `x1..xn`, free parameters `t<column>`, both 1-based.
pub fn render_solution(analysis: &SolutionAnalysis, format: NumberFormat) -> Vec<String> {
    match &analysis.solution {
        None => vec!["No solution exists.".to_string()],
        Some(Solution::Unique(values)) => std::iter::once("Unique solution:".to_string())
            .chain(
                values
                    .iter()
                    .enumerate()
                    .map(|(idx, v)| format!("x{} = {}", idx + 1, format.operand(*v))),
            )
            .collect(),
        Some(Solution::Parametric(expressions)) => {
            let mut lines = vec!["Infinitely many solutions (parametric form):".to_string()];
            lines.extend(expressions.iter().map(|e| render_expression(e, format)));
            if !analysis.free_columns.is_empty() {
                lines.push(format!(
                    "where {} are free parameters",
                    analysis
                        .free_columns
                        .iter()
                        .map(|c| format!("t{}", c + 1))
                        .join(", ")
                ));
            }
            lines
        }
    }
}

fn render_expression(expression: &VariableExpression, format: NumberFormat) -> String {
    let mut text = format!(
        "x{} = {}",
        expression.variable + 1,
        format.operand(expression.constant)
    );
    for (free_column, coefficient) in expression.parameters.iter() {
        let sign = if *coefficient < 0.0 { '-' } else { '+' };
        text.push_str(&format!(
            " {} {}·t{}",
            sign,
            format.operand(coefficient.abs()),
            free_column + 1
        ));
    }
    text
}
