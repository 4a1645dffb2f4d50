use indexmap::IndexMap;
use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::matrix::Matrix;
use crate::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum SolutionKind {
    #[strum(serialize = "N/A")]
    #[serde(rename = "N/A")]
    NotApplicable,
    #[strum(serialize = "no solution")]
    #[serde(rename = "no solution")]
    NoSolution,
    #[strum(serialize = "unique")]
    #[serde(rename = "unique")]
    Unique,
    #[strum(serialize = "infinite")]
    #[serde(rename = "infinite")]
    Infinite,
}

/// `x[variable] = constant + sum(parameters[f] * x[f])` over free columns `f`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableExpression {
    pub variable: usize,
    pub constant: f64,
    pub parameters: IndexMap<usize, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Solution {
    Unique(Vec<f64>),
    Parametric(Vec<VariableExpression>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionAnalysis {
    pub rank: usize,
    pub pivot_columns: Vec<usize>,
    pub kind: SolutionKind,
    pub solution: Option<Solution>,
    pub free_columns: Vec<usize>,
}

/// Classifies the system implied by an RREF matrix.
///
/// With `is_augmented` the last column holds the right-hand side and the
/// others are variables; otherwise every column is a variable and only rank
/// and pivot columns are reported.
pub fn analyze(rref: &Matrix, is_augmented: bool) -> SolutionAnalysis {
    let number_of_variables = if is_augmented {
        rref.number_of_columns() - 1
    } else {
        rref.number_of_columns()
    };
    let pivots = find_pivot_columns(rref, number_of_variables);
    let rank = pivots.len();
    let pivot_columns = pivots.iter().map(|&(_, c)| c).collect::<Vec<_>>();
    let analysis = |kind: SolutionKind, solution: Option<Solution>, free_columns: Vec<usize>| {
        SolutionAnalysis {
            rank,
            pivot_columns: pivot_columns.clone(),
            kind,
            solution,
            free_columns,
        }
    };

    if !is_augmented {
        return analysis(SolutionKind::NotApplicable, None, vec![]);
    }

    let constant_column = number_of_variables;
    if let Some(row) = (0..rref.number_of_rows())
        .find(|&r| is_inconsistent_row(rref.row(r), constant_column))
    {
        log::debug!(
            "row {} reads 0 = {}, system is inconsistent",
            row + 1,
            rref[(row, constant_column)]
        );
        return analysis(SolutionKind::NoSolution, None, vec![]);
    }

    let free_columns = (0..number_of_variables)
        .filter(|c| !pivot_columns.contains(c))
        .collect::<Vec<_>>();

    if free_columns.is_empty() {
        let mut values = vec![0.0; number_of_variables];
        for &(row, column) in pivots.iter() {
            values[column] = rref[(row, constant_column)];
        }
        return analysis(
            SolutionKind::Unique,
            Some(Solution::Unique(values)),
            free_columns,
        );
    }

    let expressions = pivots
        .iter()
        .map(|&(row, column)| VariableExpression {
            variable: column,
            constant: rref[(row, constant_column)],
            parameters: free_columns
                .iter()
                .filter(|&&f| rref[(row, f)].abs() > EPSILON)
                .map(|&f| (f, -rref[(row, f)]))
                .collect(),
        })
        .collect();
    log::debug!("rank {rank}, free columns {free_columns:?}");
    analysis(
        SolutionKind::Infinite,
        Some(Solution::Parametric(expressions)),
        free_columns,
    )
}

// (row, column) for every row that holds a leading 1 which is alone in its
// column. Read off the matrix itself rather than any recorded pivot list.
fn find_pivot_columns(rref: &Matrix, number_of_variables: usize) -> Vec<(usize, usize)> {
    let rows = rref.number_of_rows();
    (0..rows)
        .filter_map(|i| {
            (0..number_of_variables)
                .find(|&j| {
                    (rref[(i, j)] - 1.0).abs() < EPSILON
                        && (0..rows).all(|k| k == i || rref[(k, j)].abs() <= EPSILON)
                })
                .map(|j| (i, j))
        })
        .collect()
}

fn is_inconsistent_row(row: &[f64], constant_column: usize) -> bool {
    row[..constant_column].iter().all(|v| v.abs() <= EPSILON)
        && row[constant_column].abs() > EPSILON
}
