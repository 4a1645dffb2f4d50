use itertools::Itertools;
use serde::Serialize;

use crate::error::{CalcError, CalcResult};
use crate::matrix::Matrix;
use crate::solution::SolutionAnalysis;

use super::Calculation;

#[derive(Serialize)]
struct ExportedCalculation<'a> {
    input: &'a Matrix,
    rref: &'a Matrix,
    steps: Vec<&'a str>,
    analysis: &'a SolutionAnalysis,
}

impl Calculation {
    /// Pretty-printed JSON with the input, the RREF, the step descriptions
    /// and the analysis.
    pub fn to_json(&self) -> CalcResult<String> {
        let exported = ExportedCalculation {
            input: &self.input,
            rref: &self.elimination.rref,
            steps: self
                .elimination
                .steps
                .iter()
                .map(|s| s.description.as_str())
                .collect_vec(),
            analysis: &self.analysis,
        };
        serde_json::to_string_pretty(&exported)
            .map_err(|e| CalcError::Serialization(format!("JSON serialization failed: {e}")))
    }

    pub fn rref_csv(&self) -> String {
        self.elimination.rref.to_delimited(",")
    }
}
