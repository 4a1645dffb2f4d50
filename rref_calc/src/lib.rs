pub mod calculation;
pub mod elimination;
pub mod error;
pub mod format;
pub mod matrix;
pub mod presets;
pub mod rational;
pub mod solution;
pub mod square;

/// Magnitudes below this are treated as zero throughout.
pub const EPSILON: f64 = 1e-10;

pub use calculation::{Calculation, CalculationOptions};
pub use elimination::{eliminate, eliminate_rows, eliminate_with, EliminationResult};
pub use error::{CalcError, CalcResult};
pub use format::NumberFormat;
pub use matrix::{parse_matrix, Matrix};
pub use rational::{to_rational, Rational};
pub use solution::{analyze, SolutionAnalysis, SolutionKind};
pub use square::{determinant, inverse};
