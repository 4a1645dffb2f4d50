pub mod analysis;
pub mod render;

pub use analysis::{analyze, Solution, SolutionAnalysis, SolutionKind, VariableExpression};
pub use render::render_solution;
