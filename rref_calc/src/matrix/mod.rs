pub mod dense;
pub mod parse;

pub use dense::Matrix;
pub use parse::parse_matrix;
