pub mod determinant;
pub mod inverse;

pub use determinant::determinant;
pub use inverse::inverse;
