pub mod fraction;

pub use fraction::{to_rational, Rational};
