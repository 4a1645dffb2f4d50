use crate::rational::to_rational;
use crate::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFormat {
    #[default]
    Decimal,
    Fraction,
}

impl NumberFormat {
    pub fn from_fraction_flag(show_fractions: bool) -> Self {
        if show_fractions {
            Self::Fraction
        } else {
            Self::Decimal
        }
    }

    /// A factor inside a step description.
    pub fn operand(self, value: f64) -> String {
        self.fixed(value, 4)
    }

    /// A single matrix cell.
    pub fn cell(self, value: f64) -> String {
        match self {
            Self::Fraction => to_rational(value).to_string(),
            Self::Decimal if value.abs() < EPSILON => "0".to_string(),
            Self::Decimal => trim_trailing_zeros(format!("{value:.4}")),
        }
    }

    /// A standalone scalar such as a determinant.
    pub fn scalar(self, value: f64) -> String {
        self.fixed(value, 6)
    }

    fn fixed(self, value: f64, places: usize) -> String {
        match self {
            Self::Fraction => to_rational(value).to_string(),
            Self::Decimal => format!("{value:.places$}"),
        }
    }
}

fn trim_trailing_zeros(mut text: String) -> String {
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    text
}
