use rand::Rng;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::CalcResult;
use crate::matrix::Matrix;

/// The built-in example matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Preset {
    SimpleSystem,
    DependentSystem,
    InconsistentSystem,
    #[strum(serialize = "invertible-3x3")]
    Invertible3x3,
    #[strum(serialize = "identity-3x3")]
    Identity3x3,
    #[strum(serialize = "random-4x4")]
    Random4x4,
}

impl Preset {
    pub fn title(&self) -> &'static str {
        match self {
            Self::SimpleSystem => "Simple 2×3 System",
            Self::DependentSystem => "Dependent System",
            Self::InconsistentSystem => "Inconsistent System",
            Self::Invertible3x3 => "Invertible 3×3",
            Self::Identity3x3 => "Identity 3×3",
            Self::Random4x4 => "Random 4×4",
        }
    }

    pub fn is_augmented(&self) -> bool {
        matches!(
            self,
            Self::SimpleSystem | Self::DependentSystem | Self::InconsistentSystem
        )
    }

    pub fn rows(&self) -> Vec<Vec<f64>> {
        match self {
            Self::SimpleSystem => vec![vec![2.0, 1.0, 5.0], vec![1.0, -1.0, 1.0]],
            Self::DependentSystem => vec![vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0]],
            Self::InconsistentSystem => vec![vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 5.0]],
            Self::Invertible3x3 => vec![
                vec![2.0, -1.0, 0.0],
                vec![-1.0, 2.0, -1.0],
                vec![0.0, -1.0, 2.0],
            ],
            Self::Identity3x3 => vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
            ],
            Self::Random4x4 => vec![
                vec![3.0, 2.0, -1.0, 4.0],
                vec![1.0, -1.0, 2.0, 3.0],
                vec![2.0, 3.0, -2.0, 1.0],
                vec![1.0, 2.0, 3.0, 2.0],
            ],
        }
    }

    pub fn matrix(&self) -> CalcResult<Matrix> {
        Matrix::from_rows(self.rows())
    }
}

/// A matrix of integers drawn uniformly from -10..=9.
pub fn random_matrix<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> CalcResult<Matrix> {
    Matrix::from_rows(
        (0..rows)
            .map(|_| (0..cols).map(|_| rng.gen_range(-10..10) as f64).collect())
            .collect(),
    )
}
