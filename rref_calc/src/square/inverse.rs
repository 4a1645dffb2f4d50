use crate::elimination::eliminate;
use crate::matrix::Matrix;
use crate::EPSILON;

/// Inverse by reducing `[A | I]`.
///
/// `None` when the input is not square, or when the left block of the
/// reduced matrix is not the identity, which is the actual singularity test
/// here; the determinant is never consulted.
pub fn inverse(matrix: &Matrix) -> Option<Matrix> {
    if !matrix.is_square() {
        return None;
    }
    let n = matrix.number_of_rows();
    let augmented = matrix.augment(&Matrix::identity(n).ok()?)?;
    let rref = eliminate(&augmented).rref;
    let left_is_identity = (0..n).all(|i| {
        (0..n).all(|j| {
            let expected = if i == j { 1.0 } else { 0.0 };
            (rref[(i, j)] - expected).abs() <= EPSILON
        })
    });
    if !left_is_identity {
        log::debug!("left block did not reduce to the identity, matrix is singular");
        return None;
    }
    rref.columns(n..2 * n)
}
