//! Kernel functions shared by the supervised and graph-based estimators.

use crate::primitives::{Matrix, Vector};

/// Gaussian (RBF) kernel between two points.
///
/// k(a, b) = exp(-gamma * ||a - b||^2)
///
/// # Panics
///
/// Panics if the vectors have different lengths.
///
/// # Examples
///
/// ```
/// use propagar::kernel::rbf_kernel;
/// use propagar::primitives::Vector;
///
/// let a = Vector::from_slice(&[0.0, 0.0]);
/// let b = Vector::from_slice(&[1.0, 0.0]);
/// assert!((rbf_kernel(&a, &a, 1.0) - 1.0).abs() < 1e-6);
/// assert!(rbf_kernel(&a, &b, 1.0) < 1.0);
/// ```
#[must_use]
pub fn rbf_kernel(a: &Vector<f32>, b: &Vector<f32>, gamma: f32) -> f32 {
    assert_eq!(
        a.len(),
        b.len(),
        "Vectors must have same length for kernel evaluation"
    );
    let mut sq_dist = 0.0;
    for (p, q) in a.as_slice().iter().zip(b.as_slice()) {
        let d = p - q;
        sq_dist += d * d;
    }
    (-gamma * sq_dist).exp()
}

/// Pairwise RBF affinity between the rows of `a` and the rows of `b`.
///
/// Returns an (`a.n_rows()`, `b.n_rows()`) matrix whose (i, j) entry is
/// `rbf_kernel(a.row(i), b.row(j), gamma)`.
///
/// # Panics
///
/// Panics if the matrices have different column counts.
#[must_use]
pub fn rbf_affinity(a: &Matrix<f32>, b: &Matrix<f32>, gamma: f32) -> Matrix<f32> {
    assert_eq!(
        a.n_cols(),
        b.n_cols(),
        "Matrices must have same number of features for kernel evaluation"
    );

    let mut affinity = Matrix::zeros(a.n_rows(), b.n_rows());
    for i in 0..a.n_rows() {
        let a_row = a.row(i);
        for j in 0..b.n_rows() {
            affinity.set(i, j, rbf_kernel(&a_row, &b.row(j), gamma));
        }
    }
    affinity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rbf_identity() {
        let a = Vector::from_slice(&[1.5, -2.0, 0.3]);
        assert!((rbf_kernel(&a, &a, 20.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rbf_symmetric() {
        let a = Vector::from_slice(&[1.0, 2.0]);
        let b = Vector::from_slice(&[3.0, -1.0]);
        let ab = rbf_kernel(&a, &b, 0.5);
        let ba = rbf_kernel(&b, &a, 0.5);
        assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn test_rbf_decreases_with_distance() {
        let origin = Vector::from_slice(&[0.0, 0.0]);
        let near = Vector::from_slice(&[0.5, 0.0]);
        let far = Vector::from_slice(&[3.0, 0.0]);
        let k_near = rbf_kernel(&origin, &near, 1.0);
        let k_far = rbf_kernel(&origin, &far, 1.0);
        assert!(k_near > k_far);
        assert!(k_far > 0.0);
    }

    #[test]
    fn test_rbf_known_value() {
        let a = Vector::from_slice(&[0.0]);
        let b = Vector::from_slice(&[1.0]);
        // exp(-1 * 1^2)
        assert!((rbf_kernel(&a, &b, 1.0) - (-1.0_f32).exp()).abs() < 1e-6);
    }

    #[test]
    fn test_affinity_shape_and_diag() {
        let x = Matrix::from_vec(3, 2, vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0]).expect("3x2 matrix");
        let w = rbf_affinity(&x, &x, 1.0);
        assert_eq!(w.shape(), (3, 3));
        for i in 0..3 {
            assert!((w.get(i, i) - 1.0).abs() < 1e-6);
        }
        // Symmetry of the self-affinity matrix.
        for i in 0..3 {
            for j in 0..3 {
                assert!((w.get(i, j) - w.get(j, i)).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_affinity_rectangular() {
        let a = Matrix::from_vec(2, 2, vec![0.0, 0.0, 1.0, 1.0]).expect("2x2 matrix");
        let b = Matrix::from_vec(3, 2, vec![0.0, 0.0, 1.0, 1.0, 2.0, 2.0]).expect("3x2 matrix");
        let w = rbf_affinity(&a, &b, 1.0);
        assert_eq!(w.shape(), (2, 3));
        assert!((w.get(0, 0) - 1.0).abs() < 1e-6);
        assert!((w.get(1, 1) - 1.0).abs() < 1e-6);
    }
}
