//! Built-in reference datasets.
//!
//! Small, fully-labeled datasets compiled into the crate so examples,
//! benchmarks, and tests need no I/O.

mod iris;

pub use iris::load_iris;

use crate::primitives::Matrix;

/// A fixed, fully-labeled classification dataset.
///
/// Feature matrix of shape (`n_samples`, `n_features`) with one integer
/// class id per row. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature matrix, one sample per row.
    pub data: Matrix<f32>,
    /// Class id per sample, in [0, `n_classes`).
    pub target: Vec<usize>,
    /// Human-readable feature names, one per column.
    pub feature_names: &'static [&'static str],
    /// Human-readable class names, indexed by class id.
    pub target_names: &'static [&'static str],
}

impl Dataset {
    /// Number of samples.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.data.n_rows()
    }

    /// Number of features per sample.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.data.n_cols()
    }

    /// Number of distinct classes.
    #[must_use]
    pub fn n_classes(&self) -> usize {
        self.target_names.len()
    }
}
