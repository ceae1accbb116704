//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use propagar::prelude::*;
//! ```

pub use crate::classification::KernelSVM;
pub use crate::datasets::{load_iris, Dataset};
pub use crate::error::{PropagarError, Result};
pub use crate::kernel::{rbf_affinity, rbf_kernel};
pub use crate::metrics::{accuracy, f1_score, precision, recall, Average};
pub use crate::model_selection::{bernoulli_split, mask_labels, take_labels, take_rows};
pub use crate::primitives::{Matrix, Vector};
pub use crate::semi_supervised::{Label, LabelPropagation, LabelSpreading};
