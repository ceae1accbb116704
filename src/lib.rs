//! Propagar: graph-based semi-supervised learning in pure Rust.
//!
//! Propagar implements label propagation and label spreading — graph
//! classifiers that learn from partially labeled data — alongside a
//! supervised kernel SVM baseline, classification metrics, and the
//! deterministic split/mask utilities needed to benchmark them under
//! varying label scarcity.
//!
//! # Quick Start
//!
//! ```
//! use propagar::prelude::*;
//!
//! // Two clusters; only one sample of each is labeled.
//! let x = Matrix::from_vec(4, 2, vec![
//!     0.0, 0.0,
//!     0.1, 0.0,
//!     5.0, 5.0,
//!     5.1, 5.0,
//! ]).unwrap();
//! let y = [
//!     Label::Known(0),
//!     Label::Unknown,
//!     Label::Known(1),
//!     Label::Unknown,
//! ];
//!
//! let mut model = LabelPropagation::new();
//! model.fit(&x, &y).unwrap();
//!
//! // Every fitted row received a label.
//! assert_eq!(model.transduction().unwrap(), &[0, 0, 1, 1]);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`datasets`]: Built-in reference datasets (iris)
//! - [`kernel`]: RBF kernel and pairwise affinities
//! - [`classification`]: Supervised kernel SVM baseline
//! - [`semi_supervised`]: Label propagation and label spreading
//! - [`metrics`]: Evaluation metrics (precision, recall, F1, ...)
//! - [`model_selection`]: Deterministic splitting and label masking
//! - [`bench`]: The limited-label benchmark report

pub mod bench;
pub mod classification;
pub mod datasets;
pub mod error;
pub mod kernel;
pub mod metrics;
pub mod model_selection;
pub mod prelude;
pub mod primitives;
pub mod semi_supervised;

pub use error::{PropagarError, Result};
pub use primitives::{Matrix, Vector};
