//! Evaluation metrics for classifiers.
//!
//! Accuracy, precision, recall, F1-score, and confusion matrix
//! computation for multi-class classification tasks.

pub mod classification;

pub use classification::{accuracy, confusion_matrix, f1_score, precision, recall, Average};
