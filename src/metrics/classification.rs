//! Classification metrics for evaluating classifier performance.
//!
//! All multi-class metrics are computed from one pass of per-class
//! true-positive / false-positive / false-negative tallies and then
//! reduced by the chosen [`Average`]. A class with an empty denominator
//! contributes 0.0 rather than raising a division error.

use crate::primitives::Matrix;

/// Averaging strategy for multi-class metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Average {
    /// Calculate metrics for each label, return unweighted mean.
    Macro,
    /// Calculate metrics globally by counting total TP, FP, FN.
    Micro,
    /// Weighted mean by support (number of true instances per label).
    Weighted,
}

/// Per-class prediction tallies.
#[derive(Clone, Copy, Debug, Default)]
struct ClassTally {
    tp: usize,
    fp: usize,
    fn_: usize,
    support: usize,
}

impl ClassTally {
    fn precision(&self) -> f32 {
        ratio(self.tp, self.tp + self.fp)
    }

    fn recall(&self) -> f32 {
        ratio(self.tp, self.tp + self.fn_)
    }

    fn f1(&self) -> f32 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f32 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f32 / denominator as f32
    }
}

/// One counting pass over the label pair; class ids index the result.
fn tally(y_pred: &[usize], y_true: &[usize]) -> Vec<ClassTally> {
    assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");
    assert!(!y_true.is_empty(), "Vectors cannot be empty");

    let n_classes = y_true
        .iter()
        .chain(y_pred.iter())
        .max()
        .map_or(0, |&m| m + 1);

    let mut tallies = vec![ClassTally::default(); n_classes];
    for (&pred, &truth) in y_pred.iter().zip(y_true.iter()) {
        tallies[truth].support += 1;
        if pred == truth {
            tallies[truth].tp += 1;
        } else {
            tallies[pred].fp += 1;
            tallies[truth].fn_ += 1;
        }
    }
    tallies
}

/// Folds every class into one global tally (micro averaging).
fn aggregate(tallies: &[ClassTally]) -> ClassTally {
    tallies.iter().fold(ClassTally::default(), |acc, t| {
        ClassTally {
            tp: acc.tp + t.tp,
            fp: acc.fp + t.fp,
            fn_: acc.fn_ + t.fn_,
            support: acc.support + t.support,
        }
    })
}

/// Reduces a per-class metric under the chosen averaging strategy.
fn reduce(tallies: &[ClassTally], average: Average, metric: fn(&ClassTally) -> f32) -> f32 {
    match average {
        Average::Micro => metric(&aggregate(tallies)),
        Average::Macro => {
            tallies.iter().map(metric).sum::<f32>() / tallies.len() as f32
        }
        Average::Weighted => {
            let total_support: usize = tallies.iter().map(|t| t.support).sum();
            if total_support == 0 {
                return 0.0;
            }
            tallies
                .iter()
                .map(|t| metric(t) * t.support as f32 / total_support as f32)
                .sum()
        }
    }
}

/// Compute classification accuracy.
///
/// accuracy = `correct_predictions` / `total_predictions`
///
/// # Panics
///
/// Panics if vectors have different lengths or are empty.
///
/// # Examples
///
/// ```
/// use propagar::metrics::accuracy;
///
/// let y_true = vec![0, 1, 2, 0, 1, 2];
/// let y_pred = vec![0, 2, 1, 0, 0, 1];
/// let acc = accuracy(&y_pred, &y_true);
/// assert!((acc - 0.333333).abs() < 0.001);
/// ```
#[must_use]
pub fn accuracy(y_pred: &[usize], y_true: &[usize]) -> f32 {
    assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");
    assert!(!y_true.is_empty(), "Vectors cannot be empty");

    let correct = y_pred
        .iter()
        .zip(y_true.iter())
        .filter(|(p, t)| p == t)
        .count();

    correct as f32 / y_true.len() as f32
}

/// Compute precision score.
///
/// precision = TP / (TP + FP), averaged per `average`.
///
/// # Panics
///
/// Panics if vectors have different lengths or are empty.
///
/// # Examples
///
/// ```
/// use propagar::metrics::{precision, Average};
///
/// let y_true = vec![0, 1, 2, 0, 1, 2];
/// let y_pred = vec![0, 2, 1, 0, 0, 1];
/// let prec = precision(&y_pred, &y_true, Average::Weighted);
/// assert!((0.0..=1.0).contains(&prec));
/// ```
#[must_use]
pub fn precision(y_pred: &[usize], y_true: &[usize], average: Average) -> f32 {
    reduce(&tally(y_pred, y_true), average, ClassTally::precision)
}

/// Compute recall score.
///
/// recall = TP / (TP + FN), averaged per `average`.
///
/// # Panics
///
/// Panics if vectors have different lengths or are empty.
///
/// # Examples
///
/// ```
/// use propagar::metrics::{recall, Average};
///
/// let y_true = vec![0, 1, 2, 0, 1, 2];
/// let y_pred = vec![0, 2, 1, 0, 0, 1];
/// let rec = recall(&y_pred, &y_true, Average::Weighted);
/// assert!((0.0..=1.0).contains(&rec));
/// ```
#[must_use]
pub fn recall(y_pred: &[usize], y_true: &[usize], average: Average) -> f32 {
    reduce(&tally(y_pred, y_true), average, ClassTally::recall)
}

/// Compute F1 score (harmonic mean of precision and recall).
///
/// F1 = 2 * (precision * recall) / (precision + recall), per class,
/// averaged per `average`.
///
/// # Panics
///
/// Panics if vectors have different lengths or are empty.
///
/// # Examples
///
/// ```
/// use propagar::metrics::{f1_score, Average};
///
/// let y = vec![0, 1, 2, 0, 1, 2];
/// let f1 = f1_score(&y, &y, Average::Weighted);
/// assert!((f1 - 1.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn f1_score(y_pred: &[usize], y_true: &[usize], average: Average) -> f32 {
    reduce(&tally(y_pred, y_true), average, ClassTally::f1)
}

/// Compute confusion matrix.
///
/// Returns a matrix where element `[i,j]` is the count of samples
/// with true label i and predicted label j.
///
/// # Panics
///
/// Panics if vectors have different lengths or are empty.
///
/// # Examples
///
/// ```
/// use propagar::metrics::confusion_matrix;
///
/// let y_true = vec![0, 0, 1, 1, 2, 2];
/// let y_pred = vec![0, 1, 1, 1, 2, 0];
/// let cm = confusion_matrix(&y_pred, &y_true);
/// assert_eq!(cm.shape(), (3, 3));
/// assert_eq!(cm.get(1, 1), 2);
/// ```
#[must_use]
pub fn confusion_matrix(y_pred: &[usize], y_true: &[usize]) -> Matrix<usize> {
    assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");
    assert!(!y_true.is_empty(), "Vectors cannot be empty");

    let n_classes = y_true
        .iter()
        .chain(y_pred.iter())
        .max()
        .map_or(0, |&m| m + 1);

    let mut data = vec![0usize; n_classes * n_classes];
    for (&truth, &pred) in y_true.iter().zip(y_pred.iter()) {
        data[truth * n_classes + pred] += 1;
    }

    Matrix::from_vec(n_classes, n_classes, data)
        .expect("confusion matrix dimensions match data length")
}

#[cfg(test)]
#[path = "tests_classification_contract.rs"]
mod tests;
