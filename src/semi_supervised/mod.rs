//! Graph-based semi-supervised classification.
//!
//! This module implements two classifiers that learn from partially
//! labeled data by spreading the known labels across a similarity graph
//! built over every fitted sample:
//!
//! - [`LabelPropagation`]: known labels are clamped hard; unlabeled
//!   points absorb the labels of their graph neighborhood.
//! - [`LabelSpreading`]: a diffusion parameter `alpha` lets known labels
//!   be partially overridden by neighborhood consensus.
//!
//! Both are transductive: fitting assigns a label to every row passed to
//! `fit`, available through `transduction()`. Unseen rows are classified
//! inductively by `predict`, which votes with the affinity-weighted label
//! distributions of the fitted rows.
//!
//! # Example
//!
//! ```
//! use propagar::semi_supervised::{Label, LabelPropagation};
//! use propagar::primitives::Matrix;
//!
//! let x = Matrix::from_vec(4, 2, vec![
//!     0.0, 0.0,
//!     0.1, 0.0,
//!     5.0, 5.0,
//!     5.1, 5.0,
//! ]).expect("Matrix dimensions match data length");
//! let y = [
//!     Label::Known(0),
//!     Label::Unknown,
//!     Label::Known(1),
//!     Label::Unknown,
//! ];
//!
//! let mut model = LabelPropagation::new();
//! model.fit(&x, &y).expect("at least one labeled sample");
//! assert_eq!(model.transduction().expect("model is fitted"), &[0, 0, 1, 1]);
//! ```

use crate::error::{PropagarError, Result};
use crate::kernel::rbf_affinity;
use crate::primitives::Matrix;

/// A possibly-missing class label.
///
/// Partially labeled training sets are expressed as slices of `Label`,
/// keeping "unknown" explicit in the type instead of hiding it in a
/// sentinel class id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// The sample's class id is known.
    Known(usize),
    /// The sample is unlabeled.
    Unknown,
}

impl Label {
    /// Returns true for [`Label::Known`].
    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, Label::Known(_))
    }

    /// Returns the class id, if known.
    #[must_use]
    pub fn class(&self) -> Option<usize> {
        match self {
            Label::Known(c) => Some(*c),
            Label::Unknown => None,
        }
    }
}

/// How known labels re-enter the distribution on each iteration.
#[derive(Debug, Clone, Copy)]
enum Clamp {
    /// Known rows are reset to their one-hot seed (label propagation).
    Hard,
    /// Every row blends `alpha` of its neighborhood consensus with
    /// `1 - alpha` of its seed (label spreading).
    Blend(f32),
}

/// Fitted state shared by both graph models.
#[derive(Debug, Clone)]
struct Propagated {
    x_train: Matrix<f32>,
    gamma: f32,
    classes: Vec<usize>,
    label_distributions: Matrix<f32>,
    transduction: Vec<usize>,
    n_iter: usize,
}

/// Builds the graph, iterates the label distributions to tolerance, and
/// reads off the transduction. `name` is used in the non-convergence
/// warning only.
fn propagate(
    name: &str,
    x: &Matrix<f32>,
    y: &[Label],
    gamma: f32,
    clamp: Clamp,
    max_iter: usize,
    tol: f32,
) -> Result<Propagated> {
    if x.n_rows() != y.len() {
        return Err(PropagarError::dimension_mismatch(
            "samples",
            x.n_rows(),
            y.len(),
        ));
    }
    if x.n_rows() == 0 {
        return Err(PropagarError::empty_input("training data"));
    }
    if !x.is_finite() {
        return Err(PropagarError::ValidationError {
            message: "features contain NaN or infinite values".to_string(),
        });
    }
    if gamma <= 0.0 {
        return Err(PropagarError::invalid_hyperparameter("gamma", gamma, "> 0"));
    }

    let mut classes: Vec<usize> = y.iter().filter_map(Label::class).collect();
    classes.sort_unstable();
    classes.dedup();
    if classes.is_empty() {
        return Err(PropagarError::ValidationError {
            message: "semi-supervised fit requires at least one labeled sample".to_string(),
        });
    }

    let n_samples = x.n_rows();
    let n_classes = classes.len();

    let affinity = rbf_affinity(x, x, gamma);
    let degrees: Vec<f32> = (0..n_samples)
        .map(|i| (0..n_samples).map(|j| affinity.get(i, j)).sum())
        .collect();

    // Degrees are >= 1 (self-affinity), so the normalizations are safe.
    let mut transition = Matrix::zeros(n_samples, n_samples);
    match clamp {
        Clamp::Hard => {
            // Row-stochastic random walk matrix.
            for i in 0..n_samples {
                for j in 0..n_samples {
                    transition.set(i, j, affinity.get(i, j) / degrees[i]);
                }
            }
        }
        Clamp::Blend(_) => {
            // Symmetric normalization with zeroed diagonal.
            for i in 0..n_samples {
                for j in 0..n_samples {
                    if i != j {
                        let value = affinity.get(i, j) / (degrees[i] * degrees[j]).sqrt();
                        transition.set(i, j, value);
                    }
                }
            }
        }
    }

    // One-hot seed distributions; unlabeled rows start at zero.
    let mut seed = Matrix::zeros(n_samples, n_classes);
    for (i, label) in y.iter().enumerate() {
        if let Label::Known(class) = label {
            let col = classes
                .binary_search(class)
                .expect("every known class is in the sorted class list");
            seed.set(i, col, 1.0);
        }
    }

    let mut current = seed.clone();
    let mut n_iter = max_iter;
    let mut converged = false;
    for iteration in 1..=max_iter {
        let mut next = transition.matmul(&current)?;
        match clamp {
            Clamp::Hard => {
                for (i, label) in y.iter().enumerate() {
                    if label.is_known() {
                        for c in 0..n_classes {
                            next.set(i, c, seed.get(i, c));
                        }
                    }
                }
            }
            Clamp::Blend(alpha) => {
                next = next.mul_scalar(alpha).add(&seed.mul_scalar(1.0 - alpha))?;
            }
        }

        let delta: f32 = next
            .as_slice()
            .iter()
            .zip(current.as_slice())
            .map(|(a, b)| (a - b).abs())
            .sum();
        current = next;
        if delta < tol {
            n_iter = iteration;
            converged = true;
            break;
        }
    }
    if !converged {
        eprintln!("warning: {name} did not converge within {max_iter} iterations");
    }

    let label_distributions = normalize_rows(&current);
    let transduction = argmax_rows(&label_distributions, &classes);

    Ok(Propagated {
        x_train: x.clone(),
        gamma,
        classes,
        label_distributions,
        transduction,
        n_iter,
    })
}

/// Scales each row to sum to 1; all-zero rows are left untouched.
fn normalize_rows(m: &Matrix<f32>) -> Matrix<f32> {
    let mut normalized = m.clone();
    for i in 0..m.n_rows() {
        let total: f32 = (0..m.n_cols()).map(|c| m.get(i, c)).sum();
        if total > 0.0 {
            for c in 0..m.n_cols() {
                normalized.set(i, c, m.get(i, c) / total);
            }
        }
    }
    normalized
}

/// Maps each row to the class with the largest distribution mass.
fn argmax_rows(distributions: &Matrix<f32>, classes: &[usize]) -> Vec<usize> {
    (0..distributions.n_rows())
        .map(|i| {
            let mut best = 0;
            let mut best_value = f32::NEG_INFINITY;
            for c in 0..distributions.n_cols() {
                let value = distributions.get(i, c);
                if value > best_value {
                    best = c;
                    best_value = value;
                }
            }
            classes[best]
        })
        .collect()
}

/// Classifies unseen rows by an affinity-weighted vote over the fitted
/// label distributions.
fn infer_distributions(fitted: &Propagated, x: &Matrix<f32>) -> Result<Matrix<f32>> {
    if x.n_cols() != fitted.x_train.n_cols() {
        return Err(PropagarError::dimension_mismatch(
            "features",
            fitted.x_train.n_cols(),
            x.n_cols(),
        ));
    }
    let cross = rbf_affinity(x, &fitted.x_train, fitted.gamma);
    let weighted = cross.matmul(&fitted.label_distributions)?;
    Ok(normalize_rows(&weighted))
}

/// Semi-supervised classifier with hard clamping of known labels.
///
/// Builds an RBF affinity graph over all fitted samples, then repeatedly
/// pushes each row's label distribution toward the consensus of its
/// neighborhood while resetting labeled rows to their known class, until
/// the distributions stop moving.
///
/// # Default Parameters
///
/// - gamma: 20.0
/// - `max_iter`: 1000
/// - tol: 1e-3
#[derive(Debug, Clone)]
pub struct LabelPropagation {
    gamma: f32,
    max_iter: usize,
    tol: f32,
    fitted: Option<Propagated>,
}

impl LabelPropagation {
    /// Creates a label propagation model with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gamma: 20.0,
            max_iter: 1000,
            tol: 1e-3,
            fitted: None,
        }
    }

    /// Sets the RBF kernel width gamma.
    #[must_use]
    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tol: f32) -> Self {
        self.tol = tol;
        self
    }

    /// Fits the model on partially labeled data.
    ///
    /// # Errors
    ///
    /// Returns an error on shape mismatch, empty or non-finite input,
    /// non-positive gamma, or when no sample is labeled. Exhausting
    /// `max_iter` is not an error; a warning is printed to stderr and
    /// the last distributions are kept.
    pub fn fit(&mut self, x: &Matrix<f32>, y: &[Label]) -> Result<()> {
        self.fitted = Some(propagate(
            "LabelPropagation",
            x,
            y,
            self.gamma,
            Clamp::Hard,
            self.max_iter,
            self.tol,
        )?);
        Ok(())
    }

    /// Predicts class labels for unseen samples.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or feature
    /// dimensions mismatch.
    pub fn predict(&self, x: &Matrix<f32>) -> Result<Vec<usize>> {
        let fitted = self.fitted.as_ref().ok_or("Model not fitted")?;
        let distributions = infer_distributions(fitted, x)?;
        Ok(argmax_rows(&distributions, &fitted.classes))
    }

    /// Returns normalized class distributions for unseen samples, one
    /// inner vector per sample, ordered like `classes()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or feature
    /// dimensions mismatch.
    pub fn predict_proba(&self, x: &Matrix<f32>) -> Result<Vec<Vec<f32>>> {
        let fitted = self.fitted.as_ref().ok_or("Model not fitted")?;
        let distributions = infer_distributions(fitted, x)?;
        Ok(rows_to_vecs(&distributions))
    }

    /// The label assigned to every fitted row (known rows keep their
    /// label; unknown rows get the propagated one).
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted.
    pub fn transduction(&self) -> Result<&[usize]> {
        let fitted = self.fitted.as_ref().ok_or("Model not fitted")?;
        Ok(&fitted.transduction)
    }

    /// Class ids observed at fit time, ascending. Empty before fit.
    #[must_use]
    pub fn classes(&self) -> &[usize] {
        self.fitted.as_ref().map_or(&[], |f| &f.classes)
    }

    /// Iterations used by the last fit (0 before fit).
    #[must_use]
    pub fn n_iter(&self) -> usize {
        self.fitted.as_ref().map_or(0, |f| f.n_iter)
    }
}

impl Default for LabelPropagation {
    fn default() -> Self {
        Self::new()
    }
}

/// Semi-supervised classifier with soft clamping.
///
/// Like [`LabelPropagation`], but the affinity graph is symmetrically
/// normalized and each iteration blends `alpha` of the neighborhood
/// consensus with `1 - alpha` of the original labeling, so known labels
/// can be partially overridden by their neighborhood.
///
/// # Default Parameters
///
/// - gamma: 20.0
/// - alpha: 0.2
/// - `max_iter`: 30
/// - tol: 1e-3
///
/// # Example
///
/// ```
/// use propagar::semi_supervised::{Label, LabelSpreading};
/// use propagar::primitives::Matrix;
///
/// let x = Matrix::from_vec(4, 2, vec![
///     0.0, 0.0,
///     0.1, 0.0,
///     5.0, 5.0,
///     5.1, 5.0,
/// ]).expect("Matrix dimensions match data length");
/// let y = [
///     Label::Known(0),
///     Label::Unknown,
///     Label::Known(1),
///     Label::Unknown,
/// ];
///
/// let mut model = LabelSpreading::new().with_alpha(0.2);
/// model.fit(&x, &y).expect("at least one labeled sample");
/// assert_eq!(model.transduction().expect("model is fitted"), &[0, 0, 1, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct LabelSpreading {
    gamma: f32,
    alpha: f32,
    max_iter: usize,
    tol: f32,
    fitted: Option<Propagated>,
}

impl LabelSpreading {
    /// Creates a label spreading model with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gamma: 20.0,
            alpha: 0.2,
            max_iter: 30,
            tol: 1e-3,
            fitted: None,
        }
    }

    /// Sets the RBF kernel width gamma.
    #[must_use]
    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Sets the diffusion parameter alpha.
    ///
    /// Values near 0 clamp known labels tightly; values near 1 let the
    /// neighborhood dominate. Must lie in (0, 1).
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tol: f32) -> Self {
        self.tol = tol;
        self
    }

    /// Fits the model on partially labeled data.
    ///
    /// # Errors
    ///
    /// Returns an error on shape mismatch, empty or non-finite input,
    /// invalid gamma or alpha, or when no sample is labeled. Exhausting
    /// `max_iter` is not an error; a warning is printed to stderr and
    /// the last distributions are kept.
    pub fn fit(&mut self, x: &Matrix<f32>, y: &[Label]) -> Result<()> {
        if self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(PropagarError::invalid_hyperparameter(
                "alpha",
                self.alpha,
                "in (0, 1)",
            ));
        }
        self.fitted = Some(propagate(
            "LabelSpreading",
            x,
            y,
            self.gamma,
            Clamp::Blend(self.alpha),
            self.max_iter,
            self.tol,
        )?);
        Ok(())
    }

    /// Predicts class labels for unseen samples.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or feature
    /// dimensions mismatch.
    pub fn predict(&self, x: &Matrix<f32>) -> Result<Vec<usize>> {
        let fitted = self.fitted.as_ref().ok_or("Model not fitted")?;
        let distributions = infer_distributions(fitted, x)?;
        Ok(argmax_rows(&distributions, &fitted.classes))
    }

    /// Returns normalized class distributions for unseen samples, one
    /// inner vector per sample, ordered like `classes()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or feature
    /// dimensions mismatch.
    pub fn predict_proba(&self, x: &Matrix<f32>) -> Result<Vec<Vec<f32>>> {
        let fitted = self.fitted.as_ref().ok_or("Model not fitted")?;
        let distributions = infer_distributions(fitted, x)?;
        Ok(rows_to_vecs(&distributions))
    }

    /// The label assigned to every fitted row as a side effect of
    /// fitting, known and unknown rows alike.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted.
    pub fn transduction(&self) -> Result<&[usize]> {
        let fitted = self.fitted.as_ref().ok_or("Model not fitted")?;
        Ok(&fitted.transduction)
    }

    /// Class ids observed at fit time, ascending. Empty before fit.
    #[must_use]
    pub fn classes(&self) -> &[usize] {
        self.fitted.as_ref().map_or(&[], |f| &f.classes)
    }

    /// Iterations used by the last fit (0 before fit).
    #[must_use]
    pub fn n_iter(&self) -> usize {
        self.fitted.as_ref().map_or(0, |f| f.n_iter)
    }
}

impl Default for LabelSpreading {
    fn default() -> Self {
        Self::new()
    }
}

fn rows_to_vecs(m: &Matrix<f32>) -> Vec<Vec<f32>> {
    (0..m.n_rows())
        .map(|i| (0..m.n_cols()).map(|c| m.get(i, c)).collect())
        .collect()
}
