//! Supervised classification.
//!
//! This module implements the fully-supervised baseline used by the
//! limited-label benchmark: a kernelized Support Vector Machine with a
//! radial basis function kernel and One-vs-Rest multi-class handling.
//!
//! # Example
//!
//! ```
//! use propagar::classification::KernelSVM;
//! use propagar::primitives::Matrix;
//!
//! // Two well-separated clusters.
//! let x = Matrix::from_vec(6, 2, vec![
//!     0.0, 0.0,
//!     0.2, 0.1,
//!     0.1, 0.2,
//!     5.0, 5.0,
//!     5.2, 5.1,
//!     5.1, 5.2,
//! ]).expect("Matrix dimensions match data length");
//! let y = vec![0, 0, 0, 1, 1, 1];
//!
//! let mut model = KernelSVM::new();
//! model.fit(&x, &y).expect("Training data is valid with 6 samples");
//! let predictions = model.predict(&x).expect("Model is fitted");
//! assert_eq!(predictions, y);
//! ```

use crate::error::{PropagarError, Result};
use crate::kernel::rbf_affinity;
use crate::primitives::Matrix;

/// Kernel Support Vector Machine classifier.
///
/// Minimizes the regularized hinge loss by subgradient descent, with the
/// decision function kept in its kernel expansion
///
/// ```text
/// f(x) = b + sum_i alpha_i * k(x_i, x)
/// ```
///
/// so a nonlinear radial basis kernel can be used without explicit
/// feature maps. Multi-class problems are handled One-vs-Rest: one
/// binary machine per observed class, prediction by argmax of the
/// decision values.
#[derive(Debug, Clone)]
pub struct KernelSVM {
    /// Regularization parameter (default: 1.0).
    /// Larger C means less regularization.
    c: f32,
    /// Kernel width; `None` resolves to 1 / n_features at fit time.
    gamma: Option<f32>,
    /// Learning rate for subgradient descent (default: 0.01)
    learning_rate: f32,
    /// Maximum epochs (default: 1000)
    max_iter: usize,
    /// Convergence tolerance on the coefficient change (default: 1e-4)
    tol: f32,
    /// Training feature matrix (stored during fit)
    x_train: Option<Matrix<f32>>,
    /// Class ids observed at fit time, ascending
    classes: Vec<usize>,
    /// Dual coefficients, one vector per class machine
    dual_coef: Vec<Vec<f32>>,
    /// Intercepts, one per class machine
    intercept: Vec<f32>,
    /// Kernel width resolved at fit time
    gamma_fitted: f32,
}

impl KernelSVM {
    /// Creates a new kernel SVM with default parameters.
    ///
    /// # Default Parameters
    ///
    /// - C: 1.0 (moderate regularization)
    /// - gamma: 1 / `n_features`
    /// - `learning_rate`: 0.01
    /// - `max_iter`: 1000
    /// - tol: 1e-4
    #[must_use]
    pub fn new() -> Self {
        Self {
            c: 1.0,
            gamma: None,
            learning_rate: 0.01,
            max_iter: 1000,
            tol: 1e-4,
            x_train: None,
            classes: Vec::new(),
            dual_coef: Vec::new(),
            intercept: Vec::new(),
            gamma_fitted: 0.0,
        }
    }

    /// Sets the regularization parameter C.
    ///
    /// Larger C means less regularization (fit data more closely).
    #[must_use]
    pub fn with_c(mut self, c: f32) -> Self {
        self.c = c;
        self
    }

    /// Sets the RBF kernel width gamma.
    #[must_use]
    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = Some(gamma);
        self
    }

    /// Sets the learning rate for subgradient descent.
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the maximum number of epochs.
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

    /// Class ids observed at fit time, ascending. Empty before fit.
    #[must_use]
    pub fn classes(&self) -> &[usize] {
        &self.classes
    }

    /// Trains the SVM on fully-labeled data.
    ///
    /// # Arguments
    ///
    /// - `x`: Feature matrix (`n_samples` x `n_features`)
    /// - `y`: Class id per sample; every sample must be labeled
    ///
    /// # Errors
    ///
    /// Returns an error on shape mismatch, empty or non-finite input,
    /// fewer than two classes, or invalid hyperparameters.
    pub fn fit(&mut self, x: &Matrix<f32>, y: &[usize]) -> Result<()> {
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
        if self.c <= 0.0 {
            return Err(PropagarError::invalid_hyperparameter("C", self.c, "> 0"));
        }
        if let Some(gamma) = self.gamma {
            if gamma <= 0.0 {
                return Err(PropagarError::invalid_hyperparameter("gamma", gamma, "> 0"));
            }
        }

        let mut classes: Vec<usize> = y.to_vec();
        classes.sort_unstable();
        classes.dedup();
        if classes.len() < 2 {
            return Err(PropagarError::ValidationError {
                message: "need at least two classes to train a classifier".to_string(),
            });
        }

        let gamma = self
            .gamma
            .unwrap_or_else(|| 1.0 / x.n_cols().max(1) as f32);

        // One kernel matrix shared by every One-vs-Rest machine.
        let kernel = rbf_affinity(x, x, gamma);

        let mut dual_coef = Vec::with_capacity(classes.len());
        let mut intercept = Vec::with_capacity(classes.len());
        for &class in &classes {
            let y_signed: Vec<f32> = y
                .iter()
                .map(|&label| if label == class { 1.0 } else { -1.0 })
                .collect();
            let (alpha, b) = self.fit_binary(&kernel, &y_signed);
            dual_coef.push(alpha);
            intercept.push(b);
        }

        self.x_train = Some(x.clone());
        self.classes = classes;
        self.dual_coef = dual_coef;
        self.intercept = intercept;
        self.gamma_fitted = gamma;

        Ok(())
    }

    /// Trains one binary machine against the shared kernel matrix.
    ///
    /// Subgradient descent on the hinge loss with learning-rate decay;
    /// the regularization term shrinks every dual coefficient, the loss
    /// term bumps the coefficient of the violating sample.
    fn fit_binary(&self, kernel: &Matrix<f32>, y_signed: &[f32]) -> (Vec<f32>, f32) {
        let n_samples = y_signed.len();
        let mut alpha = vec![0.0_f32; n_samples];
        let mut b = 0.0_f32;

        let lambda = 1.0 / (2.0 * n_samples as f32 * self.c);

        for epoch in 0..self.max_iter {
            let eta = self.learning_rate / (1.0 + epoch as f32 * 0.01);
            let prev_alpha = alpha.clone();
            let prev_b = b;

            for (i, &y_i) in y_signed.iter().enumerate() {
                let mut decision = b;
                for (j, &alpha_j) in alpha.iter().enumerate() {
                    decision += alpha_j * kernel.get(j, i);
                }

                let shrink = 1.0 - eta * 2.0 * lambda;
                for alpha_j in &mut alpha {
                    *alpha_j *= shrink;
                }
                if y_i * decision < 1.0 {
                    // Misclassified or within margin: hinge subgradient.
                    alpha[i] += eta * y_i;
                    b += eta * y_i;
                }
            }

            let mut change = (b - prev_b).powi(2);
            for j in 0..n_samples {
                change += (alpha[j] - prev_alpha[j]).powi(2);
            }
            if change.sqrt() < self.tol {
                break;
            }
        }

        (alpha, b)
    }

    /// Computes decision values for the given samples.
    ///
    /// Returns an (`n_samples`, `n_classes`) matrix of One-vs-Rest
    /// decision values; larger means more confidently that class.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or feature
    /// dimensions mismatch.
    pub fn decision_function(&self, x: &Matrix<f32>) -> Result<Matrix<f32>> {
        let x_train = self.x_train.as_ref().ok_or("Model not fitted")?;

        if x.n_cols() != x_train.n_cols() {
            return Err(PropagarError::dimension_mismatch(
                "features",
                x_train.n_cols(),
                x.n_cols(),
            ));
        }

        let cross = rbf_affinity(x, x_train, self.gamma_fitted);

        let mut decisions = Matrix::zeros(x.n_rows(), self.classes.len());
        for i in 0..x.n_rows() {
            for (c, alpha) in self.dual_coef.iter().enumerate() {
                let mut value = self.intercept[c];
                for (j, &alpha_j) in alpha.iter().enumerate() {
                    value += alpha_j * cross.get(i, j);
                }
                decisions.set(i, c, value);
            }
        }

        Ok(decisions)
    }

    /// Predicts class labels for the given samples.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or feature
    /// dimensions mismatch.
    pub fn predict(&self, x: &Matrix<f32>) -> Result<Vec<usize>> {
        let decisions = self.decision_function(x)?;

        let mut predictions = Vec::with_capacity(x.n_rows());
        for i in 0..x.n_rows() {
            let mut best = 0;
            let mut best_value = f32::NEG_INFINITY;
            for c in 0..self.classes.len() {
                let value = decisions.get(i, c);
                if value > best_value {
                    best = c;
                    best_value = value;
                }
            }
            predictions.push(self.classes[best]);
        }

        Ok(predictions)
    }
}

impl Default for KernelSVM {
    fn default() -> Self {
        Self::new()
    }
}
