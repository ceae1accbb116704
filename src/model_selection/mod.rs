//! Deterministic data splitting and label masking.
//!
//! Every function here that draws randomness takes the generator as an
//! argument instead of creating one, so the caller owns a single stream
//! and the order of draws is part of the interface contract: results are
//! reproducible exactly when the seed and the call order are fixed.

use rand::Rng;

use crate::error::{PropagarError, Result};
use crate::primitives::Matrix;
use crate::semi_supervised::Label;

/// Splits `0..n_samples` into a train pool and a test set by one
/// independent Bernoulli draw per index.
///
/// Index `i` joins the train pool iff the i-th uniform draw is below
/// `keep`; otherwise it joins the test set. The realized sizes are
/// therefore random, not a fixed count — with `keep = 0.8` the split is
/// 80/20 only in expectation. Exactly `n_samples` values are consumed
/// from `rng`, in index order.
///
/// Both returned index vectors are ascending and together partition
/// `0..n_samples`.
///
/// # Errors
///
/// Returns an error unless `keep` lies in (0, 1).
///
/// # Examples
///
/// ```
/// use propagar::model_selection::bernoulli_split;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let (train, test) = bernoulli_split(150, 0.8, &mut rng).expect("keep is in (0, 1)");
/// assert_eq!(train.len() + test.len(), 150);
/// ```
pub fn bernoulli_split<R: Rng>(
    n_samples: usize,
    keep: f64,
    rng: &mut R,
) -> Result<(Vec<usize>, Vec<usize>)> {
    if !(0.0..1.0).contains(&keep) || keep == 0.0 {
        return Err(PropagarError::invalid_hyperparameter(
            "keep",
            keep,
            "in (0, 1)",
        ));
    }

    let mut train = Vec::new();
    let mut test = Vec::new();
    for index in 0..n_samples {
        if rng.gen::<f64>() < keep {
            train.push(index);
        } else {
            test.push(index);
        }
    }
    Ok((train, test))
}

/// Hides each label independently with probability `1 - retention`.
///
/// One uniform value is drawn per entry, in order; the entry survives as
/// [`Label::Known`] iff its draw does not exceed `retention`. With
/// `retention = 1.0` no draw can exceed it, so the output is the fully
/// labeled input. Exactly `y.len()` values are consumed from `rng`.
///
/// # Errors
///
/// Returns an error unless `retention` lies in (0, 1].
///
/// # Examples
///
/// ```
/// use propagar::model_selection::mask_labels;
/// use propagar::semi_supervised::Label;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let masked = mask_labels(&[0, 1, 2], 1.0, &mut rng).expect("retention is in (0, 1]");
/// assert_eq!(masked, vec![Label::Known(0), Label::Known(1), Label::Known(2)]);
/// ```
pub fn mask_labels<R: Rng>(y: &[usize], retention: f64, rng: &mut R) -> Result<Vec<Label>> {
    if !(0.0..=1.0).contains(&retention) || retention == 0.0 {
        return Err(PropagarError::invalid_hyperparameter(
            "retention",
            retention,
            "in (0, 1]",
        ));
    }

    Ok(y.iter()
        .map(|&class| {
            if rng.gen::<f64>() > retention {
                Label::Unknown
            } else {
                Label::Known(class)
            }
        })
        .collect())
}

/// Gathers the given rows of `x` into a new matrix, in index order.
///
/// # Panics
///
/// Panics if any index is out of bounds.
#[must_use]
pub fn take_rows(x: &Matrix<f32>, indices: &[usize]) -> Matrix<f32> {
    let mut data = Vec::with_capacity(indices.len() * x.n_cols());
    for &index in indices {
        for col in 0..x.n_cols() {
            data.push(x.get(index, col));
        }
    }
    Matrix::from_vec(indices.len(), x.n_cols(), data)
        .expect("gathered data length matches indices * cols")
}

/// Gathers the given entries of `y` into a new vector, in index order.
///
/// # Panics
///
/// Panics if any index is out of bounds.
#[must_use]
pub fn take_labels(y: &[usize], indices: &[usize]) -> Vec<usize> {
    indices.iter().map(|&index| y[index]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_split_partitions_indices() {
        let mut rng = StdRng::seed_from_u64(0);
        let (train, test) = bernoulli_split(150, 0.8, &mut rng).expect("valid keep");

        assert_eq!(train.len() + test.len(), 150);
        let mut all: Vec<usize> = train.iter().chain(test.iter()).copied().collect();
        all.sort_unstable();
        let expected: Vec<usize> = (0..150).collect();
        assert_eq!(all, expected);
        // No overlap once both are sorted and the union covers 0..150.
        assert!(train.windows(2).all(|w| w[0] < w[1]));
        assert!(test.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_split_deterministic_per_seed() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let split_a = bernoulli_split(100, 0.8, &mut rng_a).expect("valid keep");
        let split_b = bernoulli_split(100, 0.8, &mut rng_b).expect("valid keep");
        assert_eq!(split_a, split_b);
    }

    #[test]
    fn test_split_sizes_near_expectation() {
        let mut rng = StdRng::seed_from_u64(7);
        let (train, _) = bernoulli_split(10_000, 0.8, &mut rng).expect("valid keep");
        // 3-sigma band around the binomial mean (sigma = 40).
        assert!(train.len() > 7800 && train.len() < 8200);
    }

    #[test]
    fn test_split_invalid_keep() {
        let mut rng = StdRng::seed_from_u64(0);
        for keep in [0.0, 1.0, 1.5, -0.1] {
            assert!(bernoulli_split(10, keep, &mut rng).is_err(), "keep={keep}");
        }
    }

    #[test]
    fn test_mask_full_retention_is_identity() {
        let mut rng = StdRng::seed_from_u64(0);
        let y = vec![0, 1, 2, 1, 0];
        let masked = mask_labels(&y, 1.0, &mut rng).expect("valid retention");
        let expected: Vec<Label> = y.iter().map(|&c| Label::Known(c)).collect();
        assert_eq!(masked, expected);
    }

    #[test]
    fn test_mask_deterministic_per_seed() {
        let y: Vec<usize> = (0..200).map(|i| i % 3).collect();
        let mut rng_a = StdRng::seed_from_u64(3);
        let mut rng_b = StdRng::seed_from_u64(3);
        let masked_a = mask_labels(&y, 0.3, &mut rng_a).expect("valid retention");
        let masked_b = mask_labels(&y, 0.3, &mut rng_b).expect("valid retention");
        assert_eq!(masked_a, masked_b);
    }

    #[test]
    fn test_mask_fraction_near_expectation() {
        let y = vec![1_usize; 10_000];
        let mut rng = StdRng::seed_from_u64(11);
        let masked = mask_labels(&y, 0.3, &mut rng).expect("valid retention");
        let unknown = masked.iter().filter(|l| !l.is_known()).count();
        // Expect about 7000 unknown; 3-sigma band (sigma ~ 46).
        assert!(unknown > 6800 && unknown < 7200);
    }

    #[test]
    fn test_mask_keeps_original_classes() {
        let y = vec![0, 1, 2, 1, 0, 2, 2, 1];
        let mut rng = StdRng::seed_from_u64(5);
        let masked = mask_labels(&y, 0.5, &mut rng).expect("valid retention");
        assert_eq!(masked.len(), y.len());
        for (label, &class) in masked.iter().zip(y.iter()) {
            if let Label::Known(kept) = label {
                assert_eq!(*kept, class);
            }
        }
    }

    #[test]
    fn test_mask_invalid_retention() {
        let mut rng = StdRng::seed_from_u64(0);
        for retention in [0.0, 1.1, -0.5] {
            assert!(
                mask_labels(&[0, 1], retention, &mut rng).is_err(),
                "retention={retention}"
            );
        }
    }

    #[test]
    fn test_take_rows_and_labels() {
        let x = Matrix::from_vec(4, 2, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0])
            .expect("4x2 matrix");
        let y = vec![10, 11, 12, 13];

        let subset = take_rows(&x, &[0, 2]);
        assert_eq!(subset.shape(), (2, 2));
        assert!((subset.get(0, 1) - 1.0).abs() < 1e-6);
        assert!((subset.get(1, 0) - 4.0).abs() < 1e-6);

        assert_eq!(take_labels(&y, &[3, 1]), vec![13, 11]);
    }

    mod masking_properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Masking never changes length and never invents classes.
            #[test]
            fn prop_mask_preserves_shape_and_classes(
                y in prop::collection::vec(0_usize..5, 1..100),
                retention in 0.01_f64..1.0,
                seed in any::<u64>(),
            ) {
                let mut rng = StdRng::seed_from_u64(seed);
                let masked = mask_labels(&y, retention, &mut rng).expect("valid retention");
                prop_assert_eq!(masked.len(), y.len());
                for (label, &class) in masked.iter().zip(y.iter()) {
                    if let Label::Known(kept) = label {
                        prop_assert_eq!(*kept, class);
                    }
                }
            }

            /// Full retention keeps every label, for any seed.
            #[test]
            fn prop_full_retention_identity(
                y in prop::collection::vec(0_usize..5, 1..100),
                seed in any::<u64>(),
            ) {
                let mut rng = StdRng::seed_from_u64(seed);
                let masked = mask_labels(&y, 1.0, &mut rng).expect("valid retention");
                prop_assert!(masked.iter().all(Label::is_known));
            }
        }
    }
}
