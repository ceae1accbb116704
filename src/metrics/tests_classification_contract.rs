//! Contract tests for the classification metrics: bounds, identities,
//! and the zero-division policy.

pub(crate) use super::*;

fn example_labels() -> (Vec<usize>, Vec<usize>) {
    let y_true = vec![0, 1, 2, 0, 1, 2];
    let y_pred = vec![0, 2, 1, 0, 0, 1];
    (y_pred, y_true)
}

#[test]
fn test_accuracy_known_value() {
    let (y_pred, y_true) = example_labels();
    assert!((accuracy(&y_pred, &y_true) - 1.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_accuracy_perfect() {
    let y = vec![0, 1, 2, 0, 1, 2];
    assert!((accuracy(&y, &y) - 1.0).abs() < 1e-6);
}

#[test]
fn test_precision_known_values() {
    let (y_pred, y_true) = example_labels();
    // Per class: 2/3, 0/2, 0/1.
    assert!((precision(&y_pred, &y_true, Average::Macro) - 2.0 / 9.0).abs() < 1e-6);
    // Supports are equal, so weighted equals macro here.
    assert!((precision(&y_pred, &y_true, Average::Weighted) - 2.0 / 9.0).abs() < 1e-6);
    // Globally: 2 TP out of 6 predictions.
    assert!((precision(&y_pred, &y_true, Average::Micro) - 1.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_recall_known_values() {
    let (y_pred, y_true) = example_labels();
    // Per class: 2/2, 0/2, 0/2.
    assert!((recall(&y_pred, &y_true, Average::Macro) - 1.0 / 3.0).abs() < 1e-6);
    assert!((recall(&y_pred, &y_true, Average::Weighted) - 1.0 / 3.0).abs() < 1e-6);
    assert!((recall(&y_pred, &y_true, Average::Micro) - 1.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_f1_known_values() {
    let (y_pred, y_true) = example_labels();
    // Class 0: p = 2/3, r = 1 => f1 = 0.8; classes 1 and 2: 0.
    assert!((f1_score(&y_pred, &y_true, Average::Macro) - 0.8 / 3.0).abs() < 1e-6);
    assert!((f1_score(&y_pred, &y_true, Average::Weighted) - 0.8 / 3.0).abs() < 1e-6);
    assert!((f1_score(&y_pred, &y_true, Average::Micro) - 1.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_perfect_predictions_score_one() {
    let y = vec![0, 1, 2, 0, 1, 2];
    for average in [Average::Macro, Average::Micro, Average::Weighted] {
        assert!((precision(&y, &y, average) - 1.0).abs() < 1e-6);
        assert!((recall(&y, &y, average) - 1.0).abs() < 1e-6);
        assert!((f1_score(&y, &y, average) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn test_class_never_predicted_contributes_zero() {
    // Class 1 is present in truth but never predicted: its precision
    // denominator is empty and must contribute 0.0, not a division error.
    let y_true = vec![0, 0, 1];
    let y_pred = vec![0, 0, 0];
    let prec = precision(&y_pred, &y_true, Average::Weighted);
    assert!((prec - 2.0 / 3.0).abs() < 1e-6);
    let rec = recall(&y_pred, &y_true, Average::Weighted);
    assert!((rec - 2.0 / 3.0).abs() < 1e-6);
    let f1 = f1_score(&y_pred, &y_true, Average::Weighted);
    assert!(f1 > 0.0 && f1 < 1.0);
}

#[test]
fn test_all_wrong_scores_zero() {
    let y_true = vec![0, 0, 1, 1];
    let y_pred = vec![1, 1, 0, 0];
    for average in [Average::Macro, Average::Micro, Average::Weighted] {
        assert!(precision(&y_pred, &y_true, average).abs() < 1e-6);
        assert!(recall(&y_pred, &y_true, average).abs() < 1e-6);
        assert!(f1_score(&y_pred, &y_true, average).abs() < 1e-6);
    }
}

#[test]
fn test_confusion_matrix_counts() {
    let y_true = vec![0, 0, 1, 1, 2, 2];
    let y_pred = vec![0, 1, 1, 1, 2, 0];
    let cm = confusion_matrix(&y_pred, &y_true);
    assert_eq!(cm.shape(), (3, 3));
    assert_eq!(cm.get(0, 0), 1);
    assert_eq!(cm.get(0, 1), 1);
    assert_eq!(cm.get(1, 1), 2);
    assert_eq!(cm.get(2, 2), 1);
    assert_eq!(cm.get(2, 0), 1);
    // Total count equals the number of samples.
    assert_eq!(cm.as_slice().iter().sum::<usize>(), 6);
}

#[test]
#[should_panic(expected = "same length")]
fn test_length_mismatch_panics() {
    let _ = precision(&[0, 1], &[0], Average::Macro);
}

#[test]
#[should_panic(expected = "cannot be empty")]
fn test_empty_input_panics() {
    let _ = accuracy(&[], &[]);
}

mod metric_properties {
    use super::*;
    use proptest::prelude::*;

    fn label_pairs() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
        (1_usize..40).prop_flat_map(|len| {
            (
                prop::collection::vec(0_usize..4, len),
                prop::collection::vec(0_usize..4, len),
            )
        })
    }

    proptest! {
        /// Every metric stays in [0, 1] for arbitrary labelings.
        #[test]
        fn prop_metrics_bounded((y_pred, y_true) in label_pairs()) {
            for average in [Average::Macro, Average::Micro, Average::Weighted] {
                let p = precision(&y_pred, &y_true, average);
                let r = recall(&y_pred, &y_true, average);
                let f = f1_score(&y_pred, &y_true, average);
                prop_assert!((0.0..=1.0).contains(&p));
                prop_assert!((0.0..=1.0).contains(&r));
                prop_assert!((0.0..=1.0).contains(&f));
            }
            let acc = accuracy(&y_pred, &y_true);
            prop_assert!((0.0..=1.0).contains(&acc));
        }

        /// Perfect predictions score 1.0 under support-sensitive
        /// averages regardless of which class ids appear.
        #[test]
        fn prop_perfect_prediction_scores_one(y in prop::collection::vec(0_usize..4, 1..40)) {
            prop_assert!((precision(&y, &y, Average::Weighted) - 1.0).abs() < 1e-6);
            prop_assert!((recall(&y, &y, Average::Micro) - 1.0).abs() < 1e-6);
            prop_assert!((f1_score(&y, &y, Average::Weighted) - 1.0).abs() < 1e-6);
            prop_assert!((accuracy(&y, &y) - 1.0).abs() < 1e-6);
        }

        /// Micro precision and recall coincide (every error is one FP
        /// and one FN), so micro F1 equals both.
        #[test]
        fn prop_micro_precision_equals_recall((y_pred, y_true) in label_pairs()) {
            let p = precision(&y_pred, &y_true, Average::Micro);
            let r = recall(&y_pred, &y_true, Average::Micro);
            prop_assert!((p - r).abs() < 1e-6);
            let f = f1_score(&y_pred, &y_true, Average::Micro);
            prop_assert!((f - p).abs() < 1e-6);
        }
    }
}
