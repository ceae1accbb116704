//! The limited-label benchmark.
//!
//! Compares a supervised kernel SVM against label propagation and label
//! spreading on the iris dataset while progressively hiding training
//! labels, reporting weighted precision/recall/F1 against a held-out
//! test set. Nine experiments run inductively (train on the pool,
//! predict the unseen test rows); a final label-spreading experiment
//! runs transductively (fit over every row, read the test rows out of
//! the transduction).
//!
//! A single seeded generator drives every random decision. Draws happen
//! in a fixed order — one per sample for the train/test split, then one
//! per pool entry for each masking pass — so a given seed reproduces the
//! report byte for byte.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::classification::KernelSVM;
use crate::datasets::load_iris;
use crate::error::Result;
use crate::metrics::{f1_score, precision, recall, Average};
use crate::model_selection::{bernoulli_split, mask_labels, take_labels, take_rows};
use crate::semi_supervised::{Label, LabelPropagation, LabelSpreading};

/// Probability that a sample lands in the training pool.
const TRAIN_KEEP: f64 = 0.8;

/// Label retention levels for the inductive experiments.
const RETENTIONS: [f64; 4] = [0.2, 0.3, 0.4, 1.0];

/// Retention level for the final transductive experiment.
const TRANSDUCTIVE_RETENTION: f64 = 0.3;

/// One scored experiment: a name and weighted precision/recall/F1.
#[derive(Debug, Clone)]
pub struct ScoreRow {
    /// Experiment name as printed in the report.
    pub name: String,
    /// Weighted precision in [0, 1].
    pub precision: f32,
    /// Weighted recall in [0, 1].
    pub recall: f32,
    /// Weighted F1 in [0, 1].
    pub f1: f32,
}

impl ScoreRow {
    /// Scores predictions against true labels under weighted averaging.
    #[must_use]
    pub fn from_predictions(name: impl Into<String>, y_pred: &[usize], y_true: &[usize]) -> Self {
        Self {
            name: name.into(),
            precision: precision(y_pred, y_true, Average::Weighted),
            recall: recall(y_pred, y_true, Average::Weighted),
            f1: f1_score(y_pred, y_true, Average::Weighted),
        }
    }
}

impl fmt::Display for ScoreRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{:.6}\t{:.6}\t{:.6}",
            self.name, self.precision, self.recall, self.f1
        )
    }
}

/// Runs all ten experiments and renders the report.
///
/// The report is returned rather than printed so callers (and tests)
/// can treat it as a value; the same seed always yields the same bytes.
///
/// # Errors
///
/// Returns an error if any model fit or prediction fails; no experiment
/// runs after the first failure.
pub fn run(seed: u64) -> Result<String> {
    let iris = load_iris();
    let mut rng = StdRng::seed_from_u64(seed);

    let (train, test) = bernoulli_split(iris.n_samples(), TRAIN_KEEP, &mut rng)?;
    let x_pool = take_rows(&iris.data, &train);
    let y_pool = take_labels(&iris.target, &train);
    let x_test = take_rows(&iris.data, &test);
    let y_test = take_labels(&iris.target, &test);

    let mut report = String::new();
    report.push_str("Limited Label data example\n");
    report.push_str("Test name\tprecision\trecall   \tf1\n");

    // Fully supervised baseline on the whole pool.
    let mut svc = KernelSVM::new();
    svc.fit(&x_pool, &y_pool)?;
    push_row(
        &mut report,
        ScoreRow::from_predictions(
            format!("SVM {:.1}pct", 100.0 * TRAIN_KEEP),
            &svc.predict(&x_test)?,
            &y_test,
        ),
    );

    report.push_str("-------\n");

    for retention in RETENTIONS {
        let masked = mask_labels(&y_pool, retention, &mut rng)?;
        let mut model = LabelPropagation::new();
        model.fit(&x_pool, &masked)?;
        push_row(
            &mut report,
            ScoreRow::from_predictions(
                format!("LP {:.1}pct", 100.0 * TRAIN_KEEP * retention),
                &model.predict(&x_test)?,
                &y_test,
            ),
        );
    }

    for retention in RETENTIONS {
        let masked = mask_labels(&y_pool, retention, &mut rng)?;
        let mut model = LabelSpreading::new();
        model.fit(&x_pool, &masked)?;
        push_row(
            &mut report,
            ScoreRow::from_predictions(
                format!("LS {:.1}pct", 100.0 * TRAIN_KEEP * retention),
                &model.predict(&x_test)?,
                &y_test,
            ),
        );
    }

    report.push_str("-------\n");

    // Transductive: fit over every sample with test labels hidden and
    // pool labels masked, then read the test rows out of the
    // transduction instead of predicting unseen points.
    let masked_pool = mask_labels(&y_pool, TRANSDUCTIVE_RETENTION, &mut rng)?;
    let mut y_all = vec![Label::Unknown; iris.n_samples()];
    for (slot, &index) in train.iter().enumerate() {
        y_all[index] = masked_pool[slot];
    }

    let mut spread = LabelSpreading::new().with_alpha(0.8);
    spread.fit(&iris.data, &y_all)?;
    let transduction = spread.transduction()?;
    let y_transduced = take_labels(transduction, &test);
    push_row(
        &mut report,
        ScoreRow::from_predictions("LS 20tran", &y_transduced, &y_test),
    );

    Ok(report)
}

fn push_row(report: &mut String, row: ScoreRow) {
    report.push_str(&row.to_string());
    report.push('\n');
}
