//! Limited-label benchmark over the iris dataset.
//!
//! Trains a supervised kernel SVM, label propagation, and label
//! spreading while progressively hiding training labels, and prints one
//! tab-separated row of weighted precision/recall/F1 per experiment.
//! Seeded, so repeated runs print identical output.

use propagar::bench;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", bench::run(0)?);
    Ok(())
}
