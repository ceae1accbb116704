//! End-to-end checks of the benchmark report format and score sanity.

use propagar::bench;

fn report_lines() -> Vec<String> {
    let report = bench::run(0).expect("benchmark runs to completion");
    assert!(report.ends_with('\n'));
    report.trim_end_matches('\n').split('\n').map(String::from).collect()
}

/// Parses "name\tp\tr\tf1" into (name, scores).
fn parse_row(line: &str) -> (String, [f32; 3]) {
    let fields: Vec<&str> = line.split('\t').collect();
    assert_eq!(fields.len(), 4, "score row has 4 tab-separated fields: {line}");
    let mut scores = [0.0_f32; 3];
    for (slot, field) in fields[1..].iter().enumerate() {
        // Fixed-point with 6 decimal digits.
        let (_, decimals) = field.split_once('.').expect("scores are fixed-point");
        assert_eq!(decimals.len(), 6, "6 decimal digits: {field}");
        scores[slot] = field.parse().expect("scores parse as f32");
    }
    (fields[0].to_string(), scores)
}

#[test]
fn report_has_headers_separators_and_ten_rows() {
    let lines = report_lines();
    assert_eq!(lines.len(), 14);
    assert_eq!(lines[0], "Limited Label data example");
    assert_eq!(lines[1], "Test name\tprecision\trecall   \tf1");
    assert_eq!(lines[3], "-------");
    assert_eq!(lines[12], "-------");

    let row_lines: Vec<&String> = lines
        .iter()
        .skip(2)
        .filter(|l| l.as_str() != "-------")
        .collect();
    assert_eq!(row_lines.len(), 10);
}

#[test]
fn report_names_match_the_experiment_list() {
    let lines = report_lines();
    let names: Vec<String> = lines
        .iter()
        .skip(2)
        .filter(|l| l.as_str() != "-------")
        .map(|l| parse_row(l).0)
        .collect();
    assert_eq!(
        names,
        vec![
            "SVM 80.0pct",
            "LP 16.0pct",
            "LP 24.0pct",
            "LP 32.0pct",
            "LP 80.0pct",
            "LS 16.0pct",
            "LS 24.0pct",
            "LS 32.0pct",
            "LS 80.0pct",
            "LS 20tran",
        ]
    );
}

#[test]
fn report_scores_are_within_bounds() {
    let lines = report_lines();
    for line in lines.iter().skip(2).filter(|l| l.as_str() != "-------") {
        let (name, scores) = parse_row(line);
        for score in scores {
            assert!(
                (0.0..=1.0).contains(&score),
                "{name}: score {score} out of [0, 1]"
            );
        }
    }
}

#[test]
fn fully_supervised_baseline_is_not_dominated_at_low_retention() {
    // Not a strict invariant, so allow slack: with all labels visible
    // the SVM should not fall far below label propagation fed only 20%
    // of the pool labels.
    let lines = report_lines();
    let rows: Vec<(String, [f32; 3])> = lines
        .iter()
        .skip(2)
        .filter(|l| l.as_str() != "-------")
        .map(|l| parse_row(l))
        .collect();

    let svm_f1 = rows[0].1[2];
    let lp_low_f1 = rows[1].1[2];
    assert!(
        svm_f1 + 0.15 >= lp_low_f1,
        "SVM f1 {svm_f1} far below LP at 16% labels {lp_low_f1}"
    );
}
