use super::*;
use crate::aggregate::{LoadStats, PercentileKind};
use crate::report::{InputMeta, ToolMeta};
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("caliber_report_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn metrics(scenario: &str) -> ScenarioMetrics {
    ScenarioMetrics {
        scenario: scenario.to_string(),
        known: true,
        n_candidates: 4,
        total_correct_answers: 45.0,
        your_score: 25.0,
        average_score: 25.0,
        percentile: 50.0,
        percentile_kind: PercentileKind::Mean,
    }
}

fn build_summary(scenarios: Vec<ScenarioMetrics>) -> MetricsSummary {
    MetricsSummary {
        tool: ToolMeta {
            name: "caliber-boardsqc".to_string(),
            version: "0.1.0".to_string(),
        },
        input: InputMeta {
            questions: "questions.csv".to_string(),
            summary: "summary.csv".to_string(),
            state_version: 7,
        },
        load: LoadStats {
            question_rows: 6,
            summary_rows: 2,
            rows_missing_key: 0,
            missing_scores: 0,
            candidate_totals: 5,
            scenarios: 2,
            candidates: 4,
            unlabelled_question_rows: 0,
            distinct_question_labels: 6,
            distinct_summary_labels: 2,
        },
        selected: metrics("GI - Small Bowel Obstruction"),
        scenarios,
    }
}

#[test]
fn test_write_reports_scenario_mode() {
    let dir = make_temp_dir();
    write_reports(&build_summary(Vec::new()), &dir).unwrap();

    assert!(dir.join("metrics.json").exists());
    assert!(dir.join("report.txt").exists());
    assert!(!dir.join("scenarios.tsv").exists());

    let json = std::fs::read_to_string(dir.join("metrics.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["selected"]["percentile"], 50.0);
    assert_eq!(value["selected"]["percentile_kind"], "mean");
    assert_eq!(value["load"]["candidate_totals"], 5);
    assert_eq!(value["input"]["state_version"], 7);
    assert!(value.get("scenarios").is_none());
}

#[test]
fn test_write_reports_all_mode_tsv() {
    let dir = make_temp_dir();
    let summary = build_summary(vec![metrics("Breast - Benign"), metrics("Bad\tName")]);
    write_reports(&summary, &dir).unwrap();

    let tsv = std::fs::read_to_string(dir.join("scenarios.tsv")).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("scenario\tn_candidates"));
    assert_eq!(lines[1], "Breast - Benign\t4\t45\t25\t25.00\t50.00");
    assert!(lines[2].starts_with("Bad Name\t"));
}
