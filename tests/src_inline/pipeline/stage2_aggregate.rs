use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::aggregate::{average_score, percentile_rank};
use crate::pipeline::stage1_load::run_stage1;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("caliber_pipeline_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_csv_to_metrics() {
    let dir = make_temp_dir();
    let questions = dir.join("data.csv");
    let summary = dir.join("AverageQuestion.csv");
    fs::write(
        &questions,
        "scenario_name,candidate_id,prompt,question,candidate_score_per_question\n\
         S,c1,,q1,5\n\
         S,c1,p,q2,7\n\
         S,c2,p,,10\n\
         T,c1,,,NA\n\
         ,c9,,,100\n",
    )
    .unwrap();
    fs::write(
        &summary,
        "scenario_name,prompt,question,total_correct_answers\n\
         S,,,10\n\
         S,,,2\n",
    )
    .unwrap();

    let bundle = run_stage1(&questions, &summary).unwrap();
    let state = run_stage2(bundle);

    let mut d = state.distribution_for("S");
    d.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(d, vec![10.0, 12.0]);
    assert_eq!(state.distribution_for("T"), vec![0.0]);
    assert_eq!(state.total_correct_answers("S"), 12.0);
    assert_eq!(state.total_correct_answers("T"), 0.0);
    assert_eq!(average_score(&d), 11.0);
    assert_eq!(percentile_rank(&d, 11.0), 50.0);
    assert_eq!(state.stats().rows_missing_key, 1);
    assert_eq!(state.scenario_names(), vec!["S".to_string(), "T".to_string()]);
    // " / q1", "p / q2", "p / ", " / " (twice)
    assert_eq!(state.stats().distinct_question_labels, 4);
    assert_eq!(state.stats().unlabelled_question_rows, 2);
    // c1 appears in both S and T
    assert_eq!(state.stats().candidates, 2);
    assert_eq!(state.stats().distinct_summary_labels, 1);
}
