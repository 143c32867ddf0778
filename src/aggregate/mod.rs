//! Scenario aggregation over the loaded question and summary tables.
//!
//! [`AggregatorState`] is an immutable snapshot: every query borrows it and
//! nothing mutates it after [`load`]. Reloading builds a new snapshot with a
//! new [`AggregatorState::version`].

pub mod cache;
pub mod stats;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::model::records::{NormalizedText, QuestionRecord, ScenarioSummary};
use crate::model::totals::{CandidateKey, CandidateScenarioTotal};

pub use stats::{PercentileKind, average_score, percentile_rank, percentile_rank_with};

static STATE_VERSION: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone)]
pub struct QuestionRow {
    pub record: QuestionRecord,
    pub text: NormalizedText,
}

#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub record: ScenarioSummary,
    pub text: NormalizedText,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub question_rows: usize,
    pub summary_rows: usize,
    pub rows_missing_key: usize,
    pub missing_scores: usize,
    pub candidate_totals: usize,
    pub scenarios: usize,
    pub candidates: usize,
    pub unlabelled_question_rows: usize,
    pub distinct_question_labels: usize,
    pub distinct_summary_labels: usize,
}

#[derive(Debug, Clone)]
pub struct AggregatorState {
    version: u64,
    questions: Vec<QuestionRow>,
    summaries: Vec<SummaryRow>,
    totals: Vec<CandidateScenarioTotal>,
    stats: LoadStats,
}

pub fn load(questions: Vec<QuestionRecord>, summaries: Vec<ScenarioSummary>) -> AggregatorState {
    let questions = questions
        .into_iter()
        .map(|record| {
            let text = record.normalized_text();
            QuestionRow { record, text }
        })
        .collect::<Vec<_>>();
    let summaries = summaries
        .into_iter()
        .map(|record| {
            let text = record.normalized_text();
            SummaryRow { record, text }
        })
        .collect::<Vec<_>>();

    let (totals, rows_missing_key, missing_scores) = group_totals(&questions);

    let scenarios = totals
        .iter()
        .map(|t| t.scenario_name.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    let stats = LoadStats {
        question_rows: questions.len(),
        summary_rows: summaries.len(),
        rows_missing_key,
        missing_scores,
        candidate_totals: totals.len(),
        scenarios,
        candidates: totals
            .iter()
            .map(|t| t.candidate_id.as_str())
            .collect::<BTreeSet<_>>()
            .len(),
        unlabelled_question_rows: questions
            .iter()
            .filter(|row| row.text.prompt.is_empty() && row.text.question.is_empty())
            .count(),
        distinct_question_labels: distinct_labels(questions.iter().map(|row| &row.text)),
        distinct_summary_labels: distinct_labels(summaries.iter().map(|row| &row.text)),
    };

    AggregatorState {
        version: STATE_VERSION.fetch_add(1, Ordering::Relaxed),
        questions,
        summaries,
        totals,
        stats,
    }
}

fn distinct_labels<'a>(texts: impl Iterator<Item = &'a NormalizedText>) -> usize {
    texts
        .map(|t| t.prompt_and_question.as_str())
        .collect::<BTreeSet<_>>()
        .len()
}

fn group_totals(questions: &[QuestionRow]) -> (Vec<CandidateScenarioTotal>, usize, usize) {
    let mut sums: BTreeMap<CandidateKey, f64> = BTreeMap::new();
    let mut rows_missing_key = 0usize;
    let mut missing_scores = 0usize;

    for row in questions {
        let record = &row.record;
        let (Some(scenario), Some(candidate)) = (&record.scenario_name, &record.candidate_id)
        else {
            rows_missing_key += 1;
            continue;
        };
        let key = CandidateKey {
            scenario_name: scenario.clone(),
            candidate_id: candidate.clone(),
        };
        let entry = sums.entry(key).or_insert(0.0);
        match record.candidate_score_per_question {
            Some(score) => *entry += score,
            None => missing_scores += 1,
        }
    }

    let totals = sums
        .into_iter()
        .map(|(key, total)| CandidateScenarioTotal {
            scenario_name: key.scenario_name,
            candidate_id: key.candidate_id,
            total,
        })
        .collect();
    (totals, rows_missing_key, missing_scores)
}

impl AggregatorState {
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }

    /// Sum over every summary row of the scenario, not a unique-row lookup.
    pub fn total_correct_answers(&self, scenario_name: &str) -> f64 {
        self.summaries
            .iter()
            .filter(|row| row.record.scenario_name.as_deref() == Some(scenario_name))
            .filter_map(|row| row.record.total_correct_answers)
            .sum()
    }

    pub fn distribution_for(&self, scenario_name: &str) -> Vec<f64> {
        self.totals
            .iter()
            .filter(|t| t.scenario_name == scenario_name)
            .map(|t| t.total)
            .collect()
    }

    pub fn scenario_names(&self) -> Vec<String> {
        self.questions
            .iter()
            .filter_map(|row| row.record.scenario_name.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn has_scenario(&self, scenario_name: &str) -> bool {
        self.questions
            .iter()
            .any(|row| row.record.scenario_name.as_deref() == Some(scenario_name))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/tests.rs"]
mod tests;
