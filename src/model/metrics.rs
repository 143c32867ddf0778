use serde::Serialize;

use crate::aggregate::PercentileKind;

/// The four dashboard numbers for one scenario and one entered score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioMetrics {
    pub scenario: String,
    pub known: bool,
    pub n_candidates: usize,
    pub total_correct_answers: f64,
    pub your_score: f64,
    pub average_score: f64,
    pub percentile: f64,
    pub percentile_kind: PercentileKind,
}
