use crate::aggregate::{AggregatorState, load};
use crate::input::InputBundle;

pub fn run_stage2(bundle: InputBundle) -> AggregatorState {
    let state = load(bundle.questions, bundle.summaries);
    let stats = state.stats();
    tracing::info!(
        version = state.version(),
        question_rows = stats.question_rows,
        summary_rows = stats.summary_rows,
        candidate_totals = stats.candidate_totals,
        scenarios = stats.scenarios,
        candidates = stats.candidates,
        "aggregated candidate totals"
    );
    if stats.rows_missing_key > 0 {
        tracing::warn!(
            rows = stats.rows_missing_key,
            "question rows without scenario_name or candidate_id excluded from totals"
        );
    }
    if stats.missing_scores > 0 {
        tracing::debug!(
            rows = stats.missing_scores,
            "question rows with missing score contribute nothing to totals"
        );
    }
    state
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
