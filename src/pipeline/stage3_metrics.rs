use crate::aggregate::cache::DistributionCache;
use crate::aggregate::{
    AggregatorState, PercentileKind, average_score, percentile_rank, percentile_rank_with,
};
use crate::model::metrics::ScenarioMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsScope {
    Selected,
    AllScenarios,
}

#[derive(Debug, Clone)]
pub struct Stage3Inputs<'a> {
    pub state: &'a AggregatorState,
    pub scenario: &'a str,
    pub score: f64,
    pub kind: PercentileKind,
    pub scope: MetricsScope,
}

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub selected: ScenarioMetrics,
    pub per_scenario: Vec<ScenarioMetrics>,
}

pub fn run_stage3(inputs: &Stage3Inputs<'_>) -> Stage3Output {
    let mut cache = DistributionCache::new();

    let selected = scenario_metrics(
        inputs.state,
        &mut cache,
        inputs.scenario,
        inputs.score,
        inputs.kind,
    );
    if !selected.known {
        tracing::warn!(
            scenario = inputs.scenario,
            "scenario not present in question table; reporting zero fallbacks"
        );
    }

    let per_scenario = match inputs.scope {
        MetricsScope::Selected => Vec::new(),
        MetricsScope::AllScenarios => inputs
            .state
            .scenario_names()
            .iter()
            .map(|name| scenario_metrics(inputs.state, &mut cache, name, inputs.score, inputs.kind))
            .collect(),
    };

    if !cache.is_empty() {
        tracing::debug!(
            entries = cache.len(),
            hits = cache.hits(),
            misses = cache.misses(),
            "distribution cache"
        );
    }

    Stage3Output {
        selected,
        per_scenario,
    }
}

pub fn scenario_metrics(
    state: &AggregatorState,
    cache: &mut DistributionCache,
    scenario: &str,
    score: f64,
    kind: PercentileKind,
) -> ScenarioMetrics {
    let distribution = cache.get(state, scenario);
    let percentile = match kind {
        PercentileKind::Mean => percentile_rank(&distribution, score),
        other => percentile_rank_with(&distribution, score, other),
    };
    ScenarioMetrics {
        scenario: scenario.to_string(),
        known: state.has_scenario(scenario),
        n_candidates: distribution.len(),
        total_correct_answers: state.total_correct_answers(scenario),
        your_score: score,
        average_score: average_score(&distribution),
        percentile,
        percentile_kind: kind,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_metrics.rs"]
mod tests;
