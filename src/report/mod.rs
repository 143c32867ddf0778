pub mod json;
pub mod text;

use serde::Serialize;

use crate::aggregate::LoadStats;
use crate::model::metrics::ScenarioMetrics;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMeta {
    pub questions: String,
    pub summary: String,
    pub state_version: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub tool: ToolMeta,
    pub input: InputMeta,
    pub load: LoadStats,
    pub selected: ScenarioMetrics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scenarios: Vec<ScenarioMetrics>,
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

/// Whole numbers print without decimals; anything else keeps its precision.
pub fn format_count(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}
