use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::model::metrics::ScenarioMetrics;
use crate::report::MetricsSummary;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::format_f64_2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportMode {
    /// Only the selected scenario.
    Scenario,
    /// Selected scenario plus a comparison row for every scenario.
    All,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn write_reports(summary: &MetricsSummary, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let json_path = out_dir.join("metrics.json");
    write_text(&json_path, &render_summary_json(summary)?)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(summary))?;

    if !summary.scenarios.is_empty() {
        let tsv_path = out_dir.join("scenarios.tsv");
        write_scenarios_tsv(&summary.scenarios, &tsv_path)?;
    }

    tracing::info!(out_dir = %out_dir.display(), "reports written");
    Ok(())
}

fn write_scenarios_tsv(rows: &[ScenarioMetrics], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "scenario",
        "n_candidates",
        "total_correct_answers",
        "your_score",
        "average_score",
        "percentile",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for m in rows {
        let row = [
            sanitize_field(&m.scenario),
            m.n_candidates.to_string(),
            m.total_correct_answers.to_string(),
            m.your_score.to_string(),
            format_f64_2(m.average_score),
            format_f64_2(m.percentile),
        ];
        writeln!(w, "{}", row.join("\t"))?;
    }
    w.flush()
}

fn sanitize_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
