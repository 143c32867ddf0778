use crate::model::metrics::ScenarioMetrics;
use crate::report::{MetricsSummary, format_count, format_f64_2};

pub fn render_metrics_block(m: &ScenarioMetrics) -> String {
    let mut out = String::new();
    out.push_str(&format!("Scenario: {}\n", m.scenario));
    out.push_str(&format!(
        "Total Score: {}\n",
        format_count(m.total_correct_answers)
    ));
    out.push_str(&format!("Your Score: {}\n", format_count(m.your_score)));
    out.push_str(&format!("Average Score: {}\n", format_f64_2(m.average_score)));
    out.push_str(&format!("Your Percentile: {}\n", format_f64_2(m.percentile)));
    out
}

pub fn render_report_text(data: &MetricsSummary) -> String {
    let mut out = String::new();

    out.push_str("Caliber Boards Analytics Report\n");
    out.push_str("===============================\n\n");

    out.push_str("1. Selected scenario\n");
    out.push_str(&render_metrics_block(&data.selected));
    out.push_str(&format!(
        "Candidates in scenario: {}\n",
        data.selected.n_candidates
    ));
    out.push_str(&format!(
        "Percentile convention: {}\n",
        data.selected.percentile_kind.name()
    ));
    out.push_str(&format!("{}\n\n", standing_statement(&data.selected)));

    if !data.scenarios.is_empty() {
        out.push_str("2. Scenario comparison\n");
        for m in &data.scenarios {
            out.push_str(&format!(
                "{}: average {}, percentile {} (n={})\n",
                m.scenario,
                format_f64_2(m.average_score),
                format_f64_2(m.percentile),
                m.n_candidates
            ));
        }
        out.push('\n');
    }

    out.push_str("Data notes\n");
    out.push_str(&format!("Question rows: {}\n", data.load.question_rows));
    out.push_str(&format!("Summary rows: {}\n", data.load.summary_rows));
    out.push_str(&format!(
        "Candidate totals: {}\n",
        data.load.candidate_totals
    ));
    out.push_str(&format!("Candidates: {}\n", data.load.candidates));
    if data.load.unlabelled_question_rows > 0 {
        out.push_str(&format!(
            "Rows without prompt or question text: {}\n",
            data.load.unlabelled_question_rows
        ));
    }
    out.push_str(&format!(
        "Distinct prompt / question labels: {} (questions), {} (summary)\n",
        data.load.distinct_question_labels, data.load.distinct_summary_labels
    ));
    if data.load.rows_missing_key > 0 {
        out.push_str(&format!(
            "Rows without scenario or candidate (excluded): {}\n",
            data.load.rows_missing_key
        ));
    }
    if data.load.missing_scores > 0 {
        out.push_str(&format!(
            "Rows with missing score (counted as nothing): {}\n",
            data.load.missing_scores
        ));
    }

    out
}

fn standing_statement(m: &ScenarioMetrics) -> &'static str {
    if !m.known || m.n_candidates == 0 {
        "No candidate data for this scenario."
    } else if m.percentile >= 75.0 {
        "Score is in the top quarter of candidates."
    } else if m.percentile >= 50.0 {
        "Score is at or above the median candidate."
    } else if m.percentile >= 25.0 {
        "Score is below the median candidate."
    } else {
        "Score is in the bottom quarter of candidates."
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
