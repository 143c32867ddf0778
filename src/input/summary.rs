use std::path::Path;

use crate::input::InputError;
use crate::input::columns::{Header, NumericColumn, text_field};
use crate::input::reader::open_csv;
use crate::model::records::ScenarioSummary;

pub const COL_SCENARIO: &str = "scenario_name";
pub const COL_PROMPT: &str = "prompt";
pub const COL_QUESTION: &str = "question";
pub const COL_TOTAL_CORRECT: &str = "total_correct_answers";

pub fn parse_summaries(path: &Path) -> Result<Vec<ScenarioSummary>, InputError> {
    let mut reader = open_csv(path)?;
    let header = Header::new(reader.headers().map_err(|e| InputError::csv(path, e))?);

    let scenario_col = header.require(COL_SCENARIO, path)?;
    let total = NumericColumn {
        path,
        column: COL_TOTAL_CORRECT,
        idx: header.require(COL_TOTAL_CORRECT, path)?,
    };
    let prompt_col = header.optional(COL_PROMPT, path);
    let question_col = header.optional(COL_QUESTION, path);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| InputError::csv(path, e))?;
        records.push(ScenarioSummary {
            scenario_name: text_field(&row, Some(scenario_col)),
            prompt: text_field(&row, prompt_col),
            question: text_field(&row, question_col),
            total_correct_answers: total.parse(&row)?,
        });
    }

    if records.is_empty() {
        tracing::warn!(path = %path.display(), "summary table has no rows");
    }
    Ok(records)
}
