use std::path::Path;

use crate::input::InputError;
use crate::input::columns::{Header, NumericColumn, text_field};
use crate::input::reader::open_csv;
use crate::model::records::{QuestionRecord, normalize_candidate_id};

pub const COL_SCENARIO: &str = "scenario_name";
pub const COL_CANDIDATE: &str = "candidate_id";
pub const COL_PROMPT: &str = "prompt";
pub const COL_QUESTION: &str = "question";
pub const COL_SCORE: &str = "candidate_score_per_question";

pub fn parse_questions(path: &Path) -> Result<Vec<QuestionRecord>, InputError> {
    let mut reader = open_csv(path)?;
    let header = Header::new(reader.headers().map_err(|e| InputError::csv(path, e))?);

    let scenario_col = header.require(COL_SCENARIO, path)?;
    let candidate_col = header.require(COL_CANDIDATE, path)?;
    let score = NumericColumn {
        path,
        column: COL_SCORE,
        idx: header.require(COL_SCORE, path)?,
    };
    let prompt_col = header.optional(COL_PROMPT, path);
    let question_col = header.optional(COL_QUESTION, path);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| InputError::csv(path, e))?;
        records.push(QuestionRecord {
            scenario_name: text_field(&row, Some(scenario_col)),
            candidate_id: text_field(&row, Some(candidate_col))
                .and_then(|id| normalize_candidate_id(&id)),
            prompt: text_field(&row, prompt_col),
            question: text_field(&row, question_col),
            candidate_score_per_question: score.parse(&row)?,
        });
    }

    if records.is_empty() {
        tracing::warn!(path = %path.display(), "question table has no rows");
    }
    Ok(records)
}
