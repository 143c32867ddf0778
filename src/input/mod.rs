use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod columns;
pub mod questions;
pub mod reader;
pub mod summary;

use crate::model::records::{QuestionRecord, ScenarioSummary};
use questions::parse_questions;
use summary::parse_summaries;

#[derive(Debug, Clone)]
pub struct InputBundle {
    pub questions_path: PathBuf,
    pub summary_path: PathBuf,
    pub questions: Vec<QuestionRecord>,
    pub summaries: Vec<ScenarioSummary>,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("missing column `{column}` in {path}")]
    MissingColumn { path: String, column: &'static str },
    #[error(
        "data format error in {path} line {line}: column `{column}` value {value:?} is not numeric"
    )]
    DataFormat {
        path: String,
        line: u64,
        column: &'static str,
        value: String,
    },
}

impl InputError {
    pub fn csv(path: &Path, source: csv::Error) -> Self {
        InputError::Csv {
            path: path.display().to_string(),
            source,
        }
    }
}

pub fn load_input(questions_path: &Path, summary_path: &Path) -> Result<InputBundle, InputError> {
    ensure_exists(questions_path)?;
    ensure_exists(summary_path)?;

    tracing::info!(
        questions = %questions_path.display(),
        summary = %summary_path.display(),
        "discovered input files"
    );

    let questions = parse_questions(questions_path)?;
    let summaries = parse_summaries(summary_path)?;

    tracing::info!(
        question_rows = questions.len(),
        summary_rows = summaries.len(),
        "input tables loaded"
    );

    Ok(InputBundle {
        questions_path: questions_path.to_path_buf(),
        summary_path: summary_path.to_path_buf(),
        questions,
        summaries,
    })
}

pub fn load_questions(questions_path: &Path) -> Result<Vec<QuestionRecord>, InputError> {
    ensure_exists(questions_path)?;
    parse_questions(questions_path)
}

fn ensure_exists(path: &Path) -> Result<(), InputError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(InputError::MissingInput(format!(
            "{} does not exist or is not a file",
            path.display()
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
