pub const PROMPT_QUESTION_SEPARATOR: &str = " / ";

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionRecord {
    pub scenario_name: Option<String>,
    pub candidate_id: Option<String>,
    pub prompt: Option<String>,
    pub question: Option<String>,
    pub candidate_score_per_question: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSummary {
    pub scenario_name: Option<String>,
    pub prompt: Option<String>,
    pub question: Option<String>,
    pub total_correct_answers: Option<f64>,
}

/// Text fields after null substitution, plus the display label built from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub prompt: String,
    pub question: String,
    pub prompt_and_question: String,
}

impl NormalizedText {
    pub fn from_fields(prompt: Option<&str>, question: Option<&str>) -> Self {
        let prompt = normalize_text(prompt);
        let question = normalize_text(question);
        let prompt_and_question = prompt_and_question(&prompt, &question);
        Self {
            prompt,
            question,
            prompt_and_question,
        }
    }
}

impl QuestionRecord {
    pub fn normalized_text(&self) -> NormalizedText {
        NormalizedText::from_fields(self.prompt.as_deref(), self.question.as_deref())
    }
}

impl ScenarioSummary {
    pub fn normalized_text(&self) -> NormalizedText {
        NormalizedText::from_fields(self.prompt.as_deref(), self.question.as_deref())
    }
}

pub fn normalize_text(value: Option<&str>) -> String {
    value.map(str::to_string).unwrap_or_default()
}

/// Candidate ids exported from numeric columns may read `101`, `101.0` or
/// ` 101`; all three name the same candidate. Blank ids are missing.
pub fn normalize_candidate_id(raw: &str) -> Option<String> {
    let id = raw.trim();
    if id.is_empty() {
        return None;
    }
    match id.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 9.0e15 => {
            Some(format!("{}", v as i64))
        }
        _ => Some(id.to_string()),
    }
}

pub fn prompt_and_question(prompt: &str, question: &str) -> String {
    let mut out =
        String::with_capacity(prompt.len() + PROMPT_QUESTION_SEPARATOR.len() + question.len());
    out.push_str(prompt);
    out.push_str(PROMPT_QUESTION_SEPARATOR);
    out.push_str(question);
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/records.rs"]
mod tests;
