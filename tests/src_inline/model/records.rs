use super::*;

#[test]
fn test_null_prompt_keeps_leading_separator() {
    let text = NormalizedText::from_fields(None, Some("Next step?"));
    assert_eq!(text.prompt, "");
    assert_eq!(text.prompt_and_question, " / Next step?");
}

#[test]
fn test_null_question_keeps_trailing_separator() {
    let text = NormalizedText::from_fields(Some("A 54 year old"), None);
    assert_eq!(text.question, "");
    assert_eq!(text.prompt_and_question, "A 54 year old / ");
}

#[test]
fn test_both_null_is_bare_separator() {
    let record = ScenarioSummary {
        scenario_name: Some("Breast - Benign".to_string()),
        prompt: None,
        question: None,
        total_correct_answers: Some(3.0),
    };
    assert_eq!(record.normalized_text().prompt_and_question, " / ");
}

#[test]
fn test_question_record_concatenation() {
    let record = QuestionRecord {
        scenario_name: Some("S".to_string()),
        candidate_id: Some("c1".to_string()),
        prompt: Some("P".to_string()),
        question: Some("Q".to_string()),
        candidate_score_per_question: Some(1.0),
    };
    let text = record.normalized_text();
    assert_eq!(text.prompt, "P");
    assert_eq!(text.question, "Q");
    assert_eq!(text.prompt_and_question, "P / Q");
}

#[test]
fn test_candidate_id_numeric_spellings_merge() {
    assert_eq!(normalize_candidate_id("101").as_deref(), Some("101"));
    assert_eq!(normalize_candidate_id("101.0").as_deref(), Some("101"));
    assert_eq!(normalize_candidate_id(" 101 ").as_deref(), Some("101"));
    assert_eq!(normalize_candidate_id("-7.0").as_deref(), Some("-7"));
}

#[test]
fn test_candidate_id_text_kept() {
    assert_eq!(normalize_candidate_id(" cand-07 ").as_deref(), Some("cand-07"));
    assert_eq!(normalize_candidate_id("007x").as_deref(), Some("007x"));
    assert_eq!(normalize_candidate_id("101.5").as_deref(), Some("101.5"));
    assert_eq!(normalize_candidate_id("   "), None);
}
