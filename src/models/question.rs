// src/models/question.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// The five AZ-204 certification objectives a question may belong to.
pub const SKILL_AREAS: [&str; 5] = [
    "Develop Azure compute solutions",
    "Develop for Azure storage",
    "Implement Azure security",
    "Connect to and consume Azure services",
    "Monitor, troubleshoot, and optimize Azure solutions",
];

/// A single multiple-choice practice question.
///
/// Field names match the wire format of the API (`skillArea` in camelCase);
/// records are immutable once loaded into the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Question {
    pub id: i64,

    /// Categorization label, e.g. "App Service".
    #[validate(length(min = 1))]
    pub topic: String,

    /// One of the fixed certification objectives (see [`SKILL_AREAS`]).
    #[serde(rename = "skillArea")]
    #[validate(custom(function = validate_skill_area))]
    pub skill_area: String,

    /// The question text; non-empty, must end with a question mark.
    #[validate(length(min = 1), custom(function = validate_question_text))]
    pub question: String,

    /// Exactly 4 distinct non-empty options, order preserved on the wire.
    #[validate(custom(function = validate_options))]
    pub options: Vec<String>,

    /// The correct option, verbatim. Must equal one element of `options`.
    #[validate(length(min = 1))]
    pub answer: String,

    /// Shown after submission.
    #[validate(length(min = 21))]
    pub explanation: String,
}

impl Question {
    /// Full load-time check: the derive-level field rules plus the
    /// cross-field invariant that `answer` is one of `options`.
    pub fn validate_record(&self) -> Result<(), String> {
        self.validate().map_err(|e| e.to_string())?;

        if !self.options.contains(&self.answer) {
            return Err(format!(
                "answer \"{}\" is not one of the options",
                self.answer
            ));
        }

        Ok(())
    }
}

fn validate_skill_area(skill_area: &str) -> Result<(), validator::ValidationError> {
    if !SKILL_AREAS.contains(&skill_area) {
        return Err(validator::ValidationError::new("unknown_skill_area"));
    }
    Ok(())
}

fn validate_question_text(question: &str) -> Result<(), validator::ValidationError> {
    if !question.ends_with('?') {
        return Err(validator::ValidationError::new("missing_question_mark"));
    }
    Ok(())
}

fn validate_options(options: &[String]) -> Result<(), validator::ValidationError> {
    if options.len() != 4 {
        return Err(validator::ValidationError::new("exactly_4_options_required"));
    }
    for opt in options {
        if opt.trim().is_empty() {
            return Err(validator::ValidationError::new("option_empty"));
        }
    }
    for (i, opt) in options.iter().enumerate() {
        if options[..i].contains(opt) {
            return Err(validator::ValidationError::new("options_not_distinct"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question {
            id: 1,
            topic: "App Service".to_string(),
            skill_area: "Develop Azure compute solutions".to_string(),
            question: "Which plan offers elastic scale for Functions?".to_string(),
            options: vec![
                "Free".to_string(),
                "Shared".to_string(),
                "PremiumV2".to_string(),
                "Elastic Premium".to_string(),
            ],
            answer: "Elastic Premium".to_string(),
            explanation: "The Elastic Premium plan scales event-driven workloads automatically."
                .to_string(),
        }
    }

    #[test]
    fn valid_record_passes() {
        assert!(sample().validate_record().is_ok());
    }

    #[test]
    fn answer_must_be_an_option() {
        let mut q = sample();
        q.answer = "Consumption".to_string();
        let err = q.validate_record().unwrap_err();
        assert!(err.contains("not one of the options"));
    }

    #[test]
    fn options_must_be_exactly_four() {
        let mut q = sample();
        q.options.pop();
        assert!(q.validate_record().is_err());
    }

    #[test]
    fn options_must_be_distinct() {
        let mut q = sample();
        q.options[0] = "Elastic Premium".to_string();
        assert!(q.validate_record().is_err());
    }

    #[test]
    fn skill_area_must_be_known() {
        let mut q = sample();
        q.skill_area = "Develop for the metaverse".to_string();
        assert!(q.validate_record().is_err());
    }

    #[test]
    fn short_question_text_is_valid() {
        let mut q = sample();
        q.question = "What is a slot?".to_string();
        assert!(q.validate_record().is_ok());
    }

    #[test]
    fn question_must_end_with_question_mark() {
        let mut q = sample();
        q.question = "Pick the plan that offers elastic scale.".to_string();
        assert!(q.validate_record().is_err());
    }

    #[test]
    fn serde_round_trip_preserves_record() {
        let q = sample();
        let wire = serde_json::to_string(&q).unwrap();
        // camelCase on the wire
        assert!(wire.contains("\"skillArea\""));
        let back: Question = serde_json::from_str(&wire).unwrap();
        assert_eq!(q, back);
        assert_eq!(q.options, back.options);
    }
}
