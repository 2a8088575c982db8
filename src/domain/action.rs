//! Conversation action types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three supported conversation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    QuestionAnswer,
    Summarizer,
    GenerateQuestions,
}

impl Action {
    /// All supported actions, in menu order.
    pub const ALL: [Action; 3] = [
        Action::QuestionAnswer,
        Action::Summarizer,
        Action::GenerateQuestions,
    ];

    /// Wire representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::QuestionAnswer => "question_answer",
            Action::Summarizer => "summarizer",
            Action::GenerateQuestions => "generate_questions",
        }
    }

    /// Parses a wire action string. Trims and lowercases before matching.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "question_answer" => Some(Action::QuestionAnswer),
            "summarizer" => Some(Action::Summarizer),
            "generate_questions" => Some(Action::GenerateQuestions),
            _ => None,
        }
    }

    /// Message returned in the success envelope for this action.
    pub fn success_message(&self) -> &'static str {
        match self {
            Action::QuestionAnswer => "Question answered successfully",
            Action::Summarizer => "Document summarized successfully",
            Action::GenerateQuestions => "Questions generated successfully",
        }
    }

    /// Comma-separated list of allowed wire values, for validation messages.
    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_actions() {
        assert_eq!(Action::parse("question_answer"), Some(Action::QuestionAnswer));
        assert_eq!(Action::parse("summarizer"), Some(Action::Summarizer));
        assert_eq!(Action::parse("generate_questions"), Some(Action::GenerateQuestions));
    }

    #[test]
    fn parse_trims_and_lowercases() {
        assert_eq!(Action::parse("  SUMMARIZER "), Some(Action::Summarizer));
    }

    #[test]
    fn parse_rejects_unknown_actions() {
        assert_eq!(Action::parse("translate"), None);
        assert_eq!(Action::parse(""), None);
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&Action::QuestionAnswer).unwrap();
        assert_eq!(json, "\"question_answer\"");
    }

    #[test]
    fn success_messages_match_actions() {
        assert_eq!(
            Action::Summarizer.success_message(),
            "Document summarized successfully"
        );
        assert_eq!(
            Action::QuestionAnswer.success_message(),
            "Question answered successfully"
        );
        assert_eq!(
            Action::GenerateQuestions.success_message(),
            "Questions generated successfully"
        );
    }

    #[test]
    fn allowed_values_lists_all_actions() {
        let allowed = Action::allowed_values();
        assert_eq!(allowed, "question_answer, summarizer, generate_questions");
    }
}
