//! Validated conversation request.

use url::Url;

use super::action::Action;
use super::errors::DomainError;

/// A conversation request after boundary-level shape checks.
///
/// [`validate`](Self::validate) enforces action-specific preconditions and is
/// called before any network or filesystem work happens.
#[derive(Debug, Clone)]
pub struct ConversationRequest {
    pub action: Action,
    pub document_url: String,
    pub question: Option<String>,
    pub min_page: Option<u32>,
    pub max_page: Option<u32>,
}

impl ConversationRequest {
    /// Validate request invariants.
    ///
    /// - `document_url` must be a syntactically valid http(s) URL
    /// - `question` is required and non-blank for `question_answer`
    /// - page bounds, when both present, must be positive with min <= max
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.document_url.trim().is_empty() {
            return Err(DomainError::validation("Missing required field: documenturl"));
        }

        let url = Url::parse(self.document_url.trim())
            .map_err(|_| DomainError::validation("Invalid URL format"))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(DomainError::validation("Invalid URL format"));
        }

        if self.action == Action::QuestionAnswer
            && !self.question.as_ref().is_some_and(|q| !q.trim().is_empty())
        {
            return Err(DomainError::validation(
                "Question is required for question_answer action",
            ));
        }

        if let (Some(min), Some(max)) = (self.min_page, self.max_page) {
            if min == 0 || min > max {
                return Err(DomainError::validation("Invalid page range specified"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ErrorCode;

    fn request(action: Action) -> ConversationRequest {
        ConversationRequest {
            action,
            document_url: "https://example.com/doc.pdf".to_string(),
            question: None,
            min_page: None,
            max_page: None,
        }
    }

    #[test]
    fn valid_summarizer_request_passes() {
        assert!(request(Action::Summarizer).validate().is_ok());
    }

    #[test]
    fn empty_url_is_rejected() {
        let mut req = request(Action::Summarizer);
        req.document_url = "  ".to_string();
        let err = req.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let mut req = request(Action::Summarizer);
        req.document_url = "ftp://example.com/doc.pdf".to_string();
        assert!(req.validate().is_err());

        req.document_url = "not a url".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn question_answer_requires_question() {
        let mut req = request(Action::QuestionAnswer);
        assert!(req.validate().is_err());

        req.question = Some("   ".to_string());
        assert!(req.validate().is_err());

        req.question = Some("What is this about?".to_string());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn other_actions_do_not_require_question() {
        assert!(request(Action::GenerateQuestions).validate().is_ok());
    }

    #[test]
    fn inverted_page_range_is_rejected() {
        let mut req = request(Action::Summarizer);
        req.min_page = Some(5);
        req.max_page = Some(3);
        assert!(req.validate().is_err());
    }

    #[test]
    fn zero_min_page_is_rejected() {
        let mut req = request(Action::Summarizer);
        req.min_page = Some(0);
        req.max_page = Some(3);
        assert!(req.validate().is_err());
    }

    #[test]
    fn single_bound_is_accepted() {
        let mut req = request(Action::Summarizer);
        req.min_page = Some(2);
        assert!(req.validate().is_ok());
    }
}
