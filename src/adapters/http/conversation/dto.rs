//! HTTP DTOs for conversation endpoints.
//!
//! These types decouple the HTTP API from domain types. Field names follow
//! the wire contract: `documenturl` is a single lowercase word, the options
//! request uses camelCase, and the success envelope carries `userType`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::application::Completed;
use crate::domain::{Action, ConversationRequest, DomainError, ErrorCode};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /conversation/`.
///
/// All fields are optional at the deserialization layer so that missing
/// fields surface as a structured validation error instead of a framework
/// rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversationBody {
    pub action: Option<String>,
    pub documenturl: Option<String>,
    pub question: Option<String>,
    pub min_page: Option<i64>,
    pub max_page: Option<i64>,
}

impl ConversationBody {
    /// Validate shape and convert into a domain request.
    ///
    /// Fails fast on missing fields, unknown actions, and non-positive page
    /// numbers, before any I/O occurs.
    pub fn into_domain(self) -> Result<ConversationRequest, DomainError> {
        let action = self
            .action
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or_else(|| DomainError::validation("Missing required field: action"))?;
        let action = Action::parse(action).ok_or_else(|| {
            DomainError::validation(format!(
                "Invalid action type. Allowed values: {}",
                Action::allowed_values()
            ))
        })?;

        let document_url = self
            .documenturl
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| DomainError::validation("Missing required field: documenturl"))?;

        let min_page = convert_page(self.min_page)?;
        let max_page = convert_page(self.max_page)?;

        Ok(ConversationRequest {
            action,
            document_url,
            question: self.question,
            min_page,
            max_page,
        })
    }
}

fn convert_page(value: Option<i64>) -> Result<Option<u32>, DomainError> {
    match value {
        None => Ok(None),
        Some(v) if v >= 1 && v <= u32::MAX as i64 => Ok(Some(v as u32)),
        Some(_) => Err(DomainError::validation("Invalid page range specified")),
    }
}

/// Body of `POST /options/`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsBody {
    #[serde(default)]
    pub chatbot_id: Option<String>,
    #[serde(default)]
    pub started_chatbot: Option<bool>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Success envelope for `POST /conversation/`.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationReply {
    pub content: ReplyContent,
    #[serde(rename = "userType")]
    pub user_type: String,
}

/// Inner payload of the success envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyContent {
    pub success: bool,
    pub message: String,
    pub data: String,
}

impl ConversationReply {
    /// Wraps a completed action in the chatbot envelope.
    pub fn success(completed: Completed) -> Self {
        Self {
            content: ReplyContent {
                success: true,
                message: completed.message,
                data: completed.data,
            },
            user_type: "Chatbot".to_string(),
        }
    }
}

/// Static payload of `GET /conversation/`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

impl ApiInfo {
    pub fn current() -> Self {
        let mut endpoints = BTreeMap::new();
        endpoints.insert(
            "POST /conversation/".to_string(),
            "Process conversation".to_string(),
        );
        endpoints.insert(
            "POST /options/".to_string(),
            "Get available options".to_string(),
        );
        Self {
            message: "File Talk AI - Conversation API".to_string(),
            version: "v1".to_string(),
            endpoints,
        }
    }
}

/// One entry of the options menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionEntry {
    pub action: String,
    pub label: String,
    pub description: String,
}

impl OptionEntry {
    fn new(action: &str, label: &str, description: &str) -> Self {
        Self {
            action: action.to_string(),
            label: label.to_string(),
            description: description.to_string(),
        }
    }
}

/// Payload of `POST /options/`.
#[derive(Debug, Clone, Serialize)]
pub struct OptionsReply {
    pub options: Vec<OptionEntry>,
}

impl OptionsReply {
    /// Menu shown once a chatbot session is running.
    pub fn default_options() -> Self {
        Self {
            options: vec![
                OptionEntry::new(
                    Action::QuestionAnswer.as_str(),
                    "Ask a Question",
                    "Get answers from your PDF document",
                ),
                OptionEntry::new(
                    Action::Summarizer.as_str(),
                    "Summarize Document",
                    "Get a comprehensive summary of your PDF",
                ),
                OptionEntry::new(
                    Action::GenerateQuestions.as_str(),
                    "Generate Questions",
                    "Generate study questions from your PDF",
                ),
                OptionEntry::new(
                    "main_menu",
                    "Main Menu",
                    "Go back to main menu and start a new conversation",
                ),
            ],
        }
    }

    /// Menu shown before any document has been uploaded.
    pub fn upload_only_options() -> Self {
        Self {
            options: vec![OptionEntry::new(
                "upload_file",
                "Upload PDF File",
                "Upload a PDF document to start chatting",
            )],
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response
// ════════════════════════════════════════════════════════════════════════════════

/// Error envelope: `{error: {code, message, details?}}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
}

impl ErrorBody {
    /// Renders a domain error for the wire.
    ///
    /// Internal errors are reduced to a generic message; their details are
    /// included only when verbose diagnostics are enabled.
    pub fn from_domain(error: &DomainError, verbose: bool) -> Self {
        let internal = error.code == ErrorCode::InternalError;
        let message = if internal && !verbose {
            "An internal error occurred. Please try again later".to_string()
        } else {
            error.message.clone()
        };
        let details = if error.details.is_empty() || (internal && !verbose) {
            None
        } else {
            Some(error.details.clone())
        };

        Self {
            error: ErrorDetail {
                code: error.code.as_str().to_string(),
                message,
                details,
            },
        }
    }
}
