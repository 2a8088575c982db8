//! HTTP handlers for conversation endpoints.
//!
//! These handlers connect axum routes to the orchestration service and are
//! the single place translating domain errors into HTTP statuses and JSON
//! bodies.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::ConversationService;
use crate::domain::DomainError;

use super::dto::{
    ApiInfo, ConversationBody, ConversationReply, ErrorBody, OptionsBody, OptionsReply,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for conversation handlers.
#[derive(Clone)]
pub struct ConversationAppState {
    pub service: Arc<ConversationService>,
    /// Include internal error details in 500 responses.
    pub verbose_errors: bool,
}

impl ConversationAppState {
    /// Creates a new ConversationAppState.
    pub fn new(service: Arc<ConversationService>) -> Self {
        Self {
            service,
            verbose_errors: false,
        }
    }

    /// Enables verbose internal error details.
    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// GET /conversation/
// ════════════════════════════════════════════════════════════════════════════════

/// GET /conversation/ - Static API metadata. No side effects.
pub async fn get_conversation_info() -> impl IntoResponse {
    Json(ApiInfo::current())
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /conversation/
// ════════════════════════════════════════════════════════════════════════════════

/// POST /conversation/ - Run one conversation action.
///
/// Validates the request shape, dispatches to the orchestration service, and
/// renders the uniform success/error envelope.
///
/// # Errors
/// - 400 Bad Request: validation failures and PDF download/extraction errors
/// - 429 Too Many Requests: provider rate limit
/// - 500 Internal Server Error: agent/provider failures
/// - 503 Service Unavailable: agent-side timeout
pub async fn post_conversation(
    State(state): State<ConversationAppState>,
    Json(body): Json<ConversationBody>,
) -> Response {
    tracing::info!(action = ?body.action, "Received conversation request");

    let request = match body.into_domain() {
        Ok(request) => request,
        Err(error) => {
            tracing::warn!(error = %error, "Invalid conversation request");
            return error_response(&error, state.verbose_errors);
        }
    };

    match state.service.run(&request).await {
        Ok(completed) => (StatusCode::OK, Json(ConversationReply::success(completed))).into_response(),
        Err(error) => {
            tracing::error!(code = %error.code, error = %error, "Conversation request failed");
            error_response(&error, state.verbose_errors)
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /options/
// ════════════════════════════════════════════════════════════════════════════════

/// POST /options/ - Static menu of available actions.
///
/// Keyed only on whether the caller reports an already-started chatbot
/// session; no pipeline interaction.
pub async fn post_options(Json(body): Json<OptionsBody>) -> impl IntoResponse {
    let started = body.started_chatbot.unwrap_or(true);
    tracing::info!(chatbot_id = ?body.chatbot_id, started, "Received options request");

    let reply = if started {
        OptionsReply::default_options()
    } else {
        OptionsReply::upload_only_options()
    };
    Json(reply)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// Renders a domain error as its declared HTTP status plus the error body.
fn error_response(error: &DomainError, verbose: bool) -> Response {
    let status = StatusCode::from_u16(error.code.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorBody::from_domain(error, verbose))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[tokio::test]
    async fn error_response_uses_declared_status() {
        let response = error_response(&DomainError::rate_limited("slow down"), false);
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let response = error_response(&DomainError::validation("bad"), false);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = error_response(&DomainError::timeout(120), false);
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = error_response(
            &DomainError::new(ErrorCode::ProviderApiError, "boom"),
            false,
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
