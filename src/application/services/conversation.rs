//! Conversation orchestration service.
//!
//! One parameterized flow covers all three actions: validate, fetch +
//! extract, build the action's prompt, invoke the agent, require a non-blank
//! response. Action-specific behavior is isolated entirely to the prompt
//! table.

use std::sync::Arc;

use crate::domain::{ConversationRequest, DomainError};
use crate::ports::{AgentClient, PdfProcessor};

use super::prompts::{self, PromptSettings};

/// Successful outcome of a conversation action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completed {
    /// Generated text.
    pub data: String,
    /// Action-specific success message.
    pub message: String,
}

/// Composes the PDF pipeline, prompt table, and agent client.
pub struct ConversationService {
    documents: Arc<dyn PdfProcessor>,
    agent: Arc<dyn AgentClient>,
    settings: PromptSettings,
}

impl ConversationService {
    /// Creates a new service over the given ports.
    pub fn new(
        documents: Arc<dyn PdfProcessor>,
        agent: Arc<dyn AgentClient>,
        settings: PromptSettings,
    ) -> Self {
        Self {
            documents,
            agent,
            settings,
        }
    }

    /// Run one conversation action end to end.
    ///
    /// Validation happens before any network or filesystem work; a request
    /// that fails its preconditions never reaches the fetcher or the agent.
    pub async fn run(&self, request: &ConversationRequest) -> Result<Completed, DomainError> {
        request.validate()?;

        tracing::info!(
            action = %request.action,
            document_url = %request.document_url,
            min_page = ?request.min_page,
            max_page = ?request.max_page,
            "Processing conversation request"
        );

        let document = self
            .documents
            .process_pdf(&request.document_url, request.min_page, request.max_page)
            .await?;

        let (invocation, prompt) = prompts::build(
            request.action,
            &document,
            request.question.as_deref(),
            &self.settings,
        );

        let output = self.agent.run(&invocation, &prompt).await?;
        let output = output.trim();
        if output.is_empty() {
            return Err(DomainError::agent_processing(
                "Empty response from agent",
                &invocation.name,
            ));
        }

        tracing::info!(action = %request.action, "Request processed successfully");
        Ok(Completed {
            data: output.to_string(),
            message: request.action.success_message().to_string(),
        })
    }
}
