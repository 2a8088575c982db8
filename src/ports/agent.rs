//! Agent Client Port - interface for LLM provider invocations.
//!
//! Abstracts the outbound LLM call so orchestration services can generate
//! text without coupling to a specific provider. Implementations translate
//! the provider's wire format and failures into a plain string or a
//! [`DomainError`].

use async_trait::async_trait;

use crate::domain::DomainError;

/// Port for running a configured agent against a prompt.
///
/// Implementations make exactly one outbound network call per `run`; the
/// pipeline applies no retry at this seam.
#[async_trait]
pub trait AgentClient: Send + Sync {
    /// Run the agent and return the normalized, stripped response text.
    async fn run(&self, invocation: &AgentInvocation, prompt: &str) -> Result<String, DomainError>;
}

/// A remote LLM invocation context, built fresh per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentInvocation {
    /// Agent name, used in logs and error details.
    pub name: String,
    /// What the agent is for.
    pub description: String,
    /// Role line included in the system message.
    pub role: String,
    /// Ordered instruction list.
    pub instructions: Vec<String>,
    /// Model identifier sent to the provider.
    pub model_id: String,
    /// Ask the model to respond in Markdown.
    pub markdown: bool,
}

impl AgentInvocation {
    /// Creates a new invocation with the given name and model.
    pub fn new(name: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            role: String::new(),
            instructions: Vec::new(),
            model_id: model_id.into(),
            markdown: true,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Appends an instruction.
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instructions.push(instruction.into());
        self
    }

    /// Sets markdown output.
    pub fn with_markdown(mut self, markdown: bool) -> Self {
        self.markdown = markdown;
        self
    }

    /// Composes the system message sent to the provider: description, role,
    /// numbered instructions, and the markdown directive.
    pub fn system_message(&self) -> String {
        let mut parts = Vec::new();
        if !self.description.is_empty() {
            parts.push(self.description.clone());
        }
        if !self.role.is_empty() {
            parts.push(format!("Role: {}", self.role));
        }
        if !self.instructions.is_empty() {
            let numbered = self
                .instructions
                .iter()
                .enumerate()
                .map(|(i, inst)| format!("{}. {}", i + 1, inst))
                .collect::<Vec<_>>()
                .join("\n");
            parts.push(format!("Instructions:\n{}", numbered));
        }
        if self.markdown {
            parts.push("Respond in Markdown.".to_string());
        }
        parts.join("\n\n")
    }
}
