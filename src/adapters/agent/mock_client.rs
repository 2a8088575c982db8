//! Mock Agent Client for testing.
//!
//! Configurable mock implementation of the AgentClient port, allowing tests
//! to run without calling the real provider.
//!
//! # Features
//!
//! - Pre-configured responses and error injection
//! - Call tracking (invocation + prompt) for verification
//!
//! # Example
//!
//! ```ignore
//! let client = MockAgentClient::new().with_response("Summary text");
//! let text = client.run(&invocation, "prompt").await?;
//! assert_eq!(text, "Summary text");
//! assert_eq!(client.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::DomainError;
use crate::ports::{AgentClient, AgentInvocation};

/// A recorded agent call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub invocation: AgentInvocation,
    pub prompt: String,
}

/// Mock agent client with queued responses and call recording.
#[derive(Debug, Clone, Default)]
pub struct MockAgentClient {
    responses: Arc<Mutex<VecDeque<Result<String, DomainError>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockAgentClient {
    /// Creates a new mock with no queued responses.
    ///
    /// When the queue is empty, `run` returns a default placeholder response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(content.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: DomainError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All recorded calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Prompt of the most recent call, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|c| c.prompt.clone())
    }
}

#[async_trait]
impl AgentClient for MockAgentClient {
    async fn run(&self, invocation: &AgentInvocation, prompt: &str) -> Result<String, DomainError> {
        self.calls.lock().unwrap().push(RecordedCall {
            invocation: invocation.clone(),
            prompt: prompt.to_string(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("Mock agent response".to_string()))
    }
}
