//! Agent Client Adapters.
//!
//! Implementations of the AgentClient port.
//!
//! ## Available Adapters
//!
//! - `GroqClient` - Groq's OpenAI-compatible chat completions API
//! - `MockAgentClient` - Configurable mock for testing

mod groq_client;
mod mock_client;

pub use groq_client::{GroqClient, GroqConfig};
pub use mock_client::{MockAgentClient, RecordedCall};
