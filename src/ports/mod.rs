//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the orchestration services and the outside world. Adapters implement
//! these ports.
//!
//! - `AgentClient` - outbound LLM provider invocation
//! - `PdfProcessor` - combined document fetch + text extraction

mod agent;
mod pdf;

pub use agent::{AgentClient, AgentInvocation};
pub use pdf::PdfProcessor;
