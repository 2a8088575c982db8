//! Application layer - orchestration of domain operations across ports.

pub mod services;

pub use services::{Completed, ConversationService, PromptSettings};
