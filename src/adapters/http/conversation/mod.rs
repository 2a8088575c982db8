//! Conversation HTTP adapter - request boundary for the PDF pipeline.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::ConversationAppState;
pub use routes::{conversation_router, conversation_routes};
