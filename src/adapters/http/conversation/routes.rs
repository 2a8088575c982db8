//! Axum routes for conversation endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    get_conversation_info, post_conversation, post_options, ConversationAppState,
};

/// Creates routes for conversation endpoints.
///
/// REST Endpoints:
/// - GET /conversation/ - API metadata
/// - POST /conversation/ - Process conversation
/// - POST /options/ - Available options menu
pub fn conversation_routes() -> Router<ConversationAppState> {
    Router::new()
        .route(
            "/conversation/",
            get(get_conversation_info).post(post_conversation),
        )
        .route("/options/", post(post_options))
}

/// Router with state applied, ready to merge into the application.
pub fn conversation_router(state: ConversationAppState) -> Router {
    conversation_routes().with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_routes_creates_valid_router() {
        let _routes = conversation_routes();
    }
}
