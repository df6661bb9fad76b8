use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_utils::extractor::require_session;
use shared_utils::session::SessionStore;

use crate::handlers;
use crate::services::MessagingService;

pub fn messaging_routes(service: Arc<MessagingService>, sessions: Arc<SessionStore>) -> Router {
    Router::new()
        .route("/conversations", get(handlers::list_conversations))
        .route("/conversations/{conversation_id}", get(handlers::get_conversation))
        .route("/conversations/{conversation_id}/messages", post(handlers::send_message))
        .route("/conversations/{conversation_id}/read", post(handlers::mark_read))
        .layer(middleware::from_fn_with_state(sessions, require_session))
        .with_state(service)
}
