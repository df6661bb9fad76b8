use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::AssistantService;

pub fn assistant_routes(service: Arc<AssistantService>) -> Router {
    Router::new()
        .route("/reply", post(handlers::reply))
        .route("/conversations", post(handlers::start_conversation))
        .route(
            "/conversations/{conversation_id}",
            get(handlers::get_conversation).delete(handlers::close_conversation),
        )
        .route("/conversations/{conversation_id}/messages", post(handlers::send_message))
        .with_state(service)
}
