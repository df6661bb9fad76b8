use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::services::TherapyCatalog;

pub fn therapy_routes(catalog: Arc<TherapyCatalog>) -> Router {
    Router::new()
        .route("/", get(handlers::list_therapies))
        .route("/{therapy_id}", get(handlers::get_therapy))
        .with_state(catalog)
}
