use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use shared_config::AppConfig;
use shared_utils::extractor::session_middleware;
use shared_utils::session::SessionStore;

use crate::handlers;

pub fn patient_portal_routes(sessions: Arc<SessionStore>) -> Router {
    Router::new()
        .route("/dashboard", get(handlers::patient_dashboard))
        .layer(middleware::from_fn_with_state(sessions, session_middleware))
}

pub fn doctor_portal_routes(sessions: Arc<SessionStore>, config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/dashboard", get(handlers::doctor_dashboard))
        .route("/patients", get(handlers::list_patients))
        .route("/schedule", get(handlers::doctor_schedule))
        .layer(middleware::from_fn_with_state(sessions, session_middleware))
        .with_state(config)
}

pub fn report_routes() -> Router {
    Router::new().route("/", get(handlers::get_report))
}
