use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_utils::extractor::session_middleware;

use crate::handlers::{self, AuthState};

pub fn auth_routes(state: Arc<AuthState>) -> Router {
    let session_routes = Router::new()
        .route("/session", get(handlers::get_session))
        .route("/logout", post(handlers::logout))
        .layer(middleware::from_fn_with_state(
            state.sessions.clone(),
            session_middleware,
        ));

    Router::new()
        .route("/login", post(handlers::login))
        .route("/session/restore", post(handlers::restore_session))
        .route("/register/patient", post(handlers::register_patient))
        .route("/register/doctor", post(handlers::register_doctor))
        .merge(session_routes)
        .with_state(state)
}
