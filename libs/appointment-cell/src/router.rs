use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{self, BookingState};

pub fn booking_routes(state: Arc<BookingState>) -> Router {
    Router::new()
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/{session_id}",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route("/sessions/{session_id}/therapy", put(handlers::select_therapy))
        .route("/sessions/{session_id}/practitioner", put(handlers::select_practitioner))
        .route("/sessions/{session_id}/date", put(handlers::select_date))
        .route("/sessions/{session_id}/time", put(handlers::select_time))
        .route("/sessions/{session_id}/notes", put(handlers::set_notes))
        .route("/sessions/{session_id}/next", post(handlers::next_step))
        .route("/sessions/{session_id}/back", post(handlers::previous_step))
        .route("/sessions/{session_id}/calendar", get(handlers::get_calendar))
        .route(
            "/sessions/{session_id}/calendar/{direction}",
            post(handlers::shift_calendar),
        )
        .route("/sessions/{session_id}/confirmation", get(handlers::get_confirmation))
        .route("/sessions/{session_id}/confirm", post(handlers::confirm_booking))
        .with_state(state)
}
