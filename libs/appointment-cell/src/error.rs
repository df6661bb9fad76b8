use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use shared_models::error::AppError;

use crate::models::WizardStep;

#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    #[error("Booking session not found")]
    SessionNotFound,

    #[error("Therapy {0} not found")]
    TherapyNotFound(u32),

    #[error("Practitioner {0} not found")]
    PractitionerNotFound(u32),

    #[error("This choice belongs to {expected}, the wizard is at {current}")]
    WrongStep {
        expected: WizardStep,
        current: WizardStep,
    },

    #[error("Complete {0} before continuing")]
    StepIncomplete(WizardStep),

    #[error("The wizard is already at the confirmation step")]
    AlreadyAtFinalStep,

    #[error("Select a date before choosing a time")]
    DateNotSelected,

    #[error("{time} is not available on {date_key}")]
    TimeNotOffered { date_key: String, time: String },

    #[error("Day {day} is not part of the displayed month")]
    InvalidDay { day: u32 },

    #[error("Booking can only be confirmed from the confirmation step")]
    NotReadyToConfirm,

    #[error("{time} on {date_key} was taken before the booking was confirmed")]
    SlotTaken {
        date_key: String,
        time: String,
        open_slots: Vec<String>,
    },

    #[error("Booking submission failed: {0}")]
    Submission(String),
}

impl BookingError {
    fn code(&self) -> &'static str {
        match self {
            BookingError::SessionNotFound => "session_not_found",
            BookingError::TherapyNotFound(_) => "therapy_not_found",
            BookingError::PractitionerNotFound(_) => "practitioner_not_found",
            BookingError::WrongStep { .. } => "wrong_step",
            BookingError::StepIncomplete(_) => "step_incomplete",
            BookingError::AlreadyAtFinalStep => "already_at_final_step",
            BookingError::DateNotSelected => "date_not_selected",
            BookingError::TimeNotOffered { .. } => "time_not_offered",
            BookingError::InvalidDay { .. } => "invalid_day",
            BookingError::NotReadyToConfirm => "not_ready_to_confirm",
            BookingError::SlotTaken { .. } => "slot_taken",
            BookingError::Submission(_) => "submission_failed",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            BookingError::SessionNotFound
            | BookingError::TherapyNotFound(_)
            | BookingError::PractitionerNotFound(_) => StatusCode::NOT_FOUND,
            BookingError::WrongStep { .. }
            | BookingError::StepIncomplete(_)
            | BookingError::AlreadyAtFinalStep
            | BookingError::NotReadyToConfirm => StatusCode::CONFLICT,
            BookingError::DateNotSelected
            | BookingError::TimeNotOffered { .. }
            | BookingError::InvalidDay { .. } => StatusCode::BAD_REQUEST,
            BookingError::SlotTaken { .. } => StatusCode::CONFLICT,
            BookingError::Submission(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!("Booking error: {}: {}", status, self);

        let mut body = json!({
            "error": self.to_string(),
            "code": self.code(),
            "retryable": matches!(self, BookingError::Submission(_)),
        });
        if let BookingError::SlotTaken { open_slots, .. } = &self {
            body["open_slots"] = json!(open_slots);
        }

        (status, Json(body)).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(e: BookingError) -> Self {
        match e.status() {
            StatusCode::NOT_FOUND => AppError::NotFound(e.to_string()),
            StatusCode::CONFLICT => AppError::Conflict(e.to_string()),
            StatusCode::BAD_GATEWAY => AppError::ExternalService(e.to_string()),
            _ => AppError::BadRequest(e.to_string()),
        }
    }
}
