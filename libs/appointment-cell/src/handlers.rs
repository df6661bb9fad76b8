use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, info, warn};
use uuid::Uuid;

use doctor_cell::{AvailabilityService, PractitionerDirectory};
use shared_config::AppConfig;
use therapy_cell::TherapyCatalog;

use crate::error::BookingError;
use crate::models::{
    MonthDirection, NotesRequest, SelectDayRequest, SelectPractitionerRequest,
    SelectTherapyRequest, SelectTimeRequest, WizardStep,
};
use crate::services::calendar::WEEKDAY_LABELS;
use crate::services::{BookingSession, BookingSessions, BookingSubmitter, Confirmation, MonthView};

pub const NO_DATE_MESSAGE: &str = "Please select a date first";
pub const NO_TIMES_MESSAGE: &str = "No available times for this date";

pub struct BookingState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<TherapyCatalog>,
    pub directory: Arc<PractitionerDirectory>,
    pub availability: Arc<AvailabilityService>,
    pub sessions: Arc<BookingSessions>,
    pub submitter: Arc<dyn BookingSubmitter>,
}

// ==============================================================================
// VIEW HELPERS
// ==============================================================================

async fn open_slots(state: &BookingState, session: &BookingSession) -> Option<Vec<String>> {
    let date = session.wizard.date()?;
    let practitioner_id = session.wizard.practitioner().map(|p| p.id);
    Some(state.availability.resolve(practitioner_id, &date.key).await)
}

async fn session_view(state: &BookingState, id: Uuid, session: &BookingSession) -> Value {
    let wizard = &session.wizard;

    let time_panel = match open_slots(state, session).await {
        None => json!({ "slots": [], "message": NO_DATE_MESSAGE }),
        Some(slots) if slots.is_empty() => json!({ "slots": [], "message": NO_TIMES_MESSAGE }),
        Some(slots) => json!({ "slots": slots }),
    };

    json!({
        "session_id": id,
        "step": wizard.step(),
        "step_number": wizard.step().number(),
        "steps": wizard.progress(),
        "can_proceed": wizard.can_proceed(),
        "selection": {
            "therapy": wizard.therapy(),
            "practitioner": wizard.practitioner(),
            "date": wizard.date(),
            "time": wizard.time(),
            "notes": wizard.notes(),
        },
        "time_slots": time_panel,
        "calendar_month": session.calendar.label(),
    })
}

async fn calendar_view(state: &BookingState, session: &BookingSession) -> Value {
    let view = session.calendar;
    let practitioner_id = session.wizard.practitioner().map(|p| p.id);

    let mut with_slots = HashSet::new();
    for day in 1..=view.days() {
        let key = view.date_key(day);
        if !state.availability.resolve(practitioner_id, &key).await.is_empty() {
            with_slots.insert(key);
        }
    }

    let selected = session.wizard.date().map(|d| d.key.as_str());
    let cells = view.cells(state.config.today(), selected, |key| with_slots.contains(key));

    json!({
        "year": view.year,
        "month": view.month0,
        "label": view.label(),
        "weekdays": WEEKDAY_LABELS,
        "cells": cells,
    })
}

// ==============================================================================
// SESSION LIFECYCLE
// ==============================================================================

#[axum::debug_handler]
pub async fn create_session(
    State(state): State<Arc<BookingState>>,
) -> (StatusCode, Json<Value>) {
    let (id, session) = state.sessions.open(state.config.today()).await;
    (StatusCode::CREATED, Json(session_view(&state, id, &session).await))
}

#[axum::debug_handler]
pub async fn get_session(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, BookingError> {
    let session = state.sessions.get(session_id).await?;
    Ok(Json(session_view(&state, session_id, &session).await))
}

#[axum::debug_handler]
pub async fn delete_session(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, BookingError> {
    state.sessions.close(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ==============================================================================
// SELECTIONS
// ==============================================================================

#[axum::debug_handler]
pub async fn select_therapy(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SelectTherapyRequest>,
) -> Result<Json<Value>, BookingError> {
    let therapy = state
        .catalog
        .get(request.therapy_id)
        .cloned()
        .ok_or(BookingError::TherapyNotFound(request.therapy_id))?;

    let ((), session) = state
        .sessions
        .update(session_id, |s| s.wizard.select_therapy(therapy))
        .await?;

    Ok(Json(session_view(&state, session_id, &session).await))
}

#[axum::debug_handler]
pub async fn select_practitioner(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SelectPractitionerRequest>,
) -> Result<Json<Value>, BookingError> {
    let practitioner = state
        .directory
        .get(request.practitioner_id)
        .cloned()
        .ok_or(BookingError::PractitionerNotFound(request.practitioner_id))?;

    let ((), session) = state
        .sessions
        .update(session_id, |s| s.wizard.select_practitioner(practitioner))
        .await?;

    Ok(Json(session_view(&state, session_id, &session).await))
}

/// A day click in the displayed month. Unavailable or past days leave the
/// selection untouched and report `changed: false`.
#[axum::debug_handler]
pub async fn select_date(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SelectDayRequest>,
) -> Result<Json<Value>, BookingError> {
    let current = state.sessions.get(session_id).await?;
    let view = current.calendar;
    let date = view
        .contains(request.day)
        .then(|| view.date(request.day))
        .flatten()
        .ok_or(BookingError::InvalidDay { day: request.day })?;

    let practitioner_id = current.wizard.practitioner().map(|p| p.id);
    let slots = state.availability.resolve(practitioner_id, &view.date_key(request.day)).await;
    let today = state.config.today();

    let (changed, session) = state
        .sessions
        .update(session_id, |s| s.wizard.select_date(date, &slots, today))
        .await?;

    let mut body = session_view(&state, session_id, &session).await;
    body["changed"] = json!(changed);
    Ok(Json(body))
}

#[axum::debug_handler]
pub async fn select_time(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SelectTimeRequest>,
) -> Result<Json<Value>, BookingError> {
    let current = state.sessions.get(session_id).await?;
    let slots = open_slots(&state, &current).await.unwrap_or_default();

    let ((), session) = state
        .sessions
        .update(session_id, |s| s.wizard.select_time(&request.time, &slots))
        .await?;

    Ok(Json(session_view(&state, session_id, &session).await))
}

#[axum::debug_handler]
pub async fn set_notes(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<NotesRequest>,
) -> Result<Json<Value>, BookingError> {
    let ((), session) = state
        .sessions
        .update(session_id, |s| s.wizard.set_notes(request.notes))
        .await?;

    Ok(Json(session_view(&state, session_id, &session).await))
}

// ==============================================================================
// NAVIGATION
// ==============================================================================

#[axum::debug_handler]
pub async fn next_step(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, BookingError> {
    let (step, session) = state
        .sessions
        .update(session_id, |s| s.wizard.next())
        .await?;
    debug!("Booking session {} advanced to {}", session_id, step);

    Ok(Json(session_view(&state, session_id, &session).await))
}

#[axum::debug_handler]
pub async fn previous_step(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, BookingError> {
    let (_, session) = state
        .sessions
        .update(session_id, |s| Ok(s.wizard.back()))
        .await?;

    Ok(Json(session_view(&state, session_id, &session).await))
}

#[axum::debug_handler]
pub async fn get_calendar(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, BookingError> {
    let session = state.sessions.get(session_id).await?;
    Ok(Json(calendar_view(&state, &session).await))
}

#[axum::debug_handler]
pub async fn shift_calendar(
    State(state): State<Arc<BookingState>>,
    Path((session_id, direction)): Path<(Uuid, MonthDirection)>,
) -> Result<Json<Value>, BookingError> {
    let (_, session) = state
        .sessions
        .update(session_id, |s| {
            s.calendar = match direction {
                MonthDirection::Prev => s.calendar.prev(),
                MonthDirection::Next => s.calendar.next(),
            };
            Ok::<MonthView, BookingError>(s.calendar)
        })
        .await?;

    Ok(Json(calendar_view(&state, &session).await))
}

// ==============================================================================
// CONFIRMATION
// ==============================================================================

#[axum::debug_handler]
pub async fn get_confirmation(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, BookingError> {
    let session = state.sessions.get(session_id).await?;
    let confirmation = session.wizard.confirmation();
    let text = match &confirmation {
        Confirmation::Summary(summary) => Some(summary.to_text()),
        Confirmation::Placeholder { .. } => None,
    };

    Ok(Json(json!({
        "confirmation": confirmation,
        "text": text,
    })))
}

/// Submits a complete selection. A confirmed booking ends the session; a
/// slot lost in the meantime sends the session back to scheduling.
#[axum::debug_handler]
pub async fn confirm_booking(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
) -> Result<(StatusCode, Json<Value>), BookingError> {
    let session = state.sessions.get(session_id).await?;
    let wizard = &session.wizard;
    if wizard.step() != WizardStep::Confirm {
        return Err(BookingError::NotReadyToConfirm);
    }
    let submission = wizard.submission().ok_or(BookingError::NotReadyToConfirm)?;
    let summary = wizard.confirmation();

    match state.submitter.submit(submission).await {
        Ok(confirmation) => {
            if state.sessions.close(session_id).await.is_err() {
                debug!("Booking session {} was already gone after booking", session_id);
            }
            info!("Booking session {} completed", session_id);
            Ok((
                StatusCode::CREATED,
                Json(json!({
                    "booking": confirmation,
                    "confirmation": summary,
                })),
            ))
        }
        Err(err @ BookingError::SlotTaken { .. }) => {
            warn!("Returning booking session {} to scheduling", session_id);
            let returned = state
                .sessions
                .update(session_id, |s| {
                    s.wizard.return_to_schedule();
                    Ok(())
                })
                .await;
            if let Err(gone) = returned {
                debug!("Booking session {} not returned to scheduling: {}", session_id, gone);
            }
            Err(err)
        }
        Err(err) => Err(err),
    }
}
