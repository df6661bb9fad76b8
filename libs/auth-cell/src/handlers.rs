use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, info};

use shared_models::auth::{SessionResponse, UserRecord, CURRENT_USER_KEY};
use shared_models::error::AppError;
use shared_utils::extractor::{CurrentUser, SessionToken};
use shared_utils::session::SessionStore;

use crate::identity::{display_name, simulate_login, user_initials};
use crate::models::{
    DoctorRegistration, LoginRequest, PatientRegistration, RegistrationOutcome,
    RestoreSessionRequest,
};
use crate::registration::{FieldValidator, RegistrationDesk};

pub struct AuthState {
    pub sessions: Arc<SessionStore>,
    pub validator: Arc<FieldValidator>,
    pub desk: Arc<dyn RegistrationDesk>,
}

fn signed_in(token: String, user: &UserRecord) -> Value {
    json!({
        "token": token,
        "user": user,
        "display_name": display_name(user),
        "initials": user_initials(user),
        "storage_key": CURRENT_USER_KEY,
        "persisted": user.to_persisted(),
    })
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<AuthState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Value>, AppError> {
    let email = request.email.trim();
    if email.is_empty() {
        return Err(AppError::ValidationError("Email is required".to_string()));
    }

    let user = simulate_login(email, request.user_type);
    let token = state.sessions.open(user.clone()).await;
    info!("{} signed in as {}", user.email, user.user_type);

    Ok(Json(signed_in(token, &user)))
}

#[axum::debug_handler]
pub async fn logout(
    State(state): State<Arc<AuthState>>,
    SessionToken(token): SessionToken,
) -> StatusCode {
    state.sessions.close(&token).await;
    StatusCode::NO_CONTENT
}

#[axum::debug_handler]
pub async fn get_session(CurrentUser(user): CurrentUser) -> Json<Value> {
    let names = user
        .as_ref()
        .map(|u| json!({ "display_name": display_name(u), "initials": user_initials(u) }));

    let mut body = json!(SessionResponse {
        authenticated: user.is_some(),
        user,
    });
    if let Some(names) = names {
        body["display_name"] = names["display_name"].clone();
        body["initials"] = names["initials"].clone();
    }

    Json(body)
}

/// Re-opens a session from a stored record. A malformed record means "not
/// signed in", never an error.
#[axum::debug_handler]
pub async fn restore_session(
    State(state): State<Arc<AuthState>>,
    Json(request): Json<RestoreSessionRequest>,
) -> Json<Value> {
    match UserRecord::from_persisted(&request.record) {
        Some(user) => {
            let token = state.sessions.open(user.clone()).await;
            debug!("Restored session for {}", user.email);
            let mut body = signed_in(token, &user);
            body["authenticated"] = json!(true);
            Json(body)
        }
        None => Json(json!(SessionResponse {
            authenticated: false,
            user: None,
        })),
    }
}

#[axum::debug_handler]
pub async fn register_patient(
    State(state): State<Arc<AuthState>>,
    Json(form): Json<PatientRegistration>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    state.validator.validate_patient(&form)?;

    match state.desk.submit_patient(form).await? {
        RegistrationOutcome::Accepted { user } => {
            let token = state.sessions.open(user.clone()).await;
            let mut body = signed_in(token, &user);
            body["status"] = json!("accepted");
            Ok((StatusCode::CREATED, Json(body)))
        }
        outcome @ RegistrationOutcome::PendingReview { .. } => {
            Ok((StatusCode::ACCEPTED, Json(json!(outcome))))
        }
    }
}

#[axum::debug_handler]
pub async fn register_doctor(
    State(state): State<Arc<AuthState>>,
    Json(form): Json<DoctorRegistration>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    state.validator.validate_doctor(&form)?;

    let outcome = state.desk.submit_doctor(form).await?;
    Ok((StatusCode::ACCEPTED, Json(json!(outcome))))
}
