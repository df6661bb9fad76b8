use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{AvailabilityQuery, PractitionerSearchQuery};
use crate::services::{AvailabilityService, PractitionerDirectory};

pub struct DoctorState {
    pub config: Arc<AppConfig>,
    pub directory: Arc<PractitionerDirectory>,
    pub availability: Arc<AvailabilityService>,
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<DoctorState>>,
    Query(query): Query<PractitionerSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let doctors = state.directory.search(&query);

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<DoctorState>>,
    Path(doctor_id): Path<u32>,
) -> Result<Json<Value>, AppError> {
    let doctor = state
        .directory
        .get(doctor_id)
        .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn get_doctor_availability(
    State(state): State<Arc<DoctorState>>,
    Path(doctor_id): Path<u32>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Value>, AppError> {
    if state.directory.get(doctor_id).is_none() {
        return Err(AppError::NotFound("Doctor not found".to_string()));
    }

    let day = state
        .availability
        .day(Some(doctor_id), query.date, state.config.today())
        .await;

    Ok(Json(json!({
        "doctor_id": doctor_id,
        "availability": day
    })))
}
