use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use appointment_cell::MonthView;
use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_utils::extractor::CurrentUser;

use crate::models::{
    DoctorDashboard, PatientDashboard, PatientListQuery, Report, ReportQuery, ScheduleMonth,
    ScheduleQuery,
};
use crate::services;

/// Falls back to the placeholder identity when nobody is signed in.
#[axum::debug_handler]
pub async fn patient_dashboard(CurrentUser(user): CurrentUser) -> Json<PatientDashboard> {
    debug!("Patient dashboard for {:?}", user.as_ref().map(|u| &u.email));
    Json(services::patient_dashboard(user.as_ref()))
}

#[axum::debug_handler]
pub async fn doctor_dashboard(CurrentUser(user): CurrentUser) -> Json<DoctorDashboard> {
    Json(services::doctor_dashboard(user.as_ref()))
}

/// Month calendar of the doctor's appointments, the current month unless
/// `year`/`month` say otherwise.
#[axum::debug_handler]
pub async fn doctor_schedule(
    State(config): State<Arc<AppConfig>>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<ScheduleMonth>, AppError> {
    let today = config.today();
    let current = MonthView::from_date(today);

    let month0 = match query.month {
        None => current.month0,
        Some(month @ 1..=12) => month - 1,
        Some(month) => {
            return Err(AppError::BadRequest(format!(
                "Month {} is outside 1-12",
                month
            )))
        }
    };
    let view = MonthView::new(query.year.unwrap_or(current.year), month0)
        .ok_or_else(|| AppError::BadRequest("Invalid month".to_string()))?;

    Ok(Json(services::schedule_month(view, today)))
}

#[axum::debug_handler]
pub async fn list_patients(Query(query): Query<PatientListQuery>) -> Json<Value> {
    let patients = services::patient_list(query.status);

    Json(json!({
        "patients": patients,
        "total": patients.len()
    }))
}

#[axum::debug_handler]
pub async fn get_report(Query(query): Query<ReportQuery>) -> Json<Report> {
    Json(services::report(query.range))
}
