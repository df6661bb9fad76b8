use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::TherapyQuery;
use crate::services::TherapyCatalog;

#[axum::debug_handler]
pub async fn list_therapies(
    State(catalog): State<Arc<TherapyCatalog>>,
    Query(query): Query<TherapyQuery>,
) -> Result<Json<Value>, AppError> {
    let therapies = match query.category {
        Some(category) => catalog.by_category(category).into_iter().cloned().collect(),
        None => catalog.all().to_vec(),
    };

    Ok(Json(json!({
        "therapies": therapies,
        "total": therapies.len()
    })))
}

#[axum::debug_handler]
pub async fn get_therapy(
    State(catalog): State<Arc<TherapyCatalog>>,
    Path(therapy_id): Path<u32>,
) -> Result<Json<Value>, AppError> {
    let therapy = catalog
        .get(therapy_id)
        .ok_or_else(|| AppError::NotFound("Therapy not found".to_string()))?;

    Ok(Json(json!(therapy)))
}
