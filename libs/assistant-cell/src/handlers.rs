use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{ReplyRequest, SendMessageRequest};
use crate::services::{AssistantService, QUICK_SUGGESTIONS};

#[axum::debug_handler]
pub async fn reply(
    State(service): State<Arc<AssistantService>>,
    Json(request): Json<ReplyRequest>,
) -> Result<Json<Value>, AppError> {
    let (reply, topic) = service.reply(&request.message)?;

    Ok(Json(json!({
        "reply": reply,
        "topic": topic
    })))
}

#[axum::debug_handler]
pub async fn start_conversation(
    State(service): State<Arc<AssistantService>>,
) -> (StatusCode, Json<Value>) {
    let conversation = service.start().await;

    (
        StatusCode::CREATED,
        Json(json!({
            "conversation": conversation,
            "quick_suggestions": QUICK_SUGGESTIONS
        })),
    )
}

#[axum::debug_handler]
pub async fn get_conversation(
    State(service): State<Arc<AssistantService>>,
    Path(conversation_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let conversation = service.get(conversation_id).await?;
    Ok(Json(json!(conversation)))
}

#[axum::debug_handler]
pub async fn send_message(
    State(service): State<Arc<AssistantService>>,
    Path(conversation_id): Path<Uuid>,
    Json(request): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let conversation = service.send(conversation_id, &request.content).await?;
    Ok((StatusCode::ACCEPTED, Json(json!(conversation))))
}

#[axum::debug_handler]
pub async fn close_conversation(
    State(service): State<Arc<AssistantService>>,
    Path(conversation_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    service.close(conversation_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
