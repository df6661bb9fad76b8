use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_utils::extractor::CurrentUser;

use crate::models::{ConversationQuery, SendMessageRequest};
use crate::services::MessagingService;

#[axum::debug_handler]
pub async fn list_conversations(
    State(service): State<Arc<MessagingService>>,
    user: CurrentUser,
    Query(query): Query<ConversationQuery>,
) -> Result<Json<Value>, AppError> {
    let user = user.require()?;
    let conversations = service.list(&user, query.search.as_deref()).await;

    Ok(Json(json!({
        "conversations": conversations,
        "total": conversations.len()
    })))
}

#[axum::debug_handler]
pub async fn get_conversation(
    State(service): State<Arc<MessagingService>>,
    user: CurrentUser,
    Path(conversation_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let user = user.require()?;
    let conversation = service.get(&user, &conversation_id).await?;
    Ok(Json(json!(conversation)))
}

#[axum::debug_handler]
pub async fn send_message(
    State(service): State<Arc<MessagingService>>,
    user: CurrentUser,
    Path(conversation_id): Path<String>,
    Json(request): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let user = user.require()?;
    let message = service.send(&user, &conversation_id, &request.content).await?;
    Ok((StatusCode::CREATED, Json(json!(message))))
}

#[axum::debug_handler]
pub async fn mark_read(
    State(service): State<Arc<MessagingService>>,
    user: CurrentUser,
    Path(conversation_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let user = user.require()?;
    let conversation = service.mark_read(&user, &conversation_id).await?;
    Ok(Json(json!(conversation)))
}
