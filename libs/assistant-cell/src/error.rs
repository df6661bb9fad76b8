use thiserror::Error;

use shared_models::error::AppError;

#[derive(Debug, Error, PartialEq)]
pub enum AssistantError {
    #[error("Conversation not found")]
    ConversationNotFound,

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("AyurBot is still typing a reply")]
    StillTyping,
}

impl From<AssistantError> for AppError {
    fn from(e: AssistantError) -> Self {
        match e {
            AssistantError::ConversationNotFound => AppError::NotFound(e.to_string()),
            AssistantError::EmptyMessage => AppError::ValidationError(e.to_string()),
            AssistantError::StillTyping => AppError::Conflict(e.to_string()),
        }
    }
}
