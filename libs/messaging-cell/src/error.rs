use thiserror::Error;

use shared_models::error::AppError;

#[derive(Debug, Error, PartialEq)]
pub enum MessagingError {
    #[error("Conversation {0} not found")]
    ConversationNotFound(String),

    #[error("Message cannot be empty")]
    EmptyMessage,
}

impl From<MessagingError> for AppError {
    fn from(e: MessagingError) -> Self {
        match e {
            MessagingError::ConversationNotFound(_) => AppError::NotFound(e.to_string()),
            MessagingError::EmptyMessage => AppError::ValidationError(e.to_string()),
        }
    }
}
