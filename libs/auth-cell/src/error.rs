use thiserror::Error;

use shared_models::error::{AppError, FieldError};

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Registration has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),

    #[error("Registration could not be submitted: {0}")]
    Unavailable(String),
}

impl From<RegistrationError> for AppError {
    fn from(e: RegistrationError) -> Self {
        match e {
            RegistrationError::Invalid(fields) => AppError::FieldValidation(fields),
            RegistrationError::Unavailable(msg) => AppError::ExternalService(msg),
        }
    }
}
