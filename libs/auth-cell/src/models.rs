use serde::{Deserialize, Serialize};

use shared_models::auth::{UserRecord, UserType};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub user_type: UserType,
}

/// The raw `currentUser` value a client kept from an earlier sign-in.
#[derive(Debug, Deserialize)]
pub struct RestoreSessionRequest {
    pub record: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatientRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DoctorRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
    pub specialization: String,
    pub qualification: String,
    pub experience: String,
    pub clinic_address: String,
    pub bio: String,
    pub references: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RegistrationOutcome {
    Accepted { user: UserRecord },
    PendingReview { message: String },
}
