use std::fmt;

use serde::{Deserialize, Serialize};

/// Key under which the signed-in user record is stored.
pub const CURRENT_USER_KEY: &str = "currentUser";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Patient,
    Doctor,
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserType::Patient => write!(f, "patient"),
            UserType::Doctor => write!(f, "doctor"),
        }
    }
}

/// The persisted identity record. Field names match the stored JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub user_type: UserType,
}

impl UserRecord {
    /// Parses a stored record. Anything that is not a well-formed record
    /// is treated as "no authenticated user".
    pub fn from_persisted(raw: &str) -> Option<Self> {
        match serde_json::from_str::<UserRecord>(raw) {
            Ok(record) if !record.email.trim().is_empty() => Some(record),
            Ok(_) => {
                tracing::warn!("Stored {} record has an empty email, ignoring", CURRENT_USER_KEY);
                None
            }
            Err(e) => {
                tracing::warn!("Stored {} record is malformed, ignoring: {}", CURRENT_USER_KEY, e);
                None
            }
        }
    }

    pub fn to_persisted(&self) -> String {
        // A struct of strings and a unit enum always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub user: Option<UserRecord>,
}
