use std::sync::Arc;

use axum::{body::Body, http::Response};
use chrono::NaiveDate;
use serde_json::Value;

use shared_config::AppConfig;
use shared_models::auth::{UserRecord, UserType};

use crate::session::SessionStore;

pub struct TestConfig {
    pub today: NaiveDate,
    pub assistant_typing_delay_ms: u64,
    pub registration_delay_ms: u64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            // Two days before the first entry in the clinic calendar
            today: NaiveDate::from_ymd_opt(2024, 12, 26).expect("valid test date"),
            assistant_typing_delay_ms: 0,
            registration_delay_ms: 0,
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            api_host: "127.0.0.1".to_string(),
            api_port: 0,
            assistant_typing_delay_ms: self.assistant_typing_delay_ms,
            registration_delay_ms: self.registration_delay_ms,
            clinic_today: Some(self.today),
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestUser;

impl TestUser {
    pub fn patient() -> UserRecord {
        UserRecord {
            email: "priya.sharma@email.com".to_string(),
            username: "Priya Sharma".to_string(),
            full_name: "Priya Sharma".to_string(),
            user_type: UserType::Patient,
        }
    }

    pub fn doctor() -> UserRecord {
        UserRecord {
            email: "dr.rajesh@ayursutra.com".to_string(),
            username: "Dr Rajesh".to_string(),
            full_name: "Dr. Rajesh Kumar".to_string(),
            user_type: UserType::Doctor,
        }
    }

    /// Opens a session and returns its bearer header value.
    pub async fn sign_in(sessions: &SessionStore, user: UserRecord) -> String {
        format!("Bearer {}", sessions.open(user).await)
    }
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap_or_default();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}
