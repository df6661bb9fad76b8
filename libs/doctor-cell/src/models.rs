use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Practitioner {
    pub id: u32,
    pub name: String,
    pub specialization: String,
    /// Descriptive, e.g. "15 years".
    pub experience: String,
    pub rating: f32,
    pub reviews: u32,
    pub location: String,
    pub languages: Vec<String>,
    /// Working-days window, e.g. "Mon-Sat".
    pub availability: String,
    pub next_available: String,
    pub bio: String,
    pub avatar: String,
}

impl Practitioner {
    pub fn speaks(&self, language: &str) -> bool {
        self.languages
            .iter()
            .any(|l| l.eq_ignore_ascii_case(language))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookedSlot {
    pub practitioner_id: u32,
    pub date_key: String,
    pub time: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PractitionerSearchQuery {
    pub language: Option<String>,
    pub min_rating: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date_key: String,
    pub slots: Vec<String>,
    pub past: bool,
    pub selectable: bool,
}

#[derive(Debug, Error, PartialEq)]
pub enum AvailabilityError {
    #[error("{time} is not offered on {date_key}")]
    SlotNotOffered { date_key: String, time: String },

    #[error("{time} on {date_key} has already been booked")]
    SlotTaken { date_key: String, time: String },
}

impl From<AvailabilityError> for AppError {
    fn from(e: AvailabilityError) -> Self {
        match e {
            AvailabilityError::SlotNotOffered { .. } => AppError::BadRequest(e.to_string()),
            AvailabilityError::SlotTaken { .. } => AppError::Conflict(e.to_string()),
        }
    }
}
