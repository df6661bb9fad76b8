use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==============================================================================
// WIZARD MODELS
// ==============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    SelectTherapy,
    SelectDoctor,
    SelectDateTime,
    Confirm,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            WizardStep::SelectTherapy => 1,
            WizardStep::SelectDoctor => 2,
            WizardStep::SelectDateTime => 3,
            WizardStep::Confirm => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::SelectTherapy => "Select Therapy",
            WizardStep::SelectDoctor => "Choose Doctor",
            WizardStep::SelectDateTime => "Pick Date & Time",
            WizardStep::Confirm => "Confirmation",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WizardStep::SelectTherapy => "Choose your treatment",
            WizardStep::SelectDoctor => "Select your practitioner",
            WizardStep::SelectDateTime => "Schedule your session",
            WizardStep::Confirm => "Review and confirm",
        }
    }

    pub fn following(self) -> Option<WizardStep> {
        match self {
            WizardStep::SelectTherapy => Some(WizardStep::SelectDoctor),
            WizardStep::SelectDoctor => Some(WizardStep::SelectDateTime),
            WizardStep::SelectDateTime => Some(WizardStep::Confirm),
            WizardStep::Confirm => None,
        }
    }

    pub fn preceding(self) -> Option<WizardStep> {
        match self {
            WizardStep::SelectTherapy => None,
            WizardStep::SelectDoctor => Some(WizardStep::SelectTherapy),
            WizardStep::SelectDateTime => Some(WizardStep::SelectDoctor),
            WizardStep::Confirm => Some(WizardStep::SelectDateTime),
        }
    }

    pub fn all() -> [WizardStep; 4] {
        [
            WizardStep::SelectTherapy,
            WizardStep::SelectDoctor,
            WizardStep::SelectDateTime,
            WizardStep::Confirm,
        ]
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}

/// A picked day together with its availability key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedDate {
    pub date: NaiveDate,
    pub key: String,
}

/// What the booking desk receives once all four choices are made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSubmission {
    pub therapy_id: u32,
    pub practitioner_id: u32,
    pub date_key: String,
    pub time: String,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub confirmation_id: Uuid,
    pub submission: BookingSubmission,
    pub confirmed_at: DateTime<Utc>,
}

// ==============================================================================
// REQUEST / RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Deserialize)]
pub struct SelectTherapyRequest {
    pub therapy_id: u32,
}

#[derive(Debug, Deserialize)]
pub struct SelectPractitionerRequest {
    pub practitioner_id: u32,
}

/// A click on a day cell of the displayed month.
#[derive(Debug, Deserialize)]
pub struct SelectDayRequest {
    pub day: u32,
}

#[derive(Debug, Deserialize)]
pub struct SelectTimeRequest {
    pub time: String,
}

#[derive(Debug, Deserialize)]
pub struct NotesRequest {
    pub notes: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthDirection {
    Prev,
    Next,
}

#[derive(Debug, Serialize)]
pub struct StepInfo {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub completed: bool,
    pub current: bool,
}
