use serde::Serialize;

use doctor_cell::Practitioner;
use therapy_cell::Therapy;

use crate::models::SelectedDate;

pub const PLACEHOLDER_MESSAGE: &str =
    "Please complete all previous steps to see the confirmation.";

pub const PAYMENT_NOTE: &str = "Payment will be collected at the time of your appointment";

pub const IMPORTANT_NOTES: [&str; 4] = [
    "Please arrive 15 minutes before your appointment time",
    "Bring a valid ID and any relevant medical records",
    "Cancellations must be made at least 24 hours in advance",
    "You will receive a confirmation email and SMS shortly",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Confirmation {
    Placeholder { message: String },
    Summary(BookingSummary),
}

impl Confirmation {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Confirmation::Placeholder { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TherapyDetails {
    pub name: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub price: u32,
    pub price_label: String,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PractitionerDetails {
    pub name: String,
    pub specialization: String,
    pub experience: String,
    pub location: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentDetails {
    pub date_key: String,
    /// e.g. "Saturday, December 28, 2024".
    pub date_label: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingSummary {
    pub therapy: TherapyDetails,
    pub practitioner: PractitionerDetails,
    pub appointment: AppointmentDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub total_amount: u32,
    pub total_label: String,
    pub payment_note: &'static str,
    pub important_notes: [&'static str; 4],
}

pub fn long_date(date: &SelectedDate) -> String {
    date.date.format("%A, %B %-d, %Y").to_string()
}

/// All four of therapy, practitioner, date and time are needed for a
/// summary; with any one missing only the placeholder is produced.
pub fn render_confirmation(
    therapy: Option<&Therapy>,
    practitioner: Option<&Practitioner>,
    date: Option<&SelectedDate>,
    time: Option<&str>,
    notes: &str,
) -> Confirmation {
    let (Some(therapy), Some(practitioner), Some(date), Some(time)) =
        (therapy, practitioner, date, time)
    else {
        return Confirmation::Placeholder {
            message: PLACEHOLDER_MESSAGE.to_string(),
        };
    };

    Confirmation::Summary(BookingSummary {
        therapy: TherapyDetails {
            name: therapy.name.clone(),
            description: therapy.description.clone(),
            benefits: therapy.benefits.clone(),
            price: therapy.price,
            price_label: therapy.price_label(),
            duration_minutes: therapy.duration_minutes,
        },
        practitioner: PractitionerDetails {
            name: practitioner.name.clone(),
            specialization: practitioner.specialization.clone(),
            experience: practitioner.experience.clone(),
            location: practitioner.location.clone(),
            avatar: practitioner.avatar.clone(),
        },
        appointment: AppointmentDetails {
            date_key: date.key.clone(),
            date_label: long_date(date),
            time: time.to_string(),
        },
        notes: (!notes.is_empty()).then(|| notes.to_string()),
        total_amount: therapy.price,
        total_label: therapy.price_label(),
        payment_note: PAYMENT_NOTE,
        important_notes: IMPORTANT_NOTES,
    })
}

impl BookingSummary {
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            "Booking Confirmation".to_string(),
            String::new(),
            "Therapy Details".to_string(),
            format!("{} ({})", self.therapy.name, self.therapy.price_label),
            self.therapy.description.clone(),
            format!("Benefits: {}", self.therapy.benefits.join(", ")),
            format!("Duration: {} minutes", self.therapy.duration_minutes),
            String::new(),
            "Your Practitioner".to_string(),
            format!("{}, {}", self.practitioner.name, self.practitioner.specialization),
            format!("{} experience", self.practitioner.experience),
            self.practitioner.location.clone(),
            String::new(),
            "Appointment Details".to_string(),
            format!("Date: {}", self.appointment.date_label),
            format!("Time: {}", self.appointment.time),
        ];

        if let Some(notes) = &self.notes {
            lines.push(String::new());
            lines.push("Additional Notes".to_string());
            lines.push(notes.clone());
        }

        lines.push(String::new());
        lines.push(format!("Total Amount: {}", self.total_label));
        lines.push(self.payment_note.to_string());
        lines.push(String::new());
        lines.push("Important Notes:".to_string());
        lines.extend(self.important_notes.iter().map(|note| format!("- {}", note)));

        lines.join("\n")
    }
}
