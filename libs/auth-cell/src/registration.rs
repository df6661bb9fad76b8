use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, info, instrument};

use shared_models::auth::{UserRecord, UserType};
use shared_models::error::FieldError;

use crate::error::RegistrationError;
use crate::identity::extract_username_from_email;
use crate::models::{DoctorRegistration, PatientRegistration, RegistrationOutcome};

pub const SPECIALIZATIONS: [&str; 7] = [
    "panchakarma",
    "general-ayurveda",
    "ayurvedic-medicine",
    "ayurvedic-surgery",
    "kayachikitsa",
    "shalakya-tantra",
    "other",
];

pub const EXPERIENCE_RANGES: [&str; 6] = ["0-2", "3-5", "6-10", "11-15", "16-20", "20+"];

pub const PENDING_REVIEW_MESSAGE: &str = "Registration request submitted! We'll review your application and contact you within 2-3 business days.";

pub struct FieldValidator {
    email: Regex,
    phone: Regex,
    license: Regex,
}

impl FieldValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            email: Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")?,
            phone: Regex::new(r"^\+?[0-9][0-9\s\-()]{6,18}[0-9]$")?,
            license: Regex::new(r"^[A-Za-z0-9/\-]{4,20}$")?,
        })
    }

    fn required(errors: &mut Vec<FieldError>, field: &str, value: &str, label: &str) -> bool {
        if value.trim().is_empty() {
            errors.push(FieldError::new(field, format!("{} is required", label)));
            false
        } else {
            true
        }
    }

    fn check_contact(&self, errors: &mut Vec<FieldError>, email: &str, phone: &str) {
        if Self::required(errors, "email", email, "Email") && !self.email.is_match(email.trim()) {
            errors.push(FieldError::new("email", "Enter a valid email address"));
        }
        if Self::required(errors, "phone", phone, "Phone") && !self.phone.is_match(phone.trim()) {
            errors.push(FieldError::new("phone", "Enter a valid phone number"));
        }
    }

    /// Every failing field is reported, not just the first.
    pub fn validate_patient(&self, form: &PatientRegistration) -> Result<(), RegistrationError> {
        let mut errors = Vec::new();
        Self::required(&mut errors, "first_name", &form.first_name, "First name");
        Self::required(&mut errors, "last_name", &form.last_name, "Last name");
        self.check_contact(&mut errors, &form.email, &form.phone);

        finish(errors)
    }

    pub fn validate_doctor(&self, form: &DoctorRegistration) -> Result<(), RegistrationError> {
        let mut errors = Vec::new();
        Self::required(&mut errors, "first_name", &form.first_name, "First name");
        Self::required(&mut errors, "last_name", &form.last_name, "Last name");
        self.check_contact(&mut errors, &form.email, &form.phone);

        if Self::required(&mut errors, "license_number", &form.license_number, "License number")
            && !self.license.is_match(form.license_number.trim())
        {
            errors.push(FieldError::new("license_number", "License number must be 4-20 letters, digits, '-' or '/'"));
        }
        if !SPECIALIZATIONS.contains(&form.specialization.as_str()) {
            errors.push(FieldError::new("specialization", "Select a specialization"));
        }
        if !EXPERIENCE_RANGES.contains(&form.experience.as_str()) {
            errors.push(FieldError::new("experience", "Select your years of experience"));
        }
        Self::required(&mut errors, "qualification", &form.qualification, "Educational qualification");
        Self::required(&mut errors, "clinic_address", &form.clinic_address, "Clinic address");
        Self::required(&mut errors, "bio", &form.bio, "Professional bio");

        finish(errors)
    }
}

fn finish(errors: Vec<FieldError>) -> Result<(), RegistrationError> {
    if errors.is_empty() {
        Ok(())
    } else {
        debug!("Registration rejected with {} field error(s)", errors.len());
        Err(RegistrationError::Invalid(errors))
    }
}

/// Receives validated registration forms.
#[async_trait]
pub trait RegistrationDesk: Send + Sync {
    async fn submit_patient(&self, form: PatientRegistration) -> Result<RegistrationOutcome, RegistrationError>;
    async fn submit_doctor(&self, form: DoctorRegistration) -> Result<RegistrationOutcome, RegistrationError>;
}

/// Accepts everything after a fixed delay. Patients are registered at once,
/// practitioners wait for manual review.
pub struct SimulatedRegistrationDesk {
    delay: Duration,
}

impl SimulatedRegistrationDesk {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl RegistrationDesk for SimulatedRegistrationDesk {
    #[instrument(skip(self, form), fields(email = %form.email))]
    async fn submit_patient(&self, form: PatientRegistration) -> Result<RegistrationOutcome, RegistrationError> {
        tokio::time::sleep(self.delay).await;

        let email = form.email.trim().to_string();
        let user = UserRecord {
            username: extract_username_from_email(&email),
            full_name: format!("{} {}", form.first_name.trim(), form.last_name.trim()),
            email,
            user_type: UserType::Patient,
        };
        info!("Patient registration accepted");

        Ok(RegistrationOutcome::Accepted { user })
    }

    #[instrument(skip(self, form), fields(email = %form.email))]
    async fn submit_doctor(&self, form: DoctorRegistration) -> Result<RegistrationOutcome, RegistrationError> {
        tokio::time::sleep(self.delay).await;
        info!("Practitioner registration queued for review ({})", form.specialization);

        Ok(RegistrationOutcome::PendingReview {
            message: PENDING_REVIEW_MESSAGE.to_string(),
        })
    }
}
