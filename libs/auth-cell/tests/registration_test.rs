use std::time::Duration;

use assert_matches::assert_matches;

use auth_cell::models::{DoctorRegistration, PatientRegistration, RegistrationOutcome};
use auth_cell::registration::PENDING_REVIEW_MESSAGE;
use auth_cell::{FieldValidator, RegistrationDesk, RegistrationError, SimulatedRegistrationDesk};
use shared_models::auth::UserType;

fn patient() -> PatientRegistration {
    PatientRegistration {
        first_name: "Meera".to_string(),
        last_name: "Iyer".to_string(),
        email: "meera.iyer@mail.com".to_string(),
        phone: "+91 98765 43210".to_string(),
        date_of_birth: None,
    }
}

fn doctor() -> DoctorRegistration {
    DoctorRegistration {
        first_name: "Anil".to_string(),
        last_name: "Deshmukh".to_string(),
        email: "dr.anil@clinic.in".to_string(),
        phone: "020-2553-1234".to_string(),
        license_number: "MH/AY-20931".to_string(),
        specialization: "kayachikitsa".to_string(),
        qualification: "BAMS, MD (Ayurveda)".to_string(),
        experience: "11-15".to_string(),
        clinic_address: "12 FC Road, Pune".to_string(),
        bio: "Internal medicine practitioner focused on metabolic disorders.".to_string(),
        references: None,
    }
}

fn fields(err: RegistrationError) -> Vec<String> {
    match err {
        RegistrationError::Invalid(errors) => errors.into_iter().map(|e| e.field).collect(),
        other => panic!("expected field errors, got {:?}", other),
    }
}

#[test]
fn test_valid_forms_pass() {
    let validator = FieldValidator::new().unwrap();
    assert!(validator.validate_patient(&patient()).is_ok());
    assert!(validator.validate_doctor(&doctor()).is_ok());
}

#[test]
fn test_all_failing_fields_reported() {
    let validator = FieldValidator::new().unwrap();
    let mut form = patient();
    form.first_name = "  ".to_string();
    form.email = "meera.iyer".to_string();
    form.phone = "call me".to_string();

    let err = validator.validate_patient(&form).unwrap_err();
    assert_eq!(fields(err), vec!["first_name", "email", "phone"]);
}

#[test]
fn test_doctor_enumerations() {
    let validator = FieldValidator::new().unwrap();
    let mut form = doctor();
    form.specialization = "homeopathy".to_string();
    form.experience = "7".to_string();
    form.bio = String::new();

    let err = validator.validate_doctor(&form).unwrap_err();
    assert_eq!(fields(err), vec!["specialization", "experience", "bio"]);
}

#[test]
fn test_references_optional_license_checked() {
    let validator = FieldValidator::new().unwrap();
    let mut form = doctor();
    form.references = Some("Dr. Kulkarni, +91 90000 00000".to_string());
    assert!(validator.validate_doctor(&form).is_ok());

    form.license_number = "A1".to_string();
    assert_eq!(fields(validator.validate_doctor(&form).unwrap_err()), vec!["license_number"]);
}

#[tokio::test]
async fn test_patient_accepted_doctor_pending() {
    let desk = SimulatedRegistrationDesk::new(Duration::ZERO);

    let outcome = desk.submit_patient(patient()).await.unwrap();
    assert_matches!(outcome, RegistrationOutcome::Accepted { ref user } => {
        assert_eq!(user.full_name, "Meera Iyer");
        assert_eq!(user.username, "Meera Iyer");
        assert_eq!(user.user_type, UserType::Patient);
    });

    let outcome = desk.submit_doctor(doctor()).await.unwrap();
    assert_eq!(
        outcome,
        RegistrationOutcome::PendingReview {
            message: PENDING_REVIEW_MESSAGE.to_string()
        }
    );
}
