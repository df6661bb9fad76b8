use assert_matches::assert_matches;
use chrono::NaiveDate;

use appointment_cell::services::confirmation::PLACEHOLDER_MESSAGE;
use appointment_cell::{
    render_confirmation, BookingError, BookingWizard, Confirmation, SelectedDate, WizardStep,
};
use doctor_cell::{AvailabilityTable, PractitionerDirectory};
use therapy_cell::TherapyCatalog;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2024, 12, 26)
}

fn slots(key: &str) -> Vec<String> {
    AvailabilityTable::clinic_default().slots(key).to_vec()
}

/// Shirodhara with Dr. Priya Sharma, advanced to the scheduling step.
fn wizard_at_schedule() -> BookingWizard {
    let mut wizard = BookingWizard::new();
    let therapy = TherapyCatalog::clinic_default().get(2).cloned().unwrap();
    let practitioner = PractitionerDirectory::clinic_default().get(2).cloned().unwrap();

    wizard.select_therapy(therapy).unwrap();
    wizard.next().unwrap();
    wizard.select_practitioner(practitioner).unwrap();
    wizard.next().unwrap();
    wizard
}

#[test]
fn test_cannot_advance_without_selection() {
    let mut wizard = BookingWizard::new();
    assert!(!wizard.can_proceed());
    assert_matches!(
        wizard.next(),
        Err(BookingError::StepIncomplete(WizardStep::SelectTherapy))
    );
    assert_eq!(wizard.step(), WizardStep::SelectTherapy);
}

#[test]
fn test_selection_must_match_current_step() {
    let mut wizard = BookingWizard::new();
    let practitioner = PractitionerDirectory::clinic_default().get(1).cloned().unwrap();

    assert_matches!(
        wizard.select_practitioner(practitioner),
        Err(BookingError::WrongStep { expected: WizardStep::SelectDoctor, current: WizardStep::SelectTherapy })
    );
}

#[test]
fn test_schedule_step_needs_date_and_time() {
    let mut wizard = wizard_at_schedule();
    assert!(!wizard.can_proceed());

    let day = date(2024, 12, 28);
    assert!(wizard.select_date(day, &slots("2024-12-28"), today()).unwrap());
    assert!(!wizard.can_proceed());

    wizard.select_time("11:00", &slots("2024-12-28")).unwrap();
    assert!(wizard.can_proceed());
    assert_eq!(wizard.next().unwrap(), WizardStep::Confirm);
    assert!(wizard.can_proceed());
    assert_matches!(wizard.next(), Err(BookingError::AlreadyAtFinalStep));
}

#[test]
fn test_new_date_clears_time() {
    let mut wizard = wizard_at_schedule();
    wizard.select_date(date(2024, 12, 28), &slots("2024-12-28"), today()).unwrap();
    wizard.select_time("11:00", &slots("2024-12-28")).unwrap();

    wizard.select_date(date(2024, 12, 30), &slots("2024-12-30"), today()).unwrap();
    assert_eq!(wizard.time(), None);
    assert_eq!(wizard.date().unwrap().key, "2024-12-30");
}

#[test]
fn test_unavailable_day_leaves_selection_alone() {
    let mut wizard = wizard_at_schedule();
    wizard.select_date(date(2024, 12, 28), &slots("2024-12-28"), today()).unwrap();
    wizard.select_time("09:30", &slots("2024-12-28")).unwrap();

    // the 29th has no table entry
    let changed = wizard.select_date(date(2024, 12, 29), &slots("2024-12-29"), today()).unwrap();
    assert!(!changed);
    assert_eq!(wizard.date().unwrap().key, "2024-12-28");
    assert_eq!(wizard.time(), Some("09:30"));
}

#[test]
fn test_past_day_is_rejected() {
    let mut wizard = wizard_at_schedule();
    let later_today = date(2024, 12, 29);

    let changed = wizard
        .select_date(date(2024, 12, 28), &slots("2024-12-28"), later_today)
        .unwrap();
    assert!(!changed);
    assert!(wizard.date().is_none());
}

#[test]
fn test_time_requires_date_and_offered_slot() {
    let mut wizard = wizard_at_schedule();
    assert_matches!(
        wizard.select_time("11:00", &[]),
        Err(BookingError::DateNotSelected)
    );

    wizard.select_date(date(2024, 12, 28), &slots("2024-12-28"), today()).unwrap();
    assert_matches!(
        wizard.select_time("12:00", &slots("2024-12-28")),
        Err(BookingError::TimeNotOffered { .. })
    );
}

#[test]
fn test_back_keeps_choices() {
    let mut wizard = wizard_at_schedule();
    wizard.select_date(date(2024, 12, 28), &slots("2024-12-28"), today()).unwrap();

    assert_eq!(wizard.back(), WizardStep::SelectDoctor);
    assert_eq!(wizard.back(), WizardStep::SelectTherapy);
    assert_eq!(wizard.back(), WizardStep::SelectTherapy);
    assert!(wizard.therapy().is_some());
    assert!(wizard.practitioner().is_some());
    assert!(wizard.date().is_some());
}

#[test]
fn test_confirmation_placeholder_until_complete() {
    let mut wizard = wizard_at_schedule();
    assert!(wizard.confirmation().is_placeholder());
    assert!(wizard.submission().is_none());

    wizard.select_date(date(2024, 12, 28), &slots("2024-12-28"), today()).unwrap();
    assert!(wizard.confirmation().is_placeholder());

    wizard.select_time("11:00", &slots("2024-12-28")).unwrap();
    assert!(!wizard.confirmation().is_placeholder());
    assert!(wizard.submission().is_some());
}

#[test]
fn test_placeholder_iff_any_selection_missing() {
    let therapy = TherapyCatalog::clinic_default().get(2).cloned().unwrap();
    let practitioner = PractitionerDirectory::clinic_default().get(2).cloned().unwrap();
    let selected = SelectedDate {
        date: date(2024, 12, 28),
        key: "2024-12-28".to_string(),
    };

    for mask in 0u8..16 {
        let has = |bit: u8| mask & (1 << bit) != 0;
        let confirmation = render_confirmation(
            has(0).then_some(&therapy),
            has(1).then_some(&practitioner),
            has(2).then_some(&selected),
            has(3).then_some("11:00"),
            "Evening preferred",
        );

        let complete = mask == 0b1111;
        assert_eq!(confirmation.is_placeholder(), !complete, "mask {:04b}", mask);

        let json = serde_json::to_value(&confirmation).unwrap();
        if complete {
            assert_eq!(json["kind"], "summary");
            assert_eq!(json["therapy"]["name"], "Shirodhara");
            assert_eq!(json["appointment"]["time"], "11:00");
        } else {
            let fields = json.as_object().unwrap();
            assert_eq!(fields.len(), 2, "mask {:04b}", mask);
            assert_eq!(json["kind"], "placeholder");
            assert_eq!(json["message"], PLACEHOLDER_MESSAGE);
        }
    }
}

#[test]
fn test_shirodhara_summary() {
    let mut wizard = wizard_at_schedule();
    wizard.select_date(date(2024, 12, 28), &slots("2024-12-28"), today()).unwrap();
    wizard.select_time("11:00", &slots("2024-12-28")).unwrap();

    let Confirmation::Summary(summary) = wizard.confirmation() else {
        panic!("expected a summary");
    };
    assert_eq!(summary.therapy.name, "Shirodhara");
    assert_eq!(summary.total_label, "₹3000");
    assert_eq!(summary.therapy.duration_minutes, 45);
    assert_eq!(summary.practitioner.name, "Dr. Priya Sharma");
    assert_eq!(summary.appointment.date_label, "Saturday, December 28, 2024");
    assert_eq!(summary.appointment.time, "11:00");
    assert_eq!(summary.notes, None);

    let text = summary.to_text();
    assert!(text.contains("Duration: 45 minutes"));
    assert!(!text.contains("Additional Notes"));
}

#[test]
fn test_notes_shown_only_when_present() {
    let mut wizard = wizard_at_schedule();
    wizard.set_notes("Mild headache since Monday").unwrap();
    wizard.select_date(date(2024, 12, 28), &slots("2024-12-28"), today()).unwrap();
    wizard.select_time("15:00", &slots("2024-12-28")).unwrap();

    let Confirmation::Summary(summary) = wizard.confirmation() else {
        panic!("expected a summary");
    };
    assert_eq!(summary.notes.as_deref(), Some("Mild headache since Monday"));
    assert!(summary.to_text().contains("Additional Notes\nMild headache since Monday"));
}

#[test]
fn test_return_to_schedule_drops_time() {
    let mut wizard = wizard_at_schedule();
    wizard.select_date(date(2024, 12, 28), &slots("2024-12-28"), today()).unwrap();
    wizard.select_time("11:00", &slots("2024-12-28")).unwrap();
    wizard.next().unwrap();

    wizard.return_to_schedule();
    assert_eq!(wizard.step(), WizardStep::SelectDateTime);
    assert_eq!(wizard.time(), None);
    assert!(wizard.date().is_some());
}
