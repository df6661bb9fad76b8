use chrono::NaiveDate;
use tracing::debug;

use doctor_cell::{is_selectable, key_for, Practitioner};
use therapy_cell::Therapy;

use crate::error::BookingError;
use crate::models::{BookingSubmission, SelectedDate, StepInfo, WizardStep};
use crate::services::confirmation::{render_confirmation, Confirmation};

/// In-progress choices for one booking. Steps run strictly in order
/// therapy, doctor, date/time, confirm; going back keeps every choice.
#[derive(Debug, Clone, Default)]
pub struct BookingWizard {
    step: WizardStep,
    therapy: Option<Therapy>,
    practitioner: Option<Practitioner>,
    date: Option<SelectedDate>,
    time: Option<String>,
    notes: String,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn therapy(&self) -> Option<&Therapy> {
        self.therapy.as_ref()
    }

    pub fn practitioner(&self) -> Option<&Practitioner> {
        self.practitioner.as_ref()
    }

    pub fn date(&self) -> Option<&SelectedDate> {
        self.date.as_ref()
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    fn expect_step(&self, expected: WizardStep) -> Result<(), BookingError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(BookingError::WrongStep {
                expected,
                current: self.step,
            })
        }
    }

    pub fn select_therapy(&mut self, therapy: Therapy) -> Result<(), BookingError> {
        self.expect_step(WizardStep::SelectTherapy)?;
        debug!("Selected therapy {}", therapy.name);
        self.therapy = Some(therapy);
        Ok(())
    }

    /// Any practitioner can be picked for any therapy. A date or time chosen
    /// earlier is kept.
    pub fn select_practitioner(&mut self, practitioner: Practitioner) -> Result<(), BookingError> {
        self.expect_step(WizardStep::SelectDoctor)?;
        debug!("Selected practitioner {}", practitioner.name);
        self.practitioner = Some(practitioner);
        Ok(())
    }

    /// Returns `false` and changes nothing when the day has no open slot or
    /// lies before `today`. A new date always clears the time.
    pub fn select_date(
        &mut self,
        date: NaiveDate,
        open_slots: &[String],
        today: NaiveDate,
    ) -> Result<bool, BookingError> {
        self.expect_step(WizardStep::SelectDateTime)?;

        if !is_selectable(date, open_slots, today) {
            debug!("Ignoring click on unavailable day {}", date);
            return Ok(false);
        }

        self.date = Some(SelectedDate {
            date,
            key: key_for(date),
        });
        self.time = None;
        Ok(true)
    }

    /// `open_slots` must be the resolved slots for the selected date.
    pub fn select_time(&mut self, time: &str, open_slots: &[String]) -> Result<(), BookingError> {
        self.expect_step(WizardStep::SelectDateTime)?;

        let date = self.date.as_ref().ok_or(BookingError::DateNotSelected)?;
        if !open_slots.iter().any(|slot| slot == time) {
            return Err(BookingError::TimeNotOffered {
                date_key: date.key.clone(),
                time: time.to_string(),
            });
        }

        self.time = Some(time.to_string());
        Ok(())
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) -> Result<(), BookingError> {
        self.expect_step(WizardStep::SelectDateTime)?;
        self.notes = notes.into();
        Ok(())
    }

    pub fn can_proceed(&self) -> bool {
        match self.step {
            WizardStep::SelectTherapy => self.therapy.is_some(),
            WizardStep::SelectDoctor => self.practitioner.is_some(),
            WizardStep::SelectDateTime => self.date.is_some() && self.time.is_some(),
            WizardStep::Confirm => true,
        }
    }

    pub fn next(&mut self) -> Result<WizardStep, BookingError> {
        let following = self.step.following().ok_or(BookingError::AlreadyAtFinalStep)?;
        if !self.can_proceed() {
            return Err(BookingError::StepIncomplete(self.step));
        }

        self.step = following;
        Ok(self.step)
    }

    /// Always allowed above step 1; a no-op at step 1.
    pub fn back(&mut self) -> WizardStep {
        if let Some(preceding) = self.step.preceding() {
            self.step = preceding;
        }
        self.step
    }

    /// Sends the user back to pick another time after the chosen slot was
    /// taken. The date stays, the stale time is dropped.
    pub fn return_to_schedule(&mut self) {
        self.step = WizardStep::SelectDateTime;
        self.time = None;
    }

    pub fn submission(&self) -> Option<BookingSubmission> {
        Some(BookingSubmission {
            therapy_id: self.therapy.as_ref()?.id,
            practitioner_id: self.practitioner.as_ref()?.id,
            date_key: self.date.as_ref()?.key.clone(),
            time: self.time.clone()?,
            notes: self.notes.clone(),
        })
    }

    pub fn confirmation(&self) -> Confirmation {
        render_confirmation(
            self.therapy.as_ref(),
            self.practitioner.as_ref(),
            self.date.as_ref(),
            self.time.as_deref(),
            &self.notes,
        )
    }

    pub fn progress(&self) -> Vec<StepInfo> {
        WizardStep::all()
            .into_iter()
            .map(|step| StepInfo {
                number: step.number(),
                title: step.title(),
                description: step.description(),
                completed: self.step > step,
                current: self.step == step,
            })
            .collect()
    }
}
