use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use doctor_cell::{AvailabilityError, AvailabilityService};

use crate::error::BookingError;
use crate::models::{BookingConfirmation, BookingSubmission};

/// Accepts a completed selection and either confirms it or reports why not.
#[async_trait]
pub trait BookingSubmitter: Send + Sync {
    async fn submit(&self, submission: BookingSubmission) -> Result<BookingConfirmation, BookingError>;
}

/// Confirms bookings against the in-process availability ledger.
pub struct ClinicBookingDesk {
    availability: Arc<AvailabilityService>,
}

impl ClinicBookingDesk {
    pub fn new(availability: Arc<AvailabilityService>) -> Self {
        Self { availability }
    }
}

#[async_trait]
impl BookingSubmitter for ClinicBookingDesk {
    #[instrument(skip(self, submission), fields(practitioner_id = submission.practitioner_id, date_key = %submission.date_key))]
    async fn submit(&self, submission: BookingSubmission) -> Result<BookingConfirmation, BookingError> {
        match self
            .availability
            .reserve(submission.practitioner_id, &submission.date_key, &submission.time)
            .await
        {
            Ok(()) => {}
            Err(AvailabilityError::SlotTaken { date_key, time }) => {
                warn!("Slot {} was taken between selection and confirmation", time);
                let open_slots = self
                    .availability
                    .resolve(Some(submission.practitioner_id), &date_key)
                    .await;
                return Err(BookingError::SlotTaken {
                    date_key,
                    time,
                    open_slots,
                });
            }
            Err(AvailabilityError::SlotNotOffered { date_key, time }) => {
                return Err(BookingError::TimeNotOffered { date_key, time });
            }
        }

        let confirmation = BookingConfirmation {
            confirmation_id: Uuid::new_v4(),
            submission,
            confirmed_at: Utc::now(),
        };
        info!("Booking {} confirmed", confirmation.confirmation_id);

        Ok(confirmation)
    }
}
