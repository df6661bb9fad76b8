pub mod calendar;
pub mod confirmation;
pub mod sessions;
pub mod submission;
pub mod wizard;

pub use calendar::{CalendarCell, MonthView};
pub use confirmation::{render_confirmation, BookingSummary, Confirmation};
pub use sessions::{BookingSession, BookingSessions};
pub use submission::{BookingSubmitter, ClinicBookingDesk};
pub use wizard::BookingWizard;
