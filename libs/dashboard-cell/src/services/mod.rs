pub mod doctor;
pub mod patient;
pub mod reports;
pub mod schedule;

pub use doctor::{doctor_dashboard, patient_list};
pub use patient::patient_dashboard;
pub use reports::report;
pub use schedule::{appointments_on, schedule_month};
