pub mod availability;
pub mod directory;

pub use availability::{date_key, is_selectable, key_for, AvailabilityService, AvailabilityTable};
pub use directory::PractitionerDirectory;
