pub mod error;
pub mod handlers;
pub mod identity;
pub mod models;
pub mod registration;
pub mod router;

pub use error::RegistrationError;
pub use identity::{display_name, extract_username_from_email, simulate_login, user_initials};
pub use registration::{FieldValidator, RegistrationDesk, SimulatedRegistrationDesk};
