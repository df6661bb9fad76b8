pub mod inbox;
pub mod seed;

pub use inbox::MessagingService;
