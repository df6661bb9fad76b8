pub mod conversations;
pub mod responder;

pub use conversations::AssistantService;
pub use responder::{Responder, Rule, GREETING, QUICK_SUGGESTIONS};
