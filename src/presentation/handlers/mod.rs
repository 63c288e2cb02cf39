mod guard;
mod health;

pub use guard::{ErrorResponse, GuardRequest, GuardResponse, ProcessingErrorResponse, guard_handler};
pub use health::health_handler;
