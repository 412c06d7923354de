//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary and the state machine trait used by the
//! dialog and matching modules.

mod errors;
mod state_machine;

pub use errors::{DomainError, ErrorCode};
pub use state_machine::StateMachine;
