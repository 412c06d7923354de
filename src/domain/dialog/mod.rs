//! Dialog domain module.
//!
//! The guided conversation that collects a caregiver's location and each
//! child's details before handing off to matching.
//!
//! - `state` - Conversation states and the per-child dialog position
//! - `transition` - Pure next-position function over the accumulated profile
//! - `extractor` - Reply validation and profile updates
//! - `prompts` - Question wording for each position
//! - `engine` - One full turn: extract, transition, prompt or recommend

mod engine;
mod errors;
mod extractor;
pub mod prompts;
mod state;
mod transition;

pub use engine::{DialogEngine, TurnOutcome, RESET_COMMAND};
pub use errors::{StructuralFailure, TurnFailure, ValidationFailure};
pub use extractor::{ResponseExtractor, MAX_REPLY_LENGTH};
pub use prompts::{prompt_for, retry_prompt};
pub use state::{ConversationState, DialogPosition};
pub use transition::transition;
