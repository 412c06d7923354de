//! Matching domain module.
//!
//! Filters the catalog against a completed profile, renders the results for
//! chat, and handles the bookmark/refinement interaction that follows.

mod format;
mod interaction;
mod matcher;

pub use format::{RecommendationFormatter, DEFAULT_PREVIEW_CHARS, NO_MATCHES};
pub use interaction::{
    ActivityResponse, FeedbackSignal, InteractionHandler, InteractionOutcome,
    InteractionResponder, NoopRefinement, RefinementStrategy, ScriptedResponder,
};
pub use matcher::{recommend, ChildRecommendations, Recommendations};
