//! Dialog command and query handlers.

mod get_recommendations;
mod process_turn;
mod record_interactions;

pub use get_recommendations::{
    GetRecommendationsHandler, GetRecommendationsQuery, GetRecommendationsResult,
    RecommendationError,
};
pub use process_turn::{ProcessTurnCommand, ProcessTurnHandler, ProcessTurnResult};
pub use record_interactions::{
    InteractionInput, RecordInteractionsCommand, RecordInteractionsHandler,
    RecordInteractionsResult,
};
