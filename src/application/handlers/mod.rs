//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dialog;

pub use dialog::{
    GetRecommendationsHandler, GetRecommendationsQuery, GetRecommendationsResult,
    InteractionInput, ProcessTurnCommand, ProcessTurnHandler, ProcessTurnResult,
    RecommendationError, RecordInteractionsCommand, RecordInteractionsHandler,
    RecordInteractionsResult,
};
