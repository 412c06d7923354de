//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations for the transport adapters.
//! Following CQRS, it separates command handlers (turns, interactions) from
//! query handlers (recommendations).

pub mod bootstrap;
pub mod handlers;

pub use bootstrap::build_engine;

pub use handlers::{
    GetRecommendationsHandler, GetRecommendationsQuery, ProcessTurnCommand, ProcessTurnHandler,
    RecordInteractionsCommand, RecordInteractionsHandler,
};
