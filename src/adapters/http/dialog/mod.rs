//! HTTP adapter for the chat dialog and recommendation endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ChatRequest, ChatResponse, ErrorResponse, HealthResponse, InteractionItem,
    InteractionsRequest, InteractionsResponse, RecommendationsRequest, RecommendationsResponse,
};
pub use handlers::DialogHandlers;
pub use routes::dialog_routes;
