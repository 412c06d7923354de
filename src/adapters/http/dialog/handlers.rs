//! HTTP handlers for dialog endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::dialog::{
    GetRecommendationsHandler, GetRecommendationsQuery, InteractionInput, ProcessTurnCommand,
    ProcessTurnHandler, RecommendationError, RecordInteractionsCommand, RecordInteractionsHandler,
};
use crate::domain::dialog::DialogEngine;
use crate::domain::foundation::DomainError;

use super::dto::{
    ChatRequest, ChatResponse, ErrorResponse, HealthResponse, InteractionsRequest,
    InteractionsResponse, RecommendationsRequest, RecommendationsResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DialogHandlers {
    turn_handler: Arc<ProcessTurnHandler>,
    recommendations_handler: Arc<GetRecommendationsHandler>,
    interactions_handler: Arc<RecordInteractionsHandler>,
}

impl DialogHandlers {
    pub fn new(
        turn_handler: Arc<ProcessTurnHandler>,
        recommendations_handler: Arc<GetRecommendationsHandler>,
        interactions_handler: Arc<RecordInteractionsHandler>,
    ) -> Self {
        Self {
            turn_handler,
            recommendations_handler,
            interactions_handler,
        }
    }

    /// Wires every handler to one shared engine.
    pub fn from_engine(engine: Arc<DialogEngine>) -> Self {
        Self::new(
            Arc::new(ProcessTurnHandler::new(engine.clone())),
            Arc::new(GetRecommendationsHandler::new(engine.clone())),
            Arc::new(RecordInteractionsHandler::new(engine)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/chat - Process one reply
///
/// Always 200: failed turns carry an `error` and leave the session as it was.
pub async fn chat(State(handlers): State<DialogHandlers>, Json(req): Json<ChatRequest>) -> Response {
    let cmd = ProcessTurnCommand {
        question: req.question,
        conversation_state: req.conversation_state,
        child_index: req.child_index,
        profile: req.user_data,
    };

    let result = handlers.turn_handler.handle(cmd);
    let error = result.failure.map(|failure| {
        ErrorResponse::from(DomainError::from(failure).with_detail("state", result.next_state.as_str()))
    });
    let response = ChatResponse {
        recommendation: result.message,
        next_state: result.next_state,
        child_index: result.child_index,
        user_data: result.profile,
        recommendations: result.recommendations,
        error,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/recommendations - Match a completed profile
pub async fn recommendations(
    State(handlers): State<DialogHandlers>,
    Json(req): Json<RecommendationsRequest>,
) -> Response {
    let query = GetRecommendationsQuery {
        profile: req.user_data,
    };

    match handlers.recommendations_handler.handle(query) {
        Ok(result) => {
            let response = RecommendationsResponse {
                recommendations: result.recommendations,
                message: result.message,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_recommendation_error(e),
    }
}

/// POST /api/interactions - Record bookmarks and feedback
pub async fn interactions(
    State(handlers): State<DialogHandlers>,
    Json(req): Json<InteractionsRequest>,
) -> Response {
    let cmd = RecordInteractionsCommand {
        profile: req.user_data,
        responses: req
            .responses
            .iter()
            .map(|item| InteractionInput {
                child_name: item.child_name.clone(),
                activity_name: item.activity_name.clone(),
                response: item.response(),
            })
            .collect(),
    };

    match handlers.interactions_handler.handle(cmd) {
        Ok(result) => {
            let response = InteractionsResponse {
                user_data: result.profile,
                outcome: result.outcome,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_recommendation_error(e),
    }
}

/// GET /health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_recommendation_error(error: RecommendationError) -> Response {
    let message = error.to_string();
    match error {
        RecommendationError::AccountRequired => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::forbidden(message)),
        )
            .into_response(),
        RecommendationError::Unavailable(failure) => {
            tracing::error!(error = %failure, "recommendations unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new(failure.code(), message)),
            )
                .into_response()
        }
    }
}
