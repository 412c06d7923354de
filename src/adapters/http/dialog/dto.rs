//! HTTP DTOs for dialog endpoints.
//!
//! Field names follow the chat client's camelCase JSON; the profile travels
//! as the `userData` snapshot in both directions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::matching::{ActivityResponse, InteractionOutcome, Recommendations};
use crate::domain::profile::Profile;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One chat turn.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub question: String,
    #[serde(default)]
    pub conversation_state: String,
    #[serde(default)]
    pub user_data: Profile,
    #[serde(default)]
    pub child_index: Option<usize>,
}

/// Request for a profile's recommendations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsRequest {
    #[serde(default)]
    pub user_data: Profile,
}

/// A caregiver's response to one presented activity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionItem {
    pub child_name: String,
    pub activity_name: String,
    #[serde(default)]
    pub bookmark: bool,
    #[serde(default)]
    pub feedback: Option<String>,
}

impl InteractionItem {
    pub fn response(&self) -> ActivityResponse {
        ActivityResponse {
            bookmark: self.bookmark,
            feedback: self.feedback.clone(),
        }
    }
}

/// A batch of interaction responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionsRequest {
    #[serde(default)]
    pub user_data: Profile,
    #[serde(default)]
    pub responses: Vec<InteractionItem>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Reply to a chat turn.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// Next prompt, or the rendered recommendations.
    pub recommendation: String,
    pub next_state: String,
    pub child_index: usize,
    pub user_data: Profile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Recommendations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

/// Matches for a profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub recommendations: Recommendations,
    pub message: String,
}

/// Result of an interaction batch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionsResponse {
    pub user_data: Profile,
    #[serde(flatten)]
    pub outcome: InteractionOutcome,
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AccountRequired, message)
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(error: DomainError) -> Self {
        let details = (!error.details.is_empty()).then(|| serde_json::json!(error.details));
        Self {
            code: error.code.to_string(),
            message: error.message,
            details,
        }
    }
}
