//! GetRecommendationsHandler - Query handler for a profile's matches.

use std::sync::Arc;

use crate::domain::dialog::{DialogEngine, StructuralFailure};
use crate::domain::foundation::ErrorCode;
use crate::domain::matching::Recommendations;
use crate::domain::profile::Profile;

/// Errors from recommendation queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecommendationError {
    #[error("An account is required to view recommendations")]
    AccountRequired,

    #[error(transparent)]
    Unavailable(#[from] StructuralFailure),
}

impl RecommendationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::AccountRequired => ErrorCode::AccountRequired,
            Self::Unavailable(failure) => failure.code(),
        }
    }
}

/// Query for the recommendations of a completed profile.
#[derive(Debug, Clone)]
pub struct GetRecommendationsQuery {
    pub profile: Profile,
}

/// Matches plus their chat rendering.
#[derive(Debug, Clone)]
pub struct GetRecommendationsResult {
    pub recommendations: Recommendations,
    pub message: String,
}

/// Handler for recommendation queries.
pub struct GetRecommendationsHandler {
    engine: Arc<DialogEngine>,
}

impl GetRecommendationsHandler {
    pub fn new(engine: Arc<DialogEngine>) -> Self {
        Self { engine }
    }

    pub fn handle(
        &self,
        query: GetRecommendationsQuery,
    ) -> Result<GetRecommendationsResult, RecommendationError> {
        if self.engine.is_gated(&query.profile) {
            return Err(RecommendationError::AccountRequired);
        }

        let recommendations = self.engine.recommend(&query.profile)?;
        tracing::info!(
            children = recommendations.len(),
            activities = recommendations.total_activities(),
            "recommendations computed"
        );
        let message = self.engine.render(&recommendations, &query.profile);

        Ok(GetRecommendationsResult {
            recommendations,
            message,
        })
    }
}
