//! RecordInteractionsHandler - Command handler for bookmarks and feedback.

use std::sync::Arc;

use super::RecommendationError;
use crate::domain::dialog::DialogEngine;
use crate::domain::matching::{ActivityResponse, InteractionOutcome, ScriptedResponder};
use crate::domain::profile::Profile;

/// One response to a presented activity.
#[derive(Debug, Clone)]
pub struct InteractionInput {
    pub child_name: String,
    pub activity_name: String,
    pub response: ActivityResponse,
}

/// Command applying a batch of responses to a profile's current matches.
#[derive(Debug, Clone)]
pub struct RecordInteractionsCommand {
    pub profile: Profile,
    pub responses: Vec<InteractionInput>,
}

/// Updated profile plus what changed.
#[derive(Debug, Clone)]
pub struct RecordInteractionsResult {
    pub profile: Profile,
    pub outcome: InteractionOutcome,
}

/// Handler for interaction batches.
pub struct RecordInteractionsHandler {
    engine: Arc<DialogEngine>,
}

impl RecordInteractionsHandler {
    pub fn new(engine: Arc<DialogEngine>) -> Self {
        Self { engine }
    }

    /// Presents the profile's matches in order, answering each from the batch.
    ///
    /// Responses naming activities that are not among the matches are ignored.
    pub fn handle(
        &self,
        cmd: RecordInteractionsCommand,
    ) -> Result<RecordInteractionsResult, RecommendationError> {
        if self.engine.is_gated(&cmd.profile) {
            return Err(RecommendationError::AccountRequired);
        }

        // 1. Recompute the matches the caregiver was shown
        let catalog = self.engine.catalog()?;
        let recommendations = self.engine.recommend(&cmd.profile)?;

        // 2. Replay the responses
        let mut responder = ScriptedResponder::new();
        for input in cmd.responses {
            responder.push(input.child_name, input.activity_name, input.response);
        }

        let mut profile = cmd.profile;
        let outcome = self
            .engine
            .interactions()
            .run(&mut profile, &recommendations, catalog, &mut responder);

        if responder.unused() > 0 {
            tracing::warn!(ignored = responder.unused(), "responses for activities not presented");
        }

        Ok(RecordInteractionsResult { profile, outcome })
    }
}
