//! ProcessTurnHandler - Command handler for one chat turn.

use std::sync::Arc;

use crate::domain::dialog::{
    ConversationState, DialogEngine, DialogPosition, TurnFailure, TurnOutcome,
};
use crate::domain::matching::Recommendations;
use crate::domain::profile::Profile;

/// Command carrying one caregiver reply and the client's session snapshot.
#[derive(Debug, Clone)]
pub struct ProcessTurnCommand {
    pub question: String,
    /// State label as sent by the client; blank means a new conversation.
    pub conversation_state: String,
    pub child_index: Option<usize>,
    pub profile: Profile,
}

/// Result of a processed turn.
#[derive(Debug, Clone)]
pub struct ProcessTurnResult {
    pub message: String,
    /// Label of the next state; an unrecognised label is echoed back.
    pub next_state: String,
    pub child_index: usize,
    pub profile: Profile,
    pub recommendations: Option<Recommendations>,
    pub failure: Option<TurnFailure>,
}

impl From<TurnOutcome> for ProcessTurnResult {
    fn from(outcome: TurnOutcome) -> Self {
        Self {
            message: outcome.message,
            next_state: outcome.position.state.to_string(),
            child_index: outcome.position.child_index,
            profile: outcome.profile,
            recommendations: outcome.recommendations,
            failure: outcome.failure,
        }
    }
}

/// Handler for chat turns.
pub struct ProcessTurnHandler {
    engine: Arc<DialogEngine>,
}

impl ProcessTurnHandler {
    pub fn new(engine: Arc<DialogEngine>) -> Self {
        Self { engine }
    }

    /// Runs the turn. Failures are reported in the result, never as errors.
    pub fn handle(&self, cmd: ProcessTurnCommand) -> ProcessTurnResult {
        let label = cmd.conversation_state.trim();

        // 1. Resolve the state label
        let state = if label.is_empty() {
            Ok(ConversationState::Initial)
        } else {
            label.parse::<ConversationState>()
        };

        let state = match state {
            Ok(state) => state,
            Err(failure) => {
                tracing::warn!(label = %label, "turn received for unknown state");
                let position = DialogPosition::initial();
                let mut result: ProcessTurnResult =
                    TurnOutcome::structural(position, cmd.profile, failure).into();
                result.next_state = cmd.conversation_state;
                result.child_index = cmd.child_index.unwrap_or_default();
                return result;
            }
        };

        // 2. Build the position, defaulting to the most recent child
        let position = DialogPosition::resolve(state, cmd.child_index, &cmd.profile);

        // 3. Run the turn
        self.engine.turn(&cmd.question, position, &cmd.profile).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{ActivityRecord, Catalog};
    use crate::domain::dialog::prompts::{GREETING, STRUCTURAL_FAILURE};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::profile::Child;
    use chrono::NaiveDate;

    fn handler() -> ProcessTurnHandler {
        let catalog = Catalog::new(vec![ActivityRecord::new(
            "Little Maestros",
            "Weekly music lessons",
            "Brooklyn",
        )]);
        let engine = DialogEngine::new(Arc::new(catalog))
            .with_reference_date(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
        ProcessTurnHandler::new(Arc::new(engine))
    }

    fn command(question: &str, state: &str, profile: Profile) -> ProcessTurnCommand {
        ProcessTurnCommand {
            question: question.to_string(),
            conversation_state: state.to_string(),
            child_index: None,
            profile,
        }
    }

    #[test]
    fn blank_state_starts_at_initial() {
        let result = handler().handle(command("Brooklyn", "", Profile::new()));
        assert_eq!(result.next_state, "location");
        assert_eq!(result.profile.location(), Some("Brooklyn"));
    }

    #[test]
    fn unknown_state_is_echoed_with_generic_message() {
        let profile = Profile::new().with_location("Brooklyn");
        let result = handler().handle(command("hello", "bogus", profile.clone()));

        assert_eq!(result.message, STRUCTURAL_FAILURE);
        assert_eq!(result.next_state, "bogus");
        assert_eq!(result.profile, profile);
        assert_eq!(result.failure.map(|f| f.code()), Some(ErrorCode::UnknownState));
    }

    #[test]
    fn omitted_index_addresses_last_child() {
        let mut profile = Profile::new().with_location("Brooklyn");
        profile.start_children(2);
        let mut maya = Child::new("Maya", NaiveDate::from_ymd_opt(2016, 3, 2).unwrap());
        maya.interests = vec!["music".into()];
        maya.preferred_activity_type = Some(String::new());
        profile.push_child(maya);
        profile.push_child(Child::new("Leo", NaiveDate::from_ymd_opt(2019, 7, 8).unwrap()));

        let result = handler().handle(command("swimming", "child_details", profile));

        assert_eq!(result.next_state, "interests");
        assert_eq!(result.child_index, 1);
        assert_eq!(result.profile.children()[1].interests, vec!["swimming"]);
    }

    #[test]
    fn start_resets_from_any_state() {
        let result = handler().handle(command("start", "interests", Profile::new()));
        assert_eq!(result.message, GREETING);
        assert_eq!(result.next_state, "initial");
    }
}
