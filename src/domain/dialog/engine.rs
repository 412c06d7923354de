//! Turn engine: one caregiver reply in, one prompt or recommendation out.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use super::prompts::{prompt_for, retry_prompt, ACCOUNT_REQUIRED, GREETING, STRUCTURAL_FAILURE};
use super::{
    transition, ConversationState, DialogPosition, ResponseExtractor, StructuralFailure, TurnFailure,
};
use crate::domain::catalog::Catalog;
use crate::domain::matching::{
    recommend, FeedbackSignal, InteractionHandler, RecommendationFormatter, Recommendations,
};
use crate::domain::profile::Profile;

/// Reply that restarts the conversation from scratch.
pub const RESET_COMMAND: &str = "start";

/// Result of processing one reply.
///
/// On failure `position` and `profile` are exactly the ones passed in.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub message: String,
    pub position: DialogPosition,
    pub profile: Profile,
    pub recommendations: Option<Recommendations>,
    pub failure: Option<TurnFailure>,
}

impl TurnOutcome {
    fn advanced(message: String, position: DialogPosition, profile: Profile) -> Self {
        Self {
            message,
            position,
            profile,
            recommendations: None,
            failure: None,
        }
    }

    fn failed(message: String, position: DialogPosition, profile: Profile, failure: TurnFailure) -> Self {
        Self {
            message,
            position,
            profile,
            recommendations: None,
            failure: Some(failure),
        }
    }

    /// Outcome for a turn that could not be processed at all.
    pub fn structural(position: DialogPosition, profile: Profile, failure: StructuralFailure) -> Self {
        Self::failed(STRUCTURAL_FAILURE.to_string(), position, profile, failure.into())
    }

    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}

/// Drives the dialog over a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct DialogEngine {
    catalog: Result<Arc<Catalog>, StructuralFailure>,
    extractor: ResponseExtractor,
    formatter: RecommendationFormatter,
    interactions: InteractionHandler,
    require_account: bool,
    reference_date: Option<NaiveDate>,
}

impl DialogEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_catalog(Ok(catalog))
    }

    /// Engine whose catalog failed to load; matching turns fail structurally.
    pub fn without_catalog(reason: impl Into<String>) -> Self {
        Self::with_catalog(Err(StructuralFailure::CatalogUnavailable(reason.into())))
    }

    fn with_catalog(catalog: Result<Arc<Catalog>, StructuralFailure>) -> Self {
        Self {
            catalog,
            extractor: ResponseExtractor::default(),
            formatter: RecommendationFormatter::default(),
            interactions: InteractionHandler::default(),
            require_account: false,
            reference_date: None,
        }
    }

    pub fn with_extractor(mut self, extractor: ResponseExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_formatter(mut self, formatter: RecommendationFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_interactions(mut self, interactions: InteractionHandler) -> Self {
        self.interactions = interactions;
        self
    }

    /// Withhold recommendations until the profile has an account.
    pub fn require_account(mut self, required: bool) -> Self {
        self.require_account = required;
        self
    }

    /// Fixes the date used for age calculation. Defaults to today.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn catalog(&self) -> Result<&Arc<Catalog>, StructuralFailure> {
        self.catalog.as_ref().map_err(Clone::clone)
    }

    pub fn interactions(&self) -> &InteractionHandler {
        &self.interactions
    }

    pub fn requires_account(&self) -> bool {
        self.require_account
    }

    /// True when recommendations must be withheld from `profile`.
    pub fn is_gated(&self, profile: &Profile) -> bool {
        self.require_account && !profile.has_account()
    }

    /// Runs the matcher against the loaded catalog.
    pub fn recommend(&self, profile: &Profile) -> Result<Recommendations, StructuralFailure> {
        Ok(recommend(profile, self.catalog()?))
    }

    /// Chat text for `recommendations`, with ages as of the reference date.
    pub fn render(&self, recommendations: &Recommendations, profile: &Profile) -> String {
        self.formatter.format(recommendations, profile, self.today())
    }

    fn today(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Processes one reply given at `position`.
    ///
    /// Never returns an error: failures are reported in the outcome and leave
    /// position and profile untouched so the session can continue.
    pub fn turn(&self, raw: &str, position: DialogPosition, profile: &Profile) -> TurnOutcome {
        if raw.trim().eq_ignore_ascii_case(RESET_COMMAND) {
            tracing::info!("conversation reset");
            return TurnOutcome::advanced(GREETING.to_string(), DialogPosition::initial(), Profile::new());
        }

        if let Err(failure) = check_child_index(position, profile) {
            tracing::warn!(state = %position.state, error = %failure, "structural failure");
            return TurnOutcome::structural(position, profile.clone(), failure);
        }

        let updated = match self.extractor.extract(position, raw, profile) {
            Ok(updated) => updated,
            Err(failure) => {
                tracing::warn!(
                    state = %position.state,
                    child_index = position.child_index,
                    code = %failure.code(),
                    "reply failed validation"
                );
                return TurnOutcome::failed(
                    retry_prompt(position, profile),
                    position,
                    profile.clone(),
                    failure.into(),
                );
            }
        };

        let next = transition(position, &updated);
        tracing::info!(
            from = %position.state,
            to = %next.state,
            child_index = next.child_index,
            "turn processed"
        );

        if next.state == ConversationState::Recommendations {
            return self.recommendations_turn(raw, position, profile, updated);
        }

        let message = if next == position {
            retry_prompt(position, &updated)
        } else {
            prompt_for(next, &updated)
        };
        TurnOutcome::advanced(message, next, updated)
    }

    fn recommendations_turn(
        &self,
        raw: &str,
        position: DialogPosition,
        original: &Profile,
        updated: Profile,
    ) -> TurnOutcome {
        let next = DialogPosition::recommendations();

        if self.is_gated(&updated) {
            tracing::info!("recommendations withheld until an account exists");
            return TurnOutcome::advanced(ACCOUNT_REQUIRED.to_string(), next, updated);
        }

        let catalog = match self.catalog() {
            Ok(catalog) => catalog,
            Err(failure) => {
                tracing::error!(error = %failure, "cannot match without a catalog");
                return TurnOutcome::structural(position, original.clone(), failure);
            }
        };

        let feedback = raw.trim();
        let recommendations = if position.state == ConversationState::Recommendations && !feedback.is_empty() {
            self.interactions
                .refine(&updated, &[FeedbackSignal::general(feedback)], catalog)
        } else {
            recommend(&updated, catalog)
        };

        let message = self.render(&recommendations, &updated);
        TurnOutcome {
            message,
            position: next,
            profile: updated,
            recommendations: Some(recommendations),
            failure: None,
        }
    }
}

/// Rejects positions addressing a child slot that cannot exist.
///
/// A name reply always appends, so at NUM_CHILDREN the index must be the
/// next free slot.
fn check_child_index(position: DialogPosition, profile: &Profile) -> Result<(), StructuralFailure> {
    let count = profile.children().len();
    let out_of_range = match position.state {
        ConversationState::NumChildren => position.child_index != count,
        ConversationState::ChildDetails | ConversationState::Interests => position.child_index >= count,
        _ => false,
    };
    if out_of_range {
        return Err(StructuralFailure::ChildIndexOutOfRange {
            index: position.child_index,
            count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ActivityRecord;
    use crate::domain::dialog::ValidationFailure;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::profile::Child;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engine() -> DialogEngine {
        let catalog = Catalog::new(vec![
            ActivityRecord::new("Little Maestros", "Weekly music lessons", "Brooklyn"),
            ActivityRecord::new("Aqua Kids", "Swim team practice", "Brooklyn"),
        ]);
        DialogEngine::new(Arc::new(catalog)).with_reference_date(date(2024, 9, 1))
    }

    /// Feeds replies in order, returning the last outcome.
    fn converse(engine: &DialogEngine, replies: &[&str]) -> TurnOutcome {
        let mut position = DialogPosition::initial();
        let mut profile = Profile::new();
        let mut last = None;
        for reply in replies {
            let outcome = engine.turn(reply, position, &profile);
            position = outcome.position;
            profile = outcome.profile.clone();
            last = Some(outcome);
        }
        last.unwrap()
    }

    mod happy_path {
        use super::*;

        #[test]
        fn location_answer_asks_for_child_count() {
            let outcome = engine().turn("Brooklyn", DialogPosition::initial(), &Profile::new());
            assert_eq!(outcome.position.state, ConversationState::Location);
            assert_eq!(outcome.profile.location(), Some("Brooklyn"));
            assert!(outcome.message.contains("How many children"));
        }

        #[test]
        fn single_child_dialog_reaches_recommendations() {
            let outcome = converse(
                &engine(),
                &["Brooklyn", "1", "Maya, 2016-03-02", "music", ""],
            );

            assert_eq!(outcome.position, DialogPosition::recommendations());
            assert!(outcome.message.contains("For Maya (age 8):"));
            assert!(outcome.message.contains("Little Maestros"));
            let recs = outcome.recommendations.unwrap();
            assert_eq!(recs.total_activities(), 1);
        }

        #[test]
        fn two_children_are_collected_in_turn() {
            let engine = engine();
            let outcome = converse(&engine, &["Brooklyn", "2", "Maya, 2016-03-02", "music", ""]);
            assert_eq!(outcome.position, DialogPosition::new(ConversationState::NumChildren, 1));

            let mut position = outcome.position;
            let mut profile = outcome.profile;
            for reply in ["Leo, 2019-07-08", "swimming", "swim"] {
                let next = engine.turn(reply, position, &profile);
                position = next.position;
                profile = next.profile;
            }

            assert_eq!(position, DialogPosition::recommendations());
            assert_eq!(profile.children().len(), 2);
            assert_eq!(profile.children()[1].preference(), Some("swim"));
        }

        #[test]
        fn prompts_name_the_child() {
            let outcome = converse(&engine(), &["Brooklyn", "1", "Maya, 2016-03-02"]);
            assert_eq!(
                outcome.message,
                "What activities does Maya enjoy? (e.g., sports, art, music)"
            );
        }
    }

    mod failures {
        use super::*;

        #[test]
        fn invalid_count_reprompts_without_change() {
            let position = DialogPosition::new(ConversationState::Location, 0);
            let profile = Profile::new().with_location("Brooklyn");

            let outcome = engine().turn("two", position, &profile);

            assert_eq!(outcome.position, position);
            assert_eq!(outcome.profile, profile);
            assert!(outcome.message.starts_with("I didn't understand that. "));
            assert_eq!(
                outcome.failure,
                Some(TurnFailure::Validation(ValidationFailure::InvalidCount {
                    input: "two".into()
                }))
            );
        }

        #[test]
        fn malformed_child_info_keeps_children() {
            let outcome = converse(&engine(), &["Brooklyn", "1", "Maya 2016-03-02"]);
            assert_eq!(outcome.position.state, ConversationState::NumChildren);
            assert!(outcome.profile.children().is_empty());
            assert_eq!(outcome.failure.map(|f| f.code()), Some(ErrorCode::MalformedChildInfo));
        }

        #[test]
        fn out_of_range_child_is_structural() {
            let position = DialogPosition::new(ConversationState::ChildDetails, 3);
            let outcome = engine().turn("music", position, &Profile::new());

            assert_eq!(outcome.message, STRUCTURAL_FAILURE);
            assert_eq!(outcome.position, position);
            assert_eq!(outcome.failure.map(|f| f.code()), Some(ErrorCode::ChildIndexOutOfRange));
        }

        #[test]
        fn missing_catalog_is_structural_and_keeps_state() {
            let engine = DialogEngine::without_catalog("file not found");
            let outcome = converse(&engine, &["Brooklyn", "1", "Maya, 2016-03-02", "music", ""]);

            assert_eq!(outcome.message, STRUCTURAL_FAILURE);
            assert_eq!(outcome.position, DialogPosition::new(ConversationState::Interests, 0));
            assert_eq!(outcome.profile.children()[0].preferred_activity_type, None);
            assert_eq!(outcome.failure.map(|f| f.code()), Some(ErrorCode::CatalogUnavailable));
        }

        #[test]
        fn blank_interests_still_advance() {
            let outcome = converse(&engine(), &["Brooklyn", "1", "Maya, 2016-03-02", " , "]);
            assert_eq!(outcome.position, DialogPosition::new(ConversationState::Interests, 0));
            assert_eq!(outcome.profile.children()[0].interests, vec!["", ""]);
            assert!(outcome.failure.is_none());
        }

        #[test]
        fn stale_name_slot_is_structural() {
            let mut maya = Child::new("Maya", date(2016, 3, 2));
            maya.interests = vec!["music".into()];
            maya.preferred_activity_type = Some(String::new());
            let mut profile = Profile::new().with_location("Brooklyn");
            profile.start_children(2);
            profile.push_child(maya);
            let stale = DialogPosition::new(ConversationState::NumChildren, 0);

            let outcome = engine().turn("Leo, 2019-07-08", stale, &profile);

            assert_eq!(outcome.message, STRUCTURAL_FAILURE);
            assert_eq!(outcome.position, stale);
            assert_eq!(outcome.profile, profile);
            assert_eq!(outcome.failure.map(|f| f.code()), Some(ErrorCode::ChildIndexOutOfRange));
        }

        #[test]
        fn next_name_slot_addresses_new_child() {
            let first = converse(&engine(), &["Brooklyn", "2", "Maya, 2016-03-02", "music", ""]);
            let outcome = engine().turn(
                "Leo, 2019-07-08",
                first.position,
                &first.profile,
            );

            assert_eq!(outcome.position, DialogPosition::new(ConversationState::ChildDetails, 1));
            assert_eq!(outcome.message, "What activities does Leo enjoy? (e.g., sports, art, music)");
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn start_resets_any_position() {
            let outcome = converse(&engine(), &["Brooklyn", "1", "START"]);
            assert_eq!(outcome.position, DialogPosition::initial());
            assert_eq!(outcome.profile, Profile::new());
            assert_eq!(outcome.message, GREETING);
        }

        #[test]
        fn padded_start_resets() {
            let outcome = converse(&engine(), &["Brooklyn", "  start\n"]);
            assert_eq!(outcome.position, DialogPosition::initial());
        }

        #[test]
        fn start_inside_a_reply_is_not_a_reset() {
            let outcome = converse(&engine(), &["start here"]);
            assert_eq!(outcome.position.state, ConversationState::Location);
            assert_eq!(outcome.profile.location(), Some("start here"));
        }
    }

    mod recommendations {
        use super::*;

        fn complete_profile() -> Profile {
            let mut maya = Child::new("Maya", date(2016, 3, 2));
            maya.interests = vec!["music".into()];
            maya.preferred_activity_type = Some(String::new());
            let mut profile = Profile::new().with_location("Brooklyn");
            profile.start_children(1);
            profile.push_child(maya);
            profile
        }

        #[test]
        fn account_gate_withholds_results() {
            let mut maya = complete_profile();
            maya.child_mut(0).unwrap().preferred_activity_type = None;
            let position = DialogPosition::new(ConversationState::Interests, 0);

            let outcome = engine().require_account(true).turn("", position, &maya);

            assert_eq!(outcome.message, ACCOUNT_REQUIRED);
            assert_eq!(outcome.position, DialogPosition::recommendations());
            assert!(outcome.recommendations.is_none());
        }

        #[test]
        fn account_holder_sees_results() {
            let profile = complete_profile().with_account(true);
            let outcome = engine()
                .require_account(true)
                .turn("", DialogPosition::recommendations(), &profile);
            assert!(outcome.recommendations.is_some());
        }

        #[test]
        fn feedback_at_recommendations_rematches() {
            let profile = complete_profile();
            let outcome = engine().turn("cheaper please", DialogPosition::recommendations(), &profile);

            assert_eq!(outcome.position, DialogPosition::recommendations());
            assert_eq!(outcome.profile, profile);
            assert_eq!(outcome.recommendations.map(|r| r.total_activities()), Some(1));
        }

        #[test]
        fn no_local_matches_uses_fallback_text() {
            let mut profile = complete_profile();
            profile.set_location("Queens");
            let outcome = engine().turn("", DialogPosition::recommendations(), &profile);
            assert!(outcome.message.starts_with("I couldn't find any matching activities."));
        }
    }
}
