//! Property tests for the dialog state machine and reply extraction.

use chrono::NaiveDate;
use proptest::prelude::*;

use activity_advisor::domain::catalog::{ActivityRecord, Catalog};
use activity_advisor::domain::dialog::{
    transition, ConversationState, DialogPosition, ResponseExtractor, ValidationFailure,
};
use activity_advisor::domain::matching::recommend;
use activity_advisor::domain::profile::{Child, Profile};

// =============================================================================
// Strategies
// =============================================================================

fn any_state() -> impl Strategy<Value = ConversationState> {
    prop::sample::select(ConversationState::ALL.to_vec())
}

fn complete_child() -> impl Strategy<Value = Child> {
    ("[A-Z][a-z]{1,8}", prop::collection::vec("[a-z]{3,8}", 1..4), "[a-z]{0,6}").prop_map(
        |(name, interests, preference)| {
            let mut child = Child::new(name, NaiveDate::from_ymd_opt(2015, 6, 15).unwrap());
            child.interests = interests;
            child.preferred_activity_type = Some(preference);
            child
        },
    )
}

fn arbitrary_profile() -> impl Strategy<Value = Profile> {
    (
        prop::option::of("[A-Za-z ]{0,12}"),
        prop::collection::vec(complete_child(), 0..3),
    )
        .prop_map(|(location, children)| {
            let mut profile = Profile::new();
            if let Some(location) = location {
                profile.set_location(location);
            }
            for child in children {
                profile.push_child(child);
            }
            profile
        })
}

fn completed_profile() -> impl Strategy<Value = Profile> {
    prop::collection::vec(complete_child(), 1..4).prop_map(|children| {
        let mut profile = Profile::new().with_location("Brooklyn");
        profile.start_children(children.len() as u32);
        for child in children {
            profile.push_child(child);
        }
        profile
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn valid_count_starts_empty_child_list(n in 1u32..) {
        let extractor = ResponseExtractor::default();
        let position = DialogPosition::new(ConversationState::Location, 0);
        let profile = Profile::new().with_location("Brooklyn");

        let updated = extractor.extract(position, &n.to_string(), &profile).unwrap();

        prop_assert!(updated.children().is_empty());
        prop_assert_eq!(updated.num_children(), Some(n));
        prop_assert_eq!(transition(position, &updated).state, ConversationState::NumChildren);
    }

    #[test]
    fn child_info_without_comma_is_malformed(reply in "[^,]{0,40}") {
        let extractor = ResponseExtractor::default();
        let position = DialogPosition::new(ConversationState::NumChildren, 0);
        let profile = Profile::new().with_location("Brooklyn");

        let result = extractor.extract(position, &reply, &profile);

        let is_malformed = matches!(result, Err(ValidationFailure::MalformedChildInfo { .. }));
        prop_assert!(is_malformed);
        prop_assert!(profile.children().is_empty());
    }

    #[test]
    fn transition_is_deterministic(
        state in any_state(),
        index in 0usize..3,
        profile in arbitrary_profile(),
    ) {
        let position = DialogPosition::new(state, index);
        prop_assert_eq!(transition(position, &profile), transition(position, &profile));
    }

    #[test]
    fn transition_only_follows_declared_edges(
        state in any_state(),
        index in 0usize..3,
        profile in arbitrary_profile(),
    ) {
        use activity_advisor::domain::foundation::StateMachine;

        let next = transition(DialogPosition::new(state, index), &profile);
        prop_assert!(next.state == state || state.can_transition_to(&next.state));
    }

    #[test]
    fn completed_profile_goes_from_child_details_to_recommendations(
        profile in completed_profile(),
    ) {
        let last = profile.children().len() - 1;
        let next = transition(DialogPosition::new(ConversationState::ChildDetails, last), &profile);
        prop_assert_eq!(next, DialogPosition::recommendations());
    }

    #[test]
    fn matching_ignores_case(tag in "[a-z]{3,10}") {
        let mut child = Child::new("Maya", NaiveDate::from_ymd_opt(2016, 3, 2).unwrap());
        child.interests = vec![tag.clone()];
        let profile = Profile::new().with_location("brooklyn").with_child(child);
        let catalog = Catalog::new(vec![ActivityRecord::new(
            "Studio",
            format!("Weekly {} sessions", tag.to_uppercase()),
            "BROOKLYN",
        )]);

        prop_assert_eq!(recommend(&profile, &catalog).total_activities(), 1);
    }
}
