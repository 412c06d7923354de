//! Dialog transition function.
//!
//! `transition` looks only at the current position and the accumulated
//! profile, so re-running it after a failed turn (profile untouched) always
//! lands on the same position.

use super::{ConversationState, DialogPosition};
use crate::domain::foundation::StateMachine;
use crate::domain::profile::{Child, Profile};

/// Computes the position that follows `position` given `profile`.
///
/// Returns `position` unchanged when the condition to advance is not met,
/// which makes the caller re-ask the same question.
pub fn transition(position: DialogPosition, profile: &Profile) -> DialogPosition {
    use ConversationState::*;

    let index = position.child_index;
    let next = match position.state {
        Initial if profile.has_location() => DialogPosition::new(Location, 0),
        Location if profile.num_children().is_some_and(|n| n > 0) => {
            DialogPosition::new(NumChildren, profile.children().len())
        }
        NumChildren if profile.child(index).is_some() => DialogPosition::new(ChildDetails, index),
        ChildDetails if profile.is_collection_complete() => DialogPosition::recommendations(),
        ChildDetails if profile.child(index).is_some_and(Child::has_interests) => {
            DialogPosition::new(Interests, index)
        }
        Interests if profile.is_collection_complete() => DialogPosition::recommendations(),
        Interests if profile.child(index).is_some_and(Child::is_complete) => next_pending_child(profile),
        _ => position,
    };

    debug_assert!(
        next.state == position.state || position.state.can_transition_to(&next.state),
        "undeclared transition {:?} -> {:?}",
        position.state,
        next.state
    );
    next
}

/// Position for the next child needing input once the current one is done.
fn next_pending_child(profile: &Profile) -> DialogPosition {
    if profile.remaining_children() > 0 {
        return DialogPosition::new(ConversationState::NumChildren, profile.children().len());
    }
    match profile.first_incomplete_child() {
        Some(i) if profile.children()[i].has_interests() => {
            DialogPosition::new(ConversationState::Interests, i)
        }
        Some(i) => DialogPosition::new(ConversationState::ChildDetails, i),
        None => DialogPosition::recommendations(),
    }
}
