//! Dialog states and the composite dialog position.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::StructuralFailure;
use crate::domain::foundation::StateMachine;
use crate::domain::profile::Profile;

/// The question the dialog is currently waiting on.
///
/// Each state names the prompt that was last shown; the reply received in a
/// state answers that prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    /// Greeting shown, waiting for the caregiver's location.
    #[default]
    Initial,

    /// Location recorded, waiting for the number of children.
    Location,

    /// Waiting for a child's name and birthdate.
    NumChildren,

    /// Waiting for a child's interests.
    ChildDetails,

    /// Waiting for a child's preferred activity type.
    Interests,

    /// Collection finished; recommendations are being shown.
    Recommendations,
}

impl ConversationState {
    pub const ALL: [ConversationState; 6] = [
        Self::Initial,
        Self::Location,
        Self::NumChildren,
        Self::ChildDetails,
        Self::Interests,
        Self::Recommendations,
    ];

    /// Wire label, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Location => "location",
            Self::NumChildren => "num_children",
            Self::ChildDetails => "child_details",
            Self::Interests => "interests",
            Self::Recommendations => "recommendations",
        }
    }

    /// Returns true if this state is addressed to a particular child.
    pub fn is_per_child(&self) -> bool {
        matches!(self, Self::NumChildren | Self::ChildDetails | Self::Interests)
    }
}

impl fmt::Display for ConversationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversationState {
    type Err = StructuralFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| StructuralFailure::UnknownState(s.to_string()))
    }
}

impl StateMachine for ConversationState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ConversationState::*;
        matches!(
            (self, target),
            (Initial, Location) |
            (Location, NumChildren) |
            (NumChildren, ChildDetails) |
            (ChildDetails, Interests) |
            // Retry of an already complete profile
            (ChildDetails, Recommendations) |
            (Interests, Recommendations) |
            // Next child still to be introduced
            (Interests, NumChildren) |
            // Earlier child still missing answers
            (Interests, ChildDetails)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ConversationState::*;
        match self {
            Initial => vec![Location],
            Location => vec![NumChildren],
            NumChildren => vec![ChildDetails],
            ChildDetails => vec![Interests, Recommendations],
            Interests => vec![Recommendations, NumChildren, ChildDetails],
            Recommendations => vec![],
        }
    }
}

/// Where the dialog stands: the state plus the child it is addressed to.
///
/// `child_index` is only meaningful for per-child states; it is kept at 0
/// elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogPosition {
    pub state: ConversationState,
    pub child_index: usize,
}

impl DialogPosition {
    pub fn new(state: ConversationState, child_index: usize) -> Self {
        let child_index = if state.is_per_child() { child_index } else { 0 };
        Self { state, child_index }
    }

    pub fn initial() -> Self {
        Self::default()
    }

    pub fn recommendations() -> Self {
        Self::new(ConversationState::Recommendations, 0)
    }

    /// Builds a position from a state and an optional explicit child index.
    ///
    /// Without an index, NUM_CHILDREN addresses the next child slot and the
    /// other per-child states address the most recently added child.
    pub fn resolve(state: ConversationState, child_index: Option<usize>, profile: &Profile) -> Self {
        let index = child_index.unwrap_or_else(|| match state {
            ConversationState::NumChildren => profile.children().len(),
            _ => profile.children().len().saturating_sub(1),
        });
        Self::new(state, index)
    }
}
