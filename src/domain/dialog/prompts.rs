//! Fixed prompt wording for each dialog state.

use super::{ConversationState, DialogPosition};
use crate::domain::profile::Profile;

pub const GREETING: &str = "Hi! I'm Athena, your activity advisor. I'll help you find the perfect \
activities for your children! First, where do you live?";

pub const ASK_NUM_CHILDREN: &str = "Great! How many children do you have?";

pub const ASK_FIRST_CHILD: &str =
    "Please tell me your child's name and birthdate (e.g., 'John, 2015-06-15')";

pub const ASK_NEXT_CHILD: &str =
    "Thanks! Now please tell me your next child's name and birthdate (e.g., 'John, 2015-06-15')";

const ASK_INTERESTS: &str = "What activities does {child_name} enjoy? (e.g., sports, art, music)";

const ASK_PREFERENCE: &str = "Are you looking for any specific type of activity for {child_name}?";

pub const RECOMMENDATIONS_FALLBACK: &str =
    "I'll help you find some activities based on what you've told me.";

pub const RETRY_PREFIX: &str = "I didn't understand that. ";

pub const STRUCTURAL_FAILURE: &str =
    "I'm having trouble processing your request. Could you try again?";

pub const ACCOUNT_REQUIRED: &str = "Your recommendations are ready! Sign in or create an account \
to see them and save your favorites.";

const CHILD_PLACEHOLDER: &str = "{child_name}";

/// The question asked on entering `position`.
pub fn prompt_for(position: DialogPosition, profile: &Profile) -> String {
    match position.state {
        ConversationState::Initial => GREETING.to_string(),
        ConversationState::Location => ASK_NUM_CHILDREN.to_string(),
        ConversationState::NumChildren if position.child_index == 0 => ASK_FIRST_CHILD.to_string(),
        ConversationState::NumChildren => ASK_NEXT_CHILD.to_string(),
        ConversationState::ChildDetails => with_child_name(ASK_INTERESTS, position, profile),
        ConversationState::Interests => with_child_name(ASK_PREFERENCE, position, profile),
        ConversationState::Recommendations => RECOMMENDATIONS_FALLBACK.to_string(),
    }
}

/// The same question again, prefixed with a short apology.
pub fn retry_prompt(position: DialogPosition, profile: &Profile) -> String {
    format!("{}{}", RETRY_PREFIX, prompt_for(position, profile))
}

fn with_child_name(template: &str, position: DialogPosition, profile: &Profile) -> String {
    let name = profile
        .child(position.child_index)
        .map(|c| c.name.as_str())
        .unwrap_or("your child");
    template.replace(CHILD_PLACEHOLDER, name)
}
