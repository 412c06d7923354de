//! Reply validation and extraction.
//!
//! Turns a caregiver's raw reply into profile fields according to the
//! question that was asked. Extraction works on a copy, so a failed reply
//! leaves the caller's profile exactly as it was.

use super::{ConversationState, DialogPosition, ValidationFailure};
use crate::domain::profile::{Child, Profile};

/// Upper bound applied to replies before parsing (characters).
pub const MAX_REPLY_LENGTH: usize = 2_000;

/// Parses replies into profile updates.
///
/// Any positive child count is accepted unless a cap is configured.
#[derive(Debug, Clone, Default)]
pub struct ResponseExtractor {
    max_children: Option<u32>,
}

impl ResponseExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects announced child counts above `max`.
    pub fn with_max_children(mut self, max: u32) -> Self {
        self.max_children = Some(max);
        self
    }

    pub fn max_children(&self) -> Option<u32> {
        self.max_children
    }

    /// Applies `raw` as the answer to the question at `position`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationFailure`] when the reply does not fit the
    /// expected shape; the input profile is never modified.
    pub fn extract(
        &self,
        position: DialogPosition,
        raw: &str,
        profile: &Profile,
    ) -> Result<Profile, ValidationFailure> {
        let reply = sanitize(raw);
        let mut updated = profile.clone();

        match position.state {
            ConversationState::Initial => {
                updated.set_location(reply.trim());
            }
            ConversationState::Location => {
                let count = self.parse_count(&reply)?;
                updated.start_children(count);
            }
            ConversationState::NumChildren => {
                let child = parse_child_info(&reply)?;
                updated.push_child(child);
            }
            ConversationState::ChildDetails => {
                let child = updated
                    .child_mut(position.child_index)
                    .ok_or(ValidationFailure::NoActiveChild {
                        index: position.child_index,
                    })?;
                child.interests = split_tags(&reply);
            }
            ConversationState::Interests => {
                let child = updated
                    .child_mut(position.child_index)
                    .ok_or(ValidationFailure::NoActiveChild {
                        index: position.child_index,
                    })?;
                child.preferred_activity_type = Some(reply.trim().to_string());
            }
            // Replies here are refinement feedback; the profile is frozen.
            ConversationState::Recommendations => {}
        }

        Ok(updated)
    }

    fn parse_count(&self, reply: &str) -> Result<u32, ValidationFailure> {
        let invalid = || ValidationFailure::InvalidCount {
            input: reply.trim().to_string(),
        };
        let count: u32 = reply.trim().parse().map_err(|_| invalid())?;
        if count == 0 || self.max_children.is_some_and(|max| count > max) {
            return Err(invalid());
        }
        Ok(count)
    }
}

/// Parses `"name, birthdate"` into a new child.
fn parse_child_info(reply: &str) -> Result<Child, ValidationFailure> {
    let fields: Vec<&str> = reply.split(',').map(str::trim).collect();
    let (name, birthdate) = match fields.as_slice() {
        [name, birthdate] if !name.is_empty() && !birthdate.is_empty() => (*name, *birthdate),
        _ => {
            return Err(ValidationFailure::MalformedChildInfo {
                input: reply.trim().to_string(),
            })
        }
    };

    let birthdate = Child::parse_birthdate(birthdate).map_err(|_| {
        ValidationFailure::InvalidBirthdate {
            input: birthdate.to_string(),
        }
    })?;

    Ok(Child::new(name, birthdate))
}

/// Splits a comma-separated list into trimmed tags in input order.
fn split_tags(reply: &str) -> Vec<String> {
    reply.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// Drops control characters and caps the reply length.
fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .take(MAX_REPLY_LENGTH)
        .collect()
}
