//! Profile aggregate: the caregiver data accumulated over one conversation.

use serde::{Deserialize, Serialize};

use super::Child;

/// Caregiver profile for a single conversation session.
///
/// Serialized as the camelCase `userData` snapshot exchanged with clients,
/// so every field defaults when absent and `{}` is a valid empty profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_children: Option<u32>,
    children: Vec<Child>,
    bookmarked_activities: Vec<String>,
    has_account: bool,
}

impl Profile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style location setter.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.set_location(location);
        self
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: Child) -> Self {
        self.push_child(child);
        self
    }

    /// Builder-style account flag.
    pub fn with_account(mut self, has_account: bool) -> Self {
        self.has_account = has_account;
        self
    }

    // ───────────────────────────────────────────────────────────────
    // Location
    // ───────────────────────────────────────────────────────────────

    /// The stored location, blank or not.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// True once a non-blank location has been given.
    pub fn has_location(&self) -> bool {
        self.location().is_some_and(|l| !l.trim().is_empty())
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = Some(location.into());
    }

    // ───────────────────────────────────────────────────────────────
    // Children
    // ───────────────────────────────────────────────────────────────

    /// The child count announced by the caregiver, if answered.
    pub fn num_children(&self) -> Option<u32> {
        self.num_children
    }

    /// Records the announced child count and clears any collected children.
    pub fn start_children(&mut self, count: u32) {
        self.num_children = Some(count);
        self.children.clear();
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Child> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Child> {
        self.children.get_mut(index)
    }

    /// Appends a child and returns its index.
    pub fn push_child(&mut self, child: Child) -> usize {
        self.children.push(child);
        self.children.len() - 1
    }

    /// Number of children still to be introduced by name.
    pub fn remaining_children(&self) -> usize {
        let target = self.num_children.unwrap_or(0) as usize;
        target.saturating_sub(self.children.len())
    }

    /// Index of the first child missing interests or a preference answer.
    pub fn first_incomplete_child(&self) -> Option<usize> {
        self.children.iter().position(|c| !c.is_complete())
    }

    /// True when at least one child exists, all children are complete, and
    /// every announced child has been introduced.
    pub fn is_collection_complete(&self) -> bool {
        !self.children.is_empty()
            && self.first_incomplete_child().is_none()
            && self.remaining_children() == 0
    }

    // ───────────────────────────────────────────────────────────────
    // Interaction phase
    // ───────────────────────────────────────────────────────────────

    pub fn bookmarked_activities(&self) -> &[String] {
        &self.bookmarked_activities
    }

    /// Appends a bookmark. Repeated bookmarks are kept.
    pub fn bookmark(&mut self, activity_name: impl Into<String>) {
        self.bookmarked_activities.push(activity_name.into());
    }

    pub fn has_account(&self) -> bool {
        self.has_account
    }
}
