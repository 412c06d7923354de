//! Catalog matching.
//!
//! Filters the catalog by location, then by each child's interests and
//! preferred activity type. Results keep catalog order; there is no scoring
//! and no de-duplication across children.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::catalog::{ActivityRecord, Catalog};
use crate::domain::profile::{Child, Profile};

/// Matches for one child, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildRecommendations {
    pub child_name: String,
    pub activities: Vec<ActivityRecord>,
}

/// Per-child recommendation lists, iterated in child order.
///
/// Behaves as a map keyed by child name: inserting an existing name replaces
/// that child's list in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recommendations {
    entries: Vec<ChildRecommendations>,
}

impl Recommendations {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, child_name: impl Into<String>, activities: Vec<ActivityRecord>) {
        let child_name = child_name.into();
        match self.entries.iter_mut().find(|e| e.child_name == child_name) {
            Some(entry) => entry.activities = activities,
            None => self.entries.push(ChildRecommendations {
                child_name,
                activities,
            }),
        }
    }

    pub fn get(&self, child_name: &str) -> Option<&[ActivityRecord]> {
        self.entries
            .iter()
            .find(|e| e.child_name == child_name)
            .map(|e| e.activities.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChildRecommendations> {
        self.entries.iter()
    }

    /// Number of children with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if at least one child has at least one activity.
    pub fn has_matches(&self) -> bool {
        self.entries.iter().any(|e| !e.activities.is_empty())
    }

    pub fn total_activities(&self) -> usize {
        self.entries.iter().map(|e| e.activities.len()).sum()
    }
}

impl Serialize for Recommendations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.child_name, &entry.activities)?;
        }
        map.end()
    }
}

/// Recommends activities for every child in `profile`.
///
/// An unset location or an empty catalog yields an empty mapping; a location
/// with no local activities yields an empty list per child. A blank location
/// is a substring of every city, so it keeps the whole catalog.
pub fn recommend(profile: &Profile, catalog: &Catalog) -> Recommendations {
    let mut recommendations = Recommendations::empty();

    let Some(location) = profile.location() else {
        return recommendations;
    };
    if catalog.is_empty() {
        return recommendations;
    }

    let location = location.trim().to_lowercase();
    let local: Vec<&ActivityRecord> = catalog
        .iter()
        .filter(|record| record.location.city_text().to_lowercase().contains(&location))
        .collect();

    for child in profile.children() {
        let matched: Vec<ActivityRecord> = local
            .iter()
            .filter(|record| matches_child(record, child))
            .map(|record| (*record).clone())
            .collect();
        tracing::debug!(
            child = %child.name,
            local = local.len(),
            matched = matched.len(),
            "matched activities for child"
        );
        recommendations.insert(child.name.clone(), matched);
    }

    recommendations
}

/// True if any interest tag or the preferred type occurs in the description.
///
/// An empty interest tag occurs in every description.
fn matches_child(record: &ActivityRecord, child: &Child) -> bool {
    let description = record.description_text().to_lowercase();
    let mentions = |term: &str| description.contains(&term.to_lowercase());

    child.interests.iter().any(|tag| mentions(tag)) || child.preference().is_some_and(mentions)
}
