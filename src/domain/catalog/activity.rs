//! Activity records as produced by the directory scrape.

use serde::{Deserialize, Deserializer, Serialize};

/// Where an activity takes place. Every field may be missing in scraped data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityLocation {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
}

impl ActivityLocation {
    /// City text, empty when unknown.
    pub fn city_text(&self) -> &str {
        self.city.as_deref().unwrap_or_default()
    }

    /// Venue name, empty when unknown.
    pub fn name_text(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// A single activity in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: ActivityLocation,
    /// Raw review objects, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<serde_json::Value>,
    /// Raw aggregate rating object, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Rank on the scraped listing page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<serde_json::Value>,
}

impl ActivityRecord {
    /// Creates a record with a name, description and city; everything else empty.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: None,
            description: Some(description.into()),
            location: ActivityLocation {
                city: Some(city.into()),
                ..Default::default()
            },
            reviews: None,
            rating: None,
            image_url: None,
            email: None,
            position: None,
        }
    }

    /// Description text, empty when the scrape had none.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ordered, read-only collection of activity records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<ActivityRecord>,
}

impl Catalog {
    pub fn new(records: Vec<ActivityRecord>) -> Self {
        Self { records }
    }

    /// Parses a catalog from the scraper's JSON array.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
