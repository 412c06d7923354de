//! Chat-ready rendering of recommendation lists.

use chrono::NaiveDate;

use super::Recommendations;
use crate::domain::catalog::ActivityRecord;
use crate::domain::profile::Profile;

/// Default number of description characters shown per activity.
pub const DEFAULT_PREVIEW_CHARS: usize = 100;

pub const NO_MATCHES: &str = "I couldn't find any matching activities. Let me ask some questions \
to better understand your needs.";

const HEADER: &str = "Here are some recommendations:";

const CLOSING: &str =
    "Would you like to bookmark any of these activities? Or shall I refine the recommendations?";

/// Renders recommendations as plain chat text.
#[derive(Debug, Clone)]
pub struct RecommendationFormatter {
    preview_chars: usize,
}

impl Default for RecommendationFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_CHARS)
    }
}

impl RecommendationFormatter {
    pub fn new(preview_chars: usize) -> Self {
        Self { preview_chars }
    }

    /// Formats every child's list; ages are computed as of `today`.
    pub fn format(&self, recommendations: &Recommendations, profile: &Profile, today: NaiveDate) -> String {
        if !recommendations.has_matches() {
            return NO_MATCHES.to_string();
        }

        let mut out = format!("{}\n", HEADER);
        for entry in recommendations.iter() {
            let age = profile
                .children()
                .iter()
                .find(|c| c.name == entry.child_name)
                .map(|c| c.age_on(today));

            match age {
                Some(age) => out.push_str(&format!("\nFor {} (age {}):\n", entry.child_name, age)),
                None => out.push_str(&format!("\nFor {}:\n", entry.child_name)),
            }

            if entry.activities.is_empty() {
                out.push_str("   No matching activities yet.\n");
                continue;
            }
            for (i, activity) in entry.activities.iter().enumerate() {
                out.push_str(&self.format_activity(i + 1, activity));
            }
        }
        out.push('\n');
        out.push_str(CLOSING);
        out
    }

    fn format_activity(&self, number: usize, activity: &ActivityRecord) -> String {
        let mut block = format!("{}. {}\n", number, activity.name);
        let venue = activity.location.name_text();
        if !venue.is_empty() {
            block.push_str(&format!("   Location: {}\n", venue));
        }
        let description = activity.description_text().trim();
        if !description.is_empty() {
            block.push_str(&format!("   {}\n", self.preview(description)));
        }
        block
    }

    fn preview(&self, text: &str) -> String {
        if text.chars().count() <= self.preview_chars {
            return text.to_string();
        }
        let cut: String = text.chars().take(self.preview_chars).collect();
        format!("{}...", cut.trim_end())
    }
}
