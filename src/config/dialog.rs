//! Dialog behaviour configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::matching::DEFAULT_PREVIEW_CHARS;

/// Dialog configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DialogConfig {
    /// Largest child count accepted at the "how many children" question;
    /// unset accepts any positive count
    #[serde(default)]
    pub max_children: Option<u32>,

    /// Withhold recommendations until the profile has an account
    #[serde(default)]
    pub require_account: bool,

    /// Description characters shown per recommended activity
    #[serde(default = "default_preview_chars")]
    pub description_preview_chars: usize,
}

impl DialogConfig {
    /// Validate dialog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_children == Some(0) {
            return Err(ValidationError::InvalidMaxChildren);
        }
        if self.description_preview_chars == 0 {
            return Err(ValidationError::InvalidPreviewLength);
        }
        Ok(())
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            max_children: None,
            require_account: false,
            description_preview_chars: default_preview_chars(),
        }
    }
}

fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}
