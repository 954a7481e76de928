//! Structural markers tying the controller to the host page's markup.
//!
//! Every field has a default matching the stock upload card markup, so an
//! empty JSON object (or no configuration at all) binds the usual page.

#[cfg(test)]
#[path = "markers_test.rs"]
mod markers_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    AREA_CLASS, CARD_CLASS, DRAG_ACTIVE_CLASS, HIGHLIGHT_CLASS, INPUT_SELECTOR,
    PLACEHOLDER_SELECTORS, PREVIEW_CLASS, UPLOADED_CLASS,
};
use crate::error::ConfigError;

/// Class names and selectors describing an upload region and its card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Class carried by every upload region.
    pub area: String,
    /// Class carried by the card ancestor of a region.
    pub card: String,
    /// Selector for the file input inside a region.
    pub input: String,
    /// Selectors for the "no file" placeholder elements inside a region.
    pub placeholders: Vec<String>,
    /// Added to the region while a drag hovers it.
    pub highlight: String,
    /// Added to the card while a drag hovers its region.
    pub drag_active: String,
    /// Added to the card once a file has been previewed.
    pub uploaded: String,
    /// Class of the rendered preview row.
    pub preview: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            area: AREA_CLASS.into(),
            card: CARD_CLASS.into(),
            input: INPUT_SELECTOR.into(),
            placeholders: PLACEHOLDER_SELECTORS.iter().map(|s| (*s).to_string()).collect(),
            highlight: HIGHLIGHT_CLASS.into(),
            drag_active: DRAG_ACTIVE_CLASS.into(),
            uploaded: UPLOADED_CLASS.into(),
            preview: PREVIEW_CLASS.into(),
        }
    }
}

impl Markers {
    /// Parse markers from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and
    /// [`ConfigError::InvalidClass`] when a class name is empty or contains
    /// whitespace.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let markers: Self = serde_json::from_str(text)?;
        markers.validate()?;
        Ok(markers)
    }

    /// Check that every class-name field can be used with `classList`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidClass`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let classes = [
            ("area", &self.area),
            ("card", &self.card),
            ("highlight", &self.highlight),
            ("drag_active", &self.drag_active),
            ("uploaded", &self.uploaded),
            ("preview", &self.preview),
        ];
        for (field, value) in classes {
            if value.is_empty() || value.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidClass { field, value: value.clone() });
            }
        }
        Ok(())
    }

    /// Selector matching every upload region.
    #[must_use]
    pub fn area_selector(&self) -> String {
        format!(".{}", self.area)
    }

    /// Selector matching the card ancestor.
    #[must_use]
    pub fn card_selector(&self) -> String {
        format!(".{}", self.card)
    }

    /// Selector matching existing preview rows.
    #[must_use]
    pub fn preview_selector(&self) -> String {
        format!(".{}", self.preview)
    }

    /// Combined selector for all placeholder elements, or `None` if there are none.
    #[must_use]
    pub fn placeholder_selector(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .placeholders
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() { None } else { Some(parts.join(", ")) }
    }
}
