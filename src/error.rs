//! Error types for configuration and DOM binding.

use wasm_bindgen::JsValue;

/// Error returned by [`crate::markers::Markers::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for [`crate::markers::Markers`].
    #[error("invalid marker configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// A class-name field is empty or contains whitespace.
    #[error("invalid class name for `{field}`: {value:?}")]
    InvalidClass { field: &'static str, value: String },
}

/// Error raised while discovering or binding upload regions.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("no document available")]
    NoDocument,
    /// The region has no descendant matching the input selector.
    #[error("upload region has no file input")]
    MissingInput,
    /// The region has no ancestor carrying the card class.
    #[error("upload region has no enclosing card")]
    MissingCard,
    /// A DOM call threw.
    #[error("dom error: {0}")]
    Dom(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("upload areas are already initialized")]
    AlreadyInitialized,
}

impl From<JsValue> for UploadError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<UploadError> for JsValue {
    fn from(err: UploadError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
