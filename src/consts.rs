//! Shared constants for the upload-area crate.

// ── Byte formatting ─────────────────────────────────────────────

/// Unit labels indexed by power of 1024. Larger magnitudes clamp to the last entry.
pub const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Index of the largest unit in [`UNITS`].
pub const LAST_UNIT: usize = UNITS.len() - 1;

/// Decimal places used when the caller gives no precision.
pub const DEFAULT_DECIMALS: i32 = 2;

/// Output for an empty file, independent of precision.
pub const ZERO_BYTES: &str = "0 Bytes";

/// Precision at or beyond which fixed-point rounding can no longer move an `f64` of at least 1.
pub const EXACT_DECIMALS: u32 = 17;

// ── Preview ─────────────────────────────────────────────────────

/// Static label rendered at the end of the preview row.
pub const CHANGE_LABEL: &str = "Change";

/// SVG path for the generic document icon.
pub const DOCUMENT_ICON_PATH: &str =
    "M14 2H6a2 2 0 00-2 2v16a2 2 0 002 2h12a2 2 0 002-2V8l-6-6zm-1 2l5 5h-5V4zM6 20V4h6v6h6v10H6z";

// ── Default markers ─────────────────────────────────────────────

pub const AREA_CLASS: &str = "upload-area";
pub const CARD_CLASS: &str = "doc-upload-card";
pub const INPUT_SELECTOR: &str = "input[type=\"file\"]";
pub const PLACEHOLDER_SELECTORS: [&str; 3] = ["svg", ".upload-text", ".upload-hint"];
pub const HIGHLIGHT_CLASS: &str = "highlight";
pub const DRAG_ACTIVE_CLASS: &str = "drag-active";
pub const UPLOADED_CLASS: &str = "uploaded";
pub const PREVIEW_CLASS: &str = "uploaded-file-preview";

// ── Logging ─────────────────────────────────────────────────────

/// Console log level installed by the wasm start hook.
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;
