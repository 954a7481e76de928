//! Selected-file descriptors and the preview row rendered for them.
//!
//! A [`PreviewFragment`] is derived from a [`SelectedFile`] and rendered to
//! markup that is appended to the upload region. The row always carries four
//! fields in order: document icon, file name, formatted size, and a static
//! "Change" label. File names come from the user's filesystem, so they are
//! escaped before they reach the markup.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use crate::consts::{CHANGE_LABEL, DEFAULT_DECIMALS, DOCUMENT_ICON_PATH};
use crate::size::format_bytes;

/// The file currently held by a region's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
}

impl SelectedFile {
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), size }
    }
}

/// Rendered description of a selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFragment {
    /// File name, verbatim (escaped only when rendered).
    pub name: String,
    /// Formatted size, e.g. `"1.5 KB"`.
    pub size_label: String,
}

impl PreviewFragment {
    #[must_use]
    pub fn new(file: &SelectedFile) -> Self {
        Self { name: file.name.clone(), size_label: format_bytes(file.size, DEFAULT_DECIMALS) }
    }

    /// Render the preview row. `class` becomes the outer element's class so the
    /// row can be found and replaced later.
    #[must_use]
    pub fn to_html(&self, class: &str) -> String {
        format!(
            concat!(
                r#"<div class="{class}" style="display: flex; align-items: center; gap: 12px; width: 100%;">"#,
                r#"<div class="file-icon" style="width: 40px; height: 40px; display: flex; align-items: center; justify-content: center; background: #10b981; border-radius: 8px; color: white;">"#,
                r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor"><path d="{icon}" /></svg>"#,
                r#"</div>"#,
                r#"<div class="file-details" style="flex: 1; text-align: left;">"#,
                r#"<div class="file-name" style="font-weight: 600; color: #1f2937;">{name}</div>"#,
                r#"<div class="file-size" style="font-size: 12px; color: #6b7280;">{size}</div>"#,
                r#"</div>"#,
                r#"<div class="change-btn" style="color: #667eea; font-size: 13px; font-weight: 600;">{change}</div>"#,
                r#"</div>"#,
            ),
            class = escape_html(class),
            icon = DOCUMENT_ICON_PATH,
            name = escape_html(&self.name),
            size = escape_html(&self.size_label),
            change = CHANGE_LABEL,
        )
    }
}

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
