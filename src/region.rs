//! Per-region state machine for an upload area.
//!
//! `RegionCore` holds everything a region knows about itself (drag highlight,
//! whether a file has been previewed, the current preview) and turns incoming
//! events into a list of [`Action`]s. The DOM layer in [`crate::area`] applies
//! those actions in order; nothing here touches the browser, so the event
//! contract is tested natively.
//!
//! Highlight and uploaded are independent flags: a drag that ends without a
//! drop clears the highlight and leaves the uploaded state alone.

#[cfg(test)]
#[path = "region_test.rs"]
mod region_test;

use crate::preview::{PreviewFragment, SelectedFile};

/// The four drag lifecycle signals a region listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragPhase {
    pub const ALL: [Self; 4] = [Self::Enter, Self::Over, Self::Leave, Self::Drop];

    /// DOM event name for this phase.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Enter => "dragenter",
            Self::Over => "dragover",
            Self::Leave => "dragleave",
            Self::Drop => "drop",
        }
    }

    /// Whether this phase starts or continues a hover.
    #[must_use]
    pub fn is_hover(self) -> bool {
        matches!(self, Self::Enter | Self::Over)
    }
}

/// DOM effects returned from event handlers for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Prevent the browser default and stop propagation.
    SuppressDefault,
    /// Add the highlight class to the region and drag-active to the card.
    Highlight,
    /// Remove the highlight and drag-active classes.
    Unhighlight,
    /// Assign the dropped file list to the region's input.
    SyncInput,
    /// Remove any existing preview row from the region.
    RemovePreview,
    /// Hide the placeholder elements.
    HidePlaceholders,
    /// Append a freshly rendered preview row.
    InsertPreview(PreviewFragment),
    /// Add the uploaded class to the card.
    MarkUploaded,
}

/// State of one upload region.
#[derive(Debug, Clone, Default)]
pub struct RegionCore {
    pub highlighted: bool,
    pub uploaded: bool,
    pub placeholders_hidden: bool,
    pub preview: Option<PreviewFragment>,
}

impl RegionCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Events ---

    /// The input's file list changed. Only the first file is previewed; an
    /// empty list changes nothing.
    pub fn on_change(&mut self, files: &[SelectedFile]) -> Vec<Action> {
        match files.first() {
            Some(file) => self.select(file),
            None => Vec::new(),
        }
    }

    /// A drag lifecycle signal arrived over the region.
    pub fn on_drag(&mut self, phase: DragPhase) -> Vec<Action> {
        self.highlighted = phase.is_hover();
        let highlight = if self.highlighted { Action::Highlight } else { Action::Unhighlight };
        vec![Action::SuppressDefault, highlight]
    }

    /// Files were dropped on the region. The drop also ends the drag; when it
    /// carried files they are pushed into the input and previewed exactly as a
    /// picker selection would be.
    pub fn on_drop(&mut self, files: &[SelectedFile]) -> Vec<Action> {
        let mut actions = self.on_drag(DragPhase::Drop);
        if !files.is_empty() {
            actions.push(Action::SyncInput);
            actions.extend(self.on_change(files));
        }
        actions
    }

    /// Replace the preview with one for `file`.
    pub fn select(&mut self, file: &SelectedFile) -> Vec<Action> {
        let fragment = PreviewFragment::new(file);
        self.preview = Some(fragment.clone());
        self.placeholders_hidden = true;
        self.uploaded = true;
        vec![
            Action::RemovePreview,
            Action::HidePlaceholders,
            Action::InsertPreview(fragment),
            Action::MarkUploaded,
        ]
    }

    // --- Queries ---

    /// The file currently shown, if any.
    #[must_use]
    pub fn preview(&self) -> Option<&PreviewFragment> {
        self.preview.as_ref()
    }
}
