//! Drag-and-drop and click-to-select upload areas for HTML forms.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It binds to
//! existing upload markup (a region holding a native file input, wrapped in a
//! card), highlights the region while files are dragged over it, and replaces
//! the placeholder with a preview row once a file is chosen by the picker or
//! dropped. Nothing is uploaded; the native input stays the single source of
//! truth for the selected file.
//!
//! The host page calls `initUploadAreas()` once, after `DOMContentLoaded`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`area`] | DOM binding: region discovery, listeners, applying actions |
//! | [`region`] | Testable per-region state machine ([`region::RegionCore`]) |
//! | [`preview`] | Selected-file descriptor and preview markup |
//! | [`size`] | Byte-size formatting |
//! | [`markers`] | Configurable class names and selectors |
//! | [`error`] | Configuration and binding errors |
//! | [`consts`] | Shared constants (units, labels, default markers) |

pub mod area;
pub mod consts;
pub mod error;
pub mod markers;
pub mod preview;
pub mod region;
pub mod size;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::area::UploadArea;
use crate::consts::{DEFAULT_DECIMALS, DEFAULT_LOG_LEVEL};
use crate::error::UploadError;
use crate::markers::Markers;

thread_local! {
    /// Areas bound by the last successful init. Holding them keeps their listeners alive.
    static BOUND: RefCell<Option<Vec<UploadArea>>> = const { RefCell::new(None) };
}

/// Install the panic hook and console logger.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(DEFAULT_LOG_LEVEL).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Bind every upload region on the page using the default markers.
///
/// # Errors
///
/// Fails when there is no document or when called a second time.
#[wasm_bindgen(js_name = initUploadAreas)]
pub fn init_upload_areas() -> Result<usize, JsValue> {
    Ok(install(Markers::default())?)
}

/// Bind every upload region using markers parsed from `config` (JSON).
/// Omitted fields keep their defaults.
///
/// # Errors
///
/// Fails on invalid configuration, when there is no document, or when
/// called a second time.
#[wasm_bindgen(js_name = initUploadAreasWith)]
pub fn init_upload_areas_with(config: &str) -> Result<usize, JsValue> {
    let markers = Markers::from_json(config).map_err(UploadError::from)?;
    Ok(install(markers)?)
}

/// Format a byte count for display, e.g. `formatBytes(1536)` → `"1.5 KB"`.
#[wasm_bindgen(js_name = formatBytes)]
#[must_use]
pub fn format_bytes_js(bytes: f64, decimals: Option<i32>) -> String {
    size::format_bytes(size::size_from_f64(bytes), decimals.unwrap_or(DEFAULT_DECIMALS))
}

fn install(markers: Markers) -> Result<usize, UploadError> {
    if BOUND.with(|bound| bound.borrow().is_some()) {
        return Err(UploadError::AlreadyInitialized);
    }
    let document = web_sys::window().and_then(|window| window.document()).ok_or(UploadError::NoDocument)?;
    let regions = area::discover(&document, &markers)?;
    let areas = area::initialize(regions, markers);
    let count = areas.len();
    BOUND.with(|bound| *bound.borrow_mut() = Some(areas));
    Ok(count)
}
