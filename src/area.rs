//! DOM binding for upload regions.
//!
//! `UploadArea` owns one region's elements (the region itself, its file input,
//! and its card), the shared [`RegionCore`], and the listener closures. Each
//! listener feeds the core and applies the returned [`Action`]s to the DOM.
//! Binding happens once per region in [`initialize`]; listeners are never
//! re-attached.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, DragEvent, Element, Event, FileList, HtmlElement, HtmlInputElement, Node, NodeList,
    SvgElement,
};

use crate::error::UploadError;
use crate::markers::Markers;
use crate::preview::{PreviewFragment, SelectedFile};
use crate::region::{Action, DragPhase, RegionCore};
use crate::size::size_from_f64;

type Listener = Closure<dyn FnMut(Event)>;

/// Elements a region's actions are applied to.
struct Targets {
    area: Element,
    input: HtmlInputElement,
    card: Element,
    markers: Rc<Markers>,
}

/// A bound upload region. Dropping it drops its listeners.
pub struct UploadArea {
    targets: Rc<Targets>,
    core: Rc<RefCell<RegionCore>>,
    _listeners: Vec<Listener>,
}

impl UploadArea {
    /// Locate the region's input and card and attach its listeners.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::MissingInput`] or [`UploadError::MissingCard`]
    /// when the markup lacks either, and [`UploadError::Dom`] when a DOM call
    /// throws.
    pub fn bind(area: Element, markers: Rc<Markers>) -> Result<Self, UploadError> {
        let input = area
            .query_selector(&markers.input)?
            .ok_or(UploadError::MissingInput)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| UploadError::MissingInput)?;
        let card = area.closest(&markers.card_selector())?.ok_or(UploadError::MissingCard)?;

        let targets = Rc::new(Targets { area, input, card, markers });
        let core = Rc::new(RefCell::new(RegionCore::new()));
        let mut listeners = Vec::with_capacity(1 + DragPhase::ALL.len());

        let on_change = {
            let targets = Rc::clone(&targets);
            let core = Rc::clone(&core);
            Listener::new(move |_event: Event| {
                let files = targets.input.files().map(|list| selected_files(&list)).unwrap_or_default();
                let actions = core.borrow_mut().on_change(&files);
                targets.dispatch(None, actions, None);
            })
        };
        targets
            .input
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        listeners.push(on_change);

        for phase in DragPhase::ALL {
            let on_drag = {
                let targets = Rc::clone(&targets);
                let core = Rc::clone(&core);
                Listener::new(move |event: Event| {
                    if phase == DragPhase::Drop {
                        let dropped = event
                            .dyn_ref::<DragEvent>()
                            .and_then(DragEvent::data_transfer)
                            .and_then(|transfer| transfer.files());
                        let files = dropped.as_ref().map(selected_files).unwrap_or_default();
                        let actions = core.borrow_mut().on_drop(&files);
                        targets.dispatch(Some(&event), actions, dropped.as_ref());
                    } else {
                        let actions = core.borrow_mut().on_drag(phase);
                        targets.dispatch(Some(&event), actions, None);
                    }
                })
            };
            targets
                .area
                .add_event_listener_with_callback(phase.event_name(), on_drag.as_ref().unchecked_ref())?;
            listeners.push(on_drag);
        }

        Ok(Self { targets, core, _listeners: listeners })
    }

    /// The region element.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.targets.area
    }

    /// The preview currently shown, if any.
    #[must_use]
    pub fn preview(&self) -> Option<PreviewFragment> {
        self.core.borrow().preview().cloned()
    }
}

impl Targets {
    /// Apply actions in order, logging failures instead of aborting the handler.
    fn dispatch(&self, event: Option<&Event>, actions: Vec<Action>, dropped: Option<&FileList>) {
        for action in actions {
            if let Err(err) = self.apply(event, &action, dropped) {
                log::error!("upload area: {action:?} failed: {err}");
            }
        }
    }

    fn apply(&self, event: Option<&Event>, action: &Action, dropped: Option<&FileList>) -> Result<(), UploadError> {
        let markers = &self.markers;
        match action {
            Action::SuppressDefault => {
                if let Some(event) = event {
                    event.prevent_default();
                    event.stop_propagation();
                }
            }
            Action::Highlight => {
                self.area.class_list().add_1(&markers.highlight)?;
                self.card.class_list().add_1(&markers.drag_active)?;
            }
            Action::Unhighlight => {
                self.area.class_list().remove_1(&markers.highlight)?;
                self.card.class_list().remove_1(&markers.drag_active)?;
            }
            Action::SyncInput => self.input.set_files(dropped),
            Action::RemovePreview => {
                let existing = self.area.query_selector_all(&markers.preview_selector())?;
                for node in nodes(&existing) {
                    if let Some(element) = node.dyn_ref::<Element>() {
                        element.remove();
                    }
                }
            }
            Action::HidePlaceholders => {
                if let Some(selector) = markers.placeholder_selector() {
                    let placeholders = self.area.query_selector_all(&selector)?;
                    for node in nodes(&placeholders) {
                        hide(&node)?;
                    }
                }
            }
            Action::InsertPreview(fragment) => {
                log::debug!("previewing {} ({})", fragment.name, fragment.size_label);
                self.area.insert_adjacent_html("beforeend", &fragment.to_html(&markers.preview))?;
            }
            Action::MarkUploaded => self.card.class_list().add_1(&markers.uploaded)?,
        }
        Ok(())
    }
}

/// Find every upload region in `document`.
///
/// # Errors
///
/// Returns [`UploadError::Dom`] if the area selector is rejected.
pub fn discover(document: &Document, markers: &Markers) -> Result<Vec<Element>, UploadError> {
    let found = document.query_selector_all(&markers.area_selector())?;
    Ok(nodes(&found).iter().filter_map(|node| node.dyn_ref::<Element>().cloned()).collect())
}

/// Bind every region. Regions with incomplete markup are skipped with a warning.
#[must_use]
pub fn initialize(regions: Vec<Element>, markers: Markers) -> Vec<UploadArea> {
    let markers = Rc::new(markers);
    let total = regions.len();
    let mut bound = Vec::with_capacity(total);
    for (index, region) in regions.into_iter().enumerate() {
        match UploadArea::bind(region, Rc::clone(&markers)) {
            Ok(area) => bound.push(area),
            Err(err) => log::warn!("skipping upload region {index}: {err}"),
        }
    }
    log::info!("bound {} of {total} upload regions", bound.len());
    bound
}

/// Descriptors for every file in a browser file list.
fn selected_files(list: &FileList) -> Vec<SelectedFile> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .map(|file| SelectedFile::new(file.name(), size_from_f64(file.size())))
        .collect()
}

fn nodes(list: &NodeList) -> Vec<Node> {
    (0..list.length()).filter_map(|index| list.item(index)).collect()
}

/// Hide an element without removing it. SVG icons are not `HtmlElement`s.
fn hide(node: &Node) -> Result<(), UploadError> {
    if let Some(element) = node.dyn_ref::<HtmlElement>() {
        element.style().set_property("display", "none")?;
    } else if let Some(element) = node.dyn_ref::<SvgElement>() {
        element.style().set_property("display", "none")?;
    }
    Ok(())
}
