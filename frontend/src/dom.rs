use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use crate::motion::scroll::{ScrollMetrics, SectionBounds};
use crate::search::index::DocumentProbe;

/// Answers anchor lookups against the live document.
pub struct DomProbe;

impl DocumentProbe for DomProbe {
    fn has_anchor(&self, id: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .is_some()
    }
}

/// Smoothly scrolls the element with `id` into view. Returns `false` when
/// there is no such element.
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn scroll_metrics(window: &Window) -> ScrollMetrics {
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);
    ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        document_height,
        viewport_height: window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0),
    }
}

/// Page-relative bounds of the element with `id`.
pub fn section_bounds(window: &Window, id: &str) -> Option<SectionBounds> {
    let element = window.document()?.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some(SectionBounds {
        top: rect.top() + window.scroll_y().unwrap_or(0.0),
        height: rect.height(),
    })
}

/// Anchor part of the current URL, without the `#`.
pub fn current_hash() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    let id = hash.trim_start_matches('#');
    (!id.is_empty()).then(|| id.to_string())
}
