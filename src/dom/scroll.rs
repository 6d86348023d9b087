//! Scroll measurement and smooth in-page navigation.

use folio_core::scroll::{anchor_id, scroll_destination, SectionOffset};
use folio_core::ScrollMetrics;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use super::{document, select_all};

/// Measure the page for [`folio_core::ScrollSnapshot::compute`].
pub fn measure() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;

    let sections = select_all("section")
        .into_iter()
        .filter(|section| !section.id().is_empty())
        .map(|section| SectionOffset {
            id: section.id(),
            top: section.offset_top() as f64,
        })
        .collect();

    Some(ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or_default(),
        document_height: root.scroll_height() as f64,
        viewport_height: root.client_height() as f64,
        sections,
    })
}

/// Smoothly scroll to the section an `#anchor` link points at, leaving
/// room for the fixed header. Returns false when there is no such section.
pub fn scroll_to_anchor(href: &str, header_offset: f64) -> bool {
    let Some(id) = anchor_id(href) else {
        return false;
    };
    let Some(section) = document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        tracing::debug!(href, "anchor target not found");
        return false;
    };

    smooth_scroll_to(scroll_destination(section.offset_top() as f64, header_offset));
    true
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
