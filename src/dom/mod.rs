//! Browser bindings for the folio-core behavior models.
//!
//! Everything here tolerates missing elements: a selector that matches
//! nothing leaves its feature inert and logs at debug level.

mod download;
mod listeners;
mod reveal;
pub mod scroll;

use std::rc::Rc;

use folio_core::reveal::StyleDecl;
use folio_core::{Handler, ListenerPlan, SiteConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList};

use crate::context::{PageSignals, Toaster};

pub use download::download_text;
pub use listeners::{ListenerSet, PageHandlers};
pub use reveal::RevealBinding;

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// All elements in the document matching `selector`.
pub fn select_all(selector: &str) -> Vec<HtmlElement> {
    let Some(document) = document() else {
        return Vec::new();
    };
    match document.query_selector_all(selector) {
        Ok(list) => html_elements(&list),
        Err(e) => {
            tracing::warn!(selector, "query failed: {:?}", e);
            Vec::new()
        }
    }
}

/// Descendants of `root` matching `selector`.
pub fn select_within(root: &Element, selector: &str) -> Vec<HtmlElement> {
    match root.query_selector_all(selector) {
        Ok(list) => html_elements(&list),
        Err(e) => {
            tracing::warn!(selector, "query failed: {:?}", e);
            Vec::new()
        }
    }
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn create_element(tag: &str) -> Option<HtmlElement> {
    document()?
        .create_element(tag)
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Append to `<body>`; false when there is no body.
pub fn append_to_body(element: &HtmlElement) -> bool {
    match document().and_then(|d| d.body()) {
        Some(body) => body.append_child(element).is_ok(),
        None => false,
    }
}

/// Write inline style declarations.
pub fn apply_styles(element: &HtmlElement, decls: &[StyleDecl]) {
    let style = element.style();
    for (property, value) in decls {
        if let Err(e) = style.set_property(property, value) {
            tracing::warn!(property, "style write failed: {:?}", e);
        }
    }
}

/// Reveal observers and page listeners, installed once after the first
/// render. Dropping it disconnects the observers and removes every
/// listener.
pub struct PageBehaviors {
    _reveal: RevealBinding,
    _listeners: ListenerSet,
}

impl PageBehaviors {
    pub fn install(config: Rc<SiteConfig>, page: PageSignals, toaster: Toaster) -> Self {
        let reveal = RevealBinding::install(&config.reveal);

        let plan = ListenerPlan::portfolio(config.trail.enabled);
        let handlers = Rc::new(PageHandlers::new(config, page, toaster));
        let listeners = ListenerSet::install(&plan, handlers.clone());

        // Page state before the first scroll event.
        handlers.dispatch(Handler::PageScroll, None, None);

        // The app may mount after `load` already fired.
        if document().is_some_and(|d| d.ready_state() == "complete") {
            handlers.dispatch(Handler::PageLoaded, None, None);
        }

        Self {
            _reveal: reveal,
            _listeners: listeners,
        }
    }
}
