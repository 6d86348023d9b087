//! IntersectionObserver binding for the reveal engine.
//!
//! Each reveal group gets one observer. Elements are keyed by a numeric
//! `data-reveal-id` attribute so observer entries map back to engine keys;
//! an element already tagged by an earlier group keeps its key, which the
//! engine then skips as a duplicate.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use folio_core::config::RevealConfig;
use folio_core::reveal::{
    portfolio_groups, GroupId, Intersection, RevealCommand, RevealEngine, RevealOptions,
    RevealStyle, RevealTarget, REVEAL_ID_ATTRIBUTE,
};
use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::{apply_styles, select_all, select_within};

const DEFERRED_SOURCE_ATTRIBUTE: &str = "data-src";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct RevealHost {
    engine: RevealEngine<u32>,
    style: RevealStyle,
    elements: HashMap<u32, HtmlElement>,
    children: HashMap<u32, Vec<HtmlElement>>,
    observers: HashMap<GroupId, IntersectionObserver>,
}

impl RevealHost {
    fn new(style: RevealStyle) -> Self {
        Self {
            engine: RevealEngine::new(),
            style,
            elements: HashMap::new(),
            children: HashMap::new(),
            observers: HashMap::new(),
        }
    }

    fn child(&self, target: u32, child: usize) -> Option<&HtmlElement> {
        self.children.get(&target)?.get(child)
    }

    fn apply(&self, commands: Vec<RevealCommand<u32>>) {
        for command in commands {
            match command {
                RevealCommand::Hide { target } => {
                    if let Some(element) = self.elements.get(&target) {
                        apply_styles(element, &self.style.hidden());
                    }
                }
                RevealCommand::HideChild { target, child } => {
                    if let Some(element) = self.child(target, child) {
                        apply_styles(element, &self.style.hidden_child());
                    }
                }
                RevealCommand::Observe { target, group } => {
                    if let (Some(element), Some(observer)) =
                        (self.elements.get(&target), self.observers.get(&group))
                    {
                        observer.observe(element);
                    }
                }
                RevealCommand::Show {
                    target,
                    transition_delay_ms,
                } => {
                    if let Some(element) = self.elements.get(&target) {
                        apply_styles(element, &self.style.shown_after(transition_delay_ms));
                    }
                }
                RevealCommand::ShowChild {
                    target,
                    child,
                    after_ms,
                } => {
                    let Some(element) = self.child(target, child).cloned() else {
                        continue;
                    };
                    let shown = self.style.shown();
                    Timeout::new(after_ms, move || {
                        // The section may have been removed while waiting.
                        if element.is_connected() {
                            apply_styles(&element, &shown);
                        }
                    })
                    .forget();
                }
                RevealCommand::LoadSource { target } => {
                    if let Some(element) = self.elements.get(&target) {
                        load_deferred_source(element);
                    }
                }
                RevealCommand::Unobserve { target, group } => {
                    if let (Some(element), Some(observer)) =
                        (self.elements.get(&target), self.observers.get(&group))
                    {
                        observer.unobserve(element);
                    }
                }
            }
        }
    }
}

/// Reveal groups wired to live observers.
pub struct RevealBinding {
    host: Rc<RefCell<RevealHost>>,
    _callbacks: Vec<ObserverCallback>,
}

impl RevealBinding {
    /// Register every portfolio reveal group present in the document.
    pub fn install(config: &RevealConfig) -> Self {
        let host = Rc::new(RefCell::new(RevealHost::new(config.style())));
        let mut callbacks = Vec::new();
        let mut next_key = 0u32;

        for planned in portfolio_groups(config) {
            let mut targets = Vec::new();
            {
                let mut host = host.borrow_mut();
                for (index, element) in select_all(planned.selector).into_iter().enumerate() {
                    let key = match reveal_key(&element) {
                        Some(key) => key,
                        None => {
                            let key = next_key;
                            next_key += 1;
                            if let Err(e) = element.set_attribute(REVEAL_ID_ATTRIBUTE, &key.to_string()) {
                                tracing::warn!("cannot tag reveal target: {:?}", e);
                                continue;
                            }
                            key
                        }
                    };

                    let children = planned
                        .child_selector
                        .map(|selector| select_within(&element, selector))
                        .unwrap_or_default();

                    targets.push(
                        RevealTarget::new(key)
                            .with_children(children.len())
                            .with_sibling_index(index),
                    );
                    host.elements.entry(key).or_insert(element);
                    if !children.is_empty() {
                        host.children.entry(key).or_insert(children);
                    }
                }
            }

            if targets.is_empty() {
                tracing::debug!(group = planned.name, selector = planned.selector, "no reveal targets");
                continue;
            }

            let callback = observer_callback(host.clone());
            let observer = match new_observer(&callback, &planned.options) {
                Ok(observer) => observer,
                Err(e) => {
                    tracing::warn!(group = planned.name, "IntersectionObserver unavailable: {:?}", e);
                    continue;
                }
            };

            let count = targets.len();
            let commands = host.borrow_mut().engine.register(targets, planned.options);
            let Some(group) = commands.iter().find_map(|command| match command {
                RevealCommand::Observe { group, .. } => Some(*group),
                _ => None,
            }) else {
                continue;
            };

            host.borrow_mut().observers.insert(group, observer);
            host.borrow().apply(commands);
            callbacks.push(callback);
            tracing::debug!(group = planned.name, count, "reveal group observed");
        }

        tracing::info!(pending = host.borrow().engine.pending(), "reveal engine installed");

        Self {
            host,
            _callbacks: callbacks,
        }
    }
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        for observer in self.host.borrow().observers.values() {
            observer.disconnect();
        }
        tracing::debug!("reveal observers disconnected");
    }
}

fn reveal_key(element: &Element) -> Option<u32> {
    element.get_attribute(REVEAL_ID_ATTRIBUTE)?.parse().ok()
}

fn observer_callback(host: Rc<RefCell<RevealHost>>) -> ObserverCallback {
    Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        let batch: Vec<Intersection<u32>> = entries
            .iter()
            .filter_map(|entry| {
                let entry = entry.dyn_into::<IntersectionObserverEntry>().ok()?;
                let key = reveal_key(&entry.target())?;
                Some(if entry.is_intersecting() {
                    Intersection::entering(key)
                } else {
                    Intersection::leaving(key)
                })
            })
            .collect();

        let commands = host.borrow_mut().engine.handle(batch);
        host.borrow().apply(commands);
    })
}

fn new_observer(
    callback: &ObserverCallback,
    options: &RevealOptions,
) -> Result<IntersectionObserver, JsValue> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin.to_string());
    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
}

fn load_deferred_source(element: &HtmlElement) {
    let Some(source) = element.get_attribute(DEFERRED_SOURCE_ATTRIBUTE) else {
        return;
    };
    match element.dyn_ref::<HtmlImageElement>() {
        Some(image) => image.set_src(&source),
        None => {
            if let Err(e) = element.set_attribute("src", &source) {
                tracing::warn!("cannot set deferred source: {:?}", e);
            }
        }
    }
    if let Err(e) = element.remove_attribute(DEFERRED_SOURCE_ATTRIBUTE) {
        tracing::debug!("cannot clear data-src: {:?}", e);
    }
}
