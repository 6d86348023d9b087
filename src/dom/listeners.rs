//! Page-wide event listeners.
//!
//! A [`ListenerPlan`] says what to listen to; [`ListenerSet`] turns it into
//! `gloo` listeners and [`PageHandlers`] reacts to the events.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::{Readable, Writable};
use folio_core::hover::{
    badge_pulse_delays, badge_pulse_transform, skill_lift_transform, BADGE_REST_TRANSFORM,
    SKILL_REST_TRANSFORM,
};
use folio_core::konami::EASTER_EGG_NOTICE;
use folio_core::ripple::{Rect, Ripple, RIPPLE_CLASS};
use folio_core::{
    Binding, CursorTrail, Handler, KonamiDetector, ListenTarget, ListenerPlan, ScrollSnapshot,
    SiteConfig,
};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement, KeyboardEvent, MouseEvent};

use super::{append_to_body, apply_styles, create_element, scroll, select_all, select_within};
use crate::context::{PageSignals, Toaster};

/// Class of cursor trail particles.
const TRAIL_PARTICLE_CLASS: &str = "cursor-particle";

/// Every installed listener; dropping the set removes them all.
pub struct ListenerSet {
    listeners: Vec<EventListener>,
}

impl ListenerSet {
    pub fn install(plan: &ListenerPlan, handlers: Rc<PageHandlers>) -> Self {
        let mut listeners = Vec::new();

        let Some(window) = web_sys::window() else {
            return Self { listeners };
        };
        let Some(document) = window.document() else {
            return Self { listeners };
        };

        for binding in plan.iter() {
            match binding.target {
                ListenTarget::Window => {
                    listeners.push(listen(&window, binding, handlers.clone(), None));
                }
                ListenTarget::Document => {
                    listeners.push(listen(&document, binding, handlers.clone(), None));
                }
                ListenTarget::Selector(selector) => {
                    let elements = select_all(selector);
                    if elements.is_empty() {
                        tracing::debug!(%binding, "no elements, listener skipped");
                    }
                    for element in elements {
                        let target: EventTarget = element.clone().into();
                        listeners.push(listen(&target, binding, handlers.clone(), Some(element)));
                    }
                }
            }
        }

        tracing::info!(bindings = plan.len(), listeners = listeners.len(), "page listeners installed");
        Self { listeners }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        tracing::debug!(listeners = self.len(), "removing page listeners");
    }
}

fn listen(
    target: &EventTarget,
    binding: &Binding,
    handlers: Rc<PageHandlers>,
    element: Option<HtmlElement>,
) -> EventListener {
    let handler = binding.handler;
    let callback = move |event: &Event| handlers.dispatch(handler, Some(event), element.as_ref());

    if binding.event.is_passive() {
        EventListener::new(target, binding.event.as_str(), callback)
    } else {
        EventListener::new_with_options(
            target,
            binding.event.as_str(),
            EventListenerOptions::enable_prevent_default(),
            callback,
        )
    }
}

/// Reactions to page events.
pub struct PageHandlers {
    config: Rc<SiteConfig>,
    page: PageSignals,
    toaster: Toaster,
    konami: RefCell<KonamiDetector>,
    trail: Rc<RefCell<CursorTrail>>,
}

impl PageHandlers {
    pub fn new(config: Rc<SiteConfig>, page: PageSignals, toaster: Toaster) -> Self {
        let trail = CursorTrail::new(config.trail.clone());
        Self {
            config,
            page,
            toaster,
            konami: RefCell::new(KonamiDetector::new()),
            trail: Rc::new(RefCell::new(trail)),
        }
    }

    /// Run `handler`. `element` is the element a selector binding was
    /// attached to.
    pub fn dispatch(&self, handler: Handler, event: Option<&Event>, element: Option<&HtmlElement>) {
        match handler {
            Handler::PageScroll => self.on_scroll(),
            Handler::PageLoaded => self.on_loaded(),
            Handler::SecretCode => {
                if let Some(event) = event.and_then(|e| e.dyn_ref::<KeyboardEvent>()) {
                    self.on_key(&event.key());
                }
            }
            Handler::CursorTrail => {
                if let Some(event) = event.and_then(|e| e.dyn_ref::<MouseEvent>()) {
                    self.on_pointer_move(event.client_x() as f64, event.client_y() as f64);
                }
            }
            Handler::Ripple => {
                let mouse = event.and_then(|e| e.dyn_ref::<MouseEvent>());
                if let (Some(item), Some(event)) = (element, mouse) {
                    self.ripple(item, event);
                }
            }
            Handler::BadgePulse => {
                if let Some(card) = element {
                    self.pulse_badges(card);
                }
            }
            Handler::BadgeRest => {
                if let Some(card) = element {
                    for badge in select_within(card, ".tech-badge") {
                        apply_styles(&badge, &[("transform", BADGE_REST_TRANSFORM.to_string())]);
                    }
                }
            }
            Handler::SkillLift => {
                if let Some(item) = element {
                    let lift = skill_lift_transform(&self.config.hover);
                    apply_styles(item, &[("transform", lift)]);
                }
            }
            Handler::SkillRest => {
                if let Some(item) = element {
                    apply_styles(item, &[("transform", SKILL_REST_TRANSFORM.to_string())]);
                }
            }
        }
    }

    fn on_scroll(&self) {
        let Some(metrics) = scroll::measure() else {
            return;
        };
        let next = ScrollSnapshot::compute(&metrics, &self.config.scroll);
        let mut snapshot = self.page.scroll;
        if *snapshot.peek() != next {
            snapshot.set(next);
        }
    }

    fn on_loaded(&self) {
        let mut loaded = self.page.loaded;
        if !*loaded.peek() {
            tracing::debug!("page loaded");
            loaded.set(true);
        }
    }

    fn on_key(&self, key: &str) {
        if !self.konami.borrow_mut().push_dom_key(key) {
            return;
        }

        let mut celebration = self.page.celebration;
        let generation = celebration.write().trigger();
        tracing::info!(generation, "easter egg found");
        self.toaster.success(EASTER_EGG_NOTICE);

        Timeout::new(self.config.easter_egg.duration_ms, move || {
            celebration.write().reset(generation);
        })
        .forget();
    }

    fn on_pointer_move(&self, x: f64, y: f64) {
        let Some(particle) = self.trail.borrow_mut().on_move(x, y) else {
            return;
        };
        let Some(dot) = create_element("div") else {
            self.trail.borrow_mut().on_expired();
            return;
        };

        dot.set_class_name(TRAIL_PARTICLE_CLASS);
        apply_styles(
            &dot,
            &[
                ("left", format!("{}px", particle.x)),
                ("top", format!("{}px", particle.y)),
            ],
        );
        if !append_to_body(&dot) {
            self.trail.borrow_mut().on_expired();
            return;
        }

        let trail = self.trail.clone();
        Timeout::new(particle.lifetime_ms, move || {
            dot.remove();
            trail.borrow_mut().on_expired();
        })
        .forget();
    }

    fn ripple(&self, item: &HtmlElement, event: &MouseEvent) {
        let bounds = item.get_bounding_client_rect();
        let ripple = Ripple::at(
            Rect {
                left: bounds.left(),
                top: bounds.top(),
                width: bounds.width(),
                height: bounds.height(),
            },
            event.client_x() as f64,
            event.client_y() as f64,
        );

        let Some(circle) = create_element("span") else {
            return;
        };
        circle.set_class_name(RIPPLE_CLASS);
        apply_styles(&circle, &ripple.style());
        apply_styles(item, &[("position", "relative".to_string())]);
        if let Err(e) = item.append_child(&circle) {
            tracing::warn!("cannot attach ripple: {:?}", e);
            return;
        }

        Timeout::new(self.config.ripple.lifetime_ms, move || circle.remove()).forget();
    }

    fn pulse_badges(&self, card: &HtmlElement) {
        let badges = select_within(card, ".tech-badge");
        let pulse = badge_pulse_transform(&self.config.hover);

        for (index, delay) in badge_pulse_delays(badges.len(), &self.config.hover) {
            let Some(badge) = badges.get(index).cloned() else {
                continue;
            };
            let pulse = pulse.clone();
            Timeout::new(delay, move || apply_styles(&badge, &[("transform", pulse)])).forget();
        }
    }
}
