//! Test host for the reveal engine.
//!
//! Applies engine commands to fake elements and runs deferred child reveals
//! on a virtual clock, standing in for the DOM and browser timers.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};

use folio_core::reveal::{RevealCommand, RevealStyle};

#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    pub style: BTreeMap<&'static str, String>,
    pub children: Vec<BTreeMap<&'static str, String>>,
    pub observed: bool,
    pub src_loaded: bool,
}

impl FakeElement {
    pub fn with_children(count: usize) -> Self {
        Self {
            children: vec![BTreeMap::new(); count],
            ..Self::default()
        }
    }

    pub fn opacity(&self) -> Option<&str> {
        self.style.get("opacity").map(String::as_str)
    }

    pub fn child_opacity(&self, child: usize) -> Option<&str> {
        self.children[child].get("opacity").map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    due: u32,
    target: u32,
    child: usize,
}

/// Fake document with a virtual millisecond clock.
#[derive(Debug, Default)]
pub struct FakePage {
    pub elements: HashMap<u32, FakeElement>,
    pub style: RevealStyle,
    now: u32,
    timers: Vec<Timer>,
    /// Virtual time at which each `(element, child)` reached its shown state.
    pub child_shown_at: HashMap<(u32, usize), u32>,
    /// Number of shown-state writes per element.
    pub show_writes: HashMap<u32, usize>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: u32, element: FakeElement) {
        self.elements.insert(key, element);
    }

    pub fn now(&self) -> u32 {
        self.now
    }

    pub fn element(&self, key: u32) -> &FakeElement {
        &self.elements[&key]
    }

    pub fn apply(&mut self, commands: Vec<RevealCommand<u32>>) {
        for command in commands {
            match command {
                RevealCommand::Hide { target } => {
                    let decls = self.style.hidden();
                    if let Some(el) = self.elements.get_mut(&target) {
                        el.style.extend(decls);
                    }
                }
                RevealCommand::HideChild { target, child } => {
                    let decls = self.style.hidden_child();
                    if let Some(child) = self
                        .elements
                        .get_mut(&target)
                        .and_then(|el| el.children.get_mut(child))
                    {
                        child.extend(decls);
                    }
                }
                RevealCommand::Observe { target, .. } => {
                    if let Some(el) = self.elements.get_mut(&target) {
                        el.observed = true;
                    }
                }
                RevealCommand::Show {
                    target,
                    transition_delay_ms,
                } => {
                    let decls = self.style.shown_after(transition_delay_ms);
                    if let Some(el) = self.elements.get_mut(&target) {
                        el.style.extend(decls);
                        *self.show_writes.entry(target).or_default() += 1;
                    }
                }
                RevealCommand::ShowChild {
                    target,
                    child,
                    after_ms,
                } => self.timers.push(Timer {
                    due: self.now + after_ms,
                    target,
                    child,
                }),
                RevealCommand::LoadSource { target } => {
                    if let Some(el) = self.elements.get_mut(&target) {
                        el.src_loaded = true;
                    }
                }
                RevealCommand::Unobserve { target, .. } => {
                    if let Some(el) = self.elements.get_mut(&target) {
                        el.observed = false;
                    }
                }
            }
        }
        // Zero-delay timers still run on a later tick, like setTimeout(0).
    }

    /// Move the clock forward, firing due timers in due-time order.
    pub fn advance(&mut self, ms: u32) {
        let until = self.now + ms;
        self.timers.sort_by_key(|t| t.due);
        while let Some(timer) = self.timers.first().copied() {
            if timer.due > until {
                break;
            }
            self.timers.remove(0);
            self.now = timer.due;

            let decls = self.style.shown();
            // The element may have been removed meanwhile; that is a no-op.
            if let Some(child) = self
                .elements
                .get_mut(&timer.target)
                .and_then(|el| el.children.get_mut(timer.child))
            {
                child.extend(decls);
                self.child_shown_at
                    .entry((timer.target, timer.child))
                    .or_insert(self.now);
            }
        }
        self.now = until;
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
