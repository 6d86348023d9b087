//! Explicit listener registrations.
//!
//! Every global or per-element listener the page installs is one
//! [`Binding`] in a [`ListenerPlan`]. The host walks the plan once at
//! startup and keeps the resulting listeners together, so tearing the page
//! behaviors down is a single drop. The plan rejects duplicates: one
//! `(target, event, handler)` triple is installed at most once.

use std::fmt;

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenTarget {
    Window,
    Document,
    /// Every element matching the selector at install time.
    Selector(&'static str),
}

impl fmt::Display for ListenTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListenTarget::Window => write!(f, "window"),
            ListenTarget::Document => write!(f, "document"),
            ListenTarget::Selector(selector) => write!(f, "{}", selector),
        }
    }
}

/// DOM event types the page listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    Load,
    KeyDown,
    Click,
    MouseEnter,
    MouseLeave,
    MouseMove,
}

impl EventKind {
    /// DOM event type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Scroll => "scroll",
            EventKind::Load => "load",
            EventKind::KeyDown => "keydown",
            EventKind::Click => "click",
            EventKind::MouseEnter => "mouseenter",
            EventKind::MouseLeave => "mouseleave",
            EventKind::MouseMove => "mousemove",
        }
    }

    /// Scroll and pointer-move listeners never call `preventDefault`.
    pub fn is_passive(&self) -> bool {
        matches!(self, EventKind::Scroll | EventKind::MouseMove)
    }
}

/// Behavior dispatched when a bound event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    /// Recompute the scroll snapshot (nav, active link, progress, parallax, back-to-top).
    PageScroll,
    /// Release the loading screen.
    PageLoaded,
    /// Feed the secret-code matcher.
    SecretCode,
    CursorTrail,
    Ripple,
    BadgePulse,
    BadgeRest,
    SkillLift,
    SkillRest,
}

/// One `(target, event, handler)` registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding {
    pub target: ListenTarget,
    pub event: EventKind,
    pub handler: Handler,
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<14} {:<11} {:?}",
            self.target.to_string(),
            self.event.as_str(),
            self.handler
        )
    }
}

/// Ordered, duplicate-free list of bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListenerPlan {
    bindings: Vec<Binding>,
}

impl ListenerPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding. Returns `false` (and changes nothing) if the exact
    /// binding is already planned.
    pub fn bind(&mut self, target: ListenTarget, event: EventKind, handler: Handler) -> bool {
        let binding = Binding {
            target,
            event,
            handler,
        };
        if self.bindings.contains(&binding) {
            tracing::debug!(%binding, "ignoring duplicate listener binding");
            return false;
        }
        self.bindings.push(binding);
        true
    }

    /// The page's full set of listeners.
    ///
    /// `cursor_trail` drops the pointer-move binding when the trail is
    /// disabled in config.
    pub fn portfolio(cursor_trail: bool) -> Self {
        let mut plan = Self::new();
        plan.bind(ListenTarget::Window, EventKind::Scroll, Handler::PageScroll);
        plan.bind(ListenTarget::Window, EventKind::Load, Handler::PageLoaded);
        plan.bind(ListenTarget::Document, EventKind::KeyDown, Handler::SecretCode);
        if cursor_trail {
            plan.bind(ListenTarget::Document, EventKind::MouseMove, Handler::CursorTrail);
        }
        plan.bind(
            ListenTarget::Selector(".social-item"),
            EventKind::Click,
            Handler::Ripple,
        );
        plan.bind(
            ListenTarget::Selector(".project-card"),
            EventKind::MouseEnter,
            Handler::BadgePulse,
        );
        plan.bind(
            ListenTarget::Selector(".project-card"),
            EventKind::MouseLeave,
            Handler::BadgeRest,
        );
        plan.bind(
            ListenTarget::Selector(".skill-item"),
            EventKind::MouseEnter,
            Handler::SkillLift,
        );
        plan.bind(
            ListenTarget::Selector(".skill-item"),
            EventKind::MouseLeave,
            Handler::SkillRest,
        );
        plan
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings attached to `target`.
    pub fn for_target(&self, target: ListenTarget) -> impl Iterator<Item = &Binding> {
        self.bindings.iter().filter(move |b| b.target == target)
    }
}
