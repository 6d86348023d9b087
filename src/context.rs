//! Shared page state for Folio components.
//!
//! Static data (site configuration and profile) lives in [`Site`]; state the
//! page behaviors mutate lives in signals grouped in [`PageSignals`]. Both
//! are provided once by the root component.
//!
//! ## Usage
//!
//! ```ignore
//! // In any child component
//! let site = use_site();
//! let page = use_page();
//! let active = page.scroll.read().is_active_link("#about");
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::toast::{ToastKind, ToastPhase, ToastSchedule, ToastStack};
use folio_core::{Celebration, FolioResult, LoaderPhase, MenuState, Profile, ScrollSnapshot, SiteConfig};
use gloo::timers::callback::Timeout;

/// Site configuration embedded at build time.
const SITE_CONFIG_JSON: &str = include_str!("../assets/site.json");

/// Configuration and profile, shared read-only by every component.
#[derive(Clone)]
pub struct Site {
    pub config: Rc<SiteConfig>,
    pub profile: Rc<Profile>,
}

impl PartialEq for Site {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config) && Rc::ptr_eq(&self.profile, &other.profile)
    }
}

impl Site {
    /// Load the embedded configuration and profile.
    ///
    /// An invalid configuration falls back to defaults; only a broken
    /// profile is an error, since there is nothing to render without it.
    pub fn load() -> FolioResult<Self> {
        let config = match SiteConfig::from_json_str(SITE_CONFIG_JSON) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid site config, using defaults: {}", e);
                SiteConfig::default()
            }
        };
        let profile = Profile::builtin()?;

        Ok(Self {
            config: Rc::new(config),
            profile: Rc::new(profile),
        })
    }
}

/// Signals driven by page behaviors.
#[derive(Clone, Copy)]
pub struct PageSignals {
    /// Everything derived from the scroll offset.
    pub scroll: Signal<ScrollSnapshot>,
    /// Mobile navigation menu.
    pub menu: Signal<MenuState>,
    /// Loading overlay phase.
    pub loader: Signal<LoaderPhase>,
    /// Set once the window `load` event fired.
    pub loaded: Signal<bool>,
    /// Easter egg effect on the hero.
    pub celebration: Signal<Celebration>,
}

/// Posts toasts and walks them through their phases.
///
/// Phase changes run on plain timers so toasts can be raised from DOM
/// listeners as well as from component handlers.
#[derive(Clone, Copy)]
pub struct Toaster {
    stack: Signal<ToastStack>,
    schedule: ToastSchedule,
}

impl Toaster {
    pub fn new(stack: Signal<ToastStack>, schedule: ToastSchedule) -> Self {
        Self { stack, schedule }
    }

    pub fn stack(&self) -> Signal<ToastStack> {
        self.stack
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let mut stack = self.stack;
        let ToastSchedule {
            enter_ms,
            hold_ms,
            exit_ms,
        } = self.schedule;

        let id = stack.write().push(message, kind);
        tracing::debug!(id, ?kind, "toast posted");

        Timeout::new(enter_ms, move || {
            stack.write().advance(id, ToastPhase::Visible);
            Timeout::new(hold_ms, move || {
                stack.write().advance(id, ToastPhase::Leaving);
                Timeout::new(exit_ms, move || {
                    stack.write().remove(id);
                })
                .forget();
            })
            .forget();
        })
        .forget();
    }
}

/// Hook to access the site configuration and profile.
pub fn use_site() -> Site {
    use_context::<Site>()
}

/// Hook to access the behavior-driven page signals.
pub fn use_page() -> PageSignals {
    use_context::<PageSignals>()
}

/// Hook to post toasts.
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}
