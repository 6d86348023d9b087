//! Folio Core Library
//!
//! Client-side behavior of a personal portfolio site, modeled as plain Rust
//! state so it can be tested without a browser.
//!
//! ## Overview
//!
//! The centerpiece is the [`reveal`] engine: page elements start hidden and
//! fade into place exactly once, the first time they scroll into view.
//! Everything else is small page glue (menu, scroll-derived state, toasts,
//! typing effect, easter egg, CV download) that the web front end binds to
//! the DOM.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::reveal::{Intersection, RevealEngine, RevealOptions, RevealTarget, Stagger};
//!
//! let mut engine = RevealEngine::new();
//! let options = RevealOptions::default().with_stagger(Stagger::Children(100));
//!
//! // Hide the skill category and start observing it.
//! let setup = engine.register([RevealTarget::new(1u32).with_children(3)], options);
//! assert!(!setup.is_empty());
//!
//! // The category scrolls into view: show it, cascade its badges, unobserve.
//! let reveal = engine.handle([Intersection::entering(1)]);
//! assert_eq!(reveal.len(), 5);
//!
//! // Scrolling back and forth changes nothing.
//! assert!(engine.handle([Intersection::entering(1)]).is_empty());
//! ```

pub mod config;
pub mod contact;
pub mod cv;
pub mod error;
pub mod hover;
pub mod konami;
pub mod listeners;
pub mod loader;
pub mod logging;
pub mod menu;
pub mod profile;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod toast;
pub mod trail;
pub mod typing;

// Re-exports
pub use config::SiteConfig;
pub use contact::{ContactField, ContactForm};
pub use cv::CvDocument;
pub use error::{FolioError, FolioResult};
pub use konami::{Celebration, KonamiDetector};
pub use listeners::{Binding, EventKind, Handler, ListenTarget, ListenerPlan};
pub use loader::LoaderPhase;
pub use menu::MenuState;
pub use profile::Profile;
pub use reveal::{
    GroupId, Intersection, RevealCommand, RevealEngine, RevealOptions, RevealState, RevealTarget,
};
pub use scroll::{ScrollMetrics, ScrollSnapshot};
pub use toast::{Toast, ToastKind, ToastPhase, ToastSchedule, ToastStack};
pub use trail::CursorTrail;
