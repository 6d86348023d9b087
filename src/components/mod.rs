//! Page sections and overlays of the portfolio.
//!
//! Components only render; the scroll, hover and reveal effects are
//! attached afterwards by [`crate::dom::PageBehaviors`] through the class
//! names used here.

mod about;
mod anchor;
mod back_to_top;
mod certifications;
mod contact;
mod footer;
mod hero;
mod loader;
mod nav;
mod projects;
mod scroll_indicator;
mod skills;
mod timeline;
mod toast;

pub use about::About;
pub use anchor::AnchorLink;
pub use back_to_top::BackToTop;
pub use certifications::Certifications;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use loader::LoadingScreen;
pub use nav::NavBar;
pub use projects::Projects;
pub use scroll_indicator::ScrollIndicator;
pub use skills::Skills;
pub use timeline::Timeline;
pub use toast::ToastHost;
