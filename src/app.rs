use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{Celebration, LoaderPhase, MenuState, ScrollSnapshot, ToastSchedule, ToastStack};

use crate::components::{
    About, BackToTop, Certifications, Contact, Footer, Hero, LoadingScreen, NavBar, Projects,
    ScrollIndicator, Skills, Timeline, ToastHost,
};
use crate::context::{PageSignals, Site, Toaster};
use crate::dom::PageBehaviors;
use crate::theme::GLOBAL_STYLES;

const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
const POPPINS: &str = "https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600;700&display=swap";

/// Root application component.
///
/// Loads the embedded site data, provides global styles and renders the
/// portfolio, or a short error if the profile cannot be read.
#[component]
pub fn App() -> Element {
    let site = use_hook(|| {
        Site::load().map_err(|e| {
            tracing::error!("Failed to load profile: {}", e);
            e.to_string()
        })
    });

    let body = match site {
        Ok(site) => rsx! { Portfolio { site } },
        Err(e) => rsx! {
            div { class: "boot-error", "Profil tidak dapat dimuat: {e}" }
        },
    };

    rsx! {
        document::Stylesheet { href: FONT_AWESOME }
        document::Stylesheet { href: POPPINS }
        style { {GLOBAL_STYLES} }
        {body}
    }
}

/// The portfolio page.
///
/// Provides the site and page contexts, then installs the DOM behaviors
/// once the sections are mounted. They are removed again when the page
/// unmounts.
#[component]
fn Portfolio(site: Site) -> Element {
    use_hook(|| tracing::info!("{}", site.profile.developer_greeting()));

    let scroll = use_signal(ScrollSnapshot::default);
    let menu = use_signal(MenuState::default);
    let loader = use_signal(LoaderPhase::default);
    let loaded = use_signal(|| false);
    let celebration = use_signal(Celebration::default);
    let toasts = use_signal(ToastStack::new);

    let config = site.config.clone();
    use_context_provider(|| site);
    let page = use_context_provider(|| PageSignals {
        scroll,
        menu,
        loader,
        loaded,
        celebration,
    });
    let toaster =
        use_context_provider(|| Toaster::new(toasts, ToastSchedule::from(&config.toast)));

    // Observers and listeners target rendered elements, so install after mount
    let behaviors: Rc<RefCell<Option<PageBehaviors>>> = use_hook(|| Rc::new(RefCell::new(None)));
    {
        let behaviors = behaviors.clone();
        use_effect(move || {
            if behaviors.borrow().is_some() {
                return;
            }
            let installed = PageBehaviors::install(config.clone(), page, toaster);
            *behaviors.borrow_mut() = Some(installed);
        });
    }
    use_drop(move || {
        behaviors.borrow_mut().take();
    });

    rsx! {
        LoadingScreen {}
        ScrollIndicator {}
        NavBar {}
        main {
            Hero {}
            About {}
            Skills {}
            Timeline {}
            Projects {}
            Certifications {}
            Contact {}
        }
        Footer {}
        BackToTop {}
        ToastHost {}
    }
}
