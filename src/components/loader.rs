//! Full-screen loading overlay.

use dioxus::prelude::*;
use gloo::timers::future::TimeoutFuture;

use crate::context::{use_page, use_site};

/// Spinner shown until the page has loaded, then faded out and removed.
#[component]
pub fn LoadingScreen() -> Element {
    let config = use_site().config.loader.clone();
    let page = use_page();
    let mut phase = page.loader;
    let loaded = page.loaded;

    use_effect(move || {
        if !loaded() {
            return;
        }
        let config = config.clone();
        spawn(async move {
            loop {
                let step = phase.peek().next(&config);
                let Some((next, delay)) = step else {
                    break;
                };
                TimeoutFuture::new(delay).await;
                phase.set(next);
            }
            tracing::debug!("loading screen removed");
        });
    });

    let current = phase();
    rsx! {
        if current.is_mounted() {
            div { class: current.class(),
                div { class: "loading-spinner" }
            }
        }
    }
}
