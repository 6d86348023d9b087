use dioxus::prelude::*;

use crate::context::use_page;
use crate::dom::scroll::scroll_to_top;

/// Floating button that fades in once the page is scrolled down.
#[component]
pub fn BackToTop() -> Element {
    let scroll = use_page().scroll;
    let class = if scroll.read().back_to_top_visible { "visible" } else { "" };

    rsx! {
        button {
            id: "back-to-top",
            class: "{class}",
            "aria-label": "Kembali ke atas",
            onclick: move |_| scroll_to_top(),
            i { class: "fas fa-arrow-up" }
        }
    }
}
