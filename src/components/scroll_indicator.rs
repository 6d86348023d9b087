use dioxus::prelude::*;

use crate::context::use_page;

/// Reading progress bar along the top edge.
#[component]
pub fn ScrollIndicator() -> Element {
    let progress = use_page().scroll.read().progress_percent;

    rsx! {
        div { class: "scroll-indicator",
            div { class: "scroll-progress", style: "width: {progress}%" }
        }
    }
}
