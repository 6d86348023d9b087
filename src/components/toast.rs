//! Toast host: renders every toast on the stack.

use dioxus::prelude::*;

use crate::context::use_toaster;

#[component]
pub fn ToastHost() -> Element {
    let stack = use_toaster().stack();

    rsx! {
        div { class: "notification-stack",
            for toast in stack.read().iter() {
                div { key: "{toast.id}", class: "{toast.class()}",
                    div { class: "notification-content",
                        i { class: "fas fa-{toast.kind.icon()}" }
                        span { "{toast.message}" }
                    }
                }
            }
        }
    }
}
