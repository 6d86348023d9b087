//! Skills section. Each category cascades its badges in when revealed.

use dioxus::prelude::*;

use crate::context::use_site;

#[component]
pub fn Skills() -> Element {
    let profile = use_site().profile;

    rsx! {
        section { id: "skills",
            h2 { class: "section-title", "Keahlian" }
            div { class: "skills-grid",
                for category in profile.skills.iter() {
                    div { key: "{category.category}", class: "skill-category",
                        h3 { "{category.category}" }
                        div { class: "skill-items",
                            for item in category.items.iter() {
                                span { key: "{item}", class: "skill-item", "{item}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
