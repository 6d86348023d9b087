//! Projects section.
//!
//! Hovering a card pulses its technology badges one after another; the
//! listener is attached by the page behaviors through `.project-card`.

use dioxus::prelude::*;

use crate::context::use_site;

#[component]
pub fn Projects() -> Element {
    let profile = use_site().profile;

    rsx! {
        section { id: "projects",
            h2 { class: "section-title", "Proyek" }
            div { class: "projects-grid",
                for project in profile.projects.iter() {
                    div { key: "{project.name}", class: "project-card",
                        h3 { "{project.name}" }
                        p { "{project.description}" }
                        div { class: "tech-stack",
                            for tech in project.technologies.iter() {
                                span { key: "{tech}", class: "tech-badge", "{tech}" }
                            }
                        }
                        a {
                            class: "project-link",
                            href: "{project.url()}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            i { class: "fab fa-github" }
                            " Lihat Kode"
                        }
                    }
                }
            }
        }
    }
}
