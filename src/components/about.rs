//! About section: summary, education and motto.

use dioxus::prelude::*;

use crate::context::use_site;

#[component]
pub fn About() -> Element {
    let profile = use_site().profile;

    rsx! {
        section { id: "about",
            h2 { class: "section-title", "Tentang Saya" }
            div { class: "about-grid",
                div { class: "glass-card",
                    p { "{profile.summary}" }
                    p { class: "motto", "\"{profile.motto}\"" }
                }
                div { class: "glass-card",
                    h3 { "Pendidikan" }
                    for entry in profile.education.iter() {
                        div { key: "{entry.period}-{entry.title}",
                            p { class: "timeline-period", "{entry.period}" }
                            p { "{entry.title}" }
                            if let Some(place) = &entry.place {
                                p { class: "timeline-place", "{place}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
