//! Experience timeline. Items reveal one after another as they enter.

use dioxus::prelude::*;
use folio_core::profile::TimelineEntry;

use crate::context::use_site;

#[component]
fn TimelineItem(entry: TimelineEntry) -> Element {
    rsx! {
        div { class: "timeline-item",
            div { class: "timeline-dot" }
            div { class: "timeline-content",
                span { class: "timeline-period", "{entry.period}" }
                h3 { "{entry.title}" }
                if let Some(place) = &entry.place {
                    p { class: "timeline-place", "{place}" }
                }
                if !entry.highlights.is_empty() {
                    ul {
                        for highlight in entry.highlights.iter() {
                            li { key: "{highlight}", "{highlight}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Timeline() -> Element {
    let profile = use_site().profile;

    rsx! {
        section { id: "experience",
            h2 { class: "section-title", "Pengalaman" }
            div { class: "timeline",
                for entry in profile.experience.iter() {
                    TimelineItem { key: "{entry.period}-{entry.title}", entry: entry.clone() }
                }
            }
        }
    }
}
