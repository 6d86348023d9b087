use dioxus::prelude::*;

use crate::context::use_site;

#[component]
pub fn Certifications() -> Element {
    let profile = use_site().profile;

    if profile.certifications.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { id: "certifications",
            h2 { class: "section-title", "Sertifikasi" }
            for cert in profile.certifications.iter() {
                div { key: "{cert.name}", class: "glass-card",
                    p { class: "cert-date", "{cert.date}" }
                    h3 { "{cert.name}" }
                    p { class: "cert-issuer", "{cert.issuer}" }
                    p { "{cert.description}" }
                }
            }
        }
    }
}
