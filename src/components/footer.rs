use dioxus::prelude::*;

use crate::context::use_site;

#[component]
pub fn Footer() -> Element {
    let profile = use_site().profile;

    rsx! {
        footer {
            p { "© {profile.copyright_year} {profile.name}. {profile.motto}." }
        }
    }
}
