//! Hero Section Component
//!
//! Name, typed role line, CV download and the avatar. The section moves
//! with the parallax offset and turns rainbow while the easter egg runs.

use dioxus::prelude::*;
use folio_core::cv::{DOWNLOADED_NOTICE, DOWNLOADING_LABEL};
use folio_core::typing::typing_steps;
use folio_core::CvDocument;
use gloo::timers::future::TimeoutFuture;

use crate::components::AnchorLink;
use crate::context::{use_page, use_site, use_toaster};
use crate::dom::download_text;
use crate::theme::{PRIMARY, RAINBOW_ANIMATION, RAINBOW_GRADIENT};

const AVATAR: Asset = asset!("/assets/avatar.svg");

/// Transparent stand-in until the avatar scrolls into view.
const AVATAR_PLACEHOLDER: &str =
    "data:image/svg+xml;charset=utf-8,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 1 1'/%3E";

fn hero_style(parallax_offset: f64, rainbow: bool) -> String {
    let mut style = format!("transform: translateY({}px);", parallax_offset);
    if rainbow {
        style.push_str(&format!(
            " background: {}; background-size: 400% 400%; animation: {};",
            RAINBOW_GRADIENT, RAINBOW_ANIMATION
        ));
    }
    style
}

#[component]
pub fn Hero() -> Element {
    let site = use_site();
    let page = use_page();
    let toaster = use_toaster();

    let mut typed = use_signal(String::new);
    let mut cursor = use_signal(|| true);
    let mut downloading = use_signal(|| false);

    // Typewriter for the role line
    let title = site.profile.title.clone();
    let typing = site.config.typing.clone();
    use_future(move || {
        let steps = typing_steps(&title, &typing);
        async move {
            for step in steps {
                if step.delay_ms > 0 {
                    TimeoutFuture::new(step.delay_ms).await;
                }
                typed.set(step.text);
                cursor.set(step.cursor);
            }
        }
    });

    let profile = site.profile.clone();
    let prepare_ms = site.config.cv.prepare_ms;
    let download_cv = move |_| {
        if downloading() {
            return;
        }
        downloading.set(true);

        let profile = profile.clone();
        spawn(async move {
            TimeoutFuture::new(prepare_ms).await;

            let document = CvDocument::from_profile(&profile);
            match download_text(&document.file_name, &document.content, document.mime_type()) {
                Ok(()) => toaster.success(DOWNLOADED_NOTICE),
                Err(e) => {
                    tracing::warn!("CV download failed: {:?}", e);
                    toaster.error("Gagal mengunduh CV");
                }
            }
            downloading.set(false);
        });
    };

    let style = hero_style(
        page.scroll.read().parallax_offset,
        page.celebration.read().is_active(),
    );
    let subtitle_style = if cursor() {
        format!("border-right: 2px solid {}", PRIMARY)
    } else {
        "border-right: none".to_string()
    };
    let name = site.profile.name.clone();

    rsx! {
        section { id: "home", class: "hero", style: "{style}",
            div { class: "hero-container",
                div { class: "hero-text",
                    p { class: "greeting", "Halo, saya" }
                    h1 { "{name}" }
                    p { class: "subtitle", style: "{subtitle_style}", "{typed}" }

                    div { class: "hero-buttons",
                        button {
                            class: "btn btn-primary",
                            disabled: downloading(),
                            onclick: download_cv,
                            if downloading() {
                                i { class: "fas fa-spinner fa-spin" }
                                {DOWNLOADING_LABEL}
                            } else {
                                i { class: "fas fa-download" }
                                "Unduh CV"
                            }
                        }
                        AnchorLink { href: "#contact", class: "btn btn-secondary", "Hubungi Saya" }
                    }
                }

                div { class: "hero-image",
                    img {
                        alt: "{name}",
                        src: AVATAR_PLACEHOLDER,
                        "data-src": "{AVATAR}",
                    }
                }
            }
        }
    }
}
