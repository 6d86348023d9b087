//! Navigation Bar Component
//!
//! Fixed header with section links. Compacts once the page is scrolled,
//! highlights the section in view, and collapses into a toggle menu on
//! small screens.

use dioxus::prelude::*;

use crate::components::AnchorLink;
use crate::context::{use_page, use_site};

/// Section links in page order.
const NAV_LINKS: [(&str, &str); 7] = [
    ("#home", "Beranda"),
    ("#about", "Tentang"),
    ("#skills", "Keahlian"),
    ("#experience", "Pengalaman"),
    ("#projects", "Proyek"),
    ("#certifications", "Sertifikasi"),
    ("#contact", "Kontak"),
];

#[component]
pub fn NavBar() -> Element {
    let site = use_site();
    let page = use_page();
    let mut menu = page.menu;
    let scroll = page.scroll;

    let initials: String = site
        .profile
        .name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();

    let nav_class = if scroll.read().nav_scrolled { "scrolled" } else { "" };

    rsx! {
        nav { class: "{nav_class}",
            div { class: "nav-container",
                AnchorLink { href: "#home", class: "logo", "{initials}" }

                ul { class: menu.read().links_class(),
                    for (href, label) in NAV_LINKS {
                        li { key: "{href}",
                            AnchorLink {
                                href,
                                class: if scroll.read().is_active_link(href) { "active" } else { "" },
                                on_follow: move |_| menu.write().close(),
                                "{label}"
                            }
                        }
                    }
                }

                button {
                    class: "menu-toggle",
                    "aria-label": "Toggle menu",
                    onclick: move |_| menu.write().toggle(),
                    i { class: menu.read().icon_class() }
                }
            }
        }
    }
}
