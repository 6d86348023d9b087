//! In-page link with smooth scrolling.

use dioxus::prelude::*;

use crate::context::use_site;
use crate::dom::scroll::scroll_to_anchor;

/// Link to an `#anchor` that scrolls smoothly and stops below the fixed
/// header. Unknown anchors do nothing.
///
/// # Props
///
/// * `href` - `#id` of the target section
/// * `class` - CSS class of the link
/// * `on_follow` - Called after the link was clicked
#[component]
pub fn AnchorLink(
    #[props(into)] href: String,
    #[props(into, default)] class: String,
    on_follow: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let header_offset = use_site().config.scroll.header_offset_px;
    let target = href.clone();

    rsx! {
        a {
            href: "{href}",
            class: "{class}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                scroll_to_anchor(&target, header_offset);
                if let Some(on_follow) = on_follow {
                    on_follow.call(());
                }
            },
            {children}
        }
    }
}
