use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::HEADER_ID;
use crate::core::config::site;
use crate::core::{platform, scroll};

/// In-page link that scrolls smoothly to its target, leaving room for the
/// fixed header. Falls back to the browser's jump when the target is missing.
#[component]
pub fn AnchorLink(
    #[props(into)] href: String,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let target = href.clone();

    let on_click = move |evt: MouseEvent| {
        let Some(selector) = scroll::anchor_selector(&target) else {
            return;
        };
        match platform::anchor_geometry(selector, HEADER_ID) {
            Ok(Some(geometry)) => {
                evt.prevent_default();
                let top = scroll::anchor_scroll_top(
                    geometry.target_viewport_top,
                    geometry.page_offset,
                    geometry.header_height,
                    &site().interaction,
                );
                if let Err(err) = platform::scroll_to_smooth(top) {
                    debug!("smooth scroll to {selector} failed: {err}");
                }
            }
            Ok(None) => {}
            Err(err) => debug!("smooth scroll skipped for {selector}: {err}"),
        }
    };

    rsx! {
        a { href: "{href}", class: "{class}", onclick: on_click, {children} }
    }
}
