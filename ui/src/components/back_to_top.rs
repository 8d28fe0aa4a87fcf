use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::config::site;
use crate::core::{platform, scroll};
use crate::hooks::use_scroll_offset;
use crate::t;

#[component]
pub fn BackToTop() -> Element {
    let offset = use_scroll_offset();
    let visible = scroll::back_to_top_visible(offset(), &site().interaction);
    let class = if visible {
        "back-to-top visible"
    } else {
        "back-to-top"
    };

    rsx! {
        button {
            id: "backToTop",
            r#type: "button",
            class: "{class}",
            aria_label: t!("back-to-top"),
            onclick: move |_| {
                if let Err(err) = platform::scroll_to_smooth(0.0) {
                    debug!("scroll to top failed: {err}");
                }
            },
            span { class: "material-icons", "keyboard_arrow_up" }
        }
    }
}
