use dioxus::prelude::*;

use crate::core::language::LanguageLabel;
use crate::t;

/// Header language dropdown. Picking an entry only swaps the badge text.
#[component]
pub fn LanguageSelector() -> Element {
    let mut label = use_signal(LanguageLabel::default);

    rsx! {
        div { class: "lang-selector",
            button {
                r#type: "button",
                class: "lang-toggle",
                aria_label: t!("nav-language-label"),
                span { class: "current-lang", "{label().code()}" }
                span { class: "material-icons", "expand_more" }
            }
            div { class: "lang-dropdown",
                { LanguageLabel::OPTIONS.into_iter().map(|option| {
                    let name = option.display_name();
                    rsx! {
                        a {
                            key: "{name}",
                            href: "#",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                label.set(LanguageLabel::from_selection(name));
                            },
                            "{name}"
                        }
                    }
                })}
            }
        }
    }
}
