use dioxus::prelude::*;

use crate::t;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { id: "contact", class: "footer",
            div { class: "footer-inner container",
                div { class: "footer-brand",
                    span { class: "brand-name", {t!("brand-name")} }
                    p { {t!("footer-blurb")} }
                }
                div { class: "footer-contact",
                    h3 { {t!("footer-contact-title")} }
                    p { span { class: "material-icons", "place" } {t!("footer-address")} }
                    p { span { class: "material-icons", "mail" } {t!("footer-email")} }
                    p { span { class: "material-icons", "call" } {t!("footer-phone")} }
                }
            }
            p { class: "footer-rights", {t!("footer-rights")} }
        }
    }
}
