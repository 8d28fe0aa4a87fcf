use dioxus::prelude::*;

use crate::core::config::site;
use crate::t;
use crate::widgets::lightbox::Gallery;

#[component]
pub fn GalleryPage() -> Element {
    rsx! {
        section { class: "page-header",
            div { class: "container",
                h1 { class: "section-title", {t!("gallery-title")} }
                p { class: "section-subtitle", {t!("gallery-subtitle")} }
            }
        }
        section { class: "gallery section",
            div { class: "container",
                Gallery { images: site().gallery.clone() }
            }
        }
    }
}
