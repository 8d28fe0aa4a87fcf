use dioxus::prelude::*;

use crate::core::config::ImageItem;
use crate::core::keys::NavKey;
use crate::core::scroll_lock::LockOwner;
use crate::hooks::{use_document_keys, use_scroll_lock};
use crate::t;

use super::engine::LightboxEngine;

/// Clickable image grid with a full-screen lightbox. Without images neither
/// the grid nor the lightbox markup is produced.
#[component]
pub fn Gallery(images: Vec<ImageItem>) -> Element {
    let Some(engine) = LightboxEngine::new(images) else {
        return rsx! {};
    };

    rsx! {
        GalleryGrid { initial: engine }
    }
}

#[component]
fn GalleryGrid(initial: LightboxEngine) -> Element {
    let mut lightbox = use_signal(|| initial.clone());
    let mut lock = use_scroll_lock();

    use_document_keys(use_callback(move |key: NavKey| {
        lightbox.with_mut(|lb| lb.handle_key(key, &mut lock.write()));
    }));

    // The shared lock outlives route changes; leaving the page must not keep
    // the body frozen.
    use_drop(move || {
        lock.write().release(LockOwner::Lightbox);
    });

    let snapshot = lightbox();
    let shown = snapshot.current().clone();
    let class = if snapshot.is_open() {
        "lightbox active"
    } else {
        "lightbox"
    };

    rsx! {
        div { class: "gallery-grid",
            { snapshot.images().iter().enumerate().map(|(index, image)| rsx! {
                div {
                    key: "{index}",
                    class: "gallery-item",
                    role: "button",
                    tabindex: 0,
                    onclick: move |_| lightbox.with_mut(|lb| lb.open(index, &mut lock.write())),
                    img { src: "{image.src}", alt: "{image.alt}", loading: "lazy" }
                }
            })}
        }

        div { class: "{class}",
            div {
                class: "lightbox-overlay",
                onclick: move |_| lightbox.with_mut(|lb| lb.close(&mut lock.write())),
            }
            div { class: "lightbox-content",
                button {
                    r#type: "button",
                    class: "lightbox-close",
                    aria_label: t!("lightbox-close"),
                    onclick: move |_| lightbox.with_mut(|lb| lb.close(&mut lock.write())),
                    span { class: "material-icons", "close" }
                }
                button {
                    r#type: "button",
                    class: "lightbox-prev",
                    aria_label: t!("lightbox-prev"),
                    onclick: move |_| {
                        lightbox.with_mut(|lb| lb.prev());
                    },
                    span { class: "material-icons", "chevron_left" }
                }
                button {
                    r#type: "button",
                    class: "lightbox-next",
                    aria_label: t!("lightbox-next"),
                    onclick: move |_| {
                        lightbox.with_mut(|lb| lb.next());
                    },
                    span { class: "material-icons", "chevron_right" }
                }
                img { class: "lightbox-image", src: "{shown.src}", alt: "{shown.alt}" }
            }
        }
    }
}
