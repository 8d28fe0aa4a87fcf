use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::components::{AnchorLink, LanguageSelector};
use crate::core::config::site;
use crate::core::keys::NavKey;
use crate::core::menu::MobileMenu;
use crate::core::scroll;
use crate::hooks::{use_document_keys, use_scroll_lock, use_scroll_offset};
use crate::i18n;
use crate::t;

/// Element id of the fixed header; anchor scrolling measures it.
pub const HEADER_ID: &str = "header";

/// Platforms register a `NavBuilder` so the header can render router links
/// without `ui` knowing the platform's `Route` enum. Each function receives
/// the localized label and returns a link already containing it.
///
/// ```ignore
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "nav-link", to: Route::Home {}, "{label}" } ),
///     gallery: |label| rsx!( Link { class: "nav-link", to: Route::GalleryPage {}, "{label}" } ),
/// });
/// ```
///
/// Without a builder the header only shows the in-page section links.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub gallery: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn SiteHeader() -> Element {
    i18n::init();

    let offset = use_scroll_offset();
    let mut menu = use_signal(MobileMenu::default);
    let mut lock = use_scroll_lock();

    use_document_keys(use_callback(move |key: NavKey| {
        menu.with_mut(|m| m.handle_key(key, &mut lock.write()));
    }));

    let scrolled = scroll::header_is_scrolled(offset(), &site().interaction);
    let open = menu().is_open();

    let header_class = if scrolled { "header scrolled" } else { "header" };
    let nav_class = if open { "nav active" } else { "nav" };
    let toggle_class = if open {
        "mobile-menu-toggle active"
    } else {
        "mobile-menu-toggle"
    };

    let (home_link, gallery_link) = match NAV_BUILDER.get() {
        Some(b) => (
            Some((b.home)(&t!("nav-home"))),
            Some((b.gallery)(&t!("nav-gallery"))),
        ),
        None => (None, None),
    };

    let sections = [
        ("#apartments", t!("nav-apartments")),
        ("#amenities", t!("nav-amenities")),
        ("#booking", t!("nav-booking")),
        ("#contact", t!("nav-contact")),
    ];

    rsx! {
        header { id: HEADER_ID, class: "{header_class}",
            div { class: "header-inner container",
                div { class: "brand",
                    span { class: "brand-name", {t!("brand-name")} }
                    span { class: "brand-tagline", {t!("brand-tagline")} }
                }

                nav { id: "nav", class: "{nav_class}",
                    ul { class: "nav-list",
                        if let Some(home) = home_link {
                            li { onclick: move |_| menu.with_mut(|m| m.close(&mut lock.write())), {home} }
                        }
                        { sections.into_iter().map(|(href, label)| rsx! {
                            li {
                                key: "{href}",
                                onclick: move |_| menu.with_mut(|m| m.close(&mut lock.write())),
                                AnchorLink { href: href, class: "nav-link", "{label}" }
                            }
                        })}
                        if let Some(gallery) = gallery_link {
                            li { onclick: move |_| menu.with_mut(|m| m.close(&mut lock.write())), {gallery} }
                        }
                    }
                }

                LanguageSelector {}

                button {
                    id: "mobileMenuToggle",
                    r#type: "button",
                    class: "{toggle_class}",
                    aria_label: t!("nav-menu-toggle"),
                    aria_expanded: open,
                    onclick: move |_| menu.with_mut(|m| m.toggle(&mut lock.write())),
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}
