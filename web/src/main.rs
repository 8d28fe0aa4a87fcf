use dioxus::prelude::*;

use ui::components::{register_nav, BackToTop, NavBuilder, SiteFooter, SiteHeader};
use ui::hooks::use_scroll_lock_provider;
use ui::views::{GalleryPage, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/gallery")]
    GalleryPage {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MATERIAL_ICONS: &str = "https://fonts.googleapis.com/icon?family=Material+Icons";

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "nav-link",
        to: Route::Home {},
        "{label}"
    })
}

fn nav_gallery(label: &str) -> Element {
    rsx!(Link {
        class: "nav-link",
        to: Route::GalleryPage {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        home: nav_home,
        gallery: nav_gallery,
    });
    use_scroll_lock_provider();

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MATERIAL_ICONS }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Chrome shared by every page: fixed header, footer and the back-to-top
/// button around the routed view.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        SiteHeader {}
        main { Outlet::<Route> {} }
        SiteFooter {}
        BackToTop {}
    }
}
