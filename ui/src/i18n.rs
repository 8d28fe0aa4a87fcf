//! Localization for `irene-ui`.
//!
//! `i18n-embed` picks the language and loads bundles, `fluent` formats the
//! messages, `rust-embed` compiles the `.ftl` files into the binary and
//! `i18n-embed-fl` checks message ids at compile time.
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/irene-ui.ftl   (fallback/reference)
//! ```
//!
//! Components call `i18n::init()` (idempotent) and then look messages up with
//! `t!("nav-home")`.
//!
//! The header's EN/GR selector only swaps its badge; every message is served
//! from the English bundle.

use std::sync::Once;

use dioxus::logger::tracing::warn;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("slider-go-to", number = 3)
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "irene-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = unic_langid::langid!("en-US");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("i18n language selection failed ({err}); continuing with fallback");
        }
        // Bidi isolation marks would leak into attributes like aria-label.
        LOADER.set_use_isolating(false);
    });
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
