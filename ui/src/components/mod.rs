//! Site chrome and small shared widgets.

mod anchor_link;
mod back_to_top;
mod language_selector;
mod reveal;
mod site_footer;
mod site_header;

pub use anchor_link::AnchorLink;
pub use back_to_top::BackToTop;
pub use language_selector::LanguageSelector;
pub use reveal::{use_reveal_group, Reveal, RevealState};
pub use site_footer::SiteFooter;
pub use site_header::{register_nav, NavBuilder, SiteHeader, HEADER_ID};
