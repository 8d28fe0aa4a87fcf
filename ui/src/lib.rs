//! Shared UI crate for the Irene apartments site: components, views and the
//! interaction logic behind them.

use dioxus::prelude::*;

pub mod components;
pub mod core;
pub mod error;
pub mod hooks;
pub mod i18n;
pub mod views;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use error::{Result, SiteError};

/// Site stylesheet shared by every platform crate.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
