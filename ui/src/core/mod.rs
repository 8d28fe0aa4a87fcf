//! Platform-agnostic state machines plus the thin browser bridge they are
//! driven through.

pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod keys;
pub mod language;
pub mod menu;
pub mod platform;
pub mod reveal;
pub mod scroll;
pub mod scroll_lock;
pub mod swipe;
pub mod timing;
