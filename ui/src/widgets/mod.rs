//! Interactive page widgets. Each one pairs a pure `engine` with the Dioxus
//! `view` that drives it.

pub mod booking;
pub mod hero;
pub mod lightbox;
