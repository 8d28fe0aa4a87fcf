pub mod engine;
pub mod view;

pub use engine::LightboxEngine;
pub use view::Gallery;
