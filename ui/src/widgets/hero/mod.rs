pub mod engine;
pub mod view;

pub use engine::{HeroEngine, SlideUpdate};
pub use view::HeroSlider;
