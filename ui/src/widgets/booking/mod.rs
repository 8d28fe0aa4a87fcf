pub mod engine;
pub mod view;

pub use engine::BookingRequest;
pub use view::BookingForm;
