pub mod app;
pub mod signaling;

pub use app::app;
pub use signaling::*;
