mod hub;
mod registry;
mod ws_handler;

pub use hub::*;
pub use registry::*;
pub use ws_handler::*;
