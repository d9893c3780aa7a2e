mod client;
mod signal;

pub use client::ClientId;
pub use signal::{SignalEnvelope, SignalKind};
