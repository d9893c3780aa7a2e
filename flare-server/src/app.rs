use crate::signaling::{SignalingHub, ws_handler};
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Assemble the relay application: the WebSocket upgrade endpoint plus
/// static hosting of the browser front-end at `/`.
pub fn app(hub: SignalingHub, static_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(ws_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .with_state(hub)
}
