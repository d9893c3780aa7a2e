use anyhow::{Context, Result};
use clap::Parser;
use flare_server::{SignalingHub, app};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flare", about = "WebRTC signaling relay")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Directory with the browser front-end, served at `/`.
    #[arg(long, default_value = "./front")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let hub = SignalingHub::new();
    let router = app(hub, &args.static_dir);

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    info!(addr = %args.bind, front = %args.static_dir.display(), "signaling relay listening");

    axum::serve(listener, router)
        .await
        .context("server error")?;

    Ok(())
}
