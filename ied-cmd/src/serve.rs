//! Static file server for the bundled dashboard.
//!
//! The dashboard is a client-side routed WASM app, so every path that is not
//! a bundled file is answered with `index.html` and the app resolves it.

use anyhow::Context;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use clap::Args;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use tower_http::services::{ServeDir, ServeFile};

#[derive(Args, Debug, Clone)]
pub struct ServeConfig {
    /// Port to bind
    #[arg(short = 'p', long, env = "IED_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "IED_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Directory holding the bundled dashboard (index.html, wasm, js)
    #[arg(long, env = "IED_DIST", default_value = "dist")]
    pub dist: PathBuf,
}

/// Router serving `dist` with an `index.html` fallback.
pub fn router(dist: &Path) -> Router {
    let index = dist.join("index.html");
    let files = ServeDir::new(dist).fallback(ServeFile::new(index));
    Router::new()
        .fallback_service(files)
        .layer(middleware::from_fn(log_request))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;
    log::debug!("{} {} -> {}", method, uri, response.status());
    response
}

pub async fn run_serve(config: &ServeConfig) -> anyhow::Result<()> {
    let index = config.dist.join("index.html");
    if !index.exists() {
        anyhow::bail!(
            "{} not found; bundle the dashboard first (dx bundle -p ied-dashboard)",
            index.display()
        );
    }

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    log::info!(
        "Serving {} at http://{}",
        config.dist.display(),
        listener.local_addr()?
    );

    axum::serve(listener, router(&config.dist)).await?;
    Ok(())
}
