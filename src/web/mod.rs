//! HTTP surface: page routes, static assets and server lifecycle.

mod pages;
mod routes;

use std::future::Future;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::feed::FeedLoader;

pub use routes::parse_page_param;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub feed: FeedLoader,
}

impl AppState {
    /// Build the state, creating the feed loader from the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the feed endpoint is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let feed = FeedLoader::new(&config).context("Failed to initialize feed loader")?;
        Ok(Self {
            config: Arc::new(config),
            feed,
        })
    }
}

/// Bind the configured address and serve until `shutdown` resolves.
/// In-flight requests finish before this returns.
///
/// # Errors
///
/// Returns an error if the address is invalid, the listener cannot be bound,
/// or the server fails.
pub async fn serve<F>(config: Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.web_host, config.web_port))?;

    let state = AppState::new(config)?;
    info!(endpoint = %state.feed.endpoint(), "Feed loader ready");

    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Web server error")
}

/// Build the router: page routes, `/static` assets, gzip and request tracing.
pub fn create_app(state: AppState) -> Router {
    let static_dir = resolve_static_dir(state.config.static_dir.as_deref());

    Router::new()
        .merge(routes::router())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Locate the asset directory.
///
/// A configured directory wins when it exists. Otherwise the working
/// directory, the crate directory (for tests) and the packaged location are
/// tried in that order, falling back to `./static`.
fn resolve_static_dir(configured: Option<&Path>) -> PathBuf {
    if let Some(dir) = configured {
        if dir.is_dir() {
            info!(static_dir = %dir.display(), "Serving static files");
            return dir.to_path_buf();
        }
        warn!(static_dir = %dir.display(), "STATIC_DIR is not a directory, searching defaults");
    }

    let found = [
        PathBuf::from("static"),
        Path::new(env!("CARGO_MANIFEST_DIR")).join("static"),
        PathBuf::from("/usr/share/srilankan-vacations/static"),
    ]
    .into_iter()
    .find(|dir| dir.is_dir());

    match found {
        Some(dir) => {
            info!(static_dir = %dir.display(), "Serving static files");
            dir
        }
        None => {
            warn!("No static directory found, assets will 404");
            PathBuf::from("static")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_static_dir_wins() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("static/css");
        assert_eq!(resolve_static_dir(Some(&dir)), dir);
    }

    #[test]
    fn test_missing_static_dir_falls_back() {
        let resolved = resolve_static_dir(Some(Path::new("/nonexistent/assets")));
        assert!(resolved.ends_with("static"));
    }
}
