use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use srilankan_vacations::config::Config;
use srilankan_vacations::web;

const DEFAULT_LOG_FILTER: &str = "info,srilankan_vacations=debug";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // A missing .env is normal outside development
    let _ = dotenvy::dotenv();

    init_tracing()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        feed_endpoint = %config.feed_endpoint,
        category = config.feed_category_id,
        posts_per_page = config.posts_per_page,
        hero_posts = config.hero_posts,
        timeout_secs = config.feed_timeout.as_secs(),
        "Starting srilankan-vacations"
    );

    web::serve(config, shutdown_signal()).await?;

    info!("Shutdown complete");
    Ok(())
}

/// Install the global subscriber. `LOG_FORMAT=json` (or `structured`)
/// switches to one JSON object per line.
fn init_tracing() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| {
        format.eq_ignore_ascii_case("json") || format.eq_ignore_ascii_case("structured")
    });
    let (json_layer, text_layer) = if json {
        (Some(fmt::layer().json()), None)
    } else {
        (None, Some(fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .context("Failed to initialize tracing")
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM. If a handler cannot be
/// installed that source is ignored rather than ending the server.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C"),
        () = terminate => info!("Received SIGTERM"),
    }

    info!("Draining in-flight requests");
}
