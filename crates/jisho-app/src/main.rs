use std::future::Future;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use jisho_config::Config;
use jisho_core::{CacheStore, SearchCoordinator};
use jisho_lang_japanese::JishoDictionary;
use tokio::net::TcpListener;
use tokio::signal;

pub mod logging;
pub mod server;
pub mod state;


use self::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = Config::new();
    logging::init(&config.log);

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutdown requested");
    };

    match run(config, shutdown).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Start the service and serve until `shutdown` resolves.
///
/// Fails only on startup problems: unreachable cache, bad source URL, unbindable address.
pub async fn run(
    config: Config,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let cache = jisho_cache::connect(&config.cache)
        .await
        .context("cache is configured but unusable")?
        .map(|cache| Arc::new(cache) as Arc<dyn CacheStore>);
    if let Some(cache) = &cache {
        tracing::info!(backend = cache.name(), "result cache ready");
    }

    let dictionary =
        JishoDictionary::new(&config.source).context("invalid source configuration")?;
    let coordinator = SearchCoordinator::new(Arc::new(dictionary), cache);
    let use_cache = coordinator.cache_enabled();
    let state = AppState::new(coordinator);

    let addr = config.network.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to listen on '{addr}'"))?;

    let source = state.coordinator.dictionary().metadata();
    tracing::info!(source = %source.base_url, "searching {}", source.name);
    tracing::info!("launching jisho-api on '{addr}'");
    tracing::info!("use redis cache: {use_cache}");
    tracing::info!("use json logging: {}", config.log.json);
    tracing::info!("use concise logging: {}", config.log.concise);

    axum::serve(listener, server::router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;

    Ok(())
}
