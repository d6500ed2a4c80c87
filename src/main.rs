use std::future::IntoFuture;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cache;
mod catalog;
mod cli;
mod collector;
mod config;
mod discovery;
mod formatter;
mod handlers;
mod routes;
mod snmp;

use cache::{CACHE_WINDOW, ResponseCache};
use catalog::CATALOG;
use cli::Cli;
use collector::LinePoller;
use discovery::IndexResolver;
use handlers::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = config::AppConfig::load(&cli)?;

    if let Err(e) = run(config).await {
        error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}

async fn run(config: config::AppConfig) -> Result<()> {
    let target = config.get_target();
    let mut client = snmp::create_v2c_client(&target, &config.get_community(), config.timeout)
        .await
        .context("Failed to connect via SNMP")?;

    // Без линии страницу не построить, проверяем до запуска сервера
    let identity = IndexResolver::resolve_line_identity(&mut client).await?;
    info!(
        target = %target,
        if_index = %identity.if_index,
        downstream = %identity.downstream_unit_id,
        upstream = %identity.upstream_unit_id,
        ppp = %identity.ppp_address,
        "VDSL линия найдена"
    );

    let (fatal_tx, mut fatal_rx) = mpsc::channel(1);
    let state = AppState {
        cache: Arc::new(ResponseCache::new(LinePoller::new(client, &CATALOG), CACHE_WINDOW)),
        fatal: fatal_tx,
    };
    let app = routes::create_router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.http_port))
        .await
        .context(format!("Не удалось занять порт {}", config.http_port))?;
    info!("Listening on port {}. Press CTRL+C to exit...", config.http_port);

    tokio::select! {
        served = axum::serve(listener, app).into_future() => served.context("HTTP сервер остановился")?,
        Some(e) = fatal_rx.recv() => return Err(e),
        _ = tokio::signal::ctrl_c() => info!("Завершение работы"),
    }

    Ok(())
}
