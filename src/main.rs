mod api;
mod cli;
mod constants;
mod db;
mod record;
#[cfg(test)]
mod test_utils;

use anyhow::{Context, Error, Result};
use api::AppState;
use clap::Parser;
use cli::Cli;
use db::Store;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    cli::setup_logging(&cli)?;

    let store = Store::open(&cli.database).await?;

    let listener = TcpListener::bind(cli.address)
        .await
        .with_context(|| format!("Failed to bind `{}`", cli.address))?;
    info!(address = %cli.address, "Listening");

    let app = api::router(AppState {
        store: store.clone(),
    });
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    store.close().await;

    served.context("Server failed")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received CTRL+C, shutting down"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for CTRL+C");
            std::future::pending::<()>().await
        }
    }
}
