//! Command line interface.

use std::{net::SocketAddr, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Serves the climate dataset over HTTP
pub struct Cli {
    /// SQLite database holding the `station` and `measurement` tables
    #[arg(long, default_value = "hawaii.sqlite")]
    pub database: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:5000")]
    pub address: SocketAddr,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Sets up logging to stderr. `RUST_LOG` overrides the level chosen on the command line.
pub fn setup_logging(cli: &Cli) -> Result<()> {
    let log_level = cli.log_level();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("climate_api={log_level},tower_http={log_level}"))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

// -- Tests -------------------------------------------------------------------
