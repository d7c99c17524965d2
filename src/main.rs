//! RoomHub Server: hotel room booking service
//!
//! Main entry point: loads configuration, initializes logging, and hands
//! off to the API crate.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use roomhub_core::config::AppConfig;
use roomhub_core::error::AppError;

/// Command-line arguments for the server binary.
#[derive(Debug, Parser)]
#[command(name = "roomhub-server", version, about = "RoomHub booking server")]
struct Args {
    /// Environment overlay to load from the config directory
    #[arg(long, env = "ROOMHUB_ENV", default_value = "development")]
    env: String,

    /// Directory holding default.toml and the environment overlays
    #[arg(long, env = "ROOMHUB_CONFIG_DIR", default_value = "config")]
    config_dir: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match load_configuration(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(
        env = %args.env,
        config_dir = %args.config_dir,
        "Starting RoomHub v{}",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = roomhub_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration(args: &Args) -> Result<AppConfig, AppError> {
    let config = AppConfig::load(&args.config_dir, &args.env)?;
    config.validate_for(&args.env)?;
    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
