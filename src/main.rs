//! Shift Wage Engine HTTP server.
//!
//! Serves `POST /calculate` and `POST /report` using the calculator settings
//! from a YAML configuration file.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wage_engine::api::{AppState, create_router};
use wage_engine::config::ConfigLoader;

/// Shift Wage Engine - paid hours and gross wage for work shifts
#[derive(Parser, Debug)]
#[command(name = "wage-engine", version, about)]
struct Args {
    /// Path to YAML configuration file
    #[arg(short, long, default_value = "config/default.yaml")]
    config: String,

    /// Address to listen on
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: INFO, use RUST_LOG=debug for per-shift detail
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Args::parse();

    let loader = ConfigLoader::load(&args.config)?;
    info!(
        config = %args.config,
        default_break_policy = %loader.config().default_break_policy,
        input_mode = ?loader.config().input_mode,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    info!(bind = %args.bind, "wage-engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
