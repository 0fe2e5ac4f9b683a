//! SmileArch Desktop - Main entry point
//!
//! Opens the dental landing page in a native window.

mod app;

use anyhow::Result;
use clap::Parser;
use smilearch_core::{load_config, save_default_config, ToothId};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "smilearch")]
#[command(about = "Interactive dental arch with pregnancy care tips")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "smilearch.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Tooth number (1-32) to open on start
    #[arg(short, long)]
    tooth: Option<ToothId>,

    /// Write a default configuration file to the config path and exit
    #[arg(long)]
    init_config: bool,
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&args.log_level))
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("SmileArch v{}", env!("CARGO_PKG_VERSION"));

    if args.init_config {
        save_default_config(&args.config)?;
        return Ok(());
    }

    let config = load_config(&args.config)?;

    info!(
        clinic = %config.clinic.name,
        tooth = ?args.tooth.map(|t| t.get()),
        "Configuration loaded"
    );

    app::run(config, args.tooth);

    Ok(())
}
