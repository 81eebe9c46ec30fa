#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
mod content;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::SiteSettings;
use tracing_subscriber::EnvFilter;

/// Global site settings, set once from the command line
static SETTINGS: OnceLock<SiteSettings> = OnceLock::new();

/// Simulated send failure requested on the command line
static SIMULATED_FAILURE: OnceLock<Option<String>> = OnceLock::new();

/// Get the site settings (set from command line or default)
pub fn get_settings() -> SiteSettings {
    SETTINGS.get().cloned().unwrap_or_default()
}

/// Get the simulated send failure, if one was requested
pub fn get_simulated_failure() -> Option<String> {
    SIMULATED_FAILURE.get().cloned().flatten()
}

/// Folio - single-page portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - a single-page portfolio with parallax and scroll reveals")]
struct Args {
    /// Settings file (JSON). Defaults to <config dir>/folio/settings.json when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the simulated contact send latency in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Make every contact send fail with this reason
    #[arg(long)]
    simulate_failure: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("folio").join("settings.json"))
        .filter(|path| path.exists())
}

fn load_settings(args: &Args) -> Result<SiteSettings> {
    let mut settings = match args.config.clone().or_else(default_config_path) {
        Some(path) => SiteSettings::from_path(&path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => SiteSettings::default(),
    };
    if let Some(latency) = args.latency_ms {
        settings.send_latency_ms = latency;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "folio=debug,folio_core=debug"
    } else {
        "folio=info,folio_core=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let settings = load_settings(&args)?;
    tracing::info!(
        latency = ?Duration::from_millis(settings.send_latency_ms),
        endpoint = ?settings.submission_endpoint,
        "Starting folio"
    );

    let _ = SETTINGS.set(settings);
    let _ = SIMULATED_FAILURE.set(args.simulate_failure.clone());

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(content::SITE_TITLE)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
