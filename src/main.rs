#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::logging::LoggingBuilder;
use portfolio_core::PortfolioConfig;

/// Global configuration, set once from the command line
static CONFIG: OnceLock<PortfolioConfig> = OnceLock::new();

/// Get the active configuration (defaults when unset)
pub fn get_config() -> PortfolioConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Personal portfolio - projects, interests and a contact form
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio with project details and a contact form")]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Data directory for the preferences database
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Project catalog replacing the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Milliseconds between a submission and the form reset
    #[arg(long)]
    reset_delay_ms: Option<u64>,

    /// Mirror logs as JSONL into this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> PortfolioConfig {
        let mut config = match &self.config {
            Some(path) => PortfolioConfig::load(path).unwrap_or_else(|e| {
                eprintln!("Ignoring config {}: {}", path.display(), e);
                PortfolioConfig::default()
            }),
            None => PortfolioConfig::default(),
        };
        if let Some(dir) = self.data_dir {
            config.data_dir = dir;
        }
        if self.catalog.is_some() {
            config.catalog_path = self.catalog;
        }
        if let Some(ms) = self.reset_delay_ms {
            config.reset_delay_ms = ms;
        }
        if self.log_dir.is_some() {
            config.log_dir = self.log_dir;
        }
        config
    }
}

fn main() {
    let config = Args::parse().into_config();

    LoggingBuilder::new("desktop")
        .with_logs_dir(config.log_dir.clone())
        .with_filter(config.log_filter.clone())
        .init();

    tracing::info!("Starting with data dir: {:?}", config.data_dir);
    let _ = CONFIG.set(config);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}
