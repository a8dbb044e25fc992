// Main entry point - Dependency injection and command dispatch
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::country_service::CountryService;
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::{load_dataset_config, load_widgets_config};
use crate::infrastructure::csv_loader::load_repository;
use crate::presentation::app_state::AppState;
use crate::presentation::cli::Cli;
use crate::presentation::handlers::handle;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config_dir = cli.config_dir.display();
    let dataset_config = load_dataset_config(&cli.config_dir)
        .with_context(|| format!("Failed to load dataset config from {config_dir}"))?;
    let widgets_config = load_widgets_config(&cli.config_dir)
        .with_context(|| format!("Failed to load widgets config from {config_dir}"))?;

    // Load tables once (infrastructure layer)
    let repository =
        Arc::new(load_repository(&dataset_config.dataset).context("Failed to load dataset")?);

    // Create services (application layer)
    let country_service =
        CountryService::new(repository.clone(), widgets_config.energy_types.clone());
    let defaults = widgets_config.defaults.clone();
    let dashboard_service = DashboardService::new(repository, widgets_config);

    let state = AppState {
        country_service,
        dashboard_service,
        defaults,
    };

    let payload = handle(&state, cli.command)?;
    let output = if cli.pretty {
        serde_json::to_string_pretty(&payload)?
    } else {
        serde_json::to_string(&payload)?
    };
    println!("{}", output);

    Ok(())
}
