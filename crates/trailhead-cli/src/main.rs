//! Trailhead CLI Application
//!
//! Command-line front end for the itinerary-generation service: one-shot
//! generation, request previews and an interactive editing session.

mod args;
mod cli;
mod renderer;
mod session;

use std::{path::PathBuf, time::Duration};

use Commands::*;
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use trailhead_core::ControllerBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config_file,
        endpoint,
        timeout_secs,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    match command {
        // Previews never touch the network, so they skip client setup
        Preview(args) => cli::preview(&renderer, args),
        Generate(args) => connect(config_file, endpoint, timeout_secs, renderer)?
            .generate(args)
            .await,
        Interactive => {
            connect(config_file, endpoint, timeout_secs, renderer)?
                .interactive()
                .await
        }
    }
}

fn connect(
    config_file: Option<PathBuf>,
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
    renderer: TerminalRenderer,
) -> Result<Cli> {
    let controller = ControllerBuilder::new()
        .with_config_file(config_file)
        .with_endpoint(endpoint)
        .with_timeout(timeout_secs.map(Duration::from_secs))
        .build()
        .context("Failed to initialize client")?;

    info!("Trailhead started against {}", controller.service().endpoint());

    Ok(Cli::new(controller, renderer))
}
