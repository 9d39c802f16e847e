//! Atelier CLI Application
//!
//! Command-line interface for the atelier project workflow tool.

mod args;
mod artist;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use atelier_core::{params::ListProjects, StudioBuilder};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, AtelierMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let studio = StudioBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize studio")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Atelier started");

    match command {
        Some(Project { command }) => {
            Cli::new(studio, renderer)
                .handle_project_command(command)
                .await
        }
        Some(Step { command }) => {
            Cli::new(studio, renderer)
                .handle_step_command(command)
                .await
        }
        Some(Commit { command }) => {
            Cli::new(studio, renderer)
                .handle_commit_command(command)
                .await
        }
        Some(Review { command }) => {
            Cli::new(studio, renderer)
                .handle_review_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Atelier MCP server");
            run_stdio_server(AtelierMcpServer::new(studio))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(studio, renderer)
                .list_projects(&ListProjects::default())
                .await
        }
    }
}
