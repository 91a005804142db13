//! gare CLI Application
//!
//! Command-line interface over the gare favorites store and formatting
//! helpers, plus the rail API proxy server.

mod args;
mod cli;
mod proxy;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use gare_core::FavoriteStoreBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        key,
        no_color,
        command,
    } = Args::parse();

    let builder = FavoriteStoreBuilder::new()
        .with_database_path(database_file)
        .with_key(key);
    let cli = Cli::new(builder, TerminalRenderer::new(!no_color));

    info!("gare started");

    match command {
        Some(Fav { command }) => cli.handle_fav_command(command),
        Some(Rank(args)) => cli.rank(args),
        Some(Format { command }) => cli.handle_format_command(command),
        Some(Serve(args)) => {
            info!("Starting rail API proxy");
            proxy::run_server(args.into())
                .await
                .context("Rail API proxy failed")
        }
        None => cli.list_favorites(),
    }
}
