use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{FavCommands, FormatCommands, RankArgs, ServeArgs};

/// Station favorites, rail API display helpers and API proxy
///
/// gare keeps the favorite stations of the station finder in a local SQLite
/// database, ranks search suggestions with favorites first, formats rail API
/// timestamps and delays, and runs the pass-through proxy that lets the web
/// app reach the rail API without holding the API key.
#[derive(Parser)]
#[command(version, about, name = "gare")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/gare/gare.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Storage key holding the favorites list
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the gare CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage favorite stations
    #[command(alias = "f")]
    Fav {
        #[command(subcommand)]
        command: FavCommands,
    },
    /// Rank station search suggestions with favorites first
    #[command(alias = "r")]
    Rank(RankArgs),
    /// Format rail API timestamps, delays and place names
    #[command(alias = "fmt")]
    Format {
        #[command(subcommand)]
        command: FormatCommands,
    },
    /// Start the rail API proxy
    Serve(ServeArgs),
}
