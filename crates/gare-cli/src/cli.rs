//! Command definitions and handlers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, keeping gare-core free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → FavoriteStore / format
//! ```

use std::{
    fs,
    io::{self, Read},
    net::SocketAddr,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use gare_core::{
    display::results::FavoriteAction,
    format,
    AddFavorite, FavoriteId, FavoriteStore, FavoriteStoreBuilder, Favorites, OperationStatus,
    SqliteStorage, Suggestion, Suggestions, WriteOutcome, WriteStatus, STOP_AREA,
};
use jiff::tz::TimeZone;
use log::debug;

use crate::{proxy::ProxyConfig, renderer::TerminalRenderer};

/// Add or toggle a favorite station
#[derive(Args)]
pub struct AddFavoriteArgs {
    /// Transit location identifier, e.g. stop_area:SNCF:87191007
    pub id: String,
    /// Display name of the station
    pub name: String,
    /// Location type tag
    #[arg(short = 't', long = "type", default_value = STOP_AREA)]
    pub kind: String,
}

impl From<AddFavoriteArgs> for AddFavorite {
    fn from(val: AddFavoriteArgs) -> Self {
        AddFavorite {
            id: val.id,
            name: val.name,
            kind: val.kind,
        }
    }
}

/// Address a favorite by identifier
#[derive(Args)]
pub struct FavoriteIdArgs {
    /// Transit location identifier
    pub id: String,
}

impl From<FavoriteIdArgs> for FavoriteId {
    fn from(val: FavoriteIdArgs) -> Self {
        FavoriteId { id: val.id }
    }
}

/// Remove every favorite
#[derive(Args)]
pub struct ClearArgs {
    /// Confirm the wipe (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

/// Merge favorites exported from another device
#[derive(Args)]
pub struct ImportArgs {
    /// JSON file produced by `gare fav export`, or `-` for stdin
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum FavCommands {
    /// Add a favorite station
    #[command(alias = "a")]
    Add(AddFavoriteArgs),
    /// Remove a favorite station
    #[command(alias = "rm")]
    Remove(FavoriteIdArgs),
    /// List favorite stations in the order they were added
    #[command(alias = "ls")]
    List,
    /// Tell whether a station is a favorite
    Contains(FavoriteIdArgs),
    /// Add the station if absent, remove it if present
    #[command(alias = "t")]
    Toggle(AddFavoriteArgs),
    /// Remove every favorite
    Clear(ClearArgs),
    /// Print the favorites as JSON
    Export,
    /// Merge favorites from an exported JSON file
    Import(ImportArgs),
}

/// Rank station search suggestions with favorites first
///
/// Reads a JSON array of `{"id", "name", "type"}` suggestions and prints it
/// with favorite stations moved to the front, keeping the original order
/// within favorites and within the rest.
#[derive(Args)]
pub struct RankArgs {
    /// JSON file of suggestions, or `-` for stdin
    pub file: PathBuf,
    /// Print the ranked suggestions as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum FormatCommands {
    /// Convert a compact YYYYMMDDThhmmss UTC timestamp
    #[command(alias = "ts")]
    Timestamp {
        compact: String,
        /// IANA time zone for the clock reading, defaults to the system zone
        #[arg(long)]
        tz: Option<String>,
    },
    /// Describe the delay between a scheduled and an actual time
    Delay {
        /// Scheduled time, compact YYYYMMDDThhmmss
        scheduled: String,
        /// Actual time, compact YYYYMMDDThhmmss
        actual: String,
    },
    /// Describe the duration of a journey
    Duration {
        /// Departure time, compact YYYYMMDDThhmmss
        departure: String,
        /// Arrival time, compact YYYYMMDDThhmmss
        arrival: String,
    },
    /// Drop a redundant parenthetical from a place name
    Name { name: String },
}

/// Run the rail API proxy
#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "GARE_LISTEN", default_value = "127.0.0.1:3001")]
    pub listen: SocketAddr,
    /// Rail API base URL requests are forwarded to
    #[arg(long, env = "GARE_UPSTREAM", default_value = "https://api.sncf.com/v1")]
    pub upstream: String,
    /// Key sent upstream in the Authorization header
    #[arg(long, env = "GARE_API_KEY", hide_env_values = true)]
    pub api_key: String,
}

impl From<ServeArgs> for ProxyConfig {
    fn from(val: ServeArgs) -> Self {
        ProxyConfig {
            listen: val.listen,
            upstream: val.upstream,
            api_key: val.api_key,
        }
    }
}

/// Command handlers over a lazily opened favorites store.
pub struct Cli {
    builder: FavoriteStoreBuilder,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(builder: FavoriteStoreBuilder, renderer: TerminalRenderer) -> Self {
        Self { builder, renderer }
    }

    fn store(&self) -> Result<FavoriteStore<SqliteStorage>> {
        self.builder
            .clone()
            .build()
            .context("Failed to open favorites store")
    }

    pub fn handle_fav_command(&self, command: FavCommands) -> Result<()> {
        match command {
            FavCommands::Add(args) => self.add_favorite(args.into()),
            FavCommands::Remove(args) => self.remove_favorite(args.into()),
            FavCommands::List => self.list_favorites(),
            FavCommands::Contains(args) => self.contains_favorite(args.into()),
            FavCommands::Toggle(args) => self.toggle_favorite(args.into()),
            FavCommands::Clear(args) => self.clear_favorites(args.confirm),
            FavCommands::Export => self.export_favorites(),
            FavCommands::Import(args) => self.import_favorites(&args.file),
        }
    }

    pub fn list_favorites(&self) -> Result<()> {
        let favorites = Favorites(self.store()?.get_all());
        self.renderer.render("# Favorites\n\n")?;
        self.renderer.show(&favorites)
    }

    fn add_favorite(&self, params: AddFavorite) -> Result<()> {
        params.validate()?;
        let status = self.store()?.add(&params.id, &params.name, &params.kind);
        self.renderer
            .show(&WriteOutcome::new(FavoriteAction::Add, params.id, status))
    }

    fn remove_favorite(&self, params: FavoriteId) -> Result<()> {
        let status = self.store()?.remove(&params.id);
        self.renderer
            .show(&WriteOutcome::new(FavoriteAction::Remove, params.id, status))
    }

    fn contains_favorite(&self, params: FavoriteId) -> Result<()> {
        let message = if self.store()?.contains(&params.id) {
            format!("{} is a favorite.", params.id)
        } else {
            format!("{} is not a favorite.", params.id)
        };
        self.renderer.render(&format!("{message}\n"))
    }

    fn toggle_favorite(&self, params: AddFavorite) -> Result<()> {
        params.validate()?;
        let now_favorite = self
            .store()?
            .toggle(&params.id, &params.name, &params.kind)
            .context("Failed to toggle favorite")?;
        let status = if now_favorite {
            format!("Added {} to favorites.", params.id)
        } else {
            format!("Removed {} from favorites.", params.id)
        };
        self.renderer.show(&OperationStatus::success(status))
    }

    fn clear_favorites(&self, confirmed: bool) -> Result<()> {
        if !confirmed {
            bail!("Refusing to clear favorites without --confirm");
        }
        let status = self.store()?.clear();
        self.renderer
            .show(&WriteOutcome::new(FavoriteAction::Clear, "", status))
    }

    fn export_favorites(&self) -> Result<()> {
        let json = self
            .store()?
            .export_json()
            .context("Failed to export favorites")?;
        println!("{json}");
        Ok(())
    }

    fn import_favorites(&self, file: &Path) -> Result<()> {
        let json = read_input(file)?;
        let added = self
            .store()?
            .merge_json(&json)
            .context("Failed to import favorites")?;
        let status = if added > 0 {
            WriteStatus::Written
        } else {
            WriteStatus::Unchanged
        };
        self.renderer.show(&OperationStatus::for_write(
            status,
            format!("Imported {added} new favorite(s)."),
        ))
    }

    pub fn rank(&self, args: RankArgs) -> Result<()> {
        let raw = read_input(&args.file)?;
        let candidates: Vec<Suggestion> =
            serde_json::from_str(&raw).context("Suggestions must be a JSON array")?;
        debug!("Ranking {} suggestions", candidates.len());

        let ranked = self.store()?.rank_favorites_first(candidates);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&ranked)?);
            Ok(())
        } else {
            self.renderer.show(&Suggestions(ranked))
        }
    }

    pub fn handle_format_command(&self, command: FormatCommands) -> Result<()> {
        let line = match command {
            FormatCommands::Timestamp { compact, tz } => {
                let timestamp = format::parse_timestamp(&compact)?;
                let tz = match tz {
                    Some(name) => TimeZone::get(&name)
                        .with_context(|| format!("Unknown time zone '{name}'"))?,
                    None => TimeZone::system(),
                };
                format!("{timestamp} ({})", format::clock_time(timestamp, &tz))
            }
            FormatCommands::Delay { scheduled, actual } => {
                let scheduled = format::parse_timestamp(&scheduled)?;
                let actual = format::parse_timestamp(&actual)?;
                format::delay_label(scheduled, actual)
            }
            FormatCommands::Duration { departure, arrival } => format::journey_duration(
                format::parse_timestamp(&departure)?,
                format::parse_timestamp(&arrival)?,
            ),
            FormatCommands::Name { name } => format::dedupe_parenthetical(&name),
        };
        self.renderer.render(&format!("{line}\n"))
    }
}

/// Reads `path`, with `-` meaning stdin.
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}
