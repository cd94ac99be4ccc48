//! CLI module for statuswatch
//!
//! # Commands
//!
//! - `serve` - Run the refresh timer and the dashboard API
//! - `check` - Refresh sources once and print their status
//! - `sources` - List, add or toggle status sources
//! - `history` - Show recorded status history
//! - `notifications` - Show notifications
//! - `snapshot` - Export or decode a public snapshot
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Check every enabled source once
//! statuswatch check
//!
//! # Share a read-only snapshot
//! statuswatch snapshot export --fragment
//! ```

pub mod check;
pub mod completions;
pub mod config;
pub mod history;
pub mod output;
pub mod serve;
pub mod snapshot;
pub mod sources;

pub use completions::handle_completions;
pub use config::handle_config_init;

use crate::config::StatusWatchConfig;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = "statuswatch.toml";

/// statuswatch - service status dashboard
#[derive(Parser, Debug)]
#[command(
    name = "statuswatch",
    version,
    about = "Poll vendor status pages and keep an incident history"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the refresh timer and the dashboard API
    Serve(ServeArgs),
    /// Refresh sources once and print the result
    Check(CheckArgs),
    /// Manage status sources
    #[command(subcommand)]
    Sources(SourcesCommands),
    /// Show status history
    History(HistoryArgs),
    /// Show notifications
    Notifications(NotificationsArgs),
    /// Public snapshot utilities
    #[command(subcommand)]
    Snapshot(SnapshotCommands),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Override server port
    #[arg(short, long, env = "STATUSWATCH_PORT")]
    pub port: Option<u16>,

    /// Override server host
    #[arg(short = 'H', long, env = "STATUSWATCH_HOST")]
    pub host: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "STATUSWATCH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Disable the periodic refresh timer
    #[arg(long)]
    pub no_refresh: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Only refresh this source
    #[arg(short, long)]
    pub source: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum SourcesCommands {
    /// List configured and custom sources
    List(SourcesListArgs),
    /// Add a custom source
    Add(SourcesAddArgs),
    /// Enable or disable a source
    Toggle(SourcesToggleArgs),
}

#[derive(Args, Debug)]
pub struct SourcesListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Only show enabled sources
    #[arg(long)]
    pub enabled: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct SourcesAddArgs {
    /// Unique source id
    pub id: String,

    /// Status endpoint to poll
    pub api: String,

    /// Display name (defaults to the id)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Human-facing status page
    #[arg(long)]
    pub page: Option<String>,

    /// Environment tag
    #[arg(short, long, default_value = "prod")]
    pub env: String,

    /// Category tag
    #[arg(long)]
    pub category: Option<String>,

    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct SourcesToggleArgs {
    /// Source id
    pub id: String,

    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Maximum entries to show (most recent first)
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,

    /// Only show entries for this source
    #[arg(short, long)]
    pub source: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct NotificationsArgs {
    /// Mark all notifications read after listing
    #[arg(long)]
    pub mark_read: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum SnapshotCommands {
    /// Print an encoded snapshot of enabled sources and history
    Export(SnapshotExportArgs),
    /// Decode a snapshot payload or URL fragment
    Decode(SnapshotDecodeArgs),
}

#[derive(Args, Debug)]
pub struct SnapshotExportArgs {
    /// Print as a `#public=` URL fragment
    #[arg(long)]
    pub fragment: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct SnapshotDecodeArgs {
    /// Encoded payload, with or without the `#public=` prefix
    pub payload: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Load the configuration for a one-shot command.
///
/// A missing file means defaults; a present but broken file is an error.
pub fn load_config(path: &Path) -> Result<StatusWatchConfig, Box<dyn std::error::Error>> {
    let config = StatusWatchConfig::load_or_default(path)?.with_env_overrides();
    config.validate()?;
    Ok(config)
}
