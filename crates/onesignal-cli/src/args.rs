/*
[INPUT]:  Raw command-line arguments
[OUTPUT]: Parsed global flags and subcommands
[POS]:    CLI layer - argument definitions
[UPDATE]: When adding subcommands or flags
*/

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "onesignal", version, about = "OneSignal REST API client")]
pub struct Cli {
    /// YAML config file (defaults to the platform config dir)
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    pub log_level: String,
    /// Print the request that would be sent instead of sending it
    #[arg(long = "dry-run", global = true)]
    pub dry_run: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create, list, view and cancel notifications
    #[command(subcommand)]
    Notifications(NotificationsCommand),
    /// Request a CSV export of the app's players
    CsvExport {
        /// Extra column: location, country or rooted (others are ignored)
        #[arg(long = "extra-field", value_name = "NAME")]
        extra_fields: Vec<String>,
    },
    /// Inspect apps of the account (needs user_auth_key)
    #[command(subcommand)]
    Apps(AppsCommand),
    /// Write a config file interactively
    Init {
        #[arg(long = "output", value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum NotificationsCommand {
    List {
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    Get {
        id: String,
    },
    Create(CreateNotificationArgs),
    Cancel {
        id: String,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CreateNotificationArgs {
    /// Message body (English)
    #[arg(long)]
    pub content: String,
    /// Title (English)
    #[arg(long)]
    pub heading: Option<String>,
    #[arg(long = "segment", value_name = "NAME")]
    pub segments: Vec<String>,
    #[arg(long = "exclude-segment", value_name = "NAME")]
    pub excluded_segments: Vec<String>,
    #[arg(
        long = "player",
        value_name = "ID",
        conflicts_with_all = ["segments", "excluded_segments"]
    )]
    pub players: Vec<String>,
    #[arg(long)]
    pub url: Option<String>,
    /// JSON object delivered with the notification
    #[arg(long, value_name = "JSON")]
    pub data: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AppsCommand {
    List,
    Get { app_id: String },
}
