//! Command line interface definitions

mod download;
mod get;
mod modify;
mod refresh;
mod report;

pub use download::{BackupArgs, DownloadArgs};
pub use get::GetResource;
pub use modify::{
    ContentKind, CreateResource, DeleteArgs, DeleteKind, FavoriteAction, FavoriteItemArgs,
    GroupAction, PublishArgs, PublishKind, SetTarget,
};
pub use refresh::{RefreshTarget, RetryArgs};
pub use report::ReportKind;

use clap::{Parser, Subcommand};

use crate::config::defaults;

#[derive(Parser, Debug)]
#[command(
    name = "tabctl",
    about = "Tableau Server site automation from the command line",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Server URL, e.g. https://tableau.example.com
    #[arg(long, global = true, env = "TABLEAU_SERVER")]
    pub server: Option<String>,

    /// Site content URL (empty for the default site)
    #[arg(long, global = true, env = "TABLEAU_SITE", default_value = "")]
    pub site: String,

    /// Personal access token name
    #[arg(long, global = true, env = "TABLEAU_TOKEN_NAME", default_value = defaults::TOKEN_NAME)]
    pub token_name: String,

    /// Personal access token secret (falls back to env vars, then the
    /// credentials file)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Never prompt; assume yes on confirmations
    #[arg(long, global = true)]
    pub batch: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List site resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Cross-referenced site reports
    Report {
        #[command(subcommand)]
        kind: ReportKind,
    },

    /// Trigger extract refreshes and flow runs and wait for completion
    Refresh {
        #[command(subcommand)]
        target: RefreshTarget,
    },

    /// Create resources
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },

    /// Change resource attributes
    Set {
        #[command(subcommand)]
        target: SetTarget,
    },

    /// Delete a resource
    Delete(DeleteArgs),

    /// Manage group membership
    Group {
        #[command(subcommand)]
        action: GroupAction,
    },

    /// Manage per-user favorites
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },

    /// Publish a local data source or workbook file
    Publish(PublishArgs),

    /// Download the packaged file behind a data source, workbook or flow
    Download(DownloadArgs),

    /// Download every workbook, data source and flow into a directory
    Backup(BackupArgs),

    /// Show server version information
    Info,
}
