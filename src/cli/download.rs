//! `download` and `backup` subcommand arguments

use clap::Args;
use std::path::PathBuf;

use crate::cli::modify::ContentKind;

#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Content kind
    #[arg(value_enum)]
    pub kind: ContentKind,

    /// Content name or LUID
    pub name: String,

    /// Output file path (default: the content name plus the packaged
    /// extension)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BackupArgs {
    /// Directory receiving the downloaded files (created if missing)
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}
