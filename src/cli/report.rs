//! `report` subcommand arguments

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::get::FormatArgs;
use crate::config::defaults;
use crate::output::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum ReportKind {
    /// All users, flagging those who own published content
    Users(FormatArgs),

    /// All groups with their resolved membership
    Groups(FormatArgs),

    /// All subscriptions with content and recipient context
    Subscriptions(FormatArgs),

    /// Suspended tasks with owner context and an optional HTML reminder
    Suspended(SuspendedArgs),

    /// Users with no recent sign-in, with an optional unlicensing write-back
    Inactive(InactiveArgs),
}

#[derive(Args, Debug)]
pub struct SuspendedArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t)]
    pub output: OutputFormat,

    /// Consecutive failures after which the server suspends a task
    #[arg(long, default_value_t = defaults::TASK_FAILURE_LIMIT)]
    pub failure_limit: u32,

    /// Write the HTML reminder body to this file
    #[arg(long)]
    pub html: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InactiveArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t)]
    pub output: OutputFormat,

    /// Days without a sign-in before a user counts as inactive
    #[arg(long, default_value_t = defaults::INACTIVE_DAYS)]
    pub days: u32,

    /// Set the site role of every listed user to Unlicensed
    #[arg(long)]
    pub unlicense: bool,
}
