//! `refresh` subcommand arguments

use clap::{Args, Subcommand};
use std::time::Duration;

use crate::config::defaults;
use crate::tableau::RetryPolicy;

#[derive(Subcommand, Debug)]
pub enum RefreshTarget {
    /// Refresh a data source extract
    #[command(visible_aliases = ["ds"])]
    Datasource(RefreshRunArgs),

    /// Run one or more flows in the given order
    Flow(FlowRunArgs),

    /// Run every flow matching a filter, one at a time in name order
    Flows(RefreshAllArgs),
}

#[derive(Args, Debug)]
pub struct RefreshRunArgs {
    /// Name or LUID of the target
    pub name: String,

    #[command(flatten)]
    pub retry: RetryArgs,
}

#[derive(Args, Debug)]
pub struct FlowRunArgs {
    /// Flow names or LUIDs, run one at a time in the order given
    #[arg(required = true)]
    pub names: Vec<String>,

    #[command(flatten)]
    pub retry: RetryArgs,
}

#[derive(Args, Debug)]
pub struct RefreshAllArgs {
    /// Substring filter on the flow name
    pub filter: Option<String>,

    #[command(flatten)]
    pub retry: RetryArgs,
}

#[derive(Args, Debug)]
pub struct RetryArgs {
    /// Maximum trigger attempts per target
    #[arg(long, default_value_t = 3)]
    pub max_attempts: u32,

    /// Retry until the job succeeds, ignoring --max-attempts
    #[arg(long)]
    pub unbounded: bool,

    /// Seconds to wait after a failed job before the next attempt
    #[arg(long, default_value_t = defaults::JOB_RETRY_BACKOFF_SECS)]
    pub backoff: u64,

    /// Seconds between job status polls
    #[arg(long, default_value_t = defaults::JOB_POLL_INTERVAL_SECS)]
    pub poll_interval: u64,
}

impl RetryArgs {
    pub fn policy(&self) -> RetryPolicy {
        let backoff = Duration::from_secs(self.backoff);
        if self.unbounded {
            RetryPolicy::unbounded(backoff)
        } else {
            RetryPolicy::bounded(self.max_attempts, backoff)
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval)
    }
}
