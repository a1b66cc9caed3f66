//! Retrying job runner
//!
//! Extract refreshes and flow runs are fire-and-forget on the server side, so
//! recovery from a failed job means triggering a brand new one. The runner
//! owns that loop: trigger, wait, and on job failure re-trigger under the
//! configured policy. A failed trigger call itself is never retried.

use log::{info, warn};
use std::future::Future;
use std::time::Duration;

use crate::error::Result;
use crate::tableau::jobs::models::Job;
use crate::tableau::TabClient;

/// Retry policy for the job runner
///
/// Bounds the number of trigger attempts and sets the pause between a job
/// failure and the next trigger.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: Option<u32>,
    backoff: Duration,
}

impl RetryPolicy {
    /// Allow up to `max_attempts` trigger attempts in total
    pub fn bounded(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: Some(max_attempts.max(1)),
            backoff,
        }
    }

    /// Retry until the job succeeds, with no attempt limit
    pub fn unbounded(backoff: Duration) -> Self {
        Self {
            max_attempts: None,
            backoff,
        }
    }

    pub fn backoff(&self) -> Duration {
        self.backoff
    }

    fn allows_another(&self, attempts_made: u32) -> bool {
        match self.max_attempts {
            None => true,
            Some(max) => attempts_made < max,
        }
    }
}

impl TabClient {
    /// Run a job to successful completion, re-triggering on job failure
    ///
    /// `trigger` starts a fresh job and returns its handle; each retry calls
    /// it again and the previous job ID is abandoned. Only job failures
    /// (`TabError::JobFailed`) are retried. Trigger errors, transport errors
    /// and API errors while polling propagate immediately, and once the
    /// policy is exhausted the last job failure is returned.
    pub async fn run_job_to_completion<F, Fut>(
        &self,
        policy: &RetryPolicy,
        poll_interval: Duration,
        trigger: F,
    ) -> Result<Job>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<Job>>,
    {
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            let job = trigger().await?;
            info!("Started job {} (attempt {})", job.id, attempts);

            match self.wait_for_job(&job.id, poll_interval).await {
                Ok(finished) => return Ok(finished),
                Err(err) if err.is_retryable() && policy.allows_another(attempts) => {
                    warn!("{}; triggering a new job in {:?}", err, policy.backoff);
                    tokio::time::sleep(policy.backoff).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
