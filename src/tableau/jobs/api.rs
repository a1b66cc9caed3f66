//! Job status API operations

use log::debug;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TabError};
use crate::tableau::jobs::models::{Job, JobResponse};
use crate::tableau::TabClient;

impl TabClient {
    /// Fetch the current state of a job
    pub async fn get_job(&self, job_id: &str) -> Result<Job> {
        let url = format!("{}{}/{}", self.site_url(), api::JOBS, job_id);
        let response = self.get(&url).send().await?;
        let body: JobResponse = self.parse_api_response(response, "job status").await?;
        Ok(body.job)
    }

    /// Poll a job until it reaches a terminal state
    ///
    /// Returns the finished job on success. A job that finishes with a
    /// non-zero finish code surfaces as `TabError::JobFailed`; transport and
    /// API errors while polling propagate as-is.
    pub async fn wait_for_job(&self, job_id: &str, poll_interval: Duration) -> Result<Job> {
        loop {
            let job = self.get_job(job_id).await?;

            if job.is_finished() {
                if job.succeeded() {
                    debug!("Job {} finished successfully", job.id);
                    return Ok(job);
                }
                return Err(TabError::JobFailed {
                    job_id: job.id.clone(),
                    message: format!(
                        "{} job finished with code {}",
                        job.job_type(),
                        job.finish_code()
                    ),
                });
            }

            debug!("Job {} at {}%, polling again", job.id, job.progress());
            tokio::time::sleep(poll_interval).await;
        }
    }
}
