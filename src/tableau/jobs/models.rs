//! Job models

use serde::Deserialize;

/// An asynchronous server job (extract refresh, flow run, ...)
///
/// A job is terminal once `completedAt` is set. `finishCode` is "0" for
/// success and non-zero for failure or cancellation.
#[derive(Deserialize, Debug, Clone)]
pub struct Job {
    pub id: String,
    pub mode: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "startedAt")]
    pub started_at: Option<String>,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<String>,
    #[serde(rename = "finishCode")]
    pub finish_code: Option<String>,
    /// Percent complete, string-encoded by the server
    pub progress: Option<String>,
}

impl Job {
    /// Whether the job has reached a terminal state
    pub fn is_finished(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Whether a finished job completed successfully
    pub fn succeeded(&self) -> bool {
        self.finish_code.as_deref() == Some("0")
    }

    pub fn finish_code(&self) -> &str {
        self.finish_code.as_deref().unwrap_or("")
    }

    pub fn job_type(&self) -> &str {
        self.job_type.as_deref().unwrap_or("")
    }

    pub fn progress(&self) -> &str {
        self.progress.as_deref().unwrap_or("0")
    }
}

/// Envelope for single-job responses (`{"job": {...}}`)
#[derive(Deserialize, Debug)]
pub(crate) struct JobResponse {
    pub job: Job,
}
