use std::fmt;

/// Custom error type for Tableau operations
#[derive(Debug)]
pub enum TabError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Sign-in or authorization failure
    Auth(String),
    /// A name or ID filter matched nothing on the server
    NotFound(String),
    /// Remote job failed after exhausting the retry policy
    JobFailed { job_id: String, message: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TabError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            TabError::Auth(msg) => write!(f, "Authentication failed: {}", msg),
            TabError::NotFound(msg) => write!(f, "Not found: {}", msg),
            TabError::JobFailed { job_id, message } => {
                write!(f, "Job '{}' failed: {}", job_id, message)
            }
            TabError::TokenNotFound(msg) => write!(f, "{}", msg),
            TabError::Credentials(msg) => write!(f, "{}", msg),
            TabError::Json(msg) => write!(f, "JSON error: {}", msg),
            TabError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for TabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TabError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TabError {
    fn from(err: reqwest::Error) -> Self {
        TabError::Http(err)
    }
}

impl From<serde_json::Error> for TabError {
    fn from(err: serde_json::Error) -> Self {
        TabError::Json(err.to_string())
    }
}

impl From<std::io::Error> for TabError {
    fn from(err: std::io::Error) -> Self {
        TabError::Config(err.to_string())
    }
}

impl TabError {
    /// Whether the job retry loop may re-trigger after this error.
    ///
    /// Only remote-job failures are retryable; auth and transport errors
    /// abort the loop immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TabError::JobFailed { .. })
    }
}

/// Result type alias for Tableau operations
pub type Result<T> = std::result::Result<T, TabError>;
