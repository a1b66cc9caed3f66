//! Asynchronous job tracking and the retrying job runner

mod api;
mod models;
mod retry;

pub use models::Job;
pub(crate) use models::JobResponse;
pub use retry::RetryPolicy;
