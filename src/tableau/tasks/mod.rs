//! Scheduled tasks (extract refreshes and flow runs)

mod api;
mod commands;
mod models;

pub use commands::{list, suspended_report};
pub use models::{ExtractRefreshTask, FlowRunTask};
pub(crate) use models::{TaskItem, TasksResponse};
