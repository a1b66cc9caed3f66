//! Prep flows

mod api;
mod commands;
mod models;

pub use commands::{backup, delete, download, list, run, run_all, set_owner};
pub use models::Flow;
pub(crate) use models::FlowsResponse;
