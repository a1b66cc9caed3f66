//! Site projects

mod api;
mod commands;
mod models;

pub use commands::{create, delete, list, update};
pub use models::Project;
pub(crate) use models::{ProjectResponse, ProjectsResponse};
