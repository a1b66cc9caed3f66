//! Site users

mod api;
mod commands;
mod models;

pub use commands::{create, delete, groups, inactive_report, list, ownership_report, set_site_role};
pub use models::User;
pub(crate) use models::{UserResponse, UsersResponse};
