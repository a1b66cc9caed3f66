//! Site groups and group membership

mod api;
mod commands;
mod models;

pub use commands::{
    add_user, create, delete, list, members, membership_report, remove_user, rename,
};
pub use models::Group;
pub(crate) use models::{GroupResponse, GroupsResponse};
