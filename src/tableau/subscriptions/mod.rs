//! Subscriptions

mod api;
mod commands;
mod models;

pub use commands::{delete, list, report, update};
pub use models::Subscription;
pub(crate) use models::SubscriptionsResponse;
