//! Workbook views

mod api;
mod commands;
mod models;

pub use commands::list;
pub use models::View;
pub(crate) use models::ViewsResponse;
