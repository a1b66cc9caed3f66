//! Published workbooks

mod api;
mod commands;
mod models;

pub use commands::{backup, delete, download, list, publish, set_owner};
pub use models::Workbook;
pub(crate) use models::{WorkbookResponse, WorkbooksResponse};
