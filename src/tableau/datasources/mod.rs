//! Published data sources

mod api;
mod commands;
mod models;

pub use commands::{backup, delete, download, list, publish, refresh, set_owner};
pub use models::{Datasource, PublishOptions};
pub(crate) use models::{DatasourceResponse, DatasourcesResponse};
