//! Tableau REST API client module
//!
//! Typed wrappers over the site-scoped REST endpoints: one submodule per
//! resource collection, plus the job runner and the auth/session layer.

mod auth;
mod client;
mod credentials;
pub mod datasources;
pub mod favorites;
pub mod flows;
pub mod groups;
pub mod jobs;
pub mod projects;
pub mod subscriptions;
pub mod tasks;
pub mod traits;
pub mod users;
pub mod views;
pub mod workbooks;

use serde::Deserialize;

pub use auth::ServerInfo;
pub use client::TabClient;
pub use credentials::TokenResolver;
pub use datasources::{Datasource, PublishOptions};
pub use favorites::{Favorite, FavoriteKind};
pub use flows::Flow;
pub use groups::Group;
pub use jobs::{Job, RetryPolicy};
pub use projects::Project;
pub use subscriptions::Subscription;
pub use tasks::{ExtractRefreshTask, FlowRunTask};
pub use traits::{PagedResponse, Pagination, TabResource};
pub use users::User;
pub use views::View;
pub use workbooks::Workbook;

/// Build a safe local file name for downloaded content
pub(crate) fn content_file_name(name: &str, extension: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
        .collect();
    format!("{}.{}", safe, extension)
}

/// Reference to the owning user embedded in content responses
#[derive(Deserialize, Debug, Clone, Default)]
pub struct OwnerRef {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Reference to the containing project embedded in content responses
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ProjectRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Generic id/name reference used by task and relationship payloads
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ContentRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl ContentRef {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

impl OwnerRef {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
