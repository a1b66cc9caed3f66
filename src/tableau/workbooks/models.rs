//! Workbook models

use serde::Deserialize;

use crate::tableau::traits::{PagedResponse, Pagination, TabResource};
use crate::tableau::{OwnerRef, ProjectRef};

#[derive(Deserialize, Debug, Clone)]
pub struct Workbook {
    pub id: String,
    pub name: String,
    #[serde(rename = "contentUrl")]
    pub content_url: Option<String>,
    #[serde(rename = "webpageUrl")]
    pub webpage_url: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
    pub project: Option<ProjectRef>,
    pub owner: Option<OwnerRef>,
}

impl Workbook {
    pub fn content_url(&self) -> &str {
        self.content_url.as_deref().unwrap_or("")
    }

    pub fn webpage_url(&self) -> &str {
        self.webpage_url.as_deref().unwrap_or("")
    }

    pub fn project_name(&self) -> &str {
        self.project
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .unwrap_or("")
    }

    pub fn owner_id(&self) -> &str {
        self.owner.as_ref().map(|o| o.id()).unwrap_or("")
    }

    pub fn owner_email(&self) -> &str {
        self.owner.as_ref().map(|o| o.email()).unwrap_or("")
    }
}

impl TabResource for Workbook {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct WorkbookList {
    #[serde(default)]
    pub workbook: Vec<Workbook>,
}

/// Paged envelope: `{"pagination": {...}, "workbooks": {"workbook": [...]}}`
#[derive(Deserialize, Debug)]
pub(crate) struct WorkbooksResponse {
    pagination: Option<Pagination>,
    workbooks: Option<WorkbookList>,
}

impl PagedResponse<Workbook> for WorkbooksResponse {
    fn into_items(self) -> Vec<Workbook> {
        self.workbooks.unwrap_or_default().workbook
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}

/// Single-workbook envelope: `{"workbook": {...}}`
#[derive(Deserialize, Debug)]
pub(crate) struct WorkbookResponse {
    pub workbook: Workbook,
}
