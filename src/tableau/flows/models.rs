//! Flow models

use serde::Deserialize;

use crate::tableau::traits::{PagedResponse, Pagination, TabResource};
use crate::tableau::{OwnerRef, ProjectRef};

#[derive(Deserialize, Debug, Clone)]
pub struct Flow {
    pub id: String,
    pub name: String,
    #[serde(rename = "webpageUrl")]
    pub webpage_url: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
    pub project: Option<ProjectRef>,
    pub owner: Option<OwnerRef>,
}

impl Flow {
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

impl TabResource for Flow {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct FlowList {
    #[serde(default)]
    pub flow: Vec<Flow>,
}

/// Paged envelope: `{"pagination": {...}, "flows": {"flow": [...]}}`
#[derive(Deserialize, Debug)]
pub(crate) struct FlowsResponse {
    pagination: Option<Pagination>,
    flows: Option<FlowList>,
}

impl PagedResponse<Flow> for FlowsResponse {
    fn into_items(self) -> Vec<Flow> {
        self.flows.unwrap_or_default().flow
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}
