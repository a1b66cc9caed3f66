//! Project models

use serde::Deserialize;

use crate::tableau::traits::{PagedResponse, Pagination, TabResource};

#[derive(Deserialize, Debug, Clone)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "parentProjectId")]
    pub parent_project_id: Option<String>,
    #[serde(rename = "contentPermissions")]
    pub content_permissions: Option<String>,
}

impl Project {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn parent_project_id(&self) -> &str {
        self.parent_project_id.as_deref().unwrap_or("")
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_project_id.is_none()
    }
}

impl TabResource for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct ProjectList {
    #[serde(default)]
    pub project: Vec<Project>,
}

/// Paged envelope: `{"pagination": {...}, "projects": {"project": [...]}}`
#[derive(Deserialize, Debug)]
pub(crate) struct ProjectsResponse {
    pagination: Option<Pagination>,
    projects: Option<ProjectList>,
}

impl PagedResponse<Project> for ProjectsResponse {
    fn into_items(self) -> Vec<Project> {
        self.projects.unwrap_or_default().project
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}

/// Single-project envelope: `{"project": {...}}`
#[derive(Deserialize, Debug)]
pub(crate) struct ProjectResponse {
    pub project: Project,
}
