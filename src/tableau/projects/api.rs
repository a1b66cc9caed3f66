//! Project API operations

use crate::config::api;
use crate::error::{Result, TabError};
use crate::tableau::projects::models::{Project, ProjectResponse, ProjectsResponse};
use crate::tableau::traits::TabResource;
use crate::tableau::TabClient;

impl TabClient {
    /// List all projects on the site
    pub async fn get_projects(&self) -> Result<Vec<Project>> {
        self.fetch_all_pages::<Project, ProjectsResponse>(api::PROJECTS, "projects")
            .await
    }

    /// Find a single project by name or LUID
    pub async fn find_project(&self, needle: &str) -> Result<Project> {
        let projects = self.get_projects().await?;
        projects
            .into_iter()
            .find(|p| p.matches(needle))
            .ok_or_else(|| TabError::NotFound(format!("project '{}'", needle)))
    }

    /// Create a project
    pub async fn create_project(
        &self,
        name: &str,
        description: Option<&str>,
        parent_project_id: Option<&str>,
    ) -> Result<Project> {
        let url = format!("{}{}", self.site_url(), api::PROJECTS);
        let mut project = serde_json::json!({ "name": name });
        if let Some(description) = description {
            project["description"] = serde_json::json!(description);
        }
        if let Some(parent) = parent_project_id {
            project["parentProjectId"] = serde_json::json!(parent);
        }
        let payload = serde_json::json!({ "project": project });

        let response = self.post(&url).json(&payload).send().await?;
        let body: ProjectResponse = self.parse_api_response(response, "create project").await?;
        Ok(body.project)
    }

    /// Update a project's name or description
    pub async fn update_project(
        &self,
        project_id: &str,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<()> {
        let url = format!("{}{}/{}", self.site_url(), api::PROJECTS, project_id);
        let mut project = serde_json::json!({});
        if let Some(name) = name {
            project["name"] = serde_json::json!(name);
        }
        if let Some(description) = description {
            project["description"] = serde_json::json!(description);
        }
        let payload = serde_json::json!({ "project": project });

        let response = self.put(&url).json(&payload).send().await?;
        self.expect_success(response, "update project").await
    }

    /// Delete a project and everything in it
    pub async fn delete_project(&self, project_id: &str) -> Result<()> {
        let url = format!("{}{}/{}", self.site_url(), api::PROJECTS, project_id);
        let response = self.delete(&url).send().await?;
        self.expect_success(response, "delete project").await
    }
}
