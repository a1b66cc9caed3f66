//! Project command handlers

use crate::error::Result;
use crate::output::{OutputFormat, Report};
use crate::tableau::traits::TabResource;
use crate::tableau::TabClient;
use crate::ui;

/// List site projects
pub async fn list(client: &TabClient, filter: Option<&str>, format: OutputFormat) -> Result<()> {
    let mut projects = client.get_projects().await?;
    if let Some(filter) = filter {
        projects.retain(|p| p.matches_filter(filter));
    }
    projects.sort_by(|a, b| a.name.cmp(&b.name));

    let mut report = Report::new(&["ID", "Name", "Description", "Parent", "Permissions"]);
    for project in &projects {
        report.push_row(vec![
            project.id.clone(),
            project.name.clone(),
            project.description().to_string(),
            project.parent_project_id().to_string(),
            project
                .content_permissions
                .clone()
                .unwrap_or_default(),
        ]);
    }
    report.print(format)
}

/// Create a project
pub async fn create(
    client: &TabClient,
    name: &str,
    description: Option<&str>,
    parent: Option<&str>,
) -> Result<()> {
    let parent_id = match parent {
        Some(parent) => Some(client.find_project(parent).await?.id),
        None => None,
    };
    let project = client
        .create_project(name, description, parent_id.as_deref())
        .await?;
    println!("Created project '{}' ({})", project.name, project.id);
    Ok(())
}

/// Update a project's name or description
pub async fn update(
    client: &TabClient,
    needle: &str,
    name: Option<&str>,
    description: Option<&str>,
) -> Result<()> {
    let project = client.find_project(needle).await?;
    client.update_project(&project.id, name, description).await?;
    println!("Updated project '{}'", project.name);
    Ok(())
}

/// Delete a project, asking for confirmation unless running in batch mode
pub async fn delete(client: &TabClient, needle: &str, batch: bool) -> Result<()> {
    let project = client.find_project(needle).await?;
    if !ui::confirm(
        &format!(
            "Delete project '{}' ({}) and all content in it?",
            project.name, project.id
        ),
        batch,
    )? {
        println!("Aborted");
        return Ok(());
    }
    client.delete_project(&project.id).await?;
    println!("Deleted project '{}'", project.name);
    Ok(())
}
