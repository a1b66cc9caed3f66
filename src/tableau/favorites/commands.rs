//! Favorite command handlers

use crate::error::Result;
use crate::output::{OutputFormat, Report};
use crate::tableau::favorites::models::FavoriteKind;
use crate::tableau::traits::TabResource;
use crate::tableau::TabClient;

/// List a user's favorites
pub async fn list(client: &TabClient, user: &str, format: OutputFormat) -> Result<()> {
    let user = client.find_user(user).await?;
    let favorites = client.get_favorites(&user.id).await?;

    let mut report = Report::new(&["Label", "Kind", "Content ID", "Content Name"]);
    for favorite in &favorites {
        report.push_row(vec![
            favorite.label().to_string(),
            favorite.kind().to_string(),
            favorite.target().map(|t| t.id().to_string()).unwrap_or_default(),
            favorite
                .target()
                .map(|t| t.name().to_string())
                .unwrap_or_default(),
        ]);
    }
    report.print(format)
}

/// Add a content item to a user's favorites
pub async fn add(
    client: &TabClient,
    user: &str,
    kind: FavoriteKind,
    content: &str,
) -> Result<()> {
    let user = client.find_user(user).await?;
    let (content_id, content_name) = resolve_content(client, kind, content).await?;
    client
        .add_favorite(&user.id, &content_name, kind, &content_id)
        .await?;
    println!("Added '{}' to {}'s favorites", content_name, user.name);
    Ok(())
}

/// Remove a content item from a user's favorites
pub async fn remove(
    client: &TabClient,
    user: &str,
    kind: FavoriteKind,
    content: &str,
) -> Result<()> {
    let user = client.find_user(user).await?;
    let (content_id, content_name) = resolve_content(client, kind, content).await?;
    client.delete_favorite(&user.id, kind, &content_id).await?;
    println!("Removed '{}' from {}'s favorites", content_name, user.name);
    Ok(())
}

/// Resolve a content name or LUID to (id, name) for the given kind
async fn resolve_content(
    client: &TabClient,
    kind: FavoriteKind,
    needle: &str,
) -> Result<(String, String)> {
    Ok(match kind {
        FavoriteKind::Workbook => {
            let wb = client.find_workbook(needle).await?;
            (wb.id.clone(), wb.name.clone())
        }
        FavoriteKind::View => {
            let views = client.get_views().await?;
            let view = views
                .into_iter()
                .find(|v| v.matches(needle))
                .ok_or_else(|| {
                    crate::error::TabError::NotFound(format!("view '{}'", needle))
                })?;
            (view.id.clone(), view.name.clone())
        }
        FavoriteKind::Datasource => {
            let ds = client.find_datasource(needle).await?;
            (ds.id.clone(), ds.name.clone())
        }
        FavoriteKind::Flow => {
            let flow = client.find_flow(needle).await?;
            (flow.id.clone(), flow.name.clone())
        }
        FavoriteKind::Project => {
            let project = client.find_project(needle).await?;
            (project.id.clone(), project.name.clone())
        }
    })
}
