//! Workbook command handlers

use std::path::{Path, PathBuf};

use log::info;

use crate::error::Result;
use crate::output::{short_date, OutputFormat, Report};
use crate::tableau::datasources::PublishOptions;
use crate::tableau::traits::TabResource;
use crate::tableau::{content_file_name, TabClient};
use crate::ui;

/// List site workbooks
pub async fn list(client: &TabClient, filter: Option<&str>, format: OutputFormat) -> Result<()> {
    let mut workbooks = client.get_workbooks().await?;
    if let Some(filter) = filter {
        workbooks.retain(|w| w.matches_filter(filter));
    }
    workbooks.sort_by(|a, b| a.name.cmp(&b.name));

    let mut report = Report::new(&["ID", "Name", "Project", "Owner Email", "Updated"]);
    for wb in &workbooks {
        report.push_row(vec![
            wb.id.clone(),
            wb.name.clone(),
            wb.project_name().to_string(),
            wb.owner_email().to_string(),
            wb.updated_at.as_deref().map(short_date).unwrap_or_default(),
        ]);
    }
    report.print(format)
}

/// Change the owner of a workbook
pub async fn set_owner(client: &TabClient, needle: &str, user: &str) -> Result<()> {
    let workbook = client.find_workbook(needle).await?;
    let user = client.find_user(user).await?;
    client.update_workbook_owner(&workbook.id, &user.id).await?;
    println!(
        "Workbook '{}' is now owned by '{}'",
        workbook.name, user.name
    );
    Ok(())
}

/// Delete a workbook, asking for confirmation unless running in batch mode
pub async fn delete(client: &TabClient, needle: &str, batch: bool) -> Result<()> {
    let workbook = client.find_workbook(needle).await?;
    if !ui::confirm(
        &format!("Delete workbook '{}' ({})?", workbook.name, workbook.id),
        batch,
    )? {
        println!("Aborted");
        return Ok(());
    }
    client.delete_workbook(&workbook.id).await?;
    println!("Deleted workbook '{}'", workbook.name);
    Ok(())
}

/// Publish a workbook file
pub async fn publish(client: &TabClient, options: &PublishOptions) -> Result<()> {
    let spinner = ui::spinner(&format!("Publishing '{}'", options.file.display()));
    let result = client.publish_workbook(options).await;
    spinner.finish_and_clear();

    let published = result?;
    println!("Published workbook '{}' ({})", published.name, published.id);
    Ok(())
}

/// Download the packaged file of one workbook
pub async fn download(client: &TabClient, needle: &str, output: Option<&Path>) -> Result<()> {
    let workbook = client.find_workbook(needle).await?;
    let bytes = client.download_workbook(&workbook.id).await?;
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(content_file_name(&workbook.name, "twbx")));
    tokio::fs::write(&path, &bytes).await?;
    println!(
        "Saved workbook '{}' to {} ({} bytes)",
        workbook.name,
        path.display(),
        bytes.len()
    );
    Ok(())
}

/// Download every workbook on the site into a directory
pub async fn backup(client: &TabClient, dir: &Path) -> Result<()> {
    let spinner = ui::spinner("Downloading workbooks");
    let mut workbooks = client.get_workbooks().await?;
    workbooks.sort_by(|a, b| a.name.cmp(&b.name));

    for wb in &workbooks {
        let bytes = client.download_workbook(&wb.id).await?;
        let path = dir.join(content_file_name(&wb.name, "twbx"));
        tokio::fs::write(&path, &bytes).await?;
        info!("Saved '{}' ({} bytes)", path.display(), bytes.len());
    }

    spinner.finish_and_clear();
    println!("Saved {} workbooks to {}", workbooks.len(), dir.display());
    Ok(())
}
