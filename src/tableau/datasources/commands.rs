//! Data source command handlers

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;

use crate::error::Result;
use crate::output::{short_date, OutputFormat, Report};
use crate::tableau::datasources::models::PublishOptions;
use crate::tableau::traits::TabResource;
use crate::tableau::{content_file_name, RetryPolicy, TabClient};
use crate::ui;

/// List site data sources
pub async fn list(client: &TabClient, filter: Option<&str>, format: OutputFormat) -> Result<()> {
    let mut datasources = client.get_datasources().await?;
    if let Some(filter) = filter {
        datasources.retain(|d| d.matches_filter(filter));
    }
    datasources.sort_by(|a, b| a.name.cmp(&b.name));

    let mut report = Report::new(&["ID", "Name", "Type", "Project", "Owner Email", "Updated"]);
    for ds in &datasources {
        report.push_row(vec![
            ds.id.clone(),
            ds.name.clone(),
            ds.datasource_type().to_string(),
            ds.project_name().to_string(),
            ds.owner_email().to_string(),
            ds.updated_at.as_deref().map(short_date).unwrap_or_default(),
        ]);
    }
    report.print(format)
}

/// Refresh a data source extract and wait for the job to succeed
pub async fn refresh(
    client: &TabClient,
    needle: &str,
    policy: &RetryPolicy,
    poll_interval: Duration,
) -> Result<()> {
    let datasource = client.find_datasource(needle).await?;

    let spinner = ui::spinner(&format!("Refreshing data source '{}'", datasource.name));
    let result = client
        .run_job_to_completion(policy, poll_interval, || {
            client.refresh_datasource(&datasource.id)
        })
        .await;
    spinner.finish_and_clear();

    let job = result?;
    println!(
        "Data source '{}' refreshed (job {})",
        datasource.name, job.id
    );
    Ok(())
}

/// Change the owner of a data source
pub async fn set_owner(client: &TabClient, needle: &str, user: &str) -> Result<()> {
    let datasource = client.find_datasource(needle).await?;
    let user = client.find_user(user).await?;
    client
        .update_datasource_owner(&datasource.id, &user.id)
        .await?;
    println!(
        "Data source '{}' is now owned by '{}'",
        datasource.name, user.name
    );
    Ok(())
}

/// Delete a data source, asking for confirmation unless running in batch mode
pub async fn delete(client: &TabClient, needle: &str, batch: bool) -> Result<()> {
    let datasource = client.find_datasource(needle).await?;
    if !ui::confirm(
        &format!("Delete data source '{}' ({})?", datasource.name, datasource.id),
        batch,
    )? {
        println!("Aborted");
        return Ok(());
    }
    client.delete_datasource(&datasource.id).await?;
    println!("Deleted data source '{}'", datasource.name);
    Ok(())
}

/// Publish a data source file
pub async fn publish(client: &TabClient, options: &PublishOptions) -> Result<()> {
    let spinner = ui::spinner(&format!("Publishing '{}'", options.file.display()));
    let result = client.publish_datasource(options).await;
    spinner.finish_and_clear();

    let published = result?;
    println!(
        "Published data source '{}' ({})",
        published.name, published.id
    );
    Ok(())
}

/// Download the packaged file of one data source
pub async fn download(client: &TabClient, needle: &str, output: Option<&Path>) -> Result<()> {
    let datasource = client.find_datasource(needle).await?;
    let bytes = client.download_datasource(&datasource.id).await?;
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(content_file_name(&datasource.name, "tdsx")));
    tokio::fs::write(&path, &bytes).await?;
    println!(
        "Saved data source '{}' to {} ({} bytes)",
        datasource.name,
        path.display(),
        bytes.len()
    );
    Ok(())
}

/// Download every data source on the site into a directory
pub async fn backup(client: &TabClient, dir: &Path) -> Result<()> {
    let spinner = ui::spinner("Downloading data sources");
    let mut datasources = client.get_datasources().await?;
    datasources.sort_by(|a, b| a.name.cmp(&b.name));

    for ds in &datasources {
        let bytes = client.download_datasource(&ds.id).await?;
        let path = dir.join(content_file_name(&ds.name, "tdsx"));
        tokio::fs::write(&path, &bytes).await?;
        info!("Saved '{}' ({} bytes)", path.display(), bytes.len());
    }

    spinner.finish_and_clear();
    println!("Saved {} data sources to {}", datasources.len(), dir.display());
    Ok(())
}
