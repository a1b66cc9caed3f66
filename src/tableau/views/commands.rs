//! View command handlers

use crate::error::Result;
use crate::output::{OutputFormat, Report};
use crate::tableau::traits::TabResource;
use crate::tableau::TabClient;

/// List site views
pub async fn list(client: &TabClient, filter: Option<&str>, format: OutputFormat) -> Result<()> {
    let mut views = client.get_views().await?;
    if let Some(filter) = filter {
        views.retain(|v| v.matches_filter(filter));
    }
    views.sort_by(|a, b| a.name.cmp(&b.name));

    let mut report = Report::new(&["ID", "Name", "Workbook", "Content URL", "Owner Email"]);
    for view in &views {
        report.push_row(vec![
            view.id.clone(),
            view.name.clone(),
            view.workbook_name().to_string(),
            view.content_url().to_string(),
            view.owner_email().to_string(),
        ]);
    }
    report.print(format)
}
