//! Task command handlers

use std::path::Path;

use log::info;

use crate::error::Result;
use crate::output::suspended::SuspendedTasks;
use crate::output::{self, OutputFormat, Report};
use crate::tableau::TabClient;
use crate::ui;

/// List scheduled extract refresh and flow run tasks
pub async fn list(client: &TabClient, format: OutputFormat) -> Result<()> {
    let extracts = client.get_extract_refresh_tasks().await?;
    let flow_runs = client.get_flow_run_tasks().await?;

    let mut report = Report::new(&["Task ID", "Type", "Content ID", "Content Name", "Failures"]);
    for task in &extracts {
        report.push_row(vec![
            task.id.clone().unwrap_or_default(),
            format!("Extract refresh ({})", task.extract_type()),
            task.content_id().to_string(),
            String::new(),
            task.consecutive_failed_count.to_string(),
        ]);
    }
    for task in &flow_runs {
        report.push_row(vec![
            task.id.clone().unwrap_or_default(),
            task.task_type().to_string(),
            task.flow_id().to_string(),
            task.flow_name().to_string(),
            task.consecutive_failed_count.to_string(),
        ]);
    }
    report.print(format)
}

/// Report all suspended tasks with owner context, optionally writing the
/// HTML reminder body to a file
pub async fn suspended_report(
    client: &TabClient,
    server: &str,
    site: &str,
    failure_limit: u32,
    format: OutputFormat,
    html_path: Option<&Path>,
) -> Result<()> {
    let spinner = ui::spinner("Collecting suspended tasks and owner context");

    let extract_tasks: Vec<_> = client
        .get_extract_refresh_tasks()
        .await?
        .into_iter()
        .filter(|t| t.is_suspended(failure_limit))
        .collect();
    let flow_tasks: Vec<_> = client
        .get_flow_run_tasks()
        .await?
        .into_iter()
        .filter(|t| t.is_suspended(failure_limit))
        .collect();
    let subscriptions = client.get_subscriptions().await?;

    // Context joins need the full content lists.
    let datasources = client.get_datasources().await?;
    let workbooks = client.get_workbooks().await?;
    let flows = client.get_flows().await?;
    let views = client.get_views().await?;
    let users = client.get_users().await?;

    spinner.finish_and_clear();

    let suspended = SuspendedTasks {
        extracts: output::suspended::extract_report(&extract_tasks, &datasources, &workbooks),
        flows: output::suspended::flow_report(&flow_tasks, &flows),
        subscriptions: output::suspended::subscription_report(
            &subscriptions,
            &workbooks,
            &views,
            &users,
            server,
            site,
        ),
    };

    if suspended.total() == 0 {
        println!("No extract refresh, flow or subscription tasks are currently suspended.");
        return Ok(());
    }

    println!("Extract refresh tasks ({})", suspended.extracts.len());
    suspended.extracts.print(format)?;
    println!("\nFlow tasks ({})", suspended.flows.len());
    suspended.flows.print(format)?;
    println!("\nSubscription tasks ({})", suspended.subscriptions.len());
    suspended.subscriptions.print(format)?;

    println!("\nRecipients: {}", suspended.recipients().join("; "));

    if let Some(path) = html_path {
        let body = output::html::reminder_body(&suspended);
        std::fs::write(path, body)?;
        info!("Wrote HTML reminder to {}", path.display());
        println!("Wrote HTML reminder to {}", path.display());
    }

    Ok(())
}
