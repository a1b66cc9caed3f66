//! Subscription command handlers

use crate::error::Result;
use crate::output::{self, OutputFormat, Report};
use crate::tableau::TabClient;
use crate::ui;

/// List site subscriptions
pub async fn list(client: &TabClient, format: OutputFormat) -> Result<()> {
    let subscriptions = client.get_subscriptions().await?;

    let mut report = Report::new(&["ID", "Subject", "Suspended", "Content Type", "Schedule"]);
    for sub in &subscriptions {
        report.push_row(vec![
            sub.id.clone(),
            sub.subject().to_string(),
            if sub.is_suspended() { "Yes" } else { "No" }.to_string(),
            sub.content_type().to_string(),
            sub.schedule_name().to_string(),
        ]);
    }
    report.print(format)
}

/// Report all subscriptions with content and recipient context
pub async fn report(
    client: &TabClient,
    server: &str,
    site: &str,
    format: OutputFormat,
) -> Result<()> {
    let spinner = ui::spinner("Collecting subscriptions, content and recipients");

    let subscriptions = client.get_subscriptions().await?;
    let workbooks = client.get_workbooks().await?;
    let views = client.get_views().await?;
    let users = client.get_users().await?;

    spinner.finish_and_clear();

    output::subscriptions::subscriptions_report(
        &subscriptions,
        &workbooks,
        &views,
        &users,
        server,
        site,
    )
    .print(format)
}

/// Update a subscription's subject or resume a suspended one
pub async fn update(
    client: &TabClient,
    needle: &str,
    subject: Option<&str>,
    resume: bool,
) -> Result<()> {
    let subscription = client.find_subscription(needle).await?;
    let suspended = if resume { Some(false) } else { None };
    client
        .update_subscription(&subscription.id, subject, suspended)
        .await?;
    println!("Updated subscription '{}'", subscription.subject());
    Ok(())
}

/// Delete a subscription, asking for confirmation unless running in batch mode
pub async fn delete(client: &TabClient, needle: &str, batch: bool) -> Result<()> {
    let subscription = client.find_subscription(needle).await?;
    if !ui::confirm(
        &format!(
            "Delete subscription '{}' ({})?",
            subscription.subject(),
            subscription.id
        ),
        batch,
    )? {
        println!("Aborted");
        return Ok(());
    }
    client.delete_subscription(&subscription.id).await?;
    println!("Deleted subscription '{}'", subscription.subject());
    Ok(())
}
