//! User command handlers

use std::collections::HashSet;

use chrono::Utc;

use crate::error::Result;
use crate::output::{self, OutputFormat, Report};
use crate::tableau::traits::TabResource;
use crate::tableau::TabClient;
use crate::ui;

/// List site users
pub async fn list(client: &TabClient, filter: Option<&str>, format: OutputFormat) -> Result<()> {
    let mut users = client.get_users().await?;
    if let Some(filter) = filter {
        users.retain(|u| u.matches_filter(filter));
    }
    users.sort_by(|a, b| a.name.cmp(&b.name));

    let mut report = Report::new(&["ID", "Name", "Full Name", "Email", "Site Role", "Domain"]);
    for user in &users {
        report.push_row(vec![
            user.id.clone(),
            user.name.clone(),
            user.full_name().to_string(),
            user.email().to_string(),
            user.site_role().to_string(),
            user.domain_name().to_string(),
        ]);
    }
    report.print(format)
}

/// List the groups one user belongs to
pub async fn groups(client: &TabClient, needle: &str, format: OutputFormat) -> Result<()> {
    let user = client.find_user(needle).await?;
    let mut groups = client.get_user_groups(&user.id).await?;
    groups.sort_by(|a, b| a.name.cmp(&b.name));

    let mut report = Report::new(&["ID", "Name", "Domain"]);
    for group in &groups {
        report.push_row(vec![
            group.id.clone(),
            group.name.clone(),
            group.domain_name().to_string(),
        ]);
    }
    report.print(format)
}

/// Add a user to the site
pub async fn create(client: &TabClient, name: &str, site_role: &str) -> Result<()> {
    let user = client.add_user(name, site_role).await?;
    println!("Added user '{}' ({}) as {}", user.name, user.id, site_role);
    Ok(())
}

/// Change a user's site role
pub async fn set_site_role(client: &TabClient, needle: &str, site_role: &str) -> Result<()> {
    let user = client.find_user(needle).await?;
    client.update_user_site_role(&user.id, site_role).await?;
    println!("User '{}' is now {}", user.name, site_role);
    Ok(())
}

/// Remove a user, asking for confirmation unless running in batch mode
pub async fn delete(client: &TabClient, needle: &str, batch: bool) -> Result<()> {
    let user = client.find_user(needle).await?;
    if !ui::confirm(&format!("Remove user '{}' ({})?", user.name, user.id), batch)? {
        println!("Aborted");
        return Ok(());
    }
    client.remove_user(&user.id).await?;
    println!("Removed user '{}'", user.name);
    Ok(())
}

/// Report all users with a flag for those owning published content
pub async fn ownership_report(client: &TabClient, format: OutputFormat) -> Result<()> {
    let spinner = ui::spinner("Collecting users and content owners");

    let users = client.get_users().await?;
    let workbooks = client.get_workbooks().await?;
    let datasources = client.get_datasources().await?;
    let flows = client.get_flows().await?;

    spinner.finish_and_clear();

    let owner_ids: HashSet<String> = workbooks
        .iter()
        .map(|w| w.owner_id())
        .chain(datasources.iter().map(|d| d.owner_id()))
        .chain(flows.iter().map(|f| f.owner_id()))
        .filter(|id| !id.is_empty())
        .map(|id| id.to_string())
        .collect();

    output::users::ownership_report(&users, &owner_ids).print(format)
}

/// Report users with no recent sign-in, optionally unlicensing them
///
/// A user who never signed in counts as inactive. The write-back sets the
/// site role to Unlicensed, which keeps the account and its content but
/// frees the seat.
pub async fn inactive_report(
    client: &TabClient,
    days: u32,
    unlicense: bool,
    batch: bool,
    format: OutputFormat,
) -> Result<()> {
    let users = client.get_users().await?;
    let cutoff = Utc::now() - chrono::Duration::days(i64::from(days));
    let report = output::users::inactive_report(&users, cutoff);
    report.print(format)?;

    if !unlicense || report.is_empty() {
        return Ok(());
    }
    if !ui::confirm(
        &format!("Set {} inactive users to Unlicensed?", report.len()),
        batch,
    )? {
        println!("Aborted");
        return Ok(());
    }

    let ids: Vec<String> = report.column("ID").iter().map(|id| id.to_string()).collect();
    for id in &ids {
        client.update_user_site_role(id, "Unlicensed").await?;
    }
    println!("Unlicensed {} users", ids.len());
    Ok(())
}
