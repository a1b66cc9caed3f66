//! Group command handlers

use crate::error::Result;
use crate::output::{self, OutputFormat, Report};
use crate::tableau::traits::TabResource;
use crate::tableau::TabClient;
use crate::ui;

/// List site groups
pub async fn list(client: &TabClient, filter: Option<&str>, format: OutputFormat) -> Result<()> {
    let mut groups = client.get_groups().await?;
    if let Some(filter) = filter {
        groups.retain(|g| g.matches_filter(filter));
    }
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

/// List the members of one group
pub async fn members(client: &TabClient, group: &str, format: OutputFormat) -> Result<()> {
    let group = client.find_group(group).await?;
    let mut members = client.get_group_members(&group.id).await?;
    members.sort_by(|a, b| a.name.cmp(&b.name));

    let mut report = Report::new(&["ID", "Name", "Full Name", "Email", "Site Role"]);
    for member in &members {
        report.push_row(vec![
            member.id.clone(),
            member.name.clone(),
            member.full_name().to_string(),
            member.email().to_string(),
            member.site_role().to_string(),
        ]);
    }
    report.print(format)
}

/// Create a local group
pub async fn create(client: &TabClient, name: &str) -> Result<()> {
    let group = client.create_group(name).await?;
    println!("Created group '{}' ({})", group.name, group.id);
    Ok(())
}

/// Rename a group
pub async fn rename(client: &TabClient, needle: &str, name: &str) -> Result<()> {
    let group = client.find_group(needle).await?;
    client.update_group(&group.id, name).await?;
    println!("Renamed group '{}' to '{}'", group.name, name);
    Ok(())
}

/// Delete a group, asking for confirmation unless running in batch mode
pub async fn delete(client: &TabClient, needle: &str, batch: bool) -> Result<()> {
    let group = client.find_group(needle).await?;
    if !ui::confirm(&format!("Delete group '{}' ({})?", group.name, group.id), batch)? {
        println!("Aborted");
        return Ok(());
    }
    client.delete_group(&group.id).await?;
    println!("Deleted group '{}'", group.name);
    Ok(())
}

/// Add a user to a group
pub async fn add_user(client: &TabClient, group: &str, user: &str) -> Result<()> {
    let group = client.find_group(group).await?;
    let user = client.find_user(user).await?;
    client.add_user_to_group(&group.id, &user.id).await?;
    println!("Added '{}' to group '{}'", user.name, group.name);
    Ok(())
}

/// Remove a user from a group
pub async fn remove_user(client: &TabClient, group: &str, user: &str) -> Result<()> {
    let group = client.find_group(group).await?;
    let user = client.find_user(user).await?;
    client.remove_user_from_group(&group.id, &user.id).await?;
    println!("Removed '{}' from group '{}'", user.name, group.name);
    Ok(())
}

/// Report every group with its resolved membership
pub async fn membership_report(client: &TabClient, format: OutputFormat) -> Result<()> {
    let spinner = ui::spinner("Collecting groups and members");

    let mut groups = client.get_groups().await?;
    groups.sort_by(|a, b| a.name.cmp(&b.name));

    let mut resolved = Vec::with_capacity(groups.len());
    for group in groups {
        let members = client.get_group_members(&group.id).await?;
        resolved.push((group, members));
    }

    spinner.finish_and_clear();
    output::groups::membership_report(&resolved).print(format)
}
