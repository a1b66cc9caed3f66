//! Flow command handlers

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;

use crate::error::Result;
use crate::output::{short_date, OutputFormat, Report};
use crate::tableau::traits::TabResource;
use crate::tableau::{content_file_name, Flow, RetryPolicy, TabClient};
use crate::ui;

/// List site flows
pub async fn list(client: &TabClient, filter: Option<&str>, format: OutputFormat) -> Result<()> {
    let mut flows = client.get_flows().await?;
    if let Some(filter) = filter {
        flows.retain(|f| f.matches_filter(filter));
    }
    flows.sort_by(|a, b| a.name.cmp(&b.name));

    let mut report = Report::new(&["ID", "Name", "Project", "Owner Email", "Updated"]);
    for flow in &flows {
        report.push_row(vec![
            flow.id.clone(),
            flow.name.clone(),
            flow.project_name().to_string(),
            flow.owner_email().to_string(),
            flow.updated_at.as_deref().map(short_date).unwrap_or_default(),
        ]);
    }
    report.print(format)
}

/// Run the named flows in the given order, each to completion
///
/// Order matters when one flow feeds the next, so a flow is triggered only
/// after the previous one fully succeeded, retries included.
pub async fn run(
    client: &TabClient,
    needles: &[String],
    policy: &RetryPolicy,
    poll_interval: Duration,
) -> Result<()> {
    for needle in needles {
        let flow = client.find_flow(needle).await?;
        run_one(client, &flow, policy, poll_interval).await?;
    }
    Ok(())
}

/// Run every flow matching the filter, one at a time in name order
///
/// Downstream flows feed on upstream output, so each flow must fully succeed
/// (retries included) before the next one is triggered.
pub async fn run_all(
    client: &TabClient,
    filter: Option<&str>,
    policy: &RetryPolicy,
    poll_interval: Duration,
) -> Result<()> {
    let mut flows = client.get_flows().await?;
    if let Some(filter) = filter {
        flows.retain(|f| f.matches_filter(filter));
    }
    flows.sort_by(|a, b| a.name.cmp(&b.name));

    info!("Running {} flows in order", flows.len());
    for flow in &flows {
        run_one(client, flow, policy, poll_interval).await?;
    }
    Ok(())
}

async fn run_one(
    client: &TabClient,
    flow: &Flow,
    policy: &RetryPolicy,
    poll_interval: Duration,
) -> Result<()> {
    let spinner = ui::spinner(&format!("Running flow '{}'", flow.name));
    let result = client
        .run_job_to_completion(policy, poll_interval, || client.run_flow(&flow.id))
        .await;
    spinner.finish_and_clear();

    let job = result?;
    println!("Flow '{}' finished (job {})", flow.name, job.id);
    Ok(())
}

/// Download the packaged file of one flow
pub async fn download(client: &TabClient, needle: &str, output: Option<&Path>) -> Result<()> {
    let flow = client.find_flow(needle).await?;
    let bytes = client.download_flow(&flow.id).await?;
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(content_file_name(&flow.name, "tflx")));
    tokio::fs::write(&path, &bytes).await?;
    println!(
        "Saved flow '{}' to {} ({} bytes)",
        flow.name,
        path.display(),
        bytes.len()
    );
    Ok(())
}

/// Download every flow on the site into a directory
pub async fn backup(client: &TabClient, dir: &Path) -> Result<()> {
    let spinner = ui::spinner("Downloading flows");
    let mut flows = client.get_flows().await?;
    flows.sort_by(|a, b| a.name.cmp(&b.name));

    for flow in &flows {
        let bytes = client.download_flow(&flow.id).await?;
        let path = dir.join(content_file_name(&flow.name, "tflx"));
        tokio::fs::write(&path, &bytes).await?;
        info!("Saved '{}' ({} bytes)", path.display(), bytes.len());
    }

    spinner.finish_and_clear();
    println!("Saved {} flows to {}", flows.len(), dir.display());
    Ok(())
}

/// Change the owner of a flow
pub async fn set_owner(client: &TabClient, needle: &str, user: &str) -> Result<()> {
    let flow = client.find_flow(needle).await?;
    let user = client.find_user(user).await?;
    client.update_flow_owner(&flow.id, &user.id).await?;
    println!("Flow '{}' is now owned by '{}'", flow.name, user.name);
    Ok(())
}

/// Delete a flow, asking for confirmation unless running in batch mode
pub async fn delete(client: &TabClient, needle: &str, batch: bool) -> Result<()> {
    let flow = client.find_flow(needle).await?;
    if !ui::confirm(&format!("Delete flow '{}' ({})?", flow.name, flow.id), batch)? {
        println!("Aborted");
        return Ok(());
    }
    client.delete_flow(&flow.id).await?;
    println!("Deleted flow '{}'", flow.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn finished_job(id: &str) -> serde_json::Value {
        serde_json::json!({
            "job": {
                "id": id,
                "type": "RunFlow",
                "completedAt": "2026-08-24T10:05:00Z",
                "finishCode": "0"
            }
        })
    }

    #[tokio::test]
    async fn test_run_triggers_flows_in_argument_order() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/sites/site-1/flows"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "pagination": { "pageNumber": "1", "pageSize": "100", "totalAvailable": "2" },
                "flows": { "flow": [
                    { "id": "f-a", "name": "alpha" },
                    { "id": "f-b", "name": "beta" }
                ]}
            })))
            .mount(&mock_server)
            .await;

        for (flow_id, job_id) in [("f-a", "job-a"), ("f-b", "job-b")] {
            Mock::given(method("POST"))
                .and(path(format!("/sites/site-1/flows/{}/run", flow_id)))
                .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
                    "job": { "id": job_id, "type": "RunFlow" }
                })))
                .expect(1)
                .mount(&mock_server)
                .await;

            Mock::given(method("GET"))
                .and(path(format!("/sites/site-1/jobs/{}", job_id)))
                .respond_with(ResponseTemplate::new(200).set_body_json(finished_job(job_id)))
                .mount(&mock_server)
                .await;
        }

        let names = vec!["beta".to_string(), "alpha".to_string()];
        run(
            &client,
            &names,
            &RetryPolicy::bounded(1, Duration::ZERO),
            Duration::from_millis(1),
        )
        .await
        .unwrap();

        // "beta" was named first, so f-b runs before f-a despite alpha
        // sorting first by name.
        let triggers: Vec<String> = mock_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .filter(|r| r.method.as_str() == "POST")
            .map(|r| r.url.path().to_string())
            .collect();
        assert_eq!(
            triggers,
            vec!["/sites/site-1/flows/f-b/run", "/sites/site-1/flows/f-a/run"]
        );
    }
}
