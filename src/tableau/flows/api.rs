//! Flow API operations

use crate::config::api;
use crate::error::{Result, TabError};
use crate::tableau::flows::models::{Flow, FlowsResponse};
use crate::tableau::jobs::JobResponse;
use crate::tableau::traits::TabResource;
use crate::tableau::{Job, TabClient};

impl TabClient {
    /// List all flows on the site, with owner emails resolved
    pub async fn get_flows(&self) -> Result<Vec<Flow>> {
        let path = format!("{}?fields=_default_,owner.email", api::FLOWS);
        self.fetch_all_pages::<Flow, FlowsResponse>(&path, "flows")
            .await
    }

    /// Find a single flow by name or LUID
    pub async fn find_flow(&self, needle: &str) -> Result<Flow> {
        let flows = self.get_flows().await?;
        flows
            .into_iter()
            .find(|f| f.matches(needle))
            .ok_or_else(|| TabError::NotFound(format!("flow '{}'", needle)))
    }

    /// Trigger a flow run, returning the job handle
    pub async fn run_flow(&self, flow_id: &str) -> Result<Job> {
        let url = format!("{}{}/{}/run", self.site_url(), api::FLOWS, flow_id);
        let response = self.post(&url).json(&serde_json::json!({})).send().await?;
        let body: JobResponse = self.parse_api_response(response, "run flow").await?;
        Ok(body.job)
    }

    /// Download the packaged flow file
    pub async fn download_flow(&self, flow_id: &str) -> Result<Vec<u8>> {
        let url = format!("{}{}/{}/content", self.site_url(), api::FLOWS, flow_id);
        self.fetch_content(&url, "flow content").await
    }

    /// Delete a flow
    pub async fn delete_flow(&self, flow_id: &str) -> Result<()> {
        let url = format!("{}{}/{}", self.site_url(), api::FLOWS, flow_id);
        let response = self.delete(&url).send().await?;
        self.expect_success(response, "delete flow").await
    }

    /// Change the owner of a flow
    pub async fn update_flow_owner(&self, flow_id: &str, user_id: &str) -> Result<()> {
        let url = format!("{}{}/{}", self.site_url(), api::FLOWS, flow_id);
        let payload = serde_json::json!({
            "flow": { "owner": { "id": user_id } }
        });
        let response = self.put(&url).json(&payload).send().await?;
        self.expect_success(response, "update flow owner").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_flows() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/sites/site-1/flows"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "pagination": { "pageNumber": "1", "pageSize": "100", "totalAvailable": "2" },
                "flows": { "flow": [
                    { "id": "f-1", "name": "daily-load" },
                    { "id": "f-2", "name": "weekly-cleanup" }
                ]}
            })))
            .mount(&mock_server)
            .await;

        let flows = client.get_flows().await.unwrap();
        assert_eq!(flows.len(), 2);
    }

    #[tokio::test]
    async fn test_run_flow_returns_job() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/sites/site-1/flows/f-1/run"))
            .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
                "job": { "id": "job-1", "mode": "Asynchronous", "type": "RunFlow" }
            })))
            .mount(&mock_server)
            .await;

        let job = client.run_flow("f-1").await.unwrap();
        assert_eq!(job.id, "job-1");
        assert_eq!(job.job_type(), "RunFlow");
    }

    #[tokio::test]
    async fn test_update_flow_owner() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("PUT"))
            .and(path("/sites/site-1/flows/f-1"))
            .and(body_partial_json(serde_json::json!({
                "flow": { "owner": { "id": "u-2" } }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "flow": { "id": "f-1", "name": "daily-load" }
            })))
            .mount(&mock_server)
            .await;

        assert!(client.update_flow_owner("f-1", "u-2").await.is_ok());
    }

    #[tokio::test]
    async fn test_download_flow_returns_bytes() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/sites/site-1/flows/f-1/content"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"packaged flow".to_vec()))
            .mount(&mock_server)
            .await;

        let bytes = client.download_flow("f-1").await.unwrap();
        assert_eq!(bytes, b"packaged flow");
    }

    #[tokio::test]
    async fn test_run_flow_not_found() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/sites/site-1/flows/f-gone/run"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = client.run_flow("f-gone").await.unwrap_err();
        assert!(matches!(err, TabError::Api { status: 404, .. }));
    }
}
