//! Data source API operations

use reqwest::multipart;

use crate::config::api;
use crate::error::{Result, TabError};
use crate::tableau::datasources::models::{
    Datasource, DatasourceResponse, DatasourcesResponse, PublishOptions,
};
use crate::tableau::jobs::JobResponse;
use crate::tableau::traits::TabResource;
use crate::tableau::{Job, TabClient};

impl TabClient {
    /// List all data sources on the site, with owner emails resolved
    pub async fn get_datasources(&self) -> Result<Vec<Datasource>> {
        let path = format!("{}?fields=_default_,owner.email", api::DATASOURCES);
        self.fetch_all_pages::<Datasource, DatasourcesResponse>(&path, "data sources")
            .await
    }

    /// Find a single data source by name or LUID
    pub async fn find_datasource(&self, needle: &str) -> Result<Datasource> {
        let datasources = self.get_datasources().await?;
        datasources
            .into_iter()
            .find(|d| d.matches(needle))
            .ok_or_else(|| TabError::NotFound(format!("data source '{}'", needle)))
    }

    /// Delete a data source
    pub async fn delete_datasource(&self, datasource_id: &str) -> Result<()> {
        let url = format!("{}{}/{}", self.site_url(), api::DATASOURCES, datasource_id);
        let response = self.delete(&url).send().await?;
        self.expect_success(response, "delete data source").await
    }

    /// Change the owner of a data source
    pub async fn update_datasource_owner(
        &self,
        datasource_id: &str,
        user_id: &str,
    ) -> Result<()> {
        let url = format!("{}{}/{}", self.site_url(), api::DATASOURCES, datasource_id);
        let payload = serde_json::json!({
            "datasource": { "owner": { "id": user_id } }
        });
        let response = self.put(&url).json(&payload).send().await?;
        self.expect_success(response, "update data source owner").await
    }

    /// Trigger an extract refresh, returning the job handle
    pub async fn refresh_datasource(&self, datasource_id: &str) -> Result<Job> {
        let url = format!(
            "{}{}/{}/refresh",
            self.site_url(),
            api::DATASOURCES,
            datasource_id
        );
        let response = self.post(&url).json(&serde_json::json!({})).send().await?;
        let body: JobResponse = self
            .parse_api_response(response, "refresh data source")
            .await?;
        Ok(body.job)
    }

    /// Download the packaged data source file
    pub async fn download_datasource(&self, datasource_id: &str) -> Result<Vec<u8>> {
        let url = format!(
            "{}{}/{}/content",
            self.site_url(),
            api::DATASOURCES,
            datasource_id
        );
        self.fetch_content(&url, "data source content").await
    }

    /// Publish a data source file in a single request
    pub async fn publish_datasource(&self, options: &PublishOptions) -> Result<Datasource> {
        let url = format!(
            "{}{}?datasourceType={}&overwrite={}",
            self.site_url(),
            api::DATASOURCES,
            options.file_type()?,
            options.overwrite
        );

        let payload = serde_json::json!({
            "datasource": {
                "name": options.publish_name()?,
                "project": { "id": options.project_id }
            }
        });
        let form = multipart::Form::new()
            .part(
                "request_payload",
                multipart::Part::text(payload.to_string()).mime_str("application/json")?,
            )
            .part(
                "tableau_datasource",
                multipart::Part::bytes(tokio::fs::read(&options.file).await?)
                    .file_name(options.file_name())
                    .mime_str("application/octet-stream")?,
            );

        let response = self.post(&url).multipart(form).send().await?;
        let body: DatasourceResponse = self
            .parse_api_response(response, "publish data source")
            .await?;
        Ok(body.datasource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_datasources_requests_owner_email() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/sites/site-1/datasources"))
            .and(query_param("fields", "_default_,owner.email"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "pagination": { "pageNumber": "1", "pageSize": "100", "totalAvailable": "1" },
                "datasources": { "datasource": [
                    {
                        "id": "ds-1",
                        "name": "Sales",
                        "owner": { "id": "u-1", "email": "jdoe@example.com" }
                    }
                ]}
            })))
            .mount(&mock_server)
            .await;

        let datasources = client.get_datasources().await.unwrap();
        assert_eq!(datasources.len(), 1);
        assert_eq!(datasources[0].owner_email(), "jdoe@example.com");
    }

    #[tokio::test]
    async fn test_refresh_datasource_returns_job() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/sites/site-1/datasources/ds-1/refresh"))
            .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
                "job": { "id": "job-1", "mode": "Asynchronous", "type": "RefreshExtract" }
            })))
            .mount(&mock_server)
            .await;

        let job = client.refresh_datasource("ds-1").await.unwrap();
        assert_eq!(job.id, "job-1");
        assert!(!job.is_finished());
    }

    #[tokio::test]
    async fn test_update_datasource_owner() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("PUT"))
            .and(path("/sites/site-1/datasources/ds-1"))
            .and(body_partial_json(serde_json::json!({
                "datasource": { "owner": { "id": "u-2" } }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "datasource": { "id": "ds-1", "name": "Sales" }
            })))
            .mount(&mock_server)
            .await;

        assert!(client.update_datasource_owner("ds-1", "u-2").await.is_ok());
    }

    #[tokio::test]
    async fn test_publish_datasource() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("sales.tdsx");
        let mut file = std::fs::File::create(&file_path).unwrap();
        file.write_all(b"not a real extract").unwrap();

        Mock::given(method("POST"))
            .and(path("/sites/site-1/datasources"))
            .and(query_param("datasourceType", "tdsx"))
            .and(query_param("overwrite", "true"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "datasource": { "id": "ds-9", "name": "sales" }
            })))
            .mount(&mock_server)
            .await;

        let options = PublishOptions {
            file: file_path,
            name: None,
            project_id: "p-1".to_string(),
            overwrite: true,
        };

        let published = client.publish_datasource(&options).await.unwrap();
        assert_eq!(published.id, "ds-9");
    }

    #[tokio::test]
    async fn test_download_datasource_returns_bytes() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/sites/site-1/datasources/ds-1/content"))
            .respond_with(
                ResponseTemplate::new(200).set_body_bytes(b"packaged extract".to_vec()),
            )
            .mount(&mock_server)
            .await;

        let bytes = client.download_datasource("ds-1").await.unwrap();
        assert_eq!(bytes, b"packaged extract");
    }

    #[tokio::test]
    async fn test_delete_datasource_not_authorized() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/sites/site-1/datasources/ds-1"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let err = client.delete_datasource("ds-1").await.unwrap_err();
        assert!(matches!(err, TabError::Api { status: 403, .. }));
    }
}
