//! Workbook API operations

use reqwest::multipart;

use crate::config::api;
use crate::error::{Result, TabError};
use crate::tableau::datasources::PublishOptions;
use crate::tableau::traits::TabResource;
use crate::tableau::workbooks::models::{Workbook, WorkbookResponse, WorkbooksResponse};
use crate::tableau::TabClient;

impl TabClient {
    /// List all workbooks on the site, with owner emails resolved
    pub async fn get_workbooks(&self) -> Result<Vec<Workbook>> {
        let path = format!("{}?fields=_default_,owner.email", api::WORKBOOKS);
        self.fetch_all_pages::<Workbook, WorkbooksResponse>(&path, "workbooks")
            .await
    }

    /// Find a single workbook by name or LUID
    pub async fn find_workbook(&self, needle: &str) -> Result<Workbook> {
        let workbooks = self.get_workbooks().await?;
        workbooks
            .into_iter()
            .find(|w| w.matches(needle))
            .ok_or_else(|| TabError::NotFound(format!("workbook '{}'", needle)))
    }

    /// Delete a workbook
    pub async fn delete_workbook(&self, workbook_id: &str) -> Result<()> {
        let url = format!("{}{}/{}", self.site_url(), api::WORKBOOKS, workbook_id);
        let response = self.delete(&url).send().await?;
        self.expect_success(response, "delete workbook").await
    }

    /// Change the owner of a workbook
    pub async fn update_workbook_owner(&self, workbook_id: &str, user_id: &str) -> Result<()> {
        let url = format!("{}{}/{}", self.site_url(), api::WORKBOOKS, workbook_id);
        let payload = serde_json::json!({
            "workbook": { "owner": { "id": user_id } }
        });
        let response = self.put(&url).json(&payload).send().await?;
        self.expect_success(response, "update workbook owner").await
    }

    /// Download the packaged workbook file with its extracts
    pub async fn download_workbook(&self, workbook_id: &str) -> Result<Vec<u8>> {
        let url = format!(
            "{}{}/{}/content",
            self.site_url(),
            api::WORKBOOKS,
            workbook_id
        );
        self.fetch_content(&url, "workbook content").await
    }

    /// Publish a workbook file in a single request
    pub async fn publish_workbook(&self, options: &PublishOptions) -> Result<Workbook> {
        let url = format!(
            "{}{}?workbookType={}&overwrite={}",
            self.site_url(),
            api::WORKBOOKS,
            options.file_type()?,
            options.overwrite
        );

        let payload = serde_json::json!({
            "workbook": {
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
                "tableau_workbook",
                multipart::Part::bytes(tokio::fs::read(&options.file).await?)
                    .file_name(options.file_name())
                    .mime_str("application/octet-stream")?,
            );

        let response = self.post(&url).multipart(form).send().await?;
        let body: WorkbookResponse = self.parse_api_response(response, "publish workbook").await?;
        Ok(body.workbook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_workbooks() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/sites/site-1/workbooks"))
            .and(query_param("fields", "_default_,owner.email"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "pagination": { "pageNumber": "1", "pageSize": "100", "totalAvailable": "1" },
                "workbooks": { "workbook": [
                    {
                        "id": "wb-1",
                        "name": "Quarterly Review",
                        "owner": { "id": "u-1", "email": "jdoe@example.com" }
                    }
                ]}
            })))
            .mount(&mock_server)
            .await;

        let workbooks = client.get_workbooks().await.unwrap();
        assert_eq!(workbooks.len(), 1);
        assert_eq!(workbooks[0].owner_email(), "jdoe@example.com");
    }

    #[tokio::test]
    async fn test_update_workbook_owner() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("PUT"))
            .and(path("/sites/site-1/workbooks/wb-1"))
            .and(body_partial_json(serde_json::json!({
                "workbook": { "owner": { "id": "u-2" } }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "workbook": { "id": "wb-1", "name": "Quarterly Review" }
            })))
            .mount(&mock_server)
            .await;

        assert!(client.update_workbook_owner("wb-1", "u-2").await.is_ok());
    }

    #[tokio::test]
    async fn test_publish_workbook() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("review.twbx");
        let mut file = std::fs::File::create(&file_path).unwrap();
        file.write_all(b"not a real workbook").unwrap();

        Mock::given(method("POST"))
            .and(path("/sites/site-1/workbooks"))
            .and(query_param("workbookType", "twbx"))
            .and(query_param("overwrite", "false"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "workbook": { "id": "wb-9", "name": "review" }
            })))
            .mount(&mock_server)
            .await;

        let options = PublishOptions {
            file: file_path,
            name: None,
            project_id: "p-1".to_string(),
            overwrite: false,
        };

        let published = client.publish_workbook(&options).await.unwrap();
        assert_eq!(published.id, "wb-9");
    }

    #[tokio::test]
    async fn test_download_workbook_error_includes_body() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/sites/site-1/workbooks/wb-1/content"))
            .respond_with(ResponseTemplate::new(403).set_body_string("not allowed"))
            .mount(&mock_server)
            .await;

        let err = client.download_workbook("wb-1").await.unwrap_err();
        match err {
            TabError::Api { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("not allowed"));
            }
            other => panic!("Expected TabError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_workbook() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/sites/site-1/workbooks/wb-1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        assert!(client.delete_workbook("wb-1").await.is_ok());
    }
}
