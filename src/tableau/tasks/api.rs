//! Task API operations

use crate::config::api;
use crate::error::Result;
use crate::tableau::tasks::models::{ExtractRefreshTask, FlowRunTask, TaskItem, TasksResponse};
use crate::tableau::TabClient;

impl TabClient {
    /// List all scheduled extract refresh tasks, with owner emails resolved
    pub async fn get_extract_refresh_tasks(&self) -> Result<Vec<ExtractRefreshTask>> {
        let path = format!("{}/extractRefreshes?fields=owner.email", api::TASKS);
        let items = self
            .fetch_all_pages::<TaskItem, TasksResponse>(&path, "extract refresh tasks")
            .await?;
        Ok(items.into_iter().filter_map(|t| t.extract_refresh).collect())
    }

    /// List all scheduled flow run tasks
    pub async fn get_flow_run_tasks(&self) -> Result<Vec<FlowRunTask>> {
        let path = format!("{}/runFlow", api::TASKS);
        let items = self
            .fetch_all_pages::<TaskItem, TasksResponse>(&path, "flow run tasks")
            .await?;
        Ok(items.into_iter().filter_map(|t| t.flow_run).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_extract_refresh_tasks() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        // The tasks endpoint answers in one page without a pagination block.
        Mock::given(method("GET"))
            .and(path("/sites/site-1/tasks/extractRefreshes"))
            .and(query_param("fields", "owner.email"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tasks": { "task": [
                    {
                        "extractRefresh": {
                            "id": "t-1",
                            "consecutiveFailedCount": 5,
                            "datasource": { "id": "ds-1" }
                        }
                    },
                    {
                        "extractRefresh": {
                            "id": "t-2",
                            "consecutiveFailedCount": 0,
                            "workbook": { "id": "wb-1" }
                        }
                    }
                ]}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let tasks = client.get_extract_refresh_tasks().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].content_id(), "ds-1");
        assert_eq!(tasks[1].extract_type(), "Workbook");
    }

    #[tokio::test]
    async fn test_get_flow_run_tasks() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/sites/site-1/tasks/runFlow"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tasks": { "task": [
                    {
                        "flowRun": {
                            "id": "t-3",
                            "consecutiveFailedCount": 5,
                            "flow": { "id": "f-1", "name": "daily-load" },
                            "schedule": { "type": "System" }
                        }
                    }
                ]}
            })))
            .mount(&mock_server)
            .await;

        let tasks = client.get_flow_run_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task_type(), "Linked task");
    }

    #[tokio::test]
    async fn test_empty_task_list() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/sites/site-1/tasks/runFlow"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tasks": {}
            })))
            .mount(&mock_server)
            .await;

        let tasks = client.get_flow_run_tasks().await.unwrap();
        assert!(tasks.is_empty());
    }
}
