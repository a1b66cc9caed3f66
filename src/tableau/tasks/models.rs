//! Task models

use serde::{Deserialize, Deserializer};

use crate::tableau::traits::{PagedResponse, Pagination};
use crate::tableau::ContentRef;

/// Accept both number and string encodings of a count field
fn flexible_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().unwrap_or(0) as u32,
        serde_json::Value::String(s) => s.parse().unwrap_or(0),
        _ => 0,
    })
}

/// A scheduled extract refresh task
///
/// Targets either a data source or a workbook, never both.
#[derive(Deserialize, Debug, Clone)]
pub struct ExtractRefreshTask {
    pub id: Option<String>,
    #[serde(
        rename = "consecutiveFailedCount",
        deserialize_with = "flexible_count",
        default
    )]
    pub consecutive_failed_count: u32,
    pub datasource: Option<ContentRef>,
    pub workbook: Option<ContentRef>,
}

impl ExtractRefreshTask {
    /// LUID of the refreshed data source or workbook
    pub fn content_id(&self) -> &str {
        self.datasource
            .as_ref()
            .or(self.workbook.as_ref())
            .map(|c| c.id())
            .unwrap_or("")
    }

    pub fn extract_type(&self) -> &'static str {
        if self.datasource.is_some() {
            "Data source"
        } else {
            "Workbook"
        }
    }

    pub fn is_suspended(&self, failure_limit: u32) -> bool {
        self.consecutive_failed_count >= failure_limit
    }
}

/// A scheduled flow run task
#[derive(Deserialize, Debug, Clone)]
pub struct FlowRunTask {
    pub id: Option<String>,
    #[serde(
        rename = "consecutiveFailedCount",
        deserialize_with = "flexible_count",
        default
    )]
    pub consecutive_failed_count: u32,
    pub flow: Option<ContentRef>,
    pub schedule: Option<TaskSchedule>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct TaskSchedule {
    #[serde(rename = "type")]
    pub schedule_type: Option<String>,
}

impl FlowRunTask {
    pub fn flow_id(&self) -> &str {
        self.flow.as_ref().map(|f| f.id()).unwrap_or("")
    }

    pub fn flow_name(&self) -> &str {
        self.flow.as_ref().map(|f| f.name()).unwrap_or("")
    }

    /// System-scheduled runs belong to a linked task chain
    pub fn task_type(&self) -> &'static str {
        match self
            .schedule
            .as_ref()
            .and_then(|s| s.schedule_type.as_deref())
        {
            Some("System") => "Linked task",
            _ => "Flow",
        }
    }

    pub fn is_suspended(&self, failure_limit: u32) -> bool {
        self.consecutive_failed_count >= failure_limit
    }
}

/// One entry of the task list; exactly one variant is set
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct TaskItem {
    #[serde(rename = "extractRefresh")]
    pub extract_refresh: Option<ExtractRefreshTask>,
    #[serde(rename = "flowRun")]
    pub flow_run: Option<FlowRunTask>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct TaskList {
    #[serde(default)]
    pub task: Vec<TaskItem>,
}

/// Envelope: `{"tasks": {"task": [...]}}`, with or without pagination
#[derive(Deserialize, Debug)]
pub(crate) struct TasksResponse {
    pagination: Option<Pagination>,
    tasks: Option<TaskList>,
}

impl PagedResponse<TaskItem> for TasksResponse {
    fn into_items(self) -> Vec<TaskItem> {
        self.tasks.unwrap_or_default().task
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}
