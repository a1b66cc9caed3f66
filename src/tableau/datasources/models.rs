//! Data source models

use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{Result, TabError};
use crate::tableau::traits::{PagedResponse, Pagination, TabResource};
use crate::tableau::{OwnerRef, ProjectRef};

#[derive(Deserialize, Debug, Clone)]
pub struct Datasource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub datasource_type: Option<String>,
    #[serde(rename = "contentUrl")]
    pub content_url: Option<String>,
    #[serde(rename = "webpageUrl")]
    pub webpage_url: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
    pub project: Option<ProjectRef>,
    pub owner: Option<OwnerRef>,
}

impl Datasource {
    pub fn datasource_type(&self) -> &str {
        self.datasource_type.as_deref().unwrap_or("")
    }

    pub fn webpage_url(&self) -> &str {
        self.webpage_url.as_deref().unwrap_or("")
    }

    pub fn project_name(&self) -> &str {
        self.project
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .unwrap_or("")
    }

    pub fn owner_id(&self) -> &str {
        self.owner.as_ref().map(|o| o.id()).unwrap_or("")
    }

    pub fn owner_email(&self) -> &str {
        self.owner.as_ref().map(|o| o.email()).unwrap_or("")
    }
}

impl TabResource for Datasource {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct DatasourceList {
    #[serde(default)]
    pub datasource: Vec<Datasource>,
}

/// Paged envelope: `{"pagination": {...}, "datasources": {"datasource": [...]}}`
#[derive(Deserialize, Debug)]
pub(crate) struct DatasourcesResponse {
    pagination: Option<Pagination>,
    datasources: Option<DatasourceList>,
}

impl PagedResponse<Datasource> for DatasourcesResponse {
    fn into_items(self) -> Vec<Datasource> {
        self.datasources.unwrap_or_default().datasource
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}

/// Single-datasource envelope: `{"datasource": {...}}`
#[derive(Deserialize, Debug)]
pub(crate) struct DatasourceResponse {
    pub datasource: Datasource,
}

/// Options for publishing a data source or workbook file
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Local file to upload (.tds, .tdsx, .hyper, .twb, .twbx)
    pub file: PathBuf,
    /// Name to publish under; defaults to the file stem
    pub name: Option<String>,
    /// Target project LUID
    pub project_id: String,
    /// Overwrite an existing item with the same name
    pub overwrite: bool,
}

impl PublishOptions {
    /// File extension, which doubles as the upload type query parameter
    pub fn file_type(&self) -> Result<String> {
        self.file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or_else(|| {
                TabError::Config(format!(
                    "cannot determine file type of '{}'",
                    self.file.display()
                ))
            })
    }

    /// Publish name: explicit name or the file stem
    pub fn publish_name(&self) -> Result<String> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }
        self.file
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string())
            .ok_or_else(|| {
                TabError::Config(format!(
                    "cannot derive a publish name from '{}'",
                    self.file.display()
                ))
            })
    }

    /// File name component for the multipart upload
    pub fn file_name(&self) -> String {
        self.file
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("upload")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datasource_deserialization() {
        let ds: Datasource = serde_json::from_value(serde_json::json!({
            "id": "ds-1",
            "name": "Sales",
            "type": "hyper",
            "project": { "id": "p-1", "name": "Finance" },
            "owner": { "id": "u-1", "email": "jdoe@example.com" }
        }))
        .unwrap();

        assert_eq!(ds.owner_id(), "u-1");
        assert_eq!(ds.owner_email(), "jdoe@example.com");
        assert_eq!(ds.project_name(), "Finance");
    }

    #[test]
    fn test_publish_options_type_and_name() {
        let options = PublishOptions {
            file: PathBuf::from("/tmp/Sales Extract.tdsx"),
            name: None,
            project_id: "p-1".to_string(),
            overwrite: true,
        };

        assert_eq!(options.file_type().unwrap(), "tdsx");
        assert_eq!(options.publish_name().unwrap(), "Sales Extract");
        assert_eq!(options.file_name(), "Sales Extract.tdsx");
    }

    #[test]
    fn test_publish_options_explicit_name() {
        let options = PublishOptions {
            file: PathBuf::from("/tmp/extract.hyper"),
            name: Some("Renamed".to_string()),
            project_id: "p-1".to_string(),
            overwrite: false,
        };
        assert_eq!(options.publish_name().unwrap(), "Renamed");
    }

    #[test]
    fn test_publish_options_missing_extension() {
        let options = PublishOptions {
            file: PathBuf::from("/tmp/extract"),
            name: None,
            project_id: "p-1".to_string(),
            overwrite: false,
        };
        assert!(options.file_type().is_err());
    }
}
