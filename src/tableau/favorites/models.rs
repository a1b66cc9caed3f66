//! Favorite models

use clap::ValueEnum;
use serde::Deserialize;

use crate::tableau::traits::{PagedResponse, Pagination};
use crate::tableau::ContentRef;

/// Content kinds that can be marked as a favorite
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FavoriteKind {
    Workbook,
    View,
    Datasource,
    Flow,
    Project,
}

impl FavoriteKind {
    /// JSON key used in the add-favorite payload
    pub fn key(&self) -> &'static str {
        match self {
            FavoriteKind::Workbook => "workbook",
            FavoriteKind::View => "view",
            FavoriteKind::Datasource => "datasource",
            FavoriteKind::Flow => "flow",
            FavoriteKind::Project => "project",
        }
    }

    /// URL path segment used in the delete-favorite endpoint
    pub fn path_segment(&self) -> &'static str {
        match self {
            FavoriteKind::Workbook => "workbooks",
            FavoriteKind::View => "views",
            FavoriteKind::Datasource => "datasources",
            FavoriteKind::Flow => "flows",
            FavoriteKind::Project => "projects",
        }
    }
}

/// One favorite entry; exactly one of the content fields is set
#[derive(Deserialize, Debug, Clone)]
pub struct Favorite {
    pub label: Option<String>,
    pub workbook: Option<ContentRef>,
    pub view: Option<ContentRef>,
    pub datasource: Option<ContentRef>,
    pub flow: Option<ContentRef>,
    pub project: Option<ContentRef>,
}

impl Favorite {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    /// Kind label for display
    pub fn kind(&self) -> &'static str {
        if self.workbook.is_some() {
            "Workbook"
        } else if self.view.is_some() {
            "View"
        } else if self.datasource.is_some() {
            "Datasource"
        } else if self.flow.is_some() {
            "Flow"
        } else if self.project.is_some() {
            "Project"
        } else {
            "Unknown"
        }
    }

    /// The referenced content item
    pub fn target(&self) -> Option<&ContentRef> {
        self.workbook
            .as_ref()
            .or(self.view.as_ref())
            .or(self.datasource.as_ref())
            .or(self.flow.as_ref())
            .or(self.project.as_ref())
    }
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct FavoriteList {
    #[serde(default)]
    pub favorite: Vec<Favorite>,
}

/// Paged envelope: `{"pagination": {...}, "favorites": {"favorite": [...]}}`
#[derive(Deserialize, Debug)]
pub(crate) struct FavoritesResponse {
    pagination: Option<Pagination>,
    favorites: Option<FavoriteList>,
}

impl PagedResponse<Favorite> for FavoritesResponse {
    fn into_items(self) -> Vec<Favorite> {
        self.favorites.unwrap_or_default().favorite
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_kind_and_target() {
        let favorite: Favorite = serde_json::from_value(serde_json::json!({
            "label": "Quarterly Review",
            "workbook": { "id": "wb-1", "name": "Quarterly Review" }
        }))
        .unwrap();

        assert_eq!(favorite.kind(), "Workbook");
        assert_eq!(favorite.target().map(|t| t.id()), Some("wb-1"));
    }

    #[test]
    fn test_favorite_without_content() {
        let favorite: Favorite =
            serde_json::from_value(serde_json::json!({ "label": "orphan" })).unwrap();
        assert_eq!(favorite.kind(), "Unknown");
        assert!(favorite.target().is_none());
    }

    #[test]
    fn test_kind_segments() {
        assert_eq!(FavoriteKind::Datasource.key(), "datasource");
        assert_eq!(FavoriteKind::Datasource.path_segment(), "datasources");
    }
}
