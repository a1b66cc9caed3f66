//! View models

use serde::Deserialize;

use crate::tableau::traits::{PagedResponse, Pagination, TabResource};
use crate::tableau::{ContentRef, OwnerRef};

#[derive(Deserialize, Debug, Clone)]
pub struct View {
    pub id: String,
    pub name: String,
    /// Content URL in `Workbook/sheets/Sheet` form
    #[serde(rename = "contentUrl")]
    pub content_url: Option<String>,
    pub workbook: Option<ContentRef>,
    pub owner: Option<OwnerRef>,
}

impl View {
    pub fn content_url(&self) -> &str {
        self.content_url.as_deref().unwrap_or("")
    }

    pub fn workbook_name(&self) -> &str {
        self.workbook.as_ref().map(|w| w.name()).unwrap_or("")
    }

    pub fn owner_email(&self) -> &str {
        self.owner.as_ref().map(|o| o.email()).unwrap_or("")
    }

    /// Browser address of the view
    ///
    /// The REST content URL is `Workbook/sheets/Sheet` but the web UI address
    /// drops the `/sheets` segment.
    pub fn address(&self, server: &str, site: &str) -> String {
        let path = self.content_url().replace("/sheets/", "/");
        format!(
            "{}/#/site/{}/views/{}",
            server.trim_end_matches('/'),
            site,
            path
        )
    }
}

impl TabResource for View {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct ViewList {
    #[serde(default)]
    pub view: Vec<View>,
}

/// Paged envelope: `{"pagination": {...}, "views": {"view": [...]}}`
#[derive(Deserialize, Debug)]
pub(crate) struct ViewsResponse {
    pagination: Option<Pagination>,
    views: Option<ViewList>,
}

impl PagedResponse<View> for ViewsResponse {
    fn into_items(self) -> Vec<View> {
        self.views.unwrap_or_default().view
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}
