//! View API operations

use crate::config::api;
use crate::error::Result;
use crate::tableau::views::models::{View, ViewsResponse};
use crate::tableau::TabClient;

impl TabClient {
    /// List all views on the site, with workbook and owner context
    pub async fn get_views(&self) -> Result<Vec<View>> {
        let path = format!(
            "{}?fields=_default_,workbook.id,workbook.name,owner.email",
            api::VIEWS
        );
        self.fetch_all_pages::<View, ViewsResponse>(&path, "views")
            .await
    }
}
