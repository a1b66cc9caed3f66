//! Favorite API operations

use crate::config::api;
use crate::error::Result;
use crate::tableau::favorites::models::{Favorite, FavoriteKind, FavoritesResponse};
use crate::tableau::TabClient;

impl TabClient {
    /// List a user's favorites
    pub async fn get_favorites(&self, user_id: &str) -> Result<Vec<Favorite>> {
        let path = format!("{}/{}", api::FAVORITES, user_id);
        self.fetch_all_pages::<Favorite, FavoritesResponse>(&path, "favorites")
            .await
    }

    /// Add a content item to a user's favorites
    pub async fn add_favorite(
        &self,
        user_id: &str,
        label: &str,
        kind: FavoriteKind,
        content_id: &str,
    ) -> Result<()> {
        let url = format!("{}{}/{}", self.site_url(), api::FAVORITES, user_id);
        let payload = serde_json::json!({
            "favorite": {
                "label": label,
                kind.key(): { "id": content_id }
            }
        });
        let response = self.put(&url).json(&payload).send().await?;
        self.expect_success(response, "add favorite").await
    }

    /// Remove a content item from a user's favorites
    pub async fn delete_favorite(
        &self,
        user_id: &str,
        kind: FavoriteKind,
        content_id: &str,
    ) -> Result<()> {
        let url = format!(
            "{}{}/{}/{}/{}",
            self.site_url(),
            api::FAVORITES,
            user_id,
            kind.path_segment(),
            content_id
        );
        let response = self.delete(&url).send().await?;
        self.expect_success(response, "delete favorite").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_favorites() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/sites/site-1/favorites/u-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "pagination": { "pageNumber": "1", "pageSize": "100", "totalAvailable": "1" },
                "favorites": { "favorite": [
                    {
                        "label": "Quarterly Review",
                        "workbook": { "id": "wb-1", "name": "Quarterly Review" }
                    }
                ]}
            })))
            .mount(&mock_server)
            .await;

        let favorites = client.get_favorites("u-1").await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].kind(), "Workbook");
    }

    #[tokio::test]
    async fn test_add_favorite_payload() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("PUT"))
            .and(path("/sites/site-1/favorites/u-1"))
            .and(body_partial_json(serde_json::json!({
                "favorite": {
                    "label": "daily-load",
                    "flow": { "id": "f-1" }
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "favorites": { "favorite": [] }
            })))
            .mount(&mock_server)
            .await;

        assert!(client
            .add_favorite("u-1", "daily-load", FavoriteKind::Flow, "f-1")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_delete_favorite_path() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/sites/site-1/favorites/u-1/workbooks/wb-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert!(client
            .delete_favorite("u-1", FavoriteKind::Workbook, "wb-1")
            .await
            .is_ok());
    }
}
