//! User API operations

use crate::config::api;
use crate::error::{Result, TabError};
use crate::tableau::groups::{Group, GroupsResponse};
use crate::tableau::traits::TabResource;
use crate::tableau::users::models::{User, UserResponse, UsersResponse};
use crate::tableau::TabClient;

impl TabClient {
    /// List all users on the site
    pub async fn get_users(&self) -> Result<Vec<User>> {
        let path = format!("{}?fields=_all_", api::USERS);
        self.fetch_all_pages::<User, UsersResponse>(&path, "users")
            .await
    }

    /// Find a single user by name or LUID
    pub async fn find_user(&self, needle: &str) -> Result<User> {
        let users = self.get_users().await?;
        users
            .into_iter()
            .find(|u| u.matches(needle))
            .ok_or_else(|| TabError::NotFound(format!("user '{}'", needle)))
    }

    /// List the groups a user belongs to
    pub async fn get_user_groups(&self, user_id: &str) -> Result<Vec<Group>> {
        let path = format!("{}/{}/groups", api::USERS, user_id);
        self.fetch_all_pages::<Group, GroupsResponse>(&path, "user groups")
            .await
    }

    /// Add a user to the site
    pub async fn add_user(&self, name: &str, site_role: &str) -> Result<User> {
        let url = format!("{}{}", self.site_url(), api::USERS);
        let payload = serde_json::json!({
            "user": { "name": name, "siteRole": site_role }
        });
        let response = self.post(&url).json(&payload).send().await?;
        let body: UserResponse = self.parse_api_response(response, "add user").await?;
        Ok(body.user)
    }

    /// Update a user's site role
    pub async fn update_user_site_role(&self, user_id: &str, site_role: &str) -> Result<()> {
        let url = format!("{}{}/{}", self.site_url(), api::USERS, user_id);
        let payload = serde_json::json!({
            "user": { "siteRole": site_role }
        });
        let response = self.put(&url).json(&payload).send().await?;
        self.expect_success(response, "update user").await
    }

    /// Remove a user from the site
    pub async fn remove_user(&self, user_id: &str) -> Result<()> {
        let url = format!("{}{}/{}", self.site_url(), api::USERS, user_id);
        let response = self.delete(&url).send().await?;
        self.expect_success(response, "remove user").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn users_page(users: serde_json::Value, total: u32) -> serde_json::Value {
        serde_json::json!({
            "pagination": {
                "pageNumber": "1",
                "pageSize": "100",
                "totalAvailable": total.to_string()
            },
            "users": { "user": users }
        })
    }

    #[tokio::test]
    async fn test_get_users() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/sites/site-1/users"))
            .and(query_param("fields", "_all_"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_page(
                serde_json::json!([
                    { "id": "u-1", "name": "jdoe", "siteRole": "Creator" },
                    { "id": "u-2", "name": "asmith", "siteRole": "Viewer" }
                ]),
                2,
            )))
            .mount(&mock_server)
            .await;

        let users = client.get_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "jdoe");
    }

    #[tokio::test]
    async fn test_find_user_not_found() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/sites/site-1/users"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(users_page(serde_json::json!([]), 0)),
            )
            .mount(&mock_server)
            .await;

        let err = client.find_user("ghost").await.unwrap_err();
        match err {
            TabError::NotFound(msg) => assert!(msg.contains("ghost")),
            other => panic!("Expected TabError::NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_user_groups_paged() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/sites/site-1/users/u-1/groups"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "pagination": { "pageNumber": "1", "pageSize": "100", "totalAvailable": "2" },
                "groups": { "group": [
                    { "id": "g-1", "name": "All Users", "domain": { "name": "local" } },
                    { "id": "g-2", "name": "Analysts", "domain": { "name": "corp" } }
                ]}
            })))
            .mount(&mock_server)
            .await;

        let groups = client.get_user_groups("u-1").await.unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].name, "Analysts");
    }

    #[tokio::test]
    async fn test_add_user() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/sites/site-1/users"))
            .and(body_partial_json(serde_json::json!({
                "user": { "name": "newbie", "siteRole": "Explorer" }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "user": { "id": "u-9", "name": "newbie", "siteRole": "Explorer" }
            })))
            .mount(&mock_server)
            .await;

        let user = client.add_user("newbie", "Explorer").await.unwrap();
        assert_eq!(user.id, "u-9");
    }

    #[tokio::test]
    async fn test_update_user_site_role() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("PUT"))
            .and(path("/sites/site-1/users/u-1"))
            .and(body_partial_json(serde_json::json!({
                "user": { "siteRole": "Viewer" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "user": { "id": "u-1", "name": "jdoe", "siteRole": "Viewer" }
            })))
            .mount(&mock_server)
            .await;

        assert!(client.update_user_site_role("u-1", "Viewer").await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_user_error_includes_body() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/sites/site-1/users/u-1"))
            .respond_with(ResponseTemplate::new(409).set_body_string("user owns content"))
            .mount(&mock_server)
            .await;

        let err = client.remove_user("u-1").await.unwrap_err();
        match err {
            TabError::Api { status, message } => {
                assert_eq!(status, 409);
                assert!(message.contains("user owns content"));
            }
            other => panic!("Expected TabError::Api, got {:?}", other),
        }
    }
}
