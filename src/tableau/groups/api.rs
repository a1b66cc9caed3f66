//! Group API operations

use crate::config::api;
use crate::error::{Result, TabError};
use crate::tableau::groups::models::{Group, GroupResponse, GroupsResponse};
use crate::tableau::traits::TabResource;
use crate::tableau::users::{User, UsersResponse};
use crate::tableau::TabClient;

impl TabClient {
    /// List all groups on the site
    pub async fn get_groups(&self) -> Result<Vec<Group>> {
        self.fetch_all_pages::<Group, GroupsResponse>(api::GROUPS, "groups")
            .await
    }

    /// Find a single group by name or LUID
    pub async fn find_group(&self, needle: &str) -> Result<Group> {
        let groups = self.get_groups().await?;
        groups
            .into_iter()
            .find(|g| g.matches(needle))
            .ok_or_else(|| TabError::NotFound(format!("group '{}'", needle)))
    }

    /// List the members of a group
    pub async fn get_group_members(&self, group_id: &str) -> Result<Vec<User>> {
        let path = format!("{}/{}/users", api::GROUPS, group_id);
        self.fetch_all_pages::<User, UsersResponse>(&path, "group members")
            .await
    }

    /// Create a local group
    pub async fn create_group(&self, name: &str) -> Result<Group> {
        let url = format!("{}{}", self.site_url(), api::GROUPS);
        let payload = serde_json::json!({ "group": { "name": name } });
        let response = self.post(&url).json(&payload).send().await?;
        let body: GroupResponse = self.parse_api_response(response, "create group").await?;
        Ok(body.group)
    }

    /// Rename a group
    pub async fn update_group(&self, group_id: &str, name: &str) -> Result<()> {
        let url = format!("{}{}/{}", self.site_url(), api::GROUPS, group_id);
        let payload = serde_json::json!({ "group": { "name": name } });
        let response = self.put(&url).json(&payload).send().await?;
        self.expect_success(response, "update group").await
    }

    /// Delete a group
    pub async fn delete_group(&self, group_id: &str) -> Result<()> {
        let url = format!("{}{}/{}", self.site_url(), api::GROUPS, group_id);
        let response = self.delete(&url).send().await?;
        self.expect_success(response, "delete group").await
    }

    /// Add a user to a group
    pub async fn add_user_to_group(&self, group_id: &str, user_id: &str) -> Result<()> {
        let url = format!("{}{}/{}/users", self.site_url(), api::GROUPS, group_id);
        let payload = serde_json::json!({ "user": { "id": user_id } });
        let response = self.post(&url).json(&payload).send().await?;
        self.expect_success(response, "add user to group").await
    }

    /// Remove a user from a group
    pub async fn remove_user_from_group(&self, group_id: &str, user_id: &str) -> Result<()> {
        let url = format!(
            "{}{}/{}/users/{}",
            self.site_url(),
            api::GROUPS,
            group_id,
            user_id
        );
        let response = self.delete(&url).send().await?;
        self.expect_success(response, "remove user from group").await
    }
}
