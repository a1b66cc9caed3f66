//! Subscription API operations

use crate::config::api;
use crate::error::{Result, TabError};
use crate::tableau::subscriptions::models::{Subscription, SubscriptionsResponse};
use crate::tableau::traits::TabResource;
use crate::tableau::TabClient;

impl TabClient {
    /// List all subscriptions on the site
    pub async fn get_subscriptions(&self) -> Result<Vec<Subscription>> {
        self.fetch_all_pages::<Subscription, SubscriptionsResponse>(
            api::SUBSCRIPTIONS,
            "subscriptions",
        )
        .await
    }

    /// Find a single subscription by subject or LUID
    pub async fn find_subscription(&self, needle: &str) -> Result<Subscription> {
        let subscriptions = self.get_subscriptions().await?;
        subscriptions
            .into_iter()
            .find(|s| s.matches(needle))
            .ok_or_else(|| TabError::NotFound(format!("subscription '{}'", needle)))
    }

    /// Delete a subscription
    pub async fn delete_subscription(&self, subscription_id: &str) -> Result<()> {
        let url = format!(
            "{}{}/{}",
            self.site_url(),
            api::SUBSCRIPTIONS,
            subscription_id
        );
        let response = self.delete(&url).send().await?;
        self.expect_success(response, "delete subscription").await
    }

    /// Update a subscription's subject or suspended state
    pub async fn update_subscription(
        &self,
        subscription_id: &str,
        subject: Option<&str>,
        suspended: Option<bool>,
    ) -> Result<()> {
        let url = format!(
            "{}{}/{}",
            self.site_url(),
            api::SUBSCRIPTIONS,
            subscription_id
        );
        let mut subscription = serde_json::json!({});
        if let Some(subject) = subject {
            subscription["subject"] = serde_json::json!(subject);
        }
        if let Some(suspended) = suspended {
            subscription["suspended"] = serde_json::json!(suspended);
        }
        let payload = serde_json::json!({ "subscription": subscription });

        let response = self.put(&url).json(&payload).send().await?;
        self.expect_success(response, "update subscription").await
    }
}
