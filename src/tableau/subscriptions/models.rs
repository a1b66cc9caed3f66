//! Subscription models

use serde::Deserialize;

use crate::tableau::traits::{PagedResponse, Pagination, TabResource};
use crate::tableau::OwnerRef;

#[derive(Deserialize, Debug, Clone)]
pub struct Subscription {
    pub id: String,
    pub subject: Option<String>,
    /// Set once the server has suspended delivery after repeated failures
    pub suspended: Option<bool>,
    pub content: Option<SubscriptionContent>,
    pub user: Option<OwnerRef>,
    pub schedule: Option<SubscriptionSchedule>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SubscriptionContent {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SubscriptionSchedule {
    pub name: Option<String>,
    pub frequency: Option<String>,
}

impl Subscription {
    pub fn subject(&self) -> &str {
        self.subject.as_deref().unwrap_or("")
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended.unwrap_or(false)
    }

    pub fn content_id(&self) -> &str {
        self.content
            .as_ref()
            .and_then(|c| c.id.as_deref())
            .unwrap_or("")
    }

    /// "Workbook" or "View"
    pub fn content_type(&self) -> &str {
        self.content
            .as_ref()
            .and_then(|c| c.content_type.as_deref())
            .unwrap_or("")
    }

    pub fn user_id(&self) -> &str {
        self.user.as_ref().map(|u| u.id()).unwrap_or("")
    }

    pub fn schedule_name(&self) -> &str {
        self.schedule
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .unwrap_or("")
    }
}

impl TabResource for Subscription {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        self.subject()
    }
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct SubscriptionList {
    #[serde(default)]
    pub subscription: Vec<Subscription>,
}

/// Paged envelope: `{"pagination": {...}, "subscriptions": {"subscription": [...]}}`
#[derive(Deserialize, Debug)]
pub(crate) struct SubscriptionsResponse {
    pagination: Option<Pagination>,
    subscriptions: Option<SubscriptionList>,
}

impl PagedResponse<Subscription> for SubscriptionsResponse {
    fn into_items(self) -> Vec<Subscription> {
        self.subscriptions.unwrap_or_default().subscription
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}
