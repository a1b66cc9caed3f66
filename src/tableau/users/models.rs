//! User models

use serde::Deserialize;

use crate::tableau::traits::{PagedResponse, Pagination, TabResource};

#[derive(Deserialize, Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "siteRole")]
    pub site_role: Option<String>,
    #[serde(rename = "lastLogin")]
    pub last_login: Option<String>,
    pub domain: Option<Domain>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Domain {
    pub name: Option<String>,
}

impl User {
    pub fn full_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    pub fn site_role(&self) -> &str {
        self.site_role.as_deref().unwrap_or("")
    }

    pub fn domain_name(&self) -> &str {
        self.domain
            .as_ref()
            .and_then(|d| d.name.as_deref())
            .unwrap_or("")
    }
}

impl TabResource for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct UserList {
    #[serde(default)]
    pub user: Vec<User>,
}

/// Paged envelope: `{"pagination": {...}, "users": {"user": [...]}}`
#[derive(Deserialize, Debug)]
pub(crate) struct UsersResponse {
    pagination: Option<Pagination>,
    users: Option<UserList>,
}

impl PagedResponse<User> for UsersResponse {
    fn into_items(self) -> Vec<User> {
        self.users.unwrap_or_default().user
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}

/// Single-user envelope: `{"user": {...}}`
#[derive(Deserialize, Debug)]
pub(crate) struct UserResponse {
    pub user: User,
}
