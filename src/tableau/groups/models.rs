//! Group models

use serde::Deserialize;

use crate::tableau::traits::{PagedResponse, Pagination, TabResource};

#[derive(Deserialize, Debug, Clone)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub domain: Option<GroupDomain>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GroupDomain {
    pub name: Option<String>,
}

impl Group {
    pub fn domain_name(&self) -> &str {
        self.domain
            .as_ref()
            .and_then(|d| d.name.as_deref())
            .unwrap_or("")
    }

    /// Whether the group is synchronized from Active Directory
    pub fn is_directory_backed(&self) -> bool {
        !matches!(self.domain_name(), "" | "local")
    }
}

impl TabResource for Group {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct GroupList {
    #[serde(default)]
    pub group: Vec<Group>,
}

/// Paged envelope: `{"pagination": {...}, "groups": {"group": [...]}}`
#[derive(Deserialize, Debug)]
pub(crate) struct GroupsResponse {
    pagination: Option<Pagination>,
    groups: Option<GroupList>,
}

impl PagedResponse<Group> for GroupsResponse {
    fn into_items(self) -> Vec<Group> {
        self.groups.unwrap_or_default().group
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}

/// Single-group envelope: `{"group": {...}}`
#[derive(Deserialize, Debug)]
pub(crate) struct GroupResponse {
    pub group: Group,
}
