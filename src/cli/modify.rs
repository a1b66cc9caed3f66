//! Arguments for the write commands (create, set, delete, group, favorite,
//! publish)

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::tableau::FavoriteKind;

#[derive(Subcommand, Debug)]
pub enum CreateResource {
    /// Create a project
    Project(CreateProjectArgs),

    /// Create a local group
    Group(CreateGroupArgs),

    /// Add a user to the site
    User(CreateUserArgs),
}

#[derive(Args, Debug)]
pub struct CreateProjectArgs {
    /// Project name
    pub name: String,

    /// Project description
    #[arg(long)]
    pub description: Option<String>,

    /// Parent project name or LUID
    #[arg(long)]
    pub parent: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateGroupArgs {
    /// Group name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct CreateUserArgs {
    /// User name
    pub name: String,

    /// Site role (Creator, Explorer, Viewer, ...)
    #[arg(long, default_value = "Viewer")]
    pub role: String,
}

#[derive(Subcommand, Debug)]
pub enum SetTarget {
    /// Change the owner of a data source, workbook or flow
    Owner(OwnerArgs),

    /// Change a user's site role
    SiteRole(SiteRoleArgs),

    /// Update a subscription's subject or resume delivery
    Subscription(SubscriptionArgs),

    /// Update a project's name or description
    Project(ProjectUpdateArgs),
}

/// Content kinds that have an owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContentKind {
    Datasource,
    Workbook,
    Flow,
}

#[derive(Args, Debug)]
pub struct OwnerArgs {
    /// Content kind
    #[arg(value_enum)]
    pub kind: ContentKind,

    /// Content name or LUID
    pub name: String,

    /// New owner's user name or LUID
    #[arg(long)]
    pub user: String,
}

#[derive(Args, Debug)]
pub struct SiteRoleArgs {
    /// User name or LUID
    pub user: String,

    /// New site role
    #[arg(long)]
    pub role: String,
}

#[derive(Args, Debug)]
pub struct SubscriptionArgs {
    /// Subscription subject or LUID
    pub subscription: String,

    /// New subject line
    #[arg(long)]
    pub subject: Option<String>,

    /// Resume a suspended subscription
    #[arg(long)]
    pub resume: bool,
}

#[derive(Args, Debug)]
pub struct ProjectUpdateArgs {
    /// Project name or LUID
    pub project: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,
}

/// Resource kinds accepted by `delete`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeleteKind {
    Datasource,
    Workbook,
    Flow,
    Group,
    Project,
    Subscription,
    User,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Resource kind
    #[arg(value_enum)]
    pub kind: DeleteKind,

    /// Resource name or LUID
    pub name: String,
}

#[derive(Subcommand, Debug)]
pub enum GroupAction {
    /// Add a user to a group
    AddUser(GroupUserArgs),

    /// Remove a user from a group
    RemoveUser(GroupUserArgs),

    /// Rename a group
    Rename(GroupRenameArgs),
}

#[derive(Args, Debug)]
pub struct GroupUserArgs {
    /// Group name or LUID
    pub group: String,

    /// User name or LUID
    #[arg(long)]
    pub user: String,
}

#[derive(Args, Debug)]
pub struct GroupRenameArgs {
    /// Group name or LUID
    pub group: String,

    /// New group name
    #[arg(long)]
    pub name: String,
}

#[derive(Subcommand, Debug)]
pub enum FavoriteAction {
    /// Add a content item to a user's favorites
    Add(FavoriteItemArgs),

    /// Remove a content item from a user's favorites
    Remove(FavoriteItemArgs),
}

#[derive(Args, Debug)]
pub struct FavoriteItemArgs {
    /// User name or LUID
    #[arg(long)]
    pub user: String,

    /// Content kind
    #[arg(value_enum)]
    pub kind: FavoriteKind,

    /// Content name or LUID
    pub name: String,
}

/// File kinds accepted by `publish`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PublishKind {
    Datasource,
    Workbook,
}

#[derive(Args, Debug)]
pub struct PublishArgs {
    /// What the file contains
    #[arg(value_enum)]
    pub kind: PublishKind,

    /// Local file (.tds, .tdsx, .hyper, .twb, .twbx)
    pub file: PathBuf,

    /// Target project name or LUID
    #[arg(long)]
    pub project: String,

    /// Publish under this name instead of the file stem
    #[arg(long)]
    pub name: Option<String>,

    /// Overwrite existing content with the same name
    #[arg(long)]
    pub overwrite: bool,
}
