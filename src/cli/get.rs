//! `get` subcommand arguments

use clap::{Args, Subcommand};

use crate::output::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// List site users, or the groups of one user
    #[command(visible_aliases = ["user", "u"])]
    Users(UsersArgs),

    /// List site groups, or the members of one group
    #[command(visible_aliases = ["group", "g"])]
    Groups(GroupsArgs),

    /// List site projects
    #[command(visible_aliases = ["project", "p"])]
    Projects(ListArgs),

    /// List published data sources
    #[command(visible_aliases = ["datasource", "ds"])]
    Datasources(ListArgs),

    /// List published workbooks
    #[command(visible_aliases = ["workbook", "wb"])]
    Workbooks(ListArgs),

    /// List Prep flows
    #[command(visible_aliases = ["flow", "f"])]
    Flows(ListArgs),

    /// List workbook views
    #[command(visible_aliases = ["view", "v"])]
    Views(ListArgs),

    /// List subscriptions
    #[command(visible_aliases = ["subscription", "sub"])]
    Subscriptions(FormatArgs),

    /// List a user's favorites
    #[command(visible_aliases = ["favorite", "fav"])]
    Favorites(FavoritesArgs),

    /// List scheduled extract refresh and flow run tasks
    #[command(visible_aliases = ["task", "t"])]
    Tasks(FormatArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Substring filter on the resource name
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct UsersArgs {
    /// Substring filter on the user name
    pub filter: Option<String>,

    /// Show the groups this user belongs to instead of the user list
    #[arg(long)]
    pub groups: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct GroupsArgs {
    /// Substring filter on the group name
    pub filter: Option<String>,

    /// Show the members of this group instead of the group list
    #[arg(long)]
    pub members: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct FavoritesArgs {
    /// User name or LUID whose favorites to list
    #[arg(long)]
    pub user: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t)]
    pub output: OutputFormat,
}
