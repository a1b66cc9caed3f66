use clap::Parser;
use log::warn;

use tabctl::cli::{
    Cli, Command, ContentKind, CreateResource, DeleteKind, FavoriteAction, GetResource,
    GroupAction, PublishKind, RefreshTarget, ReportKind, SetTarget,
};
use tabctl::error::{Result, TabError};
use tabctl::tableau::{
    datasources, favorites, flows, groups, projects, subscriptions, tasks, users, views,
    workbooks, PublishOptions, TabClient, TokenResolver,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&cli.log_level),
    )
    .init();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let server = cli.server.clone().ok_or_else(|| {
        TabError::Config(
            "no server address given; use --server or set TABLEAU_SERVER".to_string(),
        )
    })?;

    let token = TokenResolver::new(&server).resolve(cli.token.as_deref())?;
    let client = TabClient::sign_in(&server, &cli.site, &cli.token_name, &token).await?;

    let result = dispatch(&client, &cli, &server).await;

    // The session token expires server-side anyway, so a failed sign-out only
    // warrants a warning.
    if let Err(err) = client.sign_out().await {
        warn!("Sign-out failed: {}", err);
    }

    result
}

async fn dispatch(client: &TabClient, cli: &Cli, server: &str) -> Result<()> {
    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::Users(args) => match &args.groups {
                Some(user) => users::groups(client, user, args.output).await,
                None => users::list(client, args.filter.as_deref(), args.output).await,
            },
            GetResource::Groups(args) => match &args.members {
                Some(group) => groups::members(client, group, args.output).await,
                None => groups::list(client, args.filter.as_deref(), args.output).await,
            },
            GetResource::Projects(args) => {
                projects::list(client, args.filter.as_deref(), args.output).await
            }
            GetResource::Datasources(args) => {
                datasources::list(client, args.filter.as_deref(), args.output).await
            }
            GetResource::Workbooks(args) => {
                workbooks::list(client, args.filter.as_deref(), args.output).await
            }
            GetResource::Flows(args) => {
                flows::list(client, args.filter.as_deref(), args.output).await
            }
            GetResource::Views(args) => {
                views::list(client, args.filter.as_deref(), args.output).await
            }
            GetResource::Subscriptions(args) => subscriptions::list(client, args.output).await,
            GetResource::Favorites(args) => {
                favorites::list(client, &args.user, args.output).await
            }
            GetResource::Tasks(args) => tasks::list(client, args.output).await,
        },

        Command::Report { kind } => match kind {
            ReportKind::Users(args) => users::ownership_report(client, args.output).await,
            ReportKind::Groups(args) => groups::membership_report(client, args.output).await,
            ReportKind::Subscriptions(args) => {
                subscriptions::report(client, server, &cli.site, args.output).await
            }
            ReportKind::Suspended(args) => {
                tasks::suspended_report(
                    client,
                    server,
                    &cli.site,
                    args.failure_limit,
                    args.output,
                    args.html.as_deref(),
                )
                .await
            }
            ReportKind::Inactive(args) => {
                users::inactive_report(client, args.days, args.unlicense, cli.batch, args.output)
                    .await
            }
        },

        Command::Refresh { target } => match target {
            RefreshTarget::Datasource(args) => {
                datasources::refresh(client, &args.name, &args.retry.policy(), args.retry.poll_interval())
                    .await
            }
            RefreshTarget::Flow(args) => {
                flows::run(client, &args.names, &args.retry.policy(), args.retry.poll_interval())
                    .await
            }
            RefreshTarget::Flows(args) => {
                flows::run_all(
                    client,
                    args.filter.as_deref(),
                    &args.retry.policy(),
                    args.retry.poll_interval(),
                )
                .await
            }
        },

        Command::Create { resource } => match resource {
            CreateResource::Project(args) => {
                projects::create(
                    client,
                    &args.name,
                    args.description.as_deref(),
                    args.parent.as_deref(),
                )
                .await
            }
            CreateResource::Group(args) => groups::create(client, &args.name).await,
            CreateResource::User(args) => users::create(client, &args.name, &args.role).await,
        },

        Command::Set { target } => match target {
            SetTarget::Owner(args) => match args.kind {
                ContentKind::Datasource => {
                    datasources::set_owner(client, &args.name, &args.user).await
                }
                ContentKind::Workbook => {
                    workbooks::set_owner(client, &args.name, &args.user).await
                }
                ContentKind::Flow => flows::set_owner(client, &args.name, &args.user).await,
            },
            SetTarget::SiteRole(args) => {
                users::set_site_role(client, &args.user, &args.role).await
            }
            SetTarget::Subscription(args) => {
                subscriptions::update(
                    client,
                    &args.subscription,
                    args.subject.as_deref(),
                    args.resume,
                )
                .await
            }
            SetTarget::Project(args) => {
                projects::update(
                    client,
                    &args.project,
                    args.name.as_deref(),
                    args.description.as_deref(),
                )
                .await
            }
        },

        Command::Delete(args) => match args.kind {
            DeleteKind::Datasource => datasources::delete(client, &args.name, cli.batch).await,
            DeleteKind::Workbook => workbooks::delete(client, &args.name, cli.batch).await,
            DeleteKind::Flow => flows::delete(client, &args.name, cli.batch).await,
            DeleteKind::Group => groups::delete(client, &args.name, cli.batch).await,
            DeleteKind::Project => projects::delete(client, &args.name, cli.batch).await,
            DeleteKind::Subscription => {
                subscriptions::delete(client, &args.name, cli.batch).await
            }
            DeleteKind::User => users::delete(client, &args.name, cli.batch).await,
        },

        Command::Group { action } => match action {
            GroupAction::AddUser(args) => {
                groups::add_user(client, &args.group, &args.user).await
            }
            GroupAction::RemoveUser(args) => {
                groups::remove_user(client, &args.group, &args.user).await
            }
            GroupAction::Rename(args) => {
                groups::rename(client, &args.group, &args.name).await
            }
        },

        Command::Favorite { action } => match action {
            FavoriteAction::Add(args) => {
                favorites::add(client, &args.user, args.kind, &args.name).await
            }
            FavoriteAction::Remove(args) => {
                favorites::remove(client, &args.user, args.kind, &args.name).await
            }
        },

        Command::Publish(args) => {
            let project = client.find_project(&args.project).await?;
            let options = PublishOptions {
                file: args.file.clone(),
                name: args.name.clone(),
                project_id: project.id.clone(),
                overwrite: args.overwrite,
            };
            match args.kind {
                PublishKind::Datasource => datasources::publish(client, &options).await,
                PublishKind::Workbook => workbooks::publish(client, &options).await,
            }
        }

        Command::Download(args) => match args.kind {
            ContentKind::Datasource => {
                datasources::download(client, &args.name, args.output.as_deref()).await
            }
            ContentKind::Workbook => {
                workbooks::download(client, &args.name, args.output.as_deref()).await
            }
            ContentKind::Flow => {
                flows::download(client, &args.name, args.output.as_deref()).await
            }
        },

        Command::Backup(args) => {
            tokio::fs::create_dir_all(&args.dir).await?;
            workbooks::backup(client, &args.dir).await?;
            datasources::backup(client, &args.dir).await?;
            flows::backup(client, &args.dir).await
        }

        Command::Info => {
            let info = client.server_info().await?;
            println!(
                "Tableau Server {} (REST API {})",
                info.product_version.value, info.rest_api_version
            );
            Ok(())
        }
    }
}
