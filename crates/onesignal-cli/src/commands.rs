/*
[INPUT]:  Parsed subcommand, resolved configuration, dry-run flag
[OUTPUT]: Raw JSON result of the API call, or a description of the request
[POS]:    CLI layer - command dispatch onto the client library
[UPDATE]: When adding subcommands or changing request construction
*/

use anyhow::{Context, Result, bail};
use onesignal_client::{
    AppClient, CsvExportRequest, DEFAULT_SEGMENT, Endpoint, Method, Notification,
    OneSignalClient, UserClient,
};
use serde_json::{Map, Value, json};
use tracing::info;

use crate::args::{AppsCommand, Command, CreateNotificationArgs, NotificationsCommand};
use crate::config::CliConfig;

/// Page size used when only `--offset` is given
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Execute a non-interactive command
pub async fn run(command: &Command, config: &CliConfig, dry_run: bool) -> Result<Value> {
    match command {
        Command::Notifications(cmd) => {
            let client = config.app_client()?;
            notifications(cmd, &client, dry_run).await
        }
        Command::CsvExport { extra_fields } => {
            let client = config.app_client()?;
            csv_export(extra_fields, &client, dry_run).await
        }
        Command::Apps(cmd) => {
            let client = config.user_client()?;
            apps(cmd, &client, dry_run).await
        }
        Command::Init { .. } => bail!("init is interactive and not dispatched here"),
    }
}

async fn notifications(
    cmd: &NotificationsCommand,
    client: &AppClient,
    dry_run: bool,
) -> Result<Value> {
    let app_id = client.app_id();
    match cmd {
        NotificationsCommand::List { limit, offset } => {
            let page = match (limit, offset) {
                (None, 0) => None,
                (limit, offset) => Some((limit.unwrap_or(DEFAULT_PAGE_LIMIT), *offset)),
            };
            if dry_run {
                let endpoint = match page {
                    Some((limit, offset)) => Endpoint::NotificationPage {
                        app_id,
                        limit,
                        offset,
                    },
                    None => Endpoint::ViewNotifications { app_id },
                };
                return describe(client.inner(), Method::GET, &endpoint, None);
            }
            info!(app_id, ?page, "listing notifications");
            let result = match page {
                Some((limit, offset)) => client.get_notifications_page(limit, offset).await,
                None => client.get_notifications().await,
            };
            result.context("list notifications")
        }
        NotificationsCommand::Get { id } => {
            if dry_run {
                let endpoint = Endpoint::ViewNotification {
                    app_id,
                    notification_id: id.as_str(),
                };
                return describe(client.inner(), Method::GET, &endpoint, None);
            }
            client
                .get_notification(id)
                .await
                .with_context(|| format!("get notification {id}"))
        }
        NotificationsCommand::Create(args) => {
            let notification = build_notification(args, client)?;
            if dry_run {
                let payload = notification.payload().context("build notification payload")?;
                return describe(
                    client.inner(),
                    Method::POST,
                    &Endpoint::Notifications,
                    Some(payload),
                );
            }
            info!(app_id, "creating notification");
            client
                .create_notification(&notification)
                .await
                .context("create notification")
        }
        NotificationsCommand::Cancel { id } => {
            if dry_run {
                let endpoint = Endpoint::CancelNotification {
                    app_id,
                    notification_id: id.as_str(),
                };
                return describe(client.inner(), Method::DELETE, &endpoint, None);
            }
            info!(app_id, notification_id = %id, "cancelling notification");
            client
                .cancel_notification(id)
                .await
                .with_context(|| format!("cancel notification {id}"))
        }
    }
}

async fn csv_export(extra_fields: &[String], client: &AppClient, dry_run: bool) -> Result<Value> {
    if dry_run {
        let payload = serde_json::to_value(CsvExportRequest::from_names(extra_fields))?;
        let endpoint = Endpoint::CsvExport {
            app_id: client.app_id(),
        };
        return describe(client.inner(), Method::POST, &endpoint, Some(payload));
    }
    info!(app_id = client.app_id(), "requesting CSV export");
    client
        .csv_export(extra_fields)
        .await
        .context("request CSV export")
}

async fn apps(cmd: &AppsCommand, client: &UserClient, dry_run: bool) -> Result<Value> {
    match cmd {
        AppsCommand::List => {
            if dry_run {
                return describe(client.inner(), Method::GET, &Endpoint::Apps, None);
            }
            client.get_apps().await.context("list apps")
        }
        AppsCommand::Get { app_id } => {
            if dry_run {
                let endpoint = Endpoint::App {
                    app_id: app_id.as_str(),
                };
                return describe(client.inner(), Method::GET, &endpoint, None);
            }
            client
                .get_app(app_id)
                .await
                .with_context(|| format!("get app {app_id}"))
        }
    }
}

/// Map `notifications create` flags onto a notification for the client's app
pub fn build_notification(
    args: &CreateNotificationArgs,
    client: &AppClient,
) -> Result<Notification> {
    let mut notification = client.notification().content("en", args.content.as_str());

    if let Some(heading) = &args.heading {
        notification = notification.heading("en", heading.as_str());
    }
    if !args.players.is_empty() {
        notification = notification.players(args.players.iter().cloned());
    } else if !args.segments.is_empty() || !args.excluded_segments.is_empty() {
        let included = if args.segments.is_empty() {
            vec![DEFAULT_SEGMENT.to_string()]
        } else {
            args.segments.clone()
        };
        notification = notification.segments(included, args.excluded_segments.iter().cloned());
    }
    if let Some(url) = &args.url {
        notification = notification.url(url.as_str());
    }
    if let Some(data) = &args.data {
        let data: Map<String, Value> =
            serde_json::from_str(data).context("--data must be a JSON object")?;
        notification = notification.data(data);
    }

    Ok(notification)
}

fn describe(
    client: &OneSignalClient,
    method: Method,
    endpoint: &Endpoint<'_>,
    body: Option<Value>,
) -> Result<Value> {
    let url = client.url(endpoint)?;
    Ok(json!({
        "method": method.as_str(),
        "url": url.as_str(),
        "body": body,
    }))
}
