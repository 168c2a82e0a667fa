/*
[INPUT]:  Endpoint name and path parameters (app id, notification id, paging)
[OUTPUT]: Relative request paths with percent-encoded parameters
[POS]:    HTTP layer - endpoint table and template substitution
[UPDATE]: When adding new endpoints or changing path templates
*/

/// Endpoint templates, relative to the API root.
///
/// Templates never start with `/` so that joining keeps the `/api/v1/` prefix.
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("notifications", "notifications"),
    ("view_notifications", "notifications?app_id={app_id}"),
    (
        "notification_page",
        "notifications?app_id={app_id}&limit={limit}&offset={offset}",
    ),
    ("view_notification", "notifications/{id}?app_id={app_id}"),
    ("cancel_notification", "notifications/{id}?app_id={app_id}"),
    ("csv_export", "players/csv_export?app_id={app_id}"),
    ("apps", "apps"),
    ("app", "apps/{app_id}"),
];

/// A OneSignal endpoint together with its path parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Notifications,
    ViewNotifications {
        app_id: &'a str,
    },
    NotificationPage {
        app_id: &'a str,
        limit: u32,
        offset: u32,
    },
    ViewNotification {
        app_id: &'a str,
        notification_id: &'a str,
    },
    CancelNotification {
        app_id: &'a str,
        notification_id: &'a str,
    },
    CsvExport {
        app_id: &'a str,
    },
    Apps,
    App {
        app_id: &'a str,
    },
}

impl Endpoint<'_> {
    /// Short name used as key in [`ENDPOINTS`]
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Notifications => "notifications",
            Endpoint::ViewNotifications { .. } => "view_notifications",
            Endpoint::NotificationPage { .. } => "notification_page",
            Endpoint::ViewNotification { .. } => "view_notification",
            Endpoint::CancelNotification { .. } => "cancel_notification",
            Endpoint::CsvExport { .. } => "csv_export",
            Endpoint::Apps => "apps",
            Endpoint::App { .. } => "app",
        }
    }

    /// Raw template for this endpoint
    pub fn template(&self) -> &'static str {
        let name = self.name();
        ENDPOINTS
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, template)| *template)
            .unwrap_or_default()
    }

    /// Render the relative path with every placeholder substituted
    pub fn path(&self) -> String {
        let template = self.template();
        match *self {
            Endpoint::Notifications | Endpoint::Apps => template.to_string(),
            Endpoint::ViewNotifications { app_id }
            | Endpoint::CsvExport { app_id }
            | Endpoint::App { app_id } => render(template, &[("app_id", app_id)]),
            Endpoint::NotificationPage {
                app_id,
                limit,
                offset,
            } => render(
                template,
                &[
                    ("app_id", app_id),
                    ("limit", &limit.to_string()),
                    ("offset", &offset.to_string()),
                ],
            ),
            Endpoint::ViewNotification {
                app_id,
                notification_id,
            }
            | Endpoint::CancelNotification {
                app_id,
                notification_id,
            } => render(template, &[("id", notification_id), ("app_id", app_id)]),
        }
    }
}

/// Replace `{key}` placeholders with percent-encoded values
fn render(template: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |acc, (key, value)| {
            acc.replace(&format!("{{{key}}}"), &urlencoding::encode(value))
        })
}
