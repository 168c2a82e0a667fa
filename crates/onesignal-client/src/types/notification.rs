/*
[INPUT]:  Notification content, targeting and delivery options
[OUTPUT]: Validated JSON payload for POST notifications
[POS]:    Data layer - notification model and request serialization
[UPDATE]: When adding notification options or changing targeting rules
*/

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::http::{OneSignalError, Result};

/// Language code OneSignal requires in `contents`
pub const DEFAULT_LANGUAGE: &str = "en";

/// Segment a new notification is sent to
pub const DEFAULT_SEGMENT: &str = "Subscribed Users";

/// Who receives the notification
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Players(Vec<String>),
    Segments {
        included: Vec<String>,
        excluded: Vec<String>,
    },
    /// Raw filter objects, e.g. `{"field": "tag", "key": "level", "relation": ">", "value": "10"}`
    Filters(Vec<Value>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IosBadgeType {
    None,
    SetTo,
    Increase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DelayedOption {
    #[serde(rename = "timezone")]
    Timezone,
    #[serde(rename = "last-active")]
    LastActive,
}

/// A push notification for one app.
///
/// Build with [`Notification::new`] and the chained setters, then call
/// [`Notification::payload`] to get the request body.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub app_id: String,
    pub target: Target,
    pub contents: BTreeMap<String, String>,
    pub headings: BTreeMap<String, String>,
    pub subtitle: BTreeMap<String, String>,
    pub data: Option<Map<String, Value>>,
    pub url: Option<String>,
    pub big_picture: Option<String>,
    pub small_icon: Option<String>,
    pub large_icon: Option<String>,
    pub android_accent_color: Option<String>,
    pub ios_badge_type: Option<IosBadgeType>,
    pub ios_badge_count: Option<i32>,
    pub send_after: Option<DateTime<Utc>>,
    pub delayed_option: Option<DelayedOption>,
    pub delivery_time_of_day: Option<String>,
    pub ttl: Option<u32>,
    pub priority: Option<u8>,
}

impl Notification {
    /// New notification sent to every subscribed user
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            target: Target::Segments {
                included: vec![DEFAULT_SEGMENT.to_string()],
                excluded: Vec::new(),
            },
            contents: BTreeMap::new(),
            headings: BTreeMap::new(),
            subtitle: BTreeMap::new(),
            data: None,
            url: None,
            big_picture: None,
            small_icon: None,
            large_icon: None,
            android_accent_color: None,
            ios_badge_type: None,
            ios_badge_count: None,
            send_after: None,
            delayed_option: None,
            delivery_time_of_day: None,
            ttl: None,
            priority: None,
        }
    }

    pub fn content(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.contents.insert(language.into(), text.into());
        self
    }

    pub fn heading(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.headings.insert(language.into(), text.into());
        self
    }

    pub fn subtitle(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.subtitle.insert(language.into(), text.into());
        self
    }

    pub fn players<I, S>(mut self, player_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target = Target::Players(player_ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn segments<I, S, E, T>(mut self, included: I, excluded: E) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        E: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.target = Target::Segments {
            included: included.into_iter().map(Into::into).collect(),
            excluded: excluded.into_iter().map(Into::into).collect(),
        };
        self
    }

    pub fn filters(mut self, filters: Vec<Value>) -> Self {
        self.target = Target::Filters(filters);
        self
    }

    /// Attach custom key/value data delivered with the notification
    pub fn data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn big_picture(mut self, url: impl Into<String>) -> Self {
        self.big_picture = Some(url.into());
        self
    }

    pub fn small_icon(mut self, icon: impl Into<String>) -> Self {
        self.small_icon = Some(icon.into());
        self
    }

    pub fn large_icon(mut self, icon: impl Into<String>) -> Self {
        self.large_icon = Some(icon.into());
        self
    }

    /// ARGB hex, e.g. `FF9900FF`
    pub fn android_accent_color(mut self, color: impl Into<String>) -> Self {
        self.android_accent_color = Some(color.into());
        self
    }

    pub fn ios_badge(mut self, badge_type: IosBadgeType, count: i32) -> Self {
        self.ios_badge_type = Some(badge_type);
        self.ios_badge_count = Some(count);
        self
    }

    pub fn send_after(mut self, at: DateTime<Utc>) -> Self {
        self.send_after = Some(at);
        self
    }

    /// Per-user delivery; `time_of_day` is only used with [`DelayedOption::Timezone`]
    pub fn delayed(mut self, option: DelayedOption, time_of_day: Option<String>) -> Self {
        self.delayed_option = Some(option);
        self.delivery_time_of_day = time_of_day;
        self
    }

    pub fn ttl(mut self, seconds: u32) -> Self {
        self.ttl = Some(seconds);
        self
    }

    pub fn priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Check the rules OneSignal would otherwise reject with a 400
    pub fn validate(&self) -> Result<()> {
        if self.app_id.trim().is_empty() {
            return Err(OneSignalError::InvalidNotification(
                "app_id must not be empty".to_string(),
            ));
        }
        if !self.contents.contains_key(DEFAULT_LANGUAGE) {
            return Err(OneSignalError::InvalidNotification(format!(
                "contents must include \"{DEFAULT_LANGUAGE}\""
            )));
        }
        if !self.headings.is_empty() && !self.headings.contains_key(DEFAULT_LANGUAGE) {
            return Err(OneSignalError::InvalidNotification(format!(
                "headings must include \"{DEFAULT_LANGUAGE}\" when set"
            )));
        }
        match &self.target {
            Target::Players(ids) if ids.is_empty() => Err(OneSignalError::InvalidNotification(
                "player target needs at least one player id".to_string(),
            )),
            Target::Segments { included, .. } if included.is_empty() => {
                Err(OneSignalError::InvalidNotification(
                    "segment target needs at least one included segment".to_string(),
                ))
            }
            Target::Filters(filters) if filters.is_empty() => {
                Err(OneSignalError::InvalidNotification(
                    "filter target needs at least one filter".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Validated request body for `POST notifications`
    pub fn payload(&self) -> Result<Value> {
        self.validate()?;
        Ok(serde_json::to_value(NotificationPayload::from(self))?)
    }
}

/// Wire shape of a notification; optional fields are omitted when unset
#[derive(Serialize)]
struct NotificationPayload<'a> {
    app_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_player_ids: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    included_segments: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    excluded_segments: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filters: Option<&'a [Value]>,
    contents: &'a BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_empty_map")]
    headings: &'a BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_empty_map")]
    subtitle: &'a BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    big_picture: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    small_icon: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    large_icon: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    android_accent_color: Option<&'a str>,
    #[serde(rename = "ios_badgeType", skip_serializing_if = "Option::is_none")]
    ios_badge_type: Option<IosBadgeType>,
    #[serde(rename = "ios_badgeCount", skip_serializing_if = "Option::is_none")]
    ios_badge_count: Option<i32>,
    #[serde(
        serialize_with = "serialize_send_after",
        skip_serializing_if = "Option::is_none"
    )]
    send_after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delayed_option: Option<DelayedOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery_time_of_day: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<u8>,
}

impl<'a> From<&'a Notification> for NotificationPayload<'a> {
    fn from(n: &'a Notification) -> Self {
        let (include_player_ids, included_segments, excluded_segments, filters) = match &n.target
        {
            Target::Players(ids) => (Some(ids.as_slice()), None, None, None),
            Target::Segments { included, excluded } => (
                None,
                Some(included.as_slice()),
                (!excluded.is_empty()).then_some(excluded.as_slice()),
                None,
            ),
            Target::Filters(filters) => (None, None, None, Some(filters.as_slice())),
        };

        Self {
            app_id: &n.app_id,
            include_player_ids,
            included_segments,
            excluded_segments,
            filters,
            contents: &n.contents,
            headings: &n.headings,
            subtitle: &n.subtitle,
            data: n.data.as_ref(),
            url: n.url.as_deref(),
            big_picture: n.big_picture.as_deref(),
            small_icon: n.small_icon.as_deref(),
            large_icon: n.large_icon.as_deref(),
            android_accent_color: n.android_accent_color.as_deref(),
            ios_badge_type: n.ios_badge_type,
            ios_badge_count: n.ios_badge_count,
            send_after: n.send_after,
            delayed_option: n.delayed_option,
            delivery_time_of_day: n.delivery_time_of_day.as_deref(),
            ttl: n.ttl,
            priority: n.priority,
        }
    }
}

fn is_empty_map(map: &&BTreeMap<String, String>) -> bool {
    map.is_empty()
}

/// OneSignal parses `send_after` as e.g. `2015-09-24 14:00:00 GMT+0000`
fn serialize_send_after<S: Serializer>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match value {
        Some(at) => serializer.serialize_str(&at.format("%Y-%m-%d %H:%M:%S GMT+0000").to_string()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_minimal_payload() {
        let payload = Notification::new("app-1")
            .content("en", "Hello")
            .payload()
            .expect("payload");

        assert_eq!(
            payload,
            json!({
                "app_id": "app-1",
                "included_segments": ["Subscribed Users"],
                "contents": { "en": "Hello" },
            })
        );
    }

    #[test]
    fn test_player_payload_with_options() {
        let mut data = Map::new();
        data.insert("order_id".to_string(), json!(42));

        let payload = Notification::new("app-1")
            .content("en", "Your order shipped")
            .content("pt", "Seu pedido foi enviado")
            .heading("en", "Shipping")
            .players(["p-1", "p-2"])
            .data(data)
            .url("https://example.com/orders/42")
            .ios_badge(IosBadgeType::Increase, 1)
            .send_after(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap())
            .delayed(DelayedOption::Timezone, Some("9:00AM".to_string()))
            .ttl(3600)
            .payload()
            .expect("payload");

        assert_eq!(
            payload,
            json!({
                "app_id": "app-1",
                "include_player_ids": ["p-1", "p-2"],
                "contents": { "en": "Your order shipped", "pt": "Seu pedido foi enviado" },
                "headings": { "en": "Shipping" },
                "data": { "order_id": 42 },
                "url": "https://example.com/orders/42",
                "ios_badgeType": "Increase",
                "ios_badgeCount": 1,
                "send_after": "2024-03-01 09:30:00 GMT+0000",
                "delayed_option": "timezone",
                "delivery_time_of_day": "9:00AM",
                "ttl": 3600,
            })
        );
    }

    #[test]
    fn test_segments_with_exclusions() {
        let payload = Notification::new("app-1")
            .content("en", "Sale")
            .segments(vec!["Active Users"], vec!["Engaged Users"])
            .payload()
            .expect("payload");

        assert_eq!(payload["included_segments"], json!(["Active Users"]));
        assert_eq!(payload["excluded_segments"], json!(["Engaged Users"]));
        assert!(payload.get("include_player_ids").is_none());
    }

    #[test]
    fn test_segments_accept_mixed_list_types() {
        let payload = Notification::new("app-1")
            .content("en", "Sale")
            .segments([DEFAULT_SEGMENT], vec!["VIP".to_string()])
            .payload()
            .expect("payload");

        assert_eq!(payload["included_segments"], json!(["Subscribed Users"]));
        assert_eq!(payload["excluded_segments"], json!(["VIP"]));
    }

    #[test]
    fn test_filters_target() {
        let payload = Notification::new("app-1")
            .content("en", "Level up")
            .filters(vec![json!({"field": "tag", "key": "level", "relation": ">", "value": "10"})])
            .payload()
            .expect("payload");

        assert_eq!(payload["filters"][0]["key"], "level");
        assert!(payload.get("included_segments").is_none());
    }

    #[test]
    fn test_missing_english_content_rejected() {
        let err = Notification::new("app-1")
            .content("es", "Hola")
            .payload()
            .unwrap_err();
        assert!(matches!(err, OneSignalError::InvalidNotification(_)));
    }

    #[test]
    fn test_heading_without_english_rejected() {
        let err = Notification::new("app-1")
            .content("en", "Hello")
            .heading("de", "Hallo")
            .validate()
            .unwrap_err();
        assert!(matches!(err, OneSignalError::InvalidNotification(_)));
    }

    #[test]
    fn test_empty_targets_rejected() {
        let empty: Vec<String> = Vec::new();
        let base = Notification::new("app-1").content("en", "Hello");

        assert!(base.clone().players(empty.clone()).validate().is_err());
        assert!(base.clone().segments(empty.clone(), empty).validate().is_err());
        assert!(base.filters(Vec::new()).validate().is_err());
    }

    #[test]
    fn test_empty_app_id_rejected() {
        let err = Notification::new("  ").content("en", "Hello").validate().unwrap_err();
        assert!(matches!(err, OneSignalError::InvalidNotification(_)));
    }
}
