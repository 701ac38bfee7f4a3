use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::stage::Stages;

/// Publish dates are written as `2025-03-14T16:00` in item documents.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// A tracked video production record.
///
/// Identified by `(name, category)`. The storage path is resolved by the
/// catalog when the item is read and is never written into the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub stages: Stages,
    #[serde(default)]
    pub delayed: bool,
    #[serde(default)]
    pub sponsorship: Sponsorship,
    /// Scheduled publish date, see [`DATE_FORMAT`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    /// Path of the rendered video file to upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Opaque identifier returned by the hosting backend after upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default)]
    pub posted: Posted,
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

/// Sponsorship details. A non-empty `blocked` reason holds the video back
/// regardless of how far production has progressed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sponsorship {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked: Option<String>,
}

impl Sponsorship {
    pub fn is_blocked(&self) -> bool {
        self.blocked
            .as_deref()
            .is_some_and(|reason| !reason.trim().is_empty())
    }
}

/// Announcement channels whose delivery is recorded on the item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Slack,
    Calendar,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Email => write!(f, "email"),
            Channel::Slack => write!(f, "slack"),
            Channel::Calendar => write!(f, "calendar"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Posted {
    #[serde(default)]
    pub email: bool,
    #[serde(default)]
    pub slack: bool,
    #[serde(default)]
    pub calendar: bool,
}

impl Posted {
    pub fn get(&self, channel: Channel) -> bool {
        match channel {
            Channel::Email => self.email,
            Channel::Slack => self.slack,
            Channel::Calendar => self.calendar,
        }
    }

    pub fn set(&mut self, channel: Channel, posted: bool) {
        match channel {
            Channel::Email => self.email = posted,
            Channel::Slack => self.slack = posted,
            Channel::Calendar => self.calendar = posted,
        }
    }
}

impl Item {
    pub fn new(name: String, category: String) -> Self {
        Self {
            name,
            category,
            stages: Stages::default(),
            delayed: false,
            sponsorship: Sponsorship::default(),
            date: None,
            title: None,
            description: None,
            tags: Vec::new(),
            project_name: None,
            project_url: None,
            video_file: None,
            thumbnail: None,
            video_id: None,
            posted: Posted::default(),
            path: None,
        }
    }

    /// Parse the publish date, accepting the canonical [`DATE_FORMAT`] as
    /// well as seconds precision, RFC 3339 and bare dates.
    pub fn publish_date(&self) -> Option<NaiveDateTime> {
        let raw = self.date.as_deref()?.trim();

        NaiveDateTime::parse_from_str(raw, DATE_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }

    /// Ordering key for date-sorted listings. Missing or unparsable dates
    /// sort before every real date.
    pub fn date_sort_key(&self) -> NaiveDateTime {
        self.publish_date().unwrap_or(NaiveDateTime::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_with_date(date: Option<&str>) -> Item {
        let mut item = Item::new("vid".to_string(), "cat".to_string());
        item.date = date.map(str::to_string);
        item
    }

    #[test]
    fn test_publish_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(16, 0, 0)
            .unwrap();
        assert_eq!(
            item_with_date(Some("2025-03-14T16:00")).publish_date(),
            Some(expected)
        );
        assert_eq!(
            item_with_date(Some("2025-03-14T16:00:00")).publish_date(),
            Some(expected)
        );
        assert_eq!(
            item_with_date(Some("2025-03-14T16:00:00Z")).publish_date(),
            Some(expected)
        );
        assert!(item_with_date(Some("2025-03-14")).publish_date().is_some());
    }

    #[test]
    fn test_unparsable_date_sorts_first() {
        let bad = item_with_date(Some("next tuesday"));
        let missing = item_with_date(None);
        let real = item_with_date(Some("1999-01-01T00:00"));

        assert_eq!(bad.date_sort_key(), NaiveDateTime::MIN);
        assert_eq!(missing.date_sort_key(), NaiveDateTime::MIN);
        assert!(bad.date_sort_key() < real.date_sort_key());
    }

    #[test]
    fn test_sponsorship_blocked_requires_reason() {
        let mut sponsorship = Sponsorship::default();
        assert!(!sponsorship.is_blocked());

        sponsorship.blocked = Some("   ".to_string());
        assert!(!sponsorship.is_blocked());

        sponsorship.blocked = Some("waiting for contract".to_string());
        assert!(sponsorship.is_blocked());
    }

    #[test]
    fn test_posted_flags_by_channel() {
        let mut posted = Posted::default();
        posted.set(Channel::Slack, true);
        assert!(posted.get(Channel::Slack));
        assert!(!posted.get(Channel::Email));
        assert!(!posted.get(Channel::Calendar));
    }

    #[test]
    fn test_path_not_serialized() {
        let mut item = item_with_date(None);
        item.path = Some(PathBuf::from("/tmp/cat/vid.yaml"));
        let yaml = serde_yaml::to_string(&item).unwrap();
        assert!(!yaml.contains("path"));
    }
}
