use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const REDDIT_BASE_URL: &str = "https://reddit.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    /// Token the listing API accepts as an `after`/`before` cursor.
    pub fullname: String,
    pub title: String,
    pub author: String,
    pub body_text: Option<String>,
    pub permalink: String,
    pub created_at: DateTime<Utc>,
    pub external_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub comment_count: u32,
    pub is_read: bool,
}

// Identity is the API id alone, so a read copy still matches its original.
impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Post {}

impl Hash for Post {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Post {
    pub fn reddit_url(&self) -> String {
        format!("{}{}", REDDIT_BASE_URL, self.permalink)
    }

    /// File name used when saving the post's image locally.
    pub fn image_file_name(&self) -> String {
        format!("reddit-{}", self.fullname)
    }

    pub fn with_read(&self, is_read: bool) -> Self {
        Self {
            is_read,
            ..self.clone()
        }
    }

    /// Human readable age relative to `now`, e.g. "3 hours ago".
    pub fn relative_age(&self, now: DateTime<Utc>) -> String {
        relative_time(self.created_at, now)
    }
}

pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();
    if secs < 60 {
        return "just now".to_string();
    }

    let (amount, unit) = match secs {
        s if s < 3600 => (s / 60, "minute"),
        s if s < 86_400 => (s / 3600, "hour"),
        s if s < 30 * 86_400 => (s / 86_400, "day"),
        s if s < 365 * 86_400 => (s / (30 * 86_400), "month"),
        s => (s / (365 * 86_400), "year"),
    };

    if amount == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", amount, unit)
    }
}

#[cfg(test)]
pub(crate) fn test_post(id: &str) -> Post {
    Post {
        id: id.to_string(),
        fullname: format!("t3_{}", id),
        title: format!("Title {}", id),
        author: "someone".to_string(),
        body_text: None,
        permalink: format!("/r/test/comments/{}/", id),
        created_at: DateTime::from_timestamp(1_600_000_000, 0).unwrap(),
        external_url: None,
        thumbnail_url: None,
        comment_count: 0,
        is_read: false,
    }
}
