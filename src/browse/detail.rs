use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::Post;

/// Everything the detail view shows for one post.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    pub id: String,
    pub title: String,
    pub author: String,
    pub age: String,
    pub comment_count: u32,
    pub text: Option<String>,
    pub external_url: Option<String>,
    pub reddit_url: String,
    /// Images to try in order; the linked content first, then the thumbnail.
    pub image_candidates: Vec<String>,
    pub image_file_name: String,
    pub is_read: bool,
}

impl PostDetail {
    pub fn new(post: &Post, now: DateTime<Utc>) -> Self {
        let image_candidates = [post.external_url.as_deref(), post.thumbnail_url.as_deref()]
            .into_iter()
            .flatten()
            .filter(|url| is_http_url(url))
            .map(String::from)
            .fold(Vec::new(), |mut acc, url| {
                if !acc.contains(&url) {
                    acc.push(url);
                }
                acc
            });

        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            author: post.author.clone(),
            age: post.relative_age(now),
            comment_count: post.comment_count,
            text: post.body_text.clone(),
            external_url: post.external_url.clone(),
            reddit_url: post.reddit_url(),
            image_candidates,
            image_file_name: post.image_file_name(),
            is_read: post.is_read,
        }
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.image_candidates.first().map(String::as_str)
    }

    /// Next image to try after `failed` could not be loaded.
    pub fn fallback_image(&self, failed: &str) -> Option<&str> {
        self.image_candidates
            .iter()
            .skip_while(|url| url.as_str() != failed)
            .nth(1)
            .map(String::as_str)
    }
}

// The thumbnail field also carries markers like "self" and "default".
fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
