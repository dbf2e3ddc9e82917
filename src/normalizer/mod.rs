pub mod response;

use chrono::{DateTime, Utc};
use html_escape::decode_html_entities;

use crate::app::{FetchError, Result};
use crate::domain::{Cursor, Page, Post};

use response::{ListingChild, ListingResponse, RawPost};

/// Converts raw listing bodies into domain [`Page`]s.
#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, body: &[u8]) -> Result<Page> {
        let response: ListingResponse = serde_json::from_slice(body).map_err(FetchError::from)?;
        self.convert(response)
    }

    pub fn convert(&self, response: ListingResponse) -> Result<Page> {
        let data = response.data;

        let posts = data
            .children
            .into_iter()
            .map(|ListingChild { data }| convert_post(data))
            .collect::<Result<Vec<_>>>()?;

        Ok(Page {
            posts,
            after: cursor(data.after),
            before: cursor(data.before),
        })
    }
}

fn convert_post(raw: RawPost) -> Result<Post> {
    let thumbnail_url = thumbnail_url(&raw);
    let created_at = timestamp(raw.created_utc)?;

    Ok(Post {
        id: raw.id,
        fullname: raw.name,
        title: raw.title,
        author: raw.author,
        body_text: raw.selftext.filter(|text| !text.is_empty()),
        permalink: raw.permalink,
        created_at,
        external_url: raw.url,
        thumbnail_url,
        comment_count: raw.num_comments,
        is_read: false,
    })
}

/// Preview images come HTML-encoded (`&amp;` in query strings), the bare
/// thumbnail field does not.
fn thumbnail_url(raw: &RawPost) -> Option<String> {
    raw.preview
        .as_ref()
        .and_then(|preview| preview.images.first())
        .map(|image| decode_html_entities(&image.source.url).to_string())
        .or_else(|| raw.thumbnail.clone())
}

fn timestamp(epoch_secs: f64) -> Result<DateTime<Utc>> {
    if !epoch_secs.is_finite() {
        return Err(FetchError::Timestamp(epoch_secs).into());
    }
    DateTime::from_timestamp(epoch_secs.trunc() as i64, 0)
        .ok_or_else(|| FetchError::Timestamp(epoch_secs).into())
}

fn cursor(token: Option<String>) -> Option<Cursor> {
    token.filter(|t| !t.is_empty()).map(Cursor::from)
}
