//! Raw shape of the listing JSON. Only the fields the client reads are
//! declared; everything else in the payload is ignored.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListingResponse {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<ListingChild>,
    pub after: Option<String>,
    pub before: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListingChild {
    pub data: RawPost,
}

#[derive(Debug, Deserialize)]
pub struct RawPost {
    pub id: String,
    pub name: String,
    pub title: String,
    pub author: String,
    pub selftext: Option<String>,
    pub permalink: String,
    pub thumbnail: Option<String>,
    /// Sent as a float by the live API, as an integer by some mirrors.
    pub created_utc: f64,
    pub url: Option<String>,
    #[serde(default)]
    pub num_comments: u32,
    pub preview: Option<RawPreview>,
}

#[derive(Debug, Deserialize)]
pub struct RawPreview {
    #[serde(default)]
    pub images: Vec<RawPreviewImage>,
}

#[derive(Debug, Deserialize)]
pub struct RawPreviewImage {
    pub source: RawImageSource,
}

#[derive(Debug, Deserialize)]
pub struct RawImageSource {
    pub url: String,
}
