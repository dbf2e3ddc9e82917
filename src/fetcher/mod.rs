pub mod http_fetcher;
#[cfg(test)]
pub(crate) mod scripted;

use std::num::NonZeroU32;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{Cursor, Page};

/// Time window requested from the top listing. Not configurable.
pub const TOP_WINDOW: &str = "day";

/// One round trip to the top listing. Implementations do not retry; any
/// failure comes back as [`FrontpageError::Fetch`](crate::app::FrontpageError::Fetch).
#[async_trait]
pub trait PostSource {
    async fn fetch_top_page(
        &self,
        count: NonZeroU32,
        after: Option<&Cursor>,
        before: Option<&Cursor>,
    ) -> Result<Page>;
}
