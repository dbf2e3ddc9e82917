//! Paging settings.

use std::num::{NonZeroU32, NonZeroUsize};

use serde::Deserialize;

use crate::repository::DEFAULT_MAX_ITEMS;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Posts requested per page.
    pub page_size: NonZeroU32,
    /// Hard cap on posts loaded in one session.
    pub max_items: NonZeroUsize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: NonZeroU32::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroU32::MIN),
            max_items: NonZeroUsize::new(DEFAULT_MAX_ITEMS).unwrap_or(NonZeroUsize::MIN),
        }
    }
}
