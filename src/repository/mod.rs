//! In-memory post repository.
//!
//! Sits between a [`PostSource`] and whatever pages through the listing.
//! Every page fetched in the session is cached; dismissed and read posts
//! are tracked as id sets and applied on the way out, so the cache itself
//! is never rewritten except by [`PostRepository::invalidate_local_data`].

use std::collections::HashSet;
use std::num::{NonZeroU32, NonZeroUsize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::app::{FrontpageError, Result};
use crate::domain::{Cursor, Page, Post};
use crate::fetcher::PostSource;

pub const DEFAULT_MAX_ITEMS: usize = 50;

#[derive(Debug, Default)]
struct RepositoryState {
    cache: Vec<Post>,
    dismissed: HashSet<String>,
    read: HashSet<String>,
}

impl RepositoryState {
    /// Dismissed posts removed, read flag set on copies, order kept.
    fn overlay<'a, I>(&self, posts: I) -> Vec<Post>
    where
        I: IntoIterator<Item = &'a Post>,
    {
        posts
            .into_iter()
            .filter(|post| !self.dismissed.contains(&post.id))
            .map(|post| post.with_read(self.read.contains(&post.id)))
            .collect()
    }
}

pub struct PostRepository {
    source: Arc<dyn PostSource + Send + Sync>,
    state: Arc<Mutex<RepositoryState>>,
    max_items: usize,
}

impl PostRepository {
    pub fn new(source: Arc<dyn PostSource + Send + Sync>) -> Self {
        Self {
            source,
            state: Arc::new(Mutex::new(RepositoryState::default())),
            max_items: DEFAULT_MAX_ITEMS,
        }
    }

    pub fn with_max_items(
        source: Arc<dyn PostSource + Send + Sync>,
        max_items: NonZeroUsize,
    ) -> Self {
        Self {
            max_items: max_items.get(),
            ..Self::new(source)
        }
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn cached_len(&self) -> usize {
        self.lock().cache.len()
    }

    pub fn is_dismissed(&self, id: &str) -> bool {
        self.lock().dismissed.contains(id)
    }

    pub fn is_read(&self, id: &str) -> bool {
        self.lock().read.contains(id)
    }

    /// Returns the page at the given cursor with dismissed posts removed and
    /// read posts flagged.
    ///
    /// A request without cursors is answered from the cache when it holds
    /// anything, so overlay changes can be re-rendered without a round trip.
    /// Any other request goes to the source and its posts are appended to the
    /// cache. Once the cache holds `max_items` posts the returned page never
    /// carries an `after` cursor.
    pub async fn top_posts_page(
        &self,
        count: NonZeroU32,
        after: Option<&Cursor>,
        before: Option<&Cursor>,
    ) -> Result<Page> {
        if after.is_none() && before.is_none() {
            if let Some(page) = self.local_page() {
                tracing::debug!("Serving {} posts from local cache", page.posts.len());
                return Ok(page);
            }
        }

        tracing::debug!(
            "Loading {} posts after: {:?} before: {:?}",
            count,
            after.map(Cursor::as_str),
            before.map(Cursor::as_str)
        );

        // The fetch runs on its own task so an abandoned caller still lands
        // the posts in the cache.
        let source = self.source.clone();
        let state = self.state.clone();
        let max_items = self.max_items;
        let after = after.cloned();
        let before = before.cloned();

        let handle = tokio::spawn(async move {
            let fetched = source
                .fetch_top_page(count, after.as_ref(), before.as_ref())
                .await;

            let page = match fetched {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!("Failed to load top posts: {}", e);
                    return Err(e);
                }
            };

            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            state.cache.extend(page.posts.iter().cloned());
            tracing::info!(
                "Fetched {} posts ({} cached)",
                page.posts.len(),
                state.cache.len()
            );

            let after = if state.cache.len() >= max_items {
                tracing::debug!("Reached {} cached posts, stopping pagination", max_items);
                None
            } else {
                page.after
            };

            Ok(Page {
                posts: state.overlay(&page.posts),
                after,
                before: page.before,
            })
        });

        handle
            .await
            .map_err(|e| FrontpageError::Task(e.to_string()))?
    }

    /// Hides the post from every page returned from now on. The cached copy
    /// stays.
    pub fn filter_post(&self, post: &Post) {
        self.lock().dismissed.insert(post.id.clone());
    }

    pub fn mark_post_as_read(&self, post: &Post) {
        self.lock().read.insert(post.id.clone());
    }

    /// Drops the cached posts so the next cursorless request hits the
    /// network. Dismissed and read state are kept.
    pub fn invalidate_local_data(&self) {
        let mut state = self.lock();
        tracing::debug!("Invalidating {} cached posts", state.cache.len());
        state.cache.clear();
    }

    fn local_page(&self) -> Option<Page> {
        let state = self.lock();
        let last = state.cache.last()?;

        let after = if state.cache.len() >= self.max_items {
            None
        } else {
            Some(Cursor::new(last.fullname.clone()))
        };

        Some(Page {
            posts: state.overlay(&state.cache),
            after,
            before: None,
        })
    }

    fn lock(&self) -> MutexGuard<'_, RepositoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
