use std::collections::VecDeque;
use std::num::NonZeroU32;
use std::sync::Arc;

use crate::browse::list::{reduce, ListEffect, ListEvent, ListState};
use crate::domain::Cursor;
use crate::repository::PostRepository;

/// Drives a [`ListState`] against a [`PostRepository`].
///
/// Effects run one at a time in the order the reducer emitted them, so at
/// most one page request is in flight per controller.
pub struct ListController {
    repository: Arc<PostRepository>,
    page_size: NonZeroU32,
    state: ListState,
}

impl ListController {
    pub fn new(repository: Arc<PostRepository>, page_size: NonZeroU32) -> Self {
        Self {
            repository,
            page_size,
            state: ListState::default(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub async fn dispatch(&mut self, event: ListEvent) {
        let mut pending: VecDeque<ListEffect> = reduce(&mut self.state, event).into();

        while let Some(effect) = pending.pop_front() {
            if let Some(outcome) = self.run(effect).await {
                pending.extend(reduce(&mut self.state, outcome));
            }
        }
    }

    /// Keeps loading until the repository reports no further page.
    pub async fn load_all(&mut self) {
        while self.state.can_load_more() {
            self.dispatch(ListEvent::LoadMore).await;
            if self.state.last_error.is_some() {
                break;
            }
        }
    }

    async fn run(&self, effect: ListEffect) -> Option<ListEvent> {
        match effect {
            ListEffect::InvalidateLocalData => {
                self.repository.invalidate_local_data();
                None
            }
            ListEffect::MarkRead(post) => {
                self.repository.mark_post_as_read(&post);
                None
            }
            ListEffect::Filter(post) => {
                self.repository.filter_post(&post);
                None
            }
            ListEffect::LoadFirst => Some(self.load(None).await),
            ListEffect::LoadAfter(cursor) => Some(self.load(Some(cursor)).await),
        }
    }

    async fn load(&self, after: Option<Cursor>) -> ListEvent {
        let reset = after.is_none();
        match self
            .repository
            .top_posts_page(self.page_size, after.as_ref(), None)
            .await
        {
            Ok(page) => ListEvent::PageLoaded { page, reset },
            Err(e) => {
                tracing::warn!("Error loading page: {}", e);
                ListEvent::LoadFailed(e.to_string())
            }
        }
    }
}
