//! List view state and its reducer.
//!
//! Every user gesture and every load result is a [`ListEvent`]. [`reduce`]
//! folds one event into [`ListState`] and returns the repository work it
//! needs done as [`ListEffect`]s; the controller runs those and feeds the
//! outcome back in as another event.

use crate::domain::{Cursor, Page, Post};

#[derive(Debug, Clone)]
pub enum ListEvent {
    /// Pull-to-refresh: drop cached posts and reload from the network.
    Refresh,
    /// Scrolled to the end of the list.
    LoadMore,
    /// A load finished. `reset` replaces the list instead of appending.
    PageLoaded { page: Page, reset: bool },
    LoadFailed(String),
    SelectPost(Post),
    DismissPost(Post),
    DismissAll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEffect {
    InvalidateLocalData,
    /// Reload the current list. Served from cache unless invalidated.
    LoadFirst,
    LoadAfter(Cursor),
    MarkRead(Post),
    Filter(Post),
}

#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub posts: Vec<Post>,
    pub next: Option<Cursor>,
    pub selected: Option<Post>,
    pub is_refreshing: bool,
    pub is_loading: bool,
    pub last_error: Option<String>,
    /// Set by "dismiss all"; the list stays empty until the next full reload.
    pub cleared: bool,
}

impl ListState {
    pub fn can_load_more(&self) -> bool {
        !self.is_loading && !self.cleared && self.next.is_some()
    }
}

pub fn reduce(state: &mut ListState, event: ListEvent) -> Vec<ListEffect> {
    match event {
        ListEvent::Refresh => {
            state.is_refreshing = true;
            state.is_loading = true;
            state.cleared = false;
            state.last_error = None;
            vec![ListEffect::InvalidateLocalData, ListEffect::LoadFirst]
        }
        ListEvent::LoadMore => {
            if !state.can_load_more() {
                return Vec::new();
            }
            match state.next.clone() {
                Some(cursor) => {
                    state.is_loading = true;
                    vec![ListEffect::LoadAfter(cursor)]
                }
                None => Vec::new(),
            }
        }
        ListEvent::PageLoaded { page, reset } => {
            state.is_loading = false;
            state.is_refreshing = false;
            state.last_error = None;
            if reset {
                state.posts = page.posts;
                state.cleared = false;
            } else {
                state.posts.extend(page.posts);
            }
            state.next = page.after;

            let refreshed = state
                .selected
                .as_ref()
                .and_then(|selected| state.posts.iter().find(|p| *p == selected).cloned());
            if refreshed.is_some() {
                state.selected = refreshed;
            }
            Vec::new()
        }
        ListEvent::LoadFailed(message) => {
            state.is_loading = false;
            state.is_refreshing = false;
            state.last_error = Some(message);
            Vec::new()
        }
        ListEvent::SelectPost(post) => {
            state.selected = Some(post.with_read(true));
            state.is_loading = true;
            vec![ListEffect::MarkRead(post), ListEffect::LoadFirst]
        }
        ListEvent::DismissPost(post) => {
            if state.selected.as_ref() == Some(&post) {
                state.selected = None;
            }
            state.is_loading = true;
            vec![ListEffect::Filter(post), ListEffect::LoadFirst]
        }
        ListEvent::DismissAll => {
            state.posts.clear();
            state.selected = None;
            state.cleared = true;
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::test_post;

    fn page(ids: &[&str], after: Option<&str>) -> Page {
        Page {
            posts: ids.iter().map(|id| test_post(id)).collect(),
            after: after.map(Cursor::from),
            before: None,
        }
    }

    fn loaded(ids: &[&str], after: Option<&str>) -> ListState {
        let mut state = ListState::default();
        reduce(
            &mut state,
            ListEvent::PageLoaded {
                page: page(ids, after),
                reset: true,
            },
        );
        state
    }

    #[test]
    fn test_refresh_invalidates_then_loads() {
        let mut state = ListState::default();
        let effects = reduce(&mut state, ListEvent::Refresh);

        assert_eq!(
            effects,
            vec![ListEffect::InvalidateLocalData, ListEffect::LoadFirst]
        );
        assert!(state.is_refreshing);
        assert!(state.is_loading);
    }

    #[test]
    fn test_page_loaded_clears_refreshing() {
        let mut state = ListState::default();
        reduce(&mut state, ListEvent::Refresh);
        reduce(
            &mut state,
            ListEvent::PageLoaded {
                page: page(&["a", "b"], Some("t3_b")),
                reset: true,
            },
        );

        assert!(!state.is_refreshing);
        assert!(!state.is_loading);
        assert_eq!(state.posts.len(), 2);
        assert_eq!(state.next, Some(Cursor::from("t3_b")));
    }

    #[test]
    fn test_load_more_appends() {
        let mut state = loaded(&["a", "b"], Some("t3_b"));

        let effects = reduce(&mut state, ListEvent::LoadMore);
        assert_eq!(effects, vec![ListEffect::LoadAfter(Cursor::from("t3_b"))]);

        reduce(
            &mut state,
            ListEvent::PageLoaded {
                page: page(&["c"], None),
                reset: false,
            },
        );
        let ids: Vec<&str> = state.posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(state.next, None);
    }

    #[test]
    fn test_load_more_ignored_without_cursor() {
        let mut state = loaded(&["a"], None);
        assert!(reduce(&mut state, ListEvent::LoadMore).is_empty());
        assert!(!state.is_loading);
    }

    #[test]
    fn test_load_more_ignored_while_loading() {
        let mut state = loaded(&["a"], Some("t3_a"));
        assert_eq!(reduce(&mut state, ListEvent::LoadMore).len(), 1);
        assert!(reduce(&mut state, ListEvent::LoadMore).is_empty());
    }

    #[test]
    fn test_failure_keeps_previous_posts() {
        let mut state = loaded(&["a", "b"], Some("t3_b"));
        reduce(&mut state, ListEvent::Refresh);
        reduce(&mut state, ListEvent::LoadFailed("boom".into()));

        assert_eq!(state.posts.len(), 2);
        assert_eq!(state.last_error, Some("boom".into()));
        assert!(!state.is_refreshing);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_select_marks_read_and_reloads() {
        let mut state = loaded(&["a", "b"], None);
        let post = test_post("b");

        let effects = reduce(&mut state, ListEvent::SelectPost(post.clone()));

        assert_eq!(
            effects,
            vec![ListEffect::MarkRead(post.clone()), ListEffect::LoadFirst]
        );
        let selected = state.selected.as_ref().unwrap();
        assert_eq!(selected, &post);
        assert!(selected.is_read);
    }

    #[test]
    fn test_dismiss_selected_post_clears_selection() {
        let mut state = loaded(&["a", "b"], None);
        reduce(&mut state, ListEvent::SelectPost(test_post("a")));

        let effects = reduce(&mut state, ListEvent::DismissPost(test_post("a")));
        assert_eq!(
            effects,
            vec![ListEffect::Filter(test_post("a")), ListEffect::LoadFirst]
        );
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_dismiss_other_post_keeps_selection() {
        let mut state = loaded(&["a", "b"], None);
        reduce(&mut state, ListEvent::SelectPost(test_post("a")));
        reduce(&mut state, ListEvent::DismissPost(test_post("b")));
        assert_eq!(state.selected, Some(test_post("a")));
    }

    #[test]
    fn test_dismiss_all_empties_until_refresh() {
        let mut state = loaded(&["a", "b"], Some("t3_b"));
        reduce(&mut state, ListEvent::SelectPost(test_post("a")));

        assert!(reduce(&mut state, ListEvent::DismissAll).is_empty());
        assert!(state.posts.is_empty());
        assert!(state.selected.is_none());
        assert!(reduce(&mut state, ListEvent::LoadMore).is_empty());

        reduce(&mut state, ListEvent::Refresh);
        assert!(!state.cleared);
    }

    #[test]
    fn test_reload_after_dismiss_all_restores_paging() {
        let mut state = loaded(&["a", "b"], Some("t3_b"));
        reduce(&mut state, ListEvent::DismissAll);

        let effects = reduce(&mut state, ListEvent::SelectPost(test_post("a")));
        assert_eq!(
            effects,
            vec![ListEffect::MarkRead(test_post("a")), ListEffect::LoadFirst]
        );
        reduce(
            &mut state,
            ListEvent::PageLoaded {
                page: page(&["a", "b"], Some("t3_b")),
                reset: true,
            },
        );

        assert_eq!(state.posts.len(), 2);
        assert!(!state.cleared);
        assert!(state.can_load_more());
        assert_eq!(
            reduce(&mut state, ListEvent::LoadMore),
            vec![ListEffect::LoadAfter(Cursor::from("t3_b"))]
        );
    }
}
