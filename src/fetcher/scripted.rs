//! Test source that replays queued pages and records every request.

use std::collections::VecDeque;
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::app::{FetchError, Result};
use crate::domain::{Cursor, Page, Post};
use crate::fetcher::PostSource;

pub type Call = (u32, Option<Cursor>, Option<Cursor>);

#[derive(Default)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<Page>>>,
    calls: Mutex<Vec<Call>>,
    call_count: AtomicUsize,
}

impl ScriptedSource {
    pub fn push_page(&self, posts: Vec<Post>, after: Option<&str>, before: Option<&str>) {
        self.responses.lock().unwrap().push_back(Ok(Page {
            posts,
            after: after.map(Cursor::from),
            before: before.map(Cursor::from),
        }));
    }

    pub fn push_error(&self) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(FetchError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                url: "http://test/top".into(),
            }
            .into()));
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostSource for ScriptedSource {
    async fn fetch_top_page(
        &self,
        count: NonZeroU32,
        after: Option<&Cursor>,
        before: Option<&Cursor>,
    ) -> Result<Page> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.calls
            .lock()
            .unwrap()
            .push((count.get(), after.cloned(), before.cloned()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected fetch")
    }
}
