//! In-memory `PostSource` used by unit tests

use super::source::PostSource;
use super::types::{RawDocument, RawPostData};
use crate::error::{Error, Result};
use crate::types::{Page, SortOrder};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Build a summary-shaped raw document
pub fn raw_post(uid: &str) -> RawDocument {
    RawDocument {
        id: Some(format!("id-{uid}")),
        uid: Some(uid.to_string()),
        first_publication_date: Some("2021-03-15T00:00:00Z".to_string()),
        data: RawPostData {
            title: Some(format!("Title of {uid}")),
            subtitle: Some(format!("Subtitle of {uid}")),
            author: Some("Ana".to_string()),
            ..RawPostData::default()
        },
    }
}

/// Build a page of summary-shaped raw documents
pub fn raw_page(uids: &[&str], next: Option<&str>) -> Page<RawDocument> {
    Page::new(
        uids.iter().map(|uid| raw_post(uid)).collect(),
        next.map(str::to_string),
    )
}

#[derive(Default)]
pub struct FixtureSource {
    pages: HashMap<String, Page<RawDocument>>,
    failing: HashSet<String>,
    stalling: HashSet<String>,
    /// Posts in ascending publication order
    timeline: Vec<RawDocument>,
    fail_neighbors: bool,
    echo_target: bool,
    calls: Mutex<Vec<String>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_page(mut self, cursor: &str, page: Page<RawDocument>) -> Self {
        self.pages.insert(cursor.to_string(), page);
        self
    }

    #[must_use]
    pub fn failing_on(mut self, cursor: &str) -> Self {
        self.failing.insert(cursor.to_string());
        self
    }

    /// Never answer a fetch of `cursor`
    #[must_use]
    pub fn stalling_on(mut self, cursor: &str) -> Self {
        self.stalling.insert(cursor.to_string());
        self
    }

    #[must_use]
    pub fn with_timeline(mut self, uids: &[&str]) -> Self {
        self.timeline = uids.iter().map(|uid| raw_post(uid)).collect();
        self
    }

    #[must_use]
    pub fn failing_neighbors(mut self) -> Self {
        self.fail_neighbors = true;
        self
    }

    /// Answer every neighbor query with the anchor document itself
    #[must_use]
    pub fn echoing_target(mut self) -> Self {
        self.echo_target = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PostSource for FixtureSource {
    async fn fetch_page(&self, cursor: &str) -> Result<Page<RawDocument>> {
        self.record(format!("page:{cursor}"));
        if self.failing.contains(cursor) {
            return Err(Error::http_status(503, "unavailable"));
        }
        if self.stalling.contains(cursor) {
            std::future::pending::<()>().await;
        }
        self.pages
            .get(cursor)
            .cloned()
            .ok_or_else(|| Error::http_status(404, format!("unknown cursor {cursor}")))
    }

    async fn neighbor_page(&self, after: &str, order: SortOrder) -> Result<Page<RawDocument>> {
        self.record(format!("neighbor:{after}:{order:?}"));
        if self.fail_neighbors {
            return Err(Error::Timeout { timeout_ms: 30_000 });
        }

        let Some(index) = self
            .timeline
            .iter()
            .position(|doc| doc.uid.as_deref() == Some(after))
        else {
            return Ok(Page::last(vec![]));
        };

        if self.echo_target {
            return Ok(Page::last(vec![self.timeline[index].clone()]));
        }

        let neighbor = match order {
            SortOrder::Ascending => self.timeline.get(index + 1),
            SortOrder::Descending => index.checked_sub(1).and_then(|i| self.timeline.get(i)),
        };
        Ok(Page::last(neighbor.cloned().into_iter().collect()))
    }
}
