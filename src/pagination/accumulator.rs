//! Post accumulator for "load more" listings
//!
//! Holds every summary loaded so far plus the cursor of the next page.
//! Pages are appended in fetch order; nothing is reordered or deduplicated.

use crate::cms::{PostSource, RawDocument};
use crate::error::{Error, Result};
use crate::post::PostSummary;
use crate::types::{OptionStringExt, Page};
use tracing::debug;

/// Accumulated listing state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostAccumulator {
    posts: Vec<PostSummary>,
    next_page: Option<String>,
    pages_loaded: u32,
}

impl PostAccumulator {
    /// Seed the accumulation with the first page
    pub fn initialize(first_page: Page<PostSummary>) -> Self {
        Self {
            posts: first_page.results,
            next_page: first_page.next_page.none_if_empty(),
            pages_loaded: 1,
        }
    }

    /// Normalize a raw first page and seed the accumulation with it
    pub fn from_raw(first_page: Page<RawDocument>) -> Result<Self> {
        Ok(Self::initialize(first_page.try_map(PostSummary::try_from)?))
    }

    /// Whether another page can be loaded
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    /// Cursor of the next page
    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    /// Every summary loaded so far, in fetch order
    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Number of pages merged, including the first one
    pub fn pages_loaded(&self) -> u32 {
        self.pages_loaded
    }

    pub fn into_posts(self) -> Vec<PostSummary> {
        self.posts
    }

    /// Fetch the next page and append it.
    ///
    /// State is only touched after the fetch and the normalization of the
    /// whole page succeeded, so a failed or dropped call leaves it as it was.
    /// Returns the number of appended posts.
    pub async fn load_more<S>(&mut self, source: &S) -> Result<usize>
    where
        S: PostSource + ?Sized,
    {
        let cursor = self.next_page.as_deref().ok_or(Error::NoMorePages)?;

        let page = source
            .fetch_page(cursor)
            .await
            .map_err(Error::into_fetch_failed)?;
        let page = page.try_map(PostSummary::try_from)?;

        let added = page.results.len();
        self.posts.extend(page.results);
        self.next_page = page.next_page.none_if_empty();
        self.pages_loaded += 1;

        debug!(
            added,
            total = self.posts.len(),
            has_more = self.has_more(),
            "merged listing page"
        );
        Ok(added)
    }

    /// Keep loading until the cursor runs out or `max_pages` further pages
    /// were merged. Returns the number of appended posts.
    pub async fn load_all<S>(&mut self, source: &S, max_pages: Option<u32>) -> Result<usize>
    where
        S: PostSource + ?Sized,
    {
        let mut added = 0;
        let mut pages = 0u32;

        while self.has_more() {
            if max_pages.is_some_and(|max| pages >= max) {
                debug!(pages, "reached page limit");
                break;
            }
            added += self.load_more(source).await?;
            pages += 1;
        }

        Ok(added)
    }
}
