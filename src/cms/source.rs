//! The query seam between the CMS and the listing/navigation components

use super::types::RawDocument;
use crate::error::Result;
use crate::types::{Page, SortOrder};
use async_trait::async_trait;

/// Source of raw post pages.
///
/// [`crate::pagination::PostAccumulator`] and [`crate::neighbors::NeighborResolver`]
/// only ever talk to the CMS through this trait, so any implementation
/// (the HTTP [`super::CmsClient`], a fixture, a cache) can be injected.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch the page identified by an opaque continuation cursor
    async fn fetch_page(&self, cursor: &str) -> Result<Page<RawDocument>>;

    /// Fetch at most one post positioned immediately after `after`,
    /// ordered by first publication date in `order`
    async fn neighbor_page(&self, after: &str, order: SortOrder) -> Result<Page<RawDocument>>;
}

#[async_trait]
impl<'a, S: PostSource + ?Sized> PostSource for &'a S {
    async fn fetch_page(&self, cursor: &str) -> Result<Page<RawDocument>> {
        (**self).fetch_page(cursor).await
    }

    async fn neighbor_page(&self, after: &str, order: SortOrder) -> Result<Page<RawDocument>> {
        (**self).neighbor_page(after, order).await
    }
}

#[async_trait]
impl<S: PostSource + ?Sized> PostSource for std::sync::Arc<S> {
    async fn fetch_page(&self, cursor: &str) -> Result<Page<RawDocument>> {
        (**self).fetch_page(cursor).await
    }

    async fn neighbor_page(&self, after: &str, order: SortOrder) -> Result<Page<RawDocument>> {
        (**self).neighbor_page(after, order).await
    }
}
