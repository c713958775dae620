//! Previous/next post resolution
//!
//! Each direction is a single-item query ordered by publication date and
//! anchored right after the target post. Two outcomes mean "no neighbor":
//! an empty page, or a page whose only item is the target itself (the CMS
//! returns the anchor when it has nothing past it in that direction).

use crate::cms::{PostSource, RawDocument};
use crate::error::{Error, Result};
use crate::post::NeighborPost;
use crate::types::{Page, SortOrder};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Both navigation targets of a post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    pub previous: Option<NeighborPost>,
    pub next: Option<NeighborPost>,
}

/// Resolves chronological neighbors through an injected source
#[derive(Debug, Clone)]
pub struct NeighborResolver<S> {
    source: S,
}

impl<S: PostSource> NeighborResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The post published right after `target_id`
    pub async fn resolve_next(&self, target_id: &str) -> Result<Option<NeighborPost>> {
        self.resolve(target_id, SortOrder::Ascending).await
    }

    /// The post published right before `target_id`
    pub async fn resolve_previous(&self, target_id: &str) -> Result<Option<NeighborPost>> {
        self.resolve(target_id, SortOrder::Descending).await
    }

    /// Resolve both directions concurrently
    pub async fn resolve_both(&self, target_id: &str) -> Result<Neighbors> {
        let (previous, next) = futures::future::try_join(
            self.resolve_previous(target_id),
            self.resolve_next(target_id),
        )
        .await?;
        Ok(Neighbors { previous, next })
    }

    async fn resolve(&self, target_id: &str, order: SortOrder) -> Result<Option<NeighborPost>> {
        let page = self
            .source
            .neighbor_page(target_id, order)
            .await
            .map_err(Error::into_fetch_failed)?;

        let neighbor = project_neighbor(&page, target_id)?;
        debug!(
            target = %target_id,
            ?order,
            neighbor = neighbor.as_ref().map_or("-", |n| n.uid.as_str()),
            "resolved neighbor"
        );
        Ok(neighbor)
    }
}

/// Turn a single-item neighbor page into a projection
pub fn project_neighbor(page: &Page<RawDocument>, target_id: &str) -> Result<Option<NeighborPost>> {
    let Some(first) = page.results.first() else {
        return Ok(None);
    };
    if first.uid.as_deref() == Some(target_id) {
        return Ok(None);
    }
    NeighborPost::try_from(first).map(Some)
}
