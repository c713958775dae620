//! View assembly for the listing and post screens
//!
//! This is where the CMS client, the accumulator and the resolver meet.
//! Views hold plain normalized values; markup, styling and routing belong to
//! whatever renders them.

use crate::cms::{CmsClient, PostSource};
use crate::error::{Error, Result};
use crate::neighbors::{NeighborResolver, Neighbors};
use crate::pagination::PostAccumulator;
use crate::post::{reading_time_minutes, NeighborPost, PostDetail, PostSummary};
use serde::{Deserialize, Serialize};
use tracing::info;

/// The post listing with "load more"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    accumulator: PostAccumulator,
}

impl ListingView {
    /// Load the first listing page
    pub async fn load(client: &CmsClient) -> Result<Self> {
        let page_size = client.settings().page_size;
        let first = client
            .first_page(page_size)
            .await
            .map_err(Error::into_fetch_failed)?;
        let accumulator = PostAccumulator::from_raw(first)?;

        info!(
            posts = accumulator.len(),
            has_more = accumulator.has_more(),
            "listing loaded"
        );
        Ok(Self { accumulator })
    }

    /// Wrap an already seeded accumulator
    pub fn from_accumulator(accumulator: PostAccumulator) -> Self {
        Self { accumulator }
    }

    pub fn posts(&self) -> &[PostSummary] {
        self.accumulator.posts()
    }

    pub fn has_more(&self) -> bool {
        self.accumulator.has_more()
    }

    /// Append the next page; see [`PostAccumulator::load_more`]
    pub async fn load_more<S: PostSource + ?Sized>(&mut self, source: &S) -> Result<usize> {
        self.accumulator.load_more(source).await
    }

    /// Append up to `max_pages` further pages, or all of them
    pub async fn load_pages<S: PostSource + ?Sized>(
        &mut self,
        source: &S,
        max_pages: Option<u32>,
    ) -> Result<usize> {
        self.accumulator.load_all(source, max_pages).await
    }

    pub fn into_accumulator(self) -> PostAccumulator {
        self.accumulator
    }
}

/// Everything the post screen shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub post: PostDetail,
    /// Estimated reading time in minutes
    pub reading_time: u32,
    pub previous: Option<NeighborPost>,
    pub next: Option<NeighborPost>,
}

impl PostView {
    /// Build the view from an already fetched post
    pub fn new(post: PostDetail, neighbors: Neighbors) -> Self {
        Self {
            reading_time: reading_time_minutes(&post.content),
            post,
            previous: neighbors.previous,
            next: neighbors.next,
        }
    }

    /// Fetch a post by uid together with its neighbors
    pub async fn load(client: &CmsClient, uid: &str) -> Result<Self> {
        let raw = client
            .get_by_uid(uid)
            .await
            .map_err(Error::into_fetch_failed)?;
        let post = PostDetail::try_from(raw)?;

        let neighbors = NeighborResolver::new(client).resolve_both(&post.uid).await?;

        info!(
            uid = %post.uid,
            previous = neighbors.previous.is_some(),
            next = neighbors.next.is_some(),
            "post loaded"
        );
        Ok(Self::new(post, neighbors))
    }
}

/// Every post uid, walking the whole listing (static path generation)
pub async fn all_post_uids(client: &CmsClient) -> Result<Vec<String>> {
    let mut listing = ListingView::load(client).await?;
    listing.load_pages(client, None).await?;
    Ok(listing
        .into_accumulator()
        .into_posts()
        .into_iter()
        .map(|post| post.uid)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::fixtures::{raw_page, FixtureSource};
    use crate::post::ContentBlock;
    use pretty_assertions::assert_eq;

    fn detail(words: usize) -> PostDetail {
        PostDetail {
            uid: "post-b".to_string(),
            first_publication_date: Some("15 Mar 2021".to_string()),
            title: "Post B".to_string(),
            subtitle: None,
            author: "Ana".to_string(),
            banner_url: None,
            content: vec![ContentBlock {
                heading: "Intro".to_string(),
                body: vec![vec!["palavra"; words].join(" ")],
            }],
        }
    }

    #[test]
    fn test_post_view_reading_time() {
        let view = PostView::new(detail(400), Neighbors::default());
        assert_eq!(view.reading_time, 2);

        let view = PostView::new(detail(401), Neighbors::default());
        assert_eq!(view.reading_time, 3);
    }

    #[test]
    fn test_post_view_carries_neighbors() {
        let neighbors = Neighbors {
            previous: Some(NeighborPost {
                uid: "post-a".to_string(),
                title: "Post A".to_string(),
            }),
            next: None,
        };
        let view = PostView::new(detail(10), neighbors);
        assert_eq!(view.previous.as_ref().map(|n| n.uid.as_str()), Some("post-a"));
        assert!(view.next.is_none());
    }

    #[tokio::test]
    async fn test_listing_view_load_more() {
        let source = FixtureSource::new().with_page("c2", raw_page(&["post-b"], None));
        let accumulator = PostAccumulator::from_raw(raw_page(&["post-a"], Some("c2"))).unwrap();
        let mut listing = ListingView::from_accumulator(accumulator);

        assert!(listing.has_more());
        listing.load_more(&source).await.unwrap();

        assert!(!listing.has_more());
        let uids: Vec<&str> = listing.posts().iter().map(|p| p.uid.as_str()).collect();
        assert_eq!(uids, vec!["post-a", "post-b"]);
    }
}
