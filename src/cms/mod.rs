//! CMS module
//!
//! Query client for the headless CMS that stores the posts.
//!
//! # Overview
//!
//! [`PostSource`] is the narrow interface the listing and navigation
//! components depend on. [`CmsClient`] implements it over HTTP and also
//! offers the wider API (ref lookup, arbitrary queries, lookup by uid) used
//! when assembling a post page.

mod client;
mod source;
mod types;

pub use client::CmsClient;
pub use source::PostSource;
pub use types::{
    ApiRoot, CmsQuery, ContentRef, Ordering, Predicate, RawBanner, RawContentBlock, RawDocument,
    RawPostData, RawRichText, SearchResponse,
};

#[cfg(test)]
pub(crate) mod fixtures;

#[cfg(test)]
mod tests;
