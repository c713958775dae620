// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Spacetraveling
//!
//! Core of a blog front-end backed by a headless CMS: paged post listing
//! with "load more", post pages with reading time, and chronological
//! previous/next navigation.
//!
//! ## Features
//!
//! - **CMS Client**: Prismic-style ref lookup and predicate queries over HTTP
//! - **Load More**: Accumulates listing pages behind an opaque cursor
//! - **Neighbors**: Single-item "after" queries resolve previous/next posts
//! - **Normalization**: pt-BR display dates and reading time estimates
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spacetraveling::{CmsClient, HttpClient, ListingView, SiteConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = SiteConfig::default().with_env_overrides();
//!     config.validate()?;
//!
//!     let http = HttpClient::with_config(config.http.to_client_config())?;
//!     let client = CmsClient::new(http, config.cms);
//!
//!     let mut listing = ListingView::load(&client).await?;
//!     while listing.has_more() {
//!         listing.load_more(&client).await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │            site: ListingView    PostView                 │
//! └──────────────────────────────────────────────────────────┘
//!                │                         │
//! ┌──────────────┴──────────┐   ┌──────────┴───────────────┐
//! │ pagination::Accumulator │   │ neighbors::Resolver      │
//! └──────────────┬──────────┘   └──────────┬───────────────┘
//!                └──────── PostSource ─────┘
//!                              │
//! ┌──────────────┬─────────────┴──────┬───────────────────────┐
//! │  cms client  │  http (retry,      │  post (normalize,     │
//! │  refs/query  │  rate limit)       │  dates, reading time) │
//! └──────────────┴────────────────────┴───────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Site configuration
pub mod config;

/// HTTP client with retry and rate limiting
pub mod http;

/// CMS query client and the post source interface
pub mod cms;

/// Normalized post values
pub mod post;

/// "Load more" accumulation
pub mod pagination;

/// Previous/next post resolution
pub mod neighbors;

/// Listing and post views
pub mod site;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use cms::{CmsClient, PostSource};
pub use config::SiteConfig;
pub use http::HttpClient;
pub use neighbors::{NeighborResolver, Neighbors};
pub use pagination::PostAccumulator;
pub use post::{ContentBlock, NeighborPost, PostDetail, PostSummary};
pub use site::{all_post_uids, ListingView, PostView};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
