//! Post module
//!
//! Normalized post values and the conversions from raw CMS documents:
//! summaries for the listing, full posts, navigation projections, display
//! dates and the reading time estimate.

mod date;
mod normalize;
mod types;

pub use date::{format_display_date, normalize_timestamp, parse_timestamp, PT_BR_MONTHS};
pub use normalize::{reading_time_minutes, word_count, WORDS_PER_MINUTE};
pub use types::{ContentBlock, NeighborPost, PostDetail, PostSummary};
