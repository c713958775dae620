//! Pagination module
//!
//! Incremental "load more" accumulation of post summaries.
//!
//! # Overview
//!
//! The CMS returns results in pages, each carrying an opaque cursor to the
//! next one. [`PostAccumulator`] keeps the summaries loaded so far and the
//! current cursor, and appends the next page on demand. `load_more` takes
//! `&mut self`, so at most one fetch can be in flight per accumulator.

mod accumulator;

pub use accumulator::PostAccumulator;
