//! CLI module
//!
//! Command-line interface over the listing and post views.
//!
//! # Commands
//!
//! - `check` - Test connection to the CMS
//! - `posts` - List posts, optionally loading more pages
//! - `post` - Show one post with reading time and neighbors
//! - `paths` - List every post path

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
