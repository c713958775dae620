//! Neighbor module
//!
//! Chronological previous/next lookup for post navigation.

mod resolver;

pub use resolver::{project_neighbor, NeighborResolver, Neighbors};
