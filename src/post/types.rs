//! Normalized post values handed to the rendering layer

use serde::{Deserialize, Serialize};

/// A post as shown in the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub uid: String,
    /// Display date, e.g. "15 Mar 2021"; `None` when the CMS had none
    pub first_publication_date: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

impl PostSummary {
    /// Stable list key
    pub fn key(&self) -> &str {
        &self.uid
    }
}

/// A full post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    pub uid: String,
    pub first_publication_date: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub author: String,
    pub banner_url: Option<String>,
    pub content: Vec<ContentBlock>,
}

impl PostDetail {
    /// Stable keys for the content blocks, in content order
    pub fn block_keys(&self) -> Vec<String> {
        (0..self.content.len())
            .map(|i| format!("{}-{i}", self.uid))
            .collect()
    }
}

/// A heading followed by its rich-text fragments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub heading: String,
    pub body: Vec<String>,
}

/// Previous/next navigation target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborPost {
    pub uid: String,
    pub title: String,
}
