//! Wire types for the CMS REST API
//!
//! Every field of a raw document is optional at this level. Deciding which
//! fields are required happens during normalization in [`crate::post`], so a
//! document missing a title is reported as `MalformedDocument` instead of a
//! JSON decoding failure.

use crate::types::Page;
use serde::{Deserialize, Serialize};

// ============================================================================
// API Root
// ============================================================================

/// Response of the API root endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiRoot {
    /// Available content refs (master plus releases)
    #[serde(default)]
    pub refs: Vec<ContentRef>,
}

impl ApiRoot {
    /// The ref pointing at published content
    pub fn master_ref(&self) -> Option<&ContentRef> {
        self.refs.iter().find(|r| r.is_master_ref)
    }
}

/// One content version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRef {
    pub id: String,
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub is_master_ref: bool,
}

// ============================================================================
// Search Response
// ============================================================================

/// Response of the `documents/search` endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results_size: Option<u64>,
    #[serde(default)]
    pub results: Vec<RawDocument>,
    #[serde(default)]
    pub next_page: Option<String>,
}

impl From<SearchResponse> for Page<RawDocument> {
    fn from(response: SearchResponse) -> Self {
        Page::new(response.results, response.next_page)
    }
}

// ============================================================================
// Documents
// ============================================================================

/// A post document as returned by the CMS
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub first_publication_date: Option<String>,
    #[serde(default)]
    pub data: RawPostData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPostData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub banner: Option<RawBanner>,
    #[serde(default)]
    pub content: Option<Vec<RawContentBlock>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBanner {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawContentBlock {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub body: Option<Vec<RawRichText>>,
}

/// One rich-text fragment; span and type metadata are ignored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRichText {
    #[serde(default)]
    pub text: Option<String>,
}

// ============================================================================
// Query Builder
// ============================================================================

/// A query predicate in the CMS predicate language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `[at(path, "value")]`
    At { path: String, value: String },
}

impl Predicate {
    /// Exact match on a document path
    pub fn at(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self::At {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Match documents of a custom type
    pub fn document_type(doc_type: impl Into<String>) -> Self {
        Self::at("document.type", doc_type)
    }

    /// Match a document of `doc_type` by its uid
    pub fn uid(doc_type: &str, uid: impl Into<String>) -> Self {
        Self::at(format!("my.{doc_type}.uid"), uid)
    }

    fn render(&self) -> String {
        match self {
            Self::At { path, value } => {
                format!("[at({path},{})]", quote(value))
            }
        }
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// A single ordering clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordering {
    pub field: String,
    pub descending: bool,
}

impl Ordering {
    /// Order by first publication date
    pub fn publication_date(descending: bool) -> Self {
        Self {
            field: "document.first_publication_date".to_string(),
            descending,
        }
    }
}

/// A `documents/search` query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmsQuery {
    pub predicates: Vec<Predicate>,
    pub fetch: Vec<String>,
    pub page_size: Option<u32>,
    pub after: Option<String>,
    pub orderings: Vec<Ordering>,
}

impl CmsQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn predicate(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Restrict returned fields (e.g. `posts.title`)
    #[must_use]
    pub fn fetch(mut self, field: impl Into<String>) -> Self {
        self.fetch.push(field.into());
        self
    }

    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Start immediately after the given document
    #[must_use]
    pub fn after(mut self, id: impl Into<String>) -> Self {
        self.after = Some(id.into());
        self
    }

    #[must_use]
    pub fn order_by(mut self, ordering: Ordering) -> Self {
        self.orderings.push(ordering);
        self
    }

    /// Render the `q` parameter
    pub fn q(&self) -> String {
        let inner: String = self.predicates.iter().map(Predicate::render).collect();
        format!("[{inner}]")
    }

    /// Render the `orderings` parameter
    pub fn orderings_param(&self) -> Option<String> {
        if self.orderings.is_empty() {
            return None;
        }
        let clauses: Vec<String> = self
            .orderings
            .iter()
            .map(|o| {
                if o.descending {
                    format!("{} desc", o.field)
                } else {
                    o.field.clone()
                }
            })
            .collect();
        Some(format!("[{}]", clauses.join(",")))
    }

    /// All query parameters except `ref` and `access_token`
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", self.q())];
        if let Some(size) = self.page_size {
            params.push(("pageSize", size.to_string()));
        }
        if !self.fetch.is_empty() {
            params.push(("fetch", self.fetch.join(",")));
        }
        if let Some(after) = &self.after {
            params.push(("after", after.clone()));
        }
        if let Some(orderings) = self.orderings_param() {
            params.push(("orderings", orderings));
        }
        params
    }
}
