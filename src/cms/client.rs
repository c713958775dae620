//! HTTP implementation of the CMS query client
//!
//! Talks to a Prismic-style REST API:
//! - `GET {endpoint}` returns the available refs
//! - `GET {endpoint}/documents/search` runs predicate queries
//!
//! Every search needs a `ref`. The master ref is looked up once per client
//! and cached; a configured `ref_override` skips the lookup entirely.

use super::source::PostSource;
use super::types::{ApiRoot, CmsQuery, Ordering, Predicate, RawDocument, SearchResponse};
use crate::config::CmsSettings;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::types::{Page, SortOrder};
use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;
use url::Url;

/// CMS query client
#[derive(Debug)]
pub struct CmsClient {
    http: HttpClient,
    settings: CmsSettings,
    master_ref: OnceCell<String>,
}

impl CmsClient {
    /// Create a client over an existing HTTP client
    pub fn new(http: HttpClient, settings: CmsSettings) -> Self {
        Self {
            http,
            settings,
            master_ref: OnceCell::new(),
        }
    }

    /// CMS settings in use
    pub fn settings(&self) -> &CmsSettings {
        &self.settings
    }

    /// Fetch the API root document
    pub async fn api_root(&self) -> Result<ApiRoot> {
        let query = self.token_param();
        self.http.get_json(&self.settings.endpoint, &query).await
    }

    /// The ref every search runs against
    pub async fn master_ref(&self) -> Result<String> {
        if let Some(reference) = &self.settings.ref_override {
            return Ok(reference.clone());
        }

        let reference = self
            .master_ref
            .get_or_try_init(|| async {
                let root = self.api_root().await?;
                root.master_ref()
                    .map(|r| r.reference.clone())
                    .ok_or_else(|| Error::fetch_failed("API root lists no master ref"))
            })
            .await?;
        Ok(reference.clone())
    }

    /// Run a search query
    pub async fn query(&self, query: &CmsQuery) -> Result<Page<RawDocument>> {
        let mut params = vec![("ref", self.master_ref().await?)];
        params.extend(query.to_params());
        params.extend(self.token_param());

        debug!(q = %query.q(), "CMS search");
        let response: SearchResponse = self.http.get_json(&self.search_url(), &params).await?;
        Ok(response.into())
    }

    /// First listing page with only the summary fields selected
    pub async fn first_page(&self, page_size: u32) -> Result<Page<RawDocument>> {
        let doc_type = &self.settings.document_type;
        let query = CmsQuery::new()
            .predicate(Predicate::document_type(doc_type.as_str()))
            .fetch(format!("{doc_type}.title"))
            .fetch(format!("{doc_type}.subtitle"))
            .fetch(format!("{doc_type}.author"))
            .page_size(page_size);
        self.query(&query).await
    }

    /// Fetch one document of the configured type by uid
    pub async fn get_by_uid(&self, uid: &str) -> Result<RawDocument> {
        let doc_type = &self.settings.document_type;
        let query = CmsQuery::new()
            .predicate(Predicate::uid(doc_type, uid))
            .page_size(1);

        self.query(&query)
            .await?
            .results
            .into_iter()
            .next()
            .ok_or_else(|| Error::DocumentNotFound {
                doc_type: doc_type.clone(),
                uid: uid.to_string(),
            })
    }

    fn search_url(&self) -> String {
        format!(
            "{}/documents/search",
            self.settings.endpoint.trim_end_matches('/')
        )
    }

    fn token_param(&self) -> Vec<(&'static str, String)> {
        self.settings
            .access_token
            .iter()
            .map(|token| ("access_token", token.clone()))
            .collect()
    }

    /// Cursor URLs usually carry the token already; add it only when missing
    pub(crate) fn authorize_cursor(&self, cursor: &str) -> Result<String> {
        let mut url = Url::parse(cursor)?;
        if let Some(token) = &self.settings.access_token {
            let has_token = url.query_pairs().any(|(k, _)| k == "access_token");
            if !has_token {
                url.query_pairs_mut().append_pair("access_token", token);
            }
        }
        Ok(url.into())
    }
}

#[async_trait]
impl PostSource for CmsClient {
    async fn fetch_page(&self, cursor: &str) -> Result<Page<RawDocument>> {
        let url = self.authorize_cursor(cursor)?;
        debug!(cursor = %cursor, "fetching next page");
        let response: SearchResponse = self.http.get_json(&url, &[]).await?;
        Ok(response.into())
    }

    async fn neighbor_page(&self, after: &str, order: SortOrder) -> Result<Page<RawDocument>> {
        let query = CmsQuery::new()
            .predicate(Predicate::document_type(self.settings.document_type.as_str()))
            .page_size(1)
            .after(after)
            .order_by(Ordering::publication_date(order.is_descending()));
        self.query(&query).await
    }
}
