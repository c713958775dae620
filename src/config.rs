//! Site configuration
//!
//! Loaded from YAML, with environment overrides for the values that usually
//! come from deployment secrets:
//!
//! ```yaml
//! cms:
//!   endpoint: https://spacetraveling.cdn.prismic.io/api/v2
//!   document_type: posts
//!   page_size: 20
//! http:
//!   timeout_seconds: 30
//!   max_retries: 3
//! ```

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding `cms.endpoint`
pub const ENV_API_ENDPOINT: &str = "PRISMIC_API_ENDPOINT";

/// Environment variable overriding `cms.access_token`
pub const ENV_ACCESS_TOKEN: &str = "PRISMIC_ACCESS_TOKEN";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete site configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// CMS connection settings
    #[serde(default)]
    pub cms: CmsSettings,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpSettings,
}

impl SiteConfig {
    /// Parse a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    /// Apply overrides from a variable lookup
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENV_API_ENDPOINT).filter(|v| !v.is_empty()) {
            self.cms.endpoint = endpoint;
        }
        if let Some(token) = lookup(ENV_ACCESS_TOKEN).filter(|v| !v.is_empty()) {
            self.cms.access_token = Some(token);
        }
    }

    /// Apply overrides from the process environment
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        self.apply_env(|key| std::env::var(key).ok());
        self
    }

    /// Check required fields and value ranges
    pub fn validate(&self) -> Result<()> {
        if self.cms.endpoint.trim().is_empty() {
            return Err(Error::missing_field("cms.endpoint"));
        }
        url::Url::parse(&self.cms.endpoint)?;
        if self.cms.document_type.trim().is_empty() {
            return Err(Error::missing_field("cms.document_type"));
        }
        if self.cms.page_size == 0 || self.cms.page_size > 100 {
            return Err(Error::config(format!(
                "cms.page_size must be between 1 and 100, got {}",
                self.cms.page_size
            )));
        }
        Ok(())
    }
}

// ============================================================================
// CMS Settings
// ============================================================================

/// CMS connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsSettings {
    /// API endpoint, e.g. `https://<repo>.cdn.prismic.io/api/v2`
    #[serde(default)]
    pub endpoint: String,

    /// Access token for private repositories
    #[serde(default)]
    pub access_token: Option<String>,

    /// Custom type holding the posts
    #[serde(default = "default_document_type")]
    pub document_type: String,

    /// Listing page size
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Query a specific content release instead of the master ref
    #[serde(default)]
    pub ref_override: Option<String>,
}

impl Default for CmsSettings {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            access_token: None,
            document_type: default_document_type(),
            page_size: default_page_size(),
            ref_override: None,
        }
    }
}

impl CmsSettings {
    /// Settings for an endpoint with everything else defaulted
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

fn default_document_type() -> String {
    "posts".to_string()
}

fn default_page_size() -> u32 {
    20
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Maximum number of retries
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Retry backoff configuration
    #[serde(default)]
    pub backoff: BackoffSettings,

    /// Rate limiting; `null` disables it
    #[serde(default = "default_rate_limit")]
    pub rate_limit: Option<RateLimiterConfig>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
            backoff: BackoffSettings::default(),
            rate_limit: default_rate_limit(),
        }
    }
}

impl HttpSettings {
    /// Build the HTTP client configuration
    pub fn to_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            timeout: Duration::from_secs(self.timeout_seconds),
            max_retries: self.max_retries,
            backoff_type: self.backoff.backoff_type,
            initial_backoff: Duration::from_millis(self.backoff.initial_ms),
            max_backoff: Duration::from_millis(self.backoff.max_ms),
            rate_limit: self.rate_limit.clone(),
            ..HttpClientConfig::default()
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_rate_limit() -> Option<RateLimiterConfig> {
    Some(RateLimiterConfig::default())
}

/// Backoff configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackoffSettings {
    /// Backoff type
    #[serde(rename = "type", default)]
    pub backoff_type: BackoffType,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_backoff")]
    pub initial_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_backoff")]
    pub max_ms: u64,
}

impl Default for BackoffSettings {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::default(),
            initial_ms: default_initial_backoff(),
            max_ms: default_max_backoff(),
        }
    }
}

fn default_initial_backoff() -> u64 {
    100
}

fn default_max_backoff() -> u64 {
    60_000
}
