//! Reader configuration
//!
//! Credentials, endpoint families and feed paths for the catalog service.
//! Loaded from YAML, optionally overridden from the environment.

use crate::endpoint::{ContentDecoding, Credentials, FeedSource};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable names consulted by [`ReaderConfig::with_env_overrides`]
pub const ENV_USERNAME: &str = "ICECAT_USERNAME";
pub const ENV_PASSWORD: &str = "ICECAT_PASSWORD";
pub const ENV_APPKEY: &str = "ICECAT_APPKEY";
pub const ENV_LANGUAGE: &str = "ICECAT_LANGUAGE";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete reader configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Account name (basic auth, `shopname` on the JSON API)
    pub username: Option<String>,

    /// Account password
    pub password: Option<String>,

    /// Application key for endpoints that require one
    pub appkey: Option<String>,

    /// Target language code
    pub language: String,

    /// Host serving the index and reference files
    pub data: EndpointConfig,

    /// Host serving per-product detail documents
    pub detail: EndpointConfig,

    /// Host serving the JSON product API
    pub live: EndpointConfig,

    /// Feed paths; derived from `language` when absent
    pub paths: Option<FeedPaths>,

    /// Transport settings
    pub http: HttpSettings,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            appkey: None,
            language: "en".to_string(),
            data: EndpointConfig::new("http", "data.icecat.biz", "/"),
            detail: EndpointConfig::new("https", "data.icecat.biz", "/"),
            live: EndpointConfig::new("https", "live.icecat.biz", "/api/"),
            paths: None,
            http: HttpSettings::default(),
        }
    }
}

impl std::fmt::Debug for ReaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaderConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("appkey", &self.appkey.as_ref().map(|_| "***"))
            .field("language", &self.language)
            .field("data", &self.data)
            .field("detail", &self.detail)
            .field("live", &self.live)
            .field("paths", &self.paths)
            .field("http", &self.http)
            .finish()
    }
}

impl ReaderConfig {
    /// Create a config with the given account
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
            ..Default::default()
        }
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Apply `ICECAT_*` environment variables on top of this config
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (environment, CLI flags)
    #[must_use]
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(username) = non_empty(ENV_USERNAME) {
            self.username = Some(username);
        }
        if let Some(password) = non_empty(ENV_PASSWORD) {
            self.password = Some(password);
        }
        if let Some(appkey) = non_empty(ENV_APPKEY) {
            self.appkey = Some(appkey);
        }
        if let Some(language) = non_empty(ENV_LANGUAGE) {
            self.language = language;
        }
        self
    }

    /// Set the language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the application key
    #[must_use]
    pub fn with_appkey(mut self, appkey: impl Into<String>) -> Self {
        self.appkey = Some(appkey.into());
        self
    }

    /// Point every endpoint family at one scheme and host (test servers, proxies)
    #[must_use]
    pub fn with_host(mut self, scheme: impl Into<String>, host: impl Into<String>) -> Self {
        let scheme = scheme.into();
        let host = host.into();
        for endpoint in [&mut self.data, &mut self.detail, &mut self.live] {
            endpoint.scheme.clone_from(&scheme);
            endpoint.host.clone_from(&host);
        }
        self
    }

    /// Check the config is usable
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(Error::missing_config("language"));
        }
        for (name, endpoint) in [
            ("data", &self.data),
            ("detail", &self.detail),
            ("live", &self.live),
        ] {
            if endpoint.host.trim().is_empty() {
                return Err(Error::missing_config(format!("{name}.host")));
            }
            if !matches!(endpoint.scheme.as_str(), "http" | "https") {
                return Err(Error::config(format!(
                    "Unsupported scheme '{}' for {name} endpoint",
                    endpoint.scheme
                )));
            }
        }
        if self.password.is_some() && self.username.is_none() {
            return Err(Error::missing_config("username"));
        }
        Ok(())
    }

    /// Basic-auth credentials, when an account is configured
    pub fn credentials(&self) -> Option<Credentials> {
        self.username
            .as_ref()
            .filter(|u| !u.is_empty())
            .map(|u| Credentials::new(u.clone(), self.password.clone().unwrap_or_default()))
    }

    /// Effective feed paths
    pub fn feed_paths(&self) -> FeedPaths {
        self.paths
            .clone()
            .unwrap_or_else(|| FeedPaths::for_language(&self.language))
    }

    /// Defaults for requests against the data host
    pub fn data_source(&self) -> FeedSource {
        self.data.source().with_auth(self.credentials())
    }

    /// Defaults for requests against the detail host
    pub fn detail_source(&self) -> FeedSource {
        self.detail.source().with_auth(self.credentials())
    }

    /// Defaults for requests against the JSON API host
    pub fn live_source(&self) -> FeedSource {
        self.live.source()
    }
}

// ============================================================================
// Endpoints
// ============================================================================

/// Scheme, host and base path of one endpoint family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub scheme: String,
    pub host: String,
    #[serde(default = "default_root")]
    pub path: String,
}

fn default_root() -> String {
    "/".to_string()
}

impl EndpointConfig {
    /// Create an endpoint config
    pub fn new(scheme: impl Into<String>, host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            path: path.into(),
        }
    }

    /// Request parts for this endpoint, without credentials
    pub fn source(&self) -> FeedSource {
        FeedSource::new(self.scheme.clone(), self.host.clone()).with_path(self.path.clone())
    }
}

// ============================================================================
// Feed Paths
// ============================================================================

/// Paths of the list documents on the data host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPaths {
    /// Full product file index
    pub all: String,
    /// Daily product file index
    pub updated: String,
    /// Gzip-compressed category reference list
    pub categories: String,
    /// Gzip-compressed supplier reference list
    pub suppliers: String,
}

impl FeedPaths {
    /// Standard level4 export paths for a language
    pub fn for_language(language: &str) -> Self {
        let lang = language.to_uppercase();
        Self {
            all: format!("export/level4/{lang}/files.index.xml"),
            updated: format!("export/level4/{lang}/daily.index.xml"),
            categories: "export/level4/refs/CategoriesList.xml.gz".to_string(),
            suppliers: "export/level4/refs/SuppliersList.xml.gz".to_string(),
        }
    }

    /// Body decoding implied by a feed path
    pub fn decoding_for(path: &str) -> ContentDecoding {
        if path.ends_with(".gz") {
            ContentDecoding::Gzip
        } else {
            ContentDecoding::Identity
        }
    }
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// Transport settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Verify TLS certificates
    pub verify_tls: bool,
    /// User agent string
    pub user_agent: String,
    /// Upper bound for documents loaded fully into memory
    pub max_document_bytes: usize,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            verify_tls: true,
            user_agent: format!("icecat-reader/{}", env!("CARGO_PKG_VERSION")),
            max_document_bytes: 256 * 1024 * 1024,
        }
    }
}

impl HttpSettings {
    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
