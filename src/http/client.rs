//! HTTP client backed by reqwest
//!
//! Provides the transport used by the catalog client:
//! - Basic auth from explicit credentials
//! - Optional TLS certificate verification
//! - Request timeout and user agent
//! - Error classification (timeout, status, network)

use super::fetch::{ByteStream, HttpFetch};
use crate::config::HttpSettings;
use crate::endpoint::Credentials;
use crate::error::{Error, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Longest error body kept in [`Error::HttpStatus`]
const MAX_ERROR_BODY: usize = 512;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Verify TLS certificates
    pub verify_tls: bool,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let settings = HttpSettings::default();
        Self {
            timeout: settings.timeout(),
            verify_tls: settings.verify_tls,
            default_headers: HashMap::new(),
            user_agent: settings.user_agent,
        }
    }
}

impl From<&HttpSettings> for HttpClientConfig {
    fn from(settings: &HttpSettings) -> Self {
        Self {
            timeout: settings.timeout(),
            verify_tls: settings.verify_tls,
            default_headers: HashMap::new(),
            user_agent: settings.user_agent.clone(),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Enable or disable TLS certificate verification
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.config.verify_tls = verify;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// reqwest-backed [`HttpFetch`] implementation
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a client from reader settings
    pub fn from_settings(settings: &HttpSettings) -> Result<Self> {
        Self::with_config(HttpClientConfig::from(settings))
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Send a GET and check the status
    pub async fn get(&self, url: &str, auth: Option<&Credentials>) -> Result<Response> {
        let mut target = Url::parse(url)?;

        // Explicit credentials win over userinfo embedded in the URL
        if auth.is_some() {
            strip_userinfo(&mut target);
        }

        debug!("GET {}", redact(&target));

        let mut req = self.client.get(target);
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        if let Some(credentials) = auth {
            req = req.basic_auth(&credentials.username, Some(&credentials.password));
        }

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_ms: self.config.timeout.as_millis() as u64,
                }
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!("Request succeeded: {}", status);
        Ok(response)
    }
}

#[async_trait]
impl HttpFetch for HttpClient {
    async fn fetch(&self, url: &str, auth: Option<&Credentials>) -> Result<ByteStream> {
        let response = self.get(url, auth).await?;
        let stream = response.bytes_stream().map_err(std::io::Error::other);
        Ok(Box::pin(stream))
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// URL without userinfo, for logs
fn redact(url: &Url) -> String {
    let mut shown = url.clone();
    strip_userinfo(&mut shown);
    shown.to_string()
}

/// Drop `user:pass@` from a URL. Hosts that cannot carry userinfo have none
fn strip_userinfo(url: &mut Url) {
    if url.cannot_be_a_base() || !url.has_host() {
        return;
    }
    if url.set_username("").is_err() || url.set_password(None).is_err() {
        debug!("URL {} keeps its userinfo", url.host_str().unwrap_or_default());
    }
}
