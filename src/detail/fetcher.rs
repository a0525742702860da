//! Detail fetcher implementation

use crate::config::ReaderConfig;
use crate::endpoint::{FeedSource, SourceOverrides};
use crate::error::{Error, Result};
use crate::http::{collect_body, HttpFetch};
use crate::records::{fold_case, ProductDetail};
use crate::types::Attributes;
use crate::xml::StreamCursor;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Whether an identifier addresses the JSON API
pub fn is_numeric_id(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Single product lookups
pub struct DetailFetcher<F> {
    http: F,
    config: Arc<ReaderConfig>,
    cancel: CancellationToken,
}

impl<F: HttpFetch> DetailFetcher<F> {
    /// Create a fetcher over an HTTP capability
    pub fn new(http: F, config: Arc<ReaderConfig>) -> Self {
        Self {
            http,
            config,
            cancel: CancellationToken::new(),
        }
    }

    /// Abort lookups once `token` is cancelled
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Fetch a product by numeric id or detail path.
    ///
    /// `Ok(None)` means the XML detail document was unavailable or carried no
    /// `Product` element.
    pub async fn fetch(&self, identifier: &str) -> Result<Option<ProductDetail>> {
        if is_numeric_id(identifier) {
            self.by_id(identifier).await.map(Some)
        } else {
            self.by_path(identifier).await
        }
    }

    /// Fetch the JSON API body for a numeric id
    pub async fn by_id(&self, id: &str) -> Result<ProductDetail> {
        self.ensure_active()?;

        let source = self.json_source(id);
        debug!("Fetching product {} from {}", id, source.redacted_url());

        let credentials = self.config.credentials();
        let stream = self.http.fetch(&source.url(), credentials.as_ref()).await?;
        let body = collect_body(stream, self.config.http.max_document_bytes).await?;
        let body = String::from_utf8(body)
            .map_err(|e| Error::malformed(format!("product {id} response is not UTF-8: {e}")))?;

        Ok(ProductDetail::Json(body))
    }

    /// Read the `Product` attributes of an XML detail document
    pub async fn by_path(&self, path: &str) -> Result<Option<ProductDetail>> {
        self.ensure_active()?;

        let source = self.xml_source(path);
        match self.read_product(&source).await {
            Ok(Some(attributes)) => Ok(Some(ProductDetail::Xml(fold_case(attributes)))),
            Ok(None) => {
                debug!("No Product element in {}", source.redacted_url());
                Ok(None)
            }
            Err(Error::Cancelled) => Err(Error::Cancelled),
            Err(e) => {
                warn!("Product detail {} unavailable: {}", source.redacted_url(), e);
                Ok(None)
            }
        }
    }

    /// URL of the JSON API request for a numeric id
    pub fn json_url(&self, id: &str) -> String {
        self.json_source(id).url()
    }

    /// URL of the XML detail document at `path`
    pub fn xml_url(&self, path: &str) -> String {
        self.xml_source(path).url()
    }

    fn json_source(&self, id: &str) -> FeedSource {
        let overrides = SourceOverrides::new()
            .without_auth()
            .param("shopname", self.config.username.clone().unwrap_or_default())
            .param("lang", self.config.language.clone())
            .param("content", "")
            .param("icecat_id", id);
        self.with_appkey(self.config.live_source().merge(overrides))
    }

    fn xml_source(&self, path: &str) -> FeedSource {
        let overrides = SourceOverrides::new().path(path);
        self.with_appkey(self.config.detail_source().merge(overrides))
    }

    fn with_appkey(&self, source: FeedSource) -> FeedSource {
        match &self.config.appkey {
            Some(appkey) => source.with_param("appkey", appkey.clone()),
            None => source,
        }
    }

    async fn read_product(&self, source: &FeedSource) -> Result<Option<Attributes>> {
        let credentials = self.config.credentials();
        let stream = self.http.fetch(&source.url(), credentials.as_ref()).await?;

        let mut cursor = StreamCursor::from_stream(stream);
        if !cursor.seek("Product").await? {
            return Ok(None);
        }
        cursor.current_attributes().map(Some)
    }

    fn ensure_active(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        Ok(())
    }
}
