//! Catalog client implementation

use super::types::{FeedKind, ProductMode};
use crate::config::{FeedPaths, ReaderConfig};
use crate::detail::DetailFetcher;
use crate::endpoint::{FeedSource, SourceOverrides};
use crate::error::{Error, Result};
use crate::http::{collect_body, ByteStream, HttpClient, HttpFetch};
use crate::reader::{
    CategoryMapper, EnrichedMapper, EntryMapper, Flow, PageWindow, PaginatedReader,
    StreamingEntries, SummaryMapper, SupplierMapper, TreeEntries,
};
use crate::records::{Category, ProductDetail, ProductRecord, Supplier};
use crate::xml::{decode_body, parse_document, Element, StreamCursor};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Client for the catalog feeds.
///
/// Reads are sequential: every request, detail lookups included, is awaited
/// before the next one is sent.
pub struct CatalogClient<F = HttpClient> {
    http: Arc<F>,
    config: Arc<ReaderConfig>,
    details: DetailFetcher<Arc<F>>,
    cancel: CancellationToken,
}

impl CatalogClient<HttpClient> {
    /// Create a client over the reqwest transport
    pub fn new(config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::from_settings(&config.http)?;
        Ok(Self::with_fetcher(config, http))
    }
}

impl<F: HttpFetch> CatalogClient<F> {
    /// Create a client over any HTTP capability
    pub fn with_fetcher(config: ReaderConfig, http: F) -> Self {
        let http = Arc::new(http);
        let config = Arc::new(config);
        let details = DetailFetcher::new(Arc::clone(&http), Arc::clone(&config));
        Self {
            http,
            config,
            details,
            cancel: CancellationToken::new(),
        }
    }

    /// Abort reads and lookups once `token` is cancelled
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.details = self.details.with_cancellation(token.clone());
        self.cancel = token;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Detail fetcher sharing this client's transport
    pub fn details(&self) -> &DetailFetcher<Arc<F>> {
        &self.details
    }

    /// Read the full product index
    pub async fn fetch_products<H>(
        &self,
        window: PageWindow,
        mode: ProductMode,
        handler: H,
    ) -> Result<()>
    where
        H: FnMut(ProductRecord) -> Result<Flow>,
    {
        self.read_index(FeedKind::AllProducts, window, mode, handler)
            .await
    }

    /// Read the daily index of updated products
    pub async fn fetch_updated_products<H>(
        &self,
        window: PageWindow,
        mode: ProductMode,
        handler: H,
    ) -> Result<()>
    where
        H: FnMut(ProductRecord) -> Result<Flow>,
    {
        self.read_index(FeedKind::UpdatedProducts, window, mode, handler)
            .await
    }

    /// Read the category reference list
    pub async fn fetch_categories<H>(&self, window: PageWindow, handler: H) -> Result<()>
    where
        H: FnMut(Category) -> Result<Flow>,
    {
        self.read_reference(FeedKind::Categories, window, &CategoryMapper, handler)
            .await
    }

    /// Read the supplier reference list
    pub async fn fetch_suppliers<H>(&self, window: PageWindow, handler: H) -> Result<()>
    where
        H: FnMut(Supplier) -> Result<Flow>,
    {
        self.read_reference(FeedKind::Suppliers, window, &SupplierMapper, handler)
            .await
    }

    /// Look up one product by numeric id or detail path
    pub async fn fetch_product(&self, identifier: &str) -> Result<Option<ProductDetail>> {
        self.details.fetch(identifier).await
    }

    /// Request parts of a feed document
    pub fn feed_source(&self, kind: FeedKind) -> FeedSource {
        let paths = self.config.feed_paths();
        let path = match kind {
            FeedKind::AllProducts => paths.all,
            FeedKind::UpdatedProducts => paths.updated,
            FeedKind::Categories => paths.categories,
            FeedKind::Suppliers => paths.suppliers,
        };
        let decoding = FeedPaths::decoding_for(&path);
        self.config
            .data_source()
            .merge(SourceOverrides::new().path(path).decoding(decoding))
    }

    async fn read_index<H>(
        &self,
        kind: FeedKind,
        window: PageWindow,
        mode: ProductMode,
        mut handler: H,
    ) -> Result<()>
    where
        H: FnMut(ProductRecord) -> Result<Flow>,
    {
        let source = self.feed_source(kind);
        info!(
            "Reading {} ({:?}) from {}, skip {} limit {}",
            kind.as_str(),
            mode,
            source.redacted_url(),
            window.skip,
            window.limit
        );

        let stream = self.open(&source).await?;
        let entries = StreamingEntries::new(StreamCursor::from_stream(stream), kind.entry_tag());
        let reader = self.reader(window);

        match mode {
            ProductMode::Summary => {
                reader
                    .run(entries, &SummaryMapper, |r| handler(ProductRecord::Summary(r)))
                    .await?;
            }
            ProductMode::Enriched => {
                let mapper = EnrichedMapper::new(&self.details);
                reader
                    .run(entries, &mapper, |r| handler(ProductRecord::Enriched(r)))
                    .await?;
            }
        }
        Ok(())
    }

    async fn read_reference<M, H>(
        &self,
        kind: FeedKind,
        window: PageWindow,
        mapper: &M,
        handler: H,
    ) -> Result<()>
    where
        M: EntryMapper<Entry = Element>,
        H: FnMut(M::Record) -> Result<Flow>,
    {
        let source = self.feed_source(kind);
        info!(
            "Reading {} from {}, skip {} limit {}",
            kind.as_str(),
            source.redacted_url(),
            window.skip,
            window.limit
        );

        let stream = self.open(&source).await?;
        let body = collect_body(stream, self.config.http.max_document_bytes).await?;
        let body = decode_body(body, source.decoding)?;
        let root = parse_document(&body).await?;
        drop(body);

        let entries = TreeEntries::from_document(root, kind.list_path(), kind.entry_tag())?;
        self.reader(window).run(entries, mapper, handler).await?;
        Ok(())
    }

    async fn open(&self, source: &FeedSource) -> Result<ByteStream> {
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        let credentials = self.config.credentials();
        self.http.fetch(&source.url(), credentials.as_ref()).await
    }

    fn reader(&self, window: PageWindow) -> PaginatedReader {
        PaginatedReader::new(window).with_cancellation(self.cancel.clone())
    }
}
