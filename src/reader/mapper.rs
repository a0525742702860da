//! Entry mappers
//!
//! One mapper per feed kind. Returning `Ok(None)` skips the entry; returning
//! an error ends the read.

use crate::detail::DetailFetcher;
use crate::error::{Error, Result};
use crate::http::HttpFetch;
use crate::records::{
    map_category, map_product_summary, map_supplier, merge_enriched, Category, EnrichedProduct,
    ProductDetail, ProductSummary, Supplier,
};
use crate::types::Attributes;
use crate::xml::Element;
use async_trait::async_trait;
use tracing::debug;

/// Turn one raw entry into a record
#[async_trait]
pub trait EntryMapper: Send + Sync {
    /// Raw entry accepted
    type Entry: Send;
    /// Record produced
    type Record: Send;

    /// Map an entry; `None` when it carries no usable record
    async fn map(&self, entry: Self::Entry) -> Result<Option<Self::Record>>;
}

/// Lightweight product records from index attributes
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryMapper;

#[async_trait]
impl EntryMapper for SummaryMapper {
    type Entry = Attributes;
    type Record = ProductSummary;

    async fn map(&self, entry: Attributes) -> Result<Option<ProductSummary>> {
        Ok(map_product_summary(&entry))
    }
}

/// Product records enriched with the detail document of each entry.
///
/// One detail request per entry, awaited before the next entry is read.
pub struct EnrichedMapper<'a, F> {
    details: &'a DetailFetcher<F>,
}

impl<'a, F: HttpFetch> EnrichedMapper<'a, F> {
    /// Enrich through `details`
    pub fn new(details: &'a DetailFetcher<F>) -> Self {
        Self { details }
    }
}

#[async_trait]
impl<'a, F: HttpFetch> EntryMapper for EnrichedMapper<'a, F> {
    type Entry = Attributes;
    type Record = EnrichedProduct;

    async fn map(&self, entry: Attributes) -> Result<Option<EnrichedProduct>> {
        let Some(path) = entry.get("path") else {
            debug!("Skipping index entry: {}", Error::missing_field("path"));
            return Ok(None);
        };

        match self.details.by_path(path).await? {
            Some(ProductDetail::Xml(detail)) => Ok(Some(merge_enriched(&entry, detail))),
            Some(ProductDetail::Json(_)) | None => Ok(None),
        }
    }
}

/// Category records from `Category` elements
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryMapper;

#[async_trait]
impl EntryMapper for CategoryMapper {
    type Entry = Element;
    type Record = Category;

    async fn map(&self, entry: Element) -> Result<Option<Category>> {
        Ok(map_category(&entry))
    }
}

/// Supplier records from `Supplier` elements
#[derive(Debug, Clone, Copy, Default)]
pub struct SupplierMapper;

#[async_trait]
impl EntryMapper for SupplierMapper {
    type Entry = Element;
    type Record = Supplier;

    async fn map(&self, entry: Element) -> Result<Option<Supplier>> {
        Ok(map_supplier(&entry))
    }
}
