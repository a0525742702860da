//! Record mapping module
//!
//! Typed records for each feed kind and the pure functions that build them
//! from raw index entries.
//!
//! # Overview
//!
//! - [`ProductSummary`] - lightweight product record taken from the index
//! - [`ProductDetail`] - full detail document (XML attributes or raw JSON)
//! - [`EnrichedProduct`] - detail attributes joined with index taxonomy
//! - [`ProductRecord`] - either product shape, as delivered by product feeds
//! - [`Category`], [`Supplier`] - reference list records
//!
//! Mappers return `Option`: an entry without its required fields produces no
//! record and is skipped by the reader.

mod mapper;
mod types;

pub use mapper::{fold_case, map_category, map_product_summary, map_supplier, merge_enriched};
pub use types::{
    Category, EnrichedProduct, ProductDetail, ProductRecord, ProductSummary, Supplier,
};

#[cfg(test)]
mod tests;
