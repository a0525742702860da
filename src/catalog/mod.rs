//! Catalog client module
//!
//! Entry points for every catalog feed, wired to the HTTP capability, the
//! paginated reader and the detail fetcher.

mod client;
mod types;

pub use client::CatalogClient;
pub use types::{FeedKind, ProductMode};
