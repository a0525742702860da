// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Icecat Reader
//!
//! Streaming client for the Icecat product catalog feeds.
//!
//! ## Features
//!
//! - **Streaming indexes**: product file indexes are walked entry by entry
//!   over the response body, never held in memory whole
//! - **Skip/limit windows**: stable pagination over any feed, bounding
//!   either delivered records or examined entries
//! - **Enrichment**: optional per-product detail lookups merged into the
//!   index record
//! - **Early stop**: the record handler decides after every record whether
//!   the read continues
//! - **Reference lists**: gzip-compressed category and supplier lists
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use icecat_reader::{CatalogClient, Flow, PageWindow, ProductMode, ReaderConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ReaderConfig::new("shopname", "password").with_env_overrides();
//!     let client = CatalogClient::new(config)?;
//!
//!     client
//!         .fetch_products(PageWindow::new(0, 100), ProductMode::Summary, |product| {
//!             println!("{}", serde_json::to_string(&product)?);
//!             Ok(Flow::Continue)
//!         })
//!         .await?;
//!
//!     let detail = client.fetch_product("1234567").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         CatalogClient                           │
//! │  fetch_products  fetch_updated_products  fetch_categories       │
//! │  fetch_suppliers  fetch_product                                 │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────┬──────────────────┴──┬──────────────┬────────────────┐
//! │ Endpoint  │  PaginatedReader    │   Records    │    Detail      │
//! ├───────────┼─────────────────────┼──────────────┼────────────────┤
//! │ FeedSource│  PageWindow         │ Summary      │ JSON API (id)  │
//! │ build_url │  EntrySource        │ Enriched     │ XML (path)     │
//! │           │  EntryMapper        │ Category     │                │
//! │           │  Flow               │ Supplier     │                │
//! └───────────┴─────────────────────┴──────────────┴────────────────┘
//!                                │
//!              ┌─────────────────┴─────────────────┐
//!              │  HttpFetch (reqwest)  XmlCursor   │
//!              └───────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the reader
pub mod error;

/// Common types and type aliases
pub mod types;

/// Reader configuration
pub mod config;

/// URL composition
pub mod endpoint;

/// HTTP fetch capability and reqwest client
pub mod http;

/// Streaming XML cursor and document parsing
pub mod xml;

/// Typed records and entry mapping
pub mod records;

/// Single product lookups
pub mod detail;

/// Windowed feed reading
pub mod reader;

/// Feed entry points
pub mod catalog;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use catalog::{CatalogClient, ProductMode};
pub use config::ReaderConfig;
pub use detail::DetailFetcher;
pub use error::{Error, Result};
pub use http::{HttpClient, HttpFetch};
pub use reader::{Flow, LimitBasis, PageWindow};
pub use records::{
    Category, EnrichedProduct, ProductDetail, ProductRecord, ProductSummary, Supplier,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
