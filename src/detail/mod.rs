//! Product detail module
//!
//! Resolves one product's full detail record. The identifier's shape picks
//! the route:
//!
//! - all ASCII digits: Icecat numeric id, answered by the JSON API on the
//!   live host. Failures are returned to the caller.
//! - anything else: path of a per-product XML document on the detail host.
//!   Only the `Product` element's attributes are read; any failure to open
//!   or parse the document yields `None`.

mod fetcher;

pub use fetcher::{is_numeric_id, DetailFetcher};
