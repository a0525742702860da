//! Endpoint module
//!
//! Composes request URLs for the catalog service from scheme, host, path,
//! embedded credentials and query parameters.
//!
//! # Overview
//!
//! A [`FeedSource`] holds the parts of one request. Defaults for an endpoint
//! family come from configuration; [`SourceOverrides`] replace them
//! field by field and [`build_url`] renders the final URL string.

mod builder;
mod types;

pub use builder::{build_url, normalize_path};
pub use types::{AuthOverride, ContentDecoding, Credentials, FeedSource, SourceOverrides};
