//! HTTP module
//!
//! The [`HttpFetch`] capability used by every remote read, and its
//! reqwest-backed implementation.
//!
//! # Features
//!
//! - **Streaming bodies**: responses are handed out as a byte stream so large
//!   indexes are never buffered whole
//! - **Basic auth**: explicit credentials replace any embedded in the URL
//! - **TLS verification switch** and request timeout
//!
//! There is no retry or backoff: a failed request is reported to the caller.

mod client;
mod fetch;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use fetch::{collect_body, ByteStream, HttpFetch};

#[cfg(test)]
mod tests;
