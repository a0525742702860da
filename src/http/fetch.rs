//! Fetch capability
//!
//! Everything above the transport talks to this trait, so readers can be
//! driven by the reqwest client or by any other byte source.

use crate::endpoint::Credentials;
use crate::error::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{Stream, StreamExt};
use std::pin::Pin;
use std::sync::Arc;

/// A response body as a stream of chunks
pub type ByteStream = Pin<Box<dyn Stream<Item = std::io::Result<Bytes>> + Send>>;

/// Open a remote resource as a byte stream
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// GET `url`, authenticating with `auth` when given.
    ///
    /// Fails when the resource cannot be opened: connection problems,
    /// timeouts and non-2xx statuses are all errors here.
    async fn fetch(&self, url: &str, auth: Option<&Credentials>) -> Result<ByteStream>;
}

#[async_trait]
impl<T: HttpFetch + ?Sized> HttpFetch for Arc<T> {
    async fn fetch(&self, url: &str, auth: Option<&Credentials>) -> Result<ByteStream> {
        (**self).fetch(url, auth).await
    }
}

/// Read a whole body into memory, failing once it grows past `limit` bytes
pub async fn collect_body(mut stream: ByteStream, limit: usize) -> Result<Vec<u8>> {
    let mut body = Vec::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if body.len().saturating_add(chunk.len()) > limit {
            return Err(Error::ResponseTooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}
