//! Eagerly loaded documents
//!
//! Reference lists (categories, suppliers) are small enough to hold in
//! memory and are served gzip-compressed.

use super::cursor::XmlCursor;
use super::types::Element;
use crate::endpoint::ContentDecoding;
use crate::error::{Error, Result};
use flate2::read::GzDecoder;
use std::io::Read;
use tracing::debug;

/// Leading bytes of every gzip member
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Undo the body's content decoding.
///
/// A gzip body that was already inflated by the transport no longer carries
/// the magic bytes and passes through unchanged.
pub fn decode_body(body: Vec<u8>, decoding: ContentDecoding) -> Result<Vec<u8>> {
    match decoding {
        ContentDecoding::Gzip if body.starts_with(&GZIP_MAGIC) => {
            let mut decoder = GzDecoder::new(body.as_slice());
            let mut inflated = Vec::new();
            decoder
                .read_to_end(&mut inflated)
                .map_err(|e| Error::decompress(e.to_string()))?;
            debug!("Decompressed {} -> {} bytes", body.len(), inflated.len());
            Ok(inflated)
        }
        _ => Ok(body),
    }
}

/// Parse a whole document into its root element
pub async fn parse_document(body: &[u8]) -> Result<Element> {
    let mut cursor = XmlCursor::new(body);
    if !cursor.seek_any().await? {
        return Err(Error::malformed("document has no root element"));
    }
    cursor.read_current().await
}
