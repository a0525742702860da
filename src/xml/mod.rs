//! XML module
//!
//! Two access patterns over catalog documents:
//!
//! - [`XmlCursor`] - forward-only streaming cursor over an async byte source.
//!   Large product indexes are walked entry by entry without ever holding the
//!   whole document.
//! - [`parse_document`] - eager tree for the small reference lists, after an
//!   optional gzip decode ([`decode_body`]).
//!
//! Both produce [`Element`] nodes: name, attributes and child elements.
//! Text content is not retained; every field the catalog feeds carry lives
//! in attributes.

mod cursor;
mod document;
mod types;

pub use cursor::{StreamCursor, XmlCursor};
pub use document::{decode_body, parse_document, GZIP_MAGIC};
pub use types::Element;
