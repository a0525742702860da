//! Entry sources
//!
//! Both list shapes present the same contract to the read loop: skip the
//! next entry or materialize it, until the list runs out.

use crate::error::{Error, Result};
use crate::types::Attributes;
use crate::xml::{Element, XmlCursor};
use async_trait::async_trait;
use tokio::io::AsyncBufRead;

/// Bounded, forward-only sequence of list entries
#[async_trait]
pub trait EntrySource: Send {
    /// Raw entry handed to the mapper
    type Entry: Send;

    /// Move past the next entry without materializing it.
    ///
    /// Returns `false` when no entry was left.
    async fn skip_entry(&mut self) -> Result<bool>;

    /// Materialize the next entry; `None` once the list is exhausted
    async fn next_entry(&mut self) -> Result<Option<Self::Entry>>;
}

// ============================================================================
// Streaming
// ============================================================================

/// Sibling elements of one tag in a streamed document, read as attribute sets.
///
/// The first entry is the first element with the tag at any depth; later
/// entries are its siblings. Nested content is skipped unread.
pub struct StreamingEntries<R> {
    cursor: XmlCursor<R>,
    tag: String,
    started: bool,
    exhausted: bool,
}

impl<R: AsyncBufRead + Unpin + Send> StreamingEntries<R> {
    /// Walk `tag` elements under the cursor
    pub fn new(cursor: XmlCursor<R>, tag: impl Into<String>) -> Self {
        Self {
            cursor,
            tag: tag.into(),
            started: false,
            exhausted: false,
        }
    }

    async fn advance(&mut self) -> Result<bool> {
        if self.exhausted {
            return Ok(false);
        }
        let found = if self.started {
            self.cursor.next_sibling(&self.tag).await?
        } else {
            self.started = true;
            self.cursor.seek(&self.tag).await?
        };
        self.exhausted = !found;
        Ok(found)
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> EntrySource for StreamingEntries<R> {
    type Entry = Attributes;

    async fn skip_entry(&mut self) -> Result<bool> {
        self.advance().await
    }

    async fn next_entry(&mut self) -> Result<Option<Attributes>> {
        if !self.advance().await? {
            return Ok(None);
        }
        self.cursor.current_attributes().map(Some)
    }
}

// ============================================================================
// In-memory tree
// ============================================================================

/// Child elements of one list inside a parsed document
#[derive(Debug)]
pub struct TreeEntries {
    entries: std::vec::IntoIter<Element>,
}

impl TreeEntries {
    /// Entries named `tag` directly under `root` at `path`.
    ///
    /// A document without the list element is malformed.
    pub fn from_document(root: Element, path: &[&str], tag: &str) -> Result<Self> {
        let list = root.take_path(path).ok_or_else(|| {
            Error::malformed(format!("document has no {} element", path.join("/")))
        })?;
        let entries: Vec<Element> = list
            .children
            .into_iter()
            .filter(|child| child.name == tag)
            .collect();
        Ok(Self::new(entries))
    }

    /// Iterate prepared entries
    pub fn new(entries: Vec<Element>) -> Self {
        Self {
            entries: entries.into_iter(),
        }
    }

    /// Entries not yet taken
    pub fn remaining(&self) -> usize {
        self.entries.len()
    }
}

#[async_trait]
impl EntrySource for TreeEntries {
    type Entry = Element;

    async fn skip_entry(&mut self) -> Result<bool> {
        Ok(self.entries.next().is_some())
    }

    async fn next_entry(&mut self) -> Result<Option<Element>> {
        Ok(self.entries.next())
    }
}
