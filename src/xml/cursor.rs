//! Streaming XML cursor
//!
//! A forward-only position over an XML document. The cursor stops on start
//! tags; the caller then either skips the element, materializes it, or only
//! reads its attributes. Nothing already consumed can be revisited.

use super::types::Element;
use crate::error::{Error, Result};
use crate::http::ByteStream;
use crate::types::Attributes;
use bytes::Bytes;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tokio::io::AsyncBufRead;
use tokio_util::io::StreamReader;

/// Cursor over a remote response body
pub type StreamCursor = XmlCursor<StreamReader<ByteStream, Bytes>>;

/// One lexical step of the document, detached from the read buffer
enum Token {
    Open(BytesStart<'static>),
    Empty(BytesStart<'static>),
    Close,
    Eof,
    Other,
}

/// The start tag the cursor is positioned on
struct Head {
    start: BytesStart<'static>,
    /// Self-closing tag
    empty: bool,
    /// Number of open ancestors
    level: usize,
    /// Subtree already read or skipped
    consumed: bool,
}

/// Forward-only cursor over an XML document
pub struct XmlCursor<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    /// Currently open elements
    depth: usize,
    current: Option<Head>,
}

impl StreamCursor {
    /// Open a cursor over a response body
    pub fn from_stream(stream: ByteStream) -> Self {
        Self::new(StreamReader::new(stream))
    }
}

impl<R: AsyncBufRead + Unpin> XmlCursor<R> {
    /// Create a cursor over an async buffered source
    pub fn new(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        reader.config_mut().trim_text(true);
        Self {
            reader,
            buf: Vec::new(),
            depth: 0,
            current: None,
        }
    }

    /// Advance to the next element named `tag`, at any depth.
    ///
    /// Descends into the current element rather than skipping it.
    /// Returns `false` when the document ends first.
    pub async fn seek(&mut self, tag: &str) -> Result<bool> {
        self.seek_matching(Some(tag)).await
    }

    /// Advance to the next element of any name (the root, on a fresh cursor)
    pub async fn seek_any(&mut self) -> Result<bool> {
        self.seek_matching(None).await
    }

    /// Advance to the next sibling of the current element named `tag`.
    ///
    /// Siblings with other names are skipped whole. Returns `false` once the
    /// parent closes or the document ends.
    pub async fn next_sibling(&mut self, tag: &str) -> Result<bool> {
        let Some(head) = self.current.take() else {
            return Ok(false);
        };
        let level = head.level;
        if !head.consumed && !head.empty {
            self.skip_to(level).await?;
        }

        loop {
            match self.next_token().await? {
                Token::Open(start) => {
                    if start.name().as_ref() == tag.as_bytes() {
                        self.position(start, false, level);
                        return Ok(true);
                    }
                    self.skip_to(level).await?;
                }
                Token::Empty(start) => {
                    if start.name().as_ref() == tag.as_bytes() {
                        self.position(start, true, level);
                        return Ok(true);
                    }
                }
                Token::Close | Token::Eof => return Ok(false),
                Token::Other => {}
            }
        }
    }

    /// Name of the current element
    pub fn current_name(&self) -> Option<String> {
        self.current
            .as_ref()
            .map(|head| String::from_utf8_lossy(head.start.name().as_ref()).into_owned())
    }

    /// Attributes of the current element, without consuming it
    pub fn current_attributes(&self) -> Result<Attributes> {
        match &self.current {
            Some(head) => self.attributes_of(&head.start),
            None => Err(Error::malformed("cursor is not positioned on an element")),
        }
    }

    /// Consume the current element without materializing it
    pub async fn skip_current(&mut self) -> Result<()> {
        let Some(head) = self.current.as_mut() else {
            return Ok(());
        };
        if head.consumed || head.empty {
            head.consumed = true;
            return Ok(());
        }
        head.consumed = true;
        let level = head.level;
        self.skip_to(level).await
    }

    /// Consume the current element and return it with its whole subtree
    pub async fn read_current(&mut self) -> Result<Element> {
        let (root, empty) = match self.current.as_mut() {
            Some(head) if !head.consumed => {
                head.consumed = true;
                (head.start.clone(), head.empty)
            }
            Some(_) => return Err(Error::malformed("current element was already consumed")),
            None => return Err(Error::malformed("cursor is not positioned on an element")),
        };

        let root = self.element_from(&root)?;
        if empty {
            return Ok(root);
        }

        let mut stack = vec![root];
        loop {
            match self.next_token().await? {
                Token::Open(start) => stack.push(self.element_from(&start)?),
                Token::Empty(start) => {
                    let element = self.element_from(&start)?;
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(element);
                    }
                }
                Token::Close => {
                    let Some(done) = stack.pop() else {
                        return Err(Error::malformed("unbalanced element"));
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(done),
                        None => return Ok(done),
                    }
                }
                Token::Eof => return Err(Error::malformed("document ended inside an element")),
                Token::Other => {}
            }
        }
    }

    async fn seek_matching(&mut self, tag: Option<&str>) -> Result<bool> {
        // Seeking descends, so an unconsumed current element is entered, not skipped
        self.current = None;

        loop {
            match self.next_token().await? {
                Token::Open(start) => {
                    if tag.map_or(true, |t| start.name().as_ref() == t.as_bytes()) {
                        let level = self.depth - 1;
                        self.position(start, false, level);
                        return Ok(true);
                    }
                }
                Token::Empty(start) => {
                    if tag.map_or(true, |t| start.name().as_ref() == t.as_bytes()) {
                        let level = self.depth;
                        self.position(start, true, level);
                        return Ok(true);
                    }
                }
                Token::Eof => return Ok(false),
                Token::Close | Token::Other => {}
            }
        }
    }

    fn position(&mut self, start: BytesStart<'static>, empty: bool, level: usize) {
        self.current = Some(Head {
            start,
            empty,
            level,
            consumed: false,
        });
    }

    /// Read until only `level` elements remain open
    async fn skip_to(&mut self, level: usize) -> Result<()> {
        while self.depth > level {
            if let Token::Eof = self.next_token().await? {
                return Err(Error::malformed("document ended inside an element"));
            }
        }
        Ok(())
    }

    async fn next_token(&mut self) -> Result<Token> {
        self.buf.clear();
        let event = match self.reader.read_event_into_async(&mut self.buf).await {
            Ok(event) => event,
            Err(e) => {
                return Err(xml_error(e, self.reader.buffer_position()));
            }
        };

        let token = match event {
            Event::Start(start) => {
                self.depth += 1;
                Token::Open(start.into_owned())
            }
            Event::Empty(start) => Token::Empty(start.into_owned()),
            Event::End(_) => {
                self.depth = self.depth.saturating_sub(1);
                Token::Close
            }
            Event::Eof => {
                if self.depth > 0 {
                    return Err(Error::malformed(format!(
                        "document ended with {} unclosed element(s)",
                        self.depth
                    )));
                }
                Token::Eof
            }
            _ => Token::Other,
        };
        Ok(token)
    }

    fn element_from(&self, start: &BytesStart<'_>) -> Result<Element> {
        Ok(Element {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            attributes: self.attributes_of(start)?,
            children: Vec::new(),
        })
    }

    fn attributes_of(&self, start: &BytesStart<'_>) -> Result<Attributes> {
        let decoder = self.reader.decoder();
        let mut attributes = Attributes::new();

        for attr in start.attributes() {
            let attr = attr.map_err(|e| Error::malformed(format!("invalid attribute: {e}")))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .decode_and_unescape_value(decoder)
                .map_err(|e| Error::malformed(format!("invalid value for '{key}': {e}")))?;
            attributes.insert(key, value.into_owned());
        }

        Ok(attributes)
    }
}

fn xml_error(err: quick_xml::Error, position: impl std::fmt::Display) -> Error {
    match err {
        quick_xml::Error::Io(io) => Error::Io(std::io::Error::new(io.kind(), io.to_string())),
        other => Error::malformed(format!("{other} (at byte {position})")),
    }
}
