//! Streaming extraction of `<mime-type>` descriptions from the
//! shared-mime-info XML database.
//!
//! The document is pull-parsed one event at a time, so only the element
//! currently being decoded is held in memory. Relevant input shape:
//!
//! ```xml
//! <mime-info>
//!   <mime-type type="text/plain">
//!     <comment>Plain text document</comment>
//!     <comment xml:lang="de">Einfaches Textdokument</comment>
//!     <glob pattern="*.txt"/>
//!   </mime-type>
//! </mime-info>
//! ```

use std::collections::BTreeMap;
use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{debug, warn};

use super::error::DecodeError;

/// MIME type -> raw (unescaped) description, sorted by MIME type.
pub type DescriptionTable = BTreeMap<String, String>;

const MIME_TYPE: &[u8] = b"mime-type";
const COMMENT: &[u8] = b"comment";
const TYPE_ATTR: &[u8] = b"type";
const LANG_ATTR: &[u8] = b"xml:lang";

/// One `<mime-type>` element that carries a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeEntry {
    pub mime_type: String,
    pub description: String,
}

/// Read the whole document and collect every described MIME type.
///
/// When a type appears more than once the last description in document
/// order wins. Any decode error aborts the extraction; no partial table is
/// returned.
pub fn extract_descriptions<R: BufRead>(input: R) -> Result<DescriptionTable, DecodeError> {
    let mut table = DescriptionTable::new();
    for entry in MimeEntries::new(input) {
        let MimeEntry {
            mime_type,
            description,
        } = entry?;
        if let Some(previous) = table.insert(mime_type.clone(), description) {
            warn!(%mime_type, %previous, "duplicate mime-type, keeping the later description");
        }
    }
    Ok(table)
}

/// Iterator over the described `<mime-type>` elements of a document.
///
/// Elements without an untranslated, non-empty `<comment>` are skipped.
/// After the first error the iterator is exhausted.
pub struct MimeEntries<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    depth: usize,
    seen_root: bool,
    done: bool,
}

impl<R: BufRead> MimeEntries<R> {
    pub fn new(input: R) -> Self {
        Self {
            reader: Reader::from_reader(input),
            buf: Vec::new(),
            depth: 0,
            seen_root: false,
            done: false,
        }
    }

    fn next_entry(&mut self) -> Result<Option<MimeEntry>, DecodeError> {
        loop {
            self.buf.clear();
            let position = self.reader.buffer_position();
            let event = self
                .reader
                .read_event_into(&mut self.buf)
                .map_err(|source| DecodeError::Xml { position, source })?;

            match event {
                Event::Start(start) if start.local_name().as_ref() == MIME_TYPE => {
                    self.seen_root = true;
                    let mime_type = type_attribute(&self.reader, &start, position)?;
                    let description = read_mime_type_body(&mut self.reader)?;

                    match description.filter(|d| !d.is_empty()) {
                        Some(description) => {
                            let mime_type = mime_type
                                .filter(|t| !t.is_empty())
                                .ok_or(DecodeError::MissingType { position })?;
                            return Ok(Some(MimeEntry {
                                mime_type,
                                description,
                            }));
                        }
                        None => debug!(?mime_type, "skipping mime-type without description"),
                    }
                }
                Event::Empty(start) => {
                    self.seen_root = true;
                    if start.local_name().as_ref() == MIME_TYPE {
                        let mime_type = type_attribute(&self.reader, &start, position)?;
                        debug!(?mime_type, "skipping empty mime-type element");
                    }
                }
                Event::Start(_) => {
                    self.seen_root = true;
                    self.depth += 1;
                }
                Event::End(_) => self.depth = self.depth.saturating_sub(1),
                Event::Eof => {
                    if self.depth > 0 {
                        return Err(DecodeError::UnexpectedEof {
                            element: "document element",
                        });
                    }
                    if !self.seen_root {
                        return Err(DecodeError::NoRootElement);
                    }
                    return Ok(None);
                }
                _ => {}
            }
        }
    }
}

impl<R: BufRead> Iterator for MimeEntries<R> {
    type Item = Result<MimeEntry, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_entry() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// The unescaped `type` attribute, if present.
fn type_attribute<R>(
    reader: &Reader<R>,
    start: &BytesStart<'_>,
    position: usize,
) -> Result<Option<String>, DecodeError> {
    for attr in start.attributes() {
        let attr = attr.map_err(|source| DecodeError::Attribute { position, source })?;
        if attr.key.as_ref() == TYPE_ATTR {
            let value = attr
                .decode_and_unescape_value(reader)
                .map_err(|source| DecodeError::Xml { position, source })?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn is_translation(start: &BytesStart<'_>, position: usize) -> Result<bool, DecodeError> {
    for attr in start.attributes() {
        let attr = attr.map_err(|source| DecodeError::Attribute { position, source })?;
        if attr.key.as_ref() == LANG_ATTR {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Consume a `<mime-type>` element up to its end tag and return the text of
/// its last untranslated direct-child `<comment>`.
fn read_mime_type_body<R: BufRead>(reader: &mut Reader<R>) -> Result<Option<String>, DecodeError> {
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut description = None;

    loop {
        buf.clear();
        let position = reader.buffer_position();
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|source| DecodeError::Xml { position, source })?;

        match event {
            Event::Start(start) if depth == 0 && start.local_name().as_ref() == COMMENT => {
                let translated = is_translation(&start, position)?;
                let text = read_text(reader)?;
                if !translated {
                    description = Some(text);
                }
            }
            Event::Empty(start) if depth == 0 && start.local_name().as_ref() == COMMENT => {
                if !is_translation(&start, position)? {
                    description = Some(String::new());
                }
            }
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => return Ok(description),
            Event::End(_) => depth -= 1,
            Event::Eof => return Err(DecodeError::UnexpectedEof { element: "mime-type" }),
            _ => {}
        }
    }
}

/// Collect the character data of the current element up to its end tag.
/// Markup nested inside is skipped but its text is kept.
fn read_text<R: BufRead>(reader: &mut Reader<R>) -> Result<String, DecodeError> {
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut text = String::new();

    loop {
        buf.clear();
        let position = reader.buffer_position();
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|source| DecodeError::Xml { position, source })?;

        match event {
            Event::Text(chunk) => {
                let chunk = chunk
                    .unescape()
                    .map_err(|source| DecodeError::Xml { position, source })?;
                text.push_str(&chunk);
            }
            Event::CData(chunk) => {
                let chunk =
                    std::str::from_utf8(&chunk).map_err(|_| DecodeError::Utf8 { position })?;
                text.push_str(chunk);
            }
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => return Ok(text),
            Event::End(_) => depth -= 1,
            Event::Eof => return Err(DecodeError::UnexpectedEof { element: "comment" }),
            _ => {}
        }
    }
}
