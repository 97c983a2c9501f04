//! Error types for the generation pipeline.
//!
//! Each stage has its own error so callers can tell where a run failed.
//! None of them are recoverable: a failed run writes nothing and is simply
//! re-run.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain the XML byte stream.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The XML stream was malformed or a `<mime-type>` element had an unexpected shape.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed XML at byte {position}: {source}")]
    Xml {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },

    #[error("malformed attribute at byte {position}: {source}")]
    Attribute {
        position: usize,
        #[source]
        source: quick_xml::events::attributes::AttrError,
    },

    #[error("invalid UTF-8 in CDATA section at byte {position}")]
    Utf8 { position: usize },

    #[error("<mime-type> element at byte {position} has a description but no type attribute")]
    MissingType { position: usize },

    #[error("document ended inside <{element}>")]
    UnexpectedEof { element: &'static str },

    #[error("document has no root element")]
    NoRootElement,
}

/// The rendered source text could not be produced or failed its syntax check.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("formatting failed: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("unterminated string literal starting at byte {offset}")]
    UnterminatedLiteral { offset: usize },

    #[error("invalid escape sequence `\\{escape}` at byte {offset}")]
    InvalidEscape { offset: usize, escape: char },

    #[error("bare carriage return inside string literal at byte {offset}")]
    BareCarriageReturn { offset: usize },

    #[error("unbalanced `{delimiter}` at byte {offset}")]
    Unbalanced { offset: usize, delimiter: char },

    #[error("rendered table does not decode back to its input: {0}")]
    Mismatch(String),
}

/// Failure persisting the rendered file.
#[derive(Debug, Error)]
#[error("failed to write {path}: {source}")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Any failure of a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("parse failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("render failed: {0}")]
    Render(#[from] RenderError),

    #[error("write failed: {0}")]
    Write(#[from] WriteError),
}
