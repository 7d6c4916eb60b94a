//! Text extraction for the supported document kinds.
//!
//! One handler per kind, dispatched by an exhaustive match so a new kind
//! cannot be added without a handler. The extracted concatenation is
//! returned verbatim; an empty string is a valid outcome and is distinct
//! from an error.

use std::io::{Cursor, Read};

use thiserror::Error;

use crate::domain::document::{DocumentKind, UploadedDocument};

pub mod pdf;
pub mod slides;
pub mod word;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("invalid text encoding")]
    InvalidTextEncoding(#[from] std::string::FromUtf8Error),
    #[error("unreadable PDF: {0}")]
    UnreadablePdf(String),
    #[error("unreadable Word document: {0}")]
    UnreadableWordDocument(String),
    #[error("unreadable slide deck: {0}")]
    UnreadableSlideDeck(String),
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolve the document kind from a file name, erroring on extensions
/// outside the supported set.
pub fn document_kind(filename: &str) -> Result<DocumentKind, ExtractError> {
    DocumentKind::from_filename(filename)
        .ok_or_else(|| ExtractError::UnsupportedFileType(filename.to_string()))
}

/// Extract the full text of a document as a single string.
pub fn extract_text(document: UploadedDocument) -> Result<String, ExtractError> {
    match document.kind {
        DocumentKind::Text => Ok(String::from_utf8(document.bytes)?),
        DocumentKind::Pdf => pdf::extract(&document.bytes),
        DocumentKind::Word => word::extract(&document.bytes),
        DocumentKind::Slides => slides::extract(&document.bytes),
    }
}

/// Read a single named part out of an OOXML container.
pub(crate) fn read_part(bytes: &[u8], name: &str) -> Result<Vec<u8>, String> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|error| error.to_string())?;
    let mut file = archive
        .by_name(name)
        .map_err(|error| format!("missing {name}: {error}"))?;
    let mut content = Vec::new();
    file.read_to_end(&mut content)
        .map_err(|error| error.to_string())?;
    Ok(content)
}
