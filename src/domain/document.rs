use std::fs;
use std::path::Path;

use crate::extract::{ExtractError, document_kind};

/// The closed set of supported document kinds, keyed on file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Text,
    Pdf,
    Word,
    Slides,
}

impl DocumentKind {
    /// Resolve the kind from a file name by its extension
    /// (case-insensitive). Returns `None` for anything outside the
    /// supported set.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = Path::new(filename).extension().and_then(|ext| ext.to_str())?;
        match extension.to_ascii_lowercase().as_str() {
            "txt" => Some(Self::Text),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Word),
            "pptx" => Some(Self::Slides),
            _ => None,
        }
    }
}

/// A user-supplied document awaiting extraction.
///
/// Created per comparison, read exactly once by the extractor and
/// discarded afterwards; nothing is persisted between runs.
#[derive(Debug)]
pub struct UploadedDocument {
    pub bytes: Vec<u8>,
    pub kind: DocumentKind,
    pub filename: Option<String>,
}

impl UploadedDocument {
    pub fn new(bytes: Vec<u8>, kind: DocumentKind, filename: Option<String>) -> Self {
        Self {
            bytes,
            kind,
            filename,
        }
    }

    /// Read a document from disk, resolving its kind from the file name.
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        let kind = document_kind(&filename)?;
        let bytes = fs::read(path)?;
        Ok(Self::new(bytes, kind, Some(filename)))
    }
}
