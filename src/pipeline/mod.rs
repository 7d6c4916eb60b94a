//! Request-scoped comparison pipeline.
//!
//! One user action drives one sequential pass: extract both documents,
//! gate on empty text, then score. Nothing persists between runs.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::PREVIEW_CHARS;
use crate::domain::document::UploadedDocument;
use crate::embedding::{EncodeError, TextEncoder, score};
use crate::extract::{ExtractError, extract_text};

/// User-facing message shown when either document yields no text.
pub const EMPTY_EXTRACTION_MESSAGE: &str = "please ensure both documents are valid and not empty";

/// Which of the two uploaded documents an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSlot {
    First,
    Second,
}

impl fmt::Display for DocumentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::First => "first document",
            Self::Second => "second document",
        })
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to extract the {which}: {source}")]
    Extraction {
        which: DocumentSlot,
        source: ExtractError,
    },
    #[error("please ensure both documents are valid and not empty")]
    EmptyExtraction,
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Result of a successful comparison: a preview of each extracted text
/// and the similarity of their embeddings.
#[derive(Debug, Serialize)]
pub struct ComparisonReport {
    pub preview_a: String,
    pub preview_b: String,
    pub similarity: f32,
}

impl ComparisonReport {
    /// Four-decimal rendering used for display.
    pub fn formatted_score(&self) -> String {
        format!("{:.4}", self.similarity)
    }
}

/// Truncated preview of an extracted text: the first [`PREVIEW_CHARS`]
/// characters, with an ellipsis marker appended when truncated.
pub fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((boundary, _)) => format!("{}...", &text[..boundary]),
        None => text.to_string(),
    }
}

/// Compare two uploaded documents.
///
/// Extraction errors are surfaced naming the offending document. When
/// either extraction yields an empty string the encoder is never invoked
/// and [`PipelineError::EmptyExtraction`] is returned; encoder failures
/// propagate unrecovered.
pub fn compare<E>(
    encoder: &mut E,
    first: UploadedDocument,
    second: UploadedDocument,
) -> Result<ComparisonReport, PipelineError>
where
    E: TextEncoder + ?Sized,
{
    let text_a = extract_text(first).map_err(|source| PipelineError::Extraction {
        which: DocumentSlot::First,
        source,
    })?;
    let text_b = extract_text(second).map_err(|source| PipelineError::Extraction {
        which: DocumentSlot::Second,
        source,
    })?;

    if text_a.is_empty() || text_b.is_empty() {
        return Err(PipelineError::EmptyExtraction);
    }

    log::info!(
        "Computing vector embeddings for {} and {} extracted characters",
        text_a.len(),
        text_b.len()
    );
    let similarity = score(encoder, &text_a, &text_b)?;

    Ok(ComparisonReport {
        preview_a: preview(&text_a),
        preview_b: preview(&text_b),
        similarity,
    })
}
