pub mod domain;
pub mod embedding;
pub mod extract;
pub mod models;
pub mod pipeline;

/// Number of characters shown in a document preview before truncation.
pub const PREVIEW_CHARS: usize = 500;
