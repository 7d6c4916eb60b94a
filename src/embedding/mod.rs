//! Sentence embeddings and cosine similarity.

use std::path::PathBuf;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use thiserror::Error;

use crate::models::config::EmbeddingConfig;

/// Embedding dimension of the all-MiniLM-L6-v2 checkpoint.
pub const EMBEDDING_DIM: usize = 384;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("embedding model unavailable: {0}")]
    ModelUnavailable(String),
}

/// Seam over the sentence encoder so the pipeline can be exercised with a
/// test double instead of the pretrained checkpoint.
pub trait TextEncoder {
    /// Embed a single text into a fixed-length vector.
    fn encode(&mut self, text: &str) -> Result<Vec<f32>, EncodeError>;

    fn dimensions(&self) -> usize;
}

/// Production encoder backed by the pretrained all-MiniLM-L6-v2
/// checkpoint.
///
/// The model is resolved and loaded once at construction and reused
/// read-only for every call; inference is deterministic for fixed
/// weights, so repeated calls on the same text yield identical vectors.
pub struct MiniLmEncoder {
    embedder: TextEmbedding,
}

impl MiniLmEncoder {
    pub fn try_new(config: &EmbeddingConfig) -> Result<Self, EncodeError> {
        let mut options = InitOptions::new(EmbeddingModel::AllMiniLML6V2)
            .with_show_download_progress(config.show_download_progress);
        if let Some(cache_dir) = &config.cache_dir {
            options = options.with_cache_dir(PathBuf::from(cache_dir));
        }

        let embedder = TextEmbedding::try_new(options)
            .map_err(|error| EncodeError::ModelUnavailable(format!("{error:?}")))?;

        Ok(Self { embedder })
    }
}

impl TextEncoder for MiniLmEncoder {
    fn encode(&mut self, text: &str) -> Result<Vec<f32>, EncodeError> {
        self.embedder
            .embed(vec![text.to_string()], None)
            .map_err(|error| EncodeError::ModelUnavailable(format!("{error:?}")))?
            .into_iter()
            .next()
            .ok_or_else(|| {
                EncodeError::ModelUnavailable("encoder returned no embedding".to_string())
            })
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIM
    }
}

/// Cosine similarity of two vectors, clamped to `[-1, 1]` against
/// floating-point slack.
///
/// Returns 0.0 when either vector has (near-)zero magnitude; the angle is
/// undefined there and the division must not produce NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot = a.iter().zip(b).map(|(x, y)| x * y).sum::<f32>();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    let denom = norm_a * norm_b;
    if denom <= f32::EPSILON {
        return 0.0;
    }

    (dot / denom).clamp(-1.0, 1.0)
}

/// Embed both texts independently and return their cosine similarity.
pub fn score<E>(encoder: &mut E, text_a: &str, text_b: &str) -> Result<f32, EncodeError>
where
    E: TextEncoder + ?Sized,
{
    let embedding_a = encoder.encode(text_a)?;
    let embedding_b = encoder.encode(text_b)?;
    Ok(cosine_similarity(&embedding_a, &embedding_b))
}
