//! End-to-end checks against the real pretrained checkpoint.
//!
//! Ignored by default: constructing [`MiniLmEncoder`] downloads the
//! all-MiniLM-L6-v2 model on first use. Run with `cargo test -- --ignored`.

use docsim::embedding::{EMBEDDING_DIM, MiniLmEncoder, TextEncoder, score};
use docsim::models::config::EmbeddingConfig;

#[test]
#[ignore = "downloads the pretrained all-MiniLM-L6-v2 checkpoint"]
fn related_sentences_score_high_but_below_identity() {
    let mut encoder =
        MiniLmEncoder::try_new(&EmbeddingConfig::default()).expect("model should load");

    let embedding = encoder
        .encode("The cat sat on the mat.")
        .expect("encoding should succeed");
    assert_eq!(embedding.len(), EMBEDDING_DIM);

    let similarity = score(
        &mut encoder,
        "The cat sat on the mat.",
        "A cat was sitting on a mat.",
    )
    .expect("scoring should succeed");
    assert!(similarity > 0.6, "related sentences scored {similarity}");
    assert!(similarity < 1.0);

    let identity = score(
        &mut encoder,
        "The cat sat on the mat.",
        "The cat sat on the mat.",
    )
    .expect("scoring should succeed");
    assert!((identity - 1.0).abs() < 1e-4);

    // Fixed weights, no sampling: repeat runs are bit-identical.
    let repeat = score(
        &mut encoder,
        "The cat sat on the mat.",
        "A cat was sitting on a mat.",
    )
    .expect("scoring should succeed");
    assert_eq!(similarity.to_bits(), repeat.to_bits());
}
