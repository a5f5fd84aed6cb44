/// Mock embedder for testing purposes.
///
/// Generates deterministic embeddings based on text hash, so it can stand in
/// for a real server in tests and offline runs.
use std::hash::{DefaultHasher, Hash, Hasher};

use super::{EmbedderError, EmbeddingGenerator};
use super::ollama::EMBEDDING_LENGTH;

/// A mock embedder that produces deterministic vectors from text hashes.
pub struct MockEmbedder {
    pub dimensions: usize,
}

impl MockEmbedder {
    /// Create a new `MockEmbedder` with the given dimensionality.
    #[must_use]
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

impl Default for MockEmbedder {
    fn default() -> Self {
        Self {
            dimensions: EMBEDDING_LENGTH,
        }
    }
}

impl EmbeddingGenerator for MockEmbedder {
    fn embed_text(&self, text: &str, dimensions: Option<usize>) -> Result<Vec<f64>, EmbedderError> {
        let dimensions = dimensions.unwrap_or(self.dimensions);

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let bytes = hasher.finish().to_le_bytes();

        let mut embedding: Vec<f64> = (0..dimensions)
            .map(|i| f64::from(bytes[i % 8]) / 255.0)
            .collect();

        // L2 normalize
        let norm_sq: f64 = embedding.iter().map(|v| v * v).sum();
        if norm_sq > 0.0 {
            let inv = 1.0 / norm_sq.sqrt();
            for v in &mut embedding {
                *v *= inv;
            }
        }

        Ok(embedding)
    }

    fn embedding_length(&self) -> usize {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    #[test]
    fn test_mock_embed_dimensions() {
        let embedder = MockEmbedder::new(384);
        let result = embedder.embed_text("hello world", None).unwrap();
        assert_eq!(result.len(), 384);
    }

    #[test]
    fn test_mock_requested_dimensions() {
        let embedder = MockEmbedder::default();
        let result = embedder.embed_text("hello world", Some(16)).unwrap();
        assert_eq!(result.len(), 16);
    }

    #[test]
    fn test_mock_embed_deterministic() {
        let embedder = MockEmbedder::default();
        let a = embedder.embed_text("hello", None).unwrap();
        let b = embedder.embed_text("hello", None).unwrap();
        assert_eq!(a, b, "same input should produce same output");
    }

    #[test]
    fn test_mock_embed_different_inputs() {
        let embedder = MockEmbedder::default();
        let a = embedder.embed_text("hello", None).unwrap();
        let b = embedder.embed_text("world", None).unwrap();
        assert_ne!(a, b, "different inputs should produce different outputs");
    }

    #[test]
    fn test_mock_embed_normalized() {
        let embedder = MockEmbedder::new(128);
        let vec = embedder.embed_text("test normalization", None).unwrap();
        let norm: f64 = vec.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!(
            (norm - 1.0).abs() < 0.01,
            "vector should be approximately unit length, got {norm}"
        );
    }

    #[test]
    fn test_mock_embed_documents() {
        let embedder = MockEmbedder::new(8);
        let mut docs = vec![
            Document::new("a"),
            Document::new("b").with_formatted_content("formatted b"),
        ];
        embedder.embed_documents(&mut docs, None).unwrap();

        assert_eq!(docs[0].embedding, Some(embedder.embed_text("a", None).unwrap()));
        assert_eq!(
            docs[1].embedding,
            Some(embedder.embed_text("formatted b", None).unwrap())
        );
    }

    #[test]
    fn test_mock_default_dimensions() {
        let embedder = MockEmbedder::default();
        assert_eq!(embedder.embedding_length(), 1024);
    }
}
