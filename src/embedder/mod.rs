//! Embedding generator trait and shared types.
//!
//! Implementations only need `embed_text`; the document methods are built
//! on top of it.

pub mod mock;
pub mod ollama;
pub mod transport;

use thiserror::Error;

use crate::document::Document;

/// Errors that can occur during embedding operations.
#[derive(Error, Debug)]
pub enum EmbedderError {
    #[error("setting embedding dimensions is not supported (requested {0})")]
    UnsupportedOption(usize),

    #[error("request to embedding service failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("embedding service returned {reason}: {body}")]
    MalformedResponse { reason: &'static str, body: String },

    #[error("invalid embedder configuration: {0}")]
    InvalidConfig(String),
}

/// Trait for text embedding implementations.
///
/// All implementations must be `Send + Sync` to allow shared use behind
/// `Arc`.
pub trait EmbeddingGenerator: Send + Sync {
    /// Embed a single text string into a vector.
    ///
    /// `dimensions` asks for a specific output size; implementations that
    /// cannot honor it return [`EmbedderError::UnsupportedOption`].
    fn embed_text(&self, text: &str, dimensions: Option<usize>) -> Result<Vec<f64>, EmbedderError>;

    /// Embed a document's text and store the vector on it.
    ///
    /// Uses `formatted_content` when present, `content` otherwise.
    fn embed_document<'d>(
        &self,
        document: &'d mut Document,
        dimensions: Option<usize>,
    ) -> Result<&'d mut Document, EmbedderError> {
        let embedding = self.embed_text(document.text_to_embed(), dimensions)?;
        document.embedding = Some(embedding);
        Ok(document)
    }

    /// Embed documents one after another, in order.
    ///
    /// Stops at the first error. Documents before the failing one keep their
    /// new embeddings, later ones are left untouched.
    fn embed_documents<'d>(
        &self,
        documents: &'d mut [Document],
        dimensions: Option<usize>,
    ) -> Result<&'d mut [Document], EmbedderError> {
        for document in documents.iter_mut() {
            self.embed_document(document, dimensions)?;
        }
        Ok(documents)
    }

    /// Declared dimensionality of the vectors this generator produces.
    ///
    /// This is an expectation, not a check on what `embed_text` returns.
    fn embedding_length(&self) -> usize;
}
