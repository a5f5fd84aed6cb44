/// Ollama embedder.
///
/// Calls the `embeddings` endpoint of an Ollama server, one request per
/// text, and returns the `embedding` array from the response.
use std::time::Duration;

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use super::transport::{HttpTransport, Transport};
use super::{EmbedderError, EmbeddingGenerator};
use crate::config::OllamaConfig;

/// Vector size declared for the Ollama embedder (`mxbai-embed-large`).
pub const EMBEDDING_LENGTH: usize = 1024;

const EMBEDDINGS_PATH: &str = "embeddings";

#[derive(Deserialize)]
struct EmbeddingResponse {
    #[serde(default)]
    embedding: Option<Vec<f64>>,
}

/// Ollama-backed embedder implementing [`EmbeddingGenerator`].
pub struct OllamaEmbedder<T = HttpTransport> {
    transport: T,
    model: String,
}

impl OllamaEmbedder<HttpTransport> {
    /// Create an embedder talking to `config.url` over HTTP.
    pub fn new(config: &OllamaConfig) -> Result<Self, EmbedderError> {
        let timeout = config.timeout_secs.map(Duration::from_secs);
        let transport = HttpTransport::new(&config.url, timeout)?;
        Ok(Self::with_transport(config.model.clone(), transport))
    }
}

impl<T: Transport> OllamaEmbedder<T> {
    /// Create an embedder that sends its requests through `transport`.
    pub fn with_transport(model: impl Into<String>, transport: T) -> Self {
        Self {
            transport,
            model: model.into(),
        }
    }

    /// Model name sent with every request.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl<T: Transport> EmbeddingGenerator for OllamaEmbedder<T> {
    fn embed_text(&self, text: &str, dimensions: Option<usize>) -> Result<Vec<f64>, EmbedderError> {
        if let Some(dims) = dimensions {
            return Err(EmbedderError::UnsupportedOption(dims));
        }

        // Ollama treats newlines as noise
        let prompt = text.replace('\n', " ");
        debug!(model = %self.model, chars = prompt.len(), "requesting embedding");

        let body = json!({
            "model": self.model,
            "prompt": prompt,
        });
        let raw = self.transport.post_json(EMBEDDINGS_PATH, &body)?;

        parse_embedding(raw)
    }

    fn embedding_length(&self) -> usize {
        EMBEDDING_LENGTH
    }
}

fn malformed(reason: &'static str, body: String) -> EmbedderError {
    EmbedderError::MalformedResponse { reason, body }
}

fn parse_embedding(raw: String) -> Result<Vec<f64>, EmbedderError> {
    let value: Value = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(_) => return Err(malformed("invalid JSON", raw)),
    };
    if !value.is_object() {
        return Err(malformed("a non-object JSON value", raw));
    }

    match serde_json::from_value::<EmbeddingResponse>(value) {
        Ok(EmbeddingResponse {
            embedding: Some(embedding),
        }) => Ok(embedding),
        Ok(_) => Err(malformed("no embedding", raw)),
        Err(_) => Err(malformed("an embedding that is not a list of numbers", raw)),
    }
}
