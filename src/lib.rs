//! # ollama-embedder
//!
//! Blocking client that turns text and documents into embedding vectors by
//! calling the `embeddings` endpoint of an Ollama server.
//!
//! ## Architecture
//!
//! - **[`config`]** : Server URL, model name and timeout, loaded from JSON
//! - **[`document`]** : Content record that receives the embedding
//! - **[`embedder`]** : `EmbeddingGenerator` trait, Ollama and mock implementations,
//!   HTTP transport

pub mod config;
pub mod document;
pub mod embedder;

pub use config::OllamaConfig;
pub use document::Document;
pub use embedder::ollama::{EMBEDDING_LENGTH, OllamaEmbedder};
pub use embedder::{EmbedderError, EmbeddingGenerator};
