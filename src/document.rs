/// Content record passed through the embedders.
use serde::{Deserialize, Serialize};

fn default_source() -> String {
    "manual".to_string()
}

/// A piece of text plus, once embedded, its vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,

    /// Preferred over `content` when embedding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f64>>,

    #[serde(default = "default_source")]
    pub source_type: String,

    #[serde(default = "default_source")]
    pub source_name: String,

    #[serde(default)]
    pub chunk_number: usize,
}

impl Document {
    /// Create a document holding `content`, with no embedding yet.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            formatted_content: None,
            embedding: None,
            source_type: default_source(),
            source_name: default_source(),
            chunk_number: 0,
        }
    }

    #[must_use]
    pub fn with_formatted_content(mut self, formatted: impl Into<String>) -> Self {
        self.formatted_content = Some(formatted.into());
        self
    }

    /// Record where the content came from.
    #[must_use]
    pub fn with_source(mut self, source_type: impl Into<String>, source_name: impl Into<String>) -> Self {
        self.source_type = source_type.into();
        self.source_name = source_name.into();
        self
    }

    /// The text an embedder should use for this document.
    #[must_use]
    pub fn text_to_embed(&self) -> &str {
        self.formatted_content.as_deref().unwrap_or(&self.content)
    }
}
