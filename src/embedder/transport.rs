/// HTTP transport used by the remote embedders.
///
/// The embedder only knows how to build a request body and read a response
/// body; sending it is delegated to a [`Transport`].
use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::debug;

use super::EmbedderError;

/// Sends a JSON body to a path under the service base URL.
pub trait Transport: Send + Sync {
    /// POST `body` to `path` and return the raw response body.
    ///
    /// Connection failures and non-2xx statuses are
    /// [`EmbedderError::Transport`].
    fn post_json(&self, path: &str, body: &Value) -> Result<String, EmbedderError>;
}

/// `reqwest` blocking transport bound to one base URL.
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a transport for `base_url`.
    ///
    /// Paths are resolved against the base the way a browser resolves a
    /// relative link, so `http://host/api/` + `embeddings` gives
    /// `http://host/api/embeddings` while `http://host/api` + `embeddings`
    /// gives `http://host/embeddings`.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, EmbedderError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| EmbedderError::InvalidConfig(format!("bad base url {base_url:?}: {e}")))?;

        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| EmbedderError::InvalidConfig(format!("HTTP client build failed: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// The URL a request for `path` would be sent to.
    pub fn endpoint(&self, path: &str) -> Result<Url, EmbedderError> {
        self.base_url
            .join(path)
            .map_err(|e| EmbedderError::InvalidConfig(format!("cannot join {path:?}: {e}")))
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, path: &str, body: &Value) -> Result<String, EmbedderError> {
        let url = self.endpoint(path)?;
        debug!("POST {url}");

        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| EmbedderError::Transport(Box::new(e)))?;

        resp.text()
            .map_err(|e| EmbedderError::Transport(Box::new(e)))
    }
}
