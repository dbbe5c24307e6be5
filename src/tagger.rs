//! Client for the external part-of-speech tagging model.
//!
//! The tagger is a served token-classification model reached over HTTP. It
//! receives the raw text and answers with one record per token; this crate
//! performs no tagging of its own.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::types::TaggedWord;

/// Errors originating from the tagging model.
#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid response")]
    InvalidResponse,
}

/// Assigns a grammatical tag to every token of a text.
#[async_trait]
pub trait PosTagger: Send + Sync {
    async fn tag(&self, text: &str) -> Result<Vec<TaggedWord>, TaggerError>;
}

/// [`PosTagger`] implementation that posts to a token-classification
/// inference endpoint.
pub struct HttpPosTagger {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpPosTagger {
    /// Create a tagger that talks to `endpoint`, the full URL of the served
    /// model.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PosTagger for HttpPosTagger {
    async fn tag(&self, text: &str) -> Result<Vec<TaggedWord>, TaggerError> {
        debug!(chars = text.len(), "requesting pos tags");
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "inputs": text }))
            .send()
            .await?;
        let mut body: serde_json::Value = resp.json().await?;
        // Hosted inference wraps the records in one outer array per input.
        let inner = body
            .as_array()
            .and_then(|a| a.first())
            .filter(|v| v.is_array())
            .cloned();
        if let Some(inner) = inner {
            body = inner;
        }
        serde_json::from_value(body).map_err(|_| TaggerError::InvalidResponse)
    }
}
