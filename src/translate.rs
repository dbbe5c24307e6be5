//! Client for the MyMemory translation service.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::trace;

/// Public MyMemory endpoint.
pub const MYMEMORY_URL: &str = "https://api.mymemory.translated.net";

/// Fixed French-to-English language pair sent with every request.
const LANGPAIR: &str = "fr-FR|en-US";

/// Errors originating from the translation service.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid response")]
    InvalidResponse,
}

/// Translates a single French word into English.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, word: &str) -> Result<String, TranslationError>;
}

/// [`Translator`] implementation backed by the MyMemory HTTP API.
pub struct MyMemoryTranslator {
    base_url: String,
    client: reqwest::Client,
}

impl MyMemoryTranslator {
    /// Create a translator against `base_url`; tests point this at a mock
    /// server.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl Default for MyMemoryTranslator {
    fn default() -> Self {
        Self::new(MYMEMORY_URL)
    }
}

#[derive(Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: ResponseData,
}

#[derive(Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(&self, word: &str) -> Result<String, TranslationError> {
        trace!(word, "requesting translation");
        let resp = self
            .client
            .get(format!("{}/get", self.base_url))
            .query(&[("q", word), ("langpair", LANGPAIR)])
            .send()
            .await?
            .json::<MyMemoryResponse>()
            .await?;
        resp.response_data
            .translated_text
            .ok_or(TranslationError::InvalidResponse)
    }
}
