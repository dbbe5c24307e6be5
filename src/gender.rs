//! Grammatical gender inference through an external reasoning engine.
//!
//! The engine receives a single chat message holding a fixed instruction
//! plus a literal rendering of the noun list, and its textual reply is
//! relayed verbatim. The reply is *expected* to look like a list of
//! single-character gender codes aligned with the input, but nothing here
//! parses or validates it; a consumer wanting structured pairs must add its
//! own parsing layer.

use async_trait::async_trait;
use indoc::indoc;
use ollama_rs::generation::chat::request::ChatMessageRequest;
use ollama_rs::generation::chat::ChatMessage;
use ollama_rs::models::ModelOptions;
use ollama_rs::Ollama;
use thiserror::Error;
use tracing::debug;

/// Errors originating from the reasoning engine.
#[derive(Debug, Error)]
pub enum ReasoningError {
    #[error("reasoning engine error: {0}")]
    Engine(#[from] ollama_rs::error::OllamaError),
}

/// Sampling options forwarded with a gender-inference request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReasonerOptions {
    pub temperature: f32,
}

impl Default for ReasonerOptions {
    fn default() -> Self {
        Self { temperature: 0.8 }
    }
}

/// Sends one user message to a model and returns the raw reply text.
#[async_trait]
pub trait Reasoner: Send + Sync {
    async fn chat(
        &self,
        model: &str,
        prompt: &str,
        options: &ReasonerOptions,
    ) -> Result<String, ReasoningError>;
}

const GENDER_INSTRUCTION: &str = indoc! {"
    In this task you are given a list of French nouns. Determine the
    grammatical gender of each noun and return the results in another list.
    The gender is abbreviated to 'm' for masculine nouns and 'f' for feminine
    nouns. If a word does not appear to be a noun or has no definite gender,
    mark it as 'u' for unknown; this applies to numbers like '2022', verbs
    like 'changer', adjectives like 'rouge' or prepositions like 'sur'.
    Assign a gender to each word of the input list.

    For example, if passed the list ['chat', 'timbre', '20', 'robe'], please
    return the list ['m', 'm', 'u', 'f'].

    Please only return the list of genders. Here is the list of nouns to
    determine their genders:
"};

/// Build the fixed gender-inference instruction for `nouns`.
///
/// The list is embedded in the bracketed, single-quoted form the
/// instruction's own example uses.
pub fn gender_prompt<S: AsRef<str>>(nouns: &[S]) -> String {
    let list = nouns
        .iter()
        .map(|n| format!("'{}'", n.as_ref()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{GENDER_INSTRUCTION} [{list}]")
}

/// [`Reasoner`] implementation over an Ollama server.
pub struct OllamaReasoner {
    client: Ollama,
}

impl OllamaReasoner {
    /// Wrap an existing client, letting the caller pick host and port.
    pub fn new(client: Ollama) -> Self {
        Self { client }
    }
}

impl Default for OllamaReasoner {
    fn default() -> Self {
        Self::new(Ollama::default())
    }
}

#[async_trait]
impl Reasoner for OllamaReasoner {
    async fn chat(
        &self,
        model: &str,
        prompt: &str,
        options: &ReasonerOptions,
    ) -> Result<String, ReasoningError> {
        debug!(model, temperature = options.temperature, "sending chat request");
        let req = ChatMessageRequest::new(model.to_string(), vec![ChatMessage::user(
            prompt.to_string(),
        )])
        .options(ModelOptions::default().temperature(options.temperature));
        let res = self.client.send_chat_messages(req).await?;
        Ok(res.message.content)
    }
}
