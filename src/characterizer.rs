//! Orchestrates the external collaborators into the characterization
//! operations.

use thiserror::Error;
use tracing::{debug, trace};

use crate::clean::clean_wordlist;
use crate::gender::{gender_prompt, Reasoner, ReasonerOptions, ReasoningError};
use crate::lefff::{LemmaError, Lemmatizer, PosHint};
use crate::tagger::{PosTagger, TaggerError};
use crate::translate::{TranslationError, Translator};
use crate::types::{TaggedWord, WordGroups};

/// Errors surfaced by [`Characterizer`] operations.
///
/// Collaborator failures pass through unchanged; nothing is retried or
/// translated locally.
#[derive(Debug, Error)]
pub enum CharacterizeError {
    #[error(transparent)]
    Tagger(#[from] TaggerError),
    #[error(transparent)]
    Lemma(#[from] LemmaError),
    #[error(transparent)]
    Translation(#[from] TranslationError),
    #[error(transparent)]
    Reasoning(#[from] ReasoningError),
}

/// Convenience result type used throughout this crate.
pub type Result<T> = std::result::Result<T, CharacterizeError>;

/// Characterizes French text into word lists of different types.
///
/// Every hard operation is delegated: tagging to a served model,
/// lemmatization to the Lefff lexicon, translation to MyMemory and gender
/// inference to a reasoning engine. The collaborators are injected at
/// construction so tests can substitute doubles.
pub struct Characterizer {
    tagger: Box<dyn PosTagger>,
    lemmatizer: Box<dyn Lemmatizer>,
    translator: Box<dyn Translator>,
    reasoner: Box<dyn Reasoner>,
}

fn words_where(tags: &[TaggedWord], pred: impl Fn(&str) -> bool) -> Vec<String> {
    tags.iter()
        .filter(|t| pred(&t.entity))
        .map(|t| t.word.clone())
        .collect()
}

impl Characterizer {
    pub fn new(
        tagger: Box<dyn PosTagger>,
        lemmatizer: Box<dyn Lemmatizer>,
        translator: Box<dyn Translator>,
        reasoner: Box<dyn Reasoner>,
    ) -> Self {
        Self {
            tagger,
            lemmatizer,
            translator,
            reasoner,
        }
    }

    /// Tag `text` once and partition the tokens into cleaned noun, verb and
    /// adjective lists.
    ///
    /// Nouns match the tag `NOM` exactly; verbs and adjectives match the
    /// `VER` and `ADJ` tag prefixes. Tokens with any other tag land in no
    /// list. Repeated calls re-invoke the tagging model; nothing is cached.
    pub async fn extract_word_groups(&self, text: &str) -> Result<WordGroups> {
        let tags = self.tagger.tag(text).await?;
        debug!(tokens = tags.len(), "tagged input text");
        Ok(WordGroups {
            nouns: clean_wordlist(&words_where(&tags, |e| e == "NOM")),
            verbs: clean_wordlist(&words_where(&tags, |e| e.starts_with("VER"))),
            adjectives: clean_wordlist(&words_where(&tags, |e| e.starts_with("ADJ"))),
        })
    }

    /// Clean `verbs`, then look up the infinitive of each surviving form.
    ///
    /// Lookups happen one at a time in input order; the first failure aborts
    /// the rest of the batch.
    pub async fn infinitives(&self, verbs: &[String]) -> Result<Vec<String>> {
        let cleaned = clean_wordlist(verbs);
        let mut out = Vec::with_capacity(cleaned.len());
        for verb in &cleaned {
            trace!(word = %verb, "lemmatizing");
            out.push(self.lemmatizer.lemmatize(verb, PosHint::Verb).await?);
        }
        Ok(out)
    }

    /// Translate each word into English, one blocking request per word, in
    /// input order. Empty input sends no requests.
    pub async fn translate(&self, words: &[String]) -> Result<Vec<String>> {
        let mut out = Vec::with_capacity(words.len());
        for word in words {
            out.push(self.translator.translate(word).await?);
        }
        Ok(out)
    }

    /// Ask the reasoning engine for the grammatical gender of `nouns` and
    /// return its reply verbatim.
    ///
    /// One request is sent regardless of list size. The reply is free-form
    /// text; no parsing or alignment check happens here.
    pub async fn infer_genders(
        &self,
        nouns: &[String],
        model: &str,
        options: &ReasonerOptions,
    ) -> Result<String> {
        debug!(model, nouns = nouns.len(), "requesting gender inference");
        let prompt = gender_prompt(nouns);
        Ok(self.reasoner.chat(model, &prompt, options).await?)
    }
}
