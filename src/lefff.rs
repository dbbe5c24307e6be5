//! Lemmatization against the Lefff morphological lexicon.
//!
//! The lexicon is an external artifact: a tab-separated table mapping an
//! inflected form and a part-of-speech code to its lemma. Lookup behavior,
//! including what happens on a miss, is the dictionary's own; this crate
//! adds nothing on top.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

/// Errors originating from the lemmatization dictionary.
#[derive(Debug, Error)]
pub enum LemmaError {
    #[error("failed to read lemma table: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed lemma table entry: {0}")]
    Malformed(String),
}

/// Part-of-speech hint passed with a lookup, using Lefff category codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PosHint {
    Noun,
    Verb,
    Adjective,
}

impl PosHint {
    fn code(self) -> &'static str {
        match self {
            PosHint::Noun => "nc",
            PosHint::Verb => "v",
            PosHint::Adjective => "adj",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "nc" => Some(PosHint::Noun),
            "v" => Some(PosHint::Verb),
            "adj" => Some(PosHint::Adjective),
            _ => None,
        }
    }
}

/// Maps an inflected form to its dictionary base form.
#[async_trait]
pub trait Lemmatizer: Send + Sync {
    async fn lemmatize(&self, word: &str, pos: PosHint) -> Result<String, LemmaError>;
}

/// [`Lemmatizer`] backed by a Lefff morphology table.
///
/// A form absent from the table comes back unchanged, mirroring the Lefff
/// lemmatizer's native fallback.
#[derive(Debug)]
pub struct LefffLemmatizer {
    entries: HashMap<(String, PosHint), String>,
}

impl LefffLemmatizer {
    /// Load the lexicon from a file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LemmaError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Parse the lexicon from any buffered reader.
    ///
    /// Each row is `form<TAB>category<TAB>lemma[<TAB>...]`. Blank lines and
    /// `#` comments are skipped; rows for categories other than the Lefff
    /// codes of [`PosHint`] are ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LemmaError> {
        let mut entries = HashMap::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let row = line.trim_end();
            if row.is_empty() || row.starts_with('#') {
                continue;
            }
            let mut fields = row.split('\t');
            let (form, cat, lemma) = match (fields.next(), fields.next(), fields.next()) {
                (Some(f), Some(c), Some(l)) if !f.is_empty() && !l.is_empty() => (f, c, l),
                _ => {
                    return Err(LemmaError::Malformed(format!("line {}: {row}", idx + 1)));
                }
            };
            if let Some(pos) = PosHint::from_code(cat) {
                entries.insert((form.to_string(), pos), lemma.to_string());
            }
        }
        debug!(entries = entries.len(), "loaded lemma table");
        Ok(Self { entries })
    }

    /// Number of loaded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl Lemmatizer for LefffLemmatizer {
    async fn lemmatize(&self, word: &str, pos: PosHint) -> Result<String, LemmaError> {
        let lemma = self
            .entries
            .get(&(word.to_string(), pos))
            .cloned()
            .unwrap_or_else(|| word.to_string());
        Ok(lemma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "# Lefff excerpt\n\
        mange\tv\tmanger\tP3s\n\
        chats\tnc\tchat\tmp\n\
        rouges\tadj\trouge\tp\n\
        sur\tprep\tsur\t\n";

    fn lexicon() -> LefffLemmatizer {
        LefffLemmatizer::from_reader(TABLE.as_bytes()).unwrap()
    }

    #[tokio::test]
    async fn looks_up_verb_infinitives() {
        let lemma = lexicon().lemmatize("mange", PosHint::Verb).await.unwrap();
        assert_eq!(lemma, "manger");
    }

    #[tokio::test]
    async fn lookup_is_keyed_on_the_pos_hint() {
        // "chats" is only listed as a noun.
        let lemma = lexicon().lemmatize("chats", PosHint::Verb).await.unwrap();
        assert_eq!(lemma, "chats");
    }

    #[tokio::test]
    async fn miss_returns_the_form_unchanged() {
        let lemma = lexicon().lemmatize("zythum", PosHint::Verb).await.unwrap();
        assert_eq!(lemma, "zythum");
    }

    #[test]
    fn skips_comments_and_uncovered_categories() {
        // The prep row and the comment line contribute no entries.
        assert_eq!(lexicon().len(), 3);
    }

    #[test]
    fn rejects_rows_with_missing_fields() {
        let err = LefffLemmatizer::from_reader("mange\tv".as_bytes()).unwrap_err();
        assert!(matches!(err, LemmaError::Malformed(_)));
    }
}
