//! Data carried between the tagging model and the orchestrator.

use serde::{Deserialize, Serialize};

/// One record produced by the part-of-speech tagging model.
///
/// Extra fields in the wire payload (confidence score, character offsets)
/// are ignored on deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaggedWord {
    /// Surface form, possibly still carrying a subword marker.
    pub word: String,
    /// Grammatical tag, e.g. `NOM`, `VER:pres` or `ADJ`.
    pub entity: String,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            entity: entity.into(),
        }
    }
}

/// Cleaned word lists extracted from a text, one per category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordGroups {
    pub nouns: Vec<String>,
    pub verbs: Vec<String>,
    pub adjectives: Vec<String>,
}
