//! Characterize French-language text into typed word lists.
//!
//! The [`Characterizer`] sequences four external collaborators: a served
//! part-of-speech model, the Lefff lemmatization lexicon, the MyMemory
//! translation service and an Ollama reasoning engine for grammatical
//! gender. The crate's own work is limited to cleaning token lists and
//! wiring the calls together; each collaborator sits behind a trait so it
//! can be replaced with a test double.

pub mod characterizer;
pub mod clean;
pub mod gender;
pub mod lefff;
pub mod tagger;
pub mod translate;
pub mod types;

pub use crate::characterizer::{CharacterizeError, Characterizer};
pub use crate::clean::{clean_wordlist, SUBWORD_MARKER};
pub use crate::gender::{gender_prompt, OllamaReasoner, Reasoner, ReasonerOptions, ReasoningError};
pub use crate::lefff::{LefffLemmatizer, LemmaError, Lemmatizer, PosHint};
pub use crate::tagger::{HttpPosTagger, PosTagger, TaggerError};
pub use crate::translate::{MyMemoryTranslator, TranslationError, Translator, MYMEMORY_URL};
pub use crate::types::{TaggedWord, WordGroups};
