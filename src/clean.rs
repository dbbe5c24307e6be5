//! Local token cleanup applied to every word list before it leaves the crate.

/// Marker prepended by subword tokenizers to word-initial fragments.
pub const SUBWORD_MARKER: char = '▁';

/// Strip a leading subword marker and drop short tokens.
///
/// Any token carrying a leading [`SUBWORD_MARKER`] loses it; tokens whose
/// resulting form is two characters or fewer are discarded. Relative order
/// is preserved and the output is never longer than the input.
///
/// # Examples
/// ```
/// use characterize::clean_wordlist;
///
/// let cleaned = clean_wordlist(&["▁chat", "le", "pomme"]);
/// assert_eq!(cleaned, vec!["chat".to_string(), "pomme".to_string()]);
/// ```
pub fn clean_wordlist<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words
        .iter()
        .filter_map(|w| {
            let w = w.as_ref();
            let stripped = w.strip_prefix(SUBWORD_MARKER).unwrap_or(w);
            (stripped.chars().count() > 2).then(|| stripped.to_string())
        })
        .collect()
}
