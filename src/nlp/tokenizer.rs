//! Word splitting for the hashing embedder
//!
//! Splits on any character that is not alphanumeric, so Unicode letters and
//! digits are kept together and punctuation is dropped.

/// Iterate over the lowercase words of `text`.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}
