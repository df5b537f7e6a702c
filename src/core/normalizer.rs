// src/core/normalizer.rs
use crate::core::types::{TranslationResult, Word};

/// Splits raw input into displayable words.
///
/// Tokens are produced by splitting on the single space character,
/// keeping empty tokens, then filtering each token down to its
/// alphanumeric characters. A token that filters to nothing is kept
/// only when it is the last token of the split, so the UI has a slot
/// for the word being typed after a trailing space.
pub fn normalize(text: &str) -> TranslationResult {
    if text.is_empty() {
        return TranslationResult::default();
    }

    let tokens: Vec<&str> = text.split(' ').collect();
    let last = tokens.len() - 1;

    let mut words = Vec::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate() {
        let letters: Vec<char> = token.chars().filter(|c| c.is_alphanumeric()).collect();
        if !letters.is_empty() || index == last {
            words.push(Word::new(letters));
        }
    }

    TranslationResult { words }
}

/// The most recently typed letter or digit, scanning from the end of
/// the input. Drives the "current sign" preview.
pub fn active_letter(text: &str) -> Option<char> {
    text.chars().rev().find(|c| c.is_alphanumeric())
}
