// src/core/types.rs
use serde::{Deserialize, Serialize};

/// One space-delimited token of the input, reduced to its alphanumeric
/// characters. May be empty only as the final word of a result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub letters: Vec<char>,
}

impl Word {
    pub fn new(letters: Vec<char>) -> Self {
        Self { letters }
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub words: Vec<Word>,
}

impl TranslationResult {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Outcome of resolving one character against the asset catalog.
/// A miss is a placeholder carrying the original character, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SignSymbol {
    Image { asset: String },
    Placeholder { letter: char },
}

impl SignSymbol {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignCard {
    pub letter: char,
    pub symbol: SignSymbol,
}

impl SignCard {
    /// Caption printed under the card, always uppercased.
    pub fn label(&self) -> String {
        self.letter.to_uppercase().collect()
    }
}

/// A fully resolved translation, ready to render word-by-word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignSheet {
    pub words: Vec<Vec<SignCard>>,
}
