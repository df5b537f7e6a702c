// src/core/engine.rs
use crate::core::normalizer;
use crate::core::resolver::{AssetCatalog, SymbolResolver};
use crate::core::types::{SignCard, SignSheet, TranslationResult};
use crate::manifest::load_manifest;
use std::path::Path;

/// The translator facade the front-ends talk to. Owns the symbol
/// resolver; every operation is a pure function of the input text.
pub struct TranslatorEngine {
    resolver: SymbolResolver,
}

impl TranslatorEngine {
    /// Engine over the bundled asset catalog.
    pub fn new() -> Self {
        Self {
            resolver: SymbolResolver::new(AssetCatalog::builtin()),
        }
    }

    /// Loads the asset manifest at `path`, falling back to the bundled
    /// catalog when the file is missing or malformed. Asset problems
    /// are never fatal; at worst every card renders as a placeholder.
    pub fn from_manifest_or_default(path: &str) -> Self {
        match load_manifest(Path::new(path)) {
            Ok(manifest) => Self {
                resolver: SymbolResolver::new(manifest.into_catalog()),
            },
            Err(e) => {
                log::debug!("manifest {path:?} unavailable ({e}), using builtin catalog");
                Self::new()
            }
        }
    }

    pub fn resolver(&self) -> &SymbolResolver {
        &self.resolver
    }

    /// Word structure of the input; see [`normalizer::normalize`].
    pub fn translate(&self, text: &str) -> TranslationResult {
        normalizer::normalize(text)
    }

    /// The most recently typed alphanumeric character.
    pub fn active_letter(&self, text: &str) -> Option<char> {
        normalizer::active_letter(text)
    }

    /// The hero-preview card for the most recently typed character.
    pub fn active_sign(&self, text: &str) -> Option<SignCard> {
        self.active_letter(text).map(|c| self.resolver.card(c))
    }

    /// Full card grid for the input: every letter of every word
    /// resolved to an image or placeholder.
    pub fn render(&self, text: &str) -> SignSheet {
        let words = self
            .translate(text)
            .words
            .into_iter()
            .map(|word| {
                word.letters
                    .into_iter()
                    .map(|c| self.resolver.card(c))
                    .collect()
            })
            .collect();
        SignSheet { words }
    }

    /// Application icon resource, when the catalog bundles one.
    pub fn app_icon(&self) -> Option<&str> {
        self.resolver.app_icon()
    }
}

impl Default for TranslatorEngine {
    fn default() -> Self {
        Self::new()
    }
}
