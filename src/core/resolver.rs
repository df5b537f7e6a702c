// src/core/resolver.rs
use crate::core::types::{SignCard, SignSymbol};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the application icon entry in the catalog.
pub const APP_ICON_KEY: &str = "GesturioIcon";

/// The read-only asset set the resolver consults: lowercase catalog
/// key to resource identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetCatalog {
    assets: HashMap<String, String>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled catalog: one sign image per ASCII letter and digit,
    /// plus the app icon.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for c in ('a'..='z').chain('0'..='9') {
            catalog.insert(c.to_string(), format!("signs/{c}.png"));
        }
        catalog.insert(APP_ICON_KEY.to_string(), "GesturioIcon.png".to_string());
        catalog
    }

    pub fn insert(&mut self, key: String, resource: String) {
        self.assets.insert(key, resource);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.assets.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Resolves single characters to sign symbols against an
/// [`AssetCatalog`].
#[derive(Debug, Clone)]
pub struct SymbolResolver {
    catalog: AssetCatalog,
}

impl SymbolResolver {
    pub fn new(catalog: AssetCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    /// Resolves one character: the bare lowercase key first, then the
    /// `.jpeg` naming convention, else a placeholder.
    pub fn resolve(&self, letter: char) -> SignSymbol {
        let key: String = letter.to_lowercase().collect();

        for candidate in [key.clone(), format!("{key}.jpeg")] {
            if let Some(resource) = self.catalog.get(&candidate) {
                return SignSymbol::Image {
                    asset: resource.to_string(),
                };
            }
        }

        SignSymbol::Placeholder { letter }
    }

    pub fn card(&self, letter: char) -> SignCard {
        SignCard {
            letter,
            symbol: self.resolve(letter),
        }
    }

    /// The named application icon, if the catalog bundles one.
    pub fn app_icon(&self) -> Option<&str> {
        self.catalog.get(APP_ICON_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> SymbolResolver {
        SymbolResolver::new(AssetCatalog::builtin())
    }

    #[test]
    fn resolution_is_case_insensitive() {
        let r = resolver();
        assert_eq!(r.resolve('A'), r.resolve('a'));
        assert_eq!(
            r.resolve('a'),
            SignSymbol::Image {
                asset: "signs/a.png".to_string()
            }
        );
    }

    #[test]
    fn digits_resolve() {
        assert_eq!(
            resolver().resolve('5'),
            SignSymbol::Image {
                asset: "signs/5.png".to_string()
            }
        );
    }

    #[test]
    fn miss_degrades_to_placeholder_with_original_char() {
        assert_eq!(
            resolver().resolve('#'),
            SignSymbol::Placeholder { letter: '#' }
        );
    }

    #[test]
    fn jpeg_fallback_is_tried_after_bare_key() {
        let mut catalog = AssetCatalog::new();
        catalog.insert("q.jpeg".to_string(), "signs/q.jpeg".to_string());
        let r = SymbolResolver::new(catalog);
        assert_eq!(
            r.resolve('Q'),
            SignSymbol::Image {
                asset: "signs/q.jpeg".to_string()
            }
        );
    }

    #[test]
    fn bare_key_wins_over_jpeg_fallback() {
        let mut catalog = AssetCatalog::new();
        catalog.insert("q".to_string(), "signs/q.png".to_string());
        catalog.insert("q.jpeg".to_string(), "signs/q.jpeg".to_string());
        let r = SymbolResolver::new(catalog);
        assert_eq!(
            r.resolve('q'),
            SignSymbol::Image {
                asset: "signs/q.png".to_string()
            }
        );
    }

    #[test]
    fn placeholder_label_is_uppercased() {
        let card = resolver().card('ß');
        assert!(card.symbol.is_placeholder());
        assert_eq!(card.label(), "SS");
    }

    #[test]
    fn builtin_catalog_has_app_icon() {
        assert_eq!(resolver().app_icon(), Some("GesturioIcon.png"));
    }
}
