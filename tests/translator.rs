use rstest::rstest;
use sign_core::core::resolver::{AssetCatalog, SymbolResolver};
use sign_core::{SignSymbol, TranslatorEngine};
use std::io::Write;

fn letters(word: &sign_core::Word) -> String {
    word.letters.iter().collect()
}

#[rstest]
#[case("Hi there", vec!["Hi", "there"])]
#[case("Hi  there", vec!["Hi", "there"])]
#[case("Hi ", vec!["Hi", ""])]
fn translate_matches_expected_word_groups(#[case] input: &str, #[case] expected: Vec<&str>) {
    let engine = TranslatorEngine::new();
    let result = engine.translate(input);
    let got: Vec<String> = result.words.iter().map(letters).collect();
    assert_eq!(got, expected);
}

#[test]
fn empty_input_renders_nothing() {
    let engine = TranslatorEngine::new();
    assert!(engine.translate("").is_empty());
    assert!(engine.render("").words.is_empty());
    assert!(engine.active_sign("").is_none());
}

#[test]
fn every_keystroke_recompute_is_deterministic() {
    let engine = TranslatorEngine::new();
    let mut buffer = String::new();
    for c in "Sign language! ".chars() {
        buffer.push(c);
        assert_eq!(engine.render(&buffer), engine.render(&buffer));
        assert_eq!(engine.active_sign(&buffer), engine.active_sign(&buffer));
    }
}

#[test]
fn placeholder_cards_carry_the_typed_character() {
    let engine = TranslatorEngine::new();
    let sheet = engine.render("é");
    assert_eq!(sheet.words.len(), 1);
    let card = &sheet.words[0][0];
    assert_eq!(card.symbol, SignSymbol::Placeholder { letter: 'é' });
    assert_eq!(card.label(), "É");
}

#[test]
fn engine_uses_catalog_from_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("manifest.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"{{"app_icon":"hands.png","assets":{{"a":"bundle/a.png","b.jpeg":"bundle/b.jpeg"}}}}"#
    )
    .unwrap();

    let engine = TranslatorEngine::from_manifest_or_default(path.to_str().unwrap());
    assert_eq!(engine.app_icon(), Some("hands.png"));

    let sheet = engine.render("aBc");
    let word = &sheet.words[0];
    assert_eq!(
        word[0].symbol,
        SignSymbol::Image {
            asset: "bundle/a.png".to_string()
        }
    );
    // 'B' resolves through the .jpeg naming fallback.
    assert_eq!(
        word[1].symbol,
        SignSymbol::Image {
            asset: "bundle/b.jpeg".to_string()
        }
    );
    // 'c' is not in this bundle at all.
    assert_eq!(word[2].symbol, SignSymbol::Placeholder { letter: 'c' });
}

#[test]
fn sheet_json_round_trips() {
    let engine = TranslatorEngine::new();
    let sheet = engine.render("Go 2!");
    let json = serde_json::to_string(&sheet).unwrap();
    let back: sign_core::SignSheet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sheet);
}

#[test]
fn resolver_with_empty_catalog_is_total() {
    let resolver = SymbolResolver::new(AssetCatalog::new());
    for c in ['a', 'Z', '9', '#', ' ', '🙂'] {
        let card = resolver.card(c);
        assert_eq!(card.letter, c);
        assert!(card.symbol.is_placeholder());
    }
}
