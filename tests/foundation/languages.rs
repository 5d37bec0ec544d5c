//! Integration tests for language identifiers.

use declex_foundation::Language;

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn every_language_resolves_from_its_name() {
    for language in Language::all() {
        let parsed: Language = language.name().parse().unwrap();
        assert_eq!(parsed, language);
    }
}

#[test]
fn short_names_resolve() {
    assert_eq!("js".parse::<Language>().unwrap(), Language::JavaScript);
    assert_eq!("ts".parse::<Language>().unwrap(), Language::TypeScript);
    assert_eq!("py".parse::<Language>().unwrap(), Language::Python);
    assert_eq!("golang".parse::<Language>().unwrap(), Language::Go);
}

#[test]
fn unknown_names_fail_with_unsupported_language() {
    let err = "cobol".parse::<Language>().unwrap_err();
    assert!(format!("{err}").contains("unsupported language: cobol"));
}

#[test]
fn extensions_resolve() {
    assert_eq!(Language::from_extension("cjs"), Some(Language::JavaScript));
    assert_eq!(Language::from_extension("swift"), Some(Language::Swift));
    assert_eq!(Language::from_extension("java"), None);
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_matches_name() {
    for language in Language::all() {
        assert_eq!(format!("{language}"), language.name());
    }
}
