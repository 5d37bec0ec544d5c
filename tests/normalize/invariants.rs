//! Model invariant enforcement tests.

use declex_foundation::{ErrorKind, Language, ModelViolation};
use declex_normalize::extract;

// =============================================================================
// Invariant Violations
// =============================================================================

#[test]
fn field_without_value_source_is_rejected() {
    // `mileage` is declared but the explicit constructor never assigns
    // it and it has no default.
    let source = "class Car {\n    var brand: String\n    var mileage: Int\n    init(brand: String) {\n        self.brand = brand\n    }\n}";
    let err = extract(Language::Swift, source).unwrap_err();
    assert!(err.is_model());
    assert!(matches!(
        err.kind,
        ErrorKind::Model(ModelViolation::UnassignedField { .. })
    ));
    assert!(format!("{err}").contains("mileage"));
}

#[test]
fn unmatched_constructor_parameter_is_rejected() {
    let source = "class Car:\n    def __init__(self, brand, unused):\n        self.brand = brand\n";
    let err = extract(Language::Python, source).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Model(ModelViolation::UnmatchedParameter { .. })
    ));
    assert!(format!("{err}").contains("unused"));
}

#[test]
fn parameter_fanning_into_two_fields_is_rejected() {
    let source = "class Car {\n    constructor(value) {\n        this.a = value;\n        this.b = value;\n    }\n}";
    let err = extract(Language::JavaScript, source).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Model(ModelViolation::AmbiguousAssignment { .. })
    ));
}

#[test]
fn duplicate_declaration_names_are_rejected() {
    let source = "class Car:\n    x = 1\n\nclass Car:\n    y = 2\n";
    let err = extract(Language::Python, source).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Model(ModelViolation::DuplicateDeclaration { .. })
    ));
}

// =============================================================================
// Failure Atomicity
// =============================================================================

#[test]
fn a_violation_anywhere_fails_the_whole_file() {
    // The first class is fine; the second violates coverage. No partial
    // model may escape.
    let source = "class Good {\n    constructor(x) { this.x = x; }\n}\n\nclass Bad {\n    constructor(unused) { }\n}";
    let result = extract(Language::JavaScript, source);
    assert!(result.is_err());
}

#[test]
fn unsupported_language_fails_fast() {
    use declex_frontend::Registry;
    let registry = Registry::empty();
    let err = registry
        .parse(Language::JavaScript, "class A { }")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedLanguage(_)));
}

// =============================================================================
// Purity
// =============================================================================

#[test]
fn extraction_is_idempotent() {
    let source = "class Car {\n    constructor(brand, year) {\n        this.brand = brand;\n        this.year = year;\n    }\n\n    startEngine() { }\n}";
    let first = extract(Language::JavaScript, source).unwrap();
    let second = extract(Language::JavaScript, source).unwrap();
    assert_eq!(first, second);
}

#[test]
fn a_failed_extraction_leaves_later_calls_unaffected() {
    let bad = "class {\n}";
    let good = "class A {\n    constructor(x) { this.x = x; }\n}";
    let baseline = extract(Language::JavaScript, good).unwrap();
    assert!(extract(Language::JavaScript, bad).is_err());
    let after = extract(Language::JavaScript, good).unwrap();
    assert_eq!(baseline, after);
}

#[test]
fn empty_source_yields_an_empty_model() {
    let model = extract(Language::Go, "package main\n").unwrap();
    assert!(model.is_empty());
    assert_eq!(model.language, Language::Go);
}

#[test]
fn non_declaration_code_is_ignored() {
    let source = "const helper = () => 1;\nfunction free() { return 2; }\n";
    let model = extract(Language::JavaScript, source).unwrap();
    assert!(model.is_empty());
}
