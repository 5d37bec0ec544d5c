//! Integration tests for type tags.

use declex_foundation::TypeTag;

#[test]
fn equal_tags_are_compatible() {
    assert!(TypeTag::String.compatible(TypeTag::String));
    assert!(TypeTag::Integer.compatible(TypeTag::Integer));
    assert!(!TypeTag::String.compatible(TypeTag::Integer));
    assert!(!TypeTag::Float.compatible(TypeTag::Boolean));
}

#[test]
fn unknown_is_compatible_with_everything() {
    for tag in [
        TypeTag::String,
        TypeTag::Integer,
        TypeTag::Float,
        TypeTag::Boolean,
        TypeTag::Unit,
        TypeTag::Unknown,
    ] {
        assert!(TypeTag::Unknown.compatible(tag));
        assert!(tag.compatible(TypeTag::Unknown));
    }
}

#[test]
fn unknown_detection() {
    assert!(TypeTag::Unknown.is_unknown());
    assert!(!TypeTag::Unit.is_unknown());
}

#[test]
fn display_is_lowercase() {
    assert_eq!(format!("{}", TypeTag::String), "string");
    assert_eq!(format!("{}", TypeTag::Integer), "integer");
    assert_eq!(format!("{}", TypeTag::Unknown), "unknown");
}
