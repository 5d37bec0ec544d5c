//! Structural equivalence comparison for the Declex extractor.
//!
//! Two declarations are equivalent when they describe the same
//! structure: the same named fields with compatible types and value
//! sources, and the same named methods with compatible signatures.
//! Bodies never participate; a Python method and a Go method with wildly
//! different implementations compare equal when their shapes agree.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod diff;

pub use config::CompareConfig;
pub use diff::{Diff, EquivalenceResult, Side};

use declex_foundation::TypeTag;
use declex_model::{DeclarationModel, Method, TypeDeclaration};

/// Folds a member name for matching across casing conventions.
///
/// `start_engine`, `startEngine`, and `StartEngine` all fold to
/// `startengine`. With folding disabled the name passes through as-is.
#[must_use]
pub fn fold(name: &str, config: &CompareConfig) -> String {
    if config.fold_member_naming {
        name.chars()
            .filter(|&c| c != '_')
            .flat_map(char::to_lowercase)
            .collect()
    } else {
        name.to_string()
    }
}

/// Returns true if two type tags are compatible under the config.
#[must_use]
pub fn types_match(left: TypeTag, right: TypeTag, config: &CompareConfig) -> bool {
    if config.unknown_matches_any {
        left.compatible(right)
    } else {
        left == right
    }
}

fn names_equal(left: &str, right: &str, config: &CompareConfig) -> bool {
    if config.case_sensitive_names {
        left == right
    } else {
        left.eq_ignore_ascii_case(right)
    }
}

/// Compares two declarations structurally.
#[must_use]
pub fn compare(
    left: &TypeDeclaration,
    right: &TypeDeclaration,
    config: &CompareConfig,
) -> EquivalenceResult {
    let mut diffs = Vec::new();

    if !names_equal(&left.name, &right.name, config) {
        diffs.push(Diff::NameMismatch {
            left: left.name.clone(),
            right: right.name.clone(),
        });
    }
    if config.kind_significant && left.kind != right.kind {
        diffs.push(Diff::KindMismatch {
            left: left.kind,
            right: right.kind,
        });
    }

    compare_fields(left, right, config, &mut diffs);
    compare_methods(left, right, config, &mut diffs);

    diffs.into()
}

fn compare_fields(
    left: &TypeDeclaration,
    right: &TypeDeclaration,
    config: &CompareConfig,
    diffs: &mut Vec<Diff>,
) {
    for left_field in &left.fields {
        let folded = fold(&left_field.name, config);
        let Some(right_field) = right
            .fields
            .iter()
            .find(|f| fold(&f.name, config) == folded)
        else {
            diffs.push(Diff::MissingField {
                name: left_field.name.clone(),
                missing_from: Side::Right,
            });
            continue;
        };
        if !types_match(left_field.declared_type, right_field.declared_type, config) {
            diffs.push(Diff::FieldTypeMismatch {
                name: left_field.name.clone(),
                left: left_field.declared_type,
                right: right_field.declared_type,
            });
        }
        // What supplies the value (default or constructor) is a
        // language idiom; whether anything supplies it is structure.
        let left_source = left.field_has_value_source(&left_field.name);
        let right_source = right.field_has_value_source(&right_field.name);
        if left_source != right_source {
            diffs.push(Diff::ValueSourceMismatch {
                name: left_field.name.clone(),
            });
        }
    }
    for right_field in &right.fields {
        let folded = fold(&right_field.name, config);
        if !left
            .fields
            .iter()
            .any(|f| fold(&f.name, config) == folded)
        {
            diffs.push(Diff::MissingField {
                name: right_field.name.clone(),
                missing_from: Side::Left,
            });
        }
    }
}

fn compare_methods(
    left: &TypeDeclaration,
    right: &TypeDeclaration,
    config: &CompareConfig,
    diffs: &mut Vec<Diff>,
) {
    let matches = |a: &Method, b: &Method| {
        fold(&a.name, config) == fold(&b.name, config) && a.arity() == b.arity()
    };
    for left_method in &left.methods {
        let Some(right_method) = right.methods.iter().find(|m| matches(left_method, m)) else {
            diffs.push(Diff::MissingMethod {
                name: left_method.name.clone(),
                arity: left_method.arity(),
                missing_from: Side::Right,
            });
            continue;
        };
        if !types_match(left_method.return_type, right_method.return_type, config) {
            diffs.push(Diff::ReturnTypeMismatch {
                name: left_method.name.clone(),
                left: left_method.return_type,
                right: right_method.return_type,
            });
        }
        for (left_parameter, right_parameter) in left_method
            .parameters
            .iter()
            .zip(&right_method.parameters)
        {
            if !types_match(
                left_parameter.declared_type,
                right_parameter.declared_type,
                config,
            ) {
                diffs.push(Diff::ParameterTypeMismatch {
                    method: left_method.name.clone(),
                    parameter: left_parameter.name.clone(),
                    left: left_parameter.declared_type,
                    right: right_parameter.declared_type,
                });
            }
        }
    }
    for right_method in &right.methods {
        if !left.methods.iter().any(|m| matches(m, right_method)) {
            diffs.push(Diff::MissingMethod {
                name: right_method.name.clone(),
                arity: right_method.arity(),
                missing_from: Side::Left,
            });
        }
    }
}

/// Compares two whole-file models, pairing declarations by name.
#[must_use]
pub fn compare_models(
    left: &DeclarationModel,
    right: &DeclarationModel,
    config: &CompareConfig,
) -> EquivalenceResult {
    let mut diffs = Vec::new();
    for left_declaration in &left.declarations {
        let Some(right_declaration) = right
            .declarations
            .iter()
            .find(|d| names_equal(&d.name, &left_declaration.name, config))
        else {
            diffs.push(Diff::MissingDeclaration {
                name: left_declaration.name.clone(),
                missing_from: Side::Right,
            });
            continue;
        };
        diffs.extend(
            compare(left_declaration, right_declaration, config)
                .diffs()
                .iter()
                .cloned(),
        );
    }
    for right_declaration in &right.declarations {
        if !left
            .declarations
            .iter()
            .any(|d| names_equal(&d.name, &right_declaration.name, config))
        {
            diffs.push(Diff::MissingDeclaration {
                name: right_declaration.name.clone(),
                missing_from: Side::Left,
            });
        }
    }
    diffs.into()
}
