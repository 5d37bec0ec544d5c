//! Lowering from raw declaration nodes to the canonical model.
//!
//! This is where language idioms converge: explicitly declared fields,
//! fields synthesized from constructor receiver assignments, and the
//! implicit memberwise constructor all land in the same shape. The
//! model invariants are enforced here; a declaration that violates one
//! never escapes as a partial model.

use std::collections::HashSet;

use declex_foundation::{Error, Language, ModelViolation, Result, TypeTag};
use declex_frontend::{RawConstructor, RawDeclaration, RawField, RawKind, RawMethod};
use declex_model::{
    Assignment, Constructor, DeclarationModel, Field, Method, Parameter, TypeDeclaration, TypeKind,
};

use crate::typemap::{is_identifier, tag_for_annotation, tag_for_literal};

/// Lowers the raw declarations of one file into a canonical model.
///
/// # Errors
/// Returns a model error for duplicate declaration names, empty names,
/// unassigned fields, unmatched parameters, or ambiguous assignments.
pub fn normalize_file(
    language: Language,
    declarations: &[RawDeclaration],
) -> Result<DeclarationModel> {
    let mut seen = HashSet::new();
    let mut model = DeclarationModel::new(language);
    for raw in declarations {
        if !seen.insert(raw.name.as_str()) {
            return Err(Error::model(ModelViolation::DuplicateDeclaration {
                name: raw.name.clone(),
            }));
        }
        model.declarations.push(normalize_declaration(language, raw)?);
    }
    Ok(model)
}

/// Lowers one raw declaration.
///
/// # Errors
/// Returns a model error when an invariant is violated.
pub fn normalize_declaration(
    language: Language,
    raw: &RawDeclaration,
) -> Result<TypeDeclaration> {
    if raw.name.is_empty() {
        return Err(Error::model(ModelViolation::EmptyDeclarationName));
    }
    let kind = match raw.kind {
        RawKind::Class => TypeKind::Class,
        RawKind::Struct => TypeKind::Struct,
    };

    let mut fields: Vec<Field> = raw
        .fields
        .iter()
        .map(|field| normalize_field(language, field))
        .collect();

    let mut constructors = Vec::with_capacity(raw.constructors.len());
    for raw_constructor in &raw.constructors {
        constructors.push(normalize_constructor(
            language,
            &raw.name,
            raw_constructor,
            &mut fields,
        )?);
    }
    // A declaration with no written constructor still constructs: it
    // gets the implicit memberwise constructor over its fields.
    if constructors.is_empty() {
        constructors.push(Constructor::memberwise(&fields));
    }

    let declaration = TypeDeclaration {
        name: raw.name.clone(),
        kind,
        supertypes: raw.supertypes.clone(),
        fields,
        constructors,
        methods: raw
            .methods
            .iter()
            .map(|method| normalize_method(language, method))
            .collect(),
    };

    // Every field must have a value source once normalization is done.
    for field in &declaration.fields {
        if !declaration.field_has_value_source(&field.name) {
            return Err(Error::model(ModelViolation::UnassignedField {
                declaration: declaration.name.clone(),
                field: field.name.clone(),
            }));
        }
    }
    Ok(declaration)
}

fn normalize_field(language: Language, raw: &RawField) -> Field {
    // An annotation wins over literal inference.
    let declared_type = match &raw.annotation {
        Some(annotation) => tag_for_annotation(language, annotation),
        None => raw
            .initializer
            .as_deref()
            .map_or(TypeTag::Unknown, tag_for_literal),
    };
    let mut field = Field::new(raw.name.clone(), declared_type);
    if let Some(initializer) = &raw.initializer {
        field = field.with_default(initializer.clone());
    }
    field
}

fn normalize_method(language: Language, raw: &RawMethod) -> Method {
    Method {
        name: raw.name.clone(),
        parameters: raw
            .parameters
            .iter()
            .map(|parameter| {
                Parameter::new(
                    parameter.name.clone(),
                    parameter
                        .annotation
                        .as_deref()
                        .map_or(TypeTag::Unknown, |a| tag_for_annotation(language, a)),
                )
            })
            .collect(),
        return_type: raw
            .return_annotation
            .as_deref()
            .map_or(TypeTag::Unit, |a| tag_for_annotation(language, a)),
        body: raw.body.clone(),
    }
}

/// Lowers one constructor, synthesizing fields the language never
/// declared explicitly.
///
/// A receiver assignment whose value is exactly a parameter name
/// becomes an initialization edge; one whose value is a literal becomes
/// a field default; anything else is an opaque computation and adds
/// nothing to the model.
fn normalize_constructor(
    language: Language,
    declaration: &str,
    raw: &RawConstructor,
    fields: &mut Vec<Field>,
) -> Result<Constructor> {
    let parameters: Vec<Parameter> = raw
        .parameters
        .iter()
        .map(|parameter| {
            Parameter::new(
                parameter.name.clone(),
                parameter
                    .annotation
                    .as_deref()
                    .map_or(TypeTag::Unknown, |a| tag_for_annotation(language, a)),
            )
        })
        .collect();

    let mut assignments = Vec::new();
    for raw_assignment in &raw.assignments {
        let value = raw_assignment.value.as_str();
        if is_identifier(value) {
            if let Some(parameter) = parameters.iter().find(|p| p.name == value) {
                ensure_field(fields, &raw_assignment.field, parameter.declared_type);
                assignments.push(Assignment::new(value, raw_assignment.field.clone()));
                continue;
            }
        }
        let literal_tag = tag_for_literal(value);
        if literal_tag != TypeTag::Unknown {
            let field = ensure_field(fields, &raw_assignment.field, literal_tag);
            if !field.has_default {
                field.has_default = true;
                field.default_literal = Some(value.to_string());
            }
        }
        // Computed values neither bind a parameter nor fix a default.
    }

    // Each parameter must flow into exactly one field.
    for parameter in &parameters {
        let mut targets: Vec<&str> = assignments
            .iter()
            .filter(|a| a.parameter == parameter.name)
            .map(|a| a.field.as_str())
            .collect();
        targets.sort_unstable();
        targets.dedup();
        match targets.len() {
            0 => {
                return Err(Error::model(ModelViolation::UnmatchedParameter {
                    declaration: declaration.to_string(),
                    parameter: parameter.name.clone(),
                }));
            }
            1 => {}
            _ => {
                return Err(Error::model(ModelViolation::AmbiguousAssignment {
                    declaration: declaration.to_string(),
                    parameter: parameter.name.clone(),
                    fields: targets.iter().map(ToString::to_string).collect(),
                }));
            }
        }
    }

    Ok(Constructor {
        parameters,
        assignments,
        body: raw.body.clone(),
        implicit: false,
    })
}

/// Finds the named field, synthesizing it when a constructor assigns a
/// field the language never declared. A known tag fills in a field that
/// was only known as [`TypeTag::Unknown`].
fn ensure_field<'a>(fields: &'a mut Vec<Field>, name: &str, tag: TypeTag) -> &'a mut Field {
    let index = match fields.iter().position(|f| f.name == name) {
        Some(index) => index,
        None => {
            fields.push(Field::new(name.to_string(), tag));
            fields.len() - 1
        }
    };
    if fields[index].declared_type.is_unknown() && !tag.is_unknown() {
        fields[index].declared_type = tag;
    }
    &mut fields[index]
}
