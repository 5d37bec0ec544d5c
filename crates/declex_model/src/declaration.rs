//! Canonical declaration types.
//!
//! The shared, language-neutral representation of a type's fields,
//! constructors, and methods. Declaration order is preserved everywhere:
//! it matters for positional constructor mapping and for faithful
//! regeneration, though equivalence comparison treats fields and methods
//! as sets.

use serde::{Deserialize, Serialize};

use declex_foundation::{Language, TypeTag};

/// The canonical model for one source file: an ordered sequence of type
/// declarations plus the language they were parsed from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeclarationModel {
    /// The language of the source this model was extracted from.
    pub language: Language,
    /// Declarations in source order.
    pub declarations: Vec<TypeDeclaration>,
}

impl DeclarationModel {
    /// Creates an empty model for the given language.
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self {
            language,
            declarations: Vec::new(),
        }
    }

    /// Adds a declaration.
    #[must_use]
    pub fn with_declaration(mut self, declaration: TypeDeclaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Looks up a declaration by exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&TypeDeclaration> {
        self.declarations.iter().find(|d| d.name == name)
    }

    /// Returns the number of declarations in this model.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns true if this model has no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// Whether a declaration is a class or a struct.
///
/// Structs are value-semantics aggregates; classes may carry behavior and
/// reference semantics. The distinction is recorded but does not affect
/// normalization, and by default does not block equivalence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    /// A class declaration.
    Class,
    /// A struct declaration.
    Struct,
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Class => f.write_str("class"),
            Self::Struct => f.write_str("struct"),
        }
    }
}

/// One class or struct found in a source file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    /// Identifier, non-empty, unique within a file.
    pub name: String,
    /// Class or struct.
    pub kind: TypeKind,
    /// Declared supertypes and protocols, recorded but never resolved.
    pub supertypes: Vec<String>,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
    /// Constructors in declaration order.
    pub constructors: Vec<Constructor>,
    /// Methods in declaration order.
    pub methods: Vec<Method>,
}

impl TypeDeclaration {
    /// Creates an empty declaration with the given name and kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            supertypes: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Adds a supertype name.
    #[must_use]
    pub fn with_supertype(mut self, name: impl Into<String>) -> Self {
        self.supertypes.push(name.into());
        self
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a constructor.
    #[must_use]
    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Adds a method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Looks up a field by exact name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Looks up a method by exact name.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Returns true if any constructor was written in the source, as
    /// opposed to the implicit memberwise constructor synthesized during
    /// normalization.
    #[must_use]
    pub fn has_explicit_constructor(&self) -> bool {
        self.constructors.iter().any(|c| !c.implicit)
    }

    /// Returns true if the named field is assigned by at least one
    /// constructor.
    #[must_use]
    pub fn field_is_assigned(&self, name: &str) -> bool {
        self.constructors.iter().any(|c| c.assigns(name))
    }

    /// Returns true if the named field has a resolved value source: a
    /// default value or a constructor assignment.
    ///
    /// This is the property equivalence comparison checks; which
    /// mechanism supplied the value is a language idiom.
    #[must_use]
    pub fn field_has_value_source(&self, name: &str) -> bool {
        self.field(name).is_some_and(|f| f.has_default) || self.field_is_assigned(name)
    }
}

/// A field of a type declaration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field identifier.
    pub name: String,
    /// Language-neutral type tag.
    pub declared_type: TypeTag,
    /// True if the field carries an inline default value.
    pub has_default: bool,
    /// Raw literal text of the default, present iff `has_default`.
    pub default_literal: Option<String>,
}

impl Field {
    /// Creates a field without a default value.
    #[must_use]
    pub fn new(name: impl Into<String>, declared_type: TypeTag) -> Self {
        Self {
            name: name.into(),
            declared_type,
            has_default: false,
            default_literal: None,
        }
    }

    /// Sets the default value literal.
    #[must_use]
    pub fn with_default(mut self, literal: impl Into<String>) -> Self {
        self.has_default = true;
        self.default_literal = Some(literal.into());
        self
    }
}

/// A named, typed parameter of a constructor or method.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter identifier.
    pub name: String,
    /// Language-neutral type tag.
    pub declared_type: TypeTag,
}

impl Parameter {
    /// Creates a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, declared_type: TypeTag) -> Self {
        Self {
            name: name.into(),
            declared_type,
        }
    }
}

/// A constructor-parameter-to-field initialization edge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The constructor parameter supplying the value.
    pub parameter: String,
    /// The field it initializes.
    pub field: String,
}

impl Assignment {
    /// Creates an assignment.
    #[must_use]
    pub fn new(parameter: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            field: field.into(),
        }
    }
}

/// A constructor or initializer of a type declaration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constructor {
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
    /// Parameter-to-field initialization edges.
    pub assignments: Vec<Assignment>,
    /// The raw body text, retained but never interpreted.
    pub body: String,
    /// True for the memberwise constructor synthesized when a declaration
    /// has no explicit one.
    pub implicit: bool,
}

impl Constructor {
    /// Creates an empty explicit constructor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parameters: Vec::new(),
            assignments: Vec::new(),
            body: String::new(),
            implicit: false,
        }
    }

    /// Creates the implicit memberwise constructor for the given fields.
    #[must_use]
    pub fn memberwise(fields: &[Field]) -> Self {
        Self {
            parameters: fields
                .iter()
                .map(|f| Parameter::new(f.name.clone(), f.declared_type))
                .collect(),
            assignments: fields
                .iter()
                .map(|f| Assignment::new(f.name.clone(), f.name.clone()))
                .collect(),
            body: String::new(),
            implicit: true,
        }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Adds an assignment edge.
    #[must_use]
    pub fn with_assignment(mut self, assignment: Assignment) -> Self {
        self.assignments.push(assignment);
        self
    }

    /// Sets the opaque body payload.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns true if this constructor assigns the named field.
    #[must_use]
    pub fn assigns(&self, field: &str) -> bool {
        self.assignments.iter().any(|a| a.field == field)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

impl Default for Constructor {
    fn default() -> Self {
        Self::new()
    }
}

/// A method of a type declaration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Method {
    /// Method identifier.
    pub name: String,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
    /// Declared return type, [`TypeTag::Unit`] if none.
    pub return_type: TypeTag,
    /// The raw body text, retained but never interpreted.
    pub body: String,
}

impl Method {
    /// Creates a method with no parameters and a unit return type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: TypeTag::Unit,
            body: String::new(),
        }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Sets the return type.
    #[must_use]
    pub fn with_return_type(mut self, return_type: TypeTag) -> Self {
        self.return_type = return_type;
        self
    }

    /// Sets the opaque body payload.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}
