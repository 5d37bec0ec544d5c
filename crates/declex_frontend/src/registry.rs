//! The frontend registry.
//!
//! Maps languages to the frontend that parses them. Lookup happens
//! before any source text is touched, so an unsupported language fails
//! fast with no partial work.

use std::collections::HashMap;

use declex_foundation::{Error, Language, Result};

use crate::raw::RawDeclaration;
use crate::{go, javascript, python, swift};

/// Identifies one of the built-in frontends.
///
/// TypeScript maps to the JavaScript frontend, which accepts the
/// annotation syntax as a superset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrontendKind {
    /// Brace-delimited `class` syntax, with optional type annotations.
    JavaScript,
    /// Swift `class` and `struct` declarations.
    Swift,
    /// Indentation-delimited `class` syntax.
    Python,
    /// Go `type ... struct` with detached methods and constructors.
    Go,
}

impl FrontendKind {
    fn parse(self, source: &str) -> Result<Vec<RawDeclaration>> {
        match self {
            Self::JavaScript => javascript::parse(source),
            Self::Swift => swift::parse(source),
            Self::Python => python::parse(source),
            Self::Go => go::parse(source),
        }
    }
}

/// Maps languages to frontends.
#[derive(Clone, Debug)]
pub struct Registry {
    entries: HashMap<Language, FrontendKind>,
}

impl Registry {
    /// Creates a registry with no frontends registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates a registry with every built-in frontend registered.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(Language::JavaScript, FrontendKind::JavaScript);
        registry.register(Language::TypeScript, FrontendKind::JavaScript);
        registry.register(Language::Swift, FrontendKind::Swift);
        registry.register(Language::Python, FrontendKind::Python);
        registry.register(Language::Go, FrontendKind::Go);
        registry
    }

    /// Registers a frontend for a language, replacing any previous entry.
    pub fn register(&mut self, language: Language, frontend: FrontendKind) {
        self.entries.insert(language, frontend);
    }

    /// Returns true if a frontend is registered for `language`.
    #[must_use]
    pub fn supports(&self, language: Language) -> bool {
        self.entries.contains_key(&language)
    }

    /// Parses `source` with the frontend registered for `language`.
    ///
    /// # Errors
    /// Returns an unsupported-language error if no frontend is
    /// registered, or a syntax error from the frontend.
    pub fn parse(&self, language: Language, source: &str) -> Result<Vec<RawDeclaration>> {
        let Some(frontend) = self.entries.get(&language) else {
            return Err(Error::unsupported_language(language.name()));
        };
        frontend.parse(source)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
