//! Identifiers for the supported source languages.
//!
//! A [`Language`] names the surface syntax of a source file. It is the key
//! into the frontend registry; requesting a language with no registered
//! frontend fails with [`ErrorKind::UnsupportedLanguage`](crate::ErrorKind)
//! before any parse work happens.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A supported source language.
///
/// JavaScript and TypeScript share one brace-delimited frontend family;
/// they remain distinct identifiers so callers can record which dialect a
/// model was extracted from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Language {
    /// JavaScript (`.js`, `.mjs`, `.cjs`).
    JavaScript,
    /// TypeScript (`.ts`), parsed by the JavaScript frontend family.
    TypeScript,
    /// Swift (`.swift`).
    Swift,
    /// Python (`.py`).
    Python,
    /// Go (`.go`).
    Go,
}

impl Language {
    /// Returns the canonical lowercase name of this language.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Swift => "swift",
            Self::Python => "python",
            Self::Go => "go",
        }
    }

    /// Resolves a file extension (without the dot) to a language.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "ts" => Some(Self::TypeScript),
            "swift" => Some(Self::Swift),
            "py" => Some(Self::Python),
            "go" => Some(Self::Go),
            _ => None,
        }
    }

    /// Returns all languages with a shipped frontend.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::JavaScript,
            Self::TypeScript,
            Self::Swift,
            Self::Python,
            Self::Go,
        ]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "javascript" | "js" => Ok(Self::JavaScript),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "swift" => Ok(Self::Swift),
            "python" | "py" => Ok(Self::Python),
            "go" | "golang" => Ok(Self::Go),
            other => Err(Error::unsupported_language(other)),
        }
    }
}
