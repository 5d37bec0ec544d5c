//! Comparison configuration.

/// Tunable rules for equivalence comparison.
///
/// The defaults encode the cross-language posture: declaration names
/// compare case-sensitively, member names fold across casing
/// conventions, class-versus-struct is not significant, and an unknown
/// type is compatible with anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompareConfig {
    /// Compare declaration names with exact case.
    pub case_sensitive_names: bool,
    /// Fold member names across casing conventions before matching, so
    /// `start_engine` and `startEngine` name the same member.
    pub fold_member_naming: bool,
    /// Treat a class-struct mismatch as a divergence.
    pub kind_significant: bool,
    /// Treat an unknown type as compatible with any type.
    pub unknown_matches_any: bool,
}

impl CompareConfig {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            case_sensitive_names: true,
            fold_member_naming: true,
            kind_significant: false,
            unknown_matches_any: true,
        }
    }

    /// Sets whether declaration names compare case-sensitively.
    #[must_use]
    pub const fn with_case_sensitive_names(mut self, value: bool) -> Self {
        self.case_sensitive_names = value;
        self
    }

    /// Sets whether member names fold across casing conventions.
    #[must_use]
    pub const fn with_fold_member_naming(mut self, value: bool) -> Self {
        self.fold_member_naming = value;
        self
    }

    /// Sets whether class-versus-struct blocks equivalence.
    #[must_use]
    pub const fn with_kind_significant(mut self, value: bool) -> Self {
        self.kind_significant = value;
        self
    }

    /// Sets whether an unknown type matches any type.
    #[must_use]
    pub const fn with_unknown_matches_any(mut self, value: bool) -> Self {
        self.unknown_matches_any = value;
        self
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self::new()
    }
}
