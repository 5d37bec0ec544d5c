//! End-to-end tests: source text in, equivalence verdicts out.

mod cross_language;
mod serialization;
