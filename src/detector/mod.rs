// WHY: Single entry module for both classifiers so the shell only sees
// message-producing detectors, never oracle or rule-table internals

pub mod code;
pub mod human;
pub mod names;
pub mod oracle;

// Re-export core types
pub use code::{CodeLanguageDetector, CodeRule, CODE_RULES};
pub use human::HumanLanguageDetector;
pub use names::language_name;
pub use oracle::{Candidate, LanguageOracle, OracleError, WhatlangOracle};

/// Minimum trimmed sample length (in chars) either classifier will accept.
/// Below this floor the oracle and the rule table are never consulted.
pub const MIN_SAMPLE_CHARS: usize = 5;

/// Shared short-input guard for both classifiers.
///
/// Trims the sample and counts chars, not bytes, so multi-byte scripts are
/// not rejected early just for being non-ASCII.
pub(crate) fn sample_too_short(sample: &str) -> bool {
    sample.trim().chars().count() < MIN_SAMPLE_CHARS
}
