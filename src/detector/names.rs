//! Two-letter language code to display name lookup.
//!
//! The table itself belongs to the isolang crate; this module only fixes the
//! miss behavior: an unknown code becomes a placeholder, never an error.

/// Placeholder shown when a code has no entry in the name table.
pub const UNKNOWN_LANGUAGE: &str = "Unknown Language";

/// Resolve an ISO 639-1 code (e.g. `en`, `fr`) to its display name.
pub fn language_name(code: &str) -> &'static str {
    isolang::Language::from_639_1(code)
        .map(|lang| lang.to_name())
        .unwrap_or(UNKNOWN_LANGUAGE)
}
