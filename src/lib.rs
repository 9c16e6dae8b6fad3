pub mod detector;
pub mod shell;

// Re-export main types for convenient access
pub use detector::{
    Candidate, CodeLanguageDetector, CodeRule, HumanLanguageDetector, LanguageOracle,
    OracleError, WhatlangOracle, CODE_RULES, MIN_SAMPLE_CHARS,
};
pub use shell::{DetectionReport, Shell, Triggers};
