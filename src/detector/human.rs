use std::cmp::Ordering;
use tracing::debug;

use super::names::language_name;
use super::oracle::{self, LanguageOracle, OracleError, WhatlangOracle};
use super::sample_too_short;

/// Guard message for samples below the short-input floor.
pub const MSG_TOO_SHORT: &str = "Error: Input is too short to detect a human language.";

/// Message for samples the oracle cannot place, whether it returned an empty
/// ranking or signaled detection as impossible outright.
pub const MSG_AMBIGUOUS: &str =
    "Error: Unable to detect human language. The text might be too ambiguous or insufficient.";

/// Classifies the natural human language of a text sample.
///
/// Every path returns a message string; oracle faults are converted at this
/// boundary and never propagate to the caller.
pub struct HumanLanguageDetector<O: LanguageOracle> {
    oracle: O,
}

impl HumanLanguageDetector<&'static WhatlangOracle> {
    /// Detector backed by the process-wide shared oracle instance.
    pub fn new() -> Self {
        Self {
            oracle: oracle::shared(),
        }
    }
}

impl Default for HumanLanguageDetector<&'static WhatlangOracle> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: LanguageOracle> HumanLanguageDetector<O> {
    /// Detector backed by a caller-supplied oracle (tests script rankings
    /// through this).
    pub fn with_oracle(oracle: O) -> Self {
        Self { oracle }
    }

    /// Detect the human language of `sample` and describe the result.
    ///
    /// Success looks like `Detected Language: French with 92.31% chances.`;
    /// all failure modes come back as `Error: ...` strings.
    pub fn detect(&self, sample: &str) -> String {
        if sample_too_short(sample) {
            debug!("sample below short-input floor, oracle not invoked");
            return MSG_TOO_SHORT.to_string();
        }

        let mut candidates = match self.oracle.rank(sample) {
            Ok(candidates) => candidates,
            Err(OracleError::Undetectable) => return MSG_AMBIGUOUS.to_string(),
            Err(err) => {
                return format!(
                    "Error: Unexpected issue in human language detection. Details: {err}"
                )
            }
        };

        if candidates.is_empty() {
            return MSG_AMBIGUOUS.to_string();
        }

        // WHY: the oracle contract does not promise ordering, so the winner
        // is picked after an explicit descending-probability sort
        candidates.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(Ordering::Equal)
        });

        let top = &candidates[0];
        let name = language_name(&top.code);
        debug!(code = %top.code, name, probability = top.probability, "top candidate selected");

        format!(
            "Detected Language: {} with {:.2}% chances.",
            name,
            top.probability * 100.0
        )
    }
}
