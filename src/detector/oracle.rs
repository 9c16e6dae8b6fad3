// WHY: The statistical model is an external oracle; keeping it behind a trait
// lets tests script exact candidate lists instead of depending on model output

use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;
use whatlang::Detector;

/// One ranked guess from the oracle: a two-letter ISO 639-1 code (or the
/// 639-3 code when no two-letter form exists) and a probability in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub code: String,
    pub probability: f64,
}

/// Failures the oracle can signal for a sample.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The oracle found no viable candidate for this sample.
    #[error("no viable language candidate for this sample")]
    Undetectable,
    /// Any other oracle fault; the description is surfaced to the user.
    #[error("language oracle failure: {0}")]
    Failure(String),
}

/// Ranks candidate human languages for a text sample.
///
/// Implementations may return candidates in any order; callers sort by
/// descending probability before picking a winner.
pub trait LanguageOracle {
    fn rank(&self, sample: &str) -> Result<Vec<Candidate>, OracleError>;
}

// WHY: lets detectors hold either an owned scripted oracle (tests) or the
// shared process-wide instance without separate code paths
impl<O: LanguageOracle + ?Sized> LanguageOracle for &O {
    fn rank(&self, sample: &str) -> Result<Vec<Candidate>, OracleError> {
        (**self).rank(sample)
    }
}

/// Trigram-model oracle backed by whatlang.
///
/// The model is deterministic by construction: identical input always yields
/// the identical ranking, so the reproducibility requirement is met without
/// seeding. The process-wide instance is still pinned once via [`shared`] so
/// initialization stays an explicit step rather than an import side effect.
pub struct WhatlangOracle {
    detector: Detector,
}

impl WhatlangOracle {
    pub fn new() -> Self {
        debug!("initializing whatlang detector");
        Self {
            detector: Detector::new(),
        }
    }
}

impl Default for WhatlangOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageOracle for WhatlangOracle {
    fn rank(&self, sample: &str) -> Result<Vec<Candidate>, OracleError> {
        let info = self.detector.detect(sample).ok_or(OracleError::Undetectable)?;
        let code = iso_639_1_code(info.lang());
        debug!(code = %code, confidence = info.confidence(), "oracle top candidate");
        Ok(vec![Candidate {
            code,
            probability: info.confidence(),
        }])
    }
}

static SHARED_ORACLE: OnceLock<WhatlangOracle> = OnceLock::new();

/// One-time, process-wide oracle initialization.
///
/// First call builds the detector; every later call returns the same pinned
/// instance so all detections in a process share identical model state.
pub fn shared() -> &'static WhatlangOracle {
    SHARED_ORACLE.get_or_init(WhatlangOracle::new)
}

/// Map a whatlang language to its two-letter ISO 639-1 code.
/// Falls back to the three-letter 639-3 code for languages without one;
/// the name lookup then reports those as unknown rather than failing.
fn iso_639_1_code(lang: whatlang::Lang) -> String {
    isolang::Language::from_639_3(lang.code())
        .and_then(|l| l.to_639_1())
        .unwrap_or_else(|| lang.code())
        .to_string()
}
