// WHY: Pure glue between user input and the classifiers; all classification
// semantics live in detector::* so this module stays presentation-only

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::detector::{CodeLanguageDetector, HumanLanguageDetector, WhatlangOracle};

/// Notice shown when a trigger fires on empty or whitespace-only input.
/// This is the shell's own guard; the classifiers are never invoked for it.
pub const MSG_EMPTY_INPUT: &str = "Input field is empty! Please provide text or code.";

/// Which classifiers a trigger runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triggers {
    pub human: bool,
    pub code: bool,
}

impl Triggers {
    pub const HUMAN: Self = Self { human: true, code: false };
    pub const CODE: Self = Self { human: false, code: true };
    pub const BOTH: Self = Self { human: true, code: true };
}

/// One classification pass over a sample, serialized as-is for `--json`.
#[derive(Debug, Serialize)]
pub struct DetectionReport {
    /// Trimmed sample length in chars, for quick sanity checks in logs.
    pub sample_chars: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Stateless detection façade the shell routes every trigger through.
pub struct Shell {
    human: HumanLanguageDetector<&'static WhatlangOracle>,
    code: CodeLanguageDetector,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            human: HumanLanguageDetector::new(),
            code: CodeLanguageDetector::new(),
        }
    }

    /// Run the selected classifiers over one sample.
    ///
    /// Returns `Err` only for the shell's own empty-input rejection; every
    /// classifier outcome, including classifier-level errors, arrives as a
    /// message inside the report.
    pub fn classify(&self, sample: &str, triggers: Triggers) -> Result<DetectionReport> {
        if sample.trim().is_empty() {
            anyhow::bail!(MSG_EMPTY_INPUT);
        }

        debug!(chars = sample.trim().chars().count(), ?triggers, "classifying sample");

        Ok(DetectionReport {
            sample_chars: sample.trim().chars().count(),
            human: triggers.human.then(|| self.human.detect(sample)),
            code: triggers
                .code
                .then(|| format!("Detected Language: {}", self.code.detect(sample))),
        })
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the sample text for a single-shot run: positional argument first,
/// then `--file`, then stdin as a last resort.
pub fn load_sample(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        info!("reading sample from {}", path.display());
        return std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read sample file: {}", path.display()));
    }
    info!("reading sample from stdin");
    let mut sample = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut sample)
        .context("Cannot read sample from stdin")?;
    Ok(sample)
}

/// Single-shot mode: classify one sample and print the result.
pub fn run_once(sample: &str, triggers: Triggers, json: bool) -> Result<()> {
    let shell = Shell::new();
    let report = shell.classify(sample, triggers)?;
    print_report(&report, json)
}

fn print_report(report: &DetectionReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    if let Some(ref human) = report.human {
        println!("{human}");
    }
    if let Some(ref code) = report.code {
        println!("{code}");
    }
    Ok(())
}

/// Interactive mode: each entered line is classified under the current
/// trigger selection; `:human`, `:code` and `:both` switch triggers,
/// `:quit` exits. The loop also ends on EOF.
pub fn run_interactive(initial: Triggers, json: bool) -> Result<()> {
    let shell = Shell::new();
    let mut triggers = initial;

    println!("parlance v{} - interactive session", env!("CARGO_PKG_VERSION"));
    println!("Enter text or code to classify. Commands: :human :code :both :quit");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            info!("stdin closed, ending interactive session");
            break;
        }

        match line.trim() {
            ":quit" | ":q" => break,
            ":human" => {
                triggers = Triggers::HUMAN;
                println!("Trigger set: human language only");
            }
            ":code" => {
                triggers = Triggers::CODE;
                println!("Trigger set: programming language only");
            }
            ":both" => {
                triggers = Triggers::BOTH;
                println!("Trigger set: both classifiers");
            }
            _ => match shell.classify(line.trim(), triggers) {
                Ok(report) => print_report(&report, json)?,
                // Empty-input rejection stays a notice inside the loop
                Err(notice) => println!("Error: {notice}"),
            },
        }
    }

    Ok(())
}
