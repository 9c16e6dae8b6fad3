use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

use parlance::shell::{self, Triggers};

#[derive(Parser, Debug)]
#[command(name = "parlance")]
#[command(about = "Identify the human language of text and the programming language of code")]
#[command(version)]
struct Args {
    /// Text or code sample to classify; reads --file or stdin when omitted
    text: Option<String>,

    /// Which classifiers to run
    #[arg(long, value_enum, default_value_t = Mode::Both)]
    mode: Mode,

    /// Read the sample from a file instead of the command line
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Emit the detection report as JSON instead of plain messages
    #[arg(long)]
    json: bool,

    /// Start an interactive session instead of a single-shot run
    #[arg(long, short = 'i', conflicts_with_all = ["text", "file"])]
    interactive: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Human language only
    Human,
    /// Programming language only
    Code,
    /// Both classifiers
    Both,
}

impl From<Mode> for Triggers {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Human => Triggers::HUMAN,
            Mode::Code => Triggers::CODE,
            Mode::Both => Triggers::BOTH,
        }
    }
}

fn main() -> Result<()> {
    // WHY: structured JSON logs on stderr keep stdout clean for results
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting parlance");
    info!(?args, "Parsed CLI arguments");

    if args.interactive {
        return shell::run_interactive(args.mode.into(), args.json);
    }

    let sample = shell::load_sample(args.text, args.file.as_deref())?;
    shell::run_once(&sample, args.mode.into(), args.json)
}
