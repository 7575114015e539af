//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the import report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Per-document results and totals
    Summary,
    /// Every parsed question, one short entry each
    Questions,
    /// The full report as JSON
    Json,
}

/// CLI arguments for exam-extract
#[derive(Parser, Debug)]
#[command(name = "exam-extract")]
#[command(author, version, about = "Extract structured exam questions from document text")]
#[command(long_about = r#"
exam-extract turns the extracted text of exam question-bank documents into
structured question records and upserts them into a JSON collection keyed by
question id.

Every question in a document starts with a "Question ID <hex>" header. For
each one the tool recovers the passage, prompt, options A-D, correct answer,
rationale, difficulty, and the test / domain / skill labels.

Configuration files are loaded from (in priority order):
1. EXAM_EXTRACT_* environment variables
2. --config <path>          Explicit config file
3. ./exam-extract.toml      Project-level config
4. ~/.config/exam-extract/config.toml   Global config

Example:
  exam-extract --dir ./documents --sink ./questions.json
  exam-extract --dry-run -o questions bank-1.txt bank-2.txt
  exam-extract -o json --event-log import.jsonl
"#)]
pub struct Cli {
    /// Text files to import (overrides --dir)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Directory scanned for document text files
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// File extension to include (can be specified multiple times)
    #[arg(short, long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// JSON collection file to upsert questions into
    #[arg(short, long, value_name = "PATH")]
    pub sink: Option<PathBuf>,

    /// Parse documents without writing to the sink
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Maximum number of documents read at the same time
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Append per-document import events to a JSONL file
    #[arg(long, value_name = "PATH")]
    pub event_log: Option<PathBuf>,

    /// Also write diagnostic logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
