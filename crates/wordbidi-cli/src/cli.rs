//! CLI argument definitions using Clap v4

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use wordbidi::types::UnmatchedWordPolicy;

/// wordbidi - logical-to-visual reordering of bidirectional text
#[derive(Parser, Debug)]
#[command(name = "wordbidi")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display information about the engine and accepted directions
    #[command(alias = "i")]
    Info(InfoArgs),

    /// Reorder text into visual order, one paragraph per line
    Vis(VisArgs),

    /// Map words to their visual position
    #[command(alias = "w")]
    Words(WordsArgs),

    /// Print the visual-to-logical char map of text in a left-to-right paragraph
    Map(MapArgs),

    /// Process multiple jobs from a JSONL file
    Batch(BatchArgs),
}

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the vis command
#[derive(Parser, Debug)]
pub struct VisArgs {
    /// Text to reorder (reads from stdin if omitted)
    pub text: Option<String>,

    /// Paragraph direction: LTR, RTL, ON, WLTR, WRTL (default from WORDBIDI_DIRECTION)
    #[arg(short = 'd', long = "direction")]
    pub direction: Option<String>,

    /// Keep explicit bidi marks in the output
    #[arg(long = "no-clean", action = ArgAction::SetTrue)]
    pub no_clean: bool,

    /// Leave non-spacing marks in pure visual order
    #[arg(long = "no-reorder-nsm", action = ArgAction::SetTrue)]
    pub no_reorder_nsm: bool,

    /// Do not mirror brackets in right-to-left runs
    #[arg(long = "no-mirror", action = ArgAction::SetTrue)]
    pub no_mirror: bool,

    /// Print JSON with position maps and embedding levels
    #[arg(long)]
    pub positions: bool,
}

/// Arguments for the words command
#[derive(Parser, Debug)]
pub struct WordsArgs {
    /// Words in logical order (reads whitespace-separated words from stdin if omitted)
    pub words: Vec<String>,

    /// Paragraph direction: LTR, RTL, ON, WLTR, WRTL (default from WORDBIDI_DIRECTION)
    #[arg(short = 'd', long = "direction")]
    pub direction: Option<String>,

    /// Keep explicit bidi marks in the visual words
    #[arg(long = "no-clean", action = ArgAction::SetTrue)]
    pub no_clean: bool,

    /// What to do with words that vanish from the visual text: drop, error
    #[arg(long = "on-unmatched")]
    pub on_unmatched: Option<UnmatchedWordPolicy>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the map command
#[derive(Parser, Debug)]
pub struct MapArgs {
    /// Text to map (reads from stdin if omitted, one map per line)
    pub text: Option<String>,
}

/// Arguments for the batch command
#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// Input JSONL file (one job per line, stdin if omitted)
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Silent mode (no summary on stderr)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}
