use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sttl", about = "Deterministic sorted Turtle and TriG formatter", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the input as sorted Turtle or TriG
    Format {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Inline input text
        #[arg(short = 'e', long = "expr", conflicts_with = "file")]
        expr: Option<String>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Input format: turtle or trig (detected when omitted)
        #[arg(long)]
        format: Option<String>,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Exit with status 3 unless the input is already sorted
    Check {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Inline input text
        #[arg(short = 'e', long = "expr", conflicts_with = "file")]
        expr: Option<String>,

        /// Input format: turtle or trig (detected when omitted)
        #[arg(long)]
        format: Option<String>,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

/// Layout flags; each one overrides the config file.
#[derive(Args, Clone, Debug, Default)]
pub struct LayoutArgs {
    /// Indentation of continuation lines
    #[arg(long)]
    pub indent: Option<usize>,

    /// Column width reserved for predicates
    #[arg(long)]
    pub predicate_width: Option<usize>,

    /// Only declare prefixes the output uses
    #[arg(long)]
    pub only_used_prefixes: bool,

    /// Write each object of a predicate on its own line
    #[arg(long)]
    pub objects_multi_line: bool,

    /// Put the closing '.' of multi-line blocks on its own line
    #[arg(long)]
    pub dot_on_new_line: bool,
}
