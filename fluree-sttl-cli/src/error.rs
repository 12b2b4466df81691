use colored::Colorize;
use std::fmt;
use std::process;

/// Exit codes for the CLI.
#[allow(dead_code)]
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;
pub const EXIT_UNSORTED: i32 = 3;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Unreadable input or unwritable output.
    Input(String),
    /// The input is not valid Turtle / TriG.
    Parse(fluree_graph_turtle::TurtleError),
    /// The formatter failed.
    Format(fluree_graph_format::FormatError),
    /// Unreadable or invalid config file.
    Config(String),
    /// Argument / usage errors.
    Usage(String),
    /// `check` found input that differs from its sorted form.
    Unsorted { source: String, line: usize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Input(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Parse(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Format(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Config(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Usage(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Unsorted { source, line } => write!(
                f,
                "{} {source} is not sorted (first difference at line {line})\n  {} run 'sttl format' to rewrite it",
                "error:".red().bold(),
                "help:".cyan().bold(),
            ),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Input(e.to_string())
    }
}

impl From<fluree_graph_turtle::TurtleError> for CliError {
    fn from(e: fluree_graph_turtle::TurtleError) -> Self {
        CliError::Parse(e)
    }
}

impl From<fluree_graph_format::FormatError> for CliError {
    fn from(e: fluree_graph_format::FormatError) -> Self {
        CliError::Format(e)
    }
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => EXIT_USAGE,
            CliError::Unsorted { .. } => EXIT_UNSORTED,
            _ => EXIT_ERROR,
        }
    }
}

/// Print error and exit with the appropriate code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    process::exit(err.exit_code())
}

pub type CliResult<T> = std::result::Result<T, CliError>;
