//! Sorted Turtle CLI library.
//!
//! Types and command handlers behind the `sttl` binary. The binary parses
//! arguments, installs tracing, and calls [`run`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod detect;
pub mod error;
pub mod input;

use cli::{Cli, Commands};

/// Dispatch a parsed [`Cli`] to its command handler.
pub fn run(cli: Cli) -> error::CliResult<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Format {
            file,
            expr,
            output,
            format,
            layout,
        } => {
            let policy = config::build_policy(config_path, &layout)?;
            let source = input::resolve_input(expr.as_deref(), file.as_deref())?;
            commands::format::run(&source, format.as_deref(), output.as_deref(), &policy)
        }

        Commands::Check {
            file,
            expr,
            format,
            layout,
        } => {
            let policy = config::build_policy(config_path, &layout)?;
            let source = input::resolve_input(expr.as_deref(), file.as_deref())?;
            commands::check::run(&source, format.as_deref(), &policy, cli.quiet)
        }
    }
}
