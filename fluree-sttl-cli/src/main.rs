use clap::Parser;
use fluree_sttl_cli::cli::Cli;
use fluree_sttl_cli::error::exit_with_error;

fn init_tracing(cli: &Cli) {
    // --quiet   → always "off"
    // --verbose → RUST_LOG if set, otherwise "info"
    // default   → "off", so RUST_LOG never leaks log lines into piped output
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    // Errors go to stderr, so a piped stdout alone does not disable color.
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = fluree_sttl_cli::run(cli) {
        exit_with_error(e);
    }
}
