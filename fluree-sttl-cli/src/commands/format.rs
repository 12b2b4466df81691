use crate::detect::detect_data_format;
use crate::error::{CliError, CliResult};
use crate::input::{read_input, InputSource};
use fluree_graph_format::OrderingPolicy;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn run(
    source: &InputSource,
    format: Option<&str>,
    output: Option<&Path>,
    policy: &OrderingPolicy,
) -> CliResult<()> {
    let content = read_input(source)?;
    let format = detect_data_format(source.path(), &content, format)?;
    let sorted = super::render(&content, format, policy)?;
    info!(source = %source.label(), ?format, bytes = sorted.len(), "formatted");

    match output {
        Some(path) => std::fs::write(path, &sorted)
            .map_err(|e| CliError::Input(format!("failed to write {}: {e}", path.display())))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(sorted.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
