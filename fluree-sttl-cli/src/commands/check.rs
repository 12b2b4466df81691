use crate::detect::detect_data_format;
use crate::error::{CliError, CliResult};
use crate::input::{read_input, InputSource};
use colored::Colorize;
use fluree_graph_format::OrderingPolicy;

pub fn run(
    source: &InputSource,
    format: Option<&str>,
    policy: &OrderingPolicy,
    quiet: bool,
) -> CliResult<()> {
    let content = read_input(source)?;
    let format = detect_data_format(source.path(), &content, format)?;
    let sorted = super::render(&content, format, policy)?;

    if let Some(line) = first_difference(&content, &sorted) {
        return Err(CliError::Unsorted {
            source: source.label(),
            line,
        });
    }
    if !quiet {
        println!("{} {} is sorted", "ok:".green().bold(), source.label());
    }
    Ok(())
}

/// 1-based line of the first difference, if any.
fn first_difference(actual: &str, expected: &str) -> Option<usize> {
    if actual == expected {
        return None;
    }
    let mut a = actual.split_inclusive('\n');
    let mut b = expected.split_inclusive('\n');
    let mut line = 1;
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) if x == y => line += 1,
            _ => return Some(line),
        }
    }
}
