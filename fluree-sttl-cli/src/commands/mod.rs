pub mod check;
pub mod format;

use crate::detect::DataFormat;
use crate::error::CliResult;
use fluree_graph_format::{format_trig, format_turtle, OrderingPolicy};
use fluree_graph_turtle::{parse_trig_to_dataset, parse_turtle_to_graph};

/// Parse `content` and render it sorted in the same syntax.
pub fn render(content: &str, format: DataFormat, policy: &OrderingPolicy) -> CliResult<String> {
    let text = match format {
        DataFormat::Turtle => format_turtle(&parse_turtle_to_graph(content)?, policy)?,
        DataFormat::TriG => format_trig(&parse_trig_to_dataset(content)?, policy)?,
    };
    Ok(text)
}
