//! Sorted Turtle output for a single graph.

use std::io::Write;

use fluree_graph_ir::Graph;
use fluree_graph_turtle::PrefixTable;

use crate::analyze::Scope;
use crate::error::Result;
use crate::policy::OrderingPolicy;
use crate::render::{render_document, GraphWriter};

/// Render `graph` as sorted Turtle.
///
/// The prefix header comes from `graph.prefixes`, and `graph.base` is
/// declared with `@base` and used to relativize IRIs.
///
/// The output is a pure function of the graph's triples (modulo blank node
/// labels), its prefixes and base, and the policy.
pub fn format_turtle(graph: &Graph, policy: &OrderingPolicy) -> Result<String> {
    let prefixes = PrefixTable::from(&graph.prefixes);
    render_document(&prefixes, graph.base.as_deref(), policy.layout(), |emitter| {
        GraphWriter::new(Scope::Graph(graph), graph, policy, emitter).write()
    })
}

/// Render `graph` as sorted Turtle into `writer`.
///
/// The document is rendered completely before anything is written, so an
/// internal error leaves `writer` untouched.
pub fn write_turtle<W: Write>(writer: &mut W, graph: &Graph, policy: &OrderingPolicy) -> Result<()> {
    let text = format_turtle(graph, policy)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}
