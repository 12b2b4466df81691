//! Sorted TriG output for a dataset.

use std::cmp::Ordering;
use std::io::Write;

use tracing::debug;

use fluree_graph_ir::{Dataset, Term};
use fluree_graph_turtle::PrefixTable;

use crate::analyze::Scope;
use crate::error::{FormatError, Result};
use crate::order::{merge_sort_by, pick_next};
use crate::policy::OrderingPolicy;
use crate::render::{label_order, render_document, Emitter, GraphWriter};

/// Render `dataset` as sorted TriG.
///
/// The default graph comes first, unbraced unless the layout asks for
/// braces, and is omitted when empty. Named graphs follow in literal order
/// of their names, each as `name { ... }`, separated by blank lines. Blank
/// node labels are shared across graphs.
pub fn format_trig(dataset: &Dataset, policy: &OrderingPolicy) -> Result<String> {
    let prefixes = PrefixTable::from(&dataset.prefixes);
    render_document(&prefixes, dataset.base.as_deref(), policy.layout(), |emitter| {
        write_dataset(emitter, dataset, policy)
    })
}

/// Render `dataset` as sorted TriG into `writer`.
///
/// Nothing is written if rendering fails.
pub fn write_trig<W: Write>(writer: &mut W, dataset: &Dataset, policy: &OrderingPolicy) -> Result<()> {
    let text = format_trig(dataset, policy)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

fn write_dataset(emitter: &mut Emitter<'_>, dataset: &Dataset, policy: &OrderingPolicy) -> Result<()> {
    let layout = policy.layout();
    let mut blocks = 0;

    let default = dataset.default_graph();
    if !default.is_empty() {
        let scope = Scope::Dataset { dataset, name: None };
        if layout.default_graph_braces {
            emitter.out.print("{");
            emitter.out.println();
            write_braced(emitter, scope, policy)?;
        } else {
            GraphWriter::new(scope, default, policy, emitter).write()?;
        }
        blocks += 1;
    }

    let mut names: Vec<&Term> = dataset.graph_names().collect();
    merge_sort_by(&mut names, |a, b| policy.compare_literals(a, b));

    for start in 0..names.len() {
        // Tied blank names go by the label earlier graphs gave them
        let pick = start
            + pick_next(
                &names[start..],
                |a, b| policy.compare_literals(a, b) == Ordering::Equal,
                |a, b| label_order(&emitter.terms, a, b),
            );
        names[start..=pick].rotate_right(1);
        let name = names[start];
        if blocks > 0 {
            emitter.out.println();
        }
        let label = emitter.terms.term(name);
        emitter.out.print(&label);
        emitter.out.print(" {");
        emitter.out.println();
        write_braced(emitter, Scope::Dataset { dataset, name: Some(name) }, policy)?;
        blocks += 1;
    }

    debug!(graphs = blocks, "rendered dataset");
    Ok(())
}

/// Graph content indented inside braces, then the closing `}`.
fn write_braced(emitter: &mut Emitter<'_>, scope: Scope<'_>, policy: &OrderingPolicy) -> Result<()> {
    let graph = scope
        .graph()
        .ok_or_else(|| FormatError::internal("graph listed in dataset is missing"))?;

    let previous = emitter.out.set_indent(policy.layout().named_graph_indent);
    let result = GraphWriter::new(scope, graph, policy, emitter).write();
    emitter.out.set_indent(previous);
    result?;

    emitter.out.print("}");
    emitter.out.println();
    Ok(())
}
