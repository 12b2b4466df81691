//! Turtle and TriG support for Fluree graphs.
//!
//! This crate provides the text side of the graph model:
//!
//! - a Turtle / TriG parser that emits to `fluree_graph_ir::GraphSink`
//! - [`PrefixMap`] and [`PrefixTable`] for IRI abbreviation
//! - [`TermFormatter`], which spells single terms in Turtle syntax
//!
//! # Example
//!
//! ```
//! use fluree_graph_turtle::{parse_turtle_to_graph, PrefixTable, TermFormatter};
//!
//! let turtle = r#"
//!     @prefix ex: <http://example.org/> .
//!     ex:alice ex:name "Alice" ;
//!              ex:age 30 .
//! "#;
//!
//! let graph = parse_turtle_to_graph(turtle).unwrap();
//! assert_eq!(graph.len(), 2);
//!
//! let prefixes = PrefixTable::from(&graph.prefixes);
//! let fmt = TermFormatter::new(&prefixes);
//! assert_eq!(fmt.iri("http://example.org/alice"), "ex:alice");
//! ```

pub mod error;
pub mod fmt;
pub mod iri;
pub mod lex;
pub mod parser;
pub mod prefix;

pub use error::{Result, TurtleError};
pub use fmt::TermFormatter;
pub use lex::{tokenize, Lexer, Token, TokenKind};
pub use parser::{parse, parse_trig, Syntax};
pub use prefix::{PrefixMap, PrefixTable};

use fluree_graph_ir::{Dataset, DatasetCollectorSink, Graph, GraphCollectorSink};

/// Parse a Turtle document into a `Graph`.
///
/// Base and prefix declarations are kept on the graph.
pub fn parse_turtle_to_graph(input: &str) -> Result<Graph> {
    let mut sink = GraphCollectorSink::new();
    parse(input, &mut sink)?;
    let graph = sink.finish();
    tracing::debug!(triples = graph.len(), "parsed turtle");
    Ok(graph)
}

/// Parse a TriG document into a `Dataset`.
pub fn parse_trig_to_dataset(input: &str) -> Result<Dataset> {
    let mut sink = DatasetCollectorSink::new();
    parse_trig(input, &mut sink)?;
    let dataset = sink.finish();
    tracing::debug!(
        quads = dataset.len(),
        named_graphs = dataset.graph_names().count(),
        "parsed trig"
    );
    Ok(dataset)
}
