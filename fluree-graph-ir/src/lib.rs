//! Format-agnostic RDF graph intermediate representation
//!
//! This crate provides the types parsers produce and writers consume:
//! terms, triples, graphs and datasets, plus the `GraphSink` event interface
//! parsers emit into.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form. Compaction
//!    is handled by formatters at output time.
//!
//! 2. **Explicit datatypes** - Literals always have an explicit datatype, never
//!    optional. Plain strings use `xsd:string`, language-tagged strings use
//!    `rdf:langString`.
//!
//! 3. **Lexical forms are kept** - `"+1"` and `"1"` are different terms.
//!
//! 4. **Set semantics** - A `Graph` never holds the same triple twice, and
//!    answers pattern queries (`find`, `count`, `triple1`) from its indexes.
//!
//! # Example
//!
//! ```
//! use fluree_graph_ir::{Dataset, Graph, Term};
//!
//! let mut graph = Graph::new();
//!
//! // Add a triple with expanded IRIs
//! graph.add_triple(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://xmlns.com/foaf/0.1/name"),
//!     Term::string("Alice"),
//! );
//!
//! let dataset = Dataset::from(graph);
//! assert_eq!(dataset.len(), 1);
//! ```

pub mod datatype;
mod dataset;
mod graph;
mod sink;
mod term;
mod triple;

pub use dataset::Dataset;
pub use datatype::{Datatype, ValueSpace};
pub use graph::Graph;
pub use sink::{DatasetCollectorSink, GraphCollectorSink, GraphSink, TermId};
pub use term::{BlankId, Term};
pub use triple::Triple;
