//! Deterministic sorted Turtle and TriG serialization
//!
//! This crate writes a `fluree_graph_ir::Graph` (or `Dataset`) as Turtle
//! (or TriG) in a canonical order, so the same graph always produces the
//! same text and textual diffs reflect semantic changes:
//!
//! - subjects are ordered structurally (IRIs by string, blank nodes by
//!   their properties), see [`ComplexComparator`]
//! - predicates are bucketed by namespace priority with `rdf:type` first,
//!   see [`PredicateOrder`]
//! - objects are ordered by [`OrderingPolicy::compare_literals`], which
//!   compares values within a datatype's value space
//! - singly-referenced blank nodes are inlined as `[ ... ]` and
//!   well-formed lists as `( ... )`
//!
//! All knobs live in one [`OrderingPolicy`], usually built from a
//! [`PolicyConfig`].
//!
//! # Example
//!
//! ```
//! use fluree_graph_ir::{Graph, Term};
//! use fluree_graph_format::{format_turtle, OrderingPolicy};
//!
//! let mut graph = Graph::new();
//! graph.add_prefix("ex", "http://example.org/");
//! graph.add_triple(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://example.org/age"),
//!     Term::integer(30),
//! );
//!
//! let turtle = format_turtle(&graph, &OrderingPolicy::codepoint()).unwrap();
//! assert_eq!(
//!     turtle,
//!     "@prefix ex:    <http://example.org/> .\n\nex:alice ex:age   30 .\n"
//! );
//! ```

pub mod analyze;
pub mod collation;
pub mod error;
pub mod order;
pub mod policy;
mod render;
mod trig;
mod turtle;
mod usage;
pub mod writer;

pub use analyze::{Analysis, List, ListKind, Scope};
pub use collation::{CodepointCollation, Collation, RootCollation};
pub use error::{FormatError, Result};
pub use order::{ComplexComparator, LiteralOrder, PredicateOrder, TermComparator, TermOrder};
pub use policy::{
    CollationKind, LayoutPolicy, OrderingConfig, OrderingPolicy, PolicyConfig,
    DEFAULT_NAMESPACE_PRIORITY,
};
pub use trig::{format_trig, write_trig};
pub use turtle::{format_turtle, write_turtle};
pub use usage::UsageTracker;
pub use writer::IndentedWriter;
