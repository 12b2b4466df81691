//! GraphSink trait for event-driven graph construction
//!
//! This module provides a Raphael-style event interface for parsers to emit
//! graph events without knowing the concrete sink type.
//!
//! # Design
//!
//! Parsers call methods like `term_iri()` and `emit_triple()` on a sink.
//! The sink can be:
//! - `GraphCollectorSink`: Collects triples into a `Graph`
//! - `DatasetCollectorSink`: Collects quads into a `Dataset`

use crate::{Datatype, Dataset, Graph, Term, Triple};
use rustc_hash::FxHashMap;

/// Opaque term identifier for efficient triple emission
///
/// `TermId` is only valid within a single sink session. It allows parsers
/// to reference terms efficiently without repeated string allocations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TermId(pub(crate) u32);

impl TermId {
    /// Create a new TermId from a raw index.
    ///
    /// This is intended for `GraphSink` implementations outside this crate
    /// that need to allocate term IDs.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Event-driven interface for RDF graph construction
///
/// # Example
///
/// ```
/// use fluree_graph_ir::{GraphSink, GraphCollectorSink, Datatype};
///
/// let mut sink = GraphCollectorSink::new();
///
/// // Declare prefixes
/// sink.on_prefix("foaf", "http://xmlns.com/foaf/0.1/");
///
/// // Create terms
/// let alice = sink.term_iri("http://example.org/alice");
/// let name = sink.term_iri("http://xmlns.com/foaf/0.1/name");
/// let alice_name = sink.term_literal("Alice", Datatype::xsd_string(), None);
///
/// // Emit triple
/// sink.emit_triple(alice, name, alice_name);
///
/// // Get the resulting graph
/// let graph = sink.finish();
/// assert_eq!(graph.len(), 1);
/// ```
pub trait GraphSink {
    /// Called when a base IRI is declared
    ///
    /// In Turtle: `@base <http://example.org/> .`
    fn on_base(&mut self, base_iri: &str);

    /// Called when a prefix is declared
    ///
    /// In Turtle: `@prefix foaf: <http://xmlns.com/foaf/0.1/> .`
    fn on_prefix(&mut self, prefix: &str, namespace_iri: &str);

    /// Create an IRI term and return its ID
    ///
    /// The IRI should be fully expanded (not prefixed).
    fn term_iri(&mut self, iri: &str) -> TermId;

    /// Create a blank node term and return its ID
    ///
    /// If `label` is Some, the blank node has that label (for consistent
    /// identity across references). If None, generate a fresh blank node.
    fn term_blank(&mut self, label: Option<&str>) -> TermId;

    /// Create a literal term from its lexical form
    fn term_literal(&mut self, value: &str, datatype: Datatype, language: Option<&str>) -> TermId;

    /// Emit a triple using previously created term IDs
    fn emit_triple(&mut self, subject: TermId, predicate: TermId, object: TermId);

    /// Emit a triple into the named graph `graph`
    ///
    /// Default implementation falls back to `emit_triple` (ignoring the graph).
    fn emit_quad(&mut self, graph: TermId, subject: TermId, predicate: TermId, object: TermId) {
        let _ = graph;
        self.emit_triple(subject, predicate, object);
    }
}

/// Term storage shared by the collector sinks
///
/// Every blank node gets a fresh internal label, so source labels and
/// generated anonymous nodes never collide.
#[derive(Debug, Default)]
struct TermArena {
    terms: Vec<Term>,
    blank_counter: u32,
    blank_labels: FxHashMap<String, TermId>,
}

impl TermArena {
    fn get(&self, id: TermId) -> &Term {
        &self.terms[id.0 as usize]
    }

    fn add(&mut self, term: Term) -> TermId {
        let id = TermId(self.terms.len() as u32);
        self.terms.push(term);
        id
    }

    fn fresh_blank(&mut self) -> TermId {
        let label = format!("b{}", self.blank_counter);
        self.blank_counter += 1;
        self.add(Term::blank(label))
    }

    fn blank(&mut self, label: Option<&str>) -> TermId {
        match label {
            Some(l) => {
                if let Some(&id) = self.blank_labels.get(l) {
                    return id;
                }
                let id = self.fresh_blank();
                self.blank_labels.insert(l.to_string(), id);
                id
            }
            None => self.fresh_blank(),
        }
    }

    fn literal(&mut self, value: &str, datatype: Datatype, language: Option<&str>) -> TermId {
        let term = match language {
            Some(lang) => Term::lang_string(value, lang),
            None => Term::typed(value, datatype),
        };
        self.add(term)
    }

    fn triple(&self, s: TermId, p: TermId, o: TermId) -> Triple {
        Triple::new(self.get(s).clone(), self.get(p).clone(), self.get(o).clone())
    }
}

/// A sink that collects triples into a Graph
///
/// This is the standard sink for building an in-memory graph from Turtle.
/// Quads are flattened into the one graph.
#[derive(Debug, Default)]
pub struct GraphCollectorSink {
    /// The graph being built
    graph: Graph,
    arena: TermArena,
}

impl GraphCollectorSink {
    /// Create a new collector sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink with a pre-configured base IRI
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            graph: Graph::with_base(base),
            arena: TermArena::default(),
        }
    }

    /// Finish building and return the graph
    ///
    /// Consumes the sink.
    pub fn finish(self) -> Graph {
        self.graph
    }

    /// Get the current graph (non-consuming)
    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}

impl GraphSink for GraphCollectorSink {
    fn on_base(&mut self, base_iri: &str) {
        self.graph.set_base(base_iri);
    }

    fn on_prefix(&mut self, prefix: &str, namespace_iri: &str) {
        self.graph.add_prefix(prefix, namespace_iri);
    }

    fn term_iri(&mut self, iri: &str) -> TermId {
        self.arena.add(Term::iri(iri))
    }

    fn term_blank(&mut self, label: Option<&str>) -> TermId {
        self.arena.blank(label)
    }

    fn term_literal(&mut self, value: &str, datatype: Datatype, language: Option<&str>) -> TermId {
        self.arena.literal(value, datatype, language)
    }

    fn emit_triple(&mut self, subject: TermId, predicate: TermId, object: TermId) {
        let triple = self.arena.triple(subject, predicate, object);
        self.graph.add(triple);
    }
}

/// A sink that collects quads into a Dataset
///
/// `emit_triple` targets the default graph, `emit_quad` a named graph.
#[derive(Debug, Default)]
pub struct DatasetCollectorSink {
    dataset: Dataset,
    arena: TermArena,
}

impl DatasetCollectorSink {
    /// Create a new collector sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish building and return the dataset
    pub fn finish(self) -> Dataset {
        self.dataset
    }

    /// Get the current dataset (non-consuming)
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

impl GraphSink for DatasetCollectorSink {
    fn on_base(&mut self, base_iri: &str) {
        self.dataset.set_base(base_iri);
    }

    fn on_prefix(&mut self, prefix: &str, namespace_iri: &str) {
        self.dataset.add_prefix(prefix, namespace_iri);
    }

    fn term_iri(&mut self, iri: &str) -> TermId {
        self.arena.add(Term::iri(iri))
    }

    fn term_blank(&mut self, label: Option<&str>) -> TermId {
        self.arena.blank(label)
    }

    fn term_literal(&mut self, value: &str, datatype: Datatype, language: Option<&str>) -> TermId {
        self.arena.literal(value, datatype, language)
    }

    fn emit_triple(&mut self, subject: TermId, predicate: TermId, object: TermId) {
        let triple = self.arena.triple(subject, predicate, object);
        self.dataset.add_quad(None, triple);
    }

    fn emit_quad(&mut self, graph: TermId, subject: TermId, predicate: TermId, object: TermId) {
        let triple = self.arena.triple(subject, predicate, object);
        let name = self.arena.get(graph).clone();
        self.dataset.add_quad(Some(&name), triple);
    }
}
