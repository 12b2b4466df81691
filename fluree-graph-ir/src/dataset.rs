//! RDF dataset - a default graph plus named graphs
//!
//! Named graphs are keyed by their name term (IRI or blank node). The
//! `BTreeMap` gives a stable iteration order; it is NOT the serialization
//! order, which the writer decides.

use crate::{Graph, Term, Triple};
use std::collections::BTreeMap;

/// A default graph plus a set of named graphs
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    default: Graph,
    named: BTreeMap<Term, Graph>,
    /// Base IRI from parsing
    pub base: Option<String>,
    /// Prefix mappings from parsing
    pub prefixes: BTreeMap<String, String>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base IRI
    pub fn set_base(&mut self, base: impl Into<String>) {
        self.base = Some(base.into());
    }

    /// Add a prefix mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// The default graph
    pub fn default_graph(&self) -> &Graph {
        &self.default
    }

    /// The default graph, mutably
    pub fn default_graph_mut(&mut self) -> &mut Graph {
        &mut self.default
    }

    /// Names of all named graphs
    pub fn graph_names(&self) -> impl Iterator<Item = &Term> {
        self.named.keys()
    }

    /// Look up a graph; `None` selects the default graph
    pub fn graph(&self, name: Option<&Term>) -> Option<&Graph> {
        match name {
            None => Some(&self.default),
            Some(name) => self.named.get(name),
        }
    }

    /// Get a graph mutably, creating a named graph on first use
    pub fn graph_mut(&mut self, name: Option<&Term>) -> &mut Graph {
        match name {
            None => &mut self.default,
            Some(name) => self.named.entry(name.clone()).or_default(),
        }
    }

    /// Add a triple to the default graph (`None`) or a named graph
    ///
    /// Returns `false` if the quad was already present.
    pub fn add_quad(&mut self, name: Option<&Term>, triple: Triple) -> bool {
        self.graph_mut(name).add(triple)
    }

    /// Iterate the default graph followed by every named graph
    pub fn graphs(&self) -> impl Iterator<Item = (Option<&Term>, &Graph)> {
        std::iter::once((None, &self.default)).chain(self.named.iter().map(|(n, g)| (Some(n), g)))
    }

    /// Number of quads, across all graphs, whose object is `term`
    pub fn count_object(&self, term: &Term) -> usize {
        self.graphs().map(|(_, g)| g.count(None, None, Some(term))).sum()
    }

    /// Check that `term` is confined to the graph `name`
    ///
    /// False when the term names a graph, or is mentioned in any position by
    /// any other graph.
    pub fn occurs_only_in(&self, term: &Term, name: Option<&Term>) -> bool {
        if self.named.contains_key(term) {
            return false;
        }
        self.graphs()
            .filter(|(n, _)| *n != name)
            .all(|(_, g)| !g.mentions(term))
    }

    /// True when every graph is empty
    pub fn is_empty(&self) -> bool {
        self.graphs().all(|(_, g)| g.is_empty())
    }

    /// Total number of quads
    pub fn len(&self) -> usize {
        self.graphs().map(|(_, g)| g.len()).sum()
    }
}

impl From<Graph> for Dataset {
    fn from(mut graph: Graph) -> Self {
        let base = graph.base.take();
        let prefixes = std::mem::take(&mut graph.prefixes);
        Dataset {
            default: graph,
            named: BTreeMap::new(),
            base,
            prefixes,
        }
    }
}
