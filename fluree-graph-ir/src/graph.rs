//! RDF graph - a set of triples
//!
//! `Graph` has set semantics: adding a triple that is already present is a
//! no-op. Insertion order is preserved, and subject/object indexes make the
//! pattern queries used by the writer cheap.

use crate::{Term, Triple};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;

/// A set of RDF triples with subject and object indexes
///
/// # Example
///
/// ```
/// use fluree_graph_ir::{Graph, Term};
///
/// let mut graph = Graph::new();
///
/// let alice = Term::iri("http://example.org/alice");
/// let name = Term::iri("http://xmlns.com/foaf/0.1/name");
/// graph.add_triple(alice.clone(), name.clone(), Term::string("Alice"));
/// graph.add_triple(alice.clone(), name.clone(), Term::string("Alice"));
///
/// assert_eq!(graph.len(), 1);
/// assert!(graph.triple1(Some(&alice), Some(&name), None).is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    /// The triples in this graph, in insertion order
    triples: Vec<Triple>,
    /// Subject -> positions in `triples`
    by_subject: FxHashMap<Term, Vec<usize>>,
    /// Object -> positions in `triples`
    by_object: FxHashMap<Term, Vec<usize>>,
    /// Base IRI from parsing (for reconstruction)
    pub base: Option<String>,
    /// Prefix mappings from parsing (deterministic order via BTreeMap)
    pub prefixes: BTreeMap<String, String>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with a base IRI
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: Some(base.into()),
            ..Default::default()
        }
    }

    /// Set the base IRI
    pub fn set_base(&mut self, base: impl Into<String>) {
        self.base = Some(base.into());
    }

    /// Add a prefix mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Add a triple to the graph
    ///
    /// Returns `false` if the triple was already present.
    pub fn add(&mut self, triple: Triple) -> bool {
        if self.contains(&triple) {
            return false;
        }
        let idx = self.triples.len();
        self.by_subject.entry(triple.s.clone()).or_default().push(idx);
        self.by_object.entry(triple.o.clone()).or_default().push(idx);
        self.triples.push(triple);
        true
    }

    /// Add a triple by components
    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) -> bool {
        self.add(Triple::new(s, p, o))
    }

    /// Check whether the exact triple is present
    pub fn contains(&self, triple: &Triple) -> bool {
        self.by_subject
            .get(&triple.s)
            .is_some_and(|idxs| idxs.iter().any(|&i| self.triples[i] == *triple))
    }

    /// Find all triples matching a pattern; `None` is a wildcard
    ///
    /// Results are in insertion order.
    pub fn find(&self, s: Option<&Term>, p: Option<&Term>, o: Option<&Term>) -> Vec<&Triple> {
        self.candidates(s, o)
            .filter(|t| t.matches(s, p, o))
            .collect()
    }

    /// Count triples matching a pattern
    pub fn count(&self, s: Option<&Term>, p: Option<&Term>, o: Option<&Term>) -> usize {
        self.candidates(s, o).filter(|t| t.matches(s, p, o)).count()
    }

    /// The single triple matching a pattern
    ///
    /// Returns `None` when zero or more than one triple matches.
    pub fn triple1(&self, s: Option<&Term>, p: Option<&Term>, o: Option<&Term>) -> Option<&Triple> {
        let mut matches = self.candidates(s, o).filter(|t| t.matches(s, p, o));
        let first = matches.next()?;
        match matches.next() {
            None => Some(first),
            Some(_) => None,
        }
    }

    /// Narrow the scan using whichever index the pattern allows
    fn candidates<'a>(
        &'a self,
        s: Option<&Term>,
        o: Option<&Term>,
    ) -> Box<dyn Iterator<Item = &'a Triple> + 'a> {
        let index = match (s, o) {
            (Some(s), _) => Some(self.by_subject.get(s)),
            (None, Some(o)) => Some(self.by_object.get(o)),
            (None, None) => None,
        };
        match index {
            Some(Some(idxs)) => Box::new(idxs.iter().map(move |&i| &self.triples[i])),
            Some(None) => Box::new(std::iter::empty()),
            None => Box::new(self.triples.iter()),
        }
    }

    /// Distinct subjects, in first-seen order
    pub fn subjects(&self) -> Vec<&Term> {
        let mut seen = FxHashSet::default();
        self.triples
            .iter()
            .map(|t| &t.s)
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Check whether a term occurs in any position of any triple
    pub fn mentions(&self, term: &Term) -> bool {
        self.by_subject.contains_key(term)
            || self.by_object.contains_key(term)
            || (term.is_iri() && self.triples.iter().any(|t| t.p == *term))
    }

    /// Get the number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over triples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Get a reference to the triples
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Get all triples (consuming the graph)
    pub fn into_triples(self) -> Vec<Triple> {
        self.triples
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        for triple in iter {
            self.add(triple);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ex(local: &str) -> Term {
        Term::iri(format!("http://example.org/{}", local))
    }

    fn make_test_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_triple(ex("bob"), ex("name"), Term::string("Bob"));
        graph.add_triple(ex("alice"), ex("name"), Term::string("Alice"));
        graph.add_triple(ex("alice"), ex("knows"), ex("bob"));
        graph.add_triple(ex("alice"), ex("age"), Term::integer(30));
        graph
    }

    #[test]
    fn test_graph_creation() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
    }

    #[test]
    fn test_set_semantics() {
        let mut graph = Graph::new();
        let triple = Triple::new(ex("s"), ex("p"), Term::string("o"));

        assert!(graph.add(triple.clone()));
        assert!(!graph.add(triple.clone()));
        assert!(!graph.add(triple));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_find_patterns() {
        let graph = make_test_graph();

        assert_eq!(graph.find(Some(&ex("alice")), None, None).len(), 3);
        assert_eq!(graph.find(None, Some(&ex("name")), None).len(), 2);
        assert_eq!(graph.find(None, None, Some(&ex("bob"))).len(), 1);
        assert_eq!(
            graph
                .find(Some(&ex("alice")), Some(&ex("name")), None)
                .first()
                .map(|t| &t.o),
            Some(&Term::string("Alice"))
        );
        assert!(graph.find(Some(&ex("nobody")), None, None).is_empty());
        assert_eq!(graph.find(None, None, None).len(), 4);
    }

    #[test]
    fn test_count_and_triple1() {
        let graph = make_test_graph();

        assert_eq!(graph.count(None, Some(&ex("name")), None), 2);
        assert!(graph.triple1(None, Some(&ex("name")), None).is_none());
        assert!(graph.triple1(None, Some(&ex("knows")), None).is_some());
        assert!(graph.triple1(None, Some(&ex("missing")), None).is_none());
    }

    #[test]
    fn test_subjects_first_seen_order() {
        let graph = make_test_graph();
        let subjects = graph.subjects();
        assert_eq!(subjects, vec![&ex("bob"), &ex("alice")]);
    }

    #[test]
    fn test_mentions() {
        let graph = make_test_graph();
        assert!(graph.mentions(&ex("bob")));
        assert!(graph.mentions(&ex("age")));
        assert!(graph.mentions(&Term::integer(30)));
        assert!(!graph.mentions(&ex("carol")));
    }

    #[test]
    fn test_graph_prefixes() {
        let mut graph = Graph::new();
        graph.add_prefix("foaf", "http://xmlns.com/foaf/0.1/");
        graph.add_prefix("ex", "http://example.org/");

        assert_eq!(graph.prefixes.len(), 2);
        assert_eq!(
            graph.prefixes.get("foaf"),
            Some(&"http://xmlns.com/foaf/0.1/".to_string())
        );
    }

    #[test]
    fn test_from_iterator_dedupes() {
        let t = Triple::new(ex("s"), ex("p"), Term::string("o"));
        let graph: Graph = vec![t.clone(), t].into_iter().collect();
        assert_eq!(graph.len(), 1);
    }
}
