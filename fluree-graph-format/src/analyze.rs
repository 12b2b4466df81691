//! Structural analysis of one graph before rendering.
//!
//! A single pass classifies blank nodes into the shapes the writer can print
//! inline:
//!
//! - **free blanks**: never referenced, printed as `[ ... ] .`
//! - **nested objects**: referenced exactly once, printed at that reference
//! - **lists**: well-formed `rdf:first`/`rdf:rest` chains ending in `rdf:nil`
//!
//! Reference counts are taken over the whole dataset, and a node only
//! qualifies if it does not occur in any other graph.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use fluree_graph_ir::{Dataset, Graph, Term};
use fluree_vocab::rdf;

/// Where reference counts come from.
#[derive(Clone, Copy, Debug)]
pub enum Scope<'a> {
    /// A standalone graph
    Graph(&'a Graph),
    /// One graph of a dataset; `None` is the default graph
    Dataset {
        dataset: &'a Dataset,
        name: Option<&'a Term>,
    },
}

impl<'a> Scope<'a> {
    /// The graph being analyzed.
    pub fn graph(&self) -> Option<&'a Graph> {
        match *self {
            Scope::Graph(graph) => Some(graph),
            Scope::Dataset { dataset, name } => dataset.graph(name),
        }
    }

    /// Number of triples, in any graph, with `term` as object.
    fn in_links(&self, term: &Term) -> usize {
        match *self {
            Scope::Graph(graph) => graph.count(None, None, Some(term)),
            Scope::Dataset { dataset, .. } => dataset.count_object(term),
        }
    }

    /// Whether `term` occurs nowhere outside the analyzed graph.
    fn confined(&self, term: &Term) -> bool {
        match *self {
            Scope::Graph(_) => true,
            Scope::Dataset { dataset, name } => dataset.occurs_only_in(term, name),
        }
    }
}

/// How a detected list is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    /// Referenced once: `( ... )` at the reference
    Nested,
    /// Never referenced: `[ rdf:first x ; rdf:rest ( ... ) ] .`
    Free,
    /// Referenced more than once: the head cell is a labelled subject
    Shared,
}

/// A well-formed list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct List {
    /// Classification by in-degree of the head
    pub kind: ListKind,
    /// Elements, in list order
    pub items: Vec<Term>,
}

/// Classification of the blank nodes of one graph.
#[derive(Clone, Debug, Default)]
pub struct Analysis {
    free_blanks: FxHashSet<Term>,
    nested: Vec<Term>,
    nested_set: FxHashSet<Term>,
    lists: FxHashMap<Term, List>,
    list_heads: Vec<Term>,
    list_cells: FxHashMap<Term, Term>,
}

impl Analysis {
    /// Analyze the graph selected by `scope`.
    pub fn new(scope: Scope<'_>) -> Self {
        let mut analysis = Self::default();
        let Some(graph) = scope.graph() else {
            return analysis;
        };
        analysis.detect_lists(scope, graph);
        analysis.detect_blanks(scope, graph);
        debug!(
            free_blanks = analysis.free_blanks.len(),
            nested = analysis.nested.len(),
            lists = analysis.lists.len(),
            "analyzed graph"
        );
        analysis
    }

    /// Never-referenced blank subject.
    pub fn is_free_blank(&self, term: &Term) -> bool {
        self.free_blanks.contains(term)
    }

    /// Blank node printed at its single reference.
    pub fn is_nested(&self, term: &Term) -> bool {
        self.nested_set.contains(term)
    }

    /// Nested objects in discovery order.
    pub fn nested(&self) -> &[Term] {
        &self.nested
    }

    /// The list headed by `term`, if any.
    pub fn list(&self, term: &Term) -> Option<&List> {
        self.lists.get(term)
    }

    /// Whether `term` is a cell of any detected list.
    pub fn is_list_cell(&self, term: &Term) -> bool {
        self.list_cells.contains_key(term)
    }

    /// Head of the list containing the cell `term`.
    pub fn list_head_of(&self, term: &Term) -> Option<&Term> {
        self.list_cells.get(term)
    }

    /// Heads of lists of one kind, in discovery order.
    pub fn list_heads(&self, kind: ListKind) -> impl Iterator<Item = &Term> {
        self.list_heads
            .iter()
            .filter(move |head| self.lists.get(*head).is_some_and(|l| l.kind == kind))
    }

    fn detect_lists(&mut self, scope: Scope<'_>, graph: &Graph) {
        let first = Term::iri(rdf::FIRST);
        let rest = Term::iri(rdf::REST);
        let nil = Term::iri(rdf::NIL);

        for tail in graph.find(None, Some(&rest), Some(&nil)) {
            let mut cell = tail.s.clone();
            let mut cells = Vec::new();
            let mut items = Vec::new();

            while let Some(item) = valid_cell(scope, graph, &cell, &first, &rest) {
                cells.push(cell.clone());
                items.push(item);

                if scope.in_links(&cell) != 1 {
                    break;
                }
                match graph.triple1(None, None, Some(&cell)) {
                    Some(link) if link.p == rest && link.s.is_blank() => {
                        cell = link.s.clone();
                    }
                    _ => break,
                }
            }

            let Some(head) = cells.last().cloned() else {
                trace!(cell = %tail.s, "rejected list tail");
                continue;
            };
            items.reverse();

            let kind = match (scope.in_links(&head), scope.confined(&head)) {
                (1, true) => ListKind::Nested,
                (0, true) => ListKind::Free,
                _ => ListKind::Shared,
            };
            trace!(head = %head, len = items.len(), ?kind, "detected list");
            for c in cells {
                self.list_cells.insert(c, head.clone());
            }
            self.list_heads.push(head.clone());
            self.lists.insert(head, List { kind, items });
        }
    }

    fn detect_blanks(&mut self, scope: Scope<'_>, graph: &Graph) {
        for subject in graph.subjects() {
            if subject.is_blank()
                && !self.is_list_cell(subject)
                && scope.in_links(subject) == 0
                && scope.confined(subject)
            {
                self.free_blanks.insert(subject.clone());
            }
        }

        for triple in graph.iter() {
            let object = &triple.o;
            if object.is_blank()
                && !self.is_list_cell(object)
                && !self.nested_set.contains(object)
                && scope.in_links(object) == 1
                && scope.confined(object)
            {
                self.nested_set.insert(object.clone());
                self.nested.push(object.clone());
            }
        }
    }
}

/// The `rdf:first` value of `cell` if it is a well-formed list cell: a
/// confined blank node with exactly one `rdf:first`, one `rdf:rest` and
/// nothing else.
fn valid_cell(
    scope: Scope<'_>,
    graph: &Graph,
    cell: &Term,
    first: &Term,
    rest: &Term,
) -> Option<Term> {
    if !cell.is_blank() || graph.count(Some(cell), None, None) != 2 {
        return None;
    }
    graph.triple1(Some(cell), Some(rest), None)?;
    let item = graph.triple1(Some(cell), Some(first), None)?.o.clone();
    scope.confined(cell).then_some(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ex(local: &str) -> Term {
        Term::iri(format!("http://example.org/{}", local))
    }

    fn first() -> Term {
        Term::iri(rdf::FIRST)
    }

    fn rest() -> Term {
        Term::iri(rdf::REST)
    }

    fn nil() -> Term {
        Term::iri(rdf::NIL)
    }

    /// `_:l1 (1) -> _:l2 (2) -> nil`
    fn add_list(g: &mut Graph) {
        g.add_triple(Term::blank("l1"), first(), Term::integer(1));
        g.add_triple(Term::blank("l1"), rest(), Term::blank("l2"));
        g.add_triple(Term::blank("l2"), first(), Term::integer(2));
        g.add_triple(Term::blank("l2"), rest(), nil());
    }

    #[test]
    fn test_nested_list() {
        let mut g = Graph::new();
        g.add_triple(ex("s"), ex("p"), Term::blank("l1"));
        add_list(&mut g);

        let a = Analysis::new(Scope::Graph(&g));
        let list = a.list(&Term::blank("l1")).unwrap();
        assert_eq!(list.kind, ListKind::Nested);
        assert_eq!(list.items, vec![Term::integer(1), Term::integer(2)]);
        assert!(a.is_list_cell(&Term::blank("l2")));
        assert_eq!(a.list_head_of(&Term::blank("l2")), Some(&Term::blank("l1")));
        assert!(!a.is_nested(&Term::blank("l1")));
    }

    #[test]
    fn test_shared_and_free_lists() {
        let mut g = Graph::new();
        g.add_triple(ex("s"), ex("p"), Term::blank("l1"));
        g.add_triple(ex("t"), ex("p"), Term::blank("l1"));
        add_list(&mut g);
        let a = Analysis::new(Scope::Graph(&g));
        assert_eq!(a.list(&Term::blank("l1")).unwrap().kind, ListKind::Shared);

        let mut g = Graph::new();
        add_list(&mut g);
        let a = Analysis::new(Scope::Graph(&g));
        assert_eq!(a.list(&Term::blank("l1")).unwrap().kind, ListKind::Free);
        assert_eq!(a.list_heads(ListKind::Free).count(), 1);
        assert!(!a.is_free_blank(&Term::blank("l1")));
    }

    #[test]
    fn test_malformed_cell_stops_walk() {
        let mut g = Graph::new();
        g.add_triple(ex("s"), ex("p"), Term::blank("l1"));
        add_list(&mut g);
        // An extra property disqualifies the head cell
        g.add_triple(Term::blank("l1"), ex("note"), Term::string("x"));

        let a = Analysis::new(Scope::Graph(&g));
        assert!(a.list(&Term::blank("l1")).is_none());
        let tail = a.list(&Term::blank("l2")).unwrap();
        assert_eq!(tail.kind, ListKind::Nested);
        assert_eq!(tail.items, vec![Term::integer(2)]);
        assert!(!a.is_list_cell(&Term::blank("l1")));
        assert!(a.is_nested(&Term::blank("l1")));
    }

    #[test]
    fn test_iri_cells_are_not_lists() {
        let mut g = Graph::new();
        g.add_triple(ex("cell"), first(), Term::integer(1));
        g.add_triple(ex("cell"), rest(), nil());
        let a = Analysis::new(Scope::Graph(&g));
        assert!(a.list(&ex("cell")).is_none());
    }

    #[test]
    fn test_free_and_nested_blanks() {
        let mut g = Graph::new();
        g.add_triple(Term::blank("free"), ex("p"), Term::blank("inner"));
        g.add_triple(Term::blank("inner"), ex("q"), Term::string("x"));
        g.add_triple(ex("a"), ex("p"), Term::blank("shared"));
        g.add_triple(ex("b"), ex("p"), Term::blank("shared"));

        let a = Analysis::new(Scope::Graph(&g));
        assert!(a.is_free_blank(&Term::blank("free")));
        assert!(a.is_nested(&Term::blank("inner")));
        assert!(!a.is_nested(&Term::blank("shared")));
        assert!(!a.is_free_blank(&Term::blank("shared")));
        assert_eq!(a.nested(), &[Term::blank("inner")]);
    }

    #[test]
    fn test_dataset_confinement() {
        let mut ds = Dataset::new();
        let g1 = ex("g1");
        let g2 = ex("g2");
        ds.graph_mut(Some(&g1))
            .add_triple(ex("s"), ex("p"), Term::blank("x"));
        ds.graph_mut(Some(&g2))
            .add_triple(Term::blank("x"), ex("q"), Term::string("v"));
        ds.graph_mut(Some(&g1))
            .add_triple(ex("s"), ex("p"), Term::blank("y"));

        let a = Analysis::new(Scope::Dataset {
            dataset: &ds,
            name: Some(&g1),
        });
        assert!(!a.is_nested(&Term::blank("x")));
        assert!(a.is_nested(&Term::blank("y")));

        let b = Analysis::new(Scope::Dataset {
            dataset: &ds,
            name: Some(&g2),
        });
        assert!(!b.is_free_blank(&Term::blank("x")));
    }
}
