//! Structural ordering of blank-node objects.
//!
//! Two blank nodes are ordered by what they say: first by the policy's
//! priority predicates, then by all of their properties. Recursion into
//! blank-valued properties is limited to one extra level, which also keeps
//! cyclic structures finite.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use fluree_graph_ir::{Graph, Term};

use super::merge_sort_by;
use super::term::compare_identity;
use crate::policy::OrderingPolicy;

/// Orders subjects and complex objects within one graph.
pub struct ComplexComparator<'a> {
    graph: &'a Graph,
    policy: &'a OrderingPolicy,
}

impl<'a> ComplexComparator<'a> {
    /// Create a comparator over `graph`.
    pub fn new(graph: &'a Graph, policy: &'a OrderingPolicy) -> Self {
        Self { graph, policy }
    }

    /// Total ordering used for sorting; ties are `Equal`.
    pub fn order(&self, a: &Term, b: &Term) -> Ordering {
        self.compare(a, b, true).unwrap_or(Ordering::Equal)
    }

    /// Compare two nodes.
    ///
    /// Returns `None` for a full tie when `allow_recurse` is false, so that
    /// an inner tie does not end the outer comparison.
    pub fn compare(&self, a: &Term, b: &Term, allow_recurse: bool) -> Option<Ordering> {
        if let Some(ord) = compare_identity(a, b).decided() {
            return Some(ord);
        }

        for predicate in self.policy.complex_predicates() {
            let left = self.graph.triple1(Some(a), Some(predicate), None);
            let right = self.graph.triple1(Some(b), Some(predicate), None);
            match (left, right) {
                (None, None) => {}
                (Some(_), None) => return Some(Ordering::Less),
                (None, Some(_)) => return Some(Ordering::Greater),
                (Some(x), Some(y)) => {
                    if let Some(ord) = self.compare_objects(&x.o, &y.o, allow_recurse) {
                        return Some(ord);
                    }
                }
            }
        }

        let left = self.property_groups(a);
        let right = self.property_groups(b);

        // Walk the side with more predicates; with equal counts, walk both
        let keys: Vec<&str> = match left.len().cmp(&right.len()) {
            Ordering::Greater => left.keys().copied().collect(),
            Ordering::Less => right.keys().copied().collect(),
            Ordering::Equal => {
                let mut keys: Vec<&str> = left.keys().chain(right.keys()).copied().collect();
                keys.sort_unstable();
                keys.dedup();
                keys
            }
        };

        for key in keys {
            match (left.get(key), right.get(key)) {
                (Some(_), None) => return Some(Ordering::Less),
                (None, Some(_)) => return Some(Ordering::Greater),
                (None, None) => {}
                (Some(xs), Some(ys)) => {
                    for (x, y) in xs.iter().zip(ys) {
                        if let Some(ord) = self.compare_objects(x, y, allow_recurse) {
                            return Some(ord);
                        }
                    }
                    if xs.len() != ys.len() {
                        return Some(xs.len().cmp(&ys.len()));
                    }
                }
            }
        }

        allow_recurse.then_some(Ordering::Equal)
    }

    /// Compare two property values; `None` means no decision.
    fn compare_objects(&self, x: &Term, y: &Term, allow_recurse: bool) -> Option<Ordering> {
        let ord = match compare_identity(x, y).decided() {
            Some(ord) => ord,
            None if x.is_blank() && y.is_blank() => {
                if !allow_recurse {
                    return None;
                }
                self.compare(x, y, false)?
            }
            None => self.policy.compare_literals(x, y),
        };
        (ord != Ordering::Equal).then_some(ord)
    }

    /// Objects of `node`, grouped by predicate IRI and sorted.
    fn property_groups(&self, node: &Term) -> BTreeMap<&'a str, Vec<&'a Term>> {
        let mut groups: BTreeMap<&'a str, Vec<&'a Term>> = BTreeMap::new();
        for triple in self.graph.find(Some(node), None, None) {
            if let Some(predicate) = triple.p.as_iri() {
                groups.entry(predicate).or_default().push(&triple.o);
            }
        }
        for objects in groups.values_mut() {
            merge_sort_by(objects, |x, y| self.policy.compare_literals(x, y));
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluree_vocab::{rdf, rdfs};

    fn ex(local: &str) -> Term {
        Term::iri(format!("http://example.org/{}", local))
    }

    fn policy() -> OrderingPolicy {
        OrderingPolicy::codepoint()
    }

    #[test]
    fn test_self_compare_is_equal() {
        let mut g = Graph::new();
        g.add_triple(Term::blank("a"), ex("p"), Term::string("x"));
        let policy = policy();
        let cmp = ComplexComparator::new(&g, &policy);
        let a = Term::blank("a");
        assert_eq!(cmp.compare(&a, &a, true), Some(Ordering::Equal));
        assert_eq!(cmp.compare(&a, &a, false), Some(Ordering::Equal));
    }

    #[test]
    fn test_ordinary_properties_decide() {
        let mut g = Graph::new();
        g.add_triple(Term::blank("b1"), ex("p"), Term::string("b"));
        g.add_triple(Term::blank("b2"), ex("p"), Term::string("a"));
        let policy = policy();
        let cmp = ComplexComparator::new(&g, &policy);

        assert_eq!(
            cmp.order(&Term::blank("b2"), &Term::blank("b1")),
            Ordering::Less
        );
    }

    #[test]
    fn test_priority_predicate_overrides() {
        let mut g = Graph::new();
        g.add_triple(Term::blank("b1"), ex("p"), Term::string("b"));
        g.add_triple(Term::blank("b2"), ex("p"), Term::string("a"));
        g.add_triple(Term::blank("b1"), Term::iri(rdfs::LABEL), Term::string("1"));
        g.add_triple(Term::blank("b2"), Term::iri(rdfs::LABEL), Term::string("2"));
        let policy = policy();
        let cmp = ComplexComparator::new(&g, &policy);

        assert_eq!(
            cmp.order(&Term::blank("b1"), &Term::blank("b2")),
            Ordering::Less
        );
    }

    #[test]
    fn test_having_priority_predicate_sorts_first() {
        let mut g = Graph::new();
        g.add_triple(Term::blank("typed"), Term::iri(rdf::TYPE), ex("C"));
        g.add_triple(Term::blank("plain"), ex("p"), Term::string("a"));
        let policy = policy();
        let cmp = ComplexComparator::new(&g, &policy);

        assert_eq!(
            cmp.order(&Term::blank("typed"), &Term::blank("plain")),
            Ordering::Less
        );
        assert_eq!(
            cmp.order(&Term::blank("plain"), &Term::blank("typed")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_recursion_into_blank_values() {
        let mut g = Graph::new();
        g.add_triple(Term::blank("a"), ex("p"), Term::blank("a1"));
        g.add_triple(Term::blank("a1"), ex("q"), Term::integer(2));
        g.add_triple(Term::blank("b"), ex("p"), Term::blank("b1"));
        g.add_triple(Term::blank("b1"), ex("q"), Term::integer(1));
        let policy = policy();
        let cmp = ComplexComparator::new(&g, &policy);

        assert_eq!(
            cmp.compare(&Term::blank("b"), &Term::blank("a"), true),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_structural_tie() {
        let mut g = Graph::new();
        g.add_triple(Term::blank("a"), ex("p"), Term::string("x"));
        g.add_triple(Term::blank("b"), ex("p"), Term::string("x"));
        let policy = policy();
        let cmp = ComplexComparator::new(&g, &policy);

        let (a, b) = (Term::blank("a"), Term::blank("b"));
        assert_eq!(cmp.compare(&a, &b, true), Some(Ordering::Equal));
        assert_eq!(cmp.compare(&a, &b, false), None);
    }

    #[test]
    fn test_cycles_terminate() {
        let mut g = Graph::new();
        g.add_triple(Term::blank("a"), ex("p"), Term::blank("b"));
        g.add_triple(Term::blank("b"), ex("p"), Term::blank("a"));
        let policy = policy();
        let cmp = ComplexComparator::new(&g, &policy);

        assert_eq!(
            cmp.compare(&Term::blank("a"), &Term::blank("b"), true),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_more_predicates_decides_presence() {
        let mut g = Graph::new();
        g.add_triple(Term::blank("a"), ex("p"), Term::string("x"));
        g.add_triple(Term::blank("b"), ex("p"), Term::string("x"));
        g.add_triple(Term::blank("b"), ex("q"), Term::string("y"));
        let policy = policy();
        let cmp = ComplexComparator::new(&g, &policy);

        assert_eq!(
            cmp.order(&Term::blank("b"), &Term::blank("a")),
            Ordering::Less
        );
        assert_eq!(
            cmp.order(&Term::blank("a"), &Term::blank("b")),
            Ordering::Greater
        );
    }
}
