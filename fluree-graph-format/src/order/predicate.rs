//! Priority-bucketed ordering of predicates within a subject.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use fluree_graph_ir::Term;
use fluree_vocab::rdf;

use super::TermComparator;

/// Priority of `rdf:type`; it is always written first.
pub const TYPE_PRIORITY: u32 = 0;

/// Predicate ordering by namespace priority, then IRI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredicateOrder {
    namespace_priorities: BTreeMap<String, u32>,
    default_priority: u32,
}

impl PredicateOrder {
    /// Create an ordering from a namespace -> priority map.
    pub fn new(namespace_priorities: BTreeMap<String, u32>, default_priority: u32) -> Self {
        Self {
            namespace_priorities,
            default_priority,
        }
    }

    /// Priority bucket for a predicate IRI.
    ///
    /// The longest configured namespace that prefixes the IRI decides.
    pub fn priority(&self, iri: &str) -> u32 {
        if iri == rdf::TYPE {
            return TYPE_PRIORITY;
        }
        self.namespace_priorities
            .iter()
            .filter(|(ns, _)| iri.starts_with(ns.as_str()))
            .max_by_key(|(ns, _)| ns.len())
            .map_or(self.default_priority, |(_, priority)| *priority)
    }
}

impl TermComparator for PredicateOrder {
    fn compare(&self, a: &Term, b: &Term) -> Ordering {
        match (a.as_iri(), b.as_iri()) {
            // rdf:type stays ahead even of namespaces configured at priority 0
            (Some(x), Some(y)) => (y == rdf::TYPE)
                .cmp(&(x == rdf::TYPE))
                .then_with(|| self.priority(x).cmp(&self.priority(y)))
                .then_with(|| x.cmp(y)),
            _ => a.cmp(b),
        }
    }
}
