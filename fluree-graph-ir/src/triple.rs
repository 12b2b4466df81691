//! RDF triple: subject, predicate, object

use crate::Term;
use serde::{Deserialize, Serialize};

/// A single RDF statement
///
/// The subject is an IRI or blank node, the predicate is always an IRI.
/// Parsers uphold this; the type does not enforce it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    /// Subject (IRI or blank node)
    pub s: Term,
    /// Predicate (IRI)
    pub p: Term,
    /// Object (any term)
    pub o: Term,
}

impl Triple {
    /// Create a new triple
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        Self { s, p, o }
    }

    /// Check whether this triple matches an optional-term pattern
    pub fn matches(&self, s: Option<&Term>, p: Option<&Term>, o: Option<&Term>) -> bool {
        s.is_none_or(|s| *s == self.s) && p.is_none_or(|p| *p == self.p) && o.is_none_or(|o| *o == self.o)
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.s, self.p, self.o)
    }
}
