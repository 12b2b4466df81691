//! Total order over object terms, refined for literals.
//!
//! The resulting sequence is: IRIs, language-tagged strings (by tag, then
//! collated text), plain strings (collated), numbers and other comparable
//! values (by value), everything else (by datatype IRI, then lexical form).
//! Blank nodes come last and are not ordered among themselves here.

use std::cmp::Ordering;
use std::sync::Arc;

use fluree_graph_ir::{Term, ValueSpace};

use super::term::compare_identity;
use super::value::compare_values;
use super::TermComparator;
use crate::collation::Collation;

/// Compare two terms using `collation` for string text.
pub fn compare(a: &Term, b: &Term, collation: &dyn Collation) -> Ordering {
    if let Some(ord) = compare_identity(a, b).decided() {
        return ord;
    }

    let ((lex_a, dt_a, lang_a), (lex_b, dt_b, lang_b)) = match (a.as_literal(), b.as_literal()) {
        (Some(x), Some(y)) => (x, y),
        (Some(_), None) => return Ordering::Less,
        (None, Some(_)) => return Ordering::Greater,
        // Two distinct blank nodes
        (None, None) => return Ordering::Equal,
    };

    match (lang_a, lang_b) {
        (Some(x), Some(y)) => {
            return x
                .cmp(y)
                .then_with(|| collation.compare(lex_a, lex_b));
        }
        (Some(_), None) => return Ordering::Less,
        (None, Some(_)) => return Ordering::Greater,
        (None, None) => {}
    }

    match (dt_a.is_xsd_string(), dt_b.is_xsd_string()) {
        (true, true) => return collation.compare(lex_a, lex_b),
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }

    let (space_a, space_b) = (dt_a.value_space(), dt_b.value_space());
    if space_a == space_b {
        if let Some(ord) = compare_values(space_a, lex_a, lex_b) {
            if ord != Ordering::Equal {
                return ord;
            }
        }
    } else {
        let numeric_a = space_a == ValueSpace::Numeric;
        let numeric_b = space_b == ValueSpace::Numeric;
        if numeric_a != numeric_b {
            return if numeric_a {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
    }

    dt_a.as_iri()
        .cmp(dt_b.as_iri())
        .then_with(|| lex_a.cmp(lex_b))
}

/// The default literal ordering as an injectable comparator.
#[derive(Clone)]
pub struct LiteralOrder {
    collation: Arc<dyn Collation>,
}

impl LiteralOrder {
    /// Create a literal ordering over `collation`.
    pub fn new(collation: Arc<dyn Collation>) -> Self {
        Self { collation }
    }
}

impl std::fmt::Debug for LiteralOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiteralOrder").finish_non_exhaustive()
    }
}

impl TermComparator for LiteralOrder {
    fn compare(&self, a: &Term, b: &Term) -> Ordering {
        compare(a, b, self.collation.as_ref())
    }
}
