//! Identity ordering over atomic terms.

use std::cmp::Ordering;

use fluree_graph_ir::Term;

/// Outcome of comparing two terms by identity alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermOrder {
    /// The pair is ordered at this layer
    Decided(Ordering),
    /// Literals and distinct blank nodes need a richer comparator
    Incomparable,
}

impl TermOrder {
    /// The decided ordering, if any.
    pub fn decided(self) -> Option<Ordering> {
        match self {
            TermOrder::Decided(ord) => Some(ord),
            TermOrder::Incomparable => None,
        }
    }
}

/// Compare two terms by identity.
///
/// IRIs are totally ordered by their string and precede every other term.
/// A blank node equals itself. Everything else is left to the literal and
/// structural comparators.
pub fn compare_identity(a: &Term, b: &Term) -> TermOrder {
    match (a, b) {
        (Term::Iri(x), Term::Iri(y)) => TermOrder::Decided(x.cmp(y)),
        (Term::Iri(_), _) => TermOrder::Decided(Ordering::Less),
        (_, Term::Iri(_)) => TermOrder::Decided(Ordering::Greater),
        (Term::BlankNode(x), Term::BlankNode(y)) if x == y => TermOrder::Decided(Ordering::Equal),
        _ => TermOrder::Incomparable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iris_by_string() {
        let a = Term::iri("http://example.org/a");
        let b = Term::iri("http://example.org/b");
        assert_eq!(compare_identity(&a, &b), TermOrder::Decided(Ordering::Less));
        assert_eq!(compare_identity(&b, &a), TermOrder::Decided(Ordering::Greater));
        assert_eq!(compare_identity(&a, &a), TermOrder::Decided(Ordering::Equal));
    }

    #[test]
    fn test_iri_precedes_blank_and_literal() {
        let iri = Term::iri("http://z");
        let blank = Term::blank("a");
        let lit = Term::string("a");
        assert_eq!(compare_identity(&iri, &blank).decided(), Some(Ordering::Less));
        assert_eq!(compare_identity(&lit, &iri).decided(), Some(Ordering::Greater));
    }

    #[test]
    fn test_blanks_and_literals_incomparable() {
        let b1 = Term::blank("b1");
        let b2 = Term::blank("b2");
        assert_eq!(compare_identity(&b1, &b2), TermOrder::Incomparable);
        assert_eq!(compare_identity(&b1, &b1).decided(), Some(Ordering::Equal));
        assert_eq!(
            compare_identity(&Term::string("a"), &Term::string("a")),
            TermOrder::Incomparable
        );
        assert_eq!(
            compare_identity(&b1, &Term::string("a")),
            TermOrder::Incomparable
        );
    }
}
