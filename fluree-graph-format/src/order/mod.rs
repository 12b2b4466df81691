//! Orderings over graph terms.
//!
//! Each layer refines the one below it:
//!
//! - [`compare_identity`] orders IRIs and leaves the rest undecided
//! - [`literal::compare`] totally orders object terms, refining literals
//! - [`PredicateOrder`] buckets predicates by namespace priority
//! - [`ComplexComparator`] orders blank nodes by their outgoing structure

mod complex;
pub mod literal;
mod predicate;
mod sort;
mod term;
mod value;

pub use complex::ComplexComparator;
pub use literal::LiteralOrder;
pub use predicate::{PredicateOrder, TYPE_PRIORITY};
pub use sort::{merge_sort_by, pick_next};
pub use term::{compare_identity, TermOrder};
pub use value::compare_values;

use std::cmp::Ordering;

use fluree_graph_ir::Term;

/// A pluggable total order over terms.
///
/// Implementations replace the built-in literal or predicate ordering via
/// `OrderingPolicy::with_literal_order` / `with_predicate_order`.
pub trait TermComparator {
    /// Order `a` relative to `b`.
    fn compare(&self, a: &Term, b: &Term) -> Ordering;
}
