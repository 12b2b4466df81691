//! Ordering and layout policies
//!
//! An `OrderingPolicy` is built once per render call and passed down by
//! reference. It owns every knob that influences the output: string
//! collation, predicate priorities, the predicates consulted first when
//! ordering blank nodes, and the text layout.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use fluree_graph_ir::Term;
use fluree_vocab::{rdf, rdfs};
use serde::Deserialize;

use crate::collation::{CodepointCollation, Collation, RootCollation};
use crate::error::Result;
use crate::order::{literal, PredicateOrder, TermComparator};

/// Default priority for predicates outside any configured namespace
pub const DEFAULT_NAMESPACE_PRIORITY: u32 = 2;

/// Text layout parameters
///
/// Column values are measured from the start of the enclosing block.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutPolicy {
    /// Indentation of continuation lines in a subject block
    pub indent_base: usize,
    /// Column width reserved for predicates; objects start after it
    pub predicate_width: usize,
    /// Subjects wider than this start their predicates on a new line
    pub long_subject: usize,
    /// Predicates wider than this start their objects on a new line
    pub long_predicate: usize,
    /// Column at which `@prefix` namespaces start
    pub prefix_width: usize,
    /// One object per line instead of `a, b, c`
    pub objects_multi_line: bool,
    /// Put the closing `.` of a multi-line block on its own line
    pub dot_on_new_line: bool,
    /// Only declare prefixes that the body actually uses
    pub only_used_prefixes: bool,
    /// Indentation inside named graph blocks (TriG)
    pub named_graph_indent: usize,
    /// Wrap the default graph in `{ }` (TriG)
    pub default_graph_braces: bool,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self {
            indent_base: 4,
            predicate_width: 14,
            long_subject: 20,
            long_predicate: 30,
            prefix_width: 15,
            objects_multi_line: false,
            dot_on_new_line: false,
            only_used_prefixes: false,
            named_graph_indent: 4,
            default_graph_braces: false,
        }
    }
}

/// Ordering configuration for one render
#[derive(Clone)]
pub struct OrderingPolicy {
    collation: Arc<dyn Collation>,
    predicates: PredicateOrder,
    complex_predicates: Vec<Term>,
    layout: LayoutPolicy,
    literal_override: Option<Arc<dyn TermComparator>>,
    predicate_override: Option<Arc<dyn TermComparator>>,
}

impl std::fmt::Debug for OrderingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderingPolicy")
            .field("collation", &"<dyn Collation>")
            .field("predicates", &self.predicates)
            .field("complex_predicates", &self.complex_predicates)
            .field("layout", &self.layout)
            .field("literal_override", &self.literal_override.as_ref().map(|_| "<dyn>"))
            .field("predicate_override", &self.predicate_override.as_ref().map(|_| "<dyn>"))
            .finish()
    }
}

impl OrderingPolicy {
    /// Default policy with root-locale collation
    pub fn new() -> Result<Self> {
        Ok(Self::with_parts(Arc::new(RootCollation::new()?)))
    }

    /// Default policy with code point collation (no locale data needed)
    pub fn codepoint() -> Self {
        Self::with_parts(Arc::new(CodepointCollation))
    }

    fn with_parts(collation: Arc<dyn Collation>) -> Self {
        Self {
            collation,
            predicates: PredicateOrder::new(default_namespace_priorities(), DEFAULT_NAMESPACE_PRIORITY),
            complex_predicates: default_complex_predicates(),
            layout: LayoutPolicy::default(),
            literal_override: None,
            predicate_override: None,
        }
    }

    /// Use a different string collation
    pub fn with_collation(mut self, collation: Arc<dyn Collation>) -> Self {
        self.collation = collation;
        self
    }

    /// Replace the namespace -> priority map and default priority
    pub fn with_namespace_priorities(
        mut self,
        priorities: BTreeMap<String, u32>,
        default_priority: u32,
    ) -> Self {
        self.predicates = PredicateOrder::new(priorities, default_priority);
        self
    }

    /// Set the predicates consulted first when ordering blank nodes
    pub fn with_complex_predicates<I, S>(mut self, predicates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.complex_predicates = predicates.into_iter().map(Term::iri).collect();
        self
    }

    /// Set the layout
    pub fn with_layout(mut self, layout: LayoutPolicy) -> Self {
        self.layout = layout;
        self
    }

    /// Replace the literal ordering
    pub fn with_literal_order(mut self, order: Arc<dyn TermComparator>) -> Self {
        self.literal_override = Some(order);
        self
    }

    /// Replace the predicate ordering
    pub fn with_predicate_order(mut self, order: Arc<dyn TermComparator>) -> Self {
        self.predicate_override = Some(order);
        self
    }

    /// Layout parameters
    pub fn layout(&self) -> &LayoutPolicy {
        &self.layout
    }

    /// Predicates consulted first by the complex-object comparator
    pub fn complex_predicates(&self) -> &[Term] {
        &self.complex_predicates
    }

    /// String collation
    pub fn collation(&self) -> &dyn Collation {
        self.collation.as_ref()
    }

    /// Compare two object terms (literal ordering)
    pub fn compare_literals(&self, a: &Term, b: &Term) -> Ordering {
        match &self.literal_override {
            Some(order) => order.compare(a, b),
            None => literal::compare(a, b, self.collation.as_ref()),
        }
    }

    /// Compare two predicates
    pub fn compare_predicates(&self, a: &Term, b: &Term) -> Ordering {
        match &self.predicate_override {
            Some(order) => order.compare(a, b),
            None => self.predicates.compare(a, b),
        }
    }
}

fn default_namespace_priorities() -> BTreeMap<String, u32> {
    [rdf::NAMESPACE, rdfs::NAMESPACE]
        .into_iter()
        .map(|ns| (ns.to_string(), 1))
        .collect()
}

fn default_complex_predicates() -> Vec<Term> {
    vec![Term::iri(rdf::TYPE), Term::iri(rdfs::LABEL)]
}

/// String collation selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollationKind {
    /// Unicode root locale
    #[default]
    Root,
    /// Unicode code points
    Codepoint,
}

/// `[ordering]` section of a configuration file
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OrderingConfig {
    /// String collation
    pub collation: CollationKind,
    /// Priority for predicates outside every configured namespace
    pub namespace_default_priority: Option<u32>,
    /// Namespace -> priority entries, merged over the defaults
    pub namespace_priorities: BTreeMap<String, u32>,
    /// Predicates consulted first when ordering blank nodes
    pub complex_predicates: Option<Vec<String>>,
}

/// Deserializable policy configuration
///
/// Every key is optional; missing keys keep the defaults.
///
/// # Example
///
/// ```
/// use fluree_graph_format::PolicyConfig;
///
/// let config = PolicyConfig::default();
/// let policy = config.into_policy().unwrap();
/// assert_eq!(policy.layout().indent_base, 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Ordering settings
    pub ordering: OrderingConfig,
    /// Layout settings
    pub layout: LayoutPolicy,
}

impl PolicyConfig {
    /// Build the policy this configuration describes
    pub fn into_policy(self) -> Result<OrderingPolicy> {
        let policy = match self.ordering.collation {
            CollationKind::Root => OrderingPolicy::new()?,
            CollationKind::Codepoint => OrderingPolicy::codepoint(),
        };

        let mut priorities = default_namespace_priorities();
        priorities.extend(self.ordering.namespace_priorities);
        let default_priority = self
            .ordering
            .namespace_default_priority
            .unwrap_or(DEFAULT_NAMESPACE_PRIORITY);

        let mut policy = policy
            .with_namespace_priorities(priorities, default_priority)
            .with_layout(self.layout);
        if let Some(predicates) = self.ordering.complex_predicates {
            policy = policy.with_complex_predicates(predicates);
        }
        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = OrderingPolicy::codepoint();
        assert_eq!(policy.layout(), &LayoutPolicy::default());
        assert_eq!(
            policy.complex_predicates(),
            &[Term::iri(rdf::TYPE), Term::iri(rdfs::LABEL)]
        );
        assert_eq!(
            policy.compare_predicates(&Term::iri(rdfs::LABEL), &Term::iri("http://a/b")),
            Ordering::Less
        );
    }

    #[test]
    fn test_config_overrides() {
        let mut config = PolicyConfig::default();
        config.ordering.collation = CollationKind::Codepoint;
        config.ordering.namespace_default_priority = Some(0);
        config.ordering.complex_predicates = Some(vec!["http://a/key".to_string()]);
        config.layout.indent_base = 2;

        let policy = config.into_policy().unwrap();
        assert_eq!(policy.layout().indent_base, 2);
        assert_eq!(policy.complex_predicates(), &[Term::iri("http://a/key")]);
        // Custom namespaces now outrank rdfs:
        assert_eq!(
            policy.compare_predicates(&Term::iri("http://a/b"), &Term::iri(rdfs::LABEL)),
            Ordering::Less
        );
        // ...but never rdf:type
        assert_eq!(
            policy.compare_predicates(&Term::iri("http://a/b"), &Term::iri(rdf::TYPE)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_literal_override() {
        struct Reverse;
        impl TermComparator for Reverse {
            fn compare(&self, a: &Term, b: &Term) -> Ordering {
                b.cmp(a)
            }
        }

        let policy = OrderingPolicy::codepoint().with_literal_order(Arc::new(Reverse));
        assert_eq!(
            policy.compare_literals(&Term::string("a"), &Term::string("b")),
            Ordering::Greater
        );
    }
}
