//! Prefix tables for IRI abbreviation.

use std::collections::BTreeMap;

use crate::lex::chars::{is_pn_local, is_pn_prefix};

/// Read access to prefix label -> namespace IRI mappings.
///
/// `abbreviate` is the only call made while writing terms, so wrappers that
/// want to observe which prefixes a document needs only have to intercept it.
pub trait PrefixMap {
    /// Namespace IRI bound to `label`.
    fn lookup(&self, label: &str) -> Option<&str>;

    /// All bindings, sorted by label.
    fn entries(&self) -> Vec<(&str, &str)>;

    /// Split `iri` into `(label, local)` such that `label:local` is a valid
    /// prefixed name, or `None` if no binding applies.
    fn abbreviate<'s, 'i>(&'s self, iri: &'i str) -> Option<(&'s str, &'i str)>;

    /// Whether `label` is bound.
    fn contains_prefix(&self, label: &str) -> bool {
        self.lookup(label).is_some()
    }
}

/// Ordered prefix table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixTable {
    entries: BTreeMap<String, String>,
}

impl PrefixTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `label` to `namespace`, replacing any previous binding.
    pub fn insert(&mut self, label: impl Into<String>, namespace: impl Into<String>) {
        self.entries.insert(label.into(), namespace.into());
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no bindings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&BTreeMap<String, String>> for PrefixTable {
    fn from(map: &BTreeMap<String, String>) -> Self {
        Self {
            entries: map.clone(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PrefixTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (label, namespace) in iter {
            table.insert(label, namespace);
        }
        table
    }
}

impl PrefixMap for PrefixTable {
    fn lookup(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    fn entries(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|(label, ns)| (label.as_str(), ns.as_str()))
            .collect()
    }

    /// Longest matching namespace wins; on equal length the smallest label.
    fn abbreviate<'s, 'i>(&'s self, iri: &'i str) -> Option<(&'s str, &'i str)> {
        let mut best: Option<(&'s str, &'i str, usize)> = None;
        for (label, ns) in &self.entries {
            if ns.is_empty() || !is_pn_prefix(label) {
                continue;
            }
            let Some(local) = iri.strip_prefix(ns.as_str()) else {
                continue;
            };
            if !is_pn_local(local) {
                continue;
            }
            if best.is_none_or(|(_, _, len)| ns.len() > len) {
                best = Some((label, local, ns.len()));
            }
        }
        best.map(|(label, local, _)| (label, local))
    }
}
