//! Prefix usage tracking for "only used prefixes" output.

use std::cell::RefCell;
use std::collections::BTreeSet;

use fluree_graph_turtle::PrefixMap;

/// Wraps a prefix map and records every label handed out by `abbreviate`.
pub struct UsageTracker<'a> {
    inner: &'a dyn PrefixMap,
    used: RefCell<BTreeSet<String>>,
}

impl<'a> UsageTracker<'a> {
    /// Track abbreviations made through `inner`.
    pub fn new(inner: &'a dyn PrefixMap) -> Self {
        Self {
            inner,
            used: RefCell::new(BTreeSet::new()),
        }
    }

    /// Bindings whose label has been used, sorted by label.
    pub fn used_entries(&self) -> Vec<(&'a str, &'a str)> {
        let used = self.used.borrow();
        self.inner
            .entries()
            .into_iter()
            .filter(|(label, _)| used.contains(*label))
            .collect()
    }
}

impl PrefixMap for UsageTracker<'_> {
    fn lookup(&self, label: &str) -> Option<&str> {
        self.inner.lookup(label)
    }

    fn entries(&self) -> Vec<(&str, &str)> {
        self.inner.entries()
    }

    fn abbreviate<'s, 'i>(&'s self, iri: &'i str) -> Option<(&'s str, &'i str)> {
        let (label, local) = self.inner.abbreviate(iri)?;
        self.used.borrow_mut().insert(label.to_string());
        Some((label, local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluree_graph_turtle::PrefixTable;

    #[test]
    fn test_records_used_labels() {
        let table: PrefixTable = [
            ("ex", "http://example.org/"),
            ("foaf", "http://xmlns.com/foaf/0.1/"),
            ("xsd", "http://www.w3.org/2001/XMLSchema#"),
        ]
        .into_iter()
        .collect();
        let tracker = UsageTracker::new(&table);

        assert_eq!(tracker.abbreviate("http://example.org/a"), Some(("ex", "a")));
        assert_eq!(tracker.abbreviate("http://nowhere.org/a"), None);
        tracker.abbreviate("http://www.w3.org/2001/XMLSchema#int");

        assert_eq!(
            tracker.used_entries(),
            vec![
                ("ex", "http://example.org/"),
                ("xsd", "http://www.w3.org/2001/XMLSchema#"),
            ]
        );
    }
}
