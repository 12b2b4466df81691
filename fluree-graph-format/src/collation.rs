//! String collation for literal ordering.
//!
//! Both collations are total: two strings compare equal only if they are
//! identical, so sorted output never depends on input order.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};

use crate::error::{FormatError, Result};

/// Compares two strings.
pub trait Collation {
    /// Order `a` relative to `b`.
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Unicode root-locale collation (tertiary strength) with a code point
/// tiebreak.
pub struct RootCollation {
    collator: Collator,
}

impl RootCollation {
    /// Build the root collator from the compiled-in CLDR data.
    pub fn new() -> Result<Self> {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        let collator = Collator::try_new(&Default::default(), options)
            .map_err(|e| FormatError::Collation(e.to_string()))?;
        Ok(Self { collator })
    }
}

impl std::fmt::Debug for RootCollation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RootCollation")
    }
}

impl Collation for RootCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b).then_with(|| a.cmp(b))
    }
}

/// Plain code point order.
#[derive(Clone, Copy, Debug, Default)]
pub struct CodepointCollation;

impl Collation for CodepointCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_collation_is_case_and_accent_aware() {
        let c = RootCollation::new().unwrap();
        // Code point order would put "B" before "a"
        assert_eq!(c.compare("a", "B"), Ordering::Less);
        assert_eq!(c.compare("résumé", "resumes"), Ordering::Less);
        assert_eq!(c.compare("abc", "abd"), Ordering::Less);
    }

    #[test]
    fn test_root_collation_is_total() {
        let c = RootCollation::new().unwrap();
        assert_eq!(c.compare("x", "x"), Ordering::Equal);
        // Canonically equivalent but distinct strings still order
        assert_ne!(c.compare("e\u{301}", "\u{e9}"), Ordering::Equal);
    }

    #[test]
    fn test_codepoint_collation() {
        assert_eq!(CodepointCollation.compare("B", "a"), Ordering::Less);
    }
}
