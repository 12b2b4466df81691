//! Turtle surface syntax for single terms.
//!
//! `TermFormatter` is the only place that knows how IRIs, literals and blank
//! node labels are spelled. Blank nodes are relabelled `_:b0`, `_:b1`, ... in
//! the order they are first written, so load-time identifiers never leak.

use std::collections::HashMap;
use std::fmt::Write;

use fluree_graph_ir::{BlankId, Datatype, Term};
use fluree_vocab::xsd;

use crate::iri;
use crate::prefix::PrefixMap;

/// Renders terms as Turtle text.
pub struct TermFormatter<'a> {
    prefixes: &'a dyn PrefixMap,
    base: Option<&'a str>,
    blank_labels: HashMap<BlankId, usize>,
}

impl std::fmt::Debug for TermFormatter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermFormatter")
            .field("prefixes", &"<dyn PrefixMap>")
            .field("base", &self.base)
            .field("blank_labels", &self.blank_labels.len())
            .finish()
    }
}

impl<'a> TermFormatter<'a> {
    /// Create a formatter abbreviating through `prefixes`.
    pub fn new(prefixes: &'a dyn PrefixMap) -> Self {
        Self {
            prefixes,
            base: None,
            blank_labels: HashMap::new(),
        }
    }

    /// Write IRIs relative to `base` where that is unambiguous.
    pub fn with_base(mut self, base: Option<&'a str>) -> Self {
        self.base = base;
        self
    }

    /// Format any term.
    pub fn term(&mut self, term: &Term) -> String {
        match term {
            Term::Iri(iri) => self.iri(iri),
            Term::BlankNode(id) => self.blank(id),
            Term::Literal {
                lexical,
                datatype,
                language,
            } => self.literal(lexical, datatype, language.as_deref()),
        }
    }

    /// Format an IRI: prefixed name, then relative reference, then `<iri>`.
    pub fn iri(&self, iri: &str) -> String {
        if let Some((label, local)) = self.prefixes.abbreviate(iri) {
            return format!("{}:{}", label, local);
        }
        let reference = self
            .base
            .and_then(|base| iri::relativize(base, iri))
            .unwrap_or(iri);
        let mut out = String::with_capacity(reference.len() + 2);
        out.push('<');
        for c in reference.chars() {
            match c {
                '\u{00}'..='\u{20}' | '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => {
                    let _ = write!(out, "\\u{:04X}", c as u32);
                }
                _ => out.push(c),
            }
        }
        out.push('>');
        out
    }

    /// Label for a blank node, allocated on first use.
    pub fn blank(&mut self, id: &BlankId) -> String {
        let next = self.blank_labels.len();
        let index = *self.blank_labels.entry(id.clone()).or_insert(next);
        format!("_:b{}", index)
    }

    /// Position of `term`'s label in output order, if it is a blank node
    /// that has already been written.
    pub fn blank_index(&self, term: &Term) -> Option<usize> {
        term.as_blank()
            .and_then(|id| self.blank_labels.get(id))
            .copied()
    }

    /// Format a literal. Numbers and booleans whose lexical form is valid
    /// Turtle syntax for their datatype are written bare.
    pub fn literal(&self, lexical: &str, datatype: &Datatype, language: Option<&str>) -> String {
        if let Some(lang) = language {
            return format!("{}@{}", quote(lexical), lang);
        }
        let bare = match datatype.as_iri() {
            xsd::INTEGER => is_turtle_integer(lexical),
            xsd::DECIMAL => is_turtle_decimal(lexical),
            xsd::DOUBLE => is_turtle_double(lexical),
            xsd::BOOLEAN => lexical == "true" || lexical == "false",
            _ => false,
        };
        if bare {
            lexical.to_string()
        } else if datatype.is_xsd_string() {
            quote(lexical)
        } else {
            format!("{}^^{}", quote(lexical), self.iri(datatype.as_iri()))
        }
    }
}

/// Double-quoted string with Turtle escapes.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn strip_sign(s: &str) -> &str {
    s.strip_prefix(['+', '-']).unwrap_or(s)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `[+-]? [0-9]+`
fn is_turtle_integer(s: &str) -> bool {
    all_digits(strip_sign(s))
}

/// `[+-]? [0-9]* '.' [0-9]+`
fn is_turtle_decimal(s: &str) -> bool {
    match strip_sign(s).split_once('.') {
        Some((int, frac)) => (int.is_empty() || all_digits(int)) && all_digits(frac),
        None => false,
    }
}

/// `[+-]? [0-9]* ('.' [0-9]+)? [eE] [+-]? [0-9]+`
///
/// Stricter than the grammar: `1.e3` is left quoted.
fn is_turtle_double(s: &str) -> bool {
    let Some(pos) = s.find(['e', 'E']) else {
        return false;
    };
    let (mantissa, exponent) = (strip_sign(&s[..pos]), &s[pos + 1..]);
    if !is_turtle_integer(exponent) {
        return false;
    }
    match mantissa.split_once('.') {
        Some((int, frac)) => (int.is_empty() || all_digits(int)) && all_digits(frac),
        None => all_digits(mantissa),
    }
}
