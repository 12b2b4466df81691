//! Subject-block rendering shared by the Turtle and TriG writers.
//!
//! [`GraphWriter`] prints the body of one graph: sorted subject blocks,
//! then shared lists, free lists, and finally any nested objects or nested
//! lists that the main pass could not reach (blank-node cycles). Every
//! triple of the graph is printed exactly once.

use std::cmp::Ordering;

use rustc_hash::FxHashSet;
use tracing::debug;

use fluree_graph_ir::{Graph, Term};
use fluree_graph_turtle::{PrefixMap, TermFormatter};
use fluree_vocab::rdf;

use crate::analyze::{Analysis, ListKind, Scope};
use crate::error::{FormatError, Result};
use crate::order::{merge_sort_by, pick_next, ComplexComparator};
use crate::policy::{LayoutPolicy, OrderingPolicy};
use crate::usage::UsageTracker;
use crate::writer::IndentedWriter;

/// Output buffer plus term formatter, shared by all graphs of a document.
pub(crate) struct Emitter<'p> {
    pub out: IndentedWriter,
    pub terms: TermFormatter<'p>,
}

impl<'p> Emitter<'p> {
    fn new(prefixes: &'p dyn PrefixMap, base: Option<&'p str>) -> Self {
        Self {
            out: IndentedWriter::new(),
            terms: TermFormatter::new(prefixes).with_base(base),
        }
    }
}

/// Render a complete document: header, blank line, body.
///
/// With `only_used_prefixes` the body is rendered first against a usage
/// tracker and the header lists only the prefixes it consulted.
pub(crate) fn render_document<F>(
    prefixes: &dyn PrefixMap,
    base: Option<&str>,
    layout: &LayoutPolicy,
    body: F,
) -> Result<String>
where
    F: FnOnce(&mut Emitter<'_>) -> Result<()>,
{
    if layout.only_used_prefixes {
        let tracker = UsageTracker::new(prefixes);
        let text = {
            let mut emitter = Emitter::new(&tracker, base);
            body(&mut emitter)?;
            emitter.out.into_string()
        };
        Ok(assemble(base, &tracker.used_entries(), layout, text))
    } else {
        let mut emitter = Emitter::new(prefixes, base);
        body(&mut emitter)?;
        let text = emitter.out.into_string();
        Ok(assemble(base, &prefixes.entries(), layout, text))
    }
}

fn assemble(
    base: Option<&str>,
    prefixes: &[(&str, &str)],
    layout: &LayoutPolicy,
    body: String,
) -> String {
    let mut header = IndentedWriter::new();
    if let Some(base) = base {
        header.print(&format!("@base <{}> .", base));
        header.println();
    }
    for (label, namespace) in prefixes {
        header.print(&format!("@prefix {}:", label));
        header.pad_to(layout.prefix_width);
        header.print(&format!("<{}> .", namespace));
        header.println();
    }
    debug!(prefixes = prefixes.len(), "wrote header");

    let mut doc = header.into_string();
    if !doc.is_empty() && !body.is_empty() {
        doc.push('\n');
    }
    doc.push_str(&body);
    doc
}

/// Blank nodes already labelled come first, in label order; everything
/// else ties.
pub(crate) fn label_order(terms: &TermFormatter<'_>, a: &Term, b: &Term) -> Ordering {
    match (terms.blank_index(a), terms.blank_index(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Writes the body of one graph.
pub(crate) struct GraphWriter<'a, 'w, 'p> {
    graph: &'a Graph,
    policy: &'a OrderingPolicy,
    layout: &'a LayoutPolicy,
    analysis: Analysis,
    cmp: ComplexComparator<'a>,
    emitter: &'w mut Emitter<'p>,
    written: FxHashSet<Term>,
    /// Indent of top-level lines (non-zero inside TriG graph blocks)
    block_indent: usize,
    blocks: usize,
}

impl<'a, 'w, 'p> GraphWriter<'a, 'w, 'p> {
    /// Prepare to write the graph selected by `scope`. Lines start at the
    /// emitter's current indent.
    pub fn new(
        scope: Scope<'a>,
        graph: &'a Graph,
        policy: &'a OrderingPolicy,
        emitter: &'w mut Emitter<'p>,
    ) -> Self {
        let block_indent = emitter.out.indent();
        Self {
            graph,
            policy,
            layout: policy.layout(),
            analysis: Analysis::new(scope),
            cmp: ComplexComparator::new(graph, policy),
            emitter,
            written: FxHashSet::default(),
            block_indent,
            blocks: 0,
        }
    }

    /// Write every triple of the graph.
    pub fn write(mut self) -> Result<()> {
        let subjects: Vec<Term> = self
            .graph
            .subjects()
            .into_iter()
            .filter(|s| !self.analysis.is_list_cell(s) && !self.analysis.is_nested(s))
            .cloned()
            .collect();
        let subject_count = subjects.len();
        self.write_sorted(subjects, Self::write_subject_block)?;

        let shared: Vec<Term> = self.analysis.list_heads(ListKind::Shared).cloned().collect();
        let shared_count = shared.len();
        self.write_sorted(shared, Self::write_shared_list)?;
        let free: Vec<Term> = self.analysis.list_heads(ListKind::Free).cloned().collect();
        let free_count = free.len();
        self.write_sorted(free, Self::write_free_list)?;

        // Nested objects, then nested lists, that the passes above never
        // reached sit on reference cycles
        let pending: Vec<Term> = self
            .analysis
            .nested()
            .iter()
            .filter(|n| !self.written.contains(*n))
            .cloned()
            .collect();
        let mut cycles = pending.len();
        self.write_sorted(pending, Self::write_cycle)?;

        let pending: Vec<Term> = self
            .analysis
            .list_heads(ListKind::Nested)
            .filter(|n| !self.written.contains(*n))
            .cloned()
            .collect();
        cycles += pending.len();
        self.write_sorted(pending, Self::write_cycle)?;

        debug!(
            subjects = subject_count,
            shared_lists = shared_count,
            free_lists = free_count,
            cycles,
            "rendered graph"
        );
        Ok(())
    }

    /// Write `items` in structural order. Structural ties go to the node
    /// labelled earliest in the output so far, so the result never depends
    /// on load order.
    fn write_sorted(
        &mut self,
        mut items: Vec<Term>,
        write: fn(&mut Self, &Term) -> Result<()>,
    ) -> Result<()> {
        merge_sort_by(&mut items, |a, b| self.cmp.order(a, b));
        for start in 0..items.len() {
            let pick = start
                + pick_next(
                    &items[start..],
                    |a, b| self.cmp.order(a, b) == Ordering::Equal,
                    |a, b| label_order(&self.emitter.terms, a, b),
                );
            items[start..=pick].rotate_right(1);
            let node = items[start].clone();
            if !self.written.contains(&node) {
                write(self, &node)?;
            }
        }
        Ok(())
    }

    /// Write the block of the node that closes the cycle through `node`.
    /// A list head closing the cycle is written like a shared list.
    fn write_cycle(&mut self, node: &Term) -> Result<()> {
        let root = self.cycle_root(node)?;
        if self.written.contains(&root) {
            return Err(FormatError::internal(format!(
                "{} is referenced from {}, which is already written",
                node, root
            )));
        }
        if self.analysis.list(&root).is_some() {
            self.write_shared_list(&root)
        } else {
            self.write_subject_block(&root)
        }
    }

    /// Find the node whose block prints `node`, walking up through nested
    /// objects and lists until a cycle closes.
    fn cycle_root(&self, node: &Term) -> Result<Term> {
        let mut current = node.clone();
        let mut seen = FxHashSet::default();
        loop {
            if !seen.insert(current.clone()) {
                return Ok(current);
            }
            let link = self
                .graph
                .triple1(None, None, Some(&current))
                .ok_or_else(|| {
                    FormatError::internal(format!(
                        "nested object {} has no single referencing triple",
                        current
                    ))
                })?;
            let referrer = match self.analysis.list_head_of(&link.s) {
                Some(head) => head.clone(),
                None => link.s.clone(),
            };
            let inline = self.analysis.is_nested(&referrer)
                || self.is_list_of_kind(&referrer, ListKind::Nested);
            if !inline {
                return Ok(referrer);
            }
            current = referrer;
        }
    }

    fn is_list_of_kind(&self, term: &Term, kind: ListKind) -> bool {
        self.analysis.list(term).is_some_and(|l| l.kind == kind)
    }

    /// Blank line between blocks.
    fn begin_block(&mut self) -> usize {
        if self.blocks > 0 {
            self.emitter.out.println();
        }
        self.blocks += 1;
        self.emitter.out.row()
    }

    fn end_block(&mut self, start_row: usize) {
        let out = &mut self.emitter.out;
        if self.layout.dot_on_new_line && out.row() != start_row {
            out.println();
            out.print(".");
        } else {
            out.print(" .");
        }
        out.println();
    }

    /// Print `head`, then a space or a line break depending on its width,
    /// and set the continuation indent.
    fn write_block_subject(&mut self, subject: &Term) -> usize {
        let text = self.emitter.terms.term(subject);
        let out = &mut self.emitter.out;
        out.print(&text);
        let previous = out.set_indent(self.block_indent + self.layout.indent_base);
        if out.column() > self.block_indent + self.layout.long_subject {
            out.println();
        } else {
            out.print(" ");
        }
        previous
    }

    fn write_subject_block(&mut self, subject: &Term) -> Result<()> {
        self.written.insert(subject.clone());
        let start_row = self.begin_block();

        if self.analysis.is_free_blank(subject) {
            self.write_nested(subject)?;
        } else {
            let previous = self.write_block_subject(subject);
            self.write_properties(subject, true)?;
            self.emitter.out.set_indent(previous);
        }

        self.end_block(start_row);
        Ok(())
    }

    /// `_:b rdf:first x ; rdf:rest ( ... ) .`
    fn write_shared_list(&mut self, head: &Term) -> Result<()> {
        let items = self.list_items(head)?;
        self.written.insert(head.clone());
        let start_row = self.begin_block();

        let previous = self.write_block_subject(head);
        self.write_list_cell(&items)?;
        self.emitter.out.set_indent(previous);

        self.end_block(start_row);
        Ok(())
    }

    /// `[ rdf:first x ; rdf:rest ( ... ) ] .`
    fn write_free_list(&mut self, head: &Term) -> Result<()> {
        let items = self.list_items(head)?;
        self.written.insert(head.clone());
        let start_row = self.begin_block();

        self.emitter.out.print("[ ");
        let column = self.emitter.out.column();
        let previous = self.emitter.out.set_indent(column);
        self.write_list_cell(&items)?;
        self.emitter.out.set_indent(previous);
        self.emitter.out.print(" ]");

        self.end_block(start_row);
        Ok(())
    }

    fn list_items(&self, head: &Term) -> Result<Vec<Term>> {
        self.analysis
            .list(head)
            .map(|list| list.items.clone())
            .ok_or_else(|| FormatError::internal(format!("{} is not a list head", head)))
    }

    fn write_list_cell(&mut self, items: &[Term]) -> Result<()> {
        let (first, rest) = items
            .split_first()
            .ok_or_else(|| FormatError::internal("empty list"))?;

        self.write_predicate(&Term::iri(rdf::FIRST), true);
        self.write_object(first)?;
        self.emitter.out.print(" ;");
        self.emitter.out.println();
        self.write_predicate(&Term::iri(rdf::REST), true);
        if rest.is_empty() {
            self.emitter.out.print("()");
            Ok(())
        } else {
            self.write_list(rest)
        }
    }

    /// Predicate-object list of `subject`, predicates sorted, `;`-separated.
    ///
    /// With `align`, predicates are padded so objects line up.
    fn write_properties(&mut self, subject: &Term, align: bool) -> Result<()> {
        let triples = self.graph.find(Some(subject), None, None);

        let mut seen = FxHashSet::default();
        let mut predicates: Vec<&Term> = triples
            .iter()
            .map(|t| &t.p)
            .filter(|p| seen.insert(*p))
            .collect();
        merge_sort_by(&mut predicates, |a, b| self.policy.compare_predicates(a, b));

        for (i, predicate) in predicates.into_iter().enumerate() {
            if i > 0 {
                self.emitter.out.print(" ;");
                self.emitter.out.println();
            }
            self.write_predicate(predicate, align);
            let objects: Vec<&Term> = triples
                .iter()
                .filter(|t| &t.p == predicate)
                .map(|t| &t.o)
                .collect();
            self.write_objects(objects)?;
        }
        Ok(())
    }

    fn write_predicate(&mut self, predicate: &Term, align: bool) {
        let text = if predicate.is_iri_eq(rdf::TYPE) {
            "a".to_string()
        } else {
            self.emitter.terms.term(predicate)
        };
        let out = &mut self.emitter.out;
        let indent = out.indent();
        out.print(&text);
        if !align {
            out.print(" ");
        } else if out.column() > indent + self.layout.long_predicate {
            out.println();
            out.pad_to(indent + self.layout.indent_base);
        } else {
            out.pad_to(indent + self.layout.predicate_width);
        }
    }

    /// Whether `object` is printed structurally rather than as a term.
    fn is_complex(&self, object: &Term) -> bool {
        if object.is_iri_eq(rdf::NIL) {
            return true;
        }
        !self.written.contains(object)
            && (self.analysis.is_nested(object) || self.is_list_of_kind(object, ListKind::Nested))
    }

    /// Simple objects first in literal order, then complex ones in
    /// structural order.
    fn write_objects(&mut self, objects: Vec<&Term>) -> Result<()> {
        let (mut complex, mut simple): (Vec<&Term>, Vec<&Term>) =
            objects.into_iter().partition(|o| self.is_complex(o));
        merge_sort_by(&mut simple, |a, b| self.policy.compare_literals(a, b));
        merge_sort_by(&mut complex, |a, b| self.cmp.order(a, b));

        let column = self.emitter.out.column();
        let previous = self.emitter.out.set_indent(column);
        for (i, object) in simple.into_iter().chain(complex).enumerate() {
            if i > 0 {
                if self.layout.objects_multi_line {
                    self.emitter.out.print(",");
                    self.emitter.out.println();
                } else {
                    self.emitter.out.print(", ");
                }
            }
            self.write_object(object)?;
        }
        self.emitter.out.set_indent(previous);
        Ok(())
    }

    fn write_object(&mut self, object: &Term) -> Result<()> {
        if object.is_iri_eq(rdf::NIL) {
            self.emitter.out.print("()");
            return Ok(());
        }
        if !self.written.contains(object) {
            if self.is_list_of_kind(object, ListKind::Nested) {
                let items = self.list_items(object)?;
                self.written.insert(object.clone());
                return self.write_list(&items);
            }
            if self.analysis.is_nested(object) {
                self.written.insert(object.clone());
                return self.write_nested(object);
            }
        }
        let text = self.emitter.terms.term(object);
        self.emitter.out.print(&text);
        Ok(())
    }

    /// `( a b c )`
    fn write_list(&mut self, items: &[Term]) -> Result<()> {
        self.emitter.out.print("(");
        for item in items {
            self.emitter.out.print(" ");
            self.write_object(item)?;
        }
        self.emitter.out.print(" )");
        Ok(())
    }

    /// `[]`, `[ p o ]`, or an aligned multi-line `[ ... ]`.
    fn write_nested(&mut self, node: &Term) -> Result<()> {
        let triples = self.graph.find(Some(node), None, None);
        let Some(first) = triples.first() else {
            self.emitter.out.print("[]");
            return Ok(());
        };
        let single_predicate = triples.iter().all(|t| t.p == first.p);

        self.emitter.out.print("[ ");
        if single_predicate {
            self.write_properties(node, false)?;
        } else {
            let column = self.emitter.out.column();
            let previous = self.emitter.out.set_indent(column);
            self.write_properties(node, true)?;
            self.emitter.out.set_indent(previous);
        }
        self.emitter.out.print(" ]");
        Ok(())
    }
}
