//! Turtle and TriG parser that emits to GraphSink.
//!
//! A recursive-descent parser over the token stream. Triples inside a TriG
//! graph block are emitted with `GraphSink::emit_quad`; everything else goes
//! through `emit_triple`.

use std::collections::HashMap;

use fluree_graph_ir::{Datatype, GraphSink, TermId};
use fluree_vocab::rdf;

use crate::error::{Result, TurtleError};
use crate::iri;
use crate::lex::lexer::line_col;
use crate::lex::{tokenize, Token, TokenKind};

/// Accepted document syntax
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Syntax {
    /// Triples only; `{`, `}` and `GRAPH` are errors
    Turtle,
    /// Turtle plus graph blocks
    TriG,
}

/// Turtle/TriG parser state.
pub struct Parser<'a, S> {
    input: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    sink: &'a mut S,
    syntax: Syntax,
    /// Prefix mappings (prefix -> namespace IRI)
    prefixes: HashMap<String, String>,
    /// Base IRI for relative IRI resolution
    base: Option<String>,
    /// Graph receiving triples; `None` is the default graph
    graph: Option<TermId>,
}

impl<'a, S: GraphSink> Parser<'a, S> {
    /// Create a new parser.
    pub fn new(input: &'a str, sink: &'a mut S, syntax: Syntax) -> Result<Self> {
        Ok(Self {
            input,
            tokens: tokenize(input)?,
            pos: 0,
            sink,
            syntax,
            prefixes: HashMap::new(),
            base: None,
            graph: None,
        })
    }

    /// Parse the entire document.
    pub fn parse(mut self) -> Result<()> {
        while !self.is_at_end() {
            self.parse_statement()?;
        }
        Ok(())
    }

    fn is_at_end(&self) -> bool {
        self.current().is_eof()
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_kind(&self, offset: usize) -> &TokenKind {
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[idx].kind
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Build a parse error pointing at the current token.
    fn error(&self, message: impl Into<String>) -> TurtleError {
        let (line, column) = line_col(self.input, self.current().start);
        TurtleError::parse(line, column, message)
    }

    fn unexpected(&self, expected: &str) -> TurtleError {
        self.error(format!("expected {}, found {}", expected, self.current().kind))
    }

    /// Consume a token of the expected kind, or return an error.
    fn expect(&mut self, kind: &TokenKind) -> Result<()> {
        if self.current().kind == *kind {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{}'", kind)))
        }
    }

    /// Emit into the current graph.
    fn emit(&mut self, s: TermId, p: TermId, o: TermId) {
        match self.graph {
            Some(g) => self.sink.emit_quad(g, s, p, o),
            None => self.sink.emit_triple(s, p, o),
        }
    }

    /// Parse a single statement: directive, triples, or (TriG) graph block.
    fn parse_statement(&mut self) -> Result<()> {
        match self.current().kind {
            TokenKind::KwPrefix | TokenKind::KwSparqlPrefix => self.parse_prefix_directive(),
            TokenKind::KwBase | TokenKind::KwSparqlBase => self.parse_base_directive(),
            TokenKind::Eof => Ok(()),
            _ if self.syntax == Syntax::TriG => self.parse_block(),
            _ => {
                self.parse_triples()?;
                self.expect(&TokenKind::Dot)
            }
        }
    }

    /// Parse @prefix or PREFIX directive.
    fn parse_prefix_directive(&mut self) -> Result<()> {
        let sparql_style = self.current().kind == TokenKind::KwSparqlPrefix;
        self.advance();

        let TokenKind::PrefixedNameNs(prefix) = &self.current().kind else {
            return Err(self.unexpected("prefix namespace"));
        };
        let prefix = prefix.to_string();
        self.advance();

        let TokenKind::Iri(reference) = &self.current().kind else {
            return Err(self.unexpected("IRI for prefix namespace"));
        };
        let namespace = iri::resolve(self.base.as_deref(), reference)?;
        self.advance();

        self.sink.on_prefix(&prefix, &namespace);
        self.prefixes.insert(prefix, namespace);

        // Trailing dot is required for @prefix, forbidden for PREFIX
        if !sparql_style {
            self.expect(&TokenKind::Dot)?;
        }
        Ok(())
    }

    /// Parse @base or BASE directive.
    fn parse_base_directive(&mut self) -> Result<()> {
        let sparql_style = self.current().kind == TokenKind::KwSparqlBase;
        self.advance();

        let TokenKind::Iri(reference) = &self.current().kind else {
            return Err(self.unexpected("IRI for base"));
        };
        let base = iri::resolve(self.base.as_deref(), reference)?;
        self.advance();

        self.sink.on_base(&base);
        self.base = Some(base);

        if !sparql_style {
            self.expect(&TokenKind::Dot)?;
        }
        Ok(())
    }

    /// Parse a TriG block: `{ ... }`, `label { ... }`, `GRAPH label { ... }`
    /// or plain triples for the default graph.
    fn parse_block(&mut self) -> Result<()> {
        match self.current().kind {
            TokenKind::KwGraph => {
                self.advance();
                let label = self.parse_graph_label()?;
                self.parse_wrapped_graph(Some(label))
            }
            TokenKind::LBrace => self.parse_wrapped_graph(None),
            TokenKind::Iri(_)
            | TokenKind::PrefixedName { .. }
            | TokenKind::PrefixedNameNs(_)
            | TokenKind::BlankNodeLabel(_)
            | TokenKind::Anon
                if *self.peek_kind(1) == TokenKind::LBrace =>
            {
                let label = self.parse_graph_label()?;
                self.parse_wrapped_graph(Some(label))
            }
            _ => {
                self.parse_triples()?;
                self.expect(&TokenKind::Dot)
            }
        }
    }

    /// Parse a graph name: an IRI or a blank node.
    fn parse_graph_label(&mut self) -> Result<TermId> {
        match &self.current().kind {
            TokenKind::BlankNodeLabel(label) => {
                let label = label.clone();
                self.advance();
                Ok(self.sink.term_blank(Some(&label)))
            }
            TokenKind::Anon => {
                self.advance();
                Ok(self.sink.term_blank(None))
            }
            _ => {
                let iri = self.parse_iri("graph name")?;
                Ok(self.sink.term_iri(&iri))
            }
        }
    }

    /// Parse `{ triples ('.' triples)* '.'? }` into the graph `label`.
    fn parse_wrapped_graph(&mut self, label: Option<TermId>) -> Result<()> {
        self.expect(&TokenKind::LBrace)?;
        self.graph = label;

        while self.current().kind != TokenKind::RBrace {
            self.parse_triples()?;
            match self.current().kind {
                TokenKind::Dot => self.advance(),
                TokenKind::RBrace => break,
                _ => return Err(self.unexpected("'.' or '}'")),
            }
        }

        self.expect(&TokenKind::RBrace)?;
        self.graph = None;
        Ok(())
    }

    /// Parse a subject and its predicate-object list (without the final '.').
    fn parse_triples(&mut self) -> Result<()> {
        let bracketed = self.current().kind == TokenKind::LBracket;
        let subject = self.parse_subject()?;

        // `[ :p :o ] .` is a complete statement on its own
        let ends_here = matches!(self.current().kind, TokenKind::Dot | TokenKind::RBrace);
        if bracketed && ends_here {
            return Ok(());
        }

        self.parse_predicate_object_list(subject)
    }

    /// Parse a subject term.
    fn parse_subject(&mut self) -> Result<TermId> {
        match &self.current().kind {
            TokenKind::BlankNodeLabel(label) => {
                let label = label.clone();
                self.advance();
                Ok(self.sink.term_blank(Some(&label)))
            }
            TokenKind::Anon => {
                self.advance();
                Ok(self.sink.term_blank(None))
            }
            TokenKind::LBracket => self.parse_blank_node_property_list(),
            TokenKind::LParen => self.parse_collection(),
            TokenKind::Nil => {
                self.advance();
                Ok(self.sink.term_iri(rdf::NIL))
            }
            _ => {
                let iri = self.parse_iri("subject")?;
                Ok(self.sink.term_iri(&iri))
            }
        }
    }

    /// Parse an IRI in any of its three spellings and return it expanded.
    fn parse_iri(&mut self, what: &str) -> Result<String> {
        let iri = match &self.current().kind {
            TokenKind::Iri(reference) => iri::resolve(self.base.as_deref(), reference)?,
            TokenKind::PrefixedName { prefix, local } => self.expand_prefixed_name(prefix, local)?,
            TokenKind::PrefixedNameNs(prefix) => self.expand_prefixed_name(prefix, "")?,
            _ => return Err(self.unexpected(what)),
        };
        self.advance();
        Ok(iri)
    }

    /// Parse a predicate-object list.
    fn parse_predicate_object_list(&mut self, subject: TermId) -> Result<()> {
        loop {
            let predicate = self.parse_predicate()?;
            self.parse_object_list(subject, predicate)?;

            if self.current().kind != TokenKind::Semicolon {
                return Ok(());
            }
            // Repeated and trailing semicolons are allowed
            while self.current().kind == TokenKind::Semicolon {
                self.advance();
            }
            if matches!(
                self.current().kind,
                TokenKind::Dot | TokenKind::RBracket | TokenKind::RBrace | TokenKind::Eof
            ) {
                return Ok(());
            }
        }
    }

    /// Parse a predicate.
    fn parse_predicate(&mut self) -> Result<TermId> {
        if self.current().kind == TokenKind::KwA {
            self.advance();
            return Ok(self.sink.term_iri(rdf::TYPE));
        }
        let iri = self.parse_iri("predicate")?;
        Ok(self.sink.term_iri(&iri))
    }

    /// Parse an object list (comma-separated objects).
    fn parse_object_list(&mut self, subject: TermId, predicate: TermId) -> Result<()> {
        loop {
            let object = self.parse_object()?;
            self.emit(subject, predicate, object);

            if self.current().kind != TokenKind::Comma {
                return Ok(());
            }
            self.advance();
        }
    }

    /// Parse an object term.
    fn parse_object(&mut self) -> Result<TermId> {
        match &self.current().kind {
            TokenKind::String(_)
            | TokenKind::Integer(_)
            | TokenKind::Decimal(_)
            | TokenKind::Double(_)
            | TokenKind::KwTrue
            | TokenKind::KwFalse => self.parse_literal(),
            _ => self.parse_subject(),
        }
    }

    /// Parse a literal (string with optional language tag or datatype,
    /// number, or boolean).
    fn parse_literal(&mut self) -> Result<TermId> {
        let (lexical, datatype) = match &self.current().kind {
            TokenKind::String(value) => (value.clone(), None),
            TokenKind::Integer(lex) => (lex.clone(), Some(Datatype::xsd_integer())),
            TokenKind::Decimal(lex) => (lex.clone(), Some(Datatype::xsd_decimal())),
            TokenKind::Double(lex) => (lex.clone(), Some(Datatype::xsd_double())),
            TokenKind::KwTrue => ("true".into(), Some(Datatype::xsd_boolean())),
            TokenKind::KwFalse => ("false".into(), Some(Datatype::xsd_boolean())),
            _ => return Err(self.unexpected("literal")),
        };
        self.advance();

        if let Some(datatype) = datatype {
            return Ok(self.sink.term_literal(&lexical, datatype, None));
        }

        match &self.current().kind {
            TokenKind::LangTag(lang) => {
                let lang = lang.clone();
                self.advance();
                Ok(self
                    .sink
                    .term_literal(&lexical, Datatype::rdf_lang_string(), Some(&lang)))
            }
            TokenKind::DoubleCaret => {
                self.advance();
                let datatype = Datatype::from_iri(self.parse_iri("datatype IRI")?);
                Ok(self.sink.term_literal(&lexical, datatype, None))
            }
            _ => Ok(self.sink.term_literal(&lexical, Datatype::xsd_string(), None)),
        }
    }

    /// Parse a blank node property list: `[ predicate object ; ... ]`
    fn parse_blank_node_property_list(&mut self) -> Result<TermId> {
        self.expect(&TokenKind::LBracket)?;

        let bnode = self.sink.term_blank(None);
        if self.current().kind != TokenKind::RBracket {
            self.parse_predicate_object_list(bnode)?;
        }

        self.expect(&TokenKind::RBracket)?;
        Ok(bnode)
    }

    /// Parse a collection (RDF list): `( item1 item2 ... )`
    fn parse_collection(&mut self) -> Result<TermId> {
        self.expect(&TokenKind::LParen)?;

        if self.current().kind == TokenKind::RParen {
            self.advance();
            return Ok(self.sink.term_iri(rdf::NIL));
        }

        let rdf_first = self.sink.term_iri(rdf::FIRST);
        let rdf_rest = self.sink.term_iri(rdf::REST);

        let head = self.sink.term_blank(None);
        let mut cell = head;

        loop {
            let item = self.parse_object()?;
            self.emit(cell, rdf_first, item);

            if self.current().kind == TokenKind::RParen {
                let rdf_nil = self.sink.term_iri(rdf::NIL);
                self.emit(cell, rdf_rest, rdf_nil);
                break;
            }
            let next = self.sink.term_blank(None);
            self.emit(cell, rdf_rest, next);
            cell = next;
        }

        self.expect(&TokenKind::RParen)?;
        Ok(head)
    }

    /// Expand a prefixed name to a full IRI.
    fn expand_prefixed_name(&self, prefix: &str, local: &str) -> Result<String> {
        match self.prefixes.get(prefix) {
            Some(namespace) => Ok(format!("{}{}", namespace, local)),
            None => Err(TurtleError::UndefinedPrefix(prefix.to_string())),
        }
    }
}

/// Parse a Turtle document into GraphSink events.
pub fn parse<S: GraphSink>(input: &str, sink: &mut S) -> Result<()> {
    Parser::new(input, sink, Syntax::Turtle)?.parse()
}

/// Parse a TriG document into GraphSink events.
///
/// Triples in named graph blocks are emitted with `emit_quad`.
pub fn parse_trig<S: GraphSink>(input: &str, sink: &mut S) -> Result<()> {
    Parser::new(input, sink, Syntax::TriG)?.parse()
}
