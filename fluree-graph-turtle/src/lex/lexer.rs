//! Turtle/TriG lexer implementation using winnow.
//!
//! Tokenizes input into a stream of tokens with source spans.
//! Fails fast on the first lexical error with a clear, actionable message.

use std::sync::Arc;

use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, delimited, opt, peek, preceded};
use winnow::error::{ContextError, ErrMode};
use winnow::stream::{AsChar, Location, Stream};
use winnow::token::{any, one_of, take_till, take_while};
use winnow::{LocatingSlice, ModalResult, Parser};

use super::chars::*;
use super::token::{Token, TokenKind};
use crate::error::{Result, TurtleError};

/// Input type for the lexer - tracks position for spans.
pub type Input<'a> = LocatingSlice<&'a str>;

/// Lexer for Turtle and TriG documents.
pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Tokenize the entire input.
    ///
    /// Returns an error immediately on the first invalid token, providing
    /// a clear error message with line/column and source context.
    pub fn tokenize(self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut input = LocatingSlice::new(self.input);

        loop {
            skip_ws_and_comments(&mut input);

            let start = input.current_token_start();
            if input.is_empty() {
                tokens.push(Token::new(TokenKind::Eof, start, start));
                break;
            }

            match next_token(&mut input) {
                Ok(kind) => tokens.push(Token::new(kind, start, input.current_token_start())),
                Err(_) => return Err(self.make_error(start)),
            }
        }

        Ok(tokens)
    }

    /// Create a descriptive error message for an invalid token.
    fn make_error(&self, position: usize) -> TurtleError {
        let bad_char = self.input[position..].chars().next().unwrap_or('?');
        let (line, col) = line_col(self.input, position);
        let line_content = self.input.lines().nth(line - 1).unwrap_or("");

        let what = match bad_char {
            '"' | '\'' => "unterminated string literal".to_string(),
            '<' => "invalid or unterminated IRI".to_string(),
            c if !c.is_ascii() && !is_pn_chars_base(c) => {
                format!("unexpected character '{}' (U+{:04X})", c.escape_unicode(), c as u32)
            }
            c => format!("unexpected character '{}'", c),
        };
        let pointer = " ".repeat(col.saturating_sub(1));

        TurtleError::lexer(
            position,
            format!(
                "{} at line {}, column {}\n  |\n{} | {}\n  | {}^",
                what, line, col, line, line_content, pointer
            ),
        )
    }
}

/// Convert a byte position to (line, column), 1-indexed.
pub(crate) fn line_col(input: &str, position: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;

    for (i, c) in input.char_indices() {
        if i >= position {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }

    (line, col)
}

fn backtrack() -> ErrMode<ContextError> {
    ErrMode::Backtrack(ContextError::new())
}

/// Skip whitespace and comments.
fn skip_ws_and_comments(input: &mut Input<'_>) {
    loop {
        let _: ModalResult<&str, ContextError> = take_while(0.., is_ws).parse_next(input);

        if !input.starts_with('#') {
            break;
        }
        let _: ModalResult<&str, ContextError> =
            take_till(0.., |c| c == '\n' || c == '\r').parse_next(input);
    }
}

/// Parse the next token.
fn next_token(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((
        "^^".value(TokenKind::DoubleCaret),
        parse_iri_ref,
        // Blank nodes (must come before prefixed names)
        parse_blank_node_label,
        ('[', take_while(0.., is_ws), ']').value(TokenKind::Anon),
        ('(', take_while(0.., is_ws), ')').value(TokenKind::Nil),
        // @prefix, @base, language tags
        parse_at_word,
        parse_default_prefix,
        // Prefixed names and bare keywords
        parse_prefixed_name_or_keyword,
        parse_string_literal,
        parse_number,
        parse_punctuation,
    ))
    .parse_next(input)
}

// =============================================================================
// IRIs
// =============================================================================

/// Parse an IRI reference: `<...>`
fn parse_iri_ref(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    delimited('<', parse_iri_content, '>')
        .map(|s: String| TokenKind::Iri(Arc::from(s)))
        .parse_next(input)
}

/// Parse the content inside an IRI (validates characters and handles escapes).
///
/// Empty content is allowed: `<>` is a relative reference to the base.
fn parse_iri_content(input: &mut Input<'_>) -> ModalResult<String> {
    let mut result = String::new();

    loop {
        let chunk: &str = take_while(0.., is_iri_char).parse_next(input)?;
        result.push_str(chunk);

        if input.is_empty() || input.starts_with('>') {
            return Ok(result);
        }

        // Only \u and \U escapes are legal inside IRIs
        '\\'.parse_next(input)?;
        let marker: char = one_of(['u', 'U']).parse_next(input)?;
        result.push(parse_hex_char(input, marker)?);
    }
}

/// Parse the hex digits of a `\u` (4) or `\U` (8) escape.
fn parse_hex_char(input: &mut Input<'_>, marker: char) -> ModalResult<char> {
    let width = if marker == 'u' { 4 } else { 8 };
    let hex: &str = take_while(width..=width, AsChar::is_hex_digit).parse_next(input)?;
    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(backtrack)
}

// =============================================================================
// Directives and language tags
// =============================================================================

/// Parse `@prefix`, `@base` or a language tag.
fn parse_at_word(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let word: &str = preceded(
        '@',
        take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '-'),
    )
    .parse_next(input)?;

    Ok(match word {
        "prefix" => TokenKind::KwPrefix,
        "base" => TokenKind::KwBase,
        _ => TokenKind::LangTag(Arc::from(word)),
    })
}

// =============================================================================
// Prefixed Names and Keywords
// =============================================================================

/// Parse a default prefix name (`:local`) or default prefix namespace (`:`).
fn parse_default_prefix(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    preceded(':', opt(parse_pn_local))
        .map(|local| prefixed_name("", local))
        .parse_next(input)
}

fn prefixed_name(prefix: &str, local: Option<String>) -> TokenKind {
    match local {
        Some(local) => TokenKind::PrefixedName {
            prefix: Arc::from(prefix),
            local: Arc::from(local),
        },
        None => TokenKind::PrefixedNameNs(Arc::from(prefix)),
    }
}

/// Parse a prefixed name or a bare keyword (a, true, false, PREFIX, BASE, GRAPH).
fn parse_prefixed_name_or_keyword(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let start = input.checkpoint();

    let first: char = peek(any).parse_next(input)?;
    if !is_pn_chars_base(first) {
        return Err(backtrack());
    }

    let mut word = String::new();
    take_dotted(input, &mut word)?;

    if opt(':').parse_next(input)?.is_some() {
        let local = opt(parse_pn_local).parse_next(input)?;
        return Ok(prefixed_name(&word, local));
    }

    match word.as_str() {
        "a" => Ok(TokenKind::KwA),
        "true" => Ok(TokenKind::KwTrue),
        "false" => Ok(TokenKind::KwFalse),
        w if w.eq_ignore_ascii_case("PREFIX") => Ok(TokenKind::KwSparqlPrefix),
        w if w.eq_ignore_ascii_case("BASE") => Ok(TokenKind::KwSparqlBase),
        w if w.eq_ignore_ascii_case("GRAPH") => Ok(TokenKind::KwGraph),
        _ => {
            input.reset(&start);
            Err(backtrack())
        }
    }
}

/// Parse a local name (after the colon in a prefixed name).
///
/// Percent escapes are kept verbatim, backslash escapes are removed.
fn parse_pn_local(input: &mut Input<'_>) -> ModalResult<String> {
    let first: char = peek(any).parse_next(input)?;
    if !is_pn_local_start(first) && first != '%' && first != '\\' {
        return Err(backtrack());
    }

    let mut result = String::new();

    loop {
        let chunk: &str =
            take_while(0.., |c: char| is_pn_chars(c) || c == ':').parse_next(input)?;
        result.push_str(chunk);

        let rest: &str = input.as_ref();
        if rest.starts_with('.') {
            let continues = rest[1..]
                .chars()
                .next()
                .is_some_and(|c| is_pn_chars(c) || matches!(c, ':' | '%' | '\\'));
            if !continues {
                break;
            }
            '.'.parse_next(input)?;
            result.push('.');
        } else if rest.starts_with('%') {
            let escape: &str =
                ('%', take_while(2..=2, AsChar::is_hex_digit)).take().parse_next(input)?;
            result.push_str(escape);
        } else if rest.starts_with('\\') {
            '\\'.parse_next(input)?;
            let escaped: char = any.parse_next(input)?;
            if !is_local_escapable(escaped) {
                return Err(backtrack());
            }
            result.push(escaped);
        } else {
            break;
        }
    }

    if result.is_empty() {
        return Err(backtrack());
    }

    Ok(result)
}

// =============================================================================
// Blank Nodes
// =============================================================================

/// Parse a blank node label: `_:name`
fn parse_blank_node_label(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    "_:".parse_next(input)?;
    let first: char = one_of(|c: char| is_pn_chars_u(c) || c.is_ascii_digit()).parse_next(input)?;
    let mut name = String::from(first);
    take_dotted(input, &mut name)?;
    Ok(TokenKind::BlankNodeLabel(Arc::from(name)))
}

/// Extend `name` with PN_CHARS, taking a '.' only when more name characters follow.
fn take_dotted(input: &mut Input<'_>, name: &mut String) -> ModalResult<()> {
    loop {
        let chunk: &str = take_while(0.., is_pn_chars).parse_next(input)?;
        name.push_str(chunk);

        let rest: &str = input.as_ref();
        if rest.starts_with('.') && rest[1..].chars().next().is_some_and(is_pn_chars) {
            '.'.parse_next(input)?;
            name.push('.');
        } else {
            return Ok(());
        }
    }
}

// =============================================================================
// String Literals
// =============================================================================

/// Parse a string literal: single or double quotes, short or long form.
fn parse_string_literal(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let mut delim: &str = alt(("\"\"\"", "'''", "\"", "'")).parse_next(input)?;
    let quote = if delim.starts_with('"') { '"' } else { '\'' };
    let long = delim.len() == 3;

    let mut result = String::new();
    loop {
        let chunk: &str = take_while(0.., |c: char| {
            c != quote && c != '\\' && (long || (c != '\n' && c != '\r'))
        })
        .parse_next(input)?;
        result.push_str(chunk);

        let rest: &str = input.as_ref();
        if rest.starts_with(delim) {
            delim.parse_next(input)?;
            return Ok(TokenKind::String(Arc::from(result)));
        } else if rest.starts_with('\\') {
            '\\'.parse_next(input)?;
            result.push(parse_escape_char(input)?);
        } else if long && rest.starts_with(quote) {
            // A lone quote inside a long string
            let c: char = any.parse_next(input)?;
            result.push(c);
        } else {
            return Err(backtrack());
        }
    }
}

fn parse_escape_char(input: &mut Input<'_>) -> ModalResult<char> {
    let c: char = any.parse_next(input)?;
    match c {
        't' => Ok('\t'),
        'b' => Ok('\x08'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        'f' => Ok('\x0C'),
        '"' => Ok('"'),
        '\'' => Ok('\''),
        '\\' => Ok('\\'),
        'u' | 'U' => parse_hex_char(input, c),
        _ => Err(backtrack()),
    }
}

// =============================================================================
// Numbers
// =============================================================================

#[derive(Clone, Copy)]
enum NumberShape {
    Integer,
    Decimal,
    Double,
}

/// Recognize `[+-]? digits? ('.' digits)? exponent?`.
fn number_shape(input: &mut Input<'_>) -> ModalResult<NumberShape> {
    opt(one_of(['+', '-'])).parse_next(input)?;
    let whole: &str = digit0.parse_next(input)?;

    // "1." is an integer followed by the statement terminator
    let rest: &str = input.as_ref();
    let has_fraction =
        rest.starts_with('.') && rest[1..].starts_with(|c: char| c.is_ascii_digit());
    if has_fraction {
        ('.', digit1).parse_next(input)?;
    } else if whole.is_empty() {
        return Err(backtrack());
    }

    let exponent = opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)).parse_next(input)?;

    Ok(match (exponent.is_some(), has_fraction) {
        (true, _) => NumberShape::Double,
        (false, true) => NumberShape::Decimal,
        (false, false) => NumberShape::Integer,
    })
}

fn parse_number(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let (shape, lexical) = number_shape.with_taken().parse_next(input)?;
    let lexical: Arc<str> = Arc::from(lexical);
    Ok(match shape {
        NumberShape::Integer => TokenKind::Integer(lexical),
        NumberShape::Decimal => TokenKind::Decimal(lexical),
        NumberShape::Double => TokenKind::Double(lexical),
    })
}

// =============================================================================
// Punctuation
// =============================================================================

fn parse_punctuation(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    any.verify_map(|c| match c {
        '.' => Some(TokenKind::Dot),
        ',' => Some(TokenKind::Comma),
        ';' => Some(TokenKind::Semicolon),
        '[' => Some(TokenKind::LBracket),
        ']' => Some(TokenKind::RBracket),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        '{' => Some(TokenKind::LBrace),
        '}' => Some(TokenKind::RBrace),
        _ => None,
    })
    .parse_next(input)
}

/// Tokenize a Turtle or TriG document string.
///
/// Returns an error immediately on the first invalid token, with a clear
/// error message including line/column information and source context.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}
