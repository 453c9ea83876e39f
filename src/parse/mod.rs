//! Parser for the comma separated range list syntax, e.g. `1-4,7,10:12`.
//!
//! Each member is either a single number or two numbers joined by `-` or `:`. Whitespace may
//! appear between any two tokens and an input with no members at all is valid. The parser only
//! checks syntax: it yields the members in input order, reversed pairs included, and leaves
//! canonicalization to [IntegerSet](crate::set::IntegerSet).

use std::{fmt, iter::Peekable};

use codespan_reporting::diagnostic::{Diagnostic, Label};

use crate::source::{span::SourceSpan, FileId};

pub mod lex;

use lex::{Lexer, Token, TokenKind};

/// One member exactly as written, before canonicalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRange {
    pub low: i32,
    pub high: i32,
    pub span: SourceSpan,
}

/// Parse a range list into its members
pub fn parse(src: &str) -> Result<Vec<RawRange>, ParseError> {
    Parser::new(src).ranges()
}

/// Recursive descent parser over the token stream of a single range list
pub struct Parser<'src> {
    src: &'src str,
    tokens: Peekable<Lexer<'src>>,
    end: SourceSpan,
}

impl<'src> Parser<'src> {
    pub fn new(src: &'src str) -> Self {
        let lexer = Lexer::new(src);
        let end = SourceSpan::point(lexer.end());

        Self {
            src,
            tokens: lexer.peekable(),
            end,
        }
    }

    /// Parse every member of the list, consuming the parser
    pub fn ranges(mut self) -> Result<Vec<RawRange>, ParseError> {
        let mut ranges = Vec::new();
        if self.tokens.peek().is_none() {
            return Ok(ranges)
        }

        loop {
            ranges.push(self.member()?);

            match self.tokens.next() {
                None => break Ok(ranges),
                Some(Token { kind: TokenKind::Comma, .. }) => continue,
                Some(other) => break Err(ParseError::new(
                    other.span,
                    ParseErrorKind::Expected { expected: Expected::Comma, found: other.kind },
                )),
            }
        }
    }

    /// Parse a single page or a range of pages
    fn member(&mut self) -> Result<RawRange, ParseError> {
        let (low, low_span) = self.number()?;

        if let Some(Token { kind: TokenKind::RangeSeparator(_), .. }) = self.tokens.peek() {
            self.tokens.next();
            let (high, high_span) = self.number()?;

            Ok(RawRange {
                low,
                high,
                span: SourceSpan::new(low_span.start(), high_span.end()),
            })
        } else {
            Ok(RawRange {
                low,
                high: low,
                span: low_span,
            })
        }
    }

    fn number(&mut self) -> Result<(i32, SourceSpan), ParseError> {
        match self.tokens.next() {
            Some(Token { span, kind: TokenKind::Number(literal) }) => literal
                .value(self.src)
                .map(|value| (value, span))
                .ok_or(ParseError::new(span, ParseErrorKind::Overflow)),
            Some(other) => Err(ParseError::new(
                other.span,
                ParseErrorKind::Expected { expected: Expected::Number, found: other.kind },
            )),
            None => Err(ParseError::new(self.end, ParseErrorKind::UnexpectedEnd)),
        }
    }
}

/// What the parser was looking for when it found something else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Number,
    Comma,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Number => "a page number",
                Self::Comma => "',' or the end of the list",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    Expected {
        expected: Expected,
        found: TokenKind,
    },
    #[error("range list ends where a page number was expected")]
    UnexpectedEnd,
    #[error("number does not fit in a 32-bit integer")]
    Overflow,
}

/// Syntax error located at the span of the offending input
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {}..{}", .span.start(), .span.end())]
pub struct ParseError {
    pub span: SourceSpan,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub const fn new(span: SourceSpan, kind: ParseErrorKind) -> Self {
        Self { span, kind }
    }

    /// Build a diagnostic pointing at the offending input in the given file
    pub fn to_diagnostic(&self, file: FileId) -> Diagnostic<FileId> {
        let label = match self.kind {
            ParseErrorKind::Expected { expected, .. } => format!("expected {}", expected),
            ParseErrorKind::UnexpectedEnd => "list ends here".to_owned(),
            ParseErrorKind::Overflow => "too large".to_owned(),
        };

        Diagnostic::error()
            .with_message("malformed page range list")
            .with_labels(vec![
                Label::primary(file, self.span.range()).with_message(label),
            ])
            .with_notes(vec![self.kind.to_string()])
    }
}
