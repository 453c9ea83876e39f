use std::{iter::Peekable, str::CharIndices};

pub mod tok;
pub mod chars;

use tok::number::NumberLiteral;
pub use tok::{Token, TokenKind};

use crate::source::span::{SourceIndex, SourceSpan};

/// Lexer producing a stream of tokens with span data from a range list
pub struct Lexer<'src> {
    text: Peekable<CharIndices<'src>>,
    len: SourceIndex,
}

impl<'src> Lexer<'src> {
    /// Create a new token stream from the given source text
    pub fn new(text: &'src str) -> Self {
        Self {
            text: text.char_indices().peekable(),
            len: text.len() as SourceIndex,
        }
    }

    /// Byte position one past the last character of the source text
    pub const fn end(&self) -> SourceIndex {
        self.len
    }

    /// Consume a character from the input stream
    fn char(&mut self) -> Option<(SourceIndex, char)> {
        self.text.next().map(|(idx, ch)| (idx as SourceIndex, ch))
    }

    fn peek_char(&mut self) -> Option<char> {
        self.text.peek().map(|(_, c)| c).copied()
    }

    /// Consume the remaining digits of a number literal whose first digit starts at `start`
    fn number_literal(&mut self, start: SourceIndex) -> NumberLiteral {
        let mut end = start + 1;

        while let Some(c) = self.peek_char() {
            if !chars::is_digit(c) {
                break
            }

            if let Some((idx, ch)) = self.char() {
                end = idx + ch.len_utf8() as SourceIndex;
            }
        }

        NumberLiteral { digits: SourceSpan::new(start, end) }
    }

    /// Consume characters from the input stream and produce the next token
    fn token(&mut self) -> Option<Token> {
        let first = loop {
            let next = self.char()?;
            if !chars::is_blank(next.1) {
                break next
            }
        };

        let single = SourceSpan::new(first.0, first.0 + first.1.len_utf8() as SourceIndex);

        Some(match first.1 {
            d if chars::is_digit(d) => {
                let literal = self.number_literal(first.0);

                Token {
                    span: literal.digits,
                    kind: TokenKind::Number(literal),
                }
            },
            c if chars::is_range_separator(c) => Token {
                span: single,
                kind: TokenKind::RangeSeparator(c),
            },
            c if chars::is_member_separator(c) => Token {
                span: single,
                kind: TokenKind::Comma,
            },
            other => Token {
                span: single,
                kind: TokenKind::Unexpected(other),
            },
        })
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.token()
    }
}
