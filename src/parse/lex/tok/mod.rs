use std::fmt;

use number::NumberLiteral;

use crate::source::span::SourceSpan;

pub mod number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub span: SourceSpan,
    pub kind: TokenKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number(NumberLiteral),
    /// `-` or `:` between the bounds of a range
    RangeSeparator(char),
    Comma,
    /// Any character the range syntax has no use for
    Unexpected(char),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(_) => write!(f, "number"),
            Self::RangeSeparator(c) => write!(f, "range separator '{}'", c),
            Self::Comma => write!(f, "','"),
            Self::Unexpected(c) => write!(f, "character {:?}", c),
        }
    }
}
