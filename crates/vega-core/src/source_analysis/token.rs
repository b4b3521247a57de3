// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types for Vega lexical analysis.
//!
//! This module defines the closed set of token kinds produced by the
//! scanner, the [`Token`] record the parser consumes, and the [`Location`]
//! every token carries for diagnostics.
//!
//! # Token Structure
//!
//! Each token consists of:
//! - A [`TokenKind`] indicating the type of token
//! - A `literal`: the source spelling for literal-category tokens and
//!   identifiers, the canonical spelling for everything else
//! - A [`Location`] naming the file, line, position, and the text of the
//!   current line up to and including the token

use std::collections::HashMap;
use std::sync::LazyLock;

use ecow::EcoString;

/// The kind of token, not including source location or literal text.
///
/// This enum represents all syntactic elements that can appear in Vega
/// source code. It is a flat tagged set: string data lives on the
/// [`Token`], not in the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Sentinels ===
    /// Never produced by the scanner; used by the parser to force a
    /// guaranteed token mismatch.
    Illegal,
    /// End of file. Returned indefinitely once the source is exhausted.
    Eof,

    // === Literals ===
    /// An identifier: `foo`, `var1`
    Ident,
    /// An integer literal: `42`
    Int,
    /// A floating-point literal: `123.45`
    Float,
    /// A character literal: `'a'`
    Char,
    /// A string literal: `"hello world"`
    String,

    // === Operators ===
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `|`
    Pipe,
    /// `&`
    Amp,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `!`
    Bang,
    /// `==`
    Eq,
    /// `<=`
    LessEq,
    /// `>=`
    GreaterEq,
    /// `!=`
    NotEq,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `=`
    Assign,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// A line break. Surfaced to the parser only while it expects a
    /// statement terminator.
    LineBreak,
    /// `;`
    Semicolon,

    // === Keywords ===
    /// `and`
    And,
    /// `break`
    Break,
    /// `case`
    Case,
    /// `const`
    Const,
    /// `continue`
    Continue,
    /// `default`
    Default,
    /// `elif`
    Elif,
    /// `else`
    Else,
    /// `false`
    False,
    /// `func`
    Func,
    /// `if`
    If,
    /// `not`
    Not,
    /// `or`
    Or,
    /// `pass`
    Pass,
    /// `return`
    Return,
    /// `switch`
    Switch,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,
}

/// Keyword spelling → kind, built once at first use. Concurrent reads need
/// no synchronization; the table is immutable after initialization.
static KEYWORDS: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    TokenKind::KEYWORDS
        .iter()
        .map(|&kind| (kind.spelling(), kind))
        .collect()
});

impl TokenKind {
    const KEYWORDS: [TokenKind; 19] = [
        Self::And,
        Self::Break,
        Self::Case,
        Self::Const,
        Self::Continue,
        Self::Default,
        Self::Elif,
        Self::Else,
        Self::False,
        Self::Func,
        Self::If,
        Self::Not,
        Self::Or,
        Self::Pass,
        Self::Return,
        Self::Switch,
        Self::True,
        Self::Var,
        Self::While,
    ];

    /// Returns the canonical spelling of this kind.
    ///
    /// Literal-category kinds and the sentinels render their name; operator
    /// and keyword kinds render their source text.
    #[must_use]
    pub const fn spelling(self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Char => "CHAR",
            Self::String => "STRING",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Pipe => "|",
            Self::Amp => "&",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::Bang => "!",
            Self::Eq => "==",
            Self::LessEq => "<=",
            Self::GreaterEq => ">=",
            Self::NotEq => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Assign => "=",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::LineBreak => "\n",
            Self::Semicolon => ";",
            Self::And => "and",
            Self::Break => "break",
            Self::Case => "case",
            Self::Const => "const",
            Self::Continue => "continue",
            Self::Default => "default",
            Self::Elif => "elif",
            Self::Else => "else",
            Self::False => "false",
            Self::Func => "func",
            Self::If => "if",
            Self::Not => "not",
            Self::Or => "or",
            Self::Pass => "pass",
            Self::Return => "return",
            Self::Switch => "switch",
            Self::True => "true",
            Self::Var => "var",
            Self::While => "while",
        }
    }

    /// Returns `true` if this token carries its own source spelling
    /// (identifiers and the literal category).
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::Ident | Self::Int | Self::Float | Self::Char | Self::String
        )
    }

    /// Returns `true` if this kind is a reserved word.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        Self::KEYWORDS.contains(&self)
    }

    /// Returns `true` if this is the end-of-file marker.
    #[must_use]
    pub const fn is_eof(self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Classifies an accumulated word: a keyword kind if the spelling is
    /// reserved, [`TokenKind::Ident`] otherwise.
    #[must_use]
    pub fn lookup(word: &str) -> Self {
        KEYWORDS.get(word).copied().unwrap_or(Self::Ident)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.spelling())
    }
}

/// A source location: file, line, position within the line, and the text of
/// the line accumulated up to and including the located token.
///
/// `line` starts at 1 for real tokens; 0 is reserved for synthetic tokens.
/// `position` counts characters read on the current line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    file_name: EcoString,
    line: usize,
    position: usize,
    line_feed: EcoString,
}

impl Location {
    /// Creates a location.
    #[must_use]
    pub fn new(
        file_name: impl Into<EcoString>,
        line: usize,
        position: usize,
        line_feed: impl Into<EcoString>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            line,
            position,
            line_feed: line_feed.into(),
        }
    }

    /// A location for tokens that do not originate in any source line.
    #[must_use]
    pub fn synthetic(file_name: impl Into<EcoString>) -> Self {
        Self::new(file_name, 0, 0, "")
    }

    /// The name of the source file.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// One-based line number; 0 for synthetic tokens.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Character position within the current line.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The current line's text up to and including the token.
    #[must_use]
    pub fn line_feed(&self) -> &str {
        &self.line_feed
    }
}

/// A token with its literal text and source location.
///
/// For identifiers and literal-category tokens `literal` is the (decoded)
/// source spelling; for operators and keywords it equals the canonical
/// spelling. Every token emitted by the scanner carries a valid location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    literal: EcoString,
    location: Location,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<EcoString>, location: Location) -> Self {
        Self {
            kind,
            literal: literal.into(),
            location,
        }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the literal text of this token.
    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Returns the source location of this token.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup() {
        assert_eq!(TokenKind::lookup("func"), TokenKind::Func);
        assert_eq!(TokenKind::lookup("while"), TokenKind::While);
        assert_eq!(TokenKind::lookup("elif"), TokenKind::Elif);
        assert_eq!(TokenKind::lookup("pass"), TokenKind::Pass);
        assert_eq!(TokenKind::lookup("var1"), TokenKind::Ident);
        assert_eq!(TokenKind::lookup("Func"), TokenKind::Ident);
        assert_eq!(TokenKind::lookup(""), TokenKind::Ident);
    }

    #[test]
    fn keyword_table_is_complete() {
        for kind in TokenKind::KEYWORDS {
            assert_eq!(TokenKind::lookup(kind.spelling()), kind);
            assert!(kind.is_keyword());
        }
        assert!(!TokenKind::Ident.is_keyword());
        assert!(!TokenKind::Assign.is_keyword());
    }

    #[test]
    fn spelling_and_display() {
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
        assert_eq!(TokenKind::Ident.to_string(), "IDENT");
        assert_eq!(TokenKind::AndAnd.to_string(), "&&");
        assert_eq!(TokenKind::NotEq.to_string(), "!=");
        assert_eq!(TokenKind::LineBreak.to_string(), "\n");
        assert_eq!(TokenKind::Semicolon.to_string(), ";");
        assert_eq!(TokenKind::Return.to_string(), "return");
    }

    #[test]
    fn literal_category() {
        assert!(TokenKind::Ident.is_literal());
        assert!(TokenKind::Int.is_literal());
        assert!(TokenKind::Float.is_literal());
        assert!(TokenKind::Char.is_literal());
        assert!(TokenKind::String.is_literal());
        assert!(!TokenKind::Eof.is_literal());
        assert!(!TokenKind::True.is_literal());
        assert!(!TokenKind::Plus.is_literal());
    }

    #[test]
    fn token_accessors() {
        let location = Location::new("test.vg", 1, 4, "1+1");
        let token = Token::new(TokenKind::Int, "123", location.clone());
        assert_eq!(token.kind(), TokenKind::Int);
        assert_eq!(token.literal(), "123");
        assert_eq!(token.location(), &location);
        assert_eq!(token.to_string(), "123");
    }

    #[test]
    fn synthetic_location_uses_line_zero() {
        let location = Location::synthetic("test.vg");
        assert_eq!(location.line(), 0);
        assert_eq!(location.position(), 0);
        assert_eq!(location.line_feed(), "");
    }
}
