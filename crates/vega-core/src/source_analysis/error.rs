// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error types for the Vega frontend.
//!
//! The frontend produces at most one diagnostic per run: the scanner and
//! parser both stop at the first failure. Diagnostics carry their class,
//! kind, and [`Location`], and render the user-facing caret-style report
//! through `Display`. They integrate with [`miette`] for embedding callers.

use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

use super::token::{Location, Token, TokenKind};

/// The class of a diagnostic. The frontend core only raises syntax errors;
/// later passes add their own classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorClass {
    /// A lexical or grammatical violation.
    #[error("SyntaxError")]
    SyntaxError,
}

/// The kind of a diagnostic, scanner and parser kinds combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// Reading from the source buffer failed for a reason other than end
    /// of input.
    #[error("MalformedCode")]
    MalformedCode,
    /// The parser required a specific token but the input ended.
    #[error("UnexpectedEOF")]
    UnexpectedEof,
    /// A character or string literal ran into a newline or end of input,
    /// or a character literal held more than one sign.
    #[error("LiteralNotTerminated")]
    LiteralNotTerminated,
    /// The scanner reached a character outside the language alphabet.
    #[error("InvalidCharacter")]
    InvalidCharacter,
    /// An unknown escape after `\`, or the wrong quote escape for the
    /// active literal flavor.
    #[error("InvalidEscapeSequence")]
    InvalidEscapeSequence,
    /// Malformed digits in a `\xHH` escape.
    #[error("InvalidEscapeSequenceHexadecimal")]
    InvalidEscapeSequenceHexadecimal,
    /// Malformed digits in a `\oDDD` escape.
    #[error("InvalidEscapeSequenceOctal")]
    InvalidEscapeSequenceOctal,
    /// Malformed digits in a `\uHHHH` escape.
    #[error("InvalidEscapeSequenceUnicode")]
    InvalidEscapeSequenceUnicode,
    /// The current token does not match the expected set.
    #[error("InvalidSyntax")]
    InvalidSyntax,
}

fn render(
    f: &mut std::fmt::Formatter<'_>,
    kind: ErrorKind,
    location: &Location,
    line_feed: &str,
    message: &str,
) -> std::fmt::Result {
    writeln!(f, "Error in: \x1b[36m{}\x1b[0m", location.file_name())?;
    writeln!(
        f,
        "{} -> {}: at line {} position {}",
        ErrorClass::SyntaxError,
        kind,
        location.line(),
        location.position()
    )?;
    writeln!(f, "{line_feed}")?;
    writeln!(f, "{message}")
}

/// A lexical error produced by the scanner.
///
/// The line feed shown in the report is the one captured in the error's
/// location: the text of the offending line up to the failure point.
#[derive(Debug, Clone, PartialEq, Eq, Diagnostic)]
#[diagnostic()]
pub struct ScanError {
    kind: ErrorKind,
    location: Location,
    message: EcoString,
}

impl ScanError {
    pub(crate) fn new(kind: ErrorKind, location: Location, message: impl Into<EcoString>) -> Self {
        Self {
            kind,
            location,
            message: message.into(),
        }
    }

    /// The diagnostic class.
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        ErrorClass::SyntaxError
    }

    /// The diagnostic kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Where the error occurred.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render(
            f,
            self.kind,
            &self.location,
            self.location.line_feed(),
            &self.message,
        )
    }
}

impl std::error::Error for ScanError {}

/// A grammatical error produced by the parser.
///
/// Carries the offending token's kind and the scanner's live line feed at
/// the time of failure, which may extend past the token's own snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Diagnostic)]
#[diagnostic()]
pub struct ParseError {
    kind: ErrorKind,
    location: Location,
    message: EcoString,
    line_feed: EcoString,
    token: TokenKind,
}

impl ParseError {
    pub(crate) fn new(
        kind: ErrorKind,
        token: &Token,
        message: impl Into<EcoString>,
        line_feed: impl Into<EcoString>,
    ) -> Self {
        Self {
            kind,
            location: token.location().clone(),
            message: message.into(),
            line_feed: line_feed.into(),
            token: token.kind(),
        }
    }

    /// The diagnostic class.
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        ErrorClass::SyntaxError
    }

    /// The diagnostic kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Where the error occurred.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The scanner's line feed at the time of failure.
    #[must_use]
    pub fn line_feed(&self) -> &str {
        &self.line_feed
    }

    /// The kind of the offending token.
    #[must_use]
    pub fn token(&self) -> TokenKind {
        self.token
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render(f, self.kind, &self.location, &self.line_feed, &self.message)
    }
}

impl std::error::Error for ParseError {}

/// Any diagnostic the frontend can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    /// A lexical failure.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Scan(#[from] ScanError),
    /// A grammatical failure.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    /// The diagnostic class.
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        ErrorClass::SyntaxError
    }

    /// The diagnostic kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Scan(e) => e.kind(),
            Self::Parse(e) => e.kind(),
        }
    }

    /// Where the error occurred.
    #[must_use]
    pub fn location(&self) -> &Location {
        match self {
            Self::Scan(e) => e.location(),
            Self::Parse(e) => e.location(),
        }
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Scan(e) => e.message(),
            Self::Parse(e) => e.message(),
        }
    }
}
