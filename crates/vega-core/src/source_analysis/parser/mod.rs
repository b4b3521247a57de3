// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser for Vega source code.
//!
//! The parser pulls tokens from the [`Scanner`] with one token of lookahead
//! and validates the grammar, producing at most one diagnostic per run.
//! There is no error recovery: the first violation is reported and parsing
//! stops.
//!
//! # Statement terminators
//!
//! Vega is whitespace-insensitive except at statement ends, where either
//! `;` or a line break terminates the statement. The parser normally skips
//! `LINEBREAK` tokens when pulling from the scanner; it raises the
//! `line_break_delimiter` flag immediately before matching a token that may
//! end a statement, so the following pull surfaces a line break instead of
//! skipping it. The flag clears on the next pull.
//!
//! # Diagnostics
//!
//! Every production carries a pre-written message template rendered against
//! the offending token's literal. A lexical error encountered while pulling
//! tokens is latched and beats any later grammatical mismatch.
//!
//! # Example
//!
//! ```
//! use vega_core::source_analysis::{parse, SourceFile};
//!
//! let file = SourceFile::new("demo.vg", *b"func main() int { return 0; }");
//! assert!(parse(&file).is_ok());
//! ```

use ecow::EcoString;

use crate::semantic_analysis::SymbolTable;

use super::error::{ErrorKind, ParseError, SyntaxError};
use super::scanner::Scanner;
use super::source::SourceFile;
use super::token::{Location, Token, TokenKind};

mod expressions;
mod statements;


use statements::StatementError;

/// Parses a whole source file: one or more function declarations up to EOF.
///
/// # Errors
///
/// Returns the first lexical or grammatical diagnostic.
pub fn parse(file: &SourceFile) -> Result<(), SyntaxError> {
    tracing::debug!(file = %file.name(), "parsing source file");
    Parser::new(file).parse()
}

/// The parser state.
///
/// `current` is the token under examination, `next` the single token of
/// lookahead. Both outlive one shift each; the literal text is owned by the
/// tokens themselves.
pub struct Parser<'src> {
    file: &'src SourceFile,
    scanner: Scanner<'src>,
    /// First lexical error seen; replayed by every later diagnostic.
    scan_error: Option<SyntaxError>,
    /// When raised, the next pull surfaces `LINEBREAK` instead of skipping
    /// it; cleared by that pull.
    line_break_delimiter: bool,
    current: Option<Token>,
    next: Option<Token>,
    /// Owned by the parser so later passes can plug in; this pass does not
    /// populate it.
    symbols: SymbolTable,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `file`.
    #[must_use]
    pub fn new(file: &'src SourceFile) -> Self {
        Self {
            file,
            scanner: Scanner::new(file),
            scan_error: None,
            line_break_delimiter: false,
            current: None,
            next: None,
            symbols: SymbolTable::new(),
        }
    }

    /// The symbol table this parser owns.
    #[must_use]
    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Runs the parse.
    ///
    /// # Errors
    ///
    /// Returns the first lexical or grammatical diagnostic.
    pub fn parse(&mut self) -> Result<(), SyntaxError> {
        self.parse_program()
    }

    // ========================================================================
    // Token pipeline
    // ========================================================================

    /// Pulls the next token from the scanner, skipping line breaks unless
    /// the delimiter flag is raised. The flag is consumed by the pull.
    fn get_token(&mut self) -> Result<Token, SyntaxError> {
        loop {
            let token = self.scanner.scan()?;
            if self.line_break_delimiter {
                self.line_break_delimiter = false;
                return Ok(token);
            }
            if token.kind() != TokenKind::LineBreak {
                return Ok(token);
            }
        }
    }

    /// Shifts `current ← next` and refills the lookahead.
    fn read_token(&mut self) -> Result<(), SyntaxError> {
        if let Some(err) = &self.scan_error {
            return Err(err.clone());
        }
        self.current = match self.next.take() {
            Some(token) => Some(token),
            None => Some(self.get_token()?),
        };
        self.next = Some(self.get_token()?);
        Ok(())
    }

    /// Examines the lookahead token without consuming it.
    fn look_ahead(&self, kind: TokenKind) -> bool {
        self.next.as_ref().is_some_and(|t| t.kind() == kind)
    }

    /// Advances and compares the new current token. Scanner failures are
    /// latched for the next diagnostic and read as a mismatch.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if let Err(err) = self.read_token() {
            self.scan_error = Some(err);
            return false;
        }
        self.current.as_ref().is_some_and(|t| t.kind() == kind)
    }

    /// Consumes a token the lookahead already confirmed. A mismatch can
    /// only come from the scanner, whose latched error wins.
    fn consume(&mut self, kind: TokenKind) -> Result<(), SyntaxError> {
        if self.match_token(kind) {
            Ok(())
        } else {
            Err(self.syntax_error("Unexpected token '{}'"))
        }
    }

    /// Shifts the offending lookahead token into `current` so the rendered
    /// diagnostic names it. The match itself is guaranteed to fail.
    fn take_offending(&mut self) {
        let _ = self.match_token(TokenKind::Illegal);
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// The token diagnostics point at.
    fn offending_token(&self) -> Token {
        self.current.clone().unwrap_or_else(|| {
            Token::new(
                TokenKind::Eof,
                TokenKind::Eof.spelling(),
                Location::synthetic(self.file.name().as_str()),
            )
        })
    }

    fn rendered(template: &str, literal: &str) -> EcoString {
        template.replacen("{}", literal, 1).into()
    }

    /// Builds the diagnostic for a failed match. A latched scanner error
    /// wins; end of input where one specific token was required reports
    /// `UnexpectedEOF`; anything else is `InvalidSyntax` with `template`
    /// rendered against the current token's literal.
    fn syntax_error(&self, template: &str) -> SyntaxError {
        if let Some(err) = &self.scan_error {
            return err.clone();
        }
        let token = self.offending_token();
        if token.kind().is_eof() {
            ParseError::new(
                ErrorKind::UnexpectedEof,
                &token,
                "Unexpected End Of File",
                self.scanner.line_feed(),
            )
            .into()
        } else {
            ParseError::new(
                ErrorKind::InvalidSyntax,
                &token,
                Self::rendered(template, token.literal()),
                self.scanner.line_feed(),
            )
            .into()
        }
    }

    /// Like [`syntax_error`](Self::syntax_error) for productions that
    /// expect a token class rather than one specific token: the template is
    /// rendered even when the offending token is `EOF`.
    fn class_error(&self, template: &str) -> SyntaxError {
        if let Some(err) = &self.scan_error {
            return err.clone();
        }
        let token = self.offending_token();
        ParseError::new(
            ErrorKind::InvalidSyntax,
            &token,
            Self::rendered(template, token.literal()),
            self.scanner.line_feed(),
        )
        .into()
    }

    /// Maps a statement failure: grammar errors pass through, while a
    /// lookahead that starts no statement becomes `template` rendered
    /// against the offending token.
    fn statement_error(&mut self, err: StatementError, template: &str) -> SyntaxError {
        match err {
            StatementError::Syntax(err) => err,
            StatementError::NotAStatement => {
                self.take_offending();
                self.syntax_error(template)
            }
        }
    }

    // ========================================================================
    // Program structure
    // ========================================================================

    /// program = functionDecl {functionDecl} EOF
    fn parse_program(&mut self) -> Result<(), SyntaxError> {
        loop {
            self.parse_function_decl()?;
            if !self.look_ahead(TokenKind::Func) {
                break;
            }
        }
        if !self.match_token(TokenKind::Eof) {
            return Err(self.syntax_error("Extraneous input '{}', expected EOF or 'func'"));
        }
        Ok(())
    }

    /// functionDecl = "func" IDENT "(" \[paramList\] ")" returnType scope
    fn parse_function_decl(&mut self) -> Result<(), SyntaxError> {
        if !self.match_token(TokenKind::Func) {
            return Err(self.syntax_error("Missing 'func' at '{}'"));
        }
        if !self.match_token(TokenKind::Ident) {
            return Err(self.syntax_error("Mismatched input '{}', expected <identifier>"));
        }
        if !self.match_token(TokenKind::LeftParen) {
            return Err(self.syntax_error("Mismatched input '{}', expected '('"));
        }
        if self.look_ahead(TokenKind::Ident) || self.look_ahead(TokenKind::LeftBracket) {
            self.parse_param_list()?;
        }
        if !self.match_token(TokenKind::RightParen) {
            return Err(
                self.syntax_error("Mismatched input '{}', expected <terminal_variable_type> or ')'")
            );
        }
        self.parse_return_type()?;
        self.parse_scope()
    }

    /// paramList = paramDef {"," paramDef}
    fn parse_param_list(&mut self) -> Result<(), SyntaxError> {
        self.parse_param_def()?;
        while self.look_ahead(TokenKind::Comma) {
            self.consume(TokenKind::Comma)?;
            if !(self.look_ahead(TokenKind::Ident) || self.look_ahead(TokenKind::LeftBracket)) {
                self.take_offending();
                return Err(
                    self.syntax_error("Mismatched input '{}', expected <terminal_variable_type>")
                );
            }
            self.parse_param_def()?;
        }
        if !self.look_ahead(TokenKind::RightParen) {
            self.take_offending();
            return Err(self.syntax_error("Mismatched input '{}', expected ',' or ')'"));
        }
        Ok(())
    }

    /// paramDef = {"[" "]"} type IDENT
    fn parse_param_def(&mut self) -> Result<(), SyntaxError> {
        while self.look_ahead(TokenKind::LeftBracket) {
            self.consume(TokenKind::LeftBracket)?;
            if !self.match_token(TokenKind::RightBracket) {
                return Err(self.syntax_error("Extraneous input '{}', expected ']'"));
            }
        }
        self.parse_type()?;
        if !self.match_token(TokenKind::Ident) {
            return Err(self.syntax_error("Mismatched input '{}', expected <identifier>"));
        }
        Ok(())
    }

    /// returnType = {"[" "]"} type
    fn parse_return_type(&mut self) -> Result<(), SyntaxError> {
        while self.look_ahead(TokenKind::LeftBracket) {
            self.consume(TokenKind::LeftBracket)?;
            if !self.match_token(TokenKind::RightBracket) {
                return Err(self.syntax_error("Mismatched input '{}', expected ']'"));
            }
        }
        self.parse_type()
    }

    /// type = IDENT; type semantics are deferred to later passes.
    fn parse_type(&mut self) -> Result<(), SyntaxError> {
        if !self.match_token(TokenKind::Ident) {
            return Err(self.syntax_error("Mismatched input '{}', expected <variable_type>"));
        }
        Ok(())
    }
}
