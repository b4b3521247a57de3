// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Scope and statement parsing for Vega.
//!
//! A scope is either a lone `pass` or one or more statements between
//! braces; empty bodies are rejected. Statements that do not open a nested
//! scope end in a delimiter: `;` or a line break.

use crate::source_analysis::error::SyntaxError;
use crate::source_analysis::token::TokenKind;

use super::Parser;

/// Outcome of attempting to start a statement from the lookahead token.
///
/// `NotAStatement` means the dispatcher found no statement-leading token;
/// the caller renders its own context-specific message for that.
pub(super) enum StatementError {
    NotAStatement,
    Syntax(SyntaxError),
}

impl From<SyntaxError> for StatementError {
    fn from(err: SyntaxError) -> Self {
        Self::Syntax(err)
    }
}

impl Parser<'_> {
    /// scope = "{" ( "pass" delim | statement {statement} ) "}"
    pub(super) fn parse_scope(&mut self) -> Result<(), SyntaxError> {
        if !self.match_token(TokenKind::LeftBrace) {
            return Err(self.syntax_error("Mismatched input '{}', expected '{'"));
        }
        if self.look_ahead(TokenKind::Pass) {
            self.line_break_delimiter = true;
            self.consume(TokenKind::Pass)?;
            self.parse_delimiter()?;
        } else {
            if self.look_ahead(TokenKind::RightBrace) {
                self.take_offending();
                return Err(self.syntax_error("Mismatched input '{}', expected 'pass;' or <statement>"));
            }
            if let Err(err) = self.parse_statement() {
                return Err(
                    self.statement_error(err, "Mismatched input '{}', expected 'pass;' or <statement>")
                );
            }
            while !self.look_ahead(TokenKind::RightBrace) {
                if let Err(err) = self.parse_statement() {
                    return Err(
                        self.statement_error(err, "Mismatched input '{}', expected <statement> or '}'")
                    );
                }
            }
        }
        if !self.match_token(TokenKind::RightBrace) {
            return Err(self.syntax_error("Mismatched input '{}', expected '}'"));
        }
        Ok(())
    }

    /// delim = ";" | LINEBREAK
    ///
    /// The caller raised `line_break_delimiter` before matching the token
    /// preceding the delimiter, so a line break is visible here.
    pub(super) fn parse_delimiter(&mut self) -> Result<(), SyntaxError> {
        if self.look_ahead(TokenKind::Semicolon) {
            self.consume(TokenKind::Semicolon)
        } else if self.look_ahead(TokenKind::LineBreak) {
            self.consume(TokenKind::LineBreak)
        } else {
            self.take_offending();
            Err(self.class_error("Mismatched input '{}', expected ';' or line break"))
        }
    }

    /// statement = "continue" delim
    ///           | "break" delim
    ///           | "if" expr scope {"elif" expr scope} \["else" scope\]
    ///           | "switch" expr "{" case+ \["default" ":" statement+\] "}"
    ///           | "while" expr scope
    ///           | "return" expr delim
    ///           | ("const"|"var") {"\[" INT "\]"} type IDENT \["=" expr\] delim
    ///           | IDENT ( callTail | arrayTail | "=" expr ) delim
    pub(super) fn parse_statement(&mut self) -> Result<(), StatementError> {
        if self.look_ahead(TokenKind::Continue) {
            self.line_break_delimiter = true;
            self.consume(TokenKind::Continue)?;
            self.parse_delimiter()?;
        } else if self.look_ahead(TokenKind::Break) {
            self.line_break_delimiter = true;
            self.consume(TokenKind::Break)?;
            self.parse_delimiter()?;
        } else if self.look_ahead(TokenKind::If) {
            self.consume(TokenKind::If)?;
            self.parse_conditional_scope()?;
            while self.look_ahead(TokenKind::Elif) {
                self.consume(TokenKind::Elif)?;
                self.parse_conditional_scope()?;
            }
            if self.look_ahead(TokenKind::Else) {
                self.consume(TokenKind::Else)?;
                self.parse_scope()?;
            }
        } else if self.look_ahead(TokenKind::Switch) {
            self.parse_switch()?;
        } else if self.look_ahead(TokenKind::While) {
            self.consume(TokenKind::While)?;
            self.parse_conditional_scope()?;
        } else if self.look_ahead(TokenKind::Return) {
            self.consume(TokenKind::Return)?;
            self.parse_expression()?;
            self.parse_delimiter()?;
        } else if self.look_ahead(TokenKind::Const) || self.look_ahead(TokenKind::Var) {
            self.parse_declaration()?;
            self.line_break_delimiter = true;
            if !self.match_token(TokenKind::Ident) {
                return Err(self.syntax_error("Mismatched input '{}', expected <identifier>").into());
            }
            if self.look_ahead(TokenKind::Assign) {
                self.consume(TokenKind::Assign)?;
                self.parse_expression()?;
            }
            self.parse_delimiter()?;
        } else if self.look_ahead(TokenKind::Ident) {
            self.consume(TokenKind::Ident)?;
            if self.look_ahead(TokenKind::LeftParen) {
                self.parse_call_tail()?;
            } else if self.look_ahead(TokenKind::LeftBracket) || self.look_ahead(TokenKind::Assign) {
                while self.look_ahead(TokenKind::LeftBracket) {
                    self.parse_array_access()?;
                }
                if !self.match_token(TokenKind::Assign) {
                    return Err(self.syntax_error("Mismatched input '{}', expected '[', or '='").into());
                }
                self.parse_expression()?;
            } else {
                self.take_offending();
                return Err(
                    self.syntax_error("Mismatched input '{}', expected '(', '[', or '='").into()
                );
            }
            self.parse_delimiter()?;
        } else {
            return Err(StatementError::NotAStatement);
        }
        Ok(())
    }

    /// declaration = ("const"|"var") {"\[" INT "\]"} type
    ///
    /// The declared identifier is matched by the caller, which also raises
    /// the delimiter flag first.
    fn parse_declaration(&mut self) -> Result<(), SyntaxError> {
        if self.look_ahead(TokenKind::Const) {
            self.consume(TokenKind::Const)?;
        } else if self.look_ahead(TokenKind::Var) {
            self.consume(TokenKind::Var)?;
        }
        while self.look_ahead(TokenKind::LeftBracket) {
            self.consume(TokenKind::LeftBracket)?;
            if !self.match_token(TokenKind::Int) {
                return Err(self.syntax_error("Mismatched input '{}', expected <INT>"));
            }
            if !self.match_token(TokenKind::RightBracket) {
                return Err(self.syntax_error("Mismatched input '{}', expected ']'"));
            }
        }
        self.parse_type()
    }

    /// conditionalScope = expr scope
    fn parse_conditional_scope(&mut self) -> Result<(), SyntaxError> {
        self.parse_expression()?;
        self.parse_scope()
    }

    /// "switch" expr "{" case+ \["default" ":" statement+\] "}"
    fn parse_switch(&mut self) -> Result<(), StatementError> {
        self.consume(TokenKind::Switch)?;
        self.parse_expression()?;
        if !self.match_token(TokenKind::LeftBrace) {
            return Err(self.syntax_error("Mismatched input '{}', expected '{'").into());
        }
        if !self.match_token(TokenKind::Case) {
            return Err(self.syntax_error("Mismatched input '{}', expected 'case' or 'default'").into());
        }
        self.parse_case_body()?;
        while self.look_ahead(TokenKind::Case) {
            self.consume(TokenKind::Case)?;
            self.parse_case_body()?;
        }
        if self.look_ahead(TokenKind::Default) {
            self.consume(TokenKind::Default)?;
            if !self.match_token(TokenKind::Colon) {
                return Err(self.syntax_error("Mismatched input '{}', expected ':'").into());
            }
            if let Err(err) = self.parse_statement() {
                return Err(self.statement_error(err, "Mismatched input '{}', expected <statement>").into());
            }
            while !self.look_ahead(TokenKind::RightBrace) {
                if let Err(err) = self.parse_statement() {
                    return Err(
                        self.statement_error(err, "Mismatched input '{}', expected <statement> or '}'").into()
                    );
                }
            }
        }
        self.consume(TokenKind::RightBrace)?;
        Ok(())
    }

    /// case = terminal ":" statement+; the `case` keyword is already
    /// consumed on entry.
    fn parse_case_body(&mut self) -> Result<(), StatementError> {
        self.parse_terminal()?;
        if !self.match_token(TokenKind::Colon) {
            return Err(self.syntax_error("Mismatched input '{}', expected ':'").into());
        }
        if let Err(err) = self.parse_statement() {
            return Err(self.statement_error(err, "Mismatched input '{}', expected <statement>").into());
        }
        while !self.look_ahead(TokenKind::RightBrace)
            && !self.look_ahead(TokenKind::Case)
            && !self.look_ahead(TokenKind::Default)
        {
            if let Err(err) = self.parse_statement() {
                return Err(self
                    .statement_error(
                        err,
                        "Mismatched input '{}', expected <statement>, another 'case' or 'default' keyword or '}'",
                    )
                    .into());
            }
        }
        Ok(())
    }
}
