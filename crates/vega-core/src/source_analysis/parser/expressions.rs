// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Expression parsing for Vega.
//!
//! The ladder runs `expr > cmp > sum > term > factor > unary`, each level
//! looping over its own left-associative operator set:
//!
//! | Level  | Operators                          |
//! |--------|------------------------------------|
//! | expr   | `or` `\|\|` `and` `&&`             |
//! | cmp    | `==` `!=` `>=` `>` `<=` `<`        |
//! | sum    | `+` `-`                            |
//! | term   | `*` `/`                            |
//! | factor | prefix `!` / `not`                 |
//!
//! Unary `-` is not a prefix; subtraction is binary only.

use crate::source_analysis::error::SyntaxError;
use crate::source_analysis::token::TokenKind;

use super::Parser;

impl Parser<'_> {
    /// Consumes the lookahead token when its kind is one of `kinds`.
    fn match_operator(&mut self, kinds: &[TokenKind]) -> Result<bool, SyntaxError> {
        for &kind in kinds {
            if self.look_ahead(kind) {
                self.consume(kind)?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// expr = cmp {("or"|"||"|"and"|"&&") cmp}
    pub(super) fn parse_expression(&mut self) -> Result<(), SyntaxError> {
        self.parse_comparison()?;
        while self.match_operator(&[
            TokenKind::Or,
            TokenKind::OrOr,
            TokenKind::And,
            TokenKind::AndAnd,
        ])? {
            self.parse_comparison()?;
        }
        Ok(())
    }

    /// cmp = sum {("=="|"!="|">="|">"|"<="|"<") sum}
    fn parse_comparison(&mut self) -> Result<(), SyntaxError> {
        self.parse_sum()?;
        while self.match_operator(&[
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::GreaterEq,
            TokenKind::Greater,
            TokenKind::LessEq,
            TokenKind::Less,
        ])? {
            self.parse_sum()?;
        }
        Ok(())
    }

    /// sum = term {("+"|"-") term}
    fn parse_sum(&mut self) -> Result<(), SyntaxError> {
        self.parse_term()?;
        while self.match_operator(&[TokenKind::Plus, TokenKind::Minus])? {
            self.parse_term()?;
        }
        Ok(())
    }

    /// term = factor {("*"|"/") factor}
    fn parse_term(&mut self) -> Result<(), SyntaxError> {
        self.parse_factor()?;
        while self.match_operator(&[TokenKind::Star, TokenKind::Slash])? {
            self.parse_factor()?;
        }
        Ok(())
    }

    /// factor = \["!"|"not"\] unary
    fn parse_factor(&mut self) -> Result<(), SyntaxError> {
        self.match_operator(&[TokenKind::Bang, TokenKind::Not])?;
        self.parse_unary()
    }

    /// unary = IDENT \[{"\[" expr "\]"} | callTail\]
    ///       | "(" expr ")"
    ///       | "\[" expr {"," expr} "\]"
    ///       | terminal
    fn parse_unary(&mut self) -> Result<(), SyntaxError> {
        if self.look_ahead(TokenKind::Ident) {
            // An identifier can end the statement, so the pull behind it
            // must surface a line break.
            self.line_break_delimiter = true;
            self.consume(TokenKind::Ident)?;
            if self.look_ahead(TokenKind::LeftBracket) {
                while self.look_ahead(TokenKind::LeftBracket) {
                    self.parse_array_access()?;
                }
            } else if self.look_ahead(TokenKind::LeftParen) {
                self.parse_call_tail()?;
            }
            Ok(())
        } else if self.look_ahead(TokenKind::LeftParen) {
            self.consume(TokenKind::LeftParen)?;
            self.parse_expression()?;
            self.line_break_delimiter = true;
            if !self.match_token(TokenKind::RightParen) {
                return Err(self.syntax_error("Mismatched input '{}', expected ')'"));
            }
            Ok(())
        } else if self.look_ahead(TokenKind::LeftBracket) {
            self.consume(TokenKind::LeftBracket)?;
            self.parse_expression()?;
            while self.look_ahead(TokenKind::Comma) {
                self.consume(TokenKind::Comma)?;
                self.parse_expression()?;
            }
            self.line_break_delimiter = true;
            if !self.match_token(TokenKind::RightBracket) {
                return Err(self.syntax_error("Mismatched input '{}', expected ',' or ']'"));
            }
            Ok(())
        } else if self.parse_terminal().is_err() {
            Err(self.syntax_error("Mismatched input '{}', expected <unary>"))
        } else {
            Ok(())
        }
    }

    /// terminal = INT | FLOAT | "true" | "false" | CHAR | STRING
    ///
    /// Raises the delimiter flag first: a terminal can end a statement, so
    /// the pull behind it must surface a line break.
    pub(super) fn parse_terminal(&mut self) -> Result<(), SyntaxError> {
        self.line_break_delimiter = true;
        const TERMINALS: [TokenKind; 6] = [
            TokenKind::Int,
            TokenKind::Float,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Char,
            TokenKind::String,
        ];
        for kind in TERMINALS {
            if self.look_ahead(kind) {
                return self.consume(kind);
            }
        }
        self.take_offending();
        Err(self.syntax_error("Mismatched input '{}', expected <terminal>"))
    }

    /// arrayAccess = "\[" expr "\]"
    pub(super) fn parse_array_access(&mut self) -> Result<(), SyntaxError> {
        self.consume(TokenKind::LeftBracket)?;
        self.parse_expression()?;
        self.line_break_delimiter = true;
        if !self.match_token(TokenKind::RightBracket) {
            return Err(self.syntax_error("Mismatched input '{}', expected ']'"));
        }
        Ok(())
    }

    /// callTail = "(" \[expr {"," expr}\] ")"
    pub(super) fn parse_call_tail(&mut self) -> Result<(), SyntaxError> {
        self.consume(TokenKind::LeftParen)?;
        if !self.look_ahead(TokenKind::RightParen) {
            self.parse_expression()?;
            while self.look_ahead(TokenKind::Comma) {
                if !self.match_token(TokenKind::Comma) {
                    return Err(self.syntax_error("Mismatched input '{}', expected ',' or ')'"));
                }
                self.parse_expression()?;
            }
        }
        self.line_break_delimiter = true;
        if !self.match_token(TokenKind::RightParen) {
            return Err(self.syntax_error("Mismatched input '{}', expected ',' or ')'"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::source_analysis::error::ErrorKind;
    use crate::source_analysis::parser::parse;
    use crate::source_analysis::source::SourceFile;

    fn parses(expression: &str) -> bool {
        let source = format!("func test() int {{ return {expression}; }}");
        parse(&SourceFile::new("test.vg", source.into_bytes())).is_ok()
    }

    #[test]
    fn terminals_and_identifiers() {
        assert!(parses("1"));
        assert!(parses("1.5"));
        assert!(parses("true"));
        assert!(parses("false"));
        assert!(parses("'a'"));
        assert!(parses("\"text\""));
        assert!(parses("someVar"));
    }

    #[test]
    fn operator_ladder_accepts_chains() {
        assert!(parses("1 + 2 - 3"));
        assert!(parses("1 * 2 / 3"));
        assert!(parses("1 + 2 * 3 - 4 / 5"));
        assert!(parses("a == b != c"));
        assert!(parses("a < b <= c > d >= e"));
        assert!(parses("a and b or c && d || e"));
        assert!(parses("not a"));
        assert!(parses("!a"));
        assert!(parses("not a == b and !c"));
    }

    #[test]
    fn unary_forms() {
        assert!(parses("(1 + 2) * 3"));
        assert!(parses("a[1]"));
        assert!(parses("a[1][b + 2]"));
        assert!(parses("f()"));
        assert!(parses("f(1, a, b[2], g(3))"));
        assert!(parses("[1, 2, 3]"));
        assert!(parses("[a + b]"));
    }

    #[test]
    fn array_index_takes_a_full_expression() {
        assert!(parses("a[b == c]"));
        assert!(parses("a[b and c]"));
        assert!(parses("[a == b, c or d]"));
    }

    #[test]
    fn minus_is_not_a_prefix() {
        assert!(!parses("-1"));
        assert!(parses("0 - 1"));
    }

    #[test]
    fn double_negation_is_rejected() {
        // factor admits at most one prefix negation
        assert!(!parses("!!a"));
        assert!(!parses("not not a"));
    }

    #[test]
    fn missing_operand_names_the_unary() {
        let source = "func test() int { return 1 + ; }";
        let err = parse(&SourceFile::new("test.vg", source.as_bytes().to_vec()))
            .expect_err("expected a diagnostic");
        assert_eq!(err.kind(), ErrorKind::InvalidSyntax);
        assert_eq!(err.message(), "Mismatched input ';', expected <unary>");
    }
}
