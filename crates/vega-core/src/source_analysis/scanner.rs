// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for Vega source code.
//!
//! The [`Scanner`] is a pull-based producer: each [`Scanner::scan`] call
//! yields the next [`Token`] or the first lexical error. It tracks the line
//! number, the position within the line, and the text of the current line,
//! all of which flow into diagnostics.
//!
//! Escape sequences inside character and string literals are decoded during
//! scanning, so a token's literal carries the decoded content between its
//! quotes.
//!
//! # Example
//!
//! ```
//! use vega_core::source_analysis::{tokenize, SourceFile, TokenKind};
//!
//! let file = SourceFile::new("demo.vg", *b"1 + 2");
//! let tokens = tokenize(&file).unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Int, TokenKind::Plus, TokenKind::Int, TokenKind::Eof]
//! );
//! ```

use ecow::EcoString;

use super::error::{ErrorKind, ScanError, SyntaxError};
use super::source::{SourceFile, SourceReader};
use super::token::{Location, Token, TokenKind};

/// The cleared-peek sentinel. An embedded NUL byte in the source terminates
/// scanning exactly like end of input.
const NUL: char = '\0';

/// Scans a whole file, returning every token through the first `EOF`.
///
/// # Errors
///
/// Returns the first lexical error.
pub fn tokenize(file: &SourceFile) -> Result<Vec<Token>, SyntaxError> {
    let mut scanner = Scanner::new(file);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan()?;
        let done = token.kind().is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }
    tracing::trace!(file = %file.name(), tokens = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// A lexical scanner over one [`SourceFile`].
///
/// The scanner is lazy: one token per [`scan`](Self::scan) call, with the
/// parser driving it. After the source is exhausted it returns `EOF`
/// indefinitely. After an error it is not required to be usable.
#[derive(Debug)]
pub struct Scanner<'src> {
    file: &'src SourceFile,
    reader: SourceReader<'src>,
    /// The most recently read, not yet classified character.
    peek: char,
    /// Text of the current line accumulated so far.
    line_feed: String,
    line: usize,
    position: usize,
    eof: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `file`.
    #[must_use]
    pub fn new(file: &'src SourceFile) -> Self {
        Self {
            file,
            reader: file.reader(),
            peek: NUL,
            line_feed: String::new(),
            line: 1,
            position: 0,
            eof: false,
        }
    }

    /// The text of the current line read so far, used verbatim in
    /// diagnostics.
    #[must_use]
    pub fn line_feed(&self) -> &str {
        &self.line_feed
    }

    /// The current one-based line number.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    fn location_at(&self, position: usize) -> Location {
        Location::new(
            self.file.name().as_str(),
            self.line,
            position,
            self.line_feed.as_str(),
        )
    }

    fn error(&self, kind: ErrorKind, message: &str) -> SyntaxError {
        ScanError::new(kind, self.location_at(self.position), message).into()
    }

    /// Builds a token ending at the current position. The position is
    /// backed up by the spelling length to point at the token's start.
    fn token(&self, kind: TokenKind, literal: &str) -> Token {
        let text: EcoString = if kind.is_literal() {
            literal.into()
        } else {
            kind.spelling().into()
        };
        let position = self.position.saturating_sub(text.chars().count());
        Token::new(kind, text, self.location_at(position))
    }

    /// Reads one character from the source. End of input is not an error:
    /// it sets the eof flag and clears `peek`.
    fn readch(&mut self) -> Result<(), SyntaxError> {
        if self.eof {
            self.peek = NUL;
            return Ok(());
        }
        match self.reader.read() {
            Ok(Some(c)) => {
                self.line_feed.push(c);
                self.position += 1;
                self.peek = c;
                Ok(())
            }
            Ok(None) => {
                self.eof = true;
                self.peek = NUL;
                Ok(())
            }
            Err(_) => Err(self.error(ErrorKind::MalformedCode, "Error parsing file")),
        }
    }

    /// Reverts the last [`readch`](Self::readch). A no-op (except clearing
    /// `peek`) once the end of input was seen.
    fn unreadch(&mut self) {
        if !self.eof && self.reader.unread() {
            self.line_feed.pop();
            self.position = self.position.saturating_sub(1);
        }
        self.peek = NUL;
    }

    /// Reads one character ahead; consumes it when it equals `expected`,
    /// otherwise leaves it in `peek` for the next dispatch.
    fn readcch(&mut self, expected: char) -> Result<bool, SyntaxError> {
        self.readch()?;
        if self.peek == expected {
            self.peek = NUL;
            return Ok(true);
        }
        Ok(false)
    }

    /// Produces the next token.
    ///
    /// # Errors
    ///
    /// Returns the first lexical error; see [`ErrorKind`] for the taxonomy.
    pub fn scan(&mut self) -> Result<Token, SyntaxError> {
        loop {
            if self.peek == NUL {
                self.readch()?;
            }
            if self.peek == NUL {
                return Ok(self.token(TokenKind::Eof, ""));
            }
            match self.peek {
                '\n' => {
                    let token = self.token(TokenKind::LineBreak, "");
                    self.line_feed.clear();
                    self.position = 0;
                    self.line += 1;
                    self.peek = NUL;
                    return Ok(token);
                }
                '/' => {
                    if let Some(token) = self.scan_comment()? {
                        return Ok(token);
                    }
                }
                ' ' | '\t' | '\x0B' | '\r' => self.peek = NUL,
                '!' => return self.scan_combined('=', TokenKind::NotEq),
                '=' => return self.scan_combined('=', TokenKind::Eq),
                '<' => return self.scan_combined('=', TokenKind::LessEq),
                '>' => return self.scan_combined('=', TokenKind::GreaterEq),
                '&' => return self.scan_combined('&', TokenKind::AndAnd),
                '|' => return self.scan_combined('|', TokenKind::OrOr),
                '\'' => return self.scan_char(),
                '"' => return self.scan_string(),
                '0'..='9' => {
                    let token = self.scan_number()?;
                    self.unreadch();
                    return Ok(token);
                }
                'A'..='Z' | 'a'..='z' => {
                    let token = self.scan_word()?;
                    self.unreadch();
                    return Ok(token);
                }
                '+' => return Ok(self.single(TokenKind::Plus)),
                '-' => return Ok(self.single(TokenKind::Minus)),
                '*' => return Ok(self.single(TokenKind::Star)),
                '{' => return Ok(self.single(TokenKind::LeftBrace)),
                '}' => return Ok(self.single(TokenKind::RightBrace)),
                '[' => return Ok(self.single(TokenKind::LeftBracket)),
                ']' => return Ok(self.single(TokenKind::RightBracket)),
                '(' => return Ok(self.single(TokenKind::LeftParen)),
                ')' => return Ok(self.single(TokenKind::RightParen)),
                ';' => return Ok(self.single(TokenKind::Semicolon)),
                ':' => return Ok(self.single(TokenKind::Colon)),
                ',' => return Ok(self.single(TokenKind::Comma)),
                _ => return Err(self.error(ErrorKind::InvalidCharacter, "Invalid character")),
            }
        }
    }

    /// Emits a single-character token and consumes `peek`.
    fn single(&mut self, kind: TokenKind) -> Token {
        let token = self.token(kind, "");
        self.peek = NUL;
        token
    }

    /// Scans tokens combined from two characters, e.g. `==` or `!=`. One
    /// character is always consumed; when it does not complete the pair it
    /// stays in `peek` for the next dispatch.
    fn scan_combined(&mut self, second: char, combined: TokenKind) -> Result<Token, SyntaxError> {
        let first = self.peek;
        let kind = if self.readcch(second)? {
            combined
        } else {
            match first {
                '!' => TokenKind::Bang,
                '=' => TokenKind::Assign,
                '<' => TokenKind::Less,
                '>' => TokenKind::Greater,
                '|' => TokenKind::Pipe,
                _ => TokenKind::Amp,
            }
        };
        Ok(self.token(kind, ""))
    }

    /// Skips a `//` or `/* */` comment; yields a `/` token when the slash
    /// turned out to be division.
    fn scan_comment(&mut self) -> Result<Option<Token>, SyntaxError> {
        self.readch()?;
        match self.peek {
            '/' => {
                while self.peek != '\n' && self.peek != NUL {
                    self.readch()?;
                }
                // Put the newline back so the next scan emits LINEBREAK.
                self.unreadch();
                Ok(None)
            }
            '*' => {
                self.peek = NUL;
                loop {
                    if self.peek == NUL {
                        self.readch()?;
                    }
                    if self.peek == NUL {
                        // Unterminated comment swallows the rest of the file.
                        break;
                    }
                    match self.peek {
                        '\n' => {
                            self.line += 1;
                            self.peek = NUL;
                        }
                        '*' => {
                            if self.readcch('/')? {
                                break;
                            }
                        }
                        _ => self.peek = NUL,
                    }
                }
                Ok(None)
            }
            _ => Ok(Some(self.token(TokenKind::Slash, ""))),
        }
    }

    /// Scans a character literal. The literal keeps both quotes around the
    /// decoded sign.
    fn scan_char(&mut self) -> Result<Token, SyntaxError> {
        let mut literal = String::from('\'');
        let mut signs = 0usize;
        self.readch()?;
        while self.peek != '\'' {
            let sign = self.scan_sign(TokenKind::Char)?;
            literal.push(sign);
            signs += 1;
            self.readch()?;
        }
        if signs != 1 {
            return Err(self.error(
                ErrorKind::LiteralNotTerminated,
                "Char can only have one character",
            ));
        }
        literal.push('\'');
        let token = self.token(TokenKind::Char, &literal);
        self.peek = NUL;
        Ok(token)
    }

    /// Scans a string literal. The literal keeps both quotes around the
    /// decoded content.
    fn scan_string(&mut self) -> Result<Token, SyntaxError> {
        let mut literal = String::from('"');
        self.readch()?;
        while self.peek != '"' {
            let sign = self.scan_sign(TokenKind::String)?;
            literal.push(sign);
            self.readch()?;
        }
        literal.push('"');
        let token = self.token(TokenKind::String, &literal);
        self.peek = NUL;
        Ok(token)
    }

    /// Decodes one logical sign inside a literal of the given flavor,
    /// resolving escape sequences. An unescaped newline or the end of input
    /// means the literal was never terminated.
    fn scan_sign(&mut self, flavor: TokenKind) -> Result<char, SyntaxError> {
        match self.peek {
            '\n' | NUL => Err(self.error(
                ErrorKind::LiteralNotTerminated,
                "String literal not terminated",
            )),
            '\\' => {
                self.readch()?;
                match self.peek {
                    'b' => Ok('\u{8}'),
                    'f' => Ok('\u{c}'),
                    'n' => Ok('\n'),
                    'r' => Ok('\r'),
                    't' => Ok('\t'),
                    'v' => Ok('\x0B'),
                    '\\' => Ok('\\'),
                    '"' if flavor == TokenKind::String => Ok('"'),
                    '\'' if flavor == TokenKind::Char => Ok('\''),
                    'x' | 'u' | 'o' => self.scan_encoded(),
                    _ => Err(self.error(
                        ErrorKind::InvalidEscapeSequence,
                        "Invalid escape sequence in literal",
                    )),
                }
            }
            sign => Ok(sign),
        }
    }

    /// Decodes a numeric escape: `\xHH`, `\uHHHH`, or `\oDDD`. `peek` holds
    /// the prefix character on entry.
    fn scan_encoded(&mut self) -> Result<char, SyntaxError> {
        let value = match self.peek {
            'x' => self.scan_hex_digits(
                2,
                ErrorKind::InvalidEscapeSequenceHexadecimal,
                "Invalid hexadecimal literal. Must contain two digits between 00-FF",
            )?,
            'u' => self.scan_hex_digits(
                4,
                ErrorKind::InvalidEscapeSequenceUnicode,
                "Invalid unicode literal. Must contain four digits between 0000-FFFF",
            )?,
            _ => self.scan_octal_digits()?,
        };
        char::from_u32(value).ok_or_else(|| {
            self.error(
                ErrorKind::InvalidEscapeSequenceUnicode,
                "Invalid unicode literal. Must contain four digits between 0000-FFFF",
            )
        })
    }

    fn scan_hex_digits(
        &mut self,
        count: usize,
        kind: ErrorKind,
        message: &str,
    ) -> Result<u32, SyntaxError> {
        let mut value = 0;
        for _ in 0..count {
            self.readch()?;
            match self.peek.to_digit(16) {
                Some(digit) => value = value * 16 + digit,
                None => return Err(self.error(kind, message)),
            }
        }
        Ok(value)
    }

    /// The first octal digit is limited to `0..=3` so the value fits one
    /// byte, mirroring the 000-377 range named in the message.
    fn scan_octal_digits(&mut self) -> Result<u32, SyntaxError> {
        const MESSAGE: &str = "Invalid octal literal. Must contain three digits between 000-377";
        self.readch()?;
        let mut value = match self.peek {
            first @ '0'..='3' => first as u32 - '0' as u32,
            _ => return Err(self.error(ErrorKind::InvalidEscapeSequenceOctal, MESSAGE)),
        };
        for _ in 0..2 {
            self.readch()?;
            match self.peek.to_digit(8) {
                Some(digit) => value = value * 8 + digit,
                None => return Err(self.error(ErrorKind::InvalidEscapeSequenceOctal, MESSAGE)),
            }
        }
        Ok(value)
    }

    /// Accumulates digits into an `INT`, switching to `FLOAT` when a `.`
    /// follows. The caller unreads the terminating character.
    fn scan_number(&mut self) -> Result<Token, SyntaxError> {
        let mut digits = String::new();
        while self.peek.is_ascii_digit() {
            digits.push(self.peek);
            self.readch()?;
        }
        if self.peek != '.' {
            return Ok(self.token(TokenKind::Int, &digits));
        }
        digits.push('.');
        self.readch()?;
        while self.peek.is_ascii_digit() {
            digits.push(self.peek);
            self.readch()?;
        }
        Ok(self.token(TokenKind::Float, &digits))
    }

    /// Accumulates an alphanumeric word and classifies it through the
    /// keyword table. The caller unreads the terminating character.
    fn scan_word(&mut self) -> Result<Token, SyntaxError> {
        let mut word = String::new();
        while self.peek.is_ascii_alphanumeric() {
            word.push(self.peek);
            self.readch()?;
        }
        Ok(self.token(TokenKind::lookup(&word), &word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_file(source: &str) -> SourceFile {
        SourceFile::new("/path/to/test.vg", source.as_bytes().to_vec())
    }

    fn kinds_and_literals(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(&test_file(source))
            .expect("scan failed")
            .into_iter()
            .map(|t| (t.kind(), t.literal().to_string()))
            .collect()
    }

    fn first_error(source: &str) -> SyntaxError {
        let file = test_file(source);
        let mut scanner = Scanner::new(&file);
        loop {
            match scanner.scan() {
                Ok(token) if token.kind().is_eof() => panic!("no error for {source:?}"),
                Ok(_) => {}
                Err(err) => return err,
            }
        }
    }

    #[test]
    fn scans_literals_with_decoded_escapes() {
        let tests = [
            ("\"my literal\"", TokenKind::String, "\"my literal\""),
            ("\"\\tmy \\nliteral\"", TokenKind::String, "\"\tmy \nliteral\""),
            ("'\\x3A'", TokenKind::Char, "':'"),
            ("'A'", TokenKind::Char, "'A'"),
            ("\"my \\o123 \\\\\"", TokenKind::String, "\"my S \\\""),
            ("\"my \\x3A\"", TokenKind::String, "\"my :\""),
            ("'\\''", TokenKind::Char, "'''"),
            ("\"a \\\"b\\\"\"", TokenKind::String, "\"a \"b\"\""),
        ];
        for (source, kind, literal) in tests {
            let tokens = kinds_and_literals(source);
            assert_eq!(
                tokens[0],
                (kind, literal.to_string()),
                "scanning {source:?}"
            );
        }
    }

    #[test]
    fn maximum_escape_values_decode() {
        assert_eq!(kinds_and_literals("'\\xff'")[0].1, "'\u{ff}'");
        assert_eq!(kinds_and_literals("'\\o377'")[0].1, "'\u{ff}'");
        assert_eq!(kinds_and_literals("'\\uffff'")[0].1, "'\u{ffff}'");
    }

    #[test]
    fn literal_failures() {
        let tests = [
            ("\"fooBar\n\"", ErrorKind::LiteralNotTerminated),
            ("\"fooBar\\-\"", ErrorKind::InvalidEscapeSequence),
            ("\"foo\\'Bar\"", ErrorKind::InvalidEscapeSequence),
            ("'foo\\\"Bar'", ErrorKind::InvalidEscapeSequence),
            ("\"foo\\xAg\"", ErrorKind::InvalidEscapeSequenceHexadecimal),
            ("\"foo\\o088Bar\"", ErrorKind::InvalidEscapeSequenceOctal),
            ("\"foo\\o444\"", ErrorKind::InvalidEscapeSequenceOctal),
            ("\"foo\\uD800\"", ErrorKind::InvalidEscapeSequenceUnicode),
            ("\"foo\\u12g4\"", ErrorKind::InvalidEscapeSequenceUnicode),
            ("\"fooBar", ErrorKind::LiteralNotTerminated),
            ("'ab'", ErrorKind::LiteralNotTerminated),
            ("'fooBar", ErrorKind::LiteralNotTerminated),
            ("'a", ErrorKind::LiteralNotTerminated),
            ("''", ErrorKind::LiteralNotTerminated),
            ("\"\\x", ErrorKind::InvalidEscapeSequenceHexadecimal),
            ("\"\\u123", ErrorKind::InvalidEscapeSequenceUnicode),
            ("\"\\o1", ErrorKind::InvalidEscapeSequenceOctal),
        ];
        for (source, kind) in tests {
            assert_eq!(first_error(source).kind(), kind, "scanning {source:?}");
        }
    }

    #[test]
    fn char_termination_messages() {
        assert_eq!(
            first_error("'ab'").message(),
            "Char can only have one character"
        );
        assert_eq!(
            first_error("'fooBar").message(),
            "String literal not terminated"
        );
    }

    #[test]
    fn scans_numbers() {
        assert_eq!(
            kinds_and_literals("123")[0],
            (TokenKind::Int, "123".to_string())
        );
        assert_eq!(
            kinds_and_literals("12.3")[0],
            (TokenKind::Float, "12.3".to_string())
        );
        assert_eq!(
            kinds_and_literals("12.")[0],
            (TokenKind::Float, "12.".to_string())
        );
        // The comma is not part of the number and is re-dispatched.
        assert_eq!(
            kinds_and_literals("12,3"),
            vec![
                (TokenKind::Int, "12".to_string()),
                (TokenKind::Comma, ",".to_string()),
                (TokenKind::Int, "3".to_string()),
                (TokenKind::Eof, "EOF".to_string()),
            ]
        );
    }

    #[test]
    fn scans_words() {
        assert_eq!(
            kinds_and_literals("while")[0],
            (TokenKind::While, "while".to_string())
        );
        assert_eq!(
            kinds_and_literals("var1")[0],
            (TokenKind::Ident, "var1".to_string())
        );
    }

    #[test]
    fn combined_tokens_retain_the_unmatched_character() {
        assert_eq!(
            kinds_and_literals("!="),
            vec![
                (TokenKind::NotEq, "!=".to_string()),
                (TokenKind::Eof, "EOF".to_string()),
            ]
        );
        assert_eq!(
            kinds_and_literals("!-"),
            vec![
                (TokenKind::Bang, "!".to_string()),
                (TokenKind::Minus, "-".to_string()),
                (TokenKind::Eof, "EOF".to_string()),
            ]
        );
        assert_eq!(
            kinds_and_literals("a =b"),
            vec![
                (TokenKind::Ident, "a".to_string()),
                (TokenKind::Assign, "=".to_string()),
                (TokenKind::Ident, "b".to_string()),
                (TokenKind::Eof, "EOF".to_string()),
            ]
        );
    }

    #[test]
    fn slash_without_comment_is_division() {
        assert_eq!(
            kinds_and_literals("a/b"),
            vec![
                (TokenKind::Ident, "a".to_string()),
                (TokenKind::Slash, "/".to_string()),
                (TokenKind::Ident, "b".to_string()),
                (TokenKind::Eof, "EOF".to_string()),
            ]
        );
    }

    #[test]
    fn skips_comments() {
        // The line comment leaves the newline for the next scan.
        assert_eq!(
            kinds_and_literals("// this is a test comment\nx"),
            vec![
                (TokenKind::LineBreak, "\n".to_string()),
                (TokenKind::Ident, "x".to_string()),
                (TokenKind::Eof, "EOF".to_string()),
            ]
        );

        let file = test_file("/* this\nis\na\nmulti-line\ncomment\n*/x");
        let mut scanner = Scanner::new(&file);
        let token = scanner.scan().unwrap();
        assert_eq!(token.kind(), TokenKind::Ident);
        assert_eq!(token.literal(), "x");
        assert_eq!(scanner.line(), 6);

        assert_eq!(
            kinds_and_literals("/**/x")[0],
            (TokenKind::Ident, "x".to_string())
        );
        assert_eq!(
            kinds_and_literals("/***/x")[0],
            (TokenKind::Ident, "x".to_string())
        );
    }

    #[test]
    fn unterminated_block_comment_consumes_the_rest() {
        assert_eq!(
            kinds_and_literals("x /* trailing"),
            vec![
                (TokenKind::Ident, "x".to_string()),
                (TokenKind::Eof, "EOF".to_string()),
            ]
        );
    }

    #[test]
    fn scans_a_full_function() {
        let source = "// test function\nfunc test() bool {\n\t    return true;\n}";
        let want = [
            (TokenKind::LineBreak, "\n"),
            (TokenKind::Func, "func"),
            (TokenKind::Ident, "test"),
            (TokenKind::LeftParen, "("),
            (TokenKind::RightParen, ")"),
            (TokenKind::Ident, "bool"),
            (TokenKind::LeftBrace, "{"),
            (TokenKind::LineBreak, "\n"),
            (TokenKind::Return, "return"),
            (TokenKind::True, "true"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::LineBreak, "\n"),
            (TokenKind::RightBrace, "}"),
            (TokenKind::Eof, "EOF"),
        ];
        let file = test_file(source);
        let mut scanner = Scanner::new(&file);
        for (kind, literal) in want {
            let token = scanner.scan().unwrap();
            assert_eq!(token.kind(), kind);
            assert_eq!(token.literal(), literal);
        }
        assert_eq!(scanner.line(), 4);
    }

    #[test]
    fn token_positions_follow_the_position_formula() {
        // A token's position is the scanner position at emission backed up
        // by the spelling length. Numbers and words are emitted while the
        // terminating character is still counted.
        let tokens = tokenize(&test_file("1+1")).unwrap();
        assert_eq!(tokens[0].location().position(), 1);
        assert_eq!(tokens[1].location().position(), 1);
        assert_eq!(tokens[2].location().position(), 2);
        assert_eq!(tokens[0].location().line(), 1);

        // At the start of a line the formula clamps to zero.
        let tokens = tokenize(&test_file("+")).unwrap();
        assert_eq!(tokens[0].location().position(), 0);
    }

    #[test]
    fn empty_and_blank_sources_scan_to_eof() {
        assert_eq!(
            kinds_and_literals(""),
            vec![(TokenKind::Eof, "EOF".to_string())]
        );
        assert_eq!(
            kinds_and_literals("  \t \r "),
            vec![(TokenKind::Eof, "EOF".to_string())]
        );
    }

    #[test]
    fn eof_repeats_indefinitely() {
        let file = test_file("x");
        let mut scanner = Scanner::new(&file);
        assert_eq!(scanner.scan().unwrap().kind(), TokenKind::Ident);
        assert_eq!(scanner.scan().unwrap().kind(), TokenKind::Eof);
        assert_eq!(scanner.scan().unwrap().kind(), TokenKind::Eof);
        assert_eq!(scanner.scan().unwrap().kind(), TokenKind::Eof);
    }

    #[test]
    fn embedded_nul_terminates_like_eof() {
        assert_eq!(
            kinds_and_literals("a\0b"),
            vec![
                (TokenKind::Ident, "a".to_string()),
                (TokenKind::Eof, "EOF".to_string()),
            ]
        );
    }

    #[test]
    fn character_outside_the_alphabet() {
        let err = first_error("a # b");
        assert_eq!(err.kind(), ErrorKind::InvalidCharacter);
        assert_eq!(err.message(), "Invalid character");
    }

    #[test]
    fn invalid_utf8_is_malformed_code() {
        let file = SourceFile::new("/path/to/test.vg", vec![b'a', b' ', 0xFF]);
        let mut scanner = Scanner::new(&file);
        assert_eq!(scanner.scan().unwrap().kind(), TokenKind::Ident);
        let err = scanner.scan().expect_err("expected malformed input");
        assert_eq!(err.kind(), ErrorKind::MalformedCode);
        assert_eq!(err.message(), "Error parsing file");
    }

    #[test]
    fn scan_error_carries_location_and_renders() {
        let err = first_error("// test doc string\na = 'a\\-");
        assert_eq!(err.kind(), ErrorKind::InvalidEscapeSequence);
        assert_eq!(err.location().line(), 2);
        assert_eq!(err.location().position(), 8);
        assert_eq!(err.location().line_feed(), "a = 'a\\-");
        let want = "Error in: \x1b[36m/path/to/test.vg\x1b[0m\n\
                    SyntaxError -> InvalidEscapeSequence: at line 2 position 8\n\
                    a = 'a\\-\n\
                    Invalid escape sequence in literal\n";
        assert_eq!(err.to_string(), want);
    }
}
