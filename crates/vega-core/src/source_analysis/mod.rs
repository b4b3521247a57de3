// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source analysis for Vega: scanning and parsing.
//!
//! This module contains the scanner, the parser, the token model, and the
//! diagnostic types they share.
//!
//! # Scanning
//!
//! The [`Scanner`] turns a [`SourceFile`] into a stream of [`Token`]s, one
//! per [`Scanner::scan`] call, decoding escape sequences inside character
//! and string literals as it goes. [`tokenize`] scans a whole file.
//!
//! ```
//! use vega_core::source_analysis::{tokenize, SourceFile, TokenKind};
//!
//! let file = SourceFile::new("demo.vg", *b"x = 1");
//! let kinds: Vec<_> = tokenize(&file)
//!     .unwrap()
//!     .iter()
//!     .map(|t| t.kind())
//!     .collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Ident,
//!         TokenKind::Assign,
//!         TokenKind::Int,
//!         TokenKind::Eof
//!     ]
//! );
//! ```
//!
//! # Parsing
//!
//! [`parse`] validates that the token stream conforms to the Vega grammar,
//! stopping at the first violation with a single [`SyntaxError`] that
//! renders the caret-style report shown to users.

mod error;
mod parser;
mod scanner;
mod source;
mod token;


pub use error::{ErrorClass, ErrorKind, ParseError, ScanError, SyntaxError};
pub use parser::{parse, Parser};
pub use scanner::{tokenize, Scanner};
pub use source::SourceFile;
pub use token::{Location, Token, TokenKind};
