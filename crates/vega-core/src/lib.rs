// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Vega compiler frontend core.
//!
//! This crate transforms a UTF-8 source file into a stream of semantic
//! tokens and validates that the stream conforms to the Vega grammar,
//! producing one precise, user-facing diagnostic on the first failure:
//!
//! - [`source_analysis`] — the character-level scanner, the predictive
//!   recursive-descent parser, and their shared token and diagnostic types
//! - [`semantic_analysis`] — the scoped symbol table later passes build on
//!
//! File I/O, type checking, and code generation are outside this crate;
//! callers hand in a [`source_analysis::SourceFile`] and receive either
//! success or a rendered [`source_analysis::SyntaxError`].

pub mod semantic_analysis;
pub mod source_analysis;

/// Re-export of the commonly used types.
pub mod prelude {
    pub use crate::semantic_analysis::{Symbol, SymbolTable};
    pub use crate::source_analysis::{
        parse, tokenize, Parser, Scanner, SourceFile, SyntaxError, Token, TokenKind,
    };
}
