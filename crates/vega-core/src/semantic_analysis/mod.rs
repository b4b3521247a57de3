// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Semantic analysis support for Vega.
//!
//! The frontend core only carries the [`SymbolTable`] skeleton: a stack of
//! named scopes with inner-to-outer lookup that the parser owns and later
//! passes fill in.

mod symbol_table;

pub use symbol_table::{Symbol, SymbolTable};
