// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! External scanner for a bash tree-sitter grammar.
//!
//! The generated LR(1)/GLR parser cannot, by context-free rules alone,
//! recognize heredoc bodies, `[[ =~ ]]` regex bodies, extended-glob
//! patterns, `${…}` expansion words, or a handful of micro-disambiguations
//! (file descriptor vs. variable name, bare `$`, implicit `CONCAT`, …). This
//! crate is the hand-written, context-sensitive lexer that the parser calls
//! into for exactly those tokens, via the five-operation host contract in
//! [`serialize`] and [`Scanner::scan`].
//!
//! [`Scanner`] owns all state that must survive across calls; everything
//! else here is a free function taking `&mut dyn Lexer` so it can be driven
//! directly in tests without a real incremental parser.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod extglob;
mod heredoc;
mod lexer;
mod micro;
mod regex;
mod scanner;
mod serialize;
mod symbol;

pub use heredoc::{HeredocFrame, HeredocStack};
pub use lexer::Lexer;
pub use scanner::Scanner;
pub use serialize::{deserialize, serialize};
pub use symbol::{Symbol, ValidSymbolSet, ValidSymbols, SYMBOL_COUNT};
