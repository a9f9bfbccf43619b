// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The dispatch core (§4.1): one [`Scanner`] per parse, holding the heredoc
//! stack and the small pieces of cross-call state the pattern recognizers
//! need, and the `scan` method that tries each recognizer in priority order.

use tracing::trace;

use crate::extglob::{scan_expansion_word, scan_extglob_pattern};
use crate::heredoc::{scan_heredoc_content, scan_heredoc_end, scan_heredoc_start, HeredocStack};
use crate::lexer::Lexer;
use crate::micro::{
    scan_bare_dollar, scan_brace_start, scan_concat, scan_empty_value, scan_external_expansion_sigil,
    scan_heredoc_arrow, scan_identifier, scan_immediate_double_hash, scan_test_operator, IdentifierOutcome,
};
use crate::regex::{scan_regex, RegexFlavor};
use crate::symbol::{Symbol, ValidSymbols};

/// All state this scanner carries between `scan` calls, and the whole of
/// what gets serialized at a parse checkpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scanner {
    heredocs: HeredocStack,
    last_glob_paren_depth: u8,
    /// Write-only scanner-level flags (serialized, per §6, but never read
    /// back by any recognizer — see the design notes on the two open
    /// questions about unconsulted serialized fields).
    ext_was_in_double_quote: bool,
    ext_saw_outside_quote: bool,
}

impl Scanner {
    /// Allocate a scanner with an empty heredoc stack and zeroed flags.
    pub fn create() -> Self {
        Self::default()
    }

    /// Release all heredoc frames. A plain drop suffices in Rust; kept as an
    /// explicit method to mirror the five-operation host contract (§6).
    pub fn destroy(self) {}

    pub fn heredocs(&self) -> &HeredocStack {
        &self.heredocs
    }

    pub(crate) fn heredocs_mut(&mut self) -> &mut HeredocStack {
        &mut self.heredocs
    }

    pub(crate) fn last_glob_paren_depth(&self) -> u8 {
        self.last_glob_paren_depth
    }

    pub(crate) fn set_last_glob_paren_depth(&mut self, depth: u8) {
        self.last_glob_paren_depth = depth;
    }

    pub(crate) fn ext_was_in_double_quote(&self) -> bool {
        self.ext_was_in_double_quote
    }

    pub(crate) fn set_ext_was_in_double_quote(&mut self, value: bool) {
        self.ext_was_in_double_quote = value;
    }

    pub(crate) fn ext_saw_outside_quote(&self) -> bool {
        self.ext_saw_outside_quote
    }

    pub(crate) fn set_ext_saw_outside_quote(&mut self, value: bool) {
        self.ext_saw_outside_quote = value;
    }

    /// Attempt to produce one token (§4.1). Tries each recognizer in the
    /// spec's fixed priority order, short-circuiting on the first match.
    pub fn scan(&mut self, lexer: &mut dyn Lexer, valid_symbols: ValidSymbols<'_>) -> bool {
        let in_error_recovery = valid_symbols.in_error_recovery();

        if valid_symbols.is_set(Symbol::Concat) && !in_error_recovery && scan_concat(valid_symbols, lexer) {
            trace!("scan: CONCAT");
            return true;
        }

        if valid_symbols.is_set(Symbol::ImmediateDoubleHash)
            && !in_error_recovery
            && scan_immediate_double_hash(lexer)
        {
            trace!("scan: IMMEDIATE_DOUBLE_HASH");
            return true;
        }

        if !in_error_recovery
            && valid_symbols.any(&[
                Symbol::ExternalExpansionSymHash,
                Symbol::ExternalExpansionSymBang,
                Symbol::ExternalExpansionSymEqual,
            ])
            && scan_external_expansion_sigil(lexer)
        {
            trace!("scan: external expansion sigil");
            return true;
        }

        if valid_symbols.is_set(Symbol::EmptyValue) && scan_empty_value(lexer) {
            trace!("scan: EMPTY_VALUE");
            return true;
        }

        let heredoc_pending = self.heredocs.front().is_some_and(|f| !f.delimiter.is_empty());
        let heredoc_started = self.heredocs.front().is_some_and(|f| f.started);

        if !in_error_recovery
            && heredoc_pending
            && !heredoc_started
            && valid_symbols.any(&[Symbol::HeredocBodyBeginning, Symbol::SimpleHeredocBody])
            && scan_heredoc_content(&mut self.heredocs, lexer)
        {
            trace!("scan: heredoc body beginning / simple body");
            return true;
        }

        if valid_symbols.is_set(Symbol::HeredocEnd) && scan_heredoc_end(&mut self.heredocs, lexer) {
            trace!("scan: HEREDOC_END");
            return true;
        }

        if !in_error_recovery
            && heredoc_pending
            && heredoc_started
            && valid_symbols.is_set(Symbol::HeredocContent)
            && scan_heredoc_content(&mut self.heredocs, lexer)
        {
            trace!("scan: HEREDOC_CONTENT");
            return true;
        }

        if valid_symbols.is_set(Symbol::HeredocStart)
            && !in_error_recovery
            && scan_heredoc_start(&mut self.heredocs, lexer)
        {
            trace!("scan: HEREDOC_START");
            return true;
        }

        if valid_symbols.is_set(Symbol::TestOperator) && !valid_symbols.is_set(Symbol::ExpansionWord) && scan_test_operator(lexer) {
            trace!("scan: TEST_OPERATOR");
            return true;
        }

        if !in_error_recovery
            && !valid_symbols.is_set(Symbol::RegexNoSlash)
            && valid_symbols.any(&[Symbol::VariableName, Symbol::FileDescriptor, Symbol::HeredocArrow])
        {
            if valid_symbols.is_set(Symbol::HeredocArrow) {
                if let Some(symbol) = scan_heredoc_arrow(&mut self.heredocs, lexer) {
                    trace!("scan: {:?}", symbol);
                    return true;
                }
            }

            match scan_identifier(valid_symbols, lexer) {
                IdentifierOutcome::Matched(symbol) => {
                    trace!("scan: {:?}", symbol);
                    return true;
                }
                IdentifierOutcome::DeferToBraceStart if valid_symbols.is_set(Symbol::BraceStart) => {
                    if scan_brace_start(lexer) {
                        trace!("scan: BRACE_START (deferred from identifier)");
                        return true;
                    }
                }
                _ => {}
            }
        }

        if valid_symbols.is_set(Symbol::BareDollar) && !in_error_recovery && scan_bare_dollar(lexer) {
            trace!("scan: BARE_DOLLAR");
            return true;
        }

        if !in_error_recovery {
            let flavor = if valid_symbols.is_set(Symbol::RegexNoSlash) {
                Some(RegexFlavor::NoSlash)
            } else if valid_symbols.is_set(Symbol::RegexNoSpace) {
                Some(RegexFlavor::NoSpace)
            } else if valid_symbols.is_set(Symbol::Regex) {
                Some(RegexFlavor::Plain)
            } else {
                None
            };
            if let Some(flavor) = flavor {
                if scan_regex(flavor, lexer) {
                    trace!("scan: regex family");
                    return true;
                }
            }
        }

        if valid_symbols.is_set(Symbol::ExtglobPattern) && !in_error_recovery {
            let mut depth = self.last_glob_paren_depth;
            let matched = scan_extglob_pattern(&mut depth, lexer);
            self.last_glob_paren_depth = depth;
            if matched {
                trace!("scan: EXTGLOB_PATTERN");
                return true;
            }
        }

        if valid_symbols.is_set(Symbol::ExpansionWord) && !in_error_recovery && scan_expansion_word(lexer) {
            trace!("scan: EXPANSION_WORD");
            return true;
        }

        if valid_symbols.is_set(Symbol::BraceStart) && !in_error_recovery && scan_brace_start(lexer) {
            trace!("scan: BRACE_START");
            return true;
        }

        false
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod scanner_tests;
