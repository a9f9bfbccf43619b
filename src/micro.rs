// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The small, single-purpose recognizers of §4.5: zero-width `CONCAT`,
//! the handful of `${…}` sigil tokens, identifier classification
//! (`VARIABLE_NAME` / `FILE_DESCRIPTOR`), the heredoc arrow, `BARE_DOLLAR`,
//! and the `{N..M}` brace-range opener.

use crate::heredoc::HeredocStack;
use crate::lexer::Lexer;
use crate::symbol::{Symbol, ValidSymbols};

/// `CONCAT` (§4.1 step 1): a zero-width token between two adjacent,
/// non-whitespace-separated words. Fires only when the lookahead is not a
/// character that would end the preceding word outright.
pub fn scan_concat(valid: ValidSymbols, lexer: &mut dyn Lexer) -> bool {
    let boundary = matches!(lexer.lookahead(), None | Some(' ' | '\t' | '\n' | '\r'))
        || matches!(lexer.lookahead(), Some('>' | '<' | ')' | '(' | ';' | '&' | '|'))
        || (lexer.lookahead() == Some('}') && valid.is_set(Symbol::ClosingBrace))
        || (lexer.lookahead() == Some(']') && valid.is_set(Symbol::ClosingBracket));

    if !boundary {
        // `a`b`` — only concat if the closing backtick is itself followed
        // by whitespace (otherwise the backtick pair is its own word).
        if lexer.lookahead() == Some('`') {
            lexer.mark_end();
            lexer.advance(false);
            while lexer.lookahead() != Some('`') && !lexer.eof() {
                lexer.advance(false);
            }
            if lexer.eof() {
                return false;
            }
            lexer.advance(false); // the closing backtick
            if matches!(lexer.lookahead(), None) || matches!(lexer.lookahead(), Some(c) if c.is_whitespace())
            {
                lexer.set_result(Symbol::Concat);
                return true;
            }
            return false;
        }

        // A backslash escaping a quote inside a double-quoted string with an
        // embedded expansion still concatenates with what follows.
        if lexer.lookahead() == Some('\\') {
            lexer.mark_end();
            lexer.advance(false);
            if matches!(lexer.lookahead(), Some('"' | '\'' | '\\')) {
                lexer.set_result(Symbol::Concat);
                return true;
            }
            if lexer.eof() {
                return false;
            }
        } else {
            lexer.set_result(Symbol::Concat);
            return true;
        }
    }

    if matches!(lexer.lookahead(), Some(c) if c.is_whitespace())
        && valid.is_set(Symbol::ClosingBrace)
        && !valid.is_set(Symbol::ExpansionWord)
    {
        lexer.set_result(Symbol::Concat);
        return true;
    }

    false
}

/// `##` not immediately followed by `}` — distinguishes `${var##pat}` from
/// the syntax error `${var##}`.
pub fn scan_immediate_double_hash(lexer: &mut dyn Lexer) -> bool {
    if lexer.lookahead() != Some('#') {
        return false;
    }
    lexer.mark_end();
    lexer.advance(false);
    if lexer.lookahead() != Some('#') {
        return false;
    }
    lexer.advance(false);
    if lexer.lookahead() == Some('}') {
        return false;
    }
    lexer.mark_end();
    lexer.set_result(Symbol::ImmediateDoubleHash);
    true
}

/// `#`, `!`, `=` recognized as operators inside `${…}` only when, after any
/// further run of those sigils and whitespace, a `}` follows.
pub fn scan_external_expansion_sigil(lexer: &mut dyn Lexer) -> bool {
    let symbol = match lexer.lookahead() {
        Some('#') => Symbol::ExternalExpansionSymHash,
        Some('!') => Symbol::ExternalExpansionSymBang,
        Some('=') => Symbol::ExternalExpansionSymEqual,
        _ => return false,
    };
    lexer.advance(false);
    lexer.mark_end();
    while matches!(lexer.lookahead(), Some('#' | '!' | '=')) {
        lexer.advance(false);
    }
    while matches!(lexer.lookahead(), Some(c) if c.is_whitespace()) {
        lexer.advance(true);
    }
    if lexer.lookahead() == Some('}') {
        lexer.set_result(symbol);
        return true;
    }
    false
}

/// `EMPTY_VALUE` — whitespace, EOF, `;`, or `&` in assignment contexts.
pub fn scan_empty_value(lexer: &mut dyn Lexer) -> bool {
    let at_boundary = lexer.eof() || matches!(lexer.lookahead(), Some(';' | '&'))
        || matches!(lexer.lookahead(), Some(c) if c.is_whitespace());
    if at_boundary {
        lexer.set_result(Symbol::EmptyValue);
        return true;
    }
    false
}

/// Inside `[[ … ]]`, a `-`-prefixed alphabetic flag (`-eq`, `-f`, …)
/// terminated by whitespace.
pub fn scan_test_operator(lexer: &mut dyn Lexer) -> bool {
    while matches!(lexer.lookahead(), Some(' ' | '\t')) {
        lexer.advance(true);
    }
    if lexer.lookahead() != Some('-') {
        return false;
    }
    lexer.advance(false);

    let mut advanced = false;
    while matches!(lexer.lookahead(), Some(c) if c.is_alphabetic()) {
        advanced = true;
        lexer.advance(false);
    }
    if !advanced || !matches!(lexer.lookahead(), Some(c) if c.is_whitespace()) {
        return false;
    }
    lexer.mark_end();
    lexer.set_result(Symbol::TestOperator);
    true
}

/// `$` followed by whitespace, EOF, or `"`.
pub fn scan_bare_dollar(lexer: &mut dyn Lexer) -> bool {
    while matches!(lexer.lookahead(), Some(c) if c.is_whitespace() && c != '\n') && !lexer.eof() {
        lexer.advance(true);
    }
    if lexer.lookahead() != Some('$') {
        return false;
    }
    lexer.advance(false);
    lexer.set_result(Symbol::BareDollar);
    lexer.mark_end();
    lexer.eof() || matches!(lexer.lookahead(), Some(c) if c.is_whitespace() || c == '"')
}

/// The literal `{N..M}` brace-range opener.
pub fn scan_brace_start(lexer: &mut dyn Lexer) -> bool {
    while matches!(lexer.lookahead(), Some(c) if c.is_whitespace()) {
        lexer.advance(true);
    }
    if lexer.lookahead() != Some('{') {
        return false;
    }
    lexer.advance(false);
    lexer.mark_end();

    while matches!(lexer.lookahead(), Some(c) if c.is_ascii_digit()) {
        lexer.advance(false);
    }
    if lexer.lookahead() != Some('.') {
        return false;
    }
    lexer.advance(false);
    if lexer.lookahead() != Some('.') {
        return false;
    }
    lexer.advance(false);

    while matches!(lexer.lookahead(), Some(c) if c.is_ascii_digit()) {
        lexer.advance(false);
    }
    if lexer.lookahead() != Some('}') {
        return false;
    }
    lexer.set_result(Symbol::BraceStart);
    true
}

/// Outcome of [`scan_identifier`]: either a concrete token, or a request to
/// fall through to a recognizer this module doesn't own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierOutcome {
    Matched(Symbol),
    NoMatch,
    DeferToBraceStart,
}

/// Read an identifier and classify it as `VARIABLE_NAME` or
/// `FILE_DESCRIPTOR` by its following character, or hand off to
/// `BRACE_START` for a bare `{`.
pub fn scan_identifier(valid: ValidSymbols, lexer: &mut dyn Lexer) -> IdentifierOutcome {
    let mut is_number = true;
    match lexer.lookahead() {
        Some(c) if c.is_ascii_digit() => {
            lexer.advance(false);
        }
        Some(c) if c.is_alphabetic() || c == '_' => {
            is_number = false;
            lexer.advance(false);
        }
        Some('{') => return IdentifierOutcome::DeferToBraceStart,
        _ => return IdentifierOutcome::NoMatch,
    }

    loop {
        match lexer.lookahead() {
            Some(c) if c.is_ascii_digit() => lexer.advance(false),
            Some(c) if c.is_alphanumeric() || c == '_' => {
                is_number = false;
                lexer.advance(false);
            }
            _ => break,
        }
    }

    if is_number && valid.is_set(Symbol::FileDescriptor) && matches!(lexer.lookahead(), Some('>' | '<')) {
        return IdentifierOutcome::Matched(Symbol::FileDescriptor);
    }

    if valid.is_set(Symbol::VariableName) {
        if lexer.lookahead() == Some('+') {
            lexer.mark_end();
            lexer.advance(false);
            if matches!(lexer.lookahead(), Some('=' | ':')) || valid.is_set(Symbol::ClosingBrace) {
                lexer.set_result(Symbol::VariableName);
                return IdentifierOutcome::Matched(Symbol::VariableName);
            }
            return IdentifierOutcome::NoMatch;
        }

        let continuation = matches!(lexer.lookahead(), Some('=' | '[' | '%' | '@'))
            || (lexer.lookahead() == Some(':') && !valid.is_set(Symbol::ClosingBrace))
            || (lexer.lookahead() == Some('#') && !is_number)
            || (lexer.lookahead() == Some('-') && valid.is_set(Symbol::ClosingBrace));
        if continuation {
            lexer.mark_end();
            lexer.set_result(Symbol::VariableName);
            return IdentifierOutcome::Matched(Symbol::VariableName);
        }

        if lexer.lookahead() == Some('?') {
            lexer.mark_end();
            lexer.advance(false);
            lexer.set_result(Symbol::VariableName);
            return if matches!(lexer.lookahead(), Some(c) if c.is_alphabetic()) {
                IdentifierOutcome::Matched(Symbol::VariableName)
            } else {
                IdentifierOutcome::NoMatch
            };
        }
    }

    IdentifierOutcome::NoMatch
}

/// `<<` / `<<-`, pushing a new (not-yet-delimited) heredoc frame. Refuses
/// `<<<` (herestring) and `<<=` (compound assignment).
pub fn scan_heredoc_arrow(heredocs: &mut HeredocStack, lexer: &mut dyn Lexer) -> Option<Symbol> {
    if lexer.lookahead() != Some('<') {
        return None;
    }
    lexer.advance(false);
    if lexer.lookahead() != Some('<') {
        return None;
    }
    lexer.advance(false);

    match lexer.lookahead() {
        Some('-') => {
            lexer.advance(false);
            heredocs.push_pending(true);
            lexer.set_result(Symbol::HeredocArrowDash);
            Some(Symbol::HeredocArrowDash)
        }
        Some('<' | '=') => None,
        _ => {
            heredocs.push_pending(false);
            lexer.set_result(Symbol::HeredocArrow);
            Some(Symbol::HeredocArrow)
        }
    }
}

#[cfg(test)]
#[path = "micro_tests.rs"]
mod micro_tests;
