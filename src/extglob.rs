// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Extglob pattern and `${…}` expansion-word recognizers (§4.4).

use crate::lexer::Lexer;
use crate::symbol::Symbol;

/// Scan an extglob pattern (`?(…)`, `*(…)`, case-item alternatives, …).
///
/// `last_glob_paren_depth` is scanner-level state (serialized byte 0):
/// a pattern split across two `scan` calls by an intervening `$(`/`${`
/// resumes with the paren depth it left off at.
pub fn scan_extglob_pattern(last_glob_paren_depth: &mut u8, lexer: &mut dyn Lexer) -> bool {
    while matches!(lexer.lookahead(), Some(c) if c.is_whitespace()) {
        lexer.advance(true);
    }

    // `esac` needs no special case here: the host grammar's keyword
    // extraction resolves the reserved word ahead of the external scanner,
    // so `EXTGLOB_PATTERN` is never offered as a valid symbol at that
    // position in the first place.
    let Some(first) = lexer.lookahead() else {
        *last_glob_paren_depth = 0;
        return false;
    };
    if !matches!(first, '?' | '*' | '+' | '@' | '!' | '-' | ')' | '\\' | '.') {
        *last_glob_paren_depth = 0;
        return false;
    }

    if first == '\\' {
        lexer.advance(false);
        match lexer.lookahead() {
            Some(c) if (c.is_whitespace() || c == '"') && c != '\r' && c != '\n' => {
                lexer.advance(false);
            }
            _ => return false,
        }
    }

    if lexer.lookahead() == Some(')') && *last_glob_paren_depth == 0 {
        lexer.mark_end();
        lexer.advance(false);
        if matches!(lexer.lookahead(), Some(c) if c.is_whitespace()) {
            return false;
        }
    }

    lexer.mark_end();
    lexer.advance(false);

    // `-\w` is just a word; look past it for something else special.
    if lexer.lookahead() == Some('-') {
        lexer.mark_end();
        lexer.advance(false);
        while matches!(lexer.lookahead(), Some(c) if c.is_alphanumeric()) {
            lexer.advance(false);
        }
        if matches!(lexer.lookahead(), Some(')' | '\\' | '.')) {
            return false;
        }
        lexer.mark_end();
    }

    // case item `-)` or `*)`.
    if lexer.lookahead() == Some(')') && *last_glob_paren_depth == 0 {
        lexer.mark_end();
        lexer.advance(false);
        if matches!(lexer.lookahead(), Some(c) if c.is_whitespace()) {
            lexer.set_result(Symbol::ExtglobPattern);
            return true;
        }
    }

    if matches!(lexer.lookahead(), Some(c) if c.is_whitespace()) {
        lexer.mark_end();
        lexer.set_result(Symbol::ExtglobPattern);
        *last_glob_paren_depth = 0;
        return true;
    }

    if lexer.lookahead() == Some('$') {
        lexer.mark_end();
        lexer.advance(false);
        if matches!(lexer.lookahead(), Some('{' | '(')) {
            lexer.set_result(Symbol::ExtglobPattern);
            return true;
        }
    }

    if lexer.lookahead() == Some('|') {
        lexer.mark_end();
        lexer.advance(false);
        if matches!(lexer.lookahead(), Some('\\' | '\r' | '\n')) {
            lexer.set_result(Symbol::ExtglobPattern);
            return true;
        }
    }

    if !matches!(lexer.lookahead(), Some(c) if c.is_alphanumeric())
        && !matches!(lexer.lookahead(), Some('(' | '"' | '[' | '?' | '/' | '\\' | '_'))
    {
        return false;
    }

    let mut paren_depth: i64 = *last_glob_paren_depth as i64;
    let mut bracket_depth: i64 = 0;
    let mut brace_depth: i64 = 0;
    loop {
        let mut done = false;
        match lexer.lookahead() {
            None => return false,
            Some('(') => paren_depth += 1,
            Some('[') => bracket_depth += 1,
            Some('{') => brace_depth += 1,
            Some(')') => {
                if paren_depth == 0 {
                    done = true;
                }
                paren_depth -= 1;
            }
            Some(']') => {
                if bracket_depth == 0 {
                    done = true;
                }
                bracket_depth -= 1;
            }
            Some('}') => {
                if brace_depth == 0 {
                    done = true;
                }
                brace_depth -= 1;
            }
            _ => {}
        }

        if done {
            break;
        }

        let was_space = matches!(lexer.lookahead(), Some(c) if c.is_whitespace());
        if lexer.lookahead() == Some('$') {
            lexer.mark_end();
            lexer.advance(false);
            if matches!(lexer.lookahead(), Some('(' | '{')) {
                lexer.set_result(Symbol::ExtglobPattern);
                *last_glob_paren_depth = paren_depth.max(0) as u8;
                return true;
            }
        }
        if was_space {
            lexer.mark_end();
            lexer.set_result(Symbol::ExtglobPattern);
            *last_glob_paren_depth = 0;
            return true;
        }
        if lexer.lookahead() == Some('"') {
            lexer.mark_end();
            lexer.set_result(Symbol::ExtglobPattern);
            *last_glob_paren_depth = 0;
            return true;
        }
        if lexer.lookahead() == Some('\\') {
            lexer.advance(false);
            if matches!(lexer.lookahead(), Some(c) if c.is_whitespace() || c == '"') {
                lexer.advance(false);
            }
        } else {
            lexer.advance(false);
        }
        if !was_space {
            lexer.mark_end();
        }
    }

    lexer.set_result(Symbol::ExtglobPattern);
    *last_glob_paren_depth = 0;
    true
}

/// Scan the body of `${…}` when it is not a recognized sub-expansion
/// (§4.4 "Expansion word").
pub fn scan_expansion_word(lexer: &mut dyn Lexer) -> bool {
    let mut advanced_once = false;
    let mut advanced_once_space = false;

    loop {
        if lexer.lookahead() == Some('"') {
            return false;
        }

        if lexer.lookahead() == Some('$') {
            lexer.mark_end();
            lexer.advance(false);
            if matches!(lexer.lookahead(), Some(c) if c == '{' || c == '(' || c == '\'' || c.is_alphanumeric())
            {
                lexer.set_result(Symbol::ExpansionWord);
                return advanced_once;
            }
            advanced_once = true;
        }

        if lexer.lookahead() == Some('}') {
            lexer.mark_end();
            lexer.set_result(Symbol::ExpansionWord);
            return advanced_once || advanced_once_space;
        }

        if lexer.lookahead() == Some('(') && !(advanced_once || advanced_once_space) {
            lexer.mark_end();
            lexer.advance(false);
            while lexer.lookahead() != Some(')') && !lexer.eof() {
                if lexer.lookahead() == Some('$') {
                    lexer.mark_end();
                    lexer.advance(false);
                    if matches!(lexer.lookahead(), Some(c) if c == '{' || c == '(' || c == '\'' || c.is_alphanumeric())
                    {
                        lexer.set_result(Symbol::ExpansionWord);
                        return advanced_once;
                    }
                    advanced_once = true;
                } else {
                    let is_space = matches!(lexer.lookahead(), Some(c) if c.is_whitespace());
                    advanced_once = advanced_once || !is_space;
                    advanced_once_space = advanced_once_space || is_space;
                    lexer.advance(false);
                }
            }
            lexer.mark_end();
            if lexer.lookahead() == Some(')') {
                advanced_once = true;
                lexer.advance(false);
                lexer.mark_end();
                if lexer.lookahead() == Some('}') {
                    return false;
                }
            } else {
                return false;
            }
        }

        if lexer.lookahead() == Some('\'') {
            return false;
        }

        if lexer.eof() {
            return false;
        }

        let is_space = matches!(lexer.lookahead(), Some(c) if c.is_whitespace());
        advanced_once = advanced_once || !is_space;
        advanced_once_space = advanced_once_space || is_space;
        lexer.advance(false);
    }
}

#[cfg(test)]
#[path = "extglob_tests.rs"]
mod extglob_tests;
