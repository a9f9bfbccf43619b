// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `=~` right-hand-side regex recognizer (§4.3). One scanning routine
//! shared by all three flavors; they differ only in which boundary
//! characters end the match.

use crate::lexer::Lexer;
use crate::symbol::Symbol;

/// Which of the three regex tokens is being attempted. Each carries its own
/// extra terminating condition on top of the shared unmatched
/// `)`/`]`/`}`-or-EOF boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegexFlavor {
    /// Terminates only on unmatched `)`/`]`/`}`. Running out of input first
    /// is a rejection, not a match.
    Plain,
    /// Also terminates on `/` and on `$(` (command substitution, not regex).
    NoSlash,
    /// Also terminates on whitespace outside parens, and requires at least
    /// one non-trivial regex character before it can match.
    NoSpace,
}

impl RegexFlavor {
    fn symbol(self) -> Symbol {
        match self {
            RegexFlavor::Plain => Symbol::Regex,
            RegexFlavor::NoSlash => Symbol::RegexNoSlash,
            RegexFlavor::NoSpace => Symbol::RegexNoSpace,
        }
    }

    fn skips_leading_whitespace(self) -> bool {
        !matches!(self, RegexFlavor::NoSlash)
    }
}

/// Scan a regex body for the given flavor. Returns `false` (leaving the
/// lexer's position advanced but no token set) if the flavor's minimum
/// content requirement is never met.
pub fn scan_regex(flavor: RegexFlavor, lexer: &mut dyn Lexer) -> bool {
    if flavor.skips_leading_whitespace() {
        while matches!(lexer.lookahead(), Some(' ' | '\t')) {
            lexer.advance(true);
        }
    }

    if matches!(lexer.lookahead(), Some('"' | '\'')) {
        return false;
    }

    // `$(` at the very start of a `NO_SLASH` attempt is a command
    // substitution, not a regex — checked once, here, before the main loop.
    // Past this point a `$` is ordinary regex text; this flavor has no
    // mid-pattern special case for it.
    if flavor == RegexFlavor::NoSlash && lexer.lookahead() == Some('$') {
        lexer.advance(false);
        if lexer.lookahead() == Some('(') {
            return false;
        }
    }
    lexer.mark_end();

    let mut paren_depth: i32 = 0;
    let mut bracket_depth: i32 = 0;
    let mut brace_depth: i32 = 0;
    let mut in_single_quote = false;
    let mut found_non_alnumdollarunderdash = false;
    let mut consumed_any = false;

    loop {
        // Running out of input without hitting an unmatched closer is a
        // rejection, not a truncated success — there is always more source
        // after a real `[[ =~ … ]]` regex body.
        let Some(ch) = lexer.lookahead() else {
            return false;
        };

        if in_single_quote {
            lexer.advance(false);
            consumed_any = true;
            if ch == '\'' {
                in_single_quote = false;
                lexer.mark_end();
            }
            continue;
        }

        match ch {
            '\'' => {
                in_single_quote = true;
                lexer.advance(false);
                consumed_any = true;
                continue;
            }
            ')' => {
                if paren_depth == 0 {
                    break;
                }
                paren_depth -= 1;
            }
            ']' => {
                if bracket_depth == 0 {
                    break;
                }
                bracket_depth -= 1;
            }
            '}' => {
                if brace_depth == 0 {
                    break;
                }
                brace_depth -= 1;
            }
            '(' => paren_depth += 1,
            '[' => bracket_depth += 1,
            '{' => brace_depth += 1,
            '/' if flavor == RegexFlavor::NoSlash => break,
            ' ' | '\t' | '\n' if flavor == RegexFlavor::NoSpace && paren_depth == 0 => break,
            '$' if flavor == RegexFlavor::NoSpace => {
                lexer.advance(false);
                consumed_any = true;
                lexer.mark_end();
                if matches!(lexer.lookahead(), None | Some(' ' | '\t' | '\n')) {
                    break;
                }
                continue;
            }
            '\\' => {
                lexer.advance(false);
                consumed_any = true;
                if lexer.lookahead().is_some() {
                    lexer.advance(false);
                }
                found_non_alnumdollarunderdash = true;
                lexer.mark_end();
                continue;
            }
            _ => {}
        }

        if !matches!(ch, 'a'..='z' | 'A'..='Z' | '0'..='9' | '$' | '_' | '-') {
            found_non_alnumdollarunderdash = true;
        }

        lexer.advance(false);
        consumed_any = true;
        if !matches!(ch, ' ' | '\t' | '\n') {
            lexer.mark_end();
        }
    }

    if !consumed_any {
        return false;
    }
    if flavor == RegexFlavor::NoSpace && !found_non_alnumdollarunderdash {
        return false;
    }

    lexer.set_result(flavor.symbol());
    true
}

#[cfg(test)]
#[path = "regex_tests.rs"]
mod regex_tests;
