// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn all_symbols_are_in_range() {
    assert_eq!(Symbol::ALL.len(), SYMBOL_COUNT);
    for (i, s) in Symbol::ALL.iter().enumerate() {
        assert_eq!(s.index(), i);
    }
}

#[test]
fn valid_symbol_set_of_only_sets_named_bits() {
    let set = ValidSymbolSet::of(&[Symbol::Concat, Symbol::BareDollar]);
    let view = set.view();
    assert!(view.is_set(Symbol::Concat));
    assert!(view.is_set(Symbol::BareDollar));
    assert!(!view.is_set(Symbol::Newline));
}

#[test]
fn in_error_recovery_reads_the_dedicated_bit() {
    let mut set = ValidSymbolSet::none();
    assert!(!set.view().in_error_recovery());
    set.set(Symbol::ErrorRecovery, true);
    assert!(set.view().in_error_recovery());
}

#[test]
fn any_matches_if_one_bit_is_set() {
    let set = ValidSymbolSet::of(&[Symbol::Regex]);
    assert!(set.view().any(&[Symbol::RegexNoSlash, Symbol::Regex]));
    assert!(!set.view().any(&[Symbol::RegexNoSlash, Symbol::RegexNoSpace]));
}
