// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use proptest::prelude::*;

use super::*;
use crate::heredoc::HeredocFrame;

fn frame(is_raw: bool, started: bool, allows_indent: bool, delimiter: &str) -> HeredocFrame {
    HeredocFrame::from_parts(is_raw, started, allows_indent, delimiter.to_string())
}

#[test]
fn round_trips_an_empty_scanner() {
    let scanner = Scanner::create();
    let mut buf = [0u8; 64];
    let len = serialize(&scanner, &mut buf);
    assert!(len > 0);

    let mut restored = Scanner::create();
    deserialize(&mut restored, &buf[..len]);
    assert_eq!(scanner, restored);
}

#[test]
fn round_trips_scanner_flags() {
    let mut scanner = Scanner::create();
    scanner.set_last_glob_paren_depth(3);
    scanner.set_ext_was_in_double_quote(true);
    scanner.set_ext_saw_outside_quote(false);

    let mut buf = [0u8; 64];
    let len = serialize(&scanner, &mut buf);

    let mut restored = Scanner::create();
    deserialize(&mut restored, &buf[..len]);
    assert_eq!(restored.last_glob_paren_depth(), 3);
    assert!(restored.ext_was_in_double_quote());
    assert!(!restored.ext_saw_outside_quote());
}

#[test]
fn round_trips_multiple_heredoc_frames_in_order() {
    let mut scanner = Scanner::create();
    scanner.heredocs_mut().push_frame(frame(false, true, false, "EOF"));
    scanner.heredocs_mut().push_frame(frame(true, false, true, "TAG"));

    let mut buf = [0u8; 128];
    let len = serialize(&scanner, &mut buf);
    assert!(len > 0);

    let mut restored = Scanner::create();
    deserialize(&mut restored, &buf[..len]);
    assert_eq!(restored, scanner);

    let delimiters: Vec<&str> = restored.heredocs().iter().map(|f| f.delimiter.as_str()).collect();
    assert_eq!(delimiters, vec!["EOF", "TAG"]);
}

#[test]
fn serialize_returns_zero_when_buffer_is_too_small() {
    let mut scanner = Scanner::create();
    scanner.heredocs_mut().push_frame(frame(false, false, false, "EOF"));

    let mut tiny = [0u8; 3];
    assert_eq!(serialize(&scanner, &mut tiny), 0);
}

#[test]
fn serialize_returns_zero_past_255_heredoc_frames() {
    let mut scanner = Scanner::create();
    for _ in 0..=u8::MAX as u32 {
        scanner.heredocs_mut().push_frame(frame(false, false, false, "X"));
    }

    let mut buf = vec![0u8; 1 << 16];
    assert_eq!(serialize(&scanner, &mut buf), 0);
}

#[test]
fn deserialize_with_empty_buffer_resets() {
    let mut scanner = Scanner::create();
    scanner.heredocs_mut().push_frame(frame(false, false, false, "EOF"));
    scanner.set_last_glob_paren_depth(7);

    deserialize(&mut scanner, &[]);
    assert_eq!(scanner, Scanner::create());
}

#[test]
fn deserialize_with_truncated_buffer_resets_instead_of_panicking() {
    let mut scanner = Scanner::create();
    // Claims one heredoc frame but supplies no frame bytes at all.
    deserialize(&mut scanner, &[0, 0, 0, 1]);
    assert_eq!(scanner, Scanner::create());
}

fn arb_frame() -> impl Strategy<Value = HeredocFrame> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        "[A-Za-z]{0,8}",
    )
        .prop_map(|(is_raw, started, allows_indent, delimiter)| {
            HeredocFrame::from_parts(is_raw, started, allows_indent, delimiter)
        })
}

proptest! {
    #[test]
    fn serialize_then_deserialize_is_the_identity(
        last_glob_paren_depth in any::<u8>(),
        ext_was_in_double_quote in any::<bool>(),
        ext_saw_outside_quote in any::<bool>(),
        frames in prop::collection::vec(arb_frame(), 0..6),
    ) {
        let mut scanner = Scanner::create();
        scanner.set_last_glob_paren_depth(last_glob_paren_depth);
        scanner.set_ext_was_in_double_quote(ext_was_in_double_quote);
        scanner.set_ext_saw_outside_quote(ext_saw_outside_quote);
        for f in frames {
            scanner.heredocs_mut().push_frame(f);
        }

        let mut buf = vec![0u8; 4096];
        let len = serialize(&scanner, &mut buf);
        prop_assert!(len > 0);

        let mut restored = Scanner::create();
        deserialize(&mut restored, &buf[..len]);
        prop_assert_eq!(restored, scanner);
    }
}
