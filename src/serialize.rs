// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The serialize/deserialize contract (§6, §9 "Serializable state hygiene").
//! The host checkpoints scanner state after every token and restores it
//! before the next; this module is the only place that knows the byte
//! layout. `current_leading_word` is deliberately excluded — it is scratch
//! cleared at the start of every terminator-match attempt and carries no
//! meaning across calls.

use crate::heredoc::HeredocFrame;
use crate::scanner::Scanner;

/// Write `scanner`'s full state into `buf`. Returns the number of bytes
/// written, or `0` if `buf` is too small to hold it (or the heredoc stack is
/// deeper than a single byte can count) — the host treats `0` as "no
/// checkpoint" and restarts the scanner at the next safe point rather than
/// treating it as an error.
pub fn serialize(scanner: &Scanner, buf: &mut [u8]) -> usize {
    let frames: Vec<&HeredocFrame> = scanner.heredocs().iter().collect();
    if frames.len() > u8::MAX as usize {
        return 0;
    }

    let mut needed = 4usize;
    for frame in &frames {
        needed += 3 + 4 + frame.delimiter.len();
    }
    if needed > buf.len() {
        return 0;
    }

    let mut offset = 0usize;
    buf[offset] = scanner.last_glob_paren_depth();
    offset += 1;
    buf[offset] = scanner.ext_was_in_double_quote() as u8;
    offset += 1;
    buf[offset] = scanner.ext_saw_outside_quote() as u8;
    offset += 1;
    buf[offset] = frames.len() as u8;
    offset += 1;

    for frame in frames {
        buf[offset] = frame.is_raw as u8;
        offset += 1;
        buf[offset] = frame.started as u8;
        offset += 1;
        buf[offset] = frame.allows_indent as u8;
        offset += 1;

        let delimiter_len = frame.delimiter.len() as u32;
        buf[offset..offset + 4].copy_from_slice(&delimiter_len.to_ne_bytes());
        offset += 4;

        let bytes = frame.delimiter.as_bytes();
        buf[offset..offset + bytes.len()].copy_from_slice(bytes);
        offset += bytes.len();
    }

    offset
}

/// Restore `scanner` from `buf`. An empty buffer resets to a fresh scanner
/// (§6 "empty buffer -> reset"). A buffer that is truncated or otherwise
/// doesn't parse also resets rather than panicking — the scanner never
/// panics on host-supplied bytes, even malformed ones.
pub fn deserialize(scanner: &mut Scanner, buf: &[u8]) {
    *scanner = Scanner::create();
    if buf.is_empty() {
        return;
    }
    if try_deserialize(scanner, buf).is_none() {
        *scanner = Scanner::create();
    }
}

fn try_deserialize(scanner: &mut Scanner, buf: &[u8]) -> Option<()> {
    let mut offset = 0usize;

    let last_glob_paren_depth = *buf.get(offset)?;
    offset += 1;
    let ext_was_in_double_quote = *buf.get(offset)? != 0;
    offset += 1;
    let ext_saw_outside_quote = *buf.get(offset)? != 0;
    offset += 1;
    let count = *buf.get(offset)? as usize;
    offset += 1;

    scanner.set_last_glob_paren_depth(last_glob_paren_depth);
    scanner.set_ext_was_in_double_quote(ext_was_in_double_quote);
    scanner.set_ext_saw_outside_quote(ext_saw_outside_quote);

    for _ in 0..count {
        let is_raw = *buf.get(offset)? != 0;
        offset += 1;
        let started = *buf.get(offset)? != 0;
        offset += 1;
        let allows_indent = *buf.get(offset)? != 0;
        offset += 1;

        let len_bytes: [u8; 4] = buf.get(offset..offset + 4)?.try_into().ok()?;
        offset += 4;
        let delimiter_len = u32::from_ne_bytes(len_bytes) as usize;

        let delimiter_bytes = buf.get(offset..offset + delimiter_len)?;
        offset += delimiter_len;
        let delimiter = String::from_utf8(delimiter_bytes.to_vec()).ok()?;

        scanner
            .heredocs_mut()
            .push_frame(HeredocFrame::from_parts(is_raw, started, allows_indent, delimiter));
    }

    Some(())
}

#[cfg(test)]
#[path = "serialize_tests.rs"]
mod serialize_tests;
