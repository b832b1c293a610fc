//! Numeric literal recognition.
//!
//! A literal is an optional `-`, a body (hex, octal, binary or decimal
//! with `_` digit separators), an optional type suffix, and must end on a
//! word boundary. Candidate lengths are produced lazily in the order a
//! backtracking matcher would try them and the first one that ends on a
//! boundary wins.

use std::iter;

use crate::scan::is_word_boundary;

const WIDTHS: &[&[u8]] = &[b"8", b"16", b"32", b"64"];
const FLOAT_SUFFIXES: &[&[u8]] = &[b"f32", b"f64"];

pub(crate) fn match_number(bytes: &[u8], pos: usize) -> Option<usize> {
    if !is_word_boundary(bytes, pos) {
        return None;
    }
    let start = if bytes.get(pos) == Some(&b'-') {
        pos + 1
    } else {
        pos
    };

    prefixed_run(bytes, start, b"0x", |b| b.is_ascii_hexdigit())
        .chain(prefixed_run(bytes, start, b"0o", |b| matches!(b, b'0'..=b'7')))
        .chain(prefixed_run(bytes, start, b"0b", |b| matches!(b, b'0' | b'1')))
        .chain(decimal_ends(bytes, start))
        .flat_map(|end| suffix_ends(bytes, end))
        .find(|&end| end > pos && is_word_boundary(bytes, end))
}

/// Ends of `C(_?C)*` starting at `pos`, longest first.
fn grouped_run(bytes: &[u8], pos: usize, class: fn(u8) -> bool) -> impl Iterator<Item = usize> {
    let mut ends = Vec::new();
    if bytes.get(pos).is_some_and(|&b| class(b)) {
        let mut i = pos + 1;
        ends.push(i);
        loop {
            if bytes.get(i) == Some(&b'_') && bytes.get(i + 1).is_some_and(|&b| class(b)) {
                i += 2;
            } else if bytes.get(i).is_some_and(|&b| class(b)) {
                i += 1;
            } else {
                break;
            }
            ends.push(i);
        }
    }
    ends.into_iter().rev()
}

fn prefixed_run(
    bytes: &[u8],
    pos: usize,
    prefix: &[u8],
    class: fn(u8) -> bool,
) -> impl Iterator<Item = usize> {
    let digits = if bytes[pos..].starts_with(prefix) {
        pos + prefix.len()
    } else {
        // A position past the end yields no candidates.
        bytes.len() + 1
    };
    grouped_run(bytes, digits, class)
}

fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// `(\d(_?\d)*)? \.? \d(_?\d)* ([Ee][+-]?\d+)?`
///
/// Without a dot, every split of a digit run between the integer and
/// fraction parts ends on an end of that same run, so the run is scanned
/// once: the dotted fraction's ends come first, then the run's own ends,
/// longest first.
fn decimal_ends(bytes: &[u8], pos: usize) -> impl Iterator<Item = usize> + '_ {
    let int_ends: Vec<usize> = grouped_run(bytes, pos, is_digit).collect();
    let int_end = int_ends.first().copied().unwrap_or(pos);
    let fraction: Vec<usize> = if bytes.get(int_end) == Some(&b'.') {
        grouped_run(bytes, int_end + 1, is_digit).collect()
    } else {
        Vec::new()
    };
    fraction
        .into_iter()
        .chain(int_ends)
        .flat_map(move |digits_end| exponent_ends(bytes, digits_end))
}

fn exponent_ends(bytes: &[u8], pos: usize) -> impl Iterator<Item = usize> {
    let mut with_exponent = Vec::new();
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut i = pos + 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let digits = bytes[i..].iter().take_while(|b| b.is_ascii_digit()).count();
        with_exponent.extend((1..=digits).rev().map(|n| i + n));
    }
    with_exponent.into_iter().chain(iter::once(pos))
}

/// `(_?([iu](8|16|32|64)?|f32|f64))?`
fn suffix_ends(bytes: &[u8], pos: usize) -> Vec<usize> {
    let mut ends = Vec::new();
    let starts = if bytes.get(pos) == Some(&b'_') {
        vec![pos + 1, pos]
    } else {
        vec![pos]
    };

    for start in starts {
        let rest = bytes.get(start..).unwrap_or_default();
        if matches!(rest.first(), Some(b'i' | b'u')) {
            if let Some(width) = WIDTHS.iter().find(|w| rest[1..].starts_with(w)) {
                ends.push(start + 1 + width.len());
            }
            ends.push(start + 1);
        }
        for suffix in FLOAT_SUFFIXES {
            if rest.starts_with(suffix) {
                ends.push(start + suffix.len());
            }
        }
    }
    ends.push(pos);
    ends
}
