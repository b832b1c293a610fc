//! Recognizers behind each [`Pattern`] variant.
//!
//! Every recognizer looks at the input at a cursor position and returns
//! the end of its match, or `None`. Context before the cursor may be
//! inspected but is never part of the match.

use crate::grammar::Pattern;
use crate::number;

impl Pattern {
    /// End offset of this pattern's match starting exactly at `pos`.
    pub(crate) fn match_at(&self, input: &str, pos: usize) -> Option<usize> {
        let bytes = input.as_bytes();
        match self {
            Self::BlockComment => block_comment(bytes, pos),
            Self::LineComment => line_comment(bytes, pos),
            Self::RawString => raw_string(bytes, pos),
            Self::QuotedString => quoted_string(bytes, pos),
            Self::Words { words } => whole_word(bytes, pos)
                .filter(|&end| words.iter().any(|w| w.as_bytes() == &bytes[pos..end])),
            Self::AfterSeparator { separator } => {
                if input[..pos].ends_with(separator.as_str()) {
                    ident(bytes, pos)
                } else {
                    None
                }
            }
            Self::BeforeSeparator { separator } => {
                ident(bytes, pos).filter(|&end| input[end..].starts_with(separator.as_str()))
            }
            Self::AfterColon => after_colon(input, pos),
            Self::AfterAmpersand => after_ampersand(input, pos),
            Self::Attribute => attribute(bytes, pos),
            Self::Call => ident(bytes, pos).filter(|&end| opens_call(input, end)),
            Self::MacroCall => macro_call(input, pos),
            Self::Number => number::match_number(bytes, pos),
            Self::Symbols { symbols } => symbols
                .iter()
                .filter(|s| !s.is_empty() && input[pos..].starts_with(s.as_str()))
                .map(|s| pos + s.len())
                .max(),
            Self::Run { ch } => {
                let run: usize = input[pos..]
                    .chars()
                    .take_while(|c| c == ch)
                    .map(char::len_utf8)
                    .sum();
                (run > 0).then_some(pos + run)
            }
        }
    }

    /// Whether this pattern can match strictly inside an identifier run
    /// after every pattern failed at an earlier position of the same run.
    ///
    /// Other kinds either need a word boundary or non-word context at the
    /// cursor, or only look at where the run ends.
    pub(crate) const fn matches_inside_word(&self) -> bool {
        matches!(
            self,
            Self::RawString
                | Self::QuotedString
                | Self::AfterSeparator { .. }
                | Self::Symbols { .. }
                | Self::Run { .. }
        )
    }
}

pub(crate) const fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

const fn is_line_end(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// `true` when exactly one side of `pos` is an identifier character.
pub(crate) fn is_word_boundary(bytes: &[u8], pos: usize) -> bool {
    let before = pos > 0 && is_ident_byte(bytes[pos - 1]);
    let after = bytes.get(pos).is_some_and(|&b| is_ident_byte(b));
    before != after
}

/// End of a non-empty identifier run starting at `pos`.
pub(crate) fn ident(bytes: &[u8], pos: usize) -> Option<usize> {
    let len = bytes[pos..]
        .iter()
        .take_while(|&&b| is_ident_byte(b))
        .count();
    (len > 0).then_some(pos + len)
}

/// End of the identifier at `pos` when `pos` starts a word.
fn whole_word(bytes: &[u8], pos: usize) -> Option<usize> {
    if !is_word_boundary(bytes, pos) {
        return None;
    }
    ident(bytes, pos)
}

fn prev_char(input: &str, pos: usize) -> Option<char> {
    input[..pos].chars().next_back()
}

fn skip_whitespace(input: &str, pos: usize) -> usize {
    let skipped: usize = input[pos..]
        .chars()
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum();
    pos + skipped
}

fn opens_call(input: &str, pos: usize) -> bool {
    input[skip_whitespace(input, pos)..].starts_with('(')
}

fn block_comment(bytes: &[u8], pos: usize) -> Option<usize> {
    if !bytes[pos..].starts_with(b"/*") || (pos > 0 && bytes[pos - 1] == b'\\') {
        return None;
    }
    let body = pos + 2;
    bytes[body..]
        .windows(2)
        .position(|w| w == b"*/")
        .map(|i| body + i + 2)
}

fn line_comment(bytes: &[u8], pos: usize) -> Option<usize> {
    if !bytes[pos..].starts_with(b"//") || (pos > 0 && matches!(bytes[pos - 1], b'\\' | b':')) {
        return None;
    }
    let len = bytes[pos..]
        .iter()
        .position(|&b| is_line_end(b))
        .unwrap_or(bytes.len() - pos);
    Some(pos + len)
}

fn raw_string(bytes: &[u8], pos: usize) -> Option<usize> {
    let mut i = pos;
    if bytes.get(i) == Some(&b'b') {
        i += 1;
    }
    if bytes.get(i) != Some(&b'r') {
        return None;
    }
    i += 1;
    let hashes = bytes[i..].iter().take_while(|&&b| b == b'#').count();
    i += hashes;
    if bytes.get(i) != Some(&b'"') {
        return None;
    }
    string_body(bytes, i + 1, b'"', hashes)
}

fn quoted_string(bytes: &[u8], pos: usize) -> Option<usize> {
    let mut i = pos;
    if bytes.get(i) == Some(&b'b') {
        i += 1;
    }
    match bytes.get(i) {
        Some(&quote @ (b'"' | b'\'')) => string_body(bytes, i + 1, quote, 0),
        _ => None,
    }
}

/// Match a string body lazily up to `quote` followed by `hashes` `#`s.
///
/// A backslash may escape the next character, but if the escaped reading
/// never closes the literal the backslash is retried as an ordinary
/// character. Neither reading crosses a line end. Positions are explored
/// depth first, preferring to close, then to escape, then to step.
fn string_body(bytes: &[u8], start: usize, quote: u8, hashes: usize) -> Option<usize> {
    let closes_at = |j: usize| {
        bytes.get(j) == Some(&quote)
            && bytes
                .get(j + 1..j + 1 + hashes)
                .is_some_and(|run| run.iter().all(|&b| b == b'#'))
    };

    // Grows with the explored span, which stops at the line end.
    let mut seen = Vec::new();
    let mut stack = vec![start];
    while let Some(j) = stack.pop() {
        let offset = j - start;
        if offset >= seen.len() {
            seen.resize(offset + 1, false);
        }
        if std::mem::replace(&mut seen[offset], true) {
            continue;
        }
        if closes_at(j) {
            return Some(j + 1 + hashes);
        }
        let Some(&b) = bytes.get(j) else {
            continue;
        };
        if is_line_end(b) {
            continue;
        }
        stack.push(j + 1);
        if b == b'\\' && bytes.get(j + 1).is_some_and(|&next| !is_line_end(next)) {
            stack.push(j + 2);
        }
    }
    None
}

fn after_colon(input: &str, pos: usize) -> Option<usize> {
    let mut before = input[..pos].chars().rev();
    let context = (before.next(), before.next(), before.next());
    if !matches!(context, (Some(a), Some(':'), Some(b)) if a.is_whitespace() && b.is_whitespace())
    {
        return None;
    }
    let lead = input[pos..].chars().next().filter(|&c| c != '[')?;
    ident(input.as_bytes(), pos + lead.len_utf8())
}

fn after_ampersand(input: &str, pos: usize) -> Option<usize> {
    if prev_char(input, pos) != Some('&') {
        return None;
    }
    if !prev_char(input, pos - 1).is_some_and(char::is_whitespace) {
        return None;
    }
    ident(input.as_bytes(), pos)
}

fn attribute(bytes: &[u8], pos: usize) -> Option<usize> {
    if bytes.get(pos) != Some(&b'#') {
        return None;
    }
    let mut i = pos + 1;
    if bytes.get(i) == Some(&b'!') {
        i += 1;
    }
    if !bytes[i..].starts_with(b":[") {
        return None;
    }
    let body = i + 2;
    if bytes.get(body).is_none_or(|&b| is_line_end(b)) {
        return None;
    }
    bytes[body + 1..]
        .iter()
        .take_while(|&&b| !is_line_end(b))
        .position(|&b| b == b']')
        .map(|offset| body + 1 + offset + 1)
}

fn macro_call(input: &str, pos: usize) -> Option<usize> {
    let bang = ident(input.as_bytes(), pos)?;
    if input.as_bytes().get(bang) != Some(&b'!') {
        return None;
    }
    let end = bang + 1;
    (opens_call(input, end) || input[end..].starts_with('[')).then_some(end)
}
