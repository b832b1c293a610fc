//! Space/newline splitter for already-rendered code blocks.

/// Split `text` into space- and newline-delimited tokens.
///
/// The text is split on `' '`; a `" "` token separates adjacent chunks.
/// Each chunk is then split on `'\n'` with a `"\n"` token between its
/// pieces. Empty pieces are kept, so concatenating the result always
/// gives back `text`. Tabs and other whitespace are not delimiters.
///
/// ```
/// use ymir_highlight::split;
///
/// assert_eq!(split("a\nb c"), ["a", "\n", "b", " ", "c"]);
/// ```
#[must_use]
pub fn split(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    for (i, chunk) in text.split(' ').enumerate() {
        if i > 0 {
            tokens.push(" ");
        }
        for (j, piece) in chunk.split('\n').enumerate() {
            if j > 0 {
                tokens.push("\n");
            }
            tokens.push(piece);
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newline_inside_chunk() {
        assert_eq!(split("a\nb c"), vec!["a", "\n", "b", " ", "c"]);
    }

    #[test]
    fn empty_text() {
        assert!(split("").is_empty());
    }

    #[test]
    fn single_word() {
        assert_eq!(split("fn"), vec!["fn"]);
    }

    #[test]
    fn adjacent_spaces_keep_empty_tokens() {
        assert_eq!(split("a  b"), vec!["a", " ", "", " ", "b"]);
    }

    #[test]
    fn leading_and_trailing_delimiters() {
        assert_eq!(split(" a "), vec!["", " ", "a", " ", ""]);
        assert_eq!(split("\n"), vec!["", "\n", ""]);
    }

    #[test]
    fn tabs_are_not_delimiters() {
        assert_eq!(split("let\tx"), vec!["let\tx"]);
    }

    #[test]
    fn blank_lines() {
        assert_eq!(split("a\n\nb"), vec!["a", "\n", "", "\n", "b"]);
    }
}
