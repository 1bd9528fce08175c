//! Source normalization and the bracket-aware tokenizer.
//!
//! Program text becomes a flat list of tokens. A bracketed span is kept whole as
//! a single *block token* (outer brackets stripped, nested brackets kept) so that
//! commands like `repeat` can hand it back to the interpreter as a program.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s").expect("whitespace pattern is valid"));

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("comment pattern is valid"));

/// Prepares raw program text for [`tokenize`].
///
/// Trims, lowercases, and turns every whitespace character into a plain space.
/// With `ignore_comments`, every `/* ... */` span is then removed, including ones
/// spanning several lines and ones inside brackets.
pub fn normalize(text: &str, ignore_comments: bool) -> String {
    let text = text.trim().to_lowercase();
    let text = WHITESPACE.replace_all(&text, " ");
    if ignore_comments {
        COMMENT.replace_all(&text, "").into_owned()
    } else {
        text.into_owned()
    }
}

/// Splits normalized text into tokens, in source order.
///
/// A single left-to-right scan tracks bracket depth. Outside brackets, spaces
/// separate tokens. Inside, every character is copied verbatim. A block left open
/// at end of input is still emitted as a trailing token. Empty tokens are never
/// produced.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    // Signed: a stray `]` drives it negative, after which brackets are plain text.
    let mut depth: i64 = 0;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        let is_last = chars.peek().is_none();

        let ch = match ch {
            '[' => {
                depth += 1;
                (depth != 1).then_some(ch)
            }
            ']' => {
                depth -= 1;
                (depth != 0).then_some(ch)
            }
            _ => Some(ch),
        };

        if depth > 0 {
            current.extend(ch);
        } else if ch != Some(' ') {
            current.extend(ch);
            if is_last {
                flush(&mut tokens, &mut current);
            }
        } else {
            flush(&mut tokens, &mut current);
        }
    }

    if depth > 0 {
        flush(&mut tokens, &mut current);
    }

    tokens
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    let token = current.trim();
    if !token.is_empty() {
        tokens.push(token.to_owned());
    }
    current.clear();
}

/// Best-effort integer parse of a command argument.
///
/// Accepts an optional sign and the longest run of digits that follows (hex after
/// a `0x` prefix), ignoring anything after it: `"3.7"` is 3 and `"50px"` is 50.
/// Returns `None` when no digit can be read. Out-of-range values saturate.
pub fn parse_int(token: &str) -> Option<i64> {
    let s = token.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for d in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen = true;
        value = value.saturating_mul(i64::from(radix)).saturating_add(i64::from(d));
    }

    seen.then(|| if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_is_permissive() {
        assert_eq!(parse_int("50"), Some(50));
        assert_eq!(parse_int("-90"), Some(-90));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("3.7"), Some(3));
        assert_eq!(parse_int("50px"), Some(50));
        assert_eq!(parse_int("0x1f"), Some(31));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn normalize_strips_multiline_comments() {
        let text = "FD 10 /* first\n line */ rt\t90 /* second */";
        assert_eq!(normalize(text, true), "fd 10  rt 90 ");
        assert_eq!(normalize("fd /* x */ 1", false), "fd /* x */ 1");
    }

    #[test]
    fn stray_close_bracket_is_plain_text() {
        assert_eq!(tokenize("fd ] 10"), vec!["fd", "]", "10"]);
    }
}
