//! Quoted, parenthesized, bracketed and inline-delimited spans

use super::delimited;
use crate::limits::Limits;
use crate::text::{is_word_char, Text};

const TRIPLE_QUOTE: &str = "\"\"\"";

pub(crate) fn recognize(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    let ch = text.char_at(pos)?;
    let quotes_allowed = !text.prev_char(pos).is_some_and(is_word_char);
    match ch {
        '"' if quotes_allowed => {
            triple_quoted(text, pos, limits).or_else(|| quoted(text, pos, ch, limits))
        }
        '\'' if quotes_allowed => quoted(text, pos, ch, limits),
        '`' if quotes_allowed => quoted(text, pos, ch, limits)
            .or_else(|| delimited(text, pos, '`', limits.math_inline)),
        '(' => bracketed(text, pos, '(', ')', limits),
        '[' => bracketed(text, pos, '[', ']', limits),
        '$' => delimited(text, pos, '$', limits.math_inline),
        '`' => delimited(text, pos, '`', limits.math_inline),
        _ => None,
    }
}

fn followed_by_word(text: Text<'_>, pos: usize) -> bool {
    text.char_at(pos).is_some_and(is_word_char)
}

/// `"""..."""` with no `"` inside; may span lines
fn triple_quoted(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    if !text.starts_with(pos, TRIPLE_QUOTE) {
        return None;
    }
    let mut at = pos + TRIPLE_QUOTE.len();
    for _ in 0..limits.quoted_text {
        match text.char_at(at)? {
            '"' => break,
            ch => at += ch.len_utf8(),
        }
    }
    if !text.starts_with(at, TRIPLE_QUOTE) {
        return None;
    }
    let end = at + TRIPLE_QUOTE.len();
    (!followed_by_word(text, end)).then_some(end)
}

/// One-line span closed by the first matching quote that is not followed by
/// a word character
fn quoted(text: Text<'_>, pos: usize, quote: char, limits: &Limits) -> Option<usize> {
    let mut at = pos + quote.len_utf8();
    let mut chars = 0;
    loop {
        let ch = text.char_at(at)?;
        if ch == '\n' || ch == '\r' {
            return None;
        }
        let next = at + ch.len_utf8();
        if ch == quote && !followed_by_word(text, next) {
            return Some(next);
        }
        if chars == limits.quoted_text {
            return None;
        }
        at = next;
        chars += 1;
    }
}

/// Same-line span with same-type nesting. Flat runs between brackets and
/// the whole span (delimiters included) are both capped.
fn bracketed(text: Text<'_>, pos: usize, open: char, close: char, limits: &Limits) -> Option<usize> {
    let max_depth = 1 + limits.nested_parentheses;
    let mut depth = 0;
    let mut run = 0;
    let mut chars = 0;
    let mut at = pos;
    loop {
        if chars == limits.quoted_text {
            return None;
        }
        let ch = text.char_at(at)?;
        if ch == '\n' || ch == '\r' {
            return None;
        }
        at += ch.len_utf8();
        chars += 1;
        if ch == open {
            depth += 1;
            run = 0;
            if depth > max_depth {
                return None;
            }
        } else if ch == close {
            depth -= 1;
            run = 0;
            if depth == 0 {
                return Some(at);
            }
        } else {
            run += 1;
            if run > limits.parenthetical_content {
                return None;
            }
        }
    }
}
