//! HTML tag scanning shared by the markup-aware rules

use crate::text::Text;

/// An opening tag such as `<p class="x">`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenTag<'a> {
    pub name: &'a str,
    /// Byte position just past `>`
    pub end: usize,
    /// Written as `<name ... />`
    pub self_closing: bool,
}

/// `<` + ASCII letter + up to `max_attrs` more characters on the same line
/// that are not `>`, then `>`
pub(crate) fn open_tag<'a>(text: Text<'a>, pos: usize, max_attrs: usize) -> Option<OpenTag<'a>> {
    if text.char_at(pos) != Some('<') {
        return None;
    }
    let first = pos + 1;
    if !text.char_at(first).is_some_and(|ch| ch.is_ascii_alphabetic()) {
        return None;
    }
    let name_end = text
        .run_while(first, 1 + max_attrs, |ch| ch.is_ascii_alphanumeric() || ch == '-')
        .end;
    let body = text.run_while(first + 1, max_attrs, |ch| ch != '>');
    if text.char_at(body.end) != Some('>') {
        return None;
    }
    let self_closing = text.slice(first, body.end).trim_end().ends_with('/');
    Some(OpenTag {
        name: text.slice(first, name_end),
        end: body.end + 1,
        self_closing,
    })
}

/// `</name>` at `pos`, ignoring ASCII case; returns the position past it
pub(crate) fn close_tag(text: Text<'_>, pos: usize, name: &str) -> Option<usize> {
    if !text.starts_with(pos, "</") || !text.starts_with_ignore_ascii_case(pos + 2, name) {
        return None;
    }
    let gt = pos + 2 + name.len();
    (text.char_at(gt) == Some('>')).then_some(gt + 1)
}

/// Strip a trailing `</name>` for any ASCII tag name
pub(crate) fn strip_any_close_tag(line: &str) -> &str {
    let Some(body) = line.strip_suffix('>') else {
        return line;
    };
    let Some(open) = body.rfind("</") else {
        return line;
    };
    let name = &body[open + 2..];
    if !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric()) {
        &line[..open]
    } else {
        line
    }
}
