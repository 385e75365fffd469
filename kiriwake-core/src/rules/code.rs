//! Code blocks: fenced, indented, and `<pre>`

use super::{eat_newline, line_openings};
use crate::limits::Limits;
use crate::text::{is_word_char, Text};

const FENCES: [&str; 2] = ["```", "~~~"];
const INDENT: &str = "    ";

pub(crate) fn recognize(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    line_openings(text, pos)
        .find_map(|start| fenced(text, start, limits))
        .or_else(|| line_openings(text, pos).find_map(|start| indented(text, start, limits)))
        .or_else(|| pre(text, pos, limits))
}

fn fenced(text: Text<'_>, start: usize, limits: &Limits) -> Option<usize> {
    let fence = FENCES.into_iter().find(|fence| text.starts_with(start, fence))?;
    let lang = text.run_while(start + fence.len(), limits.code_language, is_word_char);
    let nl = text.newline_len(lang.end);
    if nl == 0 {
        return None;
    }
    let close = text.find_within(lang.end + nl, limits.code_block, fence)?;
    Some(eat_newline(text, close + fence.len()))
}

fn indent_width(text: Text<'_>, pos: usize) -> Option<usize> {
    if text.starts_with(pos, INDENT) {
        Some(INDENT.len())
    } else if text.starts_with(pos, "\t") {
        Some(1)
    } else {
        None
    }
}

fn indented(text: Text<'_>, start: usize, limits: &Limits) -> Option<usize> {
    let width = indent_width(text, start)?;
    let first = text.line_run(start + width, limits.list_item);
    if !first.at_eol {
        return Some(first.end);
    }

    let mut end = first.end;
    for _ in 1..limits.indented_code_lines {
        let nl = text.newline_len(end);
        if nl == 0 {
            break;
        }
        let Some(width) = indent_width(text, end + nl) else {
            break;
        };
        let line = text.line_run(end + nl + width, limits.list_item);
        if !line.at_eol {
            break;
        }
        end = line.end;
    }
    Some(eat_newline(text, end))
}

/// `<pre>` or `<pre><code>` through `</pre>`
fn pre(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    if !text.starts_with_ignore_ascii_case(pos, "<pre>") {
        return None;
    }
    let mut body = pos + "<pre>".len();
    if text.starts_with_ignore_ascii_case(body, "<code>") {
        body += "<code>".len();
    }
    let close = text.find_within_ignore_ascii_case(body, limits.code_block, "</pre>")?;
    Some(close + "</pre>".len())
}
