//! Block quotes: `>` lines, nested up to a fixed depth

use super::eat_newline;
use crate::limits::Limits;
use crate::text::{is_blank, Text};

pub(crate) fn recognize(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    if !text.is_line_start(pos) || text.char_at(pos) != Some('>') {
        return None;
    }

    let mut at = pos + 1;
    for _ in 0..limits.blockquote_depth {
        let skip = usize::from(text.char_at(at) == Some(' '));
        if text.char_at(at + skip) != Some('>') {
            break;
        }
        at += skip + 1;
    }

    let first = text.line_run(at, limits.blockquote_line);
    if !first.at_eol {
        return Some(first.end);
    }

    let mut end = first.end;
    for _ in 1..limits.blockquote_lines {
        let nl = text.newline_len(end);
        if nl == 0 {
            break;
        }
        let start = end + nl;
        if !text.char_at(start).is_some_and(|ch| ch == '>' || is_blank(ch)) {
            break;
        }
        let line = text.line_run(start, limits.blockquote_line);
        if !line.at_eol {
            break;
        }
        end = line.end;
    }
    Some(eat_newline(text, end))
}
