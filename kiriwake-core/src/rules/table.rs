//! Tables: pipe-delimited rows and `<table>` elements

use super::line_openings;
use crate::limits::Limits;
use crate::text::{is_blank, Text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Row {
    end: usize,
    /// The line ends with a closing pipe
    complete: bool,
    /// `|---|:--:|` style alignment row
    separator: bool,
}

pub(crate) fn recognize(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    line_openings(text, pos)
        .find_map(|start| pipe_table(text, start, limits))
        .or_else(|| html_table(text, pos, limits))
}

fn pipe_table(text: Text<'_>, start: usize, limits: &Limits) -> Option<usize> {
    let first = row(text, start, limits)?;
    let mut end = first.end;
    if !first.complete {
        return Some(end);
    }

    let mut rows = 1;
    let mut seen_separator = false;
    loop {
        let nl = text.newline_len(end);
        if nl == 0 {
            break;
        }
        let Some(next) = row(text, end + nl, limits) else {
            break;
        };
        if next.separator && next.complete && rows == 1 && !seen_separator {
            seen_separator = true;
            end = next.end;
            continue;
        }
        if rows == limits.table_rows {
            break;
        }
        rows += 1;
        end = next.end;
        if !next.complete {
            break;
        }
    }
    Some(end)
}

fn row(text: Text<'_>, start: usize, limits: &Limits) -> Option<Row> {
    if text.char_at(start) != Some('|') {
        return None;
    }
    let run = text.line_run(start, limits.table_cell + 2);
    let line = text.slice(start, run.end);

    if run.at_eol {
        let trimmed = line.trim_end_matches(is_blank);
        if trimmed.len() >= 2 && trimmed.ends_with('|') {
            let inner = &trimmed[1..trimmed.len() - 1];
            let separator = inner.contains('-')
                && inner.chars().all(|ch| matches!(ch, '-' | ':' | '|') || is_blank(ch));
            return Some(Row {
                end: run.end,
                complete: true,
                separator,
            });
        }
    }

    let last = line.rfind('|').filter(|&at| at > 0)?;
    Some(Row {
        end: start + last + 1,
        complete: false,
        separator: false,
    })
}

/// `<table>` or `<table attrs>` through the first `</table>`
fn html_table(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    if !text.starts_with_ignore_ascii_case(pos, "<table") {
        return None;
    }
    let after = pos + "<table".len();
    let body = match text.char_at(after)? {
        '>' => after + 1,
        ch if ch.is_whitespace() => {
            let attrs = text.run_while(after, limits.html_tag_attributes, |ch| ch != '>');
            if text.char_at(attrs.end) != Some('>') {
                return None;
            }
            attrs.end + 1
        }
        _ => return None,
    };
    let close = text.find_within_ignore_ascii_case(body, limits.html_table, "</table>")?;
    Some(close + "</table>".len())
}
