//! Headings: marker-prefixed lines, Setext underlines and `<h1>`..`<h6>`

use super::eat_newline;
use crate::limits::Limits;
use crate::text::{is_blank, is_word_char, Text};

/// Length of `</hN>`
const CLOSE_TAG_LEN: usize = 5;

fn is_marker(ch: char) -> bool {
    matches!(ch, '#' | '*' | '=' | '-')
}

pub(crate) fn recognize(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    if !text.is_line_start(pos) {
        return None;
    }
    marked(text, pos, limits)
        .or_else(|| setext(text, pos, limits))
        .or_else(|| html(text, pos, limits))
}

/// `# Title`, `== Title`, `*** Title`
fn marked(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    let markers = text.run_while(pos, limits.heading_markers, is_marker);
    if markers.chars == 0 {
        return None;
    }
    // `- item` and `* item` are list bullets
    if markers.chars == 1
        && matches!(text.char_at(pos), Some('-' | '*'))
        && text.char_at(markers.end).is_some_and(is_blank)
    {
        return None;
    }
    let (end, content) = heading_tail(text, markers.end, limits)?;
    // A line of markers alone is a rule or an underline
    if !content.chars().any(|ch| !is_marker(ch) && !ch.is_whitespace()) {
        return None;
    }
    Some(end)
}

/// A title line followed by a `===` or `---` underline
fn setext(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    if !text.char_at(pos).is_some_and(is_word_char) {
        return None;
    }
    let title = text.line_run(pos, limits.heading_content + 1);
    if !title.at_eol {
        return None;
    }
    let nl = text.newline_len(title.end);
    if nl == 0 {
        return None;
    }

    let start = title.end + nl;
    let first = text.char_at(start)?;
    if first != '=' && first != '-' {
        return None;
    }
    let mut marks = 0;
    let underline = text.run_while(start, limits.heading_underline, |ch| {
        if ch == first {
            marks += 1;
            true
        } else {
            is_blank(ch)
        }
    });
    if marks < 2 || !underline.at_eol {
        return None;
    }
    Some(eat_newline(text, underline.end))
}

/// `<h2 class="x">Title</h2>`
fn html(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    if !text.starts_with_ignore_ascii_case(pos, "<h")
        || !matches!(text.char_at(pos + 2), Some('1'..='6'))
    {
        return None;
    }
    let attrs = text.run_while(pos + 3, limits.html_heading_attributes, |ch| ch != '>');
    if text.char_at(attrs.end) != Some('>') {
        return None;
    }
    heading_tail(text, attrs.end + 1, limits).map(|(end, _)| end)
}

/// Heading content to end of line, with an optional `</hN>` that does not
/// count toward the cap. Returns the end past the line break and the content.
fn heading_tail<'a>(text: Text<'a>, pos: usize, limits: &Limits) -> Option<(usize, &'a str)> {
    let run = text.line_run(pos, limits.heading_content + CLOSE_TAG_LEN);
    if !run.at_eol {
        return None;
    }
    let content = strip_heading_close(text.slice(pos, run.end));
    let chars = content.chars().count();
    if chars == 0 || chars > limits.heading_content {
        return None;
    }
    Some((eat_newline(text, run.end), content))
}

fn strip_heading_close(line: &str) -> &str {
    let bytes = line.as_bytes();
    let Some(at) = bytes.len().checked_sub(CLOSE_TAG_LEN) else {
        return line;
    };
    match &bytes[at..] {
        [b'<', b'/', h, n, b'>'] if h.eq_ignore_ascii_case(&b'h') && (b'1'..=b'6').contains(n) => {
            &line[..at]
        }
        _ => line,
    }
}
