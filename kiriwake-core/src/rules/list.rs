//! List items with indented continuation lines

use super::line_openings;
use crate::limits::Limits;
use crate::text::Text;

/// Leading blanks allowed before a marker
const MAX_MARKER_INDENT: usize = 3;
/// Digits in an ordered list number
const MAX_ORDINAL_DIGITS: usize = 3;
/// Blanks required before a continuation line counts as nested
const MIN_CONTINUATION_INDENT: usize = 2;

pub(crate) fn recognize(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    line_openings(text, pos).find_map(|start| item(text, start, limits))
}

fn item(text: Text<'_>, start: usize, limits: &Limits) -> Option<usize> {
    let indent = text.blank_run(start, MAX_MARKER_INDENT);
    let marker_end = marker(text, indent.end)?;
    let gap = text.blank_run(marker_end, limits.list_indent);
    if gap.chars == 0 {
        return None;
    }
    let first = text.line_run(gap.end, limits.list_item);
    if first.chars == 0 {
        return None;
    }

    let mut end = first.end;
    if !first.at_eol {
        return Some(end);
    }
    for _ in 0..limits.nested_list_items {
        let nl = text.newline_len(end);
        if nl == 0 {
            break;
        }
        let indent = text.blank_run(end + nl, limits.list_indent);
        if indent.chars < MIN_CONTINUATION_INDENT {
            break;
        }
        let line = text.line_run(indent.end, limits.list_item);
        if line.chars == 0 || !line.at_eol {
            break;
        }
        end = line.end;
    }
    Some(end)
}

/// `-`, `*`, `+`, `•`, `[ ]`, `[x]`, or `12.`
fn marker(text: Text<'_>, pos: usize) -> Option<usize> {
    match text.char_at(pos)? {
        ch @ ('-' | '*' | '+' | '•') => Some(pos + ch.len_utf8()),
        '[' => {
            let checked = text.char_at(pos + 1)?;
            (matches!(checked, ' ' | 'x' | 'X') && text.char_at(pos + 2) == Some(']'))
                .then_some(pos + 3)
        }
        '0'..='9' => {
            let digits = text.run_while(pos, MAX_ORDINAL_DIGITS, |ch| ch.is_ascii_digit());
            (text.char_at(digits.end) == Some('.')).then_some(digits.end + 1)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(src: &str, pos: usize) -> Option<usize> {
        recognize(Text::new(src), pos, &Limits::default())
    }

    #[test]
    fn test_each_bullet_is_its_own_item() {
        let src = "- item one\n- item two\n";
        assert_eq!(list(src, 0), Some(10));
        // From the line break the next item is taken together with it
        assert_eq!(list(src, 10), Some(21));
        assert_eq!(list(src, 21), None);
    }

    #[test]
    fn test_markers() {
        assert!(list("* star", 0).is_some());
        assert!(list("+ plus", 0).is_some());
        assert!(list("• dot", 0).is_some());
        assert!(list("12. ordered", 0).is_some());
        assert!(list("[x] done", 0).is_some());
        assert!(list("[ ] todo", 0).is_some());
        assert!(list("   - indented", 0).is_some());

        assert!(list("1234. too long", 0).is_none());
        assert!(list("-no gap", 0).is_none());
        assert!(list("    - four spaces", 0).is_none());
        assert!(list("[y] nope", 0).is_none());
    }

    #[test]
    fn test_indented_continuation_lines() {
        let src = "- first\n  wrapped\n   again\nnot part";
        assert_eq!(list(src, 0), Some("- first\n  wrapped\n   again".len()));
    }

    #[test]
    fn test_continuation_count_is_capped() {
        let limits = Limits {
            nested_list_items: 1,
            ..Limits::default()
        };
        let src = "- a\n  b\n  c";
        assert_eq!(recognize(Text::new(src), 0, &limits), Some(7));
    }

    #[test]
    fn test_requires_line_opening() {
        assert_eq!(list("x - not a list", 2), None);
    }
}
