//! Recognition rules, one module per category
//!
//! A rule looks at the text from a cursor position and returns the byte
//! position just past its match, or `None`. Every repetition inside a rule is
//! a counted loop bounded by a cap from [`Limits`](crate::Limits), so one
//! attempt costs at most a constant number of character steps.

pub(crate) mod citation;
pub(crate) mod code;
pub(crate) mod enclosed;
pub(crate) mod fallback;
pub(crate) mod heading;
pub(crate) mod html;
pub(crate) mod list;
pub(crate) mod markup;
pub(crate) mod math;
pub(crate) mod paragraph;
pub(crate) mod phrase;
pub(crate) mod quote;
pub(crate) mod rule;
pub(crate) mod sentence;
pub(crate) mod standalone;
pub(crate) mod table;

use crate::text::{is_blank, Text};

/// Positions a line-anchored rule may start from: the cursor itself when it
/// is a line start, then the start of the next line when the cursor sits on
/// a line break (the break becomes part of the match).
pub(crate) fn line_openings(text: Text<'_>, pos: usize) -> impl Iterator<Item = usize> {
    let here = text.is_line_start(pos).then_some(pos);
    let nl = text.newline_len(pos);
    let next = (nl > 0).then_some(pos + nl);
    here.into_iter().chain(next)
}

/// Consume a line break at `end`, if any
pub(crate) fn eat_newline(text: Text<'_>, end: usize) -> usize {
    end + text.newline_len(end)
}

/// Extend `end` over following lines that begin with a blank, while each
/// whole line (break included) fits in what is left of `budget` characters.
/// Returns the new end and the updated character count.
pub(crate) fn absorb_indented(
    text: Text<'_>,
    mut end: usize,
    mut used: usize,
    budget: usize,
) -> (usize, usize) {
    loop {
        let nl = text.newline_len(end);
        if nl == 0 {
            break;
        }
        let start = end + nl;
        if !text.char_at(start).is_some_and(is_blank) {
            break;
        }
        // Line breaks are ASCII, so their byte length is their char count
        let Some(room) = budget.checked_sub(used + nl) else {
            break;
        };
        let run = text.line_run(start, room);
        if run.chars == 0 || !run.at_eol {
            break;
        }
        end = run.end;
        used += nl + run.chars;
    }
    (end, used)
}

/// `delim`, then 1..=`cap` characters of one line that are not `delim`,
/// then `delim` again
pub(crate) fn delimited(text: Text<'_>, pos: usize, delim: char, cap: usize) -> Option<usize> {
    if text.char_at(pos) != Some(delim) {
        return None;
    }
    let body = text.run_while(pos + delim.len_utf8(), cap, |ch| ch != delim);
    if body.chars == 0 || text.char_at(body.end) != Some(delim) {
        return None;
    }
    Some(body.end + delim.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_openings() {
        let text = Text::new("a\n- b");
        assert_eq!(line_openings(text, 0).collect::<Vec<_>>(), vec![0]);
        assert_eq!(line_openings(text, 1).collect::<Vec<_>>(), vec![2]);
        assert!(line_openings(text, 3).next().is_none());

        // A blank line offers both itself and the line after it
        let text = Text::new("a\n\nb");
        assert_eq!(line_openings(text, 2).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_absorb_indented_only_whole_lines() {
        let text = Text::new("head\n  more\n  longer line\nflush");
        let (end, used) = absorb_indented(text, 4, 4, 100);
        assert_eq!(&text.as_str()[..end], "head\n  more\n  longer line");
        assert_eq!(used, text.char_count(0, end));

        // The second continuation does not fit and is left alone
        let (end, _) = absorb_indented(text, 4, 4, 15);
        assert_eq!(&text.as_str()[..end], "head\n  more");
    }

    #[test]
    fn test_delimited() {
        let text = Text::new("$x^2$ and $$");
        assert_eq!(delimited(text, 0, '$', 100), Some(5));
        assert_eq!(delimited(text, 10, '$', 100), None);
        assert_eq!(delimited(text, 0, '$', 2), None);
    }
}
