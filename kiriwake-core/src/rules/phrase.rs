//! Bounded phrase with terminator lookahead, shared by Paragraph and Fallback

use crate::terminator;
use crate::text::Text;

/// End of a phrase of at most `cap` characters of the current line.
///
/// A line that ends within the cap is taken whole. A longer line may run up
/// to `lookahead` characters past the cap to reach a terminator followed by
/// whitespace or end of input; failing that it ends at the cap when the next
/// character is whitespace, or before the last whitespace inside the cap.
/// With `hard_cut` a line without any of these is cut at the cap.
///
/// Returns the end position and the phrase length in characters.
pub(crate) fn phrase_end(
    text: Text<'_>,
    pos: usize,
    cap: usize,
    lookahead: usize,
    hard_cut: bool,
) -> Option<(usize, usize)> {
    let mut end = pos;
    let mut chars = 0;
    let mut last_blank = None;
    for ch in text.as_str().get(pos..)?.chars() {
        if chars == cap || ch == '\n' || ch == '\r' {
            break;
        }
        if chars > 0 && ch.is_whitespace() {
            last_blank = Some((end, chars));
        }
        end += ch.len_utf8();
        chars += 1;
    }

    if chars == 0 {
        return None;
    }
    if text.is_eol(end) {
        return Some((end, chars));
    }

    if let Some((found, extra)) = terminator_ahead(text, end, lookahead) {
        return Some((found, chars + extra));
    }

    if text.char_at(end).is_some_and(char::is_whitespace) {
        return Some((end, chars));
    }
    if let Some(blank) = last_blank {
        return Some(blank);
    }
    hard_cut.then_some((end, chars))
}

/// First terminator cluster within `range` characters of `pos` on the same
/// line that is followed by whitespace or end of input
fn terminator_ahead(text: Text<'_>, pos: usize, range: usize) -> Option<(usize, usize)> {
    let mut at = pos;
    let mut extra = 0;
    while extra < range {
        if let Some(cluster) = terminator::cluster_end(text, at) {
            let width = text.char_count(at, cluster);
            if extra + width > range {
                return None;
            }
            extra += width;
            if text.at_boundary(cluster) {
                return Some((cluster, extra));
            }
            at = cluster;
            continue;
        }
        match text.char_at(at) {
            None | Some('\n') | Some('\r') => return None,
            Some(ch) => {
                at += ch.len_utf8();
                extra += 1;
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_taken_whole() {
        let text = Text::new("short line\nnext");
        assert_eq!(phrase_end(text, 0, 100, 10, false), Some((10, 10)));
    }

    #[test]
    fn test_lookahead_reaches_terminator_past_cap() {
        let text = Text::new("aaaa bbbb cc. tail words");
        // cap 8 stops inside "bbbb"; the period sits 4 chars further on
        assert_eq!(phrase_end(text, 0, 8, 10, false), Some((13, 13)));
        // Too little lookahead falls back to the last blank
        assert_eq!(phrase_end(text, 0, 8, 3, false), Some((4, 4)));
    }

    #[test]
    fn test_hard_cut_only_when_allowed() {
        let text = Text::new("abcdefghijklmnop");
        assert_eq!(phrase_end(text, 0, 5, 3, false), None);
        assert_eq!(phrase_end(text, 0, 5, 3, true), Some((5, 5)));
    }

    #[test]
    fn test_nothing_on_a_line_break() {
        let text = Text::new("\nabc");
        assert_eq!(phrase_end(text, 0, 5, 3, true), None);
    }
}
