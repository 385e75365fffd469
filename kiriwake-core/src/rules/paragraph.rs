//! Paragraphs: a bounded phrase opening a line or following a blank line

use super::absorb_indented;
use super::phrase::phrase_end;
use crate::limits::Limits;
use crate::text::Text;

pub(crate) fn recognize(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    openings(text, pos).find_map(|start| {
        let (end, chars) = phrase_end(
            text,
            start,
            limits.paragraph,
            limits.lookahead_range,
            false,
        )?;
        // Line breaks before `start` are ASCII
        let lead = start - pos;
        let budget = lead + limits.paragraph + limits.lookahead_range;
        Some(absorb_indented(text, end, lead + chars, budget).0)
    })
}

/// The cursor at a line start, or past a blank line break pair under it
fn openings(text: Text<'_>, pos: usize) -> impl Iterator<Item = usize> {
    let here = text.is_line_start(pos).then_some(pos);
    let first = text.newline_len(pos);
    let second = if first > 0 { text.newline_len(pos + first) } else { 0 };
    let after = (second > 0).then_some(pos + first + second);
    here.into_iter().chain(after)
}
