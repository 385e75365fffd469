//! Fallback: any remaining line content, cut hard at the cap

use super::absorb_indented;
use super::phrase::phrase_end;
use crate::limits::Limits;
use crate::text::Text;

pub(crate) fn recognize(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    let (end, chars) = phrase_end(
        text,
        pos,
        limits.standalone_line,
        limits.lookahead_range,
        true,
    )?;
    let budget = limits.standalone_line + limits.lookahead_range;
    Some(absorb_indented(text, end, chars, budget).0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_line_content_matches() {
        let limits = Limits::default();
        let src = "(".repeat(2000);
        assert_eq!(recognize(Text::new(&src), 0, &limits), Some(limits.standalone_line));
        assert_eq!(recognize(Text::new("x"), 0, &limits), Some(1));
    }

    #[test]
    fn test_line_break_is_left_alone() {
        assert_eq!(recognize(Text::new("\n"), 0, &Limits::default()), None);
        assert_eq!(recognize(Text::new(""), 0, &Limits::default()), None);
    }
}
