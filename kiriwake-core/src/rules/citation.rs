//! Citations: `[12] Author, Title ...`

use crate::limits::Limits;
use crate::text::Text;

pub(crate) fn recognize(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    if text.char_at(pos) != Some('[') {
        return None;
    }
    let digits = text.run_while(pos + 1, limits.citation_digits, |ch| ch.is_ascii_digit());
    if digits.chars == 0 || text.char_at(digits.end) != Some(']') {
        return None;
    }
    let rest = text.line_run(digits.end + 1, limits.standalone_line);
    (rest.chars > 0).then_some(rest.end)
}
