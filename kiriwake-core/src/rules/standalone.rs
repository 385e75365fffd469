//! Standalone lines: a tagged line that reads as a complete sentence

use super::markup::{open_tag, strip_any_close_tag};
use super::{absorb_indented, eat_newline};
use crate::limits::Limits;
use crate::terminator::ends_with_terminator;
use crate::text::Text;

pub(crate) fn recognize(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    if !text.is_line_start(pos) {
        return None;
    }
    let tag = open_tag(text, pos, limits.html_tag_attributes)?;
    let line = text.line_run(tag.end, limits.standalone_line);
    if line.chars == 0 || !line.at_eol {
        return None;
    }
    let sentence = strip_any_close_tag(text.slice(tag.end, line.end).trim_end()).trim_end();
    if !ends_with_terminator(sentence) {
        return None;
    }

    let tag_chars = text.char_count(pos, tag.end);
    let (end, _) = absorb_indented(
        text,
        line.end,
        tag_chars + line.chars,
        tag_chars + limits.standalone_line,
    );
    Some(eat_newline(text, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standalone(src: &str) -> Option<usize> {
        recognize(Text::new(src), 0, &Limits::default())
    }

    #[test]
    fn test_tagged_sentence_line() {
        let src = "<p>Hello world.</p>\nnext";
        assert_eq!(standalone(src), Some("<p>Hello world.</p>\n".len()));
        assert_eq!(standalone("<li>All done ✅"), Some("<li>All done ✅".len()));
    }

    #[test]
    fn test_requires_terminator() {
        assert_eq!(standalone("<p>No stop here</p>"), None);
        assert_eq!(standalone("plain sentence."), None);
    }

    #[test]
    fn test_indented_continuation() {
        let src = "<div>Intro line!\n  more detail\nnext";
        assert_eq!(standalone(src), Some("<div>Intro line!\n  more detail\n".len()));
    }
}
