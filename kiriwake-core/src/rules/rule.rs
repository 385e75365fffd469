//! Horizontal rules: `---`, `* * *`, `___`, `<hr />`

use super::eat_newline;
use crate::limits::Limits;
use crate::text::{is_blank, Text};

pub(crate) fn recognize(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    markdown(text, pos, limits).or_else(|| html(text, pos, limits))
}

fn markdown(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    if !text.is_line_start(pos) {
        return None;
    }
    let mark = text.char_at(pos).filter(|&ch| matches!(ch, '-' | '*' | '_'))?;
    let mut count = 0;
    let run = text.run_while(pos, limits.standalone_line, |ch| {
        if ch == mark {
            count += 1;
            true
        } else {
            is_blank(ch)
        }
    });
    if count < limits.min_horizontal_rule || !run.at_eol {
        return None;
    }
    Some(eat_newline(text, run.end))
}

fn html(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    if !text.starts_with_ignore_ascii_case(pos, "<hr") {
        return None;
    }
    let blanks = text.run_while(pos + 3, limits.html_tag_attributes, char::is_whitespace);
    let mut at = blanks.end;
    if text.char_at(at) == Some('/') {
        at += 1;
    }
    (text.char_at(at) == Some('>')).then_some(at + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(src: &str, pos: usize) -> Option<usize> {
        recognize(Text::new(src), pos, &Limits::default())
    }

    #[test]
    fn test_markdown_rules() {
        assert_eq!(rule("---\n", 0), Some(4));
        assert_eq!(rule("* * *", 0), Some(5));
        assert_eq!(rule("___  \r\nnext", 0), Some(7));
        assert_eq!(rule("--\n", 0), None);
        assert_eq!(rule("--- text", 0), None);
        assert_eq!(rule("-*-", 0), None);
    }

    #[test]
    fn test_html_rule_anywhere() {
        assert_eq!(rule("a <hr> b", 2), Some(6));
        assert_eq!(rule("<HR />", 0), Some(6));
        assert_eq!(rule("<hr/>", 0), Some(5));
        assert_eq!(rule("<hr class=\"x\">", 0), None);
    }
}
