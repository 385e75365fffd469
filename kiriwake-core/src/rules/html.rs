//! HTML elements: an opening tag through its matching closing tag

use super::markup::{close_tag, open_tag};
use crate::limits::Limits;
use crate::text::Text;

pub(crate) fn recognize(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    let tag = open_tag(text, pos, limits.html_tag_attributes)?;
    if tag.self_closing {
        return Some(tag.end);
    }

    let mut depth = 1usize;
    let mut at = tag.end;
    let mut chars = 0;
    loop {
        if text.char_at(at) == Some('<') {
            if let Some(end) = close_tag(text, at, tag.name) {
                depth -= 1;
                if depth == 0 {
                    return Some(end);
                }
            } else if opens_same(text, at, tag.name) {
                depth += 1;
            }
        }
        if chars == limits.html_tag_content {
            return None;
        }
        at += text.char_at(at)?.len_utf8();
        chars += 1;
    }
}

/// `<name` followed by whitespace, `>` or `/`
fn opens_same(text: Text<'_>, pos: usize, name: &str) -> bool {
    text.starts_with_ignore_ascii_case(pos + 1, name)
        && text
            .char_at(pos + 1 + name.len())
            .is_some_and(|ch| ch.is_whitespace() || ch == '>' || ch == '/')
}
