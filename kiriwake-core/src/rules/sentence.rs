//! Sentences: free text up to the first terminator that ends at a boundary

use super::absorb_indented;
use crate::limits::Limits;
use crate::terminator;
use crate::text::Text;

pub(crate) fn recognize(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    let cap = limits.sentence;
    let mut at = pos;
    let mut chars = 0;
    let mut last_blank = None;

    while chars < cap {
        let Some(ch) = text.char_at(at) else { break };
        if ch == '\n' || ch == '\r' {
            break;
        }
        if let Some(cluster) = terminator::cluster_end(text, at) {
            let width = text.char_count(at, cluster);
            if chars + width > cap {
                break;
            }
            at = cluster;
            chars += width;
            if text.at_boundary(at) {
                return Some(absorb_indented(text, at, chars, cap).0);
            }
            continue;
        }
        if chars > 0 && ch.is_whitespace() {
            last_blank = Some(at);
        }
        at += ch.len_utf8();
        chars += 1;
    }

    if chars == 0 {
        return None;
    }
    if text.is_eol(at) {
        return Some(absorb_indented(text, at, chars, cap).0);
    }
    if text.char_at(at).is_some_and(char::is_whitespace) {
        return Some(at);
    }
    last_blank
}
