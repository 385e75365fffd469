//! LaTeX-style math: `$$...$$` blocks and `$...$` inline

use super::delimited;
use crate::limits::Limits;
use crate::text::Text;

pub(crate) fn recognize(text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
    if text.starts_with(pos, "$$") {
        if let Some(close) = text.find_within(pos + 2, limits.math_block, "$$") {
            return Some(close + 2);
        }
    }
    delimited(text, pos, '$', limits.math_inline)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn math(src: &str) -> Option<usize> {
        recognize(Text::new(src), 0, &Limits::default())
    }

    #[test]
    fn test_block_may_span_lines() {
        let src = "$$\n\\sum_i x_i\n$$ done";
        assert_eq!(math(src), Some(src.len() - " done".len()));
    }

    #[test]
    fn test_inline() {
        assert_eq!(math("$a^2$ and"), Some(5));
        assert_eq!(math("$open"), None);
    }

    #[test]
    fn test_block_cap() {
        let src = format!("$${}$$", "x".repeat(501));
        assert_eq!(math(&src), None);
    }
}
