//! Line-aware cursor helpers over UTF-8 text
//!
//! Positions are byte offsets that always sit on char boundaries. Caps are
//! counted in characters, never bytes, so a 200-char heading is 200 chars
//! whether it is ASCII or Japanese.

/// Outcome of walking a run of characters on one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Byte position just past the run
    pub end: usize,
    /// Number of characters in the run
    pub chars: usize,
    /// Whether the run stopped at a line break or end of input
    pub at_eol: bool,
}

/// Borrowed view of the text being scanned
#[derive(Debug, Clone, Copy)]
pub struct Text<'a> {
    src: &'a str,
}

impl<'a> Text<'a> {
    /// Wrap a string slice
    pub fn new(src: &'a str) -> Self {
        Self { src }
    }

    /// The underlying string
    pub fn as_str(&self) -> &'a str {
        self.src
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.src.len()
    }

    /// Whether the text is empty
    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }

    /// Slice between two byte positions
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.src.get(start..end).unwrap_or("")
    }

    /// Character starting at `pos`
    #[inline]
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.src.get(pos..)?.chars().next()
    }

    /// Character ending at `pos`
    #[inline]
    pub fn prev_char(&self, pos: usize) -> Option<char> {
        self.src.get(..pos)?.chars().next_back()
    }

    /// Whether `pat` occurs at `pos`
    #[inline]
    pub fn starts_with(&self, pos: usize, pat: &str) -> bool {
        self.src
            .as_bytes()
            .get(pos..pos + pat.len())
            .is_some_and(|bytes| bytes == pat.as_bytes())
    }

    /// Whether `pat` occurs at `pos`, ignoring ASCII case
    #[inline]
    pub fn starts_with_ignore_ascii_case(&self, pos: usize, pat: &str) -> bool {
        self.src
            .as_bytes()
            .get(pos..pos + pat.len())
            .is_some_and(|bytes| bytes.eq_ignore_ascii_case(pat.as_bytes()))
    }

    /// Multiline `^`: start of input or directly after `\n`
    #[inline]
    pub fn is_line_start(&self, pos: usize) -> bool {
        pos == 0 || self.src.as_bytes().get(pos - 1) == Some(&b'\n')
    }

    /// Byte length of a `\n` or `\r\n` at `pos`, zero otherwise
    #[inline]
    pub fn newline_len(&self, pos: usize) -> usize {
        let bytes = self.src.as_bytes();
        match bytes.get(pos) {
            Some(b'\n') => 1,
            Some(b'\r') if bytes.get(pos + 1) == Some(&b'\n') => 2,
            _ => 0,
        }
    }

    /// End of input or a line break character at `pos`
    #[inline]
    pub fn is_eol(&self, pos: usize) -> bool {
        matches!(self.src.as_bytes().get(pos), None | Some(b'\n') | Some(b'\r'))
    }

    /// Followed by whitespace or end of input
    #[inline]
    pub fn at_boundary(&self, pos: usize) -> bool {
        self.char_at(pos).map_or(true, char::is_whitespace)
    }

    /// Walk up to `max_chars` characters of the current line
    pub fn line_run(&self, pos: usize, max_chars: usize) -> Run {
        self.run_while(pos, max_chars, |_| true)
    }

    /// Walk up to `max_chars` spaces or tabs
    pub fn blank_run(&self, pos: usize, max_chars: usize) -> Run {
        self.run_while(pos, max_chars, is_blank)
    }

    /// Walk characters of the current line while `pred` holds, up to `max_chars`
    pub fn run_while(&self, pos: usize, max_chars: usize, mut pred: impl FnMut(char) -> bool) -> Run {
        let mut end = pos;
        let mut chars = 0;
        for ch in self.src.get(pos..).unwrap_or("").chars() {
            if chars == max_chars || ch == '\n' || ch == '\r' || !pred(ch) {
                break;
            }
            end += ch.len_utf8();
            chars += 1;
        }
        Run {
            end,
            chars,
            at_eol: self.is_eol(end),
        }
    }

    /// First occurrence of `pat` starting within `max_chars` characters of
    /// `pos`. May cross line breaks.
    pub fn find_within(&self, pos: usize, max_chars: usize, pat: &str) -> Option<usize> {
        self.find_by(pos, max_chars, |at| self.starts_with(at, pat))
    }

    /// [`Text::find_within`] ignoring ASCII case
    pub fn find_within_ignore_ascii_case(
        &self,
        pos: usize,
        max_chars: usize,
        pat: &str,
    ) -> Option<usize> {
        self.find_by(pos, max_chars, |at| self.starts_with_ignore_ascii_case(at, pat))
    }

    fn find_by(&self, pos: usize, max_chars: usize, hit: impl Fn(usize) -> bool) -> Option<usize> {
        let mut at = pos;
        for _ in 0..=max_chars {
            if hit(at) {
                return Some(at);
            }
            at += self.char_at(at)?.len_utf8();
        }
        None
    }

    /// Characters between two byte positions
    pub fn char_count(&self, start: usize, end: usize) -> usize {
        self.slice(start, end).chars().count()
    }
}

/// Space or tab
#[inline]
pub fn is_blank(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// Regex `\w`
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_run_stops_at_cap_and_newline() {
        let text = Text::new("abcdef\nxyz");

        let capped = text.line_run(0, 3);
        assert_eq!(capped, Run { end: 3, chars: 3, at_eol: false });

        let full = text.line_run(0, 100);
        assert_eq!(full, Run { end: 6, chars: 6, at_eol: true });

        // Exactly filling the cap at the line end still reports the line end
        let exact = text.line_run(0, 6);
        assert!(exact.at_eol);
    }

    #[test]
    fn test_line_run_counts_chars_not_bytes() {
        let text = Text::new("日本語です");
        let run = text.line_run(0, 2);
        assert_eq!(run.chars, 2);
        assert_eq!(run.end, "日本".len());
    }

    #[test]
    fn test_line_start_and_newlines() {
        let text = Text::new("a\r\nb\nc");
        assert!(text.is_line_start(0));
        assert!(!text.is_line_start(1));
        assert!(text.is_line_start(3));
        assert_eq!(text.newline_len(1), 2);
        assert_eq!(text.newline_len(4), 1);
        assert_eq!(text.newline_len(0), 0);
        assert!(text.is_eol(1));
        assert!(text.is_eol(text.len()));
    }

    #[test]
    fn test_find_within_respects_cap() {
        let text = Text::new("0123456789END");
        assert_eq!(text.find_within(0, 10, "END"), Some(10));
        assert_eq!(text.find_within(0, 9, "END"), None);
        assert_eq!(text.find_within_ignore_ascii_case(0, 10, "end"), Some(10));
    }

    #[test]
    fn test_out_of_range_positions_are_harmless() {
        let text = Text::new("ab");
        assert_eq!(text.char_at(10), None);
        assert_eq!(text.line_run(10, 5).chars, 0);
        assert_eq!(text.slice(1, 10), "");
    }
}
