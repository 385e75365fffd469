//! Sentence terminator table
//!
//! Terminators are `.`, `!`, `?`, the ellipsis `…`, the double punctuation
//! marks `⁇ ⁈ ⁉`, and emoji: every Emoji_Presentation code point plus any
//! Extended_Pictographic code point that is followed by VS16 (an emoji
//! presentation sequence such as `❤️`).
//!
//! All tables are sorted inclusive ranges searched with a binary search, so
//! each predicate is O(log n) with no allocation.

use crate::text::Text;

type Ranges = &'static [(u32, u32)];

/// Non-ASCII punctuation terminators
const PUNCTUATION: Ranges = &[(0x2026, 0x2026), (0x2047, 0x2049)];

/// Code points with default emoji presentation (Unicode 15.1 emoji-data)
const EMOJI_PRESENTATION: Ranges = &[
    (0x231A, 0x231B),
    (0x23E9, 0x23EC),
    (0x23F0, 0x23F0),
    (0x23F3, 0x23F3),
    (0x25FD, 0x25FE),
    (0x2614, 0x2615),
    (0x2648, 0x2653),
    (0x267F, 0x267F),
    (0x2693, 0x2693),
    (0x26A1, 0x26A1),
    (0x26AA, 0x26AB),
    (0x26BD, 0x26BE),
    (0x26C4, 0x26C5),
    (0x26CE, 0x26CE),
    (0x26D4, 0x26D4),
    (0x26EA, 0x26EA),
    (0x26F2, 0x26F3),
    (0x26F5, 0x26F5),
    (0x26FA, 0x26FA),
    (0x26FD, 0x26FD),
    (0x2705, 0x2705),
    (0x270A, 0x270B),
    (0x2728, 0x2728),
    (0x274C, 0x274C),
    (0x274E, 0x274E),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2795, 0x2797),
    (0x27B0, 0x27B0),
    (0x27BF, 0x27BF),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x1F004, 0x1F004),
    (0x1F0CF, 0x1F0CF),
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A),
    (0x1F1E6, 0x1F1FF),
    (0x1F201, 0x1F201),
    (0x1F21A, 0x1F21A),
    (0x1F22F, 0x1F22F),
    (0x1F232, 0x1F236),
    (0x1F238, 0x1F23A),
    (0x1F250, 0x1F251),
    (0x1F300, 0x1F320),
    (0x1F32D, 0x1F335),
    (0x1F337, 0x1F37C),
    (0x1F37E, 0x1F393),
    (0x1F3A0, 0x1F3CA),
    (0x1F3CF, 0x1F3D3),
    (0x1F3E0, 0x1F3F0),
    (0x1F3F4, 0x1F3F4),
    (0x1F3F8, 0x1F43E),
    (0x1F440, 0x1F440),
    (0x1F442, 0x1F4FC),
    (0x1F4FF, 0x1F53D),
    (0x1F54B, 0x1F54E),
    (0x1F550, 0x1F567),
    (0x1F57A, 0x1F57A),
    (0x1F595, 0x1F596),
    (0x1F5A4, 0x1F5A4),
    (0x1F5FB, 0x1F64F),
    (0x1F680, 0x1F6C5),
    (0x1F6CC, 0x1F6CC),
    (0x1F6D0, 0x1F6D2),
    (0x1F6D5, 0x1F6D7),
    (0x1F6DC, 0x1F6DF),
    (0x1F6EB, 0x1F6EC),
    (0x1F6F4, 0x1F6FC),
    (0x1F7E0, 0x1F7EB),
    (0x1F7F0, 0x1F7F0),
    (0x1F90C, 0x1F93A),
    (0x1F93C, 0x1F945),
    (0x1F947, 0x1F9FF),
    (0x1FA70, 0x1FA7C),
    (0x1FA80, 0x1FA88),
    (0x1FA90, 0x1FABD),
    (0x1FABF, 0x1FAC5),
    (0x1FACE, 0x1FADB),
    (0x1FAE0, 0x1FAE8),
    (0x1FAF0, 0x1FAF8),
];

/// Extended_Pictographic code points, including the text-default ones that
/// only become emoji when followed by VS16
const EXTENDED_PICTOGRAPHIC: Ranges = &[
    (0x00A9, 0x00A9),
    (0x00AE, 0x00AE),
    (0x203C, 0x203C),
    (0x2049, 0x2049),
    (0x2122, 0x2122),
    (0x2139, 0x2139),
    (0x2194, 0x2199),
    (0x21A9, 0x21AA),
    (0x231A, 0x231B),
    (0x2328, 0x2328),
    (0x2388, 0x2388),
    (0x23CF, 0x23CF),
    (0x23E9, 0x23F3),
    (0x23F8, 0x23FA),
    (0x24C2, 0x24C2),
    (0x25AA, 0x25AB),
    (0x25B6, 0x25B6),
    (0x25C0, 0x25C0),
    (0x25FB, 0x25FE),
    (0x2600, 0x2605),
    (0x2607, 0x2612),
    (0x2614, 0x2685),
    (0x2690, 0x2705),
    (0x2708, 0x2712),
    (0x2714, 0x2714),
    (0x2716, 0x2716),
    (0x271D, 0x271D),
    (0x2721, 0x2721),
    (0x2728, 0x2728),
    (0x2733, 0x2734),
    (0x2744, 0x2744),
    (0x2747, 0x2747),
    (0x274C, 0x274C),
    (0x274E, 0x274E),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2763, 0x2767),
    (0x2795, 0x2797),
    (0x27A1, 0x27A1),
    (0x27B0, 0x27B0),
    (0x27BF, 0x27BF),
    (0x2934, 0x2935),
    (0x2B05, 0x2B07),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x3030, 0x3030),
    (0x303D, 0x303D),
    (0x3297, 0x3297),
    (0x3299, 0x3299),
    (0x1F000, 0x1F0FF),
    (0x1F10D, 0x1F10F),
    (0x1F12F, 0x1F12F),
    (0x1F16C, 0x1F171),
    (0x1F17E, 0x1F17F),
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A),
    (0x1F1AD, 0x1F1E5),
    (0x1F201, 0x1F20F),
    (0x1F21A, 0x1F21A),
    (0x1F22F, 0x1F22F),
    (0x1F232, 0x1F23A),
    (0x1F23C, 0x1F23F),
    (0x1F249, 0x1F3FA),
    (0x1F400, 0x1F53D),
    (0x1F546, 0x1F64F),
    (0x1F680, 0x1F6FF),
    (0x1F774, 0x1F77F),
    (0x1F7D5, 0x1F7FF),
    (0x1F80C, 0x1F80F),
    (0x1F848, 0x1F84F),
    (0x1F85A, 0x1F85F),
    (0x1F888, 0x1F88F),
    (0x1F8AE, 0x1F8FF),
    (0x1F90C, 0x1F93A),
    (0x1F93C, 0x1F945),
    (0x1F947, 0x1FAFF),
    (0x1FC00, 0x1FFFD),
];

/// Characters that attach to a preceding emoji without starting a new one:
/// VS15/VS16, ZWJ, combining keycap, skin tone modifiers, tag characters
const EMOJI_COMPONENTS: Ranges = &[
    (0x200D, 0x200D),
    (0x20E3, 0x20E3),
    (0xFE0E, 0xFE0F),
    (0x1F3FB, 0x1F3FF),
    (0xE0020, 0xE007F),
];

const VS16: char = '\u{FE0F}';
const ZWJ: char = '\u{200D}';

/// Upper bound on characters folded into one terminator cluster
const MAX_CLUSTER_CHARS: usize = 32;

#[inline]
fn in_table(table: Ranges, ch: char) -> bool {
    let cp = ch as u32;
    table
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// `.`, `!`, `?`, `…`, `⁇`, `⁈`, `⁉`
#[inline]
pub fn is_punctuation_terminator(ch: char) -> bool {
    if ch.is_ascii() {
        matches!(ch, '.' | '!' | '?')
    } else {
        in_table(PUNCTUATION, ch)
    }
}

/// Emoji_Presentation property
#[inline]
pub fn is_emoji_presentation(ch: char) -> bool {
    !ch.is_ascii() && in_table(EMOJI_PRESENTATION, ch)
}

/// Extended_Pictographic property
#[inline]
pub fn is_extended_pictographic(ch: char) -> bool {
    !ch.is_ascii() && in_table(EXTENDED_PICTOGRAPHIC, ch)
}

/// Modifier, selector, joiner or tag that continues an emoji sequence
#[inline]
pub fn is_emoji_component(ch: char) -> bool {
    !ch.is_ascii() && in_table(EMOJI_COMPONENTS, ch)
}

/// Whether a terminator starts with `ch`, given the character after it
#[inline]
pub fn starts_terminator(ch: char, next: Option<char>) -> bool {
    is_punctuation_terminator(ch)
        || is_emoji_presentation(ch)
        || (is_extended_pictographic(ch) && next == Some(VS16))
}

/// If a terminator starts at `pos`, the byte position just past the whole
/// cluster: repeated punctuation (`?!`, `...`) and complete emoji sequences
/// (modifiers, ZWJ joins, VS16) fold into one cluster.
pub fn cluster_end(text: Text<'_>, pos: usize) -> Option<usize> {
    let first = text.char_at(pos)?;
    let mut end = pos + first.len_utf8();
    if !starts_terminator(first, text.char_at(end)) {
        return None;
    }

    let mut prev = first;
    for _ in 1..MAX_CLUSTER_CHARS {
        let Some(ch) = text.char_at(end) else { break };
        let next = text.char_at(end + ch.len_utf8());
        let joins = is_emoji_component(ch)
            || starts_terminator(ch, next)
            || (prev == ZWJ && is_extended_pictographic(ch));
        if !joins {
            break;
        }
        end += ch.len_utf8();
        prev = ch;
    }
    Some(end)
}

/// Whether `s` ends with a terminator, looking through trailing emoji
/// components to the base character
pub fn ends_with_terminator(s: &str) -> bool {
    let mut saw_vs16 = false;
    for ch in s.chars().rev().take(MAX_CLUSTER_CHARS) {
        if ch == VS16 {
            saw_vs16 = true;
            continue;
        }
        if is_emoji_component(ch) {
            continue;
        }
        return is_punctuation_terminator(ch)
            || is_emoji_presentation(ch)
            || (saw_vs16 && is_extended_pictographic(ch));
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted(table: Ranges) {
        for &(lo, hi) in table {
            assert!(lo <= hi, "range {lo:X}-{hi:X} is inverted");
        }
        for pair in table.windows(2) {
            assert!(pair[0].1 < pair[1].0, "ranges overlap near {:X}", pair[1].0);
        }
    }

    #[test]
    fn test_tables_are_sorted_and_disjoint() {
        assert_sorted(PUNCTUATION);
        assert_sorted(EMOJI_PRESENTATION);
        assert_sorted(EXTENDED_PICTOGRAPHIC);
        assert_sorted(EMOJI_COMPONENTS);
    }

    #[test]
    fn test_punctuation_terminators() {
        for ch in ['.', '!', '?', '…', '⁇', '⁈', '⁉'] {
            assert!(is_punctuation_terminator(ch), "{ch} should terminate");
        }
        for ch in [',', ';', ':', 'a', '。'] {
            assert!(!is_punctuation_terminator(ch), "{ch} should not terminate");
        }
    }

    #[test]
    fn test_emoji_presentation_terminators() {
        assert!(starts_terminator('🎉', None));
        assert!(starts_terminator('😀', Some(' ')));
        assert!(starts_terminator('⌛', None));
        // Text-default pictographs need VS16
        assert!(!starts_terminator('❤', Some(' ')));
        assert!(starts_terminator('❤', Some('\u{FE0F}')));
        assert!(!starts_terminator('©', None));
    }

    #[test]
    fn test_cluster_folds_repeated_punctuation() {
        let text = Text::new("Really?!  next");
        assert_eq!(cluster_end(text, 6), Some(8));

        let text = Text::new("wait... ok");
        assert_eq!(cluster_end(text, 4), Some(7));
    }

    #[test]
    fn test_cluster_folds_emoji_sequences() {
        // Thumbs up with a skin tone modifier
        let text = Text::new("👍🏽 yes");
        assert_eq!(cluster_end(text, 0), Some("👍🏽".len()));

        // Family ZWJ sequence
        let family = "👨\u{200D}👩\u{200D}👧";
        let text = Text::new(family);
        assert_eq!(cluster_end(text, 0), Some(family.len()));

        // Heart with VS16
        let text = Text::new("❤\u{FE0F} end");
        assert_eq!(cluster_end(text, 0), Some("❤\u{FE0F}".len()));
    }

    #[test]
    fn test_no_cluster_on_plain_char() {
        let text = Text::new("abc");
        assert_eq!(cluster_end(text, 0), None);
    }

    #[test]
    fn test_ends_with_terminator() {
        assert!(ends_with_terminator("Hello."));
        assert!(ends_with_terminator("Party 🎉"));
        assert!(ends_with_terminator("Love ❤\u{FE0F}"));
        assert!(ends_with_terminator("Wave 👋🏽"));
        assert!(!ends_with_terminator("Love ❤"));
        assert!(!ends_with_terminator("no stop"));
        assert!(!ends_with_terminator(""));
    }
}
