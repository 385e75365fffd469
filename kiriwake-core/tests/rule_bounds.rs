//! Every rule stays within its cap and on character boundaries, for any input

use kiriwake_core::{Catalog, Category, Limits, Text};
use proptest::prelude::*;

/// Text biased toward the characters the rules care about
fn structured_text() -> impl Strategy<Value = String> {
    let atoms = prop::sample::select(vec![
        "#", "-", "*", "+", "=", ">", "|", "`", "~", "$", "(", ")", "[", "]", "\"", "'", "<",
        "/", ">", "p", "div", "pre", "table", "hr", " ", "  ", "\t", "\n", "\r\n", ".", "!", "?",
        "…", "🎉", "❤\u{FE0F}", "👍🏽", "a", "word", "12", "1.", "日本語", "_",
    ]);
    prop::collection::vec(atoms, 0..120).prop_map(|parts| parts.concat())
}

fn char_positions(s: &str) -> Vec<usize> {
    s.char_indices().map(|(i, _)| i).chain([s.len()]).collect()
}

proptest! {
    #[test]
    fn prop_matches_are_bounded(src in structured_text()) {
        let limits = Limits::default();
        let text = Text::new(&src);
        for pos in char_positions(&src) {
            for &category in &Category::ALL {
                if let Some(end) = category.recognize(text, pos, &limits) {
                    prop_assert!(end > pos);
                    prop_assert!(end <= src.len());
                    prop_assert!(src.is_char_boundary(end));
                    let chars = src[pos..end].chars().count();
                    prop_assert!(
                        chars <= category.max_chars(&limits),
                        "{category} matched {chars} chars at {pos}"
                    );
                }
            }
        }
    }

    #[test]
    fn prop_bounded_with_tight_limits(src in structured_text()) {
        let limits = Limits {
            heading_content: 5,
            list_item: 4,
            nested_list_items: 1,
            blockquote_line: 3,
            blockquote_lines: 2,
            code_block: 10,
            table_cell: 3,
            table_rows: 2,
            sentence: 6,
            quoted_text: 5,
            parenthetical_content: 2,
            nested_parentheses: 1,
            paragraph: 8,
            standalone_line: 7,
            html_tag_content: 6,
            lookahead_range: 3,
            ..Limits::default()
        };
        let text = Text::new(&src);
        for pos in char_positions(&src) {
            for &category in &Category::ALL {
                if let Some(end) = category.recognize(text, pos, &limits) {
                    let chars = src[pos..end].chars().count();
                    prop_assert!(chars <= category.max_chars(&limits));
                }
            }
        }
    }

    #[test]
    fn prop_fallback_matches_any_line_content(src in "[^\r\n]{1,50}") {
        let catalog = Catalog::default();
        prop_assert!(catalog.match_at(Text::new(&src), 0).is_some());
    }
}

#[test]
fn test_category_examples() {
    let catalog = Catalog::default();
    let cases = [
        ("# Title\n", Category::Heading),
        ("[1] Smith, 2020.", Category::Citation),
        ("- item one\n", Category::ListItem),
        ("> quoted\n", Category::BlockQuote),
        ("```\ncode\n```\n", Category::CodeBlock),
        ("| a | b |\n", Category::Table),
        ("***\n", Category::HorizontalRule),
        ("<p>Tagged line.</p>\n", Category::StandaloneLine),
        ("Plain sentence. More", Category::Sentence),
    ];
    for (src, expected) in cases {
        let m = catalog.match_at(Text::new(src), 0).unwrap();
        assert_eq!(m.category, expected, "input {src:?}");
    }
}

#[test]
fn test_long_unbroken_lines_reach_lower_categories() {
    let catalog = Catalog::default();

    let quoted = format!("({})", "x".repeat(150));
    let padded = format!("{quoted}{}", "y".repeat(400));
    let m = catalog.match_at(Text::new(&padded), 0).unwrap();
    assert_eq!(m.category, Category::QuotedOrBracketed);
    assert_eq!(m.as_str(&padded), quoted);

    let long = "z".repeat(1200);
    let m = catalog.match_at(Text::new(&long), 0).unwrap();
    assert_eq!(m.category, Category::Fallback);
    assert_eq!(m.len(), 800);
}
