//! The fourteen structural categories, in priority order

use crate::limits::Limits;
use crate::rules;
use crate::text::Text;
use std::fmt;

/// Worst-case characters in a line break (`\r\n`)
const NL: usize = 2;

/// A structural recognition rule. Declaration order is priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    Heading,
    Citation,
    ListItem,
    BlockQuote,
    CodeBlock,
    Table,
    HorizontalRule,
    StandaloneLine,
    Sentence,
    QuotedOrBracketed,
    Paragraph,
    HtmlElement,
    MathExpression,
    Fallback,
}

impl Category {
    /// Every category, highest priority first
    pub const ALL: [Category; 14] = [
        Category::Heading,
        Category::Citation,
        Category::ListItem,
        Category::BlockQuote,
        Category::CodeBlock,
        Category::Table,
        Category::HorizontalRule,
        Category::StandaloneLine,
        Category::Sentence,
        Category::QuotedOrBracketed,
        Category::Paragraph,
        Category::HtmlElement,
        Category::MathExpression,
        Category::Fallback,
    ];

    /// Position in the catalog; lower is tried first
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Stable snake_case identifier
    pub fn name(self) -> &'static str {
        match self {
            Category::Heading => "heading",
            Category::Citation => "citation",
            Category::ListItem => "list_item",
            Category::BlockQuote => "block_quote",
            Category::CodeBlock => "code_block",
            Category::Table => "table",
            Category::HorizontalRule => "horizontal_rule",
            Category::StandaloneLine => "standalone_line",
            Category::Sentence => "sentence",
            Category::QuotedOrBracketed => "quoted_or_bracketed",
            Category::Paragraph => "paragraph",
            Category::HtmlElement => "html_element",
            Category::MathExpression => "math_expression",
            Category::Fallback => "fallback",
        }
    }

    /// One-line summary of what the category matches
    pub fn description(self) -> &'static str {
        match self {
            Category::Heading => "marker, Setext or <h1>-<h6> heading line",
            Category::Citation => "[n] reference followed by its text",
            Category::ListItem => "bullet, numbered or checkbox item with indented continuation",
            Category::BlockQuote => "> quoted lines, nested up to the depth cap",
            Category::CodeBlock => "fenced, indented or <pre> code",
            Category::Table => "pipe-delimited rows or a <table> element",
            Category::HorizontalRule => "line of ---, *** or ___, or <hr>",
            Category::StandaloneLine => "tagged line ending in a sentence terminator",
            Category::Sentence => "text up to a terminator or end of line",
            Category::QuotedOrBracketed => "quoted, parenthesized, bracketed or inline-delimited span",
            Category::Paragraph => "blank-line delimited block with terminator lookahead",
            Category::HtmlElement => "opening tag through its matching closing tag",
            Category::MathExpression => "$$ block $$ or $ inline $ math",
            Category::Fallback => "any remaining line content",
        }
    }

    /// Try this category's rule at `pos`; returns the end of a non-empty match
    pub fn recognize(self, text: Text<'_>, pos: usize, limits: &Limits) -> Option<usize> {
        let end = match self {
            Category::Heading => rules::heading::recognize(text, pos, limits),
            Category::Citation => rules::citation::recognize(text, pos, limits),
            Category::ListItem => rules::list::recognize(text, pos, limits),
            Category::BlockQuote => rules::quote::recognize(text, pos, limits),
            Category::CodeBlock => rules::code::recognize(text, pos, limits),
            Category::Table => rules::table::recognize(text, pos, limits),
            Category::HorizontalRule => rules::rule::recognize(text, pos, limits),
            Category::StandaloneLine => rules::standalone::recognize(text, pos, limits),
            Category::Sentence => rules::sentence::recognize(text, pos, limits),
            Category::QuotedOrBracketed => rules::enclosed::recognize(text, pos, limits),
            Category::Paragraph => rules::paragraph::recognize(text, pos, limits),
            Category::HtmlElement => rules::html::recognize(text, pos, limits),
            Category::MathExpression => rules::math::recognize(text, pos, limits),
            Category::Fallback => rules::fallback::recognize(text, pos, limits),
        }?;
        (end > pos).then_some(end)
    }

    /// Upper bound on the characters of any match of this category
    pub fn max_chars(self, l: &Limits) -> usize {
        match self {
            Category::Heading => {
                let marked = l.heading_markers + l.heading_content + 5 + NL;
                let setext = 1 + l.heading_content + NL + l.heading_underline + NL;
                let html = 3 + l.html_heading_attributes + 1 + l.heading_content + 5 + NL;
                marked.max(setext).max(html)
            }
            Category::Citation => 2 + l.citation_digits + l.standalone_line,
            Category::ListItem => {
                let first = NL + 3 + 4 + l.list_indent + l.list_item;
                first + l.nested_list_items * (NL + l.list_indent + l.list_item)
            }
            Category::BlockQuote => {
                let lines = l.blockquote_lines.max(1);
                1 + 2 * l.blockquote_depth
                    + l.blockquote_line
                    + (lines - 1) * (NL + l.blockquote_line)
                    + NL
            }
            Category::CodeBlock => {
                let fenced = NL + 3 + l.code_language + NL + l.code_block + 3 + NL;
                let lines = l.indented_code_lines.max(1);
                let indented = NL + lines * (4 + l.list_item) + (lines - 1) * NL + NL;
                let pre = "<pre><code>".len() + l.code_block + "</pre>".len();
                fenced.max(indented).max(pre)
            }
            Category::Table => {
                let pipes = NL + (l.table_rows + 1) * (l.table_cell + 2) + l.table_rows * NL;
                let html = "<table".len() + l.html_tag_attributes + 1 + l.html_table + "</table>".len();
                pipes.max(html)
            }
            Category::HorizontalRule => (l.standalone_line + NL).max(3 + l.html_tag_attributes + 2),
            Category::StandaloneLine => 2 + l.html_tag_attributes + 1 + l.standalone_line + NL,
            Category::Sentence => l.sentence,
            Category::QuotedOrBracketed => (l.quoted_text + 6).max(l.math_inline + 2),
            Category::Paragraph => 2 * NL + l.paragraph + l.lookahead_range,
            Category::HtmlElement => {
                let tag = 2 + l.html_tag_attributes + 1;
                tag + l.html_tag_content + 3 + 1 + l.html_tag_attributes
            }
            Category::MathExpression => (4 + l.math_block).max(2 + l.math_inline),
            Category::Fallback => l.standalone_line + l.lookahead_range,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_rank_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.rank(), i);
        }
        assert_eq!(Category::ALL.last(), Some(&Category::Fallback));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Category::ALL.len());
    }

    #[test]
    fn test_heading_recognized() {
        let limits = Limits::default();
        assert_eq!(
            Category::Heading.recognize(Text::new("# Title\n"), 0, &limits),
            Some(8)
        );
    }

    #[test]
    fn test_max_chars_covers_caps() {
        let limits = Limits::default();
        assert_eq!(Category::Sentence.max_chars(&limits), 400);
        assert!(Category::CodeBlock.max_chars(&limits) >= 1500);
        assert!(Category::Table.max_chars(&limits) >= 2000);
        assert_eq!(Category::Fallback.max_chars(&limits), 900);
    }
}
