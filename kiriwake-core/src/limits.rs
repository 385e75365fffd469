//! Length and nesting caps for every category
//!
//! All caps count characters. They bound both the size of an emitted chunk
//! and the work spent on one recognition attempt.

use crate::error::{CoreError, Result};

/// Default caps
pub mod defaults {
    pub const HEADING_MARKERS: usize = 7;
    pub const HEADING_CONTENT: usize = 200;
    pub const HEADING_UNDERLINE: usize = 200;
    pub const HTML_HEADING_ATTRIBUTES: usize = 100;
    pub const CITATION_DIGITS: usize = 10;
    pub const LIST_ITEM: usize = 200;
    pub const NESTED_LIST_ITEMS: usize = 6;
    pub const LIST_INDENT: usize = 7;
    pub const BLOCKQUOTE_LINE: usize = 200;
    pub const BLOCKQUOTE_LINES: usize = 15;
    pub const BLOCKQUOTE_DEPTH: usize = 2;
    pub const CODE_BLOCK: usize = 1500;
    pub const CODE_LANGUAGE: usize = 20;
    pub const INDENTED_CODE_LINES: usize = 20;
    pub const TABLE_CELL: usize = 200;
    pub const TABLE_ROWS: usize = 20;
    pub const HTML_TABLE: usize = 2000;
    pub const MIN_HORIZONTAL_RULE: usize = 3;
    pub const SENTENCE: usize = 400;
    pub const QUOTED_TEXT: usize = 300;
    pub const PARENTHETICAL_CONTENT: usize = 200;
    pub const NESTED_PARENTHESES: usize = 5;
    pub const MATH_INLINE: usize = 100;
    pub const MATH_BLOCK: usize = 500;
    pub const PARAGRAPH: usize = 1000;
    pub const STANDALONE_LINE: usize = 800;
    pub const HTML_TAG_ATTRIBUTES: usize = 100;
    pub const HTML_TAG_CONTENT: usize = 1000;
    pub const LOOKAHEAD_RANGE: usize = 100;
}

/// Caps injected into the catalog at construction
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Limits {
    /// Marker characters counted in an ATX-style heading prefix
    pub heading_markers: usize,
    pub heading_content: usize,
    /// Setext underline run
    pub heading_underline: usize,
    pub html_heading_attributes: usize,
    pub citation_digits: usize,
    /// Content of one list line, also the line cap of indented code
    pub list_item: usize,
    /// Continuation lines after the first list line
    pub nested_list_items: usize,
    pub list_indent: usize,
    pub blockquote_line: usize,
    /// Lines in one block quote, first line included
    pub blockquote_lines: usize,
    /// Extra `>` markers after the first
    pub blockquote_depth: usize,
    pub code_block: usize,
    pub code_language: usize,
    pub indented_code_lines: usize,
    pub table_cell: usize,
    pub table_rows: usize,
    pub html_table: usize,
    pub min_horizontal_rule: usize,
    pub sentence: usize,
    pub quoted_text: usize,
    /// Flat run between two brackets
    pub parenthetical_content: usize,
    pub nested_parentheses: usize,
    pub math_inline: usize,
    pub math_block: usize,
    pub paragraph: usize,
    /// Standalone HTML lines, citations and the fallback phrase
    pub standalone_line: usize,
    pub html_tag_attributes: usize,
    pub html_tag_content: usize,
    /// Extra characters searched past a phrase cap for a terminator
    pub lookahead_range: usize,
}

impl Default for Limits {
    fn default() -> Self {
        use defaults::*;
        Self {
            heading_markers: HEADING_MARKERS,
            heading_content: HEADING_CONTENT,
            heading_underline: HEADING_UNDERLINE,
            html_heading_attributes: HTML_HEADING_ATTRIBUTES,
            citation_digits: CITATION_DIGITS,
            list_item: LIST_ITEM,
            nested_list_items: NESTED_LIST_ITEMS,
            list_indent: LIST_INDENT,
            blockquote_line: BLOCKQUOTE_LINE,
            blockquote_lines: BLOCKQUOTE_LINES,
            blockquote_depth: BLOCKQUOTE_DEPTH,
            code_block: CODE_BLOCK,
            code_language: CODE_LANGUAGE,
            indented_code_lines: INDENTED_CODE_LINES,
            table_cell: TABLE_CELL,
            table_rows: TABLE_ROWS,
            html_table: HTML_TABLE,
            min_horizontal_rule: MIN_HORIZONTAL_RULE,
            sentence: SENTENCE,
            quoted_text: QUOTED_TEXT,
            parenthetical_content: PARENTHETICAL_CONTENT,
            nested_parentheses: NESTED_PARENTHESES,
            math_inline: MATH_INLINE,
            math_block: MATH_BLOCK,
            paragraph: PARAGRAPH,
            standalone_line: STANDALONE_LINE,
            html_tag_attributes: HTML_TAG_ATTRIBUTES,
            html_tag_content: HTML_TAG_CONTENT,
            lookahead_range: LOOKAHEAD_RANGE,
        }
    }
}

impl Limits {
    /// Reject caps that make a category unmatchable or break forward progress
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("heading_content", self.heading_content),
            ("list_item", self.list_item),
            ("blockquote_lines", self.blockquote_lines),
            ("code_block", self.code_block),
            ("table_rows", self.table_rows),
            ("sentence", self.sentence),
            ("quoted_text", self.quoted_text),
            ("paragraph", self.paragraph),
            ("standalone_line", self.standalone_line),
            ("html_tag_content", self.html_tag_content),
        ];
        for (field, value) in required {
            if value == 0 {
                return Err(CoreError::InvalidLimit {
                    field,
                    reason: "must be greater than 0".into(),
                });
            }
        }

        if self.min_horizontal_rule < 2 {
            return Err(CoreError::InvalidLimit {
                field: "min_horizontal_rule",
                reason: format!("must be at least 2, got {}", self.min_horizontal_rule),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Limits::default().validate().is_ok());
    }

    #[test]
    fn test_zero_fallback_cap_rejected() {
        let limits = Limits {
            standalone_line: 0,
            ..Limits::default()
        };
        let err = limits.validate().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidLimit {
                field: "standalone_line",
                ..
            }
        ));
    }

    #[test]
    fn test_short_horizontal_rule_rejected() {
        let limits = Limits {
            min_horizontal_rule: 1,
            ..Limits::default()
        };
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_zero_optional_caps_allowed() {
        let limits = Limits {
            nested_list_items: 0,
            blockquote_depth: 0,
            lookahead_range: 0,
            ..Limits::default()
        };
        assert!(limits.validate().is_ok());
    }
}
