//! Bracket-aware outdent
//!
//! When a `}` is typed on a line that holds nothing but indentation, the line is re-indented
//! to the indentation of the line holding the matching `{`. The check runs before the
//! keystroke is applied ([check_outdent]); the edit is computed after ([auto_outdent]).
//!
//! The operation is idempotent: on a line already indented like its opening brace's line
//! there is nothing to do and no edit is produced. No edit is produced either when the brace
//! has no partner or when the partner sits on the same row.

use super::leading_whitespace;
use crate::focus::document::{Document, Position, TextEdit};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+$").unwrap());
static CLOSING_BRACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\}").unwrap());
static CLOSING_BRACE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([ \t]*)\}").unwrap());

/// Whether typing `input` on `line` should trigger an outdent.
pub fn check_outdent(line: &str, input: &str) -> bool {
    WHITESPACE_LINE.is_match(line) && CLOSING_BRACE.is_match(input)
}

/// The edit that re-indents the closing-brace line at `row`, if one is needed.
pub fn auto_outdent(document: &Document, row: usize) -> Option<TextEdit> {
    let line = document.line(row)?;
    let captures = CLOSING_BRACE_LINE.captures(line)?;
    let current = captures.get(1).map_or("", |m| m.as_str());
    let column = current.chars().count();

    let open = document.find_matching_bracket(Position::new(row, column))?;
    if open.row == row {
        return None;
    }
    let indent = leading_whitespace(document.line(open.row)?);
    if indent == current {
        tracing::trace!(row, "closing brace already aligned");
        return None;
    }

    tracing::trace!(row, open_row = open.row, "outdenting closing brace");
    Some(TextEdit {
        row,
        start_column: 0,
        end_column: column,
        new_text: indent.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_outdent() {
        assert!(check_outdent("    ", "}"));
        assert!(check_outdent("\t", "}"));
        assert!(!check_outdent("", "}"));
        assert!(!check_outdent("  x", "}"));
        assert!(!check_outdent("    ", ")"));
        assert!(!check_outdent("    ", "a"));
    }

    #[test]
    fn test_outdents_to_opening_line() {
        let document = Document::new("let table = {\n    key: 1\n    }");
        let edit = auto_outdent(&document, 2).unwrap();
        assert_eq!(
            edit,
            TextEdit {
                row: 2,
                start_column: 0,
                end_column: 4,
                new_text: String::new(),
            }
        );
    }

    #[test]
    fn test_indents_to_nested_opening_line() {
        let document = Document::new("{\n    let t = {\n        a: 1\n}");
        let edit = auto_outdent(&document, 3).unwrap();
        assert_eq!(edit.new_text, "    ");
        assert_eq!(edit.end_column, 0);
    }

    #[test]
    fn test_aligned_brace_is_left_alone() {
        let document = Document::new("  f = {\n    x\n  }");
        assert_eq!(auto_outdent(&document, 2), None);
    }

    #[test]
    fn test_same_row_match_is_left_alone() {
        let document = Document::new("    {}");
        assert_eq!(auto_outdent(&document, 0), None);
        let document = Document::new("{ a }\n    }");
        assert_eq!(auto_outdent(&document, 1), None);
    }

    #[test]
    fn test_unmatched_brace_is_left_alone() {
        let document = Document::new("let x = 1\n    }");
        assert_eq!(auto_outdent(&document, 1), None);
    }

    #[test]
    fn test_brace_inside_string_is_left_alone() {
        let document = Document::new("let s = \"{\n    }");
        assert_eq!(auto_outdent(&document, 1), None);
    }

    #[test]
    fn test_other_lines_are_left_alone() {
        let document = Document::new("{\n    x }");
        assert_eq!(auto_outdent(&document, 1), None);
        assert_eq!(auto_outdent(&document, 9), None);
    }
}
