//! Structural parsing of submissions.
//!
//! This module provides:
//! - `StructuralParser` trait: whole-unit and per-fragment parsing
//! - `ParseResult`: success with a tree, or a located syntax issue
//! - Tree-sitter implementation configured per language

use std::fmt;

pub mod languages;
pub mod treesitter;

/// A syntax problem reported by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxIssue {
    /// Parser message (e.g. "missing ')'").
    pub message: String,
    /// Line number (1-indexed) relative to the parsed text.
    pub line: Option<usize>,
}

impl fmt::Display for SyntaxIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} (line {})", self.message, line),
            None => write!(f, "{}", self.message),
        }
    }
}

/// A successfully parsed unit, kept together with its source text.
pub struct ParsedSource {
    pub tree: tree_sitter::Tree,
    pub source: String,
}

impl ParsedSource {
    /// Get text for a tree-sitter node.
    pub fn node_text(&self, node: tree_sitter::Node) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }
}

/// Outcome of one parse attempt.
pub enum ParseResult {
    Success(ParsedSource),
    Failure(SyntaxIssue),
}

impl ParseResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success(_))
    }

    /// The syntax issue, if parsing failed.
    pub fn issue(&self) -> Option<&SyntaxIssue> {
        match self {
            ParseResult::Success(_) => None,
            ParseResult::Failure(issue) => Some(issue),
        }
    }
}

/// Parser for a language with a structural grammar.
pub trait StructuralParser: Send + Sync {
    /// Return the language this parser handles (e.g., "python").
    fn language_name(&self) -> &'static str;

    /// Parse the entire submission as one unit.
    fn parse_unit(&self, source: &str) -> crate::error::Result<ParseResult>;

    /// Parse a single line in isolation.
    ///
    /// Implementations may complete the line into a standalone fragment
    /// (e.g. give a block header a body) before parsing it.
    fn parse_fragment(&self, line: &str) -> crate::error::Result<ParseResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display() {
        let issue = SyntaxIssue {
            message: "missing ')'".to_string(),
            line: Some(3),
        };
        assert_eq!(issue.to_string(), "missing ')' (line 3)");

        let issue = SyntaxIssue {
            message: "unexpected end of input".to_string(),
            line: None,
        };
        assert_eq!(issue.to_string(), "unexpected end of input");
    }
}
