//! Tree-sitter based parser implementation.
//!
//! This module provides a generic tree-sitter parser that can be configured
//! for different languages. Tree-sitter always recovers and returns a tree;
//! a tree containing ERROR or MISSING nodes, or an empty indented body, is
//! reported as a parse failure.

use tree_sitter::{Language, Node, Parser as TsParser};

use super::{ParseResult, ParsedSource, StructuralParser, SyntaxIssue};
use crate::error::{AnalysisError, Result};

/// Longest snippet of offending text quoted in a syntax message.
const MAX_SNIPPET_CHARS: usize = 24;

/// Configuration for a tree-sitter language parser.
#[derive(Clone)]
pub struct Config {
    /// The tree-sitter language
    pub language: Language,
    /// Language name (e.g., "python")
    pub language_name: &'static str,
    /// Turns a single source line into a standalone fragment.
    pub complete_fragment: fn(&str) -> String,
    /// Node kind of an indented body. The grammar accepts a header with an
    /// empty body without an ERROR node, so an empty one fails here.
    pub block_kind: Option<&'static str>,
}

/// Tree-sitter based parser.
pub struct TreeSitterParser {
    config: Config,
}

impl TreeSitterParser {
    /// Create a new tree-sitter parser with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Parse source code and return the tree.
    ///
    /// `tree_sitter::Parser` is not `Sync`, so one is created per call.
    fn parse(&self, source: &str) -> Result<tree_sitter::Tree> {
        let mut parser = TsParser::new();
        parser
            .set_language(&self.config.language)
            .map_err(|e| AnalysisError::Grammar(self.config.language_name, e))?;
        parser
            .parse(source, None)
            .ok_or(AnalysisError::NoTree(self.config.language_name))
    }

    fn check(&self, source: String) -> Result<ParseResult> {
        let tree = self.parse(&source)?;
        let root = tree.root_node();

        let issue = if root.has_error() {
            match first_error(root) {
                Some(node) => describe_error(node, &source),
                None => SyntaxIssue {
                    message: "invalid syntax".to_string(),
                    line: None,
                },
            }
        } else if let Some(block) = self.first_empty_block(root) {
            // Blame the header; an empty body may sit past its last line.
            let header = block.parent().unwrap_or(block);
            SyntaxIssue {
                message: "expected an indented block".to_string(),
                line: Some(header.start_position().row + 1),
            }
        } else {
            return Ok(ParseResult::Success(ParsedSource { tree, source }));
        };

        tracing::trace!(language = self.config.language_name, %issue, "parse failed");
        Ok(ParseResult::Failure(issue))
    }

    fn first_empty_block<'t>(&self, root: Node<'t>) -> Option<Node<'t>> {
        let kind = self.config.block_kind?;
        find_first(
            root,
            |_| true,
            |node| node.kind() == kind && !has_statement(node),
        )
    }
}

impl StructuralParser for TreeSitterParser {
    fn language_name(&self) -> &'static str {
        self.config.language_name
    }

    fn parse_unit(&self, source: &str) -> Result<ParseResult> {
        self.check(source.to_string())
    }

    fn parse_fragment(&self, line: &str) -> Result<ParseResult> {
        self.check((self.config.complete_fragment)(line))
    }
}

/// Pre-order search with a cursor, so nesting depth never grows the call
/// stack. Children are only visited when `descend` accepts their parent.
fn find_first<'t>(
    root: Node<'t>,
    descend: impl Fn(&Node<'t>) -> bool,
    matches: impl Fn(&Node<'t>) -> bool,
) -> Option<Node<'t>> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if matches(&node) {
            return Some(node);
        }
        if descend(&node) && cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

/// Find the first ERROR or MISSING node in document order.
fn first_error(root: Node) -> Option<Node> {
    find_first(
        root,
        |node| node.has_error(),
        |node| node.is_error() || node.is_missing(),
    )
}

/// Whether a body holds anything besides comments.
fn has_statement(block: &Node) -> bool {
    let mut cursor = block.walk();
    let found = block
        .named_children(&mut cursor)
        .any(|child| child.kind() != "comment");
    found
}

/// Build a human-readable message for an error node.
fn describe_error(node: Node, source: &str) -> SyntaxIssue {
    let line = Some(node.start_position().row + 1);

    if node.is_missing() {
        let message = if node.is_named() {
            format!("missing {}", node.kind())
        } else {
            format!("missing '{}'", node.kind())
        };
        return SyntaxIssue { message, line };
    }

    let text = node
        .utf8_text(source.as_bytes())
        .unwrap_or("")
        .trim();

    let message = if text.is_empty() || node.start_byte() >= source.trim_end().len() {
        "unexpected end of input".to_string()
    } else {
        let first_line = text.lines().next().unwrap_or(text);
        let snippet: String = first_line.chars().take(MAX_SNIPPET_CHARS).collect();
        format!("invalid syntax near '{}'", snippet)
    };

    SyntaxIssue { message, line }
}
