//! Syntax error reporting for structurally parsed languages.

use crate::lines::{self, LineRecord};
use crate::parser::{ParseResult, StructuralParser};

use super::{DetectionResult, Finding, Rule};

/// Parse every non-blank line on its own and report the ones that fail.
///
/// Stops early (keeping what it found) if the parser itself cannot run.
pub fn detect_line_syntax_errors(
    parser: &dyn StructuralParser,
    lines: &[LineRecord],
) -> DetectionResult {
    let mut result = DetectionResult::new();

    for line in lines::non_blank(lines) {
        match parser.parse_fragment(&line.raw) {
            Ok(ParseResult::Success(_)) => {}
            Ok(ParseResult::Failure(issue)) => {
                result.add(
                    Finding::error(
                        Rule::SyntaxError,
                        format!("SyntaxError at line {}: {}", line.index, issue.message),
                    )
                    .with_hint(line.raw.clone())
                    .at_line(line.index),
                );
            }
            Err(e) => {
                tracing::warn!(language = parser.language_name(), error = %e, "line parsing unavailable");
                break;
            }
        }
    }

    result
}

/// Confirmation emitted when the whole submission parses.
pub fn syntax_valid_finding(display_name: &str) -> Finding {
    Finding::suggestion(
        Rule::SyntaxValid,
        format!("{} syntax is valid for blocks that parsed successfully", display_name),
    )
}
