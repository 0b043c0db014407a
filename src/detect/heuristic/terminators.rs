//! Missing statement terminator detection.

use regex::Regex;

use crate::detect::{DetectionResult, Finding, Rule};
use crate::lines::{self, LineRecord};

/// What counts as a complete line for a terminator-based language.
pub struct TerminatorRules {
    /// Statement terminator, e.g. `;`.
    pub terminator: char,
    pub block_open: char,
    pub block_close: char,
    /// Prefixes marking comment lines.
    pub comment_prefixes: &'static [&'static str],
    /// Lines starting with one of these keywords are exempt.
    pub exempt_keywords: &'static Regex,
    /// Lines starting with one of these prefixes are exempt (annotations etc).
    pub exempt_prefixes: &'static [&'static str],
}

impl TerminatorRules {
    /// Whether a trimmed, non-empty line needs a terminator it lacks.
    fn is_unterminated(&self, code: &str) -> bool {
        if code.ends_with(self.terminator)
            || code.ends_with(self.block_open)
            || code.ends_with(self.block_close)
        {
            return false;
        }
        if self.comment_prefixes.iter().any(|p| code.starts_with(p)) {
            return false;
        }
        if self.exempt_prefixes.iter().any(|p| code.starts_with(p)) {
            return false;
        }
        !self.exempt_keywords.is_match(code)
    }
}

/// Report non-blank lines that do not end a statement or a block.
pub fn detect_missing_terminators(lines: &[LineRecord], rules: &TerminatorRules) -> DetectionResult {
    let mut result = DetectionResult::new();

    for line in lines::non_blank(lines) {
        let code = line.trimmed();
        if !rules.is_unterminated(code) {
            continue;
        }
        result.add(
            Finding::error(
                Rule::MissingTerminator,
                format!("missing terminator at line {}", line.index),
            )
            .with_hint(format!("{}{}", code, rules.terminator))
            .at_line(line.index),
        );
    }

    result
}
