//! Presence of recommended constructs, by pattern matching.

use regex::Regex;

use crate::detect::shapes::{presence_findings, PracticeExamples, Presence};
use crate::detect::DetectionResult;

/// Patterns recognizing the canonical shapes of each construct.
pub struct PresencePatterns {
    /// Must capture the callable name in group 1.
    pub callable: &'static Regex,
    pub loop_header: &'static Regex,
    pub conditional: &'static Regex,
    pub print_call: &'static Regex,
}

/// Which recommended constructs the text contains.
pub fn collect_presence(source: &str, patterns: &PresencePatterns) -> Presence {
    Presence {
        functions: patterns
            .callable
            .captures_iter(source)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
            .collect(),
        loops: patterns.loop_header.is_match(source),
        conditionals: patterns.conditional.is_match(source),
        prints: patterns.print_call.is_match(source),
    }
}

/// Presence suggestions for a lexically scanned submission.
pub fn detect_practices(
    source: &str,
    patterns: &PresencePatterns,
    examples: &PracticeExamples,
) -> DetectionResult {
    presence_findings(&collect_presence(source, patterns), examples)
}
