//! Block delimiter balance.

use crate::detect::{DetectionResult, Finding, Rule};

/// Compare total opening and closing delimiter counts over the whole text.
pub fn detect_unbalanced_braces(source: &str, open: char, close: char) -> DetectionResult {
    let mut result = DetectionResult::new();

    let opened = source.chars().filter(|&c| c == open).count();
    let closed = source.chars().filter(|&c| c == close).count();

    if opened != closed {
        result.add(
            Finding::error(
                Rule::MismatchedBraces,
                format!(
                    "mismatched braces: {} '{}' vs {} '{}'",
                    opened, open, closed, close
                ),
            )
            .with_hint(format!("ensure every '{}' has a matching '{}'", open, close)),
        );
    }

    result
}
