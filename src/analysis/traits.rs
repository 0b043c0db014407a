//! Core traits for language analysis.

use std::fmt;

use crate::detect::DetectionResult;
use crate::lines::LineRecord;

/// How a language is analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// A real parse tree drives the detectors.
    Structural,
    /// Detection works on text patterns only.
    Lexical,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Structural => "structural",
            Family::Lexical => "lexical",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Language-specific analyzer trait.
///
/// Each supported language implements this trait; the runner selects the
/// implementation by language id.
///
/// # Thread Safety
///
/// Implementations are shared as `&'static` across threads. Note:
/// tree_sitter::Parser is not Sync, so implementations create parsers per
/// call.
pub trait LanguageAnalyzer: Send + Sync {
    /// Returns the language identifier (e.g., "python", "java").
    fn language_id(&self) -> &'static str;

    /// Human-readable name (e.g., "Python").
    fn display_name(&self) -> &'static str;

    fn family(&self) -> Family;

    /// Returns file extensions this analyzer handles (without dot).
    fn file_extensions(&self) -> &'static [&'static str];

    /// Run every detector for this language over one submission.
    ///
    /// Never fails: problems with the submission (or the grammar) narrow
    /// the set of findings instead.
    fn analyze(&self, source: &str, lines: &[LineRecord]) -> DetectionResult;

    /// Check if this analyzer handles the given file extension.
    fn handles_extension(&self, ext: &str) -> bool {
        self.file_extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }
}
