//! Language-specific analyzer implementations.

mod java;
mod python;

pub use java::JavaAnalyzer;
pub use python::{lower, PythonAnalyzer};

use super::LanguageAnalyzer;
use once_cell::sync::OnceCell;

/// Static storage for Java analyzer.
static JAVA_ANALYZER: OnceCell<JavaAnalyzer> = OnceCell::new();

/// Static storage for Python analyzer.
static PYTHON_ANALYZER: OnceCell<PythonAnalyzer> = OnceCell::new();

/// Register all available language analyzers.
///
/// Idempotent; lookups initialize on demand, so calling this only warms
/// the cells.
pub fn register_analyzers() {
    registered_languages();
}

/// Get the analyzer for a language id.
///
/// Ids are matched case-insensitively, ignoring surrounding whitespace.
pub fn get_analyzer(language_id: &str) -> Option<&'static dyn LanguageAnalyzer> {
    match language_id.trim().to_ascii_lowercase().as_str() {
        "java" => Some(JAVA_ANALYZER.get_or_init(JavaAnalyzer::new) as &'static dyn LanguageAnalyzer),
        "python" => {
            Some(PYTHON_ANALYZER.get_or_init(PythonAnalyzer::new) as &'static dyn LanguageAnalyzer)
        }
        _ => None,
    }
}

/// Get an analyzer for the given file extension (without dot).
pub fn get_analyzer_for_extension(ext: &str) -> Option<&'static dyn LanguageAnalyzer> {
    registered_languages()
        .into_iter()
        .find(|analyzer| analyzer.handles_extension(ext))
}

/// Every registered analyzer, sorted by language id.
///
/// `OnceCell::get_or_init` blocks racing initializers, so a caller never
/// sees a half-registered set.
pub fn registered_languages() -> Vec<&'static dyn LanguageAnalyzer> {
    vec![
        JAVA_ANALYZER.get_or_init(JavaAnalyzer::new) as &'static dyn LanguageAnalyzer,
        PYTHON_ANALYZER.get_or_init(PythonAnalyzer::new),
    ]
}

/// Supported language ids, comma separated (for messages).
pub fn supported_language_list() -> String {
    registered_languages()
        .iter()
        .map(|a| a.language_id())
        .collect::<Vec<_>>()
        .join(", ")
}
