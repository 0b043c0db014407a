//! LogicMedic - a coding mentor for beginner Python and Java.
//!
//! LogicMedic reviews a short submission and returns mentor-style feedback:
//! errors (syntax problems, out-of-range indexing, undefined variables,
//! missing semicolons, unbalanced braces) and suggestions (whether the code
//! uses functions, loops, conditionals and debug output, with examples).
//!
//! # Architecture
//!
//! Languages belong to one of two analysis families:
//!
//! - `analysis`: language analyzers; Python is lowered from a tree-sitter
//!   parse tree into a closed set of constructs, Java is scanned as text
//! - `parser`: tree-sitter adapter (whole-unit and per-line parsing)
//! - `detect`: structural and heuristic detectors plus the dispatcher
//! - `report`: report assembly and output formatting (text, pretty, JSON)
//! - `config`: optional YAML configuration
//! - `prompt`: mentor prompt for an external generative assistant
//!
//! # Example
//!
//! ```
//! let report = logicmedic::analyze("x = [10, 20, 30]\nprint(x[5])\n", "python");
//! assert_eq!(report.errors.len(), 1);
//! assert_eq!(report.errors[0].fix_hint.as_deref(), Some("x[2]"));
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod lines;
pub mod parser;
pub mod prompt;
pub mod report;

pub use analysis::{register_analyzers, Family, LanguageAnalyzer};
pub use config::Config;
pub use detect::{AnalysisOptions, DetectionResult, Finding, Rule, Runner, Severity};
pub use error::AnalysisError;
pub use report::Report;

/// Analyze one submission with default options.
///
/// Total: every input, including an unknown language id, yields a report.
pub fn analyze(source: &str, language_id: &str) -> Report {
    Runner::new().run(source, language_id)
}

/// Initialize all subsystems.
///
/// Optional; analyzers are also registered lazily on first use.
pub fn init() {
    register_analyzers();
}
