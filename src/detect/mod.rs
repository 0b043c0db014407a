//! Detection module: the checks that turn a submission into findings.
//!
//! Detectors come in two capabilities, selected per language:
//! - `structural`: consume a lowered parse tree (Python)
//! - `heuristic`: pattern-match raw text (Java)

pub mod heuristic;
mod runner;
mod shapes;
pub mod structural;
mod syntax;
mod types;

pub use runner::{AnalysisOptions, Runner};
pub use shapes::{out_of_range_finding, presence_findings, PracticeExamples, Presence};
pub use syntax::{detect_line_syntax_errors, syntax_valid_finding};
pub use types::{DetectionResult, Finding, Rule, Severity};
