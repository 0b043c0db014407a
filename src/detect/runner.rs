//! Detection runner: picks the analyzer for a language and assembles the report.

use std::collections::HashSet;

use crate::analysis::{get_analyzer, supported_language_list};
use crate::error::AnalysisError;
use crate::lines;
use crate::report::Report;

use super::{DetectionResult, Finding, Rule};

/// Per-run knobs applied after detection.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Findings from these rules are dropped from the report.
    pub skip_rules: HashSet<Rule>,
}

/// Executes the detectors for one submission at a time.
///
/// Holds no per-submission state, so one runner can serve many threads.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    options: AnalysisOptions,
}

impl Runner {
    /// Create a new detection runner.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AnalysisOptions) -> Self {
        Self { options }
    }

    /// Analyze `source` as `language_id`.
    ///
    /// Never fails: an unknown language produces a report with a single
    /// `UnsupportedLanguage` error.
    pub fn run(&self, source: &str, language_id: &str) -> Report {
        let normalized = language_id.trim().to_ascii_lowercase();

        let Some(analyzer) = get_analyzer(&normalized) else {
            let err = AnalysisError::UnsupportedLanguage {
                requested: language_id.trim().to_string(),
                supported: supported_language_list(),
            };
            tracing::debug!(language = %language_id, "unsupported language");
            let mut result = DetectionResult::new();
            result.add(
                Finding::error(Rule::UnsupportedLanguage, err.to_string())
                    .with_hint(format!("choose one of: {}", supported_language_list())),
            );
            return Report::assemble(normalized, result);
        };

        tracing::debug!(
            language = analyzer.language_id(),
            family = %analyzer.family(),
            bytes = source.len(),
            "dispatching submission"
        );

        let scanned = lines::scan(source);
        let mut result = analyzer.analyze(source, &scanned);

        if !self.options.skip_rules.is_empty() {
            let before = result.len();
            result
                .findings
                .retain(|f| !self.options.skip_rules.contains(&f.rule));
            tracing::debug!(dropped = before - result.len(), "applied skip_rules");
        }

        Report::assemble(analyzer.language_id(), result)
    }
}
