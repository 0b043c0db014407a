//! Core types for detection results.

use serde::{Deserialize, Serialize};

/// Severity class of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Suggestion,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Suggestion => write!(f, "suggestion"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "suggestion" => Ok(Severity::Suggestion),
            _ => Err(format!("unknown severity: {}", s)),
        }
    }
}

/// Identifies the detector that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    #[serde(rename = "unsupported_language")]
    UnsupportedLanguage,
    #[serde(rename = "syntax_error")]
    SyntaxError,
    #[serde(rename = "syntax_valid")]
    SyntaxValid,
    #[serde(rename = "out_of_range")]
    OutOfRange,
    #[serde(rename = "undefined_variable")]
    UndefinedVariable,
    #[serde(rename = "missing_terminator")]
    MissingTerminator,
    #[serde(rename = "mismatched_braces")]
    MismatchedBraces,
    #[serde(rename = "functions")]
    Functions,
    #[serde(rename = "loops")]
    Loops,
    #[serde(rename = "conditionals")]
    Conditionals,
    #[serde(rename = "print_output")]
    PrintOutput,
}

impl Rule {
    /// Every rule, in the order detectors run.
    pub const ALL: &'static [Rule] = &[
        Rule::UnsupportedLanguage,
        Rule::SyntaxError,
        Rule::SyntaxValid,
        Rule::OutOfRange,
        Rule::UndefinedVariable,
        Rule::MissingTerminator,
        Rule::MismatchedBraces,
        Rule::Functions,
        Rule::Loops,
        Rule::Conditionals,
        Rule::PrintOutput,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::UnsupportedLanguage => "unsupported_language",
            Rule::SyntaxError => "syntax_error",
            Rule::SyntaxValid => "syntax_valid",
            Rule::OutOfRange => "out_of_range",
            Rule::UndefinedVariable => "undefined_variable",
            Rule::MissingTerminator => "missing_terminator",
            Rule::MismatchedBraces => "mismatched_braces",
            Rule::Functions => "functions",
            Rule::Loops => "loops",
            Rule::Conditionals => "conditionals",
            Rule::PrintOutput => "print_output",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Rule::ALL.iter().copied().find(|r| r.as_str() == s)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One reported observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub rule: Rule,
    pub severity: Severity,
    pub message: String,
    /// Concrete correction or example snippet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix_hint: Option<String>,
    /// 1-based source line, when the finding is tied to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Finding {
    pub fn error(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: Severity::Error,
            message: message.into(),
            fix_hint: None,
            line: None,
        }
    }

    pub fn suggestion(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: Severity::Suggestion,
            message: message.into(),
            fix_hint: None,
            line: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.fix_hint = Some(hint.into());
        self
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// Findings collected by one or more detectors, in emission order.
#[derive(Debug, Clone, Default)]
pub struct DetectionResult {
    pub findings: Vec<Finding>,
}

impl DetectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append another result, keeping emission order.
    pub fn merge(&mut self, other: DetectionResult) {
        self.findings.extend(other.findings);
    }

    pub fn add(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_round_trip_names() {
        for rule in Rule::ALL {
            assert_eq!(Rule::parse(rule.as_str()), Some(*rule));
        }
        assert_eq!(Rule::parse("god_class"), None);
    }

    #[test]
    fn test_finding_builders() {
        let f = Finding::error(Rule::OutOfRange, "boom")
            .with_hint("x[2]")
            .at_line(4);
        assert_eq!(f.severity, Severity::Error);
        assert_eq!(f.fix_hint.as_deref(), Some("x[2]"));
        assert_eq!(f.line, Some(4));
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut a = DetectionResult::new();
        a.add(Finding::suggestion(Rule::Loops, "first"));
        let mut b = DetectionResult::new();
        b.add(Finding::error(Rule::SyntaxError, "second"));
        a.merge(b);

        assert_eq!(a.len(), 2);
        assert_eq!(a.findings[0].message, "first");
        assert!(a.has_errors());
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("Error".parse::<Severity>(), Ok(Severity::Error));
        assert!("warning".parse::<Severity>().is_err());
    }
}
