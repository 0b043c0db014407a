//! Review reports and their output formats.
//!
//! Supports three output formats:
//! - Text: the plain sectioned report (Errors, Suggestions, summary line)
//! - Pretty: the same sections, colored for a terminal
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::detect::{DetectionResult, Finding, Severity};

/// Closing line of every report.
pub const SUMMARY: &str = "Overall: Review errors and try corrections to improve your code!";

/// The outcome of analyzing one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Language id the submission was analyzed as (as requested, normalized).
    pub language: String,
    /// Error findings, in emission order.
    pub errors: Vec<Finding>,
    /// Suggestion findings, in emission order.
    pub suggestions: Vec<Finding>,
    pub summary: String,
}

impl Report {
    /// Split findings by severity, keeping their relative order.
    pub fn assemble(language: impl Into<String>, result: DetectionResult) -> Self {
        let (errors, suggestions): (Vec<Finding>, Vec<Finding>) = result
            .findings
            .into_iter()
            .partition(|f| f.severity == Severity::Error);

        Self {
            language: language.into(),
            errors,
            suggestions,
            summary: SUMMARY.to_string(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Render the plain text form.
    pub fn render_text(&self) -> String {
        let mut out = Vec::new();

        out.push("Errors:".to_string());
        for f in &self.errors {
            push_finding(&mut out, f);
        }

        out.push(String::new());
        out.push("Suggestions:".to_string());
        for f in &self.suggestions {
            push_finding(&mut out, f);
        }

        out.push(self.summary.clone());
        out.join("\n")
    }
}

fn push_finding(out: &mut Vec<String>, finding: &Finding) {
    out.push(finding.message.clone());
    if let Some(hint) = &finding.fix_hint {
        let mut hint_lines = hint.lines();
        if let Some(first) = hint_lines.next() {
            out.push(format!("  fix: {}", first));
        }
        for rest in hint_lines {
            out.push(format!("       {}", rest));
        }
    }
}

// =============================================================================
// JSON Format
// =============================================================================

/// JSON envelope for one or more analyzed submissions.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub reports: Vec<JsonEntry>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonEntry {
    /// File path, or `-` for stdin.
    pub path: String,
    #[serde(flatten)]
    pub report: Report,
}

/// Build the JSON document for a batch of reports.
pub fn to_json(reports: &[(String, Report)]) -> anyhow::Result<String> {
    let doc = JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        reports: reports
            .iter()
            .map(|(path, report)| JsonEntry {
                path: path.clone(),
                report: report.clone(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Write results in JSON format.
pub fn write_json(reports: &[(String, Report)]) -> anyhow::Result<()> {
    println!("{}", to_json(reports)?);
    Ok(())
}

// =============================================================================
// Text Format
// =============================================================================

/// Write results in plain text, one block per submission.
pub fn write_text(reports: &[(String, Report)]) {
    let many = reports.len() > 1;
    for (path, report) in reports {
        if many {
            println!("== {} ==", path);
        }
        println!("{}", report.render_text());
        if many {
            println!();
        }
    }
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty (human-readable) format.
pub fn write_pretty(reports: &[(String, Report)]) {
    println!();
    print!("  ");
    print!("{}", "logicmedic".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    for (path, report) in reports {
        print!("  {}", "Reviewing: ".dimmed());
        print!("{}", path.blue());
        println!("  {}", format!("({})", report.language).dimmed());
        println!();

        write_section("Errors", &report.errors);
        write_section("Suggestions", &report.suggestions);

        if report.has_errors() {
            println!("  {}", report.summary.yellow());
        } else {
            println!("  {}", report.summary.green());
        }
        println!();
    }
}

fn write_section(title: &str, findings: &[Finding]) {
    println!("  {} ({}):", title.bold(), findings.len());

    for f in findings {
        write_severity_tag(&f.severity);
        print!("{:<20}", f.rule.as_str().dimmed());
        if let Some(line) = f.line {
            print!("{}", format!("line {}", line).dimmed());
        }
        println!();
        println!("            {}", f.message);

        if let Some(hint) = &f.fix_hint {
            for hint_line in hint.lines() {
                println!("            {} {}", "|".dimmed(), hint_line.green());
            }
        }
    }
    println!();
}

fn write_severity_tag(severity: &Severity) {
    match severity {
        Severity::Error => print!("    {} ", "ERROR".red()),
        Severity::Suggestion => print!("    {} ", "HINT ".blue()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::Rule;

    fn sample() -> Report {
        let mut result = DetectionResult::new();
        result.add(Finding::suggestion(Rule::SyntaxValid, "valid"));
        result.add(
            Finding::error(Rule::MissingTerminator, "missing terminator at line 1")
                .with_hint("int a = 5;")
                .at_line(1),
        );
        result.add(
            Finding::suggestion(Rule::Loops, "Tip: add loops")
                .with_hint("for (;;) {\n}"),
        );
        Report::assemble("java", result)
    }

    #[test]
    fn test_assemble_partitions_in_order() {
        let report = sample();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.suggestions.len(), 2);
        assert_eq!(report.suggestions[0].rule, Rule::SyntaxValid);
        assert_eq!(report.summary, SUMMARY);
        assert!(report.has_errors());
    }

    #[test]
    fn test_render_text_layout() {
        let text = sample().render_text();
        let expected = "Errors:\n\
missing terminator at line 1\n  fix: int a = 5;\n\
\n\
Suggestions:\n\
valid\n\
Tip: add loops\n  fix: for (;;) {\n       }\n\
Overall: Review errors and try corrections to improve your code!";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_text_without_findings() {
        let report = Report::assemble("python", DetectionResult::new());
        assert_eq!(
            report.render_text(),
            format!("Errors:\n\nSuggestions:\n{}", SUMMARY)
        );
    }

    #[test]
    fn test_json_contains_findings() {
        let json = to_json(&[("a.java".to_string(), sample())]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entry = &value["reports"][0];
        assert_eq!(entry["path"], "a.java");
        assert_eq!(entry["language"], "java");
        assert_eq!(entry["errors"][0]["rule"], "missing_terminator");
        assert_eq!(entry["errors"][0]["line"], 1);
    }
}
