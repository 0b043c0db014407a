//! Tests for the text and JSON output formats and the config fixture.

use std::path::{Path, PathBuf};

use logicmedic::config::{self, Config};
use logicmedic::report::{self, JsonReport, SUMMARY};
use logicmedic::{analyze, Rule, Runner};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(testdata_path().join(name)).expect("should read fixture")
}

#[test]
fn test_text_report_sections() {
    let report = analyze(&read_fixture("bounds.py"), "python");
    let text = report.render_text();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Errors:");
    assert_eq!(lines[1], "possible out-of-range access: x[5] (max index 2)");
    assert_eq!(lines[2], "  fix: x[2]");
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "Suggestions:");
    assert_eq!(lines[5], "Python syntax is valid for blocks that parsed successfully");
    assert_eq!(*lines.last().unwrap(), SUMMARY);
}

#[test]
fn test_text_report_multiline_hint_is_indented() {
    let report = analyze("", "java");
    let text = report.render_text();

    assert!(text.contains("Tip: add loops if repetition is needed\n  fix: for (int i = 0; i < 5; i++) {\n"));
    for line in text.lines().filter(|l| l.contains("System.out.println(i);")) {
        assert!(line.starts_with("       "), "{:?}", line);
    }
}

#[test]
fn test_json_report_structure() {
    let reports = vec![
        ("Missing.java".to_string(), analyze(&read_fixture("Missing.java"), "java")),
        ("clean.py".to_string(), analyze(&read_fixture("clean.py"), "python")),
    ];
    let json = report::to_json(&reports).expect("should serialize");
    let parsed: JsonReport = serde_json::from_str(&json).expect("should round-trip");

    assert_eq!(parsed.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(parsed.reports.len(), 2);

    let java = &parsed.reports[0];
    assert_eq!(java.path, "Missing.java");
    assert_eq!(java.report.language, "java");
    assert_eq!(java.report.errors.len(), 3);
    assert_eq!(java.report.summary, SUMMARY);

    let python = &parsed.reports[1];
    assert!(python.report.errors.is_empty());
    assert_eq!(python.report.suggestions[0].rule, Rule::SyntaxValid);
}

#[test]
fn test_json_uses_snake_case_rule_ids() {
    let json = report::to_json(&[("-".to_string(), analyze("print(y)\n", "python"))]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let error = &value["reports"][0]["errors"][0];
    assert_eq!(error["rule"], "undefined_variable");
    assert_eq!(error["severity"], "error");
    assert_eq!(error["line"], 1);
}

#[test]
fn test_config_fixture_drives_options() {
    let config = Config::parse_file(testdata_path().join("logicmedic.yaml")).expect("should parse");
    config::validate(&config).expect("fixture should be valid");

    assert_eq!(config.get_format(), "text");
    assert!(config.is_path_excluded(Path::new("src/generated/Model.java")));

    let runner = Runner::with_options(config.analysis_options());
    let report = runner.run(&read_fixture("clean.py"), "python");
    assert!(report.suggestions.iter().all(|f| f.rule != Rule::PrintOutput));
    assert_eq!(report.suggestions.len(), 4);
}
