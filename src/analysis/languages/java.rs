//! Java language analyzer.
//!
//! Java submissions are never parsed. Every check is a line or text pattern,
//! so results are heuristic by nature.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::{Family, LanguageAnalyzer};
use crate::detect::heuristic::{
    detect_literal_array_bounds, detect_missing_terminators, detect_practices,
    detect_unbalanced_braces, PresencePatterns, TerminatorRules,
};
use crate::detect::{DetectionResult, PracticeExamples};
use crate::lines::LineRecord;

lazy_static! {
    /// Lines opening a declaration or control structure need no `;`.
    static ref EXEMPT_KEYWORDS: Regex = Regex::new(
        r"^(?:class|interface|enum|public|private|protected|static|if|else|for|while|do|try|catch|finally|switch|case|default)\b"
    ).unwrap();

    /// Method declarations with an access modifier; group 1 is the name.
    static ref METHOD: Regex = Regex::new(
        r"\b(?:public|private|protected)\s+(?:(?:static|final|abstract|synchronized|native)\s+)*[\w.<>\[\]]+\s+(\w+)\s*\([^)]*\)"
    ).unwrap();

    static ref LOOP: Regex = Regex::new(r"\b(?:for|while)\s*\(").unwrap();

    static ref CONDITIONAL: Regex = Regex::new(r"\b(?:if|switch)\s*\(").unwrap();

    static ref PRINT: Regex = Regex::new(r"\bSystem\.(?:out|err)\.print(?:ln|f)?\s*\(").unwrap();
}

const COMMENT_PREFIXES: &[&str] = &["//", "/*", "*/", "*"];

const EXAMPLES: PracticeExamples = PracticeExamples {
    callable_kind: "Methods",
    function: "public void greet(String name) {\n    System.out.println(\"Hello \" + name);\n}",
    loop_example: "for (int i = 0; i < 5; i++) {\n    System.out.println(i);\n}",
    conditional: "if (x > 0) {\n    System.out.println(\"Positive\");\n} else {\n    System.out.println(\"Not positive\");\n}",
    print_call: "System.out.println",
    print: "System.out.println(\"Hello World\");",
};

pub struct JavaAnalyzer {
    terminators: TerminatorRules,
    patterns: PresencePatterns,
}

impl JavaAnalyzer {
    pub fn new() -> Self {
        Self {
            terminators: TerminatorRules {
                terminator: ';',
                block_open: '{',
                block_close: '}',
                comment_prefixes: COMMENT_PREFIXES,
                exempt_keywords: &EXEMPT_KEYWORDS,
                exempt_prefixes: &["@"],
            },
            patterns: PresencePatterns {
                callable: &METHOD,
                loop_header: &LOOP,
                conditional: &CONDITIONAL,
                print_call: &PRINT,
            },
        }
    }
}

impl Default for JavaAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageAnalyzer for JavaAnalyzer {
    fn language_id(&self) -> &'static str {
        "java"
    }

    fn display_name(&self) -> &'static str {
        "Java"
    }

    fn family(&self) -> Family {
        Family::Lexical
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["java"]
    }

    fn analyze(&self, source: &str, lines: &[LineRecord]) -> DetectionResult {
        let mut result = detect_missing_terminators(lines, &self.terminators);
        result.merge(detect_unbalanced_braces(
            source,
            self.terminators.block_open,
            self.terminators.block_close,
        ));
        result.merge(detect_literal_array_bounds(source));
        result.merge(detect_practices(source, &self.patterns, &EXAMPLES));
        result
    }
}
