//! Finding shapes shared by structural and heuristic detectors.

use super::{DetectionResult, Finding, Rule};

/// Error for a literal index past the end of a literal container.
pub fn out_of_range_finding(name: &str, index: i64, len: usize, line: usize) -> Finding {
    if len == 0 {
        return Finding::error(
            Rule::OutOfRange,
            format!("possible out-of-range access: {}[{}] ({} is empty)", name, index, name),
        )
        .with_hint(format!("add elements to {} before indexing it", name))
        .at_line(line);
    }

    let max_index = len - 1;
    Finding::error(
        Rule::OutOfRange,
        format!(
            "possible out-of-range access: {}[{}] (max index {})",
            name, index, max_index
        ),
    )
    .with_hint(format!("{}[{}]", name, max_index))
    .at_line(line)
}

/// Which recommended constructs a submission contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presence {
    /// Names of defined functions/methods, in source order.
    pub functions: Vec<String>,
    pub loops: bool,
    pub conditionals: bool,
    pub prints: bool,
}

/// Language-specific wording and example snippets for presence findings.
#[derive(Debug, Clone, Copy)]
pub struct PracticeExamples {
    /// "Functions" or "Methods".
    pub callable_kind: &'static str,
    pub function: &'static str,
    pub loop_example: &'static str,
    pub conditional: &'static str,
    /// Canonical debug output call, e.g. "print()".
    pub print_call: &'static str,
    pub print: &'static str,
}

/// Emit the four presence suggestions in fixed order: functions, loops,
/// conditionals, print.
pub fn presence_findings(presence: &Presence, examples: &PracticeExamples) -> DetectionResult {
    let mut result = DetectionResult::new();

    if presence.functions.is_empty() {
        result.add(
            Finding::suggestion(
                Rule::Functions,
                format!(
                    "Tip: consider using {} for better structure",
                    examples.callable_kind.to_lowercase()
                ),
            )
            .with_hint(examples.function),
        );
    } else {
        result.add(Finding::suggestion(
            Rule::Functions,
            format!(
                "{} detected: {}",
                examples.callable_kind,
                presence.functions.join(", ")
            ),
        ));
    }

    if presence.loops {
        result.add(Finding::suggestion(Rule::Loops, "Loop(s) detected"));
    } else {
        result.add(
            Finding::suggestion(Rule::Loops, "Tip: add loops if repetition is needed")
                .with_hint(examples.loop_example),
        );
    }

    if presence.conditionals {
        result.add(Finding::suggestion(
            Rule::Conditionals,
            "Conditional logic detected",
        ));
    } else {
        result.add(
            Finding::suggestion(Rule::Conditionals, "Tip: use if-else for decisions")
                .with_hint(examples.conditional),
        );
    }

    if presence.prints {
        result.add(Finding::suggestion(
            Rule::PrintOutput,
            format!("{} statements found (good for debugging)", examples.print_call),
        ));
    } else {
        result.add(
            Finding::suggestion(
                Rule::PrintOutput,
                format!("Tip: use {} for debugging", examples.print_call),
            )
            .with_hint(examples.print),
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLES: PracticeExamples = PracticeExamples {
        callable_kind: "Functions",
        function: "def f():\n    pass",
        loop_example: "for i in range(3):\n    pass",
        conditional: "if x:\n    pass",
        print_call: "print()",
        print: "print('hi')",
    };

    #[test]
    fn test_out_of_range_message() {
        let f = out_of_range_finding("x", 5, 3, 2);
        assert_eq!(f.message, "possible out-of-range access: x[5] (max index 2)");
        assert_eq!(f.fix_hint.as_deref(), Some("x[2]"));
        assert_eq!(f.line, Some(2));
    }

    #[test]
    fn test_out_of_range_empty_container() {
        let f = out_of_range_finding("items", 0, 0, 1);
        assert!(f.message.contains("items is empty"));
        assert!(f.fix_hint.unwrap().contains("add elements"));
    }

    #[test]
    fn test_absent_practices_give_tips_in_order() {
        let result = presence_findings(&Presence::default(), &EXAMPLES);
        let rules: Vec<Rule> = result.findings.iter().map(|f| f.rule).collect();
        assert_eq!(
            rules,
            vec![Rule::Functions, Rule::Loops, Rule::Conditionals, Rule::PrintOutput]
        );
        assert!(result.findings.iter().all(|f| f.fix_hint.is_some()));
        assert!(result.findings.iter().all(|f| f.message.starts_with("Tip:")));
    }

    #[test]
    fn test_present_practices_are_acknowledged() {
        let presence = Presence {
            functions: vec!["greet".to_string(), "main".to_string()],
            loops: true,
            conditionals: true,
            prints: true,
        };
        let result = presence_findings(&presence, &EXAMPLES);
        assert_eq!(result.findings[0].message, "Functions detected: greet, main");
        assert!(result.findings.iter().all(|f| f.fix_hint.is_none()));
    }
}
