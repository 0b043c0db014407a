//! Integration tests for the tree-sitter parser adapter and tree lowering.

use logicmedic::analysis::{lower, Construct, NameContext};
use logicmedic::parser::languages::python;
use logicmedic::parser::{ParseResult, StructuralParser};

/// Every line of an indented program parses on its own once completed.
#[test]
fn test_python_fragments_of_valid_program_parse() {
    let source = r#"
@staticmethod
def classify(n):
    try:
        if n > 0:
            return "positive"
        elif n == 0:
            return "zero"
        else:
            return "negative"
    except TypeError as err:
        raise
    finally:
        pass
class Box:
    size: int = 3
    with open("f") as fh:
        data = fh.read()
match command:
    case "stop":
        pass
    case [verb, obj]:
        pass
"#;

    let parser = python::new_parser();
    for (i, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let result = parser.parse_fragment(line).expect("grammar should load");
        assert!(
            result.is_success(),
            "line {} {:?} failed: {:?}",
            i + 1,
            line,
            result.issue()
        );
    }
}

#[test]
fn test_python_fragment_failures_carry_messages() {
    let parser = python::new_parser();

    for bad in ["x = (1, 2", "print('unterminated)", "def f(:", "x = = 3"] {
        let result = parser.parse_fragment(bad).expect("grammar should load");
        let issue = result
            .issue()
            .unwrap_or_else(|| panic!("{:?} should fail", bad));
        assert!(!issue.message.is_empty());
    }
}

#[test]
fn test_python_unit_parse_and_lowering() {
    let source = r#"
data = [1, 2, 3]
def total(values):
    acc = 0
    for v in values:
        acc += v
    return acc
while False:
    pass
if data:
    print(total(data)[0])
"#;

    let parser = python::new_parser();
    let parsed = match parser.parse_unit(source).expect("grammar should load") {
        ParseResult::Success(parsed) => parsed,
        ParseResult::Failure(issue) => panic!("should parse: {}", issue),
    };
    let tree = lower(&parsed);

    let kinds: Vec<&str> = tree
        .nodes()
        .iter()
        .filter_map(|n| match &n.construct {
            Construct::FunctionDef { .. } => Some("def"),
            Construct::Loop => Some("loop"),
            Construct::Conditional => Some("if"),
            Construct::Subscript { .. } => Some("subscript"),
            _ => None,
        })
        .collect();
    assert_eq!(kinds, vec!["def", "loop", "loop", "if", "subscript"]);

    // `v` is bound by the loop, read by the augmented assignment.
    let v_uses: Vec<NameContext> = tree
        .nodes()
        .iter()
        .filter_map(|n| match &n.construct {
            Construct::NameRef { name, context } if name == "v" => Some(*context),
            _ => None,
        })
        .collect();
    assert_eq!(v_uses, vec![NameContext::Store, NameContext::Load]);

    let def_line = tree
        .nodes()
        .iter()
        .find(|n| matches!(n.construct, Construct::FunctionDef { .. }))
        .map(|n| n.line);
    assert_eq!(def_line, Some(3));
}

#[test]
fn test_python_unit_with_empty_body_fails() {
    let parser = python::new_parser();
    let result = parser
        .parse_unit("def f():\n    pass\nclass Empty:\n")
        .expect("grammar should load");
    let issue = result.issue().expect("empty class body should fail");
    assert_eq!(issue.message, "expected an indented block");
    assert_eq!(issue.line, Some(3));
}

#[test]
fn test_python_unit_failure_has_line() {
    let parser = python::new_parser();
    let result = parser
        .parse_unit("x = 1\ny = [1, 2\n")
        .expect("grammar should load");
    assert!(!result.is_success());
    assert!(result.issue().and_then(|i| i.line).is_some());
}
