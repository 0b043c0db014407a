//! Python language configuration for tree-sitter parsing.

use crate::parser::treesitter::{Config, TreeSitterParser};

/// Body given to block headers parsed on their own.
const PLACEHOLDER_BODY: &str = "\n    pass";

/// Opening block for `elif`/`else` clauses parsed on their own.
const IF_OPENER: &str = "if True:\n    pass\n";

/// Opening block for `except`/`finally` clauses parsed on their own.
const TRY_OPENER: &str = "try:\n    pass\n";

/// A `try` block needs a handler clause to be complete.
const TRY_BODY: &str = "\n    pass\nfinally:\n    pass";

/// A `match` block needs at least one `case`.
const MATCH_BODY: &str = "\n    case _:\n        pass";

/// Opening block for `case` clauses parsed on their own.
const MATCH_OPENER: &str = "match _:\n    ";

/// Body of a `case` clause nested under [`MATCH_OPENER`].
const CASE_BODY: &str = "\n        pass";

/// Turn one Python line into a fragment that parses on its own when the
/// line itself is well formed.
///
/// Indentation is dropped, block headers get a `pass` body, continuation
/// clauses get the opener they attach to, and decorators get a function to
/// decorate. `match` and `case` are soft keywords, so they only count on a
/// block header (`match = 1` stays an assignment).
pub fn complete_fragment(line: &str) -> String {
    let code = line.trim();
    let keyword = code
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .next()
        .unwrap_or("");
    let header = is_block_header(code);

    if header && keyword == "case" {
        return format!("{}{}{}", MATCH_OPENER, code, CASE_BODY);
    }

    let mut fragment = String::with_capacity(code.len() + 32);
    match keyword {
        "elif" | "else" => fragment.push_str(IF_OPENER),
        "except" | "finally" => fragment.push_str(TRY_OPENER),
        _ => {}
    }
    fragment.push_str(code);

    if code.starts_with('@') {
        fragment.push_str("\ndef _decorated():");
        fragment.push_str(PLACEHOLDER_BODY);
    } else if header {
        fragment.push_str(match keyword {
            "try" => TRY_BODY,
            "match" => MATCH_BODY,
            _ => PLACEHOLDER_BODY,
        });
    }

    fragment
}

/// A line that opens an indented block (ends with `:`, ignoring a trailing
/// comment).
fn is_block_header(code: &str) -> bool {
    let without_comment = match code.find('#') {
        Some(pos) if !code[..pos].contains(|c| c == '"' || c == '\'') => &code[..pos],
        _ => code,
    };
    without_comment.trim_end().ends_with(':')
}

/// Create a new Python parser.
pub fn new_parser() -> TreeSitterParser {
    TreeSitterParser::new(Config {
        language: tree_sitter_python::LANGUAGE.into(),
        language_name: "python",
        complete_fragment,
        block_kind: Some("block"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::StructuralParser;

    #[test]
    fn test_complete_fragment_shapes() {
        assert_eq!(complete_fragment("x = 1"), "x = 1");
        assert_eq!(complete_fragment("    print(x)"), "print(x)");
        assert_eq!(complete_fragment("def f(a):"), "def f(a):\n    pass");
        assert_eq!(
            complete_fragment("else:"),
            "if True:\n    pass\nelse:\n    pass"
        );
        assert_eq!(
            complete_fragment("  except ValueError as e:  # bad input"),
            "try:\n    pass\nexcept ValueError as e:  # bad input\n    pass"
        );
        assert_eq!(
            complete_fragment("    try:"),
            "try:\n    pass\nfinally:\n    pass"
        );
        assert_eq!(
            complete_fragment("match command.split():"),
            "match command.split():\n    case _:\n        pass"
        );
        assert_eq!(
            complete_fragment("        case [x, y]:"),
            "match _:\n    case [x, y]:\n        pass"
        );
        assert_eq!(complete_fragment("match = 3"), "match = 3");
        assert_eq!(complete_fragment("case(1)"), "case(1)");
    }

    #[test]
    fn test_block_header_detection() {
        assert!(is_block_header("for i in range(5):"));
        assert!(is_block_header("while True:  # spin"));
        assert!(!is_block_header("x = {'a': 1}"));
        assert!(!is_block_header("s = 'ends with:'  # x"));
    }

    #[test]
    fn test_indented_body_lines_parse_alone() {
        let parser = new_parser();
        for line in [
            "def greet(name):",
            "    print('Hello ' + name)",
            "    if name:",
            "    elif other:",
            "    else:",
            "for i in range(5):",
            "@staticmethod",
            "    try:",
            "    match point:",
            "        case (0, 0):",
            "        case [x, y]:",
            "        case 'quit':",
            "        case _:",
            "match = re.match(p, s)",
        ] {
            let result = parser.parse_fragment(line).unwrap();
            assert!(result.is_success(), "line should parse: {:?}", line);
        }
    }

    #[test]
    fn test_broken_lines_fail_alone() {
        let parser = new_parser();
        for line in ["y = (2", "print(x", "def (:", "case 1 2:"] {
            let result = parser.parse_fragment(line).unwrap();
            assert!(!result.is_success(), "line should fail: {:?}", line);
        }
    }
}
