//! Python language analyzer using tree-sitter.

use tree_sitter::Node;

use crate::analysis::{
    is_python_builtin, track, Construct, Family, LanguageAnalyzer, NameContext, StructuralTree,
};
use crate::detect::structural::{detect_out_of_range, detect_practices, detect_undefined_names};
use crate::detect::{
    detect_line_syntax_errors, syntax_valid_finding, DetectionResult, Finding, PracticeExamples,
    Rule,
};
use crate::lines::LineRecord;
use crate::parser::languages::python;
use crate::parser::treesitter::TreeSitterParser;
use crate::parser::{ParseResult, ParsedSource, StructuralParser};

const EXAMPLES: PracticeExamples = PracticeExamples {
    callable_kind: "Functions",
    function: "def greet(name):\n    print('Hello ' + name)",
    loop_example: "for i in range(5):\n    print(i)",
    conditional: "if x > 0:\n    print('Positive')\nelse:\n    print('Not positive')",
    print_call: "print()",
    print: "print('Hello World')",
};

/// Statements whose names are not value reads.
const SKIPPED_STATEMENTS: &[&str] = &[
    "import_statement",
    "import_from_statement",
    "future_import_statement",
    "global_statement",
    "nonlocal_statement",
];

pub struct PythonAnalyzer {
    parser: TreeSitterParser,
}

impl PythonAnalyzer {
    pub fn new() -> Self {
        Self {
            parser: python::new_parser(),
        }
    }
}

impl Default for PythonAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageAnalyzer for PythonAnalyzer {
    fn language_id(&self) -> &'static str {
        "python"
    }

    fn display_name(&self) -> &'static str {
        "Python"
    }

    fn family(&self) -> Family {
        Family::Structural
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["py"]
    }

    fn analyze(&self, source: &str, lines: &[LineRecord]) -> DetectionResult {
        let mut result = detect_line_syntax_errors(&self.parser, lines);

        let parsed = match self.parser.parse_unit(source) {
            Ok(ParseResult::Success(parsed)) => parsed,
            Ok(ParseResult::Failure(issue)) => {
                tracing::debug!(%issue, "whole-unit parse failed, skipping structural detectors");
                // Lines that parse alone can still fail together (e.g. a header
                // with no body); say so when no line was blamed.
                if result.is_empty() {
                    let line = issue.line.unwrap_or(1);
                    let mut finding = Finding::error(
                        Rule::SyntaxError,
                        format!("SyntaxError at line {}: {}", line, issue.message),
                    )
                    .at_line(line);
                    if let Some(record) = lines.iter().find(|l| l.index == line) {
                        finding = finding.with_hint(record.raw.clone());
                    }
                    result.add(finding);
                }
                return result;
            }
            Err(e) => {
                tracing::warn!(error = %e, "python grammar unavailable");
                return result;
            }
        };

        result.add(syntax_valid_finding(self.display_name()));

        let tree = lower(&parsed);
        tracing::trace!(constructs = tree.len(), "lowered python tree");
        let (symbols, containers) = track(&tree);

        result.merge(detect_out_of_range(&tree, &containers));
        result.merge(detect_undefined_names(&tree, &symbols, is_python_builtin));
        result.merge(detect_practices(&tree, &EXAMPLES));
        result
    }
}

/// Lower a parsed Python module into source-ordered constructs.
///
/// Nodes are visited from an explicit work stack rather than by recursion,
/// so deeply nested input cannot exhaust the call stack.
pub fn lower(parsed: &ParsedSource) -> StructuralTree {
    let mut lowerer = Lowerer {
        parsed,
        tree: StructuralTree::new(),
    };

    let mut stack = vec![(parsed.tree.root_node(), NameContext::Load)];
    let mut pending = Vec::new();
    while let Some((node, ctx)) = stack.pop() {
        lowerer.visit(node, ctx, &mut pending);
        // Reversed so the first child is popped first (pre-order).
        stack.extend(pending.drain(..).rev());
    }
    lowerer.tree
}

/// Children still to lower, with the context they are lowered in.
type Pending<'a> = Vec<(Node<'a>, NameContext)>;

struct Lowerer<'a> {
    parsed: &'a ParsedSource,
    tree: StructuralTree,
}

impl<'a> Lowerer<'a> {
    fn push(&mut self, construct: Construct, node: Node) {
        self.tree.push(construct, node.start_position().row + 1);
    }

    fn text(&self, node: Node) -> String {
        self.parsed.node_text(node).to_string()
    }

    /// Simple name of a node, if it is a bare identifier.
    fn simple_name(&self, node: Option<Node>) -> Option<String> {
        node.filter(|n| n.kind() == "identifier")
            .map(|n| self.text(n))
    }

    /// Emit the construct for `node` and queue its children in order.
    fn visit(&mut self, node: Node<'a>, ctx: NameContext, out: &mut Pending<'a>) {
        match node.kind() {
            "identifier" => {
                let name = self.text(node);
                self.push(Construct::NameRef { name, context: ctx }, node);
            }
            "comment" => {}
            kind if SKIPPED_STATEMENTS.contains(&kind) => {}
            "assignment" => {
                let left = node.child_by_field_name("left");
                let literal_len = node
                    .child_by_field_name("right")
                    .and_then(|right| literal_list_len(final_value(right)));
                self.push(
                    Construct::Assignment {
                        target: self.simple_name(left),
                        literal_len,
                    },
                    node,
                );
                field(node, "left", NameContext::Store, out);
                field(node, "type", NameContext::Load, out);
                field(node, "right", NameContext::Load, out);
            }
            "augmented_assignment" => {
                field(node, "left", NameContext::Store, out);
                field(node, "right", NameContext::Load, out);
            }
            "for_statement" => {
                self.push(Construct::Loop, node);
                field(node, "left", NameContext::Store, out);
                field(node, "right", NameContext::Load, out);
                field(node, "body", NameContext::Load, out);
                field(node, "alternative", NameContext::Load, out);
            }
            "while_statement" => {
                self.push(Construct::Loop, node);
                children(node, NameContext::Load, out);
            }
            "if_statement" | "elif_clause" => {
                self.push(Construct::Conditional, node);
                children(node, NameContext::Load, out);
            }
            "function_definition" => {
                if let Some(name) = node.child_by_field_name("name") {
                    let name = self.text(name);
                    self.push(Construct::FunctionDef { name }, node);
                }
                if let Some(params) = node.child_by_field_name("parameters") {
                    parameters(params, out);
                }
                field(node, "return_type", NameContext::Load, out);
                field(node, "body", NameContext::Load, out);
            }
            "class_definition" => {
                field(node, "superclasses", NameContext::Load, out);
                field(node, "body", NameContext::Load, out);
            }
            "lambda" => {
                if let Some(params) = node.child_by_field_name("parameters") {
                    parameters(params, out);
                }
                field(node, "body", NameContext::Load, out);
            }
            "call" => {
                let callee = self.simple_name(node.child_by_field_name("function"));
                self.push(Construct::Call { callee }, node);
                children(node, NameContext::Load, out);
            }
            "print_statement" => {
                self.push(
                    Construct::Call {
                        callee: Some("print".to_string()),
                    },
                    node,
                );
                children(node, NameContext::Load, out);
            }
            "subscript" => {
                let container = self.simple_name(node.child_by_field_name("value"));
                let index = self.constant_index(node);
                self.push(Construct::Subscript { container, index }, node);
                children(node, NameContext::Load, out);
            }
            "attribute" => {
                // `a.b = 1` still reads `a`; the member name is not a variable.
                field(node, "object", NameContext::Load, out);
            }
            "keyword_argument" => field(node, "value", NameContext::Load, out),
            "named_expression" => {
                field(node, "name", NameContext::Store, out);
                field(node, "value", NameContext::Load, out);
            }
            "for_in_clause" => {
                field(node, "left", NameContext::Store, out);
                field(node, "right", NameContext::Load, out);
            }
            "as_pattern" | "except_clause" => aliased(node, out),
            "delete_statement" => children(node, NameContext::Delete, out),
            "case_pattern" => children(node, NameContext::Store, out),
            _ => children(node, ctx, out),
        }
    }

    /// The index of `x[k]` when `k` is a single integer literal.
    fn constant_index(&self, subscript: Node) -> Option<i64> {
        let mut cursor = subscript.walk();
        let indexes: Vec<Node> = subscript
            .children_by_field_name("subscript", &mut cursor)
            .collect();
        match indexes.as_slice() {
            [only] if only.kind() == "integer" => parse_int_literal(self.parsed.node_text(*only)),
            _ => None,
        }
    }
}

fn field<'a>(node: Node<'a>, name: &str, ctx: NameContext, out: &mut Pending<'a>) {
    if let Some(child) = node.child_by_field_name(name) {
        out.push((child, ctx));
    }
}

fn children<'a>(node: Node<'a>, ctx: NameContext, out: &mut Pending<'a>) {
    let mut cursor = node.walk();
    out.extend(node.named_children(&mut cursor).map(|child| (child, ctx)));
}

/// Parameters bind names; only defaults and annotations are reads.
fn parameters<'a>(params: Node<'a>, out: &mut Pending<'a>) {
    let mut cursor = params.walk();
    for param in params.named_children(&mut cursor) {
        match param.kind() {
            "default_parameter" => field(param, "value", NameContext::Load, out),
            "typed_parameter" => field(param, "type", NameContext::Load, out),
            "typed_default_parameter" => {
                field(param, "type", NameContext::Load, out);
                field(param, "value", NameContext::Load, out);
            }
            _ => {}
        }
    }
}

/// Queue `expr as name` shapes: everything after `as` is bound, bodies are
/// read.
fn aliased<'a>(node: Node<'a>, out: &mut Pending<'a>) {
    let mut cursor = node.walk();
    let mut after_as = false;
    for child in node.children(&mut cursor) {
        if child.kind() == "as" {
            after_as = true;
            continue;
        }
        if !child.is_named() {
            continue;
        }
        let ctx = if after_as && child.kind() != "block" {
            NameContext::Store
        } else {
            NameContext::Load
        };
        out.push((child, ctx));
    }
}

/// Follow a chained assignment (`a = b = [...]`) to its final value.
fn final_value(mut node: Node) -> Node {
    while node.kind() == "assignment" {
        match node.child_by_field_name("right") {
            Some(right) => node = right,
            None => break,
        }
    }
    node
}

/// Element count of a literal list.
fn literal_list_len(node: Node) -> Option<usize> {
    if node.kind() != "list" {
        return None;
    }
    let mut cursor = node.walk();
    let mut count = 0;
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "comment" => {}
            // `[*rest]` has no length known without evaluation
            "list_splat" => return None,
            _ => count += 1,
        }
    }
    Some(count)
}

/// Parse a Python integer literal (`42`, `1_000`, `0x1f`, `0o17`, `0b101`).
fn parse_int_literal(text: &str) -> Option<i64> {
    let cleaned: String = text
        .chars()
        .filter(|&c| c != '_')
        .collect::<String>()
        .to_ascii_lowercase();

    let (digits, radix) = if let Some(rest) = cleaned.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = cleaned.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = cleaned.strip_prefix("0b") {
        (rest, 2)
    } else {
        (cleaned.as_str(), 10)
    };

    i64::from_str_radix(digits, radix).ok()
}
