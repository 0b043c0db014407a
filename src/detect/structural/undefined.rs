//! Reads of names that were never assigned.
//!
//! Only simple assignments count as definitions, so parameters, imports,
//! loop targets and members are reported too. That is accepted for a
//! mentoring tool; real scope resolution is out of reach here.

use crate::analysis::{Construct, NameContext, StructuralTree, SymbolTable, Visitor};
use crate::detect::{DetectionResult, Finding, Rule};

struct UndefinedVisitor<'a> {
    symbols: &'a SymbolTable,
    is_predefined: fn(&str) -> bool,
    result: DetectionResult,
}

impl Visitor for UndefinedVisitor<'_> {
    fn visit(&mut self, construct: &Construct, line: usize) {
        match construct {
            Construct::NameRef {
                name,
                context: NameContext::Load,
            } => {
                if self.symbols.is_defined(name) || (self.is_predefined)(name) {
                    return;
                }
                self.result.add(
                    Finding::error(
                        Rule::UndefinedVariable,
                        format!("possible undefined variable: '{}'", name),
                    )
                    .with_hint(format!("define '{}' before using it", name))
                    .at_line(line),
                );
            }
            Construct::NameRef { .. }
            | Construct::Assignment { .. }
            | Construct::Subscript { .. }
            | Construct::Call { .. }
            | Construct::FunctionDef { .. }
            | Construct::Loop
            | Construct::Conditional => {}
        }
    }
}

/// Report every load of a name that is neither assigned nor predefined.
///
/// One finding per occurrence.
pub fn detect_undefined_names(
    tree: &StructuralTree,
    symbols: &SymbolTable,
    is_predefined: fn(&str) -> bool,
) -> DetectionResult {
    let mut visitor = UndefinedVisitor {
        symbols,
        is_predefined,
        result: DetectionResult::new(),
    };
    tree.walk(&mut visitor);
    visitor.result
}
