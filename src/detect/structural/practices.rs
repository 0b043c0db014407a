//! Presence of recommended constructs, read from the structural tree.

use crate::analysis::{Construct, StructuralTree, Visitor};
use crate::detect::shapes::{presence_findings, PracticeExamples, Presence};
use crate::detect::DetectionResult;

/// Name of the call treated as debug output.
const PRINT_CALLEE: &str = "print";

#[derive(Default)]
struct PresenceVisitor {
    presence: Presence,
}

impl Visitor for PresenceVisitor {
    fn visit(&mut self, construct: &Construct, _line: usize) {
        match construct {
            Construct::FunctionDef { name } => self.presence.functions.push(name.clone()),
            Construct::Loop => self.presence.loops = true,
            Construct::Conditional => self.presence.conditionals = true,
            Construct::Call {
                callee: Some(callee),
            } if callee == PRINT_CALLEE => self.presence.prints = true,
            Construct::Call { .. }
            | Construct::Assignment { .. }
            | Construct::Subscript { .. }
            | Construct::NameRef { .. } => {}
        }
    }
}

/// Which recommended constructs the tree contains.
pub fn collect_presence(tree: &StructuralTree) -> Presence {
    let mut visitor = PresenceVisitor::default();
    tree.walk(&mut visitor);
    visitor.presence
}

/// Presence suggestions for a parsed submission.
pub fn detect_practices(tree: &StructuralTree, examples: &PracticeExamples) -> DetectionResult {
    presence_findings(&collect_presence(tree), examples)
}
