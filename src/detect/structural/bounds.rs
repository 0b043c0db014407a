//! Out-of-range access on literal containers.

use crate::analysis::{Construct, ContainerTable, StructuralTree, Visitor};
use crate::detect::shapes::out_of_range_finding;
use crate::detect::DetectionResult;

struct BoundsVisitor<'a> {
    containers: &'a ContainerTable,
    result: DetectionResult,
}

impl Visitor for BoundsVisitor<'_> {
    fn visit(&mut self, construct: &Construct, line: usize) {
        match construct {
            Construct::Subscript {
                container: Some(name),
                index: Some(index),
            } => {
                let Some(len) = self.containers.length_of(name) else {
                    return;
                };
                if *index >= 0 && *index as u64 >= len as u64 {
                    self.result
                        .add(out_of_range_finding(name, *index, len, line));
                }
            }
            Construct::Subscript { .. }
            | Construct::Assignment { .. }
            | Construct::Call { .. }
            | Construct::FunctionDef { .. }
            | Construct::Loop
            | Construct::Conditional
            | Construct::NameRef { .. } => {}
        }
    }
}

/// Report constant indexes past the declared length of a tracked container.
///
/// Non-literal indexes and untracked containers are skipped.
pub fn detect_out_of_range(tree: &StructuralTree, containers: &ContainerTable) -> DetectionResult {
    let mut visitor = BoundsVisitor {
        containers,
        result: DetectionResult::new(),
    };
    tree.walk(&mut visitor);
    visitor.result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscript(name: &str, index: Option<i64>) -> Construct {
        Construct::Subscript {
            container: Some(name.to_string()),
            index,
        }
    }

    #[test]
    fn test_reports_index_past_end() {
        let mut containers = ContainerTable::default();
        containers.insert("x", 3);

        let mut tree = StructuralTree::new();
        tree.push(subscript("x", Some(2)), 2);
        tree.push(subscript("x", Some(5)), 3);
        tree.push(subscript("x", None), 4);
        tree.push(subscript("other", Some(9)), 5);

        let result = detect_out_of_range(&tree, &containers);
        assert_eq!(result.len(), 1);
        assert_eq!(result.findings[0].line, Some(3));
        assert!(result.findings[0].message.contains("x[5]"));
        assert!(result.findings[0].message.contains("max index 2"));
    }

    #[test]
    fn test_index_equal_to_length_is_out_of_range() {
        let mut containers = ContainerTable::default();
        containers.insert("xs", 2);

        let mut tree = StructuralTree::new();
        tree.push(subscript("xs", Some(2)), 1);

        let result = detect_out_of_range(&tree, &containers);
        assert_eq!(result.len(), 1);
        assert_eq!(result.findings[0].fix_hint.as_deref(), Some("xs[1]"));
    }
}
