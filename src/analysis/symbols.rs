//! Symbol and literal-container tracking over a structural tree.

use std::collections::{HashMap, HashSet};

use super::tree::{Construct, StructuralTree, Visitor};

/// Names bound by a simple assignment somewhere in the submission.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    defined: HashSet<String>,
}

impl SymbolTable {
    pub fn is_defined(&self, name: &str) -> bool {
        self.defined.contains(name)
    }

    pub fn len(&self) -> usize {
        self.defined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defined.is_empty()
    }
}

/// Declared lengths of containers initialized from a literal.
///
/// Containers built dynamically are never tracked.
#[derive(Debug, Clone, Default)]
pub struct ContainerTable {
    lengths: HashMap<String, usize>,
}

impl ContainerTable {
    pub fn length_of(&self, name: &str) -> Option<usize> {
        self.lengths.get(name).copied()
    }

    pub fn insert(&mut self, name: impl Into<String>, len: usize) {
        self.lengths.insert(name.into(), len);
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

/// Visitor that fills both tables in one pass.
#[derive(Default)]
struct SymbolTracker {
    symbols: SymbolTable,
    containers: ContainerTable,
}

impl Visitor for SymbolTracker {
    fn visit(&mut self, construct: &Construct, _line: usize) {
        match construct {
            Construct::Assignment {
                target: Some(name),
                literal_len,
            } => {
                self.symbols.defined.insert(name.clone());
                // Last write wins: a later literal reassignment replaces the length.
                if let Some(len) = literal_len {
                    self.containers.insert(name.clone(), *len);
                }
            }
            Construct::Assignment { target: None, .. }
            | Construct::Subscript { .. }
            | Construct::Call { .. }
            | Construct::FunctionDef { .. }
            | Construct::Loop
            | Construct::Conditional
            | Construct::NameRef { .. } => {}
        }
    }
}

/// Build the symbol and container tables for a tree.
pub fn track(tree: &StructuralTree) -> (SymbolTable, ContainerTable) {
    let mut tracker = SymbolTracker::default();
    tree.walk(&mut tracker);
    (tracker.symbols, tracker.containers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assign(name: &str, len: Option<usize>) -> Construct {
        Construct::Assignment {
            target: Some(name.to_string()),
            literal_len: len,
        }
    }

    #[test]
    fn test_tracks_definitions_and_lengths() {
        let mut tree = StructuralTree::new();
        tree.push(assign("x", Some(3)), 1);
        tree.push(assign("total", None), 2);
        tree.push(
            Construct::Assignment {
                target: None,
                literal_len: Some(2),
            },
            3,
        );

        let (symbols, containers) = track(&tree);
        assert!(symbols.is_defined("x"));
        assert!(symbols.is_defined("total"));
        assert_eq!(symbols.len(), 2);
        assert_eq!(containers.length_of("x"), Some(3));
        assert_eq!(containers.length_of("total"), None);
    }

    #[test]
    fn test_last_literal_write_wins() {
        let mut tree = StructuralTree::new();
        tree.push(assign("x", Some(3)), 1);
        tree.push(assign("x", Some(1)), 2);

        let (_, containers) = track(&tree);
        assert_eq!(containers.length_of("x"), Some(1));
    }

    #[test]
    fn test_non_literal_reassignment_keeps_length() {
        let mut tree = StructuralTree::new();
        tree.push(assign("x", Some(3)), 1);
        tree.push(assign("x", None), 2);

        let (_, containers) = track(&tree);
        assert_eq!(containers.length_of("x"), Some(3));
    }
}
