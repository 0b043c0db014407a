//! Lowered structural tree.
//!
//! Language analyzers lower their concrete syntax tree into a flat,
//! source-ordered sequence of [`Construct`]s. Detectors only ever see this
//! closed set of node kinds, through the [`Visitor`] trait.

use std::fmt;

/// How a name occurrence uses the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameContext {
    /// Value is read.
    Load,
    /// Name is bound (assignment target, loop target, alias, ...).
    Store,
    /// Name is removed (`del x`).
    Delete,
}

impl NameContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameContext::Load => "load",
            NameContext::Store => "store",
            NameContext::Delete => "delete",
        }
    }
}

impl fmt::Display for NameContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One structural node kind that some detector cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Construct {
    /// `target = value`. `target` is set only for a simple name;
    /// `literal_len` only when the value is a literal list.
    Assignment {
        target: Option<String>,
        literal_len: Option<usize>,
    },
    /// `container[index]`. `container` is set only for a simple name;
    /// `index` only for a single integer literal.
    Subscript {
        container: Option<String>,
        index: Option<i64>,
    },
    /// A call whose callee is a simple name (`None` for `obj.method()` etc).
    Call { callee: Option<String> },
    FunctionDef { name: String },
    Loop,
    Conditional,
    NameRef { name: String, context: NameContext },
}

/// A construct with the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    pub construct: Construct,
    /// Line number (1-indexed).
    pub line: usize,
}

/// Source-ordered constructs of one successfully parsed submission.
#[derive(Debug, Clone, Default)]
pub struct StructuralTree {
    nodes: Vec<Located>,
}

impl StructuralTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, construct: Construct, line: usize) {
        self.nodes.push(Located { construct, line });
    }

    pub fn nodes(&self) -> &[Located] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Feed every construct to the visitor in source order.
    pub fn walk<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        for node in &self.nodes {
            visitor.visit(&node.construct, node.line);
        }
    }
}

/// Consumer of a [`StructuralTree`].
pub trait Visitor {
    fn visit(&mut self, construct: &Construct, line: usize);
}
