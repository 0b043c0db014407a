//! Tree-backed and pattern-backed code analysis.
//!
//! Each supported language implements [`LanguageAnalyzer`]. Structural
//! languages lower their tree-sitter parse tree into a [`StructuralTree`]
//! of closed [`Construct`]s, which the structural detectors walk with a
//! [`Visitor`]. Lexical languages skip parsing and feed raw text to the
//! heuristic detectors.
//!
//! ```text
//! ┌────────────┐     ┌──────────────┐     ┌────────────────┐
//! │ Submission │────▶│ Analyzer     │────▶│ StructuralTree │
//! └────────────┘     │ (Python)     │     │ + Symbol/Cont. │
//!       │            └──────────────┘     │   tables       │
//!       │                                 └────────────────┘
//!       │            ┌──────────────┐             │
//!       └───────────▶│ Analyzer     │             ▼
//!                    │ (Java, text) │────▶  DetectionResult
//!                    └──────────────┘
//! ```
//!
//! # Adding a New Language
//!
//! 1. Create a new module in `src/analysis/languages/`
//! 2. Implement `LanguageAnalyzer`
//! 3. Register the analyzer in `languages/mod.rs`

mod builtins;
mod languages;
mod symbols;
mod traits;
mod tree;

pub use builtins::{is_python_builtin, PYTHON_BUILTINS_VERSION};
pub use languages::{
    get_analyzer, get_analyzer_for_extension, lower, register_analyzers, registered_languages,
    supported_language_list, JavaAnalyzer, PythonAnalyzer,
};
pub use symbols::{track, ContainerTable, SymbolTable};
pub use traits::{Family, LanguageAnalyzer};
pub use tree::{Construct, Located, NameContext, StructuralTree, Visitor};
