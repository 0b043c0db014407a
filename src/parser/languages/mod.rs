//! Language-specific tree-sitter configurations.
//!
//! Each language module provides:
//! - Fragment completion for per-line parsing
//! - Factory function for creating parsers
//!
//! Languages analyzed only lexically have no entry here.

pub mod python;
