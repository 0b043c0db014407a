//! Pattern-based detectors for languages without a structural grammar.
//!
//! Everything here is a heuristic over raw text: it both misses real
//! problems and reports some that are not. Absence of a match is never an
//! error by itself.

mod arrays;
mod braces;
mod practices;
mod terminators;

pub use arrays::{collect_literal_arrays, detect_literal_array_bounds};
pub use braces::detect_unbalanced_braces;
pub use practices::{collect_presence, detect_practices, PresencePatterns};
pub use terminators::{detect_missing_terminators, TerminatorRules};
