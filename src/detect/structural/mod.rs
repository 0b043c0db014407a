//! Detectors that consume a lowered structural tree.
//!
//! These only run when the whole submission parsed.

mod bounds;
mod practices;
mod undefined;

pub use bounds::detect_out_of_range;
pub use practices::{collect_presence, detect_practices};
pub use undefined::detect_undefined_names;
