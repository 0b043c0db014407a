//! Out-of-range access on literal arrays, by pattern matching.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::ContainerTable;
use crate::detect::shapes::out_of_range_finding;
use crate::detect::DetectionResult;

lazy_static! {
    /// `name = {1, 2, 3}` and `name = new int[]{1, 2, 3}` with numeric elements.
    static ref LITERAL_ARRAY: Regex = Regex::new(
        r"(\w+)\s*=\s*(?:new\s+\w+\s*\[\s*\]\s*)?\{\s*([-+\d.,\s]*)\}"
    ).unwrap();

    /// `name[3]` with a literal index.
    static ref LITERAL_INDEX: Regex = Regex::new(r"(\w+)\s*\[\s*(\d+)\s*\]").unwrap();
}

/// Collect literal-initialized arrays and their element counts.
///
/// A trailing comma does not count as an element. Last declaration wins.
pub fn collect_literal_arrays(source: &str) -> ContainerTable {
    let mut arrays = ContainerTable::default();

    for caps in LITERAL_ARRAY.captures_iter(source) {
        let name = &caps[1];
        let count = caps[2]
            .split(',')
            .filter(|item| !item.trim().is_empty())
            .count();
        arrays.insert(name, count);
    }

    arrays
}

/// Report `name[k]` where `name` is a collected literal array and `k` is
/// at or past its element count.
pub fn detect_literal_array_bounds(source: &str) -> DetectionResult {
    let mut result = DetectionResult::new();

    let arrays = collect_literal_arrays(source);
    if arrays.is_empty() {
        return result;
    }

    for caps in LITERAL_INDEX.captures_iter(source) {
        let name = &caps[1];
        let Some(len) = arrays.length_of(name) else {
            continue;
        };
        let Ok(index) = caps[2].parse::<i64>() else {
            continue;
        };
        if index as u64 >= len as u64 {
            let offset = caps.get(0).map(|m| m.start()).unwrap_or(0);
            result.add(out_of_range_finding(name, index, len, line_of(source, offset)));
        }
    }

    result
}

/// 1-based line number of a byte offset.
fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_literal_arrays() {
        let source = "int[] a = {1, 2, 3};\nint[] b = new int[]{4, 5,};\nint[] c = {};";
        let arrays = collect_literal_arrays(source);
        assert_eq!(arrays.length_of("a"), Some(3));
        assert_eq!(arrays.length_of("b"), Some(2));
        assert_eq!(arrays.length_of("c"), Some(0));
    }

    #[test]
    fn test_reports_index_past_end() {
        let source = "int[] nums = {10, 20, 30};\nint x = nums[1];\nint y = nums[3];\n";
        let result = detect_literal_array_bounds(source);

        assert_eq!(result.len(), 1);
        let f = &result.findings[0];
        assert_eq!(f.message, "possible out-of-range access: nums[3] (max index 2)");
        assert_eq!(f.fix_hint.as_deref(), Some("nums[2]"));
        assert_eq!(f.line, Some(3));
    }

    #[test]
    fn test_untracked_arrays_are_skipped() {
        let source = "int[] nums = new int[5];\nint y = nums[9];\nint z = args[4];";
        assert!(detect_literal_array_bounds(source).is_empty());
    }
}
