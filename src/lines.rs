//! Line scanning shared by the line-oriented detectors.

/// One physical line of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// Line number (1-indexed, counts blank lines).
    pub index: usize,
    /// The line exactly as submitted, minus the line break.
    pub raw: String,
    pub is_blank: bool,
}

impl LineRecord {
    /// Line content with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.raw.trim()
    }
}

/// Split source into line records.
///
/// A trailing `\r` is dropped so CRLF input classifies the same as LF input.
pub fn scan(source: &str) -> Vec<LineRecord> {
    source
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            let raw = line.strip_suffix('\r').unwrap_or(line).to_string();
            let is_blank = raw.trim().is_empty();
            LineRecord {
                index: i + 1,
                raw,
                is_blank,
            }
        })
        .collect()
}

/// Iterate over the non-blank lines only.
pub fn non_blank(lines: &[LineRecord]) -> impl Iterator<Item = &LineRecord> {
    lines.iter().filter(|l| !l.is_blank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_counts_blank_lines() {
        let lines = scan("a = 1\n\n   \nb = 2");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].is_blank);
        assert!(lines[2].is_blank);

        let kept: Vec<_> = non_blank(&lines).map(|l| l.index).collect();
        assert_eq!(kept, vec![1, 4]);
    }

    #[test]
    fn test_preserves_raw_text() {
        let lines = scan("    x = 1  \r\ny");
        assert_eq!(lines[0].raw, "    x = 1  ");
        assert_eq!(lines[0].trimmed(), "x = 1");
        assert_eq!(lines[1].raw, "y");
    }

    #[test]
    fn test_empty_source_is_one_blank_line() {
        let lines = scan("");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_blank);
    }
}
