//! Static analysis results for a compiled tree

use serde::Serialize;
use std::fmt;

/// Combinatorics of a generator tree, computed without rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Distinct strings the tree can produce (wrappers are not deduplicated)
    pub combinations: u128,
    /// Shortest rendering, in chars
    pub min_length: usize,
    /// Longest rendering, in chars (an upper bound when collapsing)
    pub max_length: usize,
}

impl Analysis {
    /// True when the tree can only ever produce the empty string
    pub fn is_empty(&self) -> bool {
        self.max_length == 0
    }

    /// "1 possibility" / "12,345 possibilities"
    pub fn describe(&self) -> String {
        let count = group_thousands(self.combinations);
        if self.combinations == 1 {
            format!("{} possibility", count)
        } else {
            format!("{} possibilities", count)
        }
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (length {}..={})",
            self.describe(),
            self.min_length,
            self.max_length
        )
    }
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(combinations: u128) -> Analysis {
        Analysis {
            combinations,
            min_length: 1,
            max_length: 4,
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_describe() {
        assert_eq!(analysis(1).describe(), "1 possibility");
        assert_eq!(analysis(2500).describe(), "2,500 possibilities");
    }

    #[test]
    fn test_display() {
        assert_eq!(analysis(2).to_string(), "2 possibilities (length 1..=4)");
    }

    #[test]
    fn test_is_empty() {
        let empty = Analysis {
            combinations: 1,
            min_length: 0,
            max_length: 0,
        };
        assert!(empty.is_empty());
        assert!(!analysis(1).is_empty());
    }

    #[test]
    fn test_serializes_field_names() {
        let value = serde_json::to_value(analysis(36)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "combinations": 36, "min_length": 1, "max_length": 4 })
        );
    }
}
