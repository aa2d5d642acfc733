//! Certificate number types and display formatting
//!
//! Numbers are allocated as plain integers; some call sites display them
//! with a fixed prefix and zero-padding. Formatting is a pure function of
//! the raw number and carries no state of its own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequentially allocated certificate number
///
/// Wraps the raw integer produced by the counter allocator. Serializes
/// transparently as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaudoNumber(u64);

impl LaudoNumber {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LaudoNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for LaudoNumber {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Display rule for certificate numbers
///
/// Applies a fixed textual prefix and zero-pads the raw number to `width`
/// decimal digits. A width of `0` disables padding; numbers wider than
/// `width` are never truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub prefix: String,
    pub width: usize,
}

impl NumberFormat {
    pub fn new(prefix: impl Into<String>, width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            width,
        }
    }

    /// Identity formatting: no prefix, no padding.
    pub fn plain() -> Self {
        Self::new("", 0)
    }

    /// Render a raw number under this rule.
    pub fn format(&self, number: LaudoNumber) -> String {
        format!("{}{:0width$}", self.prefix, number.raw(), width = self.width)
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::plain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_laudo_number_display() {
        assert_eq!(LaudoNumber::new(42).to_string(), "42");
    }

    #[test]
    fn test_laudo_number_serialization() {
        let number = LaudoNumber::new(7);
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "7");

        let deserialized: LaudoNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(number, deserialized);
    }

    #[test]
    fn test_format_prefix_and_padding() {
        let format = NumberFormat::new("017", 4);
        assert_eq!(format.format(LaudoNumber::new(7)), "0170007");
    }

    #[test]
    fn test_format_width_six() {
        let format = NumberFormat::new("", 6);
        assert_eq!(format.format(LaudoNumber::new(123)), "000123");
    }

    #[test]
    fn test_format_plain_is_identity() {
        let format = NumberFormat::plain();
        assert_eq!(format.format(LaudoNumber::new(987)), "987");
    }

    #[test]
    fn test_format_never_truncates() {
        let format = NumberFormat::new("L", 2);
        assert_eq!(format.format(LaudoNumber::new(12345)), "L12345");
    }

    proptest! {
        #[test]
        fn prop_formatted_number_round_trips(raw in 0u64..1_000_000, width in 0usize..10) {
            let format = NumberFormat::new("017", width);
            let rendered = format.format(LaudoNumber::new(raw));

            let digits = rendered.strip_prefix("017").unwrap();
            prop_assert!(digits.len() >= width);
            prop_assert_eq!(digits.parse::<u64>().unwrap(), raw);
        }

        #[test]
        fn prop_formatting_is_deterministic(raw in any::<u64>()) {
            let format = NumberFormat::new("A", 4);
            prop_assert_eq!(
                format.format(LaudoNumber::new(raw)),
                format.format(LaudoNumber::new(raw))
            );
        }
    }
}
