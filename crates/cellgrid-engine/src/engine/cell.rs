//! Cell values.
//!
//! - [`CellValue`] - The typed content of a cell (empty, text, or number)
//! - [`parse_number`] - The numeric-string test shared by input
//!   classification and numeric coercion

use serde::{Deserialize, Serialize};
use std::fmt;

use super::format::format_number;

/// The value stored in a cell.
///
/// Serializes untagged so a snapshot reads as plain JSON
/// (`{"A1": 1, "B1": "text"}`); `Empty` maps to `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> CellValue {
        CellValue::Text(s.into())
    }

    /// Classify literal user input.
    /// - Empty string or whitespace -> Empty
    /// - Passes the numeric test -> Number
    /// - Otherwise -> Text (trimmed)
    ///
    /// Formula routing (`=`) is the caller's job; here `=SUM(A1:A2)` is text.
    pub fn from_input(input: &str) -> CellValue {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }

        match parse_number(trimmed) {
            Some(n) => CellValue::Number(n),
            None => CellValue::Text(trimmed.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Numeric view: text that passes the numeric test converts, any other
    /// text and `Empty` are 0.
    pub fn to_number(&self) -> f64 {
        match self {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => parse_number(s).unwrap_or(0.0),
            CellValue::Empty => 0.0,
        }
    }

    /// Text view, as shown in the grid and written to CSV.
    pub fn to_display(&self) -> String {
        match self {
            CellValue::Number(n) => format_number(*n),
            CellValue::Text(s) => s.clone(),
            CellValue::Empty => String::new(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

/// Parse a string the way a permissive "is this numeric" test does.
///
/// Accepts signed decimals with optional fraction and exponent (`-2.5`,
/// `.5`, `1e3`) and unsigned `0x`/`0o`/`0b` integers. Non-finite results
/// and words like `inf` or `NaN` are rejected.
pub fn parse_number(input: &str) -> Option<f64> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(n) = parse_radix_literal(s) {
        return Some(n);
    }

    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }

    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let prefix = s.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return None;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
        })
        .filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_classifies() {
        assert_eq!(CellValue::from_input(""), CellValue::Empty);
        assert_eq!(CellValue::from_input("   "), CellValue::Empty);
        assert_eq!(CellValue::from_input("42"), CellValue::Number(42.0));
        assert_eq!(CellValue::from_input(" -2.5 "), CellValue::Number(-2.5));
        assert_eq!(CellValue::from_input("hello"), CellValue::text("hello"));
        assert_eq!(CellValue::from_input("  padded "), CellValue::text("padded"));
        assert_eq!(
            CellValue::from_input("=SUM(A1:A2)"),
            CellValue::text("=SUM(A1:A2)")
        );
    }

    #[test]
    fn test_parse_number_forms() {
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("+7"), Some(7.0));
        assert_eq!(parse_number("0x1F"), Some(31.0));
        assert_eq!(parse_number("0b101"), Some(5.0));
        assert_eq!(parse_number("0o17"), Some(15.0));
    }

    #[test]
    fn test_parse_number_rejects() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("1,000"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("Infinity"), None);
        assert_eq!(parse_number("1e999"), None);
        assert_eq!(parse_number("0x"), None);
        assert_eq!(parse_number("0xZZ"), None);
        assert_eq!(parse_number(&format!("0x{}", "F".repeat(300))), None);
        assert_eq!(parse_number("1e"), None);
    }

    #[test]
    fn test_to_number_coercion() {
        assert_eq!(CellValue::Number(3.0).to_number(), 3.0);
        assert_eq!(CellValue::text("12").to_number(), 12.0);
        assert_eq!(CellValue::text("x").to_number(), 0.0);
        assert_eq!(CellValue::Empty.to_number(), 0.0);
    }

    #[test]
    fn test_to_display() {
        assert_eq!(CellValue::Number(60.0).to_display(), "60");
        assert_eq!(CellValue::Number(2.5).to_display(), "2.5");
        assert_eq!(CellValue::text("abc").to_display(), "abc");
        assert_eq!(CellValue::Empty.to_display(), "");
    }

    #[test]
    fn test_serde_untagged_shape() {
        let json = serde_json::to_string(&vec![
            CellValue::Number(1.5),
            CellValue::text("x"),
            CellValue::Empty,
        ])
        .unwrap();
        assert_eq!(json, r#"[1.5,"x",null]"#);

        let back: Vec<CellValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0], CellValue::Number(1.5));
        assert_eq!(back[1], CellValue::text("x"));
        assert_eq!(back[2], CellValue::Empty);
    }
}
