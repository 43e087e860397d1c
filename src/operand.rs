//! Dynamically typed operands.
//!
//! The arithmetic functions accept anything convertible into an [`Operand`]
//! and reject non-numeric values at the point of computation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value passed to an arithmetic operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    /// A 32-bit signed integer, the only numeric type accepted.
    Int(i32),
    /// A text value. Never coerced to a number.
    Text(String),
}

impl Operand {
    /// Parses a command-line argument.
    ///
    /// Anything that is not a valid `i32` becomes [`Operand::Text`].
    pub fn parse(s: &str) -> Self {
        s.parse::<i32>()
            .map_or_else(|_| Self::Text(s.to_string()), Self::Int)
    }

    /// Returns the integer value, or `None` for non-numeric operands.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Text(_) => "str",
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "'{s}'"),
        }
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Operand::parse("42"), Operand::Int(42));
        assert_eq!(Operand::parse("-7"), Operand::Int(-7));
        assert_eq!(Operand::parse("abc"), Operand::Text("abc".to_string()));
        // Out of i32 range is not numeric
        assert_eq!(
            Operand::parse("3000000000"),
            Operand::Text("3000000000".to_string())
        );
    }

    #[test]
    fn test_numeric_looking_text_stays_text() {
        let op = Operand::from("1");
        assert_eq!(op.as_int(), None);
        assert_eq!(op.type_name(), "str");
    }

    #[test]
    fn test_display() {
        assert_eq!(Operand::Int(43).to_string(), "43");
        assert_eq!(Operand::from("1").to_string(), "'1'");
    }

    #[test]
    fn test_serde_untagged() {
        let ops = vec![Operand::Int(1), Operand::from("x")];
        let json = serde_json::to_string(&ops).unwrap();
        assert_eq!(json, r#"[1,"x"]"#);

        let back: Vec<Operand> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ops);
    }
}
