//! Dynamic values exchanged between the host runtime and extension blocks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A block argument or report value.
///
/// Mirrors the three scalar shapes the block runtime passes around. Numbers
/// are always `f64`; the runtime has no integer type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean, as produced by predicate blocks.
    Bool(bool),
    /// A floating-point number.
    Number(f64),
    /// A text value.
    Text(String),
}

impl Value {
    /// A numeric zero, the runtime's conventional "no result" report.
    pub const ZERO: Self = Self::Number(0.0);
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl fmt::Display for Value {
    /// Render the way the runtime stringifies values: integral numbers print
    /// without a decimal part.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Self::Text(s) => f.write_str(s),
        }
    }
}
