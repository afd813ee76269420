//! Argument coercion between [`Value`] shapes.
//!
//! Every block argument passes through here before touching extension
//! internals, so the noise engine and the relay never see undefined values.

use thiserror::Error;

use crate::value::Value;

/// A value could not be coerced to the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot interpret {value:?} as a number")]
pub struct CastError {
    /// The rejected source value, stringified.
    pub value: String,
}

/// Coerce a [`Value`] to a number.
///
/// Booleans become 0/1 and numeric strings are parsed. NaN coerces to 0,
/// matching the host runtime's cast layer. A string that does not parse is
/// reported as a [`CastError`] rather than silently becoming zero.
pub fn to_number(value: &Value) -> Result<f64, CastError> {
    let n = match value {
        Value::Number(n) => *n,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Text(s) => s.trim().parse::<f64>().map_err(|_| CastError {
            value: s.clone(),
        })?,
    };
    Ok(if n.is_nan() { 0.0 } else { n })
}

/// Coerce a [`Value`] to text. Infallible.
#[must_use]
pub fn to_string(value: &Value) -> String {
    value.to_string()
}
