use serde_json::Value;

use crate::error::SigningError;

/// A flat scalar query-parameter value.
///
/// The signing scheme stringifies every parameter; this enum is the closed
/// set of conversions the canonicalizer accepts. Nested values never reach
/// it: the JSON bridge below rejects arrays and objects up front.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
}

impl ParamValue {
    /// Canonical text form used in the signing string.
    ///
    /// Integers render as plain decimal, floats via `f64` display (so a
    /// `100.0` renders as `100`, without a trailing `.0`), booleans as
    /// `true`/`false`, strings verbatim.
    pub fn render(&self) -> String {
        match self {
            ParamValue::Str(s) => s.clone(),
            ParamValue::Int(n) => n.to_string(),
            ParamValue::Uint(n) => n.to_string(),
            ParamValue::Float(n) => n.to_string(),
            ParamValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Uint(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Uint(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl TryFrom<Value> for ParamValue {
    type Error = SigningError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(ParamValue::Str(s)),
            Value::Bool(b) => Ok(ParamValue::Bool(b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(ParamValue::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(ParamValue::Uint(u))
                } else if let Some(f) = n.as_f64() {
                    Ok(ParamValue::Float(f))
                } else {
                    Err(SigningError::UnsupportedValue { kind: "number" })
                }
            }
            Value::Null => Err(SigningError::UnsupportedValue { kind: "null" }),
            Value::Array(_) => Err(SigningError::UnsupportedValue { kind: "array" }),
            Value::Object(_) => Err(SigningError::UnsupportedValue { kind: "object" }),
        }
    }
}

impl TryFrom<&Value> for ParamValue {
    type Error = SigningError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        ParamValue::try_from(value.clone())
    }
}
