//! Dynamic accessor for JSON-decoded result cells.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::{ClickqError, Result};

/// A JSON-backed value with lenient numeric coercion.
///
/// Numbers convert freely between floats and integers (floats truncate) and
/// booleans convert to `1`/`0`. The `*_or` accessors return their default for
/// nil or unconvertible values instead of an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value {
    inner: JsonValue,
}

impl Value {
    pub fn new(inner: JsonValue) -> Self {
        Self { inner }
    }

    /// Decodes a value from JSON text.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn is_nil(&self) -> bool {
        self.inner.is_null()
    }

    /// Number of elements for arrays and objects.
    pub fn len(&self) -> Option<usize> {
        match &self.inner {
            JsonValue::Array(a) => Some(a.len()),
            JsonValue::Object(o) => Some(o.len()),
            _ => None,
        }
    }

    fn check(&self, expected: &str) -> Result<()> {
        if self.is_nil() {
            return Err(ClickqError::Conversion(format!(
                "cannot convert nil Value to {}",
                expected
            )));
        }
        Ok(())
    }

    fn type_name(&self) -> &'static str {
        match &self.inner {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "bool",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }

    pub fn as_f64(&self) -> Result<f64> {
        self.check("Float64")?;
        match &self.inner {
            JsonValue::Number(n) => n.as_f64().ok_or_else(|| {
                ClickqError::Conversion(format!("number {} is out of Float64 range", n))
            }),
            JsonValue::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            _ => Err(ClickqError::Conversion(format!(
                "cannot convert {} value to Float64",
                self.type_name()
            ))),
        }
    }

    pub fn as_f64_or(&self, default: f64) -> f64 {
        self.as_f64().unwrap_or(default)
    }

    pub fn as_i64(&self) -> Result<i64> {
        self.check("Int64")?;
        match &self.inner {
            JsonValue::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Ok(v)
                } else if let Some(v) = n.as_u64() {
                    Ok(v as i64)
                } else {
                    n.as_f64().map(|v| v as i64).ok_or_else(|| {
                        ClickqError::Conversion(format!("number {} is out of Int64 range", n))
                    })
                }
            }
            JsonValue::Bool(b) => Ok(i64::from(*b)),
            _ => Err(ClickqError::Conversion(format!(
                "cannot convert {} value to Int64",
                self.type_name()
            ))),
        }
    }

    pub fn as_i64_or(&self, default: i64) -> i64 {
        self.as_i64().unwrap_or(default)
    }

    /// Returns strings as-is and renders anything else as JSON text.
    pub fn as_string(&self) -> Result<String> {
        self.check("String")?;
        match &self.inner {
            JsonValue::String(s) => Ok(s.clone()),
            other => Ok(other.to_string()),
        }
    }

    pub fn as_string_or(&self, default: &str) -> String {
        self.as_string().unwrap_or_else(|_| default.to_string())
    }

    pub fn as_json(&self) -> &JsonValue {
        &self.inner
    }

    pub fn into_json(self) -> JsonValue {
        self.inner
    }
}

impl From<JsonValue> for Value {
    fn from(inner: JsonValue) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_coercion() {
        let v = Value::from_json("3.9").unwrap();
        assert_eq!(v.as_f64().unwrap(), 3.9);
        assert_eq!(v.as_i64().unwrap(), 3);

        let v = Value::from(json!(42));
        assert_eq!(v.as_f64().unwrap(), 42.0);
        assert_eq!(v.as_i64().unwrap(), 42);
    }

    #[test]
    fn test_bool_coercion() {
        assert_eq!(Value::from(json!(true)).as_i64().unwrap(), 1);
        assert_eq!(Value::from(json!(false)).as_f64().unwrap(), 0.0);
    }

    #[test]
    fn test_nil_value() {
        let v = Value::from_json("null").unwrap();
        assert!(v.is_nil());
        assert!(matches!(v.as_f64(), Err(ClickqError::Conversion(_))));
        assert_eq!(v.as_f64_or(1.5), 1.5);
        assert_eq!(v.as_i64_or(7), 7);
        assert_eq!(v.as_string_or("n/a"), "n/a");
    }

    #[test]
    fn test_string_value() {
        let v = Value::from(json!("abc"));
        assert_eq!(v.as_string().unwrap(), "abc");
        assert!(v.as_i64().is_err());
        assert_eq!(v.as_i64_or(-1), -1);

        assert_eq!(Value::from(json!(12)).as_string().unwrap(), "12");
        assert_eq!(Value::from(json!([1, 2])).as_string().unwrap(), "[1,2]");
    }

    #[test]
    fn test_len() {
        assert_eq!(Value::from(json!([1, 2, 3])).len(), Some(3));
        assert_eq!(Value::from(json!({"a": 1})).len(), Some(1));
        assert_eq!(Value::from(json!("abc")).len(), None);
    }

    #[test]
    fn test_serde_transparent() {
        let values: Vec<Value> = serde_json::from_str(r#"[1, "x", null]"#).unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(serde_json::to_string(&values).unwrap(), r#"[1,"x",null]"#);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Value::from_json("{"),
            Err(ClickqError::Serialization(_))
        ));
    }
}
