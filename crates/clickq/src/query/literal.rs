//! Literal values and their conversion into expressions.

use std::sync::Arc;
use std::time::SystemTime;

use chrono::{DateTime, TimeZone, Utc};

use super::expression::{Expr, Expression, IntoExpr};
use super::helpers::quote_string;

/// A typed literal payload.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int(i64),
    UInt(u64),
    Float(f64),
    Float32(f32),
    Bool(bool),
    Str(String),
    /// Seconds since the Unix epoch. DateTime columns have one second resolution.
    Timestamp(i64),
}

macro_rules! literal_from {
    ($variant:ident: $($t:ty),+) => {
        $(
            impl From<$t> for LiteralValue {
                fn from(v: $t) -> Self {
                    LiteralValue::$variant(v.into())
                }
            }
        )+
    };
}

literal_from!(Int: i8, i16, i32, i64);
literal_from!(UInt: u8, u16, u32, u64);
literal_from!(Float: f64);
literal_from!(Float32: f32);
literal_from!(Bool: bool);
literal_from!(Str: String, &str);

impl From<isize> for LiteralValue {
    fn from(v: isize) -> Self {
        LiteralValue::Int(v as i64)
    }
}

impl From<usize> for LiteralValue {
    fn from(v: usize) -> Self {
        LiteralValue::UInt(v as u64)
    }
}

impl From<&String> for LiteralValue {
    fn from(v: &String) -> Self {
        LiteralValue::Str(v.clone())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for LiteralValue {
    fn from(v: DateTime<Tz>) -> Self {
        LiteralValue::Timestamp(v.timestamp())
    }
}

impl From<SystemTime> for LiteralValue {
    fn from(v: SystemTime) -> Self {
        LiteralValue::Timestamp(DateTime::<Utc>::from(v).timestamp())
    }
}

/// A literal expression node.
///
/// String payloads render raw unless `quote_string` is set; every other payload
/// uses its default textual formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    value: LiteralValue,
    quote_string: bool,
}

impl LiteralExpr {
    pub fn new(value: LiteralValue, quote_string: bool) -> Self {
        Self { value, quote_string }
    }

    pub fn value(&self) -> &LiteralValue {
        &self.value
    }
}

impl Expression for LiteralExpr {
    fn expression(&self) -> String {
        match &self.value {
            LiteralValue::Str(s) if self.quote_string => quote_string(s),
            LiteralValue::Str(s) => s.clone(),
            LiteralValue::Int(v) => v.to_string(),
            LiteralValue::UInt(v) => v.to_string(),
            LiteralValue::Float(v) => v.to_string(),
            LiteralValue::Float32(v) => v.to_string(),
            LiteralValue::Bool(v) => v.to_string(),
            LiteralValue::Timestamp(v) => v.to_string(),
        }
    }
}

macro_rules! into_literal_expr {
    ($($t:ty),+) => {
        $(
            impl IntoExpr for $t {
                fn into_expr(self) -> Expr {
                    Arc::new(LiteralExpr::new(self.into(), false))
                }
            }
        )+
    };
}

into_literal_expr!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool,
    String, &str, &String, SystemTime
);

impl<Tz: TimeZone> IntoExpr for DateTime<Tz> {
    fn into_expr(self) -> Expr {
        Arc::new(LiteralExpr::new(self.into(), false))
    }
}

impl IntoExpr for LiteralValue {
    fn into_expr(self) -> Expr {
        Arc::new(LiteralExpr::new(self, false))
    }
}

/// Converts a value to an expression.
///
/// An existing [`Expr`] is returned verbatim. Strings are embedded raw, so
/// `literal("a")` renders `a`; use [`quoted`] for string data.
pub fn literal(v: impl IntoExpr) -> Expr {
    v.into_expr()
}

/// Creates a string literal, escaping `'` and `\` and wrapping it in single quotes.
pub fn quoted(v: impl AsRef<str>) -> Expr {
    Arc::new(LiteralExpr::new(
        LiteralValue::Str(v.as_ref().to_string()),
        true,
    ))
}

/// Converts a list of values to literal expressions.
///
/// `quote` only affects string values.
pub fn literals<T, I>(values: I, quote: bool) -> Vec<Expr>
where
    T: Into<LiteralValue>,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .map(|v| Arc::new(LiteralExpr::new(v.into(), quote)) as Expr)
        .collect()
}
