//! FROM sources: tables and nested queries.

use std::fmt::Debug;

use crate::Result;
use super::style::RenderStyle;

/// An expression usable in the FROM clause.
///
/// Anything that can act as a nested query implements this, customizing how it
/// looks when being selected from.
pub trait FromExpression: Debug + Send + Sync {
    fn from_expression(&self, style: &RenderStyle) -> Result<String>;

    /// Whether the source is a plain table name, rendered like any other clause argument.
    fn is_table(&self) -> bool {
        false
    }
}

/// A table name, used verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table(pub String);

impl FromExpression for Table {
    fn from_expression(&self, _style: &RenderStyle) -> Result<String> {
        Ok(self.0.clone())
    }

    fn is_table(&self) -> bool {
        true
    }
}

pub fn table(name: impl Into<String>) -> Table {
    Table(name.into())
}
