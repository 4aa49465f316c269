//! SelectBuilder struct and its clause setters.

use std::sync::Arc;

use super::expression::{Expr, IntoExpr};
use super::from::{FromExpression, Table};
use super::style::RenderStyle;
use super::types::Format;

/// Fluent builder for SELECT statements.
///
/// Its zero value is a ready-to-use empty builder. SELECT, GROUP BY and ORDER BY
/// setters append; every other setter replaces the previous value. Nothing is
/// validated until [`SelectBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct SelectBuilder {
    /// SELECT items, rendered through `as_select` when available
    pub(crate) selects: Vec<Expr>,
    pub(crate) from: Option<Arc<dyn FromExpression>>,
    pub(crate) where_condition: Option<Expr>,
    pub(crate) group_by: Vec<Expr>,
    /// ORDER BY items, rendered through `as_order_by` when available
    pub(crate) order_by: Vec<Expr>,
    pub(crate) having: Option<Expr>,
    /// SAMPLE ratio
    pub(crate) sample: Option<f64>,
    pub(crate) limit: Option<u64>,
    pub(crate) offset: Option<u64>,
    pub(crate) format: Option<Format>,
    /// Style override; compact when unset
    pub(crate) style: Option<RenderStyle>,
}

impl SelectBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends items to the SELECT list.
    pub fn select<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoExpr,
    {
        self.selects.extend(values.into_iter().map(IntoExpr::into_expr));
        self
    }

    /// Sets the FROM source: a [`Table`], a builder or a built query.
    pub fn from<F>(mut self, source: F) -> Self
    where
        F: FromExpression + 'static,
    {
        self.from = Some(Arc::new(source));
        self
    }

    /// Sets the FROM source to a table name.
    pub fn from_table(self, name: impl Into<String>) -> Self {
        self.from(Table(name.into()))
    }

    /// Sets the SAMPLE ratio. Requires a FROM source.
    pub fn sample(mut self, ratio: f64) -> Self {
        self.sample = Some(ratio);
        self
    }

    /// Sets the WHERE condition.
    pub fn where_clause(mut self, condition: impl IntoExpr) -> Self {
        self.where_condition = Some(condition.into_expr());
        self
    }

    /// Appends GROUP BY items.
    pub fn group_by<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoExpr,
    {
        self.group_by.extend(values.into_iter().map(IntoExpr::into_expr));
        self
    }

    /// Appends ORDER BY items. Wrap items with `asc`/`desc` to set a direction.
    pub fn order_by<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoExpr,
    {
        self.order_by.extend(values.into_iter().map(IntoExpr::into_expr));
        self
    }

    /// Sets the HAVING condition.
    pub fn having(mut self, condition: impl IntoExpr) -> Self {
        self.having = Some(condition.into_expr());
        self
    }

    /// Sets LIMIT.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Sets OFFSET.
    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Sets the output FORMAT.
    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Switches between the pretty and the compact style.
    pub fn pretty_print(mut self, enabled: bool) -> Self {
        self.style = Some(if enabled {
            RenderStyle::pretty()
        } else {
            RenderStyle::compact()
        });
        self
    }

    /// Uses a custom render style.
    pub fn style(mut self, style: RenderStyle) -> Self {
        self.style = Some(style);
        self
    }
}

/// Shortcut for `SelectBuilder::new().select(values)`.
pub fn select<I>(values: I) -> SelectBuilder
where
    I: IntoIterator,
    I::Item: IntoExpr,
{
    SelectBuilder::new().select(values)
}
