//! SELECT rendering, alias binding and the sealed query type.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::{ClickqError, Result};
use super::builder::SelectBuilder;
use super::expression::{Expr, Expression, IntoExpr, SelectExpression};
use super::from::FromExpression;
use super::printer::SqlPrinter;
use super::style::RenderStyle;

/// `left AS right`
///
/// In the SELECT list it binds the name; anywhere else it renders only the name,
/// so the same object can be reused in ORDER BY or HAVING.
#[derive(Debug, Clone)]
pub struct AsExpression {
    pub left: Expr,
    pub right: Expr,
}

impl Expression for AsExpression {
    fn expression(&self) -> String {
        self.right.expression()
    }

    fn as_select(&self) -> Option<&dyn SelectExpression> {
        Some(self)
    }
}

impl SelectExpression for AsExpression {
    fn select_expression(&self) -> String {
        format!("{} AS {}", self.left.expression(), self.right.expression())
    }
}

/// Binds `right` as the display name of `left`.
///
/// # Panics
///
/// Panics if either operand renders to an empty string.
pub fn as_(left: impl IntoExpr, right: impl IntoExpr) -> Expr {
    let left = left.into_expr();
    let right = right.into_expr();
    if left.expression().is_empty() {
        panic!("empty left value in AS operator");
    }
    if right.expression().is_empty() {
        panic!("empty right value in AS operator");
    }
    Arc::new(AsExpression { left, right })
}

impl SelectBuilder {
    /// Renders the query with the configured style, compact by default.
    pub fn build_string(&self) -> Result<String> {
        self.render(&self.effective_style())
    }

    /// Validates and renders the query, sealing it into an immutable [`SelectQuery`].
    ///
    /// The builder itself is left untouched, so building twice yields identical text.
    pub fn build(&self) -> Result<SelectQuery> {
        match self.build_string() {
            Ok(sql) => {
                debug!(
                    selects = self.selects.len(),
                    nested = self.from.as_ref().is_some_and(|f| !f.is_table()),
                    pretty = self.style.as_ref().is_some_and(|s| *s == RenderStyle::pretty()),
                    len = sql.len(),
                    "Built SELECT query"
                );
                Ok(SelectQuery {
                    builder: self.clone(),
                    sql,
                })
            }
            Err(e) => {
                debug!(error = %e, "SELECT query rejected");
                Err(e)
            }
        }
    }

    fn effective_style(&self) -> RenderStyle {
        self.style.clone().unwrap_or_default()
    }

    /// Renders with `style`, ignoring the builder's own style setting.
    ///
    /// Nested queries go through here so they follow the outer query's layout.
    pub(crate) fn render(&self, style: &RenderStyle) -> Result<String> {
        if self.selects.is_empty() {
            return Err(ClickqError::Validation("no selects".to_string()));
        }
        if let Some(ratio) = self.sample {
            if self.from.is_none() {
                return Err(ClickqError::Validation(
                    "SAMPLE is present while FROM is absent".to_string(),
                ));
            }
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(ClickqError::Validation(format!(
                    "SAMPLE ratio must be positive, got {}",
                    ratio
                )));
            }
        }

        let mut p = SqlPrinter::new(style);

        p.begin_clause("SELECT");
        p.add_arguments(self.selects.iter().map(|e| match e.as_select() {
            Some(s) => s.select_expression(),
            None => e.expression(),
        }));

        if let Some(from) = &self.from {
            let rendered = from
                .from_expression(style)
                .map_err(|e| ClickqError::Query(format!("build FROM clause: {}", e)))?;
            p.begin_clause("FROM");
            p.add_argument_with_prefix(&rendered, true, from.is_table());
        }

        if let Some(ratio) = self.sample {
            p.begin_clause("SAMPLE");
            p.add_argument(&ratio.to_string(), true);
        }

        if let Some(condition) = &self.where_condition {
            p.begin_clause("WHERE");
            p.add_argument(&condition.expression(), true);
        }

        if !self.group_by.is_empty() {
            p.begin_clause("GROUP BY");
            p.add_arguments(self.group_by.iter().map(|e| e.expression()));
        }

        if let Some(condition) = &self.having {
            p.begin_clause("HAVING");
            p.add_argument(&condition.expression(), true);
        }

        if !self.order_by.is_empty() {
            p.begin_clause("ORDER BY");
            p.add_arguments(self.order_by.iter().map(|e| match e.as_order_by() {
                Some(o) => o.order_by_expression(),
                None => e.expression(),
            }));
        }

        if let Some(limit) = self.limit {
            p.begin_clause("LIMIT");
            p.add_argument(&limit.to_string(), true);
        }

        if let Some(offset) = self.offset {
            p.begin_clause("OFFSET");
            p.add_argument(&offset.to_string(), true);
        }

        if let Some(format) = self.format {
            p.begin_clause("FORMAT");
            p.add_argument(format.as_str(), true);
        }

        Ok(p.finish())
    }

    /// Renders the query as a parenthesized block one level deeper than `style`.
    pub(crate) fn render_nested(&self, style: &RenderStyle) -> Result<String> {
        let inner = style.nested();
        let body = self.render(&inner)?;
        Ok(format!(
            "({}{}{}{}{})",
            style.line_break,
            inner.indentation(),
            body,
            style.line_break,
            style.indentation()
        ))
    }
}

impl FromExpression for SelectBuilder {
    fn from_expression(&self, style: &RenderStyle) -> Result<String> {
        self.render_nested(style)
    }
}

/// A complete, valid and unmodifiable SELECT query.
///
/// Produced only by [`SelectBuilder::build`]. It can be rendered again or used
/// as the FROM source of another query.
#[derive(Debug, Clone)]
pub struct SelectQuery {
    builder: SelectBuilder,
    sql: String,
}

impl SelectQuery {
    /// The SQL text rendered at build time.
    pub fn as_str(&self) -> &str {
        &self.sql
    }

    pub fn into_string(self) -> String {
        self.sql
    }
}

impl fmt::Display for SelectQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

impl AsRef<str> for SelectQuery {
    fn as_ref(&self) -> &str {
        &self.sql
    }
}

impl FromExpression for SelectQuery {
    fn from_expression(&self, style: &RenderStyle) -> Result<String> {
        self.builder.render_nested(style)
    }
}
