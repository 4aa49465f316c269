//! Expression capability traits and leaf nodes.

use std::fmt::Debug;
use std::sync::Arc;

/// A SQL expression AST node that renders itself to an operand token.
///
/// Clause-specific rendering is opt-in: an expression that looks different in the
/// SELECT list or in ORDER BY overrides [`Expression::as_select`] or
/// [`Expression::as_order_by`]. Everything else falls back to [`Expression::expression`].
pub trait Expression: Debug + Send + Sync {
    /// Renders the expression as a flat operand token.
    fn expression(&self) -> String;

    /// Returns the SELECT-list rendering capability, if this expression has one.
    fn as_select(&self) -> Option<&dyn SelectExpression> {
        None
    }

    /// Returns the ORDER BY rendering capability, if this expression has one.
    fn as_order_by(&self) -> Option<&dyn OrderByExpression> {
        None
    }
}

/// An expression that customizes how it looks when being selected.
pub trait SelectExpression: Expression {
    fn select_expression(&self) -> String;
}

/// An expression that customizes how it looks when being ordered by.
pub trait OrderByExpression: Expression {
    fn order_by_expression(&self) -> String;
}

/// Shared handle to an expression node.
///
/// Cloning is cheap, so the same alias may be selected, ordered by and filtered on.
pub type Expr = Arc<dyn Expression>;

/// Conversion into an [`Expr`].
///
/// Existing expressions pass through untouched; plain values become literals.
pub trait IntoExpr {
    fn into_expr(self) -> Expr;
}

impl IntoExpr for Expr {
    fn into_expr(self) -> Expr {
        self
    }
}

impl IntoExpr for &Expr {
    fn into_expr(self) -> Expr {
        Arc::clone(self)
    }
}

/// A table column name, without quotations.
///
/// Callers are responsible for passing a valid unquoted identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column(pub String);

impl Expression for Column {
    fn expression(&self) -> String {
        self.0.clone()
    }
}

impl IntoExpr for Column {
    fn into_expr(self) -> Expr {
        Arc::new(self)
    }
}

/// Creates a column reference.
pub fn column(name: impl Into<String>) -> Expr {
    Arc::new(Column(name.into()))
}

/// Reference to a name bound with `AS` earlier in the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias(pub String);

impl Expression for Alias {
    fn expression(&self) -> String {
        self.0.clone()
    }
}

/// Creates an alias reference, rendering only the visible name.
pub fn alias(name: impl Into<String>) -> Expr {
    Arc::new(Alias(name.into()))
}
