//! ORDER BY direction wrappers.

use std::sync::Arc;

use super::expression::{Expr, Expression, IntoExpr, OrderByExpression};
use super::types::OrderDirection;

/// An expression tagged with a sort direction.
///
/// Outside ORDER BY it renders exactly like the wrapped expression.
#[derive(Debug, Clone)]
pub struct OrderByExpr {
    pub expression: Expr,
    pub direction: OrderDirection,
}

impl Expression for OrderByExpr {
    fn expression(&self) -> String {
        self.expression.expression()
    }

    fn as_order_by(&self) -> Option<&dyn OrderByExpression> {
        Some(self)
    }
}

impl OrderByExpression for OrderByExpr {
    fn order_by_expression(&self) -> String {
        let base = self.expression.expression();
        match self.direction {
            OrderDirection::Default => base,
            direction => format!("{} {}", base, direction.to_sql()),
        }
    }
}

/// Orders by `v` in the given direction.
pub fn order(v: impl IntoExpr, direction: OrderDirection) -> Expr {
    Arc::new(OrderByExpr {
        expression: v.into_expr(),
        direction,
    })
}

pub fn asc(v: impl IntoExpr) -> Expr {
    order(v, OrderDirection::Asc)
}

pub fn desc(v: impl IntoExpr) -> Expr {
    order(v, OrderDirection::Desc)
}
