//! Function calls and popular SQL functions.

use std::sync::Arc;

use super::expression::{Expr, Expression, IntoExpr};
use super::helpers::join_rendered;

/// `name(arg, arg, ...)`
#[derive(Debug, Clone)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expr>,
}

impl Expression for FunctionCall {
    fn expression(&self) -> String {
        format!("{}({})", self.name, join_rendered(&self.args, ", ", |e| e.expression()))
    }
}

/// Calls the function `name` with `args`.
pub fn func<I>(name: impl Into<String>, args: I) -> Expr
where
    I: IntoIterator,
    I::Item: IntoExpr,
{
    Arc::new(FunctionCall {
        name: name.into(),
        args: args.into_iter().map(IntoExpr::into_expr).collect(),
    })
}

pub fn sum(v: impl IntoExpr) -> Expr {
    func("sum", [v.into_expr()])
}

pub fn avg(v: impl IntoExpr) -> Expr {
    func("avg", [v.into_expr()])
}

pub fn count() -> Expr {
    func("count", Vec::<Expr>::new())
}

pub fn count_if(v: impl IntoExpr) -> Expr {
    func("countIf", [v.into_expr()])
}

pub fn if_(cond: impl IntoExpr, then: impl IntoExpr, otherwise: impl IntoExpr) -> Expr {
    func("if", [cond.into_expr(), then.into_expr(), otherwise.into_expr()])
}

pub fn is_not_null(v: impl IntoExpr) -> Expr {
    func("isNotNull", [v.into_expr()])
}
