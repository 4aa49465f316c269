//! Logical, comparison and membership combinators.

use std::sync::Arc;

use super::expression::{Expr, Expression, IntoExpr, SelectExpression};
use super::helpers::join_rendered;
use super::types::Operator;

const ERR_EMPTY_SUBEXPRESSIONS: &str = "empty subexpressions";
const ERR_EMPTY_TUPLE: &str = "tuple must have at least one element";

/// `(left OP right)`
#[derive(Debug, Clone)]
pub struct BinaryExpression {
    pub operator: Operator,
    pub left: Expr,
    pub right: Expr,
}

impl BinaryExpression {
    pub fn new(operator: Operator, left: impl IntoExpr, right: impl IntoExpr) -> Self {
        Self {
            operator,
            left: left.into_expr(),
            right: right.into_expr(),
        }
    }
}

impl Expression for BinaryExpression {
    fn expression(&self) -> String {
        format!(
            "({} {} {})",
            self.left.expression(),
            self.operator.to_sql(),
            self.right.expression()
        )
    }
}

/// Two or more operands joined with the same operator.
#[derive(Debug, Clone)]
struct ConcatenatedExpression {
    operator: Operator,
    // always holds at least two operands
    operands: Vec<Expr>,
}

impl Expression for ConcatenatedExpression {
    fn expression(&self) -> String {
        let delimiter = format!(" {} ", self.operator.to_sql());
        format!(
            "({})",
            join_rendered(&self.operands, &delimiter, |e| e.expression())
        )
    }

    fn as_select(&self) -> Option<&dyn SelectExpression> {
        Some(self)
    }
}

impl SelectExpression for ConcatenatedExpression {
    fn select_expression(&self) -> String {
        self.expression()
    }
}

/// Joins operands with `operator`.
///
/// A single operand is returned unchanged.
///
/// # Panics
///
/// Panics if `operands` is empty.
pub fn concatenate<I>(operator: Operator, operands: I) -> Expr
where
    I: IntoIterator,
    I::Item: IntoExpr,
{
    let mut operands: Vec<Expr> = operands.into_iter().map(IntoExpr::into_expr).collect();
    match operands.len() {
        0 => panic!("{}", ERR_EMPTY_SUBEXPRESSIONS),
        1 => operands.remove(0),
        _ => Arc::new(ConcatenatedExpression { operator, operands }) as Expr,
    }
}

pub fn and<I>(operands: I) -> Expr
where
    I: IntoIterator,
    I::Item: IntoExpr,
{
    concatenate(Operator::And, operands)
}

pub fn or<I>(operands: I) -> Expr
where
    I: IntoIterator,
    I::Item: IntoExpr,
{
    concatenate(Operator::Or, operands)
}

fn binary(operator: Operator, l: impl IntoExpr, r: impl IntoExpr) -> Expr {
    Arc::new(BinaryExpression::new(operator, l, r))
}

pub fn equal(l: impl IntoExpr, r: impl IntoExpr) -> Expr {
    binary(Operator::Eq, l, r)
}

pub fn not_equal(l: impl IntoExpr, r: impl IntoExpr) -> Expr {
    binary(Operator::Ne, l, r)
}

pub fn greater_than(l: impl IntoExpr, r: impl IntoExpr) -> Expr {
    binary(Operator::Gt, l, r)
}

pub fn greater_or_equal_than(l: impl IntoExpr, r: impl IntoExpr) -> Expr {
    binary(Operator::Gte, l, r)
}

pub fn less_or_equal_than(l: impl IntoExpr, r: impl IntoExpr) -> Expr {
    binary(Operator::Lte, l, r)
}

pub fn less_than(l: impl IntoExpr, r: impl IntoExpr) -> Expr {
    binary(Operator::Lt, l, r)
}

/// A tuple object, e.g. the right-hand side of `IN`.
///
/// A tuple must contain at least one element; rendering an empty one panics.
#[derive(Debug, Clone, Default)]
pub struct Tuple(pub Vec<Expr>);

impl Tuple {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoExpr,
    {
        Tuple(items.into_iter().map(IntoExpr::into_expr).collect())
    }

    fn must_valid(&self) {
        if self.0.is_empty() {
            panic!("{}", ERR_EMPTY_TUPLE);
        }
    }
}

impl Expression for Tuple {
    fn expression(&self) -> String {
        self.must_valid();
        format!("({})", join_rendered(&self.0, ", ", |e| e.expression()))
    }

    fn as_select(&self) -> Option<&dyn SelectExpression> {
        Some(self)
    }
}

impl SelectExpression for Tuple {
    fn select_expression(&self) -> String {
        self.expression()
    }
}

impl IntoExpr for Tuple {
    fn into_expr(self) -> Expr {
        Arc::new(self)
    }
}

pub fn tuple<I>(items: I) -> Tuple
where
    I: IntoIterator,
    I::Item: IntoExpr,
{
    Tuple::new(items)
}

pub fn in_(v: impl IntoExpr, ary: Tuple) -> Expr {
    binary(Operator::In, v, ary)
}

pub fn not_in(v: impl IntoExpr, ary: Tuple) -> Expr {
    binary(Operator::NotIn, v, ary)
}
