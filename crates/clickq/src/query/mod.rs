//! SELECT query builder.
//!
//! Expressions are built bottom-up with free functions, handed to a
//! [`SelectBuilder`] and sealed into a [`SelectQuery`] by `build()`.
//!
//! # Examples
//!
//! ## Aggregation with an alias
//!
//! ```
//! use clickq::query::*;
//!
//! let avg_score = as_(avg(column("score")), alias("avg_score"));
//! let query = select([avg_score.clone()])
//!     .from_table("tbl")
//!     .where_clause(and([
//!         greater_or_equal_than(column("date"), quoted("2025-01-01")),
//!         less_than(column("date"), quoted("2025-02-01")),
//!     ]))
//!     .group_by([column("date")])
//!     .having(greater_than(avg_score.clone(), 60))
//!     .order_by([desc(avg_score)])
//!     .limit(5)
//!     .build()?;
//!
//! assert_eq!(
//!     query.as_str(),
//!     "SELECT avg(score) AS avg_score FROM tbl \
//!      WHERE ((date >= '2025-01-01') AND (date < '2025-02-01')) \
//!      GROUP BY date HAVING (avg_score > 60) ORDER BY avg_score DESC LIMIT 5"
//! );
//! # Ok::<(), clickq::ClickqError>(())
//! ```
//!
//! ## Nested query
//!
//! ```
//! use clickq::query::*;
//!
//! let inner = select([column("id")]).from_table("events").build()?;
//! let outer = select([count()]).from(inner).pretty_print(true).build()?;
//!
//! assert_eq!(
//!     outer.as_str(),
//!     "SELECT\n\tcount()\nFROM\n(\n\tSELECT\n\t\tid\n\tFROM\n\t\tevents\n)"
//! );
//! # Ok::<(), clickq::ClickqError>(())
//! ```

mod types;
mod expression;
mod literal;
mod operators;
mod functions;
mod order;
mod from;
mod style;
mod printer;
mod helpers;
mod builder;
mod select;
mod simple;


// Re-export all public types
pub use types::{Format, Operator, OrderDirection};
pub use expression::{
    alias, column, Alias, Column, Expr, Expression, IntoExpr, OrderByExpression,
    SelectExpression,
};
pub use literal::{literal, literals, quoted, LiteralExpr, LiteralValue};
pub use operators::{
    and, concatenate, equal, greater_or_equal_than, greater_than, in_, less_or_equal_than,
    less_than, not_equal, not_in, or, tuple, BinaryExpression, Tuple,
};
pub use functions::{avg, count, count_if, func, if_, is_not_null, sum, FunctionCall};
pub use order::{asc, desc, order, OrderByExpr};
pub use from::{table, FromExpression, Table};
pub use style::RenderStyle;
pub use helpers::{escape_string, quote_string};
pub use builder::{select, SelectBuilder};
pub use select::{as_, AsExpression, SelectQuery};
pub use simple::{SimpleQuery, TimeSeries};
