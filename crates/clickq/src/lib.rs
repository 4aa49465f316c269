//! Fluent SELECT query builder for columnar analytics SQL dialects.
//!
//! This crate only produces query text. It never connects to a database or
//! executes anything.
//!
//! # Architecture
//!
//! ```text
//!   column / literal / quoted        leaf expressions
//!           |
//!   and / equal / in_ / func / as_   combinators
//!           |
//!   SelectBuilder                    clause accumulation
//!           |
//!   build() -> SelectQuery           validation + rendering
//! ```
//!
//! # Key Features
//!
//! - **Clause-aware rendering**: `as_` binds a name in SELECT and renders only
//!   the name elsewhere; `asc`/`desc` add a direction only inside ORDER BY.
//! - **Nested queries**: a builder or a built query can be the FROM source of
//!   another query, parenthesized and reindented.
//! - **Render styles**: compact single-line output or pretty multi-line output,
//!   or a custom [`query::RenderStyle`] loaded through serde.
//! - **Time-series requests**: [`query::SimpleQuery`] adds time buckets and
//!   time range filters to a flat request.
//!
//! # Escaping
//!
//! Only string literals created with [`query::quoted`] are escaped. Column
//! names and raw literals are embedded verbatim.
//!
//! # Thread Safety
//!
//! Expressions and [`query::SelectQuery`] are `Send + Sync` and immutable once
//! built. A `SelectBuilder` is consumed by its setters, so it cannot be configured
//! from two places at once.

/// Expression AST, clause capabilities, render styles and the SELECT builder.
pub mod query;

/// Dynamic accessor for JSON-decoded result values.
pub mod value;

pub use query::{
    Expr, Expression, Format, FromExpression, OrderDirection, RenderStyle, SelectBuilder,
    SelectQuery, SimpleQuery, TimeSeries,
};
pub use value::Value;

pub use clickq_common::{ClickqError, Result};
