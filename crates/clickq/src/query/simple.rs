//! Flat, struct-based query requests with an optional time-series mode.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::{ClickqError, Result};
use super::builder::SelectBuilder;
use super::expression::{column, Expr};
use super::functions::func;
use super::operators::{and, greater_or_equal_than, less_than};
use super::select::SelectQuery;

/// Time-series settings for a [`SimpleQuery`].
#[derive(Debug, Clone, Default)]
pub struct TimeSeries {
    pub time_column: String,
    /// Time bucketing function applied to `time_column`, e.g. `toStartOfDay`
    pub granularity_function: String,
    /// Inclusive lower bound
    pub start_time: Option<DateTime<Utc>>,
    /// Exclusive upper bound
    pub end_time: Option<DateTime<Utc>>,
}

/// A flattened SELECT request that assembles a [`SelectBuilder`].
#[derive(Debug, Clone, Default)]
pub struct SimpleQuery {
    /// When set, time buckets are selected, grouped and ordered by, and the time
    /// range is added to WHERE
    pub time_series: Option<TimeSeries>,

    pub select: Vec<Expr>,
    /// Table name
    pub from: String,
    pub where_clause: Option<Expr>,
    pub group_by: Vec<Expr>,
    pub order_by: Vec<Expr>,
    pub having: Option<Expr>,
    /// Applied only when positive
    pub limit: Option<u64>,
    /// Applied only when positive
    pub offset: Option<u64>,
}

impl SimpleQuery {
    pub fn build(&self) -> Result<SelectQuery> {
        if self.select.is_empty() {
            return Err(ClickqError::Validation("no selects".to_string()));
        }
        if self.from.is_empty() {
            return Err(ClickqError::Validation("no from".to_string()));
        }
        debug!(
            table = %self.from,
            time_series = self.time_series.is_some(),
            "Assembling simple query"
        );

        let mut b = SelectBuilder::new()
            .select(self.select.iter())
            .from_table(self.from.clone())
            .group_by(self.group_by.iter())
            .order_by(self.order_by.iter());
        if let Some(condition) = &self.having {
            b = b.having(condition);
        }
        if let Some(limit) = self.limit.filter(|n| *n > 0) {
            b = b.limit(limit);
        }
        if let Some(offset) = self.offset.filter(|n| *n > 0) {
            b = b.offset(offset);
        }

        let mut wheres: Vec<Expr> = self.where_clause.iter().cloned().collect();
        if let Some(ts) = &self.time_series {
            let bucket = func(&ts.granularity_function, [column(&ts.time_column)]);
            b = b
                .select([bucket.clone()])
                .group_by([bucket.clone()])
                .order_by([bucket]);

            if let Some(start) = ts.start_time {
                wheres.push(greater_or_equal_than(column(&ts.time_column), start));
            }
            if let Some(end) = ts.end_time {
                wheres.push(less_than(column(&ts.time_column), end));
            }
        }
        if !wheres.is_empty() {
            b = b.where_clause(and(wheres));
        }

        b.build()
    }

    pub fn build_string(&self) -> Result<String> {
        self.build().map(SelectQuery::into_string)
    }
}
