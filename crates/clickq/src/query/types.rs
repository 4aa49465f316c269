//! Query builder types and enums.

use serde::{Deserialize, Serialize};

/// Expression operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Logical AND
    And,
    /// Logical OR
    Or,
    /// Logical NOT
    Not,
    /// Equal (=)
    Eq,
    /// Not equal (!=)
    Ne,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Gte,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Lte,
    /// IN tuple
    In,
    /// NOT IN tuple
    NotIn,
}

impl Operator {
    /// Returns the SQL operator string.
    pub fn to_sql(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_sql())
    }
}

/// Sort order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Engine default, no suffix
    #[default]
    Default,
    /// Ascending order
    Asc,
    /// Descending order
    Desc,
}

impl OrderDirection {
    /// Returns the SQL order direction string, empty for the default direction.
    pub fn to_sql(&self) -> &'static str {
        match self {
            OrderDirection::Default => "",
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

/// Output format of a query, passed verbatim to the FORMAT clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    #[serde(rename = "CSV")]
    Csv,
    #[serde(rename = "CSVWithNames")]
    CsvWithNames,
    TabSeparated,
    TabSeparatedWithNames,
    #[serde(rename = "JSON")]
    Json,
    #[serde(rename = "JSONEachRow")]
    JsonEachRow,
    #[serde(rename = "JSONCompact")]
    JsonCompact,
    Pretty,
    Native,
    Values,
}

impl Format {
    /// Returns the format name as understood by the engine.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Csv => "CSV",
            Format::CsvWithNames => "CSVWithNames",
            Format::TabSeparated => "TabSeparated",
            Format::TabSeparatedWithNames => "TabSeparatedWithNames",
            Format::Json => "JSON",
            Format::JsonEachRow => "JSONEachRow",
            Format::JsonCompact => "JSONCompact",
            Format::Pretty => "Pretty",
            Format::Native => "Native",
            Format::Values => "Values",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
