//! Render styles controlling how clauses are laid out.

use serde::{Deserialize, Serialize};

/// Layout configuration for rendering a SELECT statement.
///
/// Missing fields deserialize to the compact style, so a partial config only
/// needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Unit of indentation, repeated `indent_level` times
    pub indent: String,
    /// Current nesting depth
    pub indent_level: usize,
    pub clause_name_prefix: String,
    pub clause_name_suffix: String,
    pub argument_prefix: String,
    pub argument_suffix: String,
    /// Written between the arguments of a clause
    pub argument_delimiter: String,
    /// Line break around a nested sub-query body
    pub line_break: String,
}

impl RenderStyle {
    /// Single-line style: `SELECT a, b FROM t`.
    pub fn compact() -> Self {
        Self {
            indent: String::new(),
            indent_level: 0,
            clause_name_prefix: " ".to_string(),
            clause_name_suffix: " ".to_string(),
            argument_prefix: String::new(),
            argument_suffix: String::new(),
            argument_delimiter: ", ".to_string(),
            line_break: String::new(),
        }
    }

    /// Multi-line style: one clause keyword per line, arguments indented by a tab.
    pub fn pretty() -> Self {
        Self {
            indent: "\t".to_string(),
            indent_level: 0,
            clause_name_prefix: String::new(),
            clause_name_suffix: "\n".to_string(),
            argument_prefix: "\t".to_string(),
            argument_suffix: "\n".to_string(),
            argument_delimiter: ",".to_string(),
            line_break: "\n".to_string(),
        }
    }

    /// Returns a copy one nesting level deeper.
    pub fn nested(&self) -> Self {
        Self {
            indent_level: self.indent_level + 1,
            ..self.clone()
        }
    }

    /// The indentation for the current nesting depth.
    pub fn indentation(&self) -> String {
        self.indent.repeat(self.indent_level)
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::compact()
    }
}
