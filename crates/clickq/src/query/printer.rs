//! Low-level clause emitter shared by every clause.

use super::style::RenderStyle;

pub(crate) struct SqlPrinter<'a> {
    buf: String,
    style: &'a RenderStyle,
    indentation: String,
}

impl<'a> SqlPrinter<'a> {
    pub(crate) fn new(style: &'a RenderStyle) -> Self {
        Self {
            buf: String::new(),
            style,
            indentation: style.indentation(),
        }
    }

    pub(crate) fn begin_clause(&mut self, name: &str) {
        self.buf.push_str(&self.indentation);
        self.buf.push_str(&self.style.clause_name_prefix);
        self.buf.push_str(name);
        self.buf.push_str(&self.style.clause_name_suffix);
    }

    pub(crate) fn add_argument(&mut self, v: &str, last: bool) {
        self.add_argument_with_prefix(v, last, true);
    }

    /// Emits a clause argument; `prefix` controls whether the style's argument
    /// prefix is written. Sub-queries frame their own indentation.
    pub(crate) fn add_argument_with_prefix(&mut self, v: &str, last: bool, prefix: bool) {
        self.buf.push_str(&self.indentation);
        if prefix {
            self.buf.push_str(&self.style.argument_prefix);
        }
        self.buf.push_str(v);
        if !last {
            self.buf.push_str(&self.style.argument_delimiter);
        }
        self.buf.push_str(&self.style.argument_suffix);
    }

    /// Emits every item of a list clause, marking the final one as last.
    pub(crate) fn add_arguments<I>(&mut self, items: I)
    where
        I: ExactSizeIterator<Item = String>,
    {
        let len = items.len();
        for (i, v) in items.enumerate() {
            self.add_argument(&v, i + 1 == len);
        }
    }

    pub(crate) fn finish(self) -> String {
        self.buf.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_clause() {
        let style = RenderStyle::compact();
        let mut p = SqlPrinter::new(&style);
        p.begin_clause("SELECT");
        p.add_argument("a", false);
        p.add_argument("b", true);
        p.begin_clause("FROM");
        p.add_argument("t", true);
        assert_eq!(p.finish(), "SELECT a, b FROM t");
    }

    #[test]
    fn test_pretty_clause_nested_level() {
        let style = RenderStyle::pretty().nested();
        let mut p = SqlPrinter::new(&style);
        p.begin_clause("SELECT");
        p.add_arguments(vec!["a".to_string(), "b".to_string()].into_iter());
        assert_eq!(p.finish(), "SELECT\n\t\ta,\n\t\tb");
    }

    #[test]
    fn test_argument_without_prefix() {
        let style = RenderStyle::pretty();
        let mut p = SqlPrinter::new(&style);
        p.begin_clause("FROM");
        p.add_argument_with_prefix("(x)", true, false);
        assert_eq!(p.finish(), "FROM\n(x)");
    }
}
