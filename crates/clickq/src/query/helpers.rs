//! Query builder helper functions.

/// Escapes a string for embedding in a single-quoted literal.
///
/// Both `'` and `\` are backslash-escaped.
pub fn escape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\'' => result.push_str("\\'"),
            '\\' => result.push_str("\\\\"),
            _ => result.push(ch),
        }
    }
    result
}

/// Escapes and single-quotes a string literal.
pub fn quote_string(s: &str) -> String {
    format!("'{}'", escape_string(s))
}

/// Joins rendered items with `delimiter`.
pub(crate) fn join_rendered<T>(items: &[T], delimiter: &str, render: impl Fn(&T) -> String) -> String {
    let mut result = String::new();
    for (i, item) in items.iter().enumerate() {
        if i != 0 {
            result.push_str(delimiter);
        }
        result.push_str(&render(item));
    }
    result
}
