//! Escaping for names and raw SQL embedded in generated TypeScript.
//!
//! Generated schema code embeds storage names inside single-quoted string
//! literals (`pgTable('users', ...)`) and raw SQL inside tagged template
//! literals (``sql`NEWID()` ``). Any value coming from the datamodel must be
//! escaped for the quoting style it lands in, otherwise a name such as
//! `O'Brien` would terminate the literal early and corrupt the module.

/// Quote characters used by the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    /// `'...'` string literal.
    Single,
    /// `` `...` `` template literal.
    Backtick,
}

impl Quote {
    fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Backtick => '`',
        }
    }
}

/// Escape `value` for embedding between `quote` characters.
///
/// Backslashes and the quote character are prefixed with a backslash. Inside
/// template literals `${` is escaped as well so the text is never interpolated.
pub fn escape(value: &str, quote: Quote) -> String {
    let quote_char = quote.as_char();
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            c if c == quote_char => {
                out.push('\\');
                out.push(c);
            }
            '$' if quote == Quote::Backtick && chars.peek() == Some(&'{') => {
                out.push_str("\\$");
            }
            c => out.push(c),
        }
    }

    out
}

/// Escape a storage name for a single-quoted literal.
pub fn escape_name(name: &str) -> String {
    escape(name, Quote::Single)
}

/// Render a single-quoted string literal: `'value'`.
pub fn quote_single(value: &str) -> String {
    format!("'{}'", escape_name(value))
}

/// Render a raw SQL expression as a `sql` tagged template literal.
pub fn sql_template(expression: &str) -> String {
    format!("sql`{}`", escape(expression, Quote::Backtick))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_name_unchanged() {
        assert_eq!(escape_name("users"), "users");
        assert_eq!(escape_name("my_table"), "my_table");
        assert_eq!(escape_name("日本語"), "日本語");
    }

    #[test]
    fn test_escape_single_quote() {
        assert_eq!(escape_name("O'Brien"), "O\\'Brien");
        assert_eq!(quote_single("a'b'c"), "'a\\'b\\'c'");
    }

    #[test]
    fn test_escape_backslash() {
        assert_eq!(escape_name("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_escape_only_target_quote() {
        assert_eq!(escape("say \"hi\"", Quote::Single), "say \"hi\"");
        assert_eq!(escape("it's `x`", Quote::Single), "it\\'s `x`");
        assert_eq!(escape("it's `x`", Quote::Backtick), "it's \\`x\\`");
    }

    #[test]
    fn test_sql_template_escapes_backtick_and_interpolation() {
        assert_eq!(sql_template("NEWID()"), "sql`NEWID()`");
        assert_eq!(sql_template("a`b"), "sql`a\\`b`");
        assert_eq!(sql_template("${evil}"), "sql`\\${evil}`");
        assert_eq!(sql_template("cost $5"), "sql`cost $5`");
    }

    #[test]
    fn test_injection_attempt_stays_inside_literal() {
        let quoted = quote_single("x'); drop table users; --");
        assert_eq!(quoted, "'x\\'); drop table users; --'");
    }
}
