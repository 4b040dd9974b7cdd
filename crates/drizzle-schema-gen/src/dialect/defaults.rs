//! Default-value translation.
//!
//! Defaults are translated by walking [`DEFAULT_RULES`] in order; the first
//! rule whose predicate accepts the default renders the column modifier.
//! Dialects only contribute their [`DefaultIdioms`].

use crate::core::identifier::sql_template;
use crate::core::imports::Imports;
use crate::core::schema::{DefaultGenerator, DefaultValue};
use crate::core::value::{format_argument, format_call, format_literal, is_truthy};
use crate::error::{GeneratorError, Result};

/// Shared runtime helper for raw SQL fragments.
pub const SQL_SYMBOL: &str = "sql";

/// How a dialect spells "current timestamp" as a column default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NowIdiom {
    /// Dedicated column method, e.g. `.defaultNow()`.
    Modifier(&'static str),
    /// Raw SQL passed to `.default(sql...)`.
    Sql(&'static str),
}

/// Per-dialect default idioms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultIdioms {
    pub now: NowIdiom,
    /// Modifier for `autoincrement()`. `None` when the type mapper already
    /// encodes it (postgres `serial`) or the backend needs nothing (sqlite).
    pub autoincrement: Option<&'static str>,
    /// SQL used for `dbgenerated()` without an expression.
    pub generated_fallback: &'static str,
    /// Native function for `uuid()` generators, if the backend has one.
    pub uuid_function: Option<&'static str>,
    /// Whether list literals are accepted as defaults.
    pub array_defaults: bool,
}

/// Dialect facts available to the rules.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub dialect: &'a str,
    pub display_name: &'a str,
    pub idioms: &'a DefaultIdioms,
}

type Predicate = fn(&DefaultValue) -> bool;
type Render = fn(&DefaultValue, &RuleContext<'_>, &mut Imports) -> Result<Option<String>>;

/// One entry of the default rule table.
#[derive(Clone, Copy)]
pub struct DefaultRule {
    pub name: &'static str,
    pub applies: Predicate,
    pub render: Render,
}

impl std::fmt::Debug for DefaultRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultRule").field("name", &self.name).finish()
    }
}

/// Ordered default rules. First match wins.
pub const DEFAULT_RULES: &[DefaultRule] = &[
    DefaultRule {
        name: "literal",
        applies: is_scalar_literal,
        render: render_literal,
    },
    DefaultRule {
        name: "list",
        applies: is_list_literal,
        render: render_list,
    },
    DefaultRule {
        name: "now",
        applies: |d| generator_named(d, "now"),
        render: render_now,
    },
    DefaultRule {
        name: "autoincrement",
        applies: |d| generator_named(d, "autoincrement"),
        render: render_autoincrement,
    },
    DefaultRule {
        name: "dbgenerated",
        applies: |d| generator_named(d, "dbgenerated"),
        render: render_dbgenerated,
    },
    DefaultRule {
        name: "uuid",
        applies: |d| generator(d).is_some_and(|g| is_uuid_generator(&g.name)),
        render: render_uuid,
    },
    DefaultRule {
        name: "generic",
        applies: |d| generator(d).is_some(),
        render: render_generic,
    },
];

/// Translate a default into a column modifier such as `.default(0)`.
///
/// Returns `Ok(None)` when the dialect expresses the default elsewhere.
pub fn translate(
    default: &DefaultValue,
    ctx: &RuleContext<'_>,
    imports: &mut Imports,
) -> Result<Option<String>> {
    match DEFAULT_RULES.iter().find(|rule| (rule.applies)(default)) {
        Some(rule) => (rule.render)(default, ctx, imports),
        None => Ok(None),
    }
}

/// Whether the generator name has the shape `uuid(<digits>)`.
pub fn is_uuid_generator(name: &str) -> bool {
    name.strip_prefix("uuid(")
        .and_then(|rest| rest.strip_suffix(')'))
        .is_some_and(|digits| digits.chars().all(|c| c.is_ascii_digit()))
}

fn generator(default: &DefaultValue) -> Option<&DefaultGenerator> {
    match default {
        DefaultValue::Generator(g) => Some(g),
        DefaultValue::Literal(_) => None,
    }
}

fn generator_named(default: &DefaultValue, name: &str) -> bool {
    generator(default).is_some_and(|g| g.name == name)
}

fn is_scalar_literal(default: &DefaultValue) -> bool {
    matches!(default, DefaultValue::Literal(v) if !v.is_array())
}

fn is_list_literal(default: &DefaultValue) -> bool {
    matches!(default, DefaultValue::Literal(v) if v.is_array())
}

fn raw_sql(expression: &str, imports: &mut Imports) -> String {
    imports.use_runtime(SQL_SYMBOL);
    format!(".default({})", sql_template(expression))
}

fn render_literal(
    default: &DefaultValue,
    _ctx: &RuleContext<'_>,
    _imports: &mut Imports,
) -> Result<Option<String>> {
    match default {
        DefaultValue::Literal(value) => Ok(Some(format!(".default({})", format_literal(value)))),
        DefaultValue::Generator(_) => Ok(None),
    }
}

fn render_list(
    default: &DefaultValue,
    ctx: &RuleContext<'_>,
    imports: &mut Imports,
) -> Result<Option<String>> {
    if !ctx.idioms.array_defaults {
        return Err(GeneratorError::unsupported_default(
            ctx.dialect,
            format!("{} doesn't support array defaults", ctx.display_name),
        ));
    }
    render_literal(default, ctx, imports)
}

fn render_now(
    _default: &DefaultValue,
    ctx: &RuleContext<'_>,
    imports: &mut Imports,
) -> Result<Option<String>> {
    let modifier = match ctx.idioms.now {
        NowIdiom::Modifier(method) => method.to_string(),
        NowIdiom::Sql(expression) => raw_sql(expression, imports),
    };
    Ok(Some(modifier))
}

fn render_autoincrement(
    _default: &DefaultValue,
    ctx: &RuleContext<'_>,
    _imports: &mut Imports,
) -> Result<Option<String>> {
    Ok(ctx.idioms.autoincrement.map(str::to_string))
}

fn render_dbgenerated(
    default: &DefaultValue,
    ctx: &RuleContext<'_>,
    imports: &mut Imports,
) -> Result<Option<String>> {
    let expression = generator(default)
        .and_then(|g| g.args.first())
        .filter(|arg| is_truthy(arg))
        .map(format_argument)
        .unwrap_or_else(|| ctx.idioms.generated_fallback.to_string());
    Ok(Some(raw_sql(&expression, imports)))
}

fn render_uuid(
    default: &DefaultValue,
    ctx: &RuleContext<'_>,
    imports: &mut Imports,
) -> Result<Option<String>> {
    match ctx.idioms.uuid_function {
        Some(function) => Ok(Some(raw_sql(function, imports))),
        None => render_generic(default, ctx, imports),
    }
}

fn render_generic(
    default: &DefaultValue,
    _ctx: &RuleContext<'_>,
    imports: &mut Imports,
) -> Result<Option<String>> {
    Ok(generator(default).map(|g| raw_sql(&format_call(&g.name, &g.args), imports)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const IDIOMS: DefaultIdioms = DefaultIdioms {
        now: NowIdiom::Sql("CURRENT_TIMESTAMP"),
        autoincrement: Some(".autoincrement()"),
        generated_fallback: "UUID()",
        uuid_function: None,
        array_defaults: true,
    };

    const STRICT: DefaultIdioms = DefaultIdioms {
        now: NowIdiom::Modifier(".defaultGetDate()"),
        autoincrement: None,
        generated_fallback: "NEWID()",
        uuid_function: Some("NEWSEQUENTIALID()"),
        array_defaults: false,
    };

    fn ctx(idioms: &DefaultIdioms) -> RuleContext<'_> {
        RuleContext {
            dialect: "test",
            display_name: "TestDB",
            idioms,
        }
    }

    fn call(name: &str, args: Vec<serde_json::Value>) -> DefaultValue {
        DefaultValue::Generator(DefaultGenerator::new(name, args))
    }

    fn run(default: DefaultValue, idioms: &DefaultIdioms) -> (Option<String>, Imports) {
        let mut imports = Imports::new();
        let out = translate(&default, &ctx(idioms), &mut imports).unwrap();
        (out, imports)
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = DEFAULT_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["literal", "list", "now", "autoincrement", "dbgenerated", "uuid", "generic"]
        );
    }

    #[test]
    fn test_literal_defaults() {
        let (out, imports) = run(DefaultValue::Literal(json!("active")), &IDIOMS);
        assert_eq!(out.as_deref(), Some(".default(\"active\")"));
        assert_eq!(imports, Imports::new());

        let (out, _) = run(DefaultValue::Literal(json!(0)), &IDIOMS);
        assert_eq!(out.as_deref(), Some(".default(0)"));

        let (out, _) = run(DefaultValue::Literal(json!(true)), &IDIOMS);
        assert_eq!(out.as_deref(), Some(".default(true)"));
    }

    #[test]
    fn test_list_default() {
        let (out, _) = run(DefaultValue::Literal(json!(["tag1", "tag2"])), &IDIOMS);
        assert_eq!(out.as_deref(), Some(".default([\"tag1\", \"tag2\"])"));
    }

    #[test]
    fn test_list_default_rejected_without_array_support() {
        let mut imports = Imports::new();
        let err = translate(
            &DefaultValue::Literal(json!(["a"])),
            &ctx(&STRICT),
            &mut imports,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "TestDB doesn't support array defaults");
        assert!(err.is_unsupported_construct());
    }

    #[test]
    fn test_now_idioms() {
        let (out, imports) = run(call("now", vec![]), &IDIOMS);
        assert_eq!(out.as_deref(), Some(".default(sql`CURRENT_TIMESTAMP`)"));
        assert_eq!(imports.runtime().collect::<Vec<_>>(), vec!["sql"]);

        let (out, imports) = run(call("now", vec![]), &STRICT);
        assert_eq!(out.as_deref(), Some(".defaultGetDate()"));
        assert_eq!(imports.runtime().count(), 0);
    }

    #[test]
    fn test_autoincrement_may_be_suppressed() {
        let (out, _) = run(call("autoincrement", vec![]), &IDIOMS);
        assert_eq!(out.as_deref(), Some(".autoincrement()"));

        let (out, _) = run(call("autoincrement", vec![]), &STRICT);
        assert_eq!(out, None);
    }

    #[test]
    fn test_dbgenerated_with_expression() {
        let (out, imports) = run(call("dbgenerated", vec![json!("uuid_generate_v4()")]), &IDIOMS);
        assert_eq!(out.as_deref(), Some(".default(sql`uuid_generate_v4()`)"));
        assert_eq!(imports.runtime().collect::<Vec<_>>(), vec!["sql"]);
    }

    #[test]
    fn test_dbgenerated_fallback() {
        let (out, _) = run(call("dbgenerated", vec![]), &IDIOMS);
        assert_eq!(out.as_deref(), Some(".default(sql`UUID()`)"));

        let (out, _) = run(call("dbgenerated", vec![json!("")]), &STRICT);
        assert_eq!(out.as_deref(), Some(".default(sql`NEWID()`)"));
    }

    #[test]
    fn test_dbgenerated_expression_is_escaped() {
        let (out, _) = run(call("dbgenerated", vec![json!("a`b")]), &IDIOMS);
        assert_eq!(out.as_deref(), Some(".default(sql`a\\`b`)"));
    }

    #[test]
    fn test_uuid_generator() {
        let (out, _) = run(call("uuid(4)", vec![]), &STRICT);
        assert_eq!(out.as_deref(), Some(".default(sql`NEWSEQUENTIALID()`)"));

        let (out, _) = run(call("uuid()", vec![]), &IDIOMS);
        assert_eq!(out.as_deref(), Some(".default(sql`uuid()`)"));
    }

    #[test]
    fn test_uuid_name_shape() {
        assert!(is_uuid_generator("uuid()"));
        assert!(is_uuid_generator("uuid(7)"));
        assert!(!is_uuid_generator("uuid"));
        assert!(!is_uuid_generator("uuid(x)"));
        assert!(!is_uuid_generator("cuid()"));
    }

    #[test]
    fn test_generic_generator() {
        let (out, _) = run(call("cuid", vec![]), &IDIOMS);
        assert_eq!(out.as_deref(), Some(".default(sql`cuid()`)"));

        let (out, _) = run(call("nanoid", vec![json!(16)]), &IDIOMS);
        assert_eq!(out.as_deref(), Some(".default(sql`nanoid(16)`)"));
    }
}
