//! Column constructor descriptors produced by the type mappers.

use crate::core::identifier::quote_single;
use crate::core::schema::{Enum, ScalarType};

/// Resolved storage kind of a column field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnKind<'a> {
    Scalar(ScalarType),
    Enum(&'a Enum),
}

/// Column constructor chosen for a field.
///
/// Rendered as `constructor('<column>'[, argument])[.array()]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnType {
    /// Builder function, e.g. `varchar` or the exported name of a pgEnum.
    pub constructor: String,
    /// Second constructor argument: an options object or a value list.
    pub argument: Option<String>,
    /// Whether the column holds a list (`.array()` suffix).
    pub array: bool,
}

impl ColumnType {
    /// Constructor without extra arguments.
    pub fn new(constructor: impl Into<String>) -> Self {
        Self {
            constructor: constructor.into(),
            argument: None,
            array: false,
        }
    }

    /// Constructor with a second argument such as `{ mode: 'bigint' }`.
    pub fn with_argument(constructor: impl Into<String>, argument: impl Into<String>) -> Self {
        Self {
            constructor: constructor.into(),
            argument: Some(argument.into()),
            array: false,
        }
    }

    /// Mark the column as a list column.
    pub fn into_array(mut self) -> Self {
        self.array = true;
        self
    }

    /// Render the constructor call for the given storage column name.
    pub fn render(&self, column_name: &str) -> String {
        let mut out = match &self.argument {
            Some(argument) => format!(
                "{}({}, {})",
                self.constructor,
                quote_single(column_name),
                argument
            ),
            None => format!("{}({})", self.constructor, quote_single(column_name)),
        };
        if self.array {
            out.push_str(".array()");
        }
        out
    }
}

/// Render enum values as a single-quoted list: `['A', 'B']`.
pub fn enum_value_list<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    let quoted = values.into_iter().map(quote_single).collect::<Vec<_>>();
    format!("[{}]", quoted.join(", "))
}
