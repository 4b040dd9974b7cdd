//! Import collection for one generated module.

use std::collections::BTreeSet;

/// Module exporting the shared runtime helpers (`sql`, `defineRelations`).
pub const RUNTIME_MODULE: &str = "drizzle-orm";

/// Symbols referenced by a generated module.
///
/// One accumulator is created per generation run and threaded through every
/// step that emits code, so runs never share state. Both sets are ordered and
/// de-duplicated by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Imports {
    /// Dialect-native builders (`pgTable`, `integer`, `foreignKey`, ...).
    native: BTreeSet<String>,
    /// Shared runtime helpers from `drizzle-orm`.
    runtime: BTreeSet<String>,
}

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a dialect-native symbol.
    pub fn use_native(&mut self, symbol: impl Into<String>) {
        self.native.insert(symbol.into());
    }

    /// Record a shared runtime symbol.
    pub fn use_runtime(&mut self, symbol: impl Into<String>) {
        self.runtime.insert(symbol.into());
    }

    pub fn native(&self) -> impl Iterator<Item = &str> {
        self.native.iter().map(String::as_str)
    }

    pub fn runtime(&self) -> impl Iterator<Item = &str> {
        self.runtime.iter().map(String::as_str)
    }

    /// Render the import block: runtime line first, then the native line.
    ///
    /// Returns `None` when nothing was recorded.
    pub fn render(&self, native_module: &str) -> Option<String> {
        let lines: Vec<String> = [
            import_line(&self.runtime, RUNTIME_MODULE),
            import_line(&self.native, native_module),
        ]
        .into_iter()
        .flatten()
        .collect();

        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }
}

fn import_line(symbols: &BTreeSet<String>, module: &str) -> Option<String> {
    if symbols.is_empty() {
        return None;
    }
    let list = symbols.iter().map(String::as_str).collect::<Vec<_>>();
    Some(format!("import {{ {} }} from '{}'", list.join(", "), module))
}
