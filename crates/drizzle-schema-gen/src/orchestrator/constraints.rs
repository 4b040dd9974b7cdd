//! Index and key declarations inside the table callback.

use crate::core::identifier::quote_single;
use crate::core::imports::Imports;
use crate::core::schema::{IndexDef, Model};
use crate::relations::foreign_key::qualified;

/// Plain indexes declared for the model.
///
/// Unnamed indexes are named `<Model>_<fields>_idx`.
pub fn plain_indexes<'a>(
    model: &Model,
    indexes: impl IntoIterator<Item = &'a IndexDef>,
    imports: &mut Imports,
) -> Vec<String> {
    let rendered: Vec<String> = indexes
        .into_iter()
        .filter(|idx| idx.model == model.name)
        .map(|idx| {
            let fields: Vec<String> = idx.field_names().into_iter().map(str::to_string).collect();
            let name = idx
                .name
                .clone()
                .unwrap_or_else(|| format!("{}_{}_idx", model.name, fields.join("_")));
            format!(
                "index({})\n\t\t.on({})",
                quote_single(&name),
                qualified(&model.name, &fields)
            )
        })
        .collect();

    if !rendered.is_empty() {
        imports.use_native("index");
    }
    rendered
}

/// Model-level unique constraints.
///
/// Unnamed constraints are named `<Model>_<fields>_key`.
pub fn unique_indexes(model: &Model, imports: &mut Imports) -> Vec<String> {
    if model.unique_indexes.is_empty() {
        return Vec::new();
    }

    imports.use_native("uniqueIndex");
    model
        .unique_indexes
        .iter()
        .map(|idx| {
            let name = idx
                .name
                .clone()
                .unwrap_or_else(|| format!("{}_{}_key", model.name, idx.fields.join("_")));
            format!(
                "uniqueIndex({})\n\t\t.on({})",
                quote_single(&name),
                qualified(&model.name, &idx.fields)
            )
        })
        .collect()
}

/// Composite primary key, when the model-level key spans several fields.
///
/// A single-field model key is expressed on the column instead.
pub fn composite_primary_key(model: &Model, imports: &mut Imports) -> Option<String> {
    let pk = model.primary_key.as_ref().filter(|pk| pk.fields.len() > 1)?;

    imports.use_native("primaryKey");
    let name = pk
        .name
        .clone()
        .unwrap_or_else(|| format!("{}_cpk", model.name));
    Some(format!(
        "primaryKey({{\n\t\tname: {},\n\t\tcolumns: [{}]\n\t}})",
        quote_single(&name),
        qualified(&model.name, &pk.fields)
    ))
}
