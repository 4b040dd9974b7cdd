//! Foreign key declarations for owning relation fields.

use super::DeleteAction;
use crate::core::identifier::quote_single;
use crate::core::imports::Imports;
use crate::core::schema::{Field, Model};
use crate::error::{GeneratorError, Result};

/// Render the `foreignKey(...)` entry for a relation field.
///
/// Returns `Ok(None)` for fields that do not own the relation.
pub fn foreign_key(model: &Model, field: &Field, imports: &mut Imports) -> Result<Option<String>> {
    if !field.is_owning() {
        return Ok(None);
    }

    let name = format!("{}_{}_fkey", model.table_name(), field.column_name());
    let action = DeleteAction::parse(field.relation_on_delete.as_deref()).ok_or_else(|| {
        GeneratorError::UnknownDeleteAction {
            relation: name.clone(),
            action: field.relation_on_delete.clone().unwrap_or_default(),
        }
    })?;

    imports.use_native("foreignKey");

    let columns = qualified(&model.name, &field.relation_from_fields);
    let foreign_columns = qualified(&field.type_name, &field.relation_to_fields);
    let on_delete = action
        .clause()
        .map(|clause| format!(".onDelete('{}')", clause))
        .unwrap_or_default();

    Ok(Some(format!(
        "foreignKey({{\n\t\tname: {},\n\t\tcolumns: [{}],\n\t\tforeignColumns: [{}]\n\t}}){}.onUpdate('cascade')",
        quote_single(&name),
        columns,
        foreign_columns,
        on_delete
    )))
}

/// `Model.a, Model.b` column references.
pub(crate) fn qualified(model: &str, fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| format!("{}.{}", model, f))
        .collect::<Vec<_>>()
        .join(", ")
}
