//! Schema generator - main workflow coordinator.
//!
//! A [`Generator`] turns one [`Datamodel`] into one Drizzle schema module for
//! one dialect. Each run works on its own copy of the datamodel and its own
//! [`Imports`] accumulator, so generating several dialects from the same
//! datamodel never leaks state between runs.

mod constraints;
#[cfg(test)]
mod fixtures;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::identifier::quote_single;
use crate::core::imports::Imports;
use crate::core::schema::{Datamodel, Field, FieldKind, Model, ScalarType};
use crate::core::traits::Dialect;
use crate::dialect::{translate, ColumnKind, RuleContext};
use crate::drivers::{DialectImpl, DialectKind};
use crate::error::{GeneratorError, Result};
use crate::relations::{expand_many_to_many, foreign_key, RelationGraph};

/// Schema generator for one dialect.
#[derive(Debug, Clone)]
pub struct Generator {
    dialect: DialectImpl,
}

/// Generated schema module for one dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSchema {
    /// Dialect the module targets.
    pub dialect: DialectKind,

    /// TypeScript source text.
    pub content: String,
}

impl Generator {
    /// Create a generator for a backend.
    pub fn new(kind: DialectKind) -> Self {
        Self {
            dialect: DialectImpl::new(kind),
        }
    }

    /// Backend this generator targets.
    pub fn kind(&self) -> DialectKind {
        self.dialect.kind()
    }

    /// Generate the schema module text.
    ///
    /// The output is the import block, enum declarations, one declaration
    /// per table and the relation map, separated by blank lines. Any
    /// unsupported construct aborts the run without partial output.
    pub fn generate(&self, datamodel: &Datamodel) -> Result<String> {
        let mut working = datamodel.clone();
        let junctions = expand_many_to_many(&mut working);

        let mut imports = Imports::new();
        let mut graph = RelationGraph::new();

        let enums: Vec<String> = working
            .enums
            .iter()
            .filter_map(|e| self.dialect.enum_declaration(e, &mut imports))
            .collect();

        let mut tables = Vec::with_capacity(working.models.len());
        for model in &working.models {
            if model.name.is_empty() || model.fields.is_empty() {
                debug!("Skipping model without name or fields: {:?}", model.name);
                continue;
            }
            debug!("{}: rendering table {}", self.dialect.name(), model.name);
            tables.push(self.render_table(model, &working, &mut imports)?);
            graph.add_table(model, &working.models, &mut imports);
        }

        let table_count = tables.len();
        let mut blocks = Vec::new();
        blocks.extend(imports.render(self.dialect.core_module()));
        blocks.extend(enums);
        blocks.extend(tables);
        blocks.extend(graph.render());

        info!(
            "{}: generated {} tables ({} junction), {} enums",
            self.dialect.name(),
            table_count,
            junctions,
            working.enums.len()
        );

        Ok(blocks.join("\n\n"))
    }

    fn render_table(&self, model: &Model, datamodel: &Datamodel, imports: &mut Imports) -> Result<String> {
        let builder = self.dialect.table_builder();
        imports.use_native(builder);

        let mut columns = Vec::with_capacity(model.fields.len());
        for field in &model.fields {
            if let Some(column) = self.render_column(model, field, datamodel, imports)? {
                columns.push(format!("\t{}: {}", field.name, column));
            }
        }

        let mut entries = Vec::new();
        for field in model.relation_fields() {
            entries.extend(foreign_key(model, field, imports)?);
        }
        entries.extend(constraints::plain_indexes(model, datamodel.indexes_for(&model.name), imports));
        entries.extend(constraints::unique_indexes(model, imports));
        entries.extend(constraints::composite_primary_key(model, imports));

        let callback = if entries.is_empty() {
            String::new()
        } else {
            format!(", ({}) => [\n\t{}\n]", model.name, entries.join(",\n\t"))
        };

        Ok(format!(
            "export const {} = {}({}, {{\n{}\n}}{});",
            model.name,
            builder,
            quote_single(model.table_name()),
            columns.join(",\n"),
            callback
        ))
    }

    /// Render one column, or `None` for relation fields.
    fn render_column(
        &self,
        model: &Model,
        field: &Field,
        datamodel: &Datamodel,
        imports: &mut Imports,
    ) -> Result<Option<String>> {
        let kind = match field.kind {
            FieldKind::Object => return Ok(None),
            FieldKind::Enum => {
                let enum_def = datamodel
                    .find_enum(&field.type_name)
                    .ok_or_else(|| GeneratorError::UnknownEnum {
                        model: model.name.clone(),
                        field: field.name.clone(),
                        name: field.type_name.clone(),
                    })?;
                ColumnKind::Enum(enum_def)
            }
            FieldKind::Scalar => match ScalarType::parse(&field.type_name) {
                Some(scalar) => ColumnKind::Scalar(scalar),
                None => return Err(self.unsupported_field(model, field)),
            },
            FieldKind::Unsupported => return Err(self.unsupported_field(model, field)),
        };

        let mut column = self
            .dialect
            .map_type(field, kind, imports)?
            .render(field.column_name());

        if field.is_required {
            column.push_str(".notNull()");
        }
        if field.is_id || is_single_key(model, field) {
            column.push_str(".primaryKey()");
        }
        if field.is_unique {
            column.push_str(".unique()");
        }
        if let Some(default) = &field.default {
            let ctx = RuleContext {
                dialect: self.dialect.name(),
                display_name: self.dialect.display_name(),
                idioms: self.dialect.default_idioms(),
            };
            if let Some(modifier) = translate(default, &ctx, imports)? {
                column.push_str(&modifier);
            }
        }

        Ok(Some(column))
    }

    fn unsupported_field(&self, model: &Model, field: &Field) -> GeneratorError {
        GeneratorError::unsupported_type(
            self.dialect.name(),
            format!(
                "Unsupported type {} on field {}.{}",
                field.type_name, model.name, field.name
            ),
        )
    }
}

/// Whether the model-level primary key consists of exactly this field.
fn is_single_key(model: &Model, field: &Field) -> bool {
    model
        .primary_key
        .as_ref()
        .is_some_and(|pk| pk.fields.len() == 1 && pk.fields[0] == field.name)
}

/// Generate one schema module per requested dialect.
///
/// Stops at the first failing dialect.
pub fn generate_all(datamodel: &Datamodel, kinds: &[DialectKind]) -> Result<Vec<GeneratedSchema>> {
    kinds
        .iter()
        .map(|&kind| {
            let generator = Generator::new(kind);
            generator.generate(datamodel).map(|content| GeneratedSchema {
                dialect: generator.kind(),
                content,
            })
        })
        .collect()
}
