//! The `defineRelations(...)` map.
//!
//! Every table with at least one relation field contributes an entry. Owning
//! fields become `r.one` descriptors pointing at the referenced columns; the
//! inverse side becomes `r.many`, resolved through the owning counterpart
//! when one exists.

use crate::core::imports::Imports;
use crate::core::schema::{Field, Model};

/// Shared runtime helper that builds the relation map.
pub const DEFINE_RELATIONS: &str = "defineRelations";

#[derive(Debug, Clone)]
struct TableRelations {
    table: String,
    descriptors: Vec<String>,
}

/// Relation descriptors collected table by table.
#[derive(Debug, Clone, Default)]
pub struct RelationGraph {
    tables: Vec<TableRelations>,
}

impl RelationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the descriptors of one table.
    ///
    /// `models` is the full working model list, including junction models,
    /// and is used to find the counterpart of inverse relation fields.
    pub fn add_table(&mut self, model: &Model, models: &[Model], imports: &mut Imports) {
        let descriptors: Vec<String> = model
            .relation_fields()
            .map(|field| describe(model, field, models))
            .collect();
        if descriptors.is_empty() {
            return;
        }

        imports.use_runtime(DEFINE_RELATIONS);
        self.tables.push(TableRelations {
            table: model.name.clone(),
            descriptors,
        });
    }

    /// Names of the tables participating in the graph, in insertion order.
    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.table.as_str())
    }

    /// Render the `export const relations = defineRelations(...)` block.
    pub fn render(&self) -> Option<String> {
        if self.tables.is_empty() {
            return None;
        }

        let schema = self.tables().collect::<Vec<_>>().join(", ");
        let body = self
            .tables
            .iter()
            .map(|t| format!("\t{}: {{\n{}\n\t}}", t.table, t.descriptors.join(",\n")))
            .collect::<Vec<_>>()
            .join(",\n");

        Some(format!(
            "export const relations = {}({{ {} }}, (r) => ({{\n{}\n}}));",
            DEFINE_RELATIONS, schema, body
        ))
    }
}

/// Render the descriptor of one relation field.
pub fn describe(model: &Model, field: &Field, models: &[Model]) -> String {
    let related = &field.type_name;

    if field.is_owning() {
        return format!(
            "\t\t{}: r.one.{}({{\n\t\t\tfrom: {},\n\t\t\tto: {}\n\t\t}})",
            field.name,
            related,
            references(&model.name, &field.relation_from_fields),
            references(related, &field.relation_to_fields)
        );
    }

    let counterpart = models
        .iter()
        .find(|m| &m.name == related)
        .and_then(|m| {
            m.fields.iter().find(|f| {
                f.type_name == model.name
                    && f.is_owning()
                    && f.relation_name == field.relation_name
                    && !f.relation_to_fields.is_empty()
            })
        });

    match counterpart {
        Some(owner) => format!(
            "\t\t{}: r.many.{}({{\n\t\t\tfrom: {},\n\t\t\tto: {}\n\t\t}})",
            field.name,
            related,
            references(related, &owner.relation_from_fields),
            references(&model.name, &owner.relation_to_fields)
        ),
        None => format!("\t\t{}: r.many.{}()", field.name, related),
    }
}

/// `r.Model.a` for one column, `[r.Model.a, r.Model.b]` for several.
fn references(model: &str, fields: &[String]) -> String {
    let refs: Vec<String> = fields.iter().map(|f| format!("r.{}.{}", model, f)).collect();
    match refs.as_slice() {
        [single] => single.clone(),
        _ => format!("[{}]", refs.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::FieldKind;

    fn relation(name: &str, target: &str, from: &[&str], to: &[&str], list: bool) -> Field {
        Field {
            name: name.to_string(),
            kind: FieldKind::Object,
            type_name: target.to_string(),
            is_list: list,
            relation_name: Some("PostToUser".to_string()),
            relation_from_fields: from.iter().map(|s| s.to_string()).collect(),
            relation_to_fields: to.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn scalar(name: &str) -> Field {
        Field {
            name: name.to_string(),
            type_name: "Int".to_string(),
            ..Default::default()
        }
    }

    fn models() -> Vec<Model> {
        vec![
            Model {
                name: "User".to_string(),
                fields: vec![scalar("id"), relation("posts", "Post", &[], &[], true)],
                ..Default::default()
            },
            Model {
                name: "Post".to_string(),
                fields: vec![
                    scalar("id"),
                    scalar("userId"),
                    relation("user", "User", &["userId"], &["id"], false),
                ],
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_owning_descriptor() {
        let models = models();
        let post = &models[1];
        assert_eq!(
            describe(post, &post.fields[2], &models),
            "\t\tuser: r.one.User({\n\t\t\tfrom: r.Post.userId,\n\t\t\tto: r.User.id\n\t\t})"
        );
    }

    #[test]
    fn test_inverse_descriptor_uses_counterpart() {
        let models = models();
        let user = &models[0];
        assert_eq!(
            describe(user, &user.fields[1], &models),
            "\t\tposts: r.many.Post({\n\t\t\tfrom: r.Post.userId,\n\t\t\tto: r.User.id\n\t\t})"
        );
    }

    #[test]
    fn test_inverse_without_counterpart() {
        let mut models = models();
        models[1].fields.pop();
        let user = &models[0];
        assert_eq!(describe(user, &user.fields[1], &models), "\t\tposts: r.many.Post()");
    }

    #[test]
    fn test_composite_references_render_as_arrays() {
        let model = Model {
            name: "Line".to_string(),
            ..Default::default()
        };
        let field = relation("order", "Order", &["orderId", "shopId"], &["id", "shopId"], false);
        assert_eq!(
            describe(&model, &field, &[]),
            "\t\torder: r.one.Order({\n\t\t\tfrom: [r.Line.orderId, r.Line.shopId],\n\t\t\tto: [r.Order.id, r.Order.shopId]\n\t\t})"
        );
    }

    #[test]
    fn test_render_graph() {
        let models = models();
        let mut graph = RelationGraph::new();
        let mut imports = Imports::new();
        for model in &models {
            graph.add_table(model, &models, &mut imports);
        }

        let rendered = graph.render().unwrap();
        assert!(rendered.starts_with(
            "export const relations = defineRelations({ User, Post }, (r) => ({\n\tUser: {\n"
        ));
        assert!(rendered.contains("\n\t},\n\tPost: {\n\t\tuser: r.one.User"));
        assert!(rendered.ends_with("\n\t}\n}));"));
        assert_eq!(imports.runtime().collect::<Vec<_>>(), vec!["defineRelations"]);
    }

    #[test]
    fn test_tables_without_relations_are_skipped() {
        let model = Model {
            name: "Setting".to_string(),
            fields: vec![scalar("id")],
            ..Default::default()
        };
        let mut graph = RelationGraph::new();
        let mut imports = Imports::new();
        graph.add_table(&model, &[], &mut imports);
        assert_eq!(graph.render(), None);
        assert_eq!(imports.runtime().count(), 0);
    }
}
