//! Junction models for implicit many-to-many relations.
//!
//! Two list relation fields that share a relation name and own no columns on
//! either side describe an implicit many-to-many relation. Such a relation is
//! stored in a junction table `_<RelationName>` with columns `A` and `B`,
//! where `A` references the model whose name sorts first.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::core::schema::{Datamodel, Field, FieldKind, IndexDef, IndexField, Model, PrimaryKey};

/// Append a junction model (and its `B` index) for every implicit
/// many-to-many relation in the datamodel.
///
/// Each relation name produces at most one junction, and relations whose
/// junction model already exists are left alone. Returns the number of
/// junction models added.
pub fn expand_many_to_many(datamodel: &mut Datamodel) -> usize {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut junctions: Vec<(Model, IndexDef)> = Vec::new();

    for model in &datamodel.models {
        for field in model.relation_fields().filter(|f| is_implicit_side(f)) {
            let Some(relation) = field.relation_name.as_deref() else {
                continue;
            };
            if seen.contains(relation) {
                continue;
            }
            let Some(other) = datamodel.model(&field.type_name) else {
                continue;
            };
            let has_counterpart = other.fields.iter().any(|g| {
                is_implicit_side(g)
                    && g.relation_name.as_deref() == Some(relation)
                    && g.type_name == model.name
                    && !(other.name == model.name && g.name == field.name)
            });
            if !has_counterpart {
                continue;
            }
            seen.insert(relation);

            let junction_name = format!("_{}", relation);
            if datamodel.model(&junction_name).is_some() {
                continue;
            }

            let (a, b) = if model.name <= other.name {
                (model, other)
            } else {
                (other, model)
            };
            match junction(relation, a, b) {
                Some(entry) => {
                    debug!(
                        "Implicit many-to-many {} between {} and {}",
                        relation, a.name, b.name
                    );
                    junctions.push(entry);
                }
                None => warn!(
                    "Skipping many-to-many relation {}: {} and {} need a single-field primary key",
                    relation, a.name, b.name
                ),
            }
        }
    }

    let added = junctions.len();
    for (model, index) in junctions {
        datamodel.models.push(model);
        datamodel.indexes.push(index);
    }
    added
}

/// List relation field that owns no columns.
fn is_implicit_side(field: &Field) -> bool {
    field.is_relation() && field.is_list && field.relation_from_fields.is_empty()
}

fn junction(relation: &str, a: &Model, b: &Model) -> Option<(Model, IndexDef)> {
    let a_id = a.single_id_field()?;
    let b_id = b.single_id_field()?;
    let name = format!("_{}", relation);

    let (a_link, b_link) = if a.name == b.name {
        let base = lower_first(&a.name);
        (format!("{}A", base), format!("{}B", base))
    } else {
        (lower_first(&a.name), lower_first(&b.name))
    };

    let model = Model {
        name: name.clone(),
        db_name: None,
        fields: vec![
            key_column("A", a_id),
            key_column("B", b_id),
            link(a_link, "A", a, a_id, relation),
            link(b_link, "B", b, b_id, relation),
        ],
        primary_key: Some(PrimaryKey {
            name: Some(format!("{}_AB_pkey", name)),
            fields: vec!["A".to_string(), "B".to_string()],
        }),
        unique_indexes: Vec::new(),
    };

    let index = IndexDef {
        model: name.clone(),
        name: Some(format!("{}_B_index", name)),
        fields: vec![IndexField::Name("B".to_string())],
        index_type: None,
    };

    Some((model, index))
}

/// Required column typed like the referenced key.
fn key_column(name: &str, id: &Field) -> Field {
    Field {
        name: name.to_string(),
        kind: id.kind,
        type_name: id.type_name.clone(),
        is_required: true,
        ..Default::default()
    }
}

fn link(name: String, column: &str, target: &Model, id: &Field, relation: &str) -> Field {
    Field {
        name,
        db_name: Some(column.to_string()),
        kind: FieldKind::Object,
        type_name: target.name.clone(),
        is_required: true,
        relation_name: Some(relation.to_string()),
        relation_from_fields: vec![column.to_string()],
        relation_to_fields: vec![id.name.clone()],
        relation_on_delete: Some("Cascade".to_string()),
        ..Default::default()
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(type_name: &str) -> Field {
        Field {
            name: "id".to_string(),
            type_name: type_name.to_string(),
            is_id: true,
            is_required: true,
            ..Default::default()
        }
    }

    fn list(name: &str, target: &str, relation: &str) -> Field {
        Field {
            name: name.to_string(),
            kind: FieldKind::Object,
            type_name: target.to_string(),
            is_list: true,
            relation_name: Some(relation.to_string()),
            ..Default::default()
        }
    }

    fn posts_and_tags() -> Datamodel {
        Datamodel {
            models: vec![
                Model {
                    name: "Tag".to_string(),
                    fields: vec![id("String"), list("posts", "Post", "PostToTag")],
                    ..Default::default()
                },
                Model {
                    name: "Post".to_string(),
                    fields: vec![id("Int"), list("tags", "Tag", "PostToTag")],
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_junction_model_shape() {
        let mut dm = posts_and_tags();
        assert_eq!(expand_many_to_many(&mut dm), 1);
        assert_eq!(dm.models.len(), 3);

        let junction = dm.model("_PostToTag").unwrap();
        let names: Vec<_> = junction.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "post", "tag"]);

        // A references Post (sorts first), B references Tag
        assert_eq!(junction.fields[0].type_name, "Int");
        assert_eq!(junction.fields[1].type_name, "String");
        assert!(junction.fields[0].is_required);

        let post_link = &junction.fields[2];
        assert_eq!(post_link.type_name, "Post");
        assert_eq!(post_link.column_name(), "A");
        assert_eq!(post_link.relation_from_fields, vec!["A"]);
        assert_eq!(post_link.relation_to_fields, vec!["id"]);
        assert!(post_link.is_owning());

        let pk = junction.primary_key.as_ref().unwrap();
        assert_eq!(pk.name.as_deref(), Some("_PostToTag_AB_pkey"));
        assert_eq!(pk.fields, vec!["A", "B"]);

        let index = &dm.indexes[0];
        assert_eq!(index.model, "_PostToTag");
        assert_eq!(index.name.as_deref(), Some("_PostToTag_B_index"));
        assert_eq!(index.field_names(), vec!["B"]);
    }

    #[test]
    fn test_expansion_runs_once_per_relation() {
        let mut dm = posts_and_tags();
        expand_many_to_many(&mut dm);
        assert_eq!(expand_many_to_many(&mut dm), 0);
        assert_eq!(dm.models.len(), 3);
    }

    #[test]
    fn test_self_relation() {
        let mut dm = Datamodel {
            models: vec![Model {
                name: "User".to_string(),
                fields: vec![
                    id("Int"),
                    list("followers", "User", "Follows"),
                    list("following", "User", "Follows"),
                ],
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(expand_many_to_many(&mut dm), 1);
        let junction = dm.model("_Follows").unwrap();
        assert_eq!(junction.fields[2].name, "userA");
        assert_eq!(junction.fields[3].name, "userB");
    }

    #[test]
    fn test_single_list_side_is_not_many_to_many() {
        let mut dm = Datamodel {
            models: vec![Model {
                name: "User".to_string(),
                fields: vec![id("Int"), list("posts", "Post", "PostToUser")],
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(expand_many_to_many(&mut dm), 0);
    }

    #[test]
    fn test_side_without_single_key_is_skipped() {
        let mut dm = posts_and_tags();
        dm.models[0].fields[0].is_id = false;
        assert_eq!(expand_many_to_many(&mut dm), 0);
        assert!(dm.indexes.is_empty());
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("BlogPost"), "blogPost");
        assert_eq!(lower_first(""), "");
    }
}
