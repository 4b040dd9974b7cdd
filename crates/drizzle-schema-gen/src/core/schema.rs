//! Datamodel types: models, fields, enums, and index descriptors.
//!
//! These types mirror the JSON shape of a Prisma DMMF datamodel so that a
//! loader can deserialize a schema document directly into them. They carry no
//! dialect knowledge; generators read them and never mutate the caller's copy.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Root of the datamodel: every model, enum and plain index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datamodel {
    /// Models in declaration order.
    #[serde(default)]
    pub models: Vec<Model>,

    /// Enums in declaration order.
    #[serde(default)]
    pub enums: Vec<Enum>,

    /// Plain indexes for all models, matched to a model by name.
    #[serde(default)]
    pub indexes: Vec<IndexDef>,
}

impl Datamodel {
    /// Load a datamodel from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a datamodel from a JSON string.
    ///
    /// Accepts either the bare datamodel object or a full DMMF document with
    /// the datamodel nested under `datamodel`.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let datamodel = match value.get("datamodel") {
            Some(inner) => serde_json::from_value(inner.clone())?,
            None => serde_json::from_value(value)?,
        };
        Ok(datamodel)
    }

    /// Find a model by name.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Find an enum by name.
    pub fn find_enum(&self, name: &str) -> Option<&Enum> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Plain indexes declared for the given model.
    pub fn indexes_for<'a>(&'a self, model: &'a str) -> impl Iterator<Item = &'a IndexDef> + 'a {
        self.indexes
            .iter()
            .filter(move |idx| idx.model == model && idx.is_plain())
    }
}

/// Table-like entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Model name, also the exported identifier in generated code.
    pub name: String,

    /// Storage name override.
    #[serde(default)]
    pub db_name: Option<String>,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,

    /// Model-level primary key (`@@id`).
    #[serde(default)]
    pub primary_key: Option<PrimaryKey>,

    /// Model-level unique constraints (`@@unique`).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub unique_indexes: Vec<UniqueIndex>,
}

impl Model {
    /// Storage name: `db_name` when set, otherwise `name`.
    pub fn table_name(&self) -> &str {
        self.db_name.as_deref().unwrap_or(&self.name)
    }

    /// Find a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Relation fields (scalar and enum fields excluded).
    pub fn relation_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_relation())
    }

    /// The single primary-key field, if the model has exactly one.
    pub fn single_id_field(&self) -> Option<&Field> {
        let mut ids = self.fields.iter().filter(|f| f.is_id);
        match (ids.next(), ids.next()) {
            (Some(field), None) => Some(field),
            _ => match &self.primary_key {
                Some(pk) if pk.fields.len() == 1 => self.field(&pk.fields[0]),
                _ => None,
            },
        }
    }
}

/// DMMF writes `null` for absent lists on some fields.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whether a field is a column, an enum column, or a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Scalar,
    Enum,
    Object,
    Unsupported,
}

/// Column or relation descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name, also the property name in generated code.
    pub name: String,

    /// Storage name override.
    #[serde(default)]
    pub db_name: Option<String>,

    /// Field kind.
    #[serde(default)]
    pub kind: FieldKind,

    /// Scalar type tag, enum name, or related model name.
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub is_list: bool,

    #[serde(default)]
    pub is_required: bool,

    #[serde(default)]
    pub is_unique: bool,

    #[serde(default)]
    pub is_id: bool,

    /// Column default, literal or generator call.
    #[serde(default)]
    pub default: Option<DefaultValue>,

    /// Relation name shared by both sides of a relation.
    #[serde(default)]
    pub relation_name: Option<String>,

    /// Local columns (non-empty on the owning side).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub relation_from_fields: Vec<String>,

    /// Referenced columns on the related model.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub relation_to_fields: Vec<String>,

    /// Raw referential action tag (`Cascade`, `SetNull`, ...).
    #[serde(default)]
    pub relation_on_delete: Option<String>,
}

impl Field {
    /// Storage name: `db_name` when set, otherwise `name`.
    pub fn column_name(&self) -> &str {
        self.db_name.as_deref().unwrap_or(&self.name)
    }

    /// Whether this field describes a relation rather than a column.
    pub fn is_relation(&self) -> bool {
        self.kind == FieldKind::Object
    }

    /// Whether this field holds the foreign-key columns of its relation.
    pub fn is_owning(&self) -> bool {
        self.is_relation() && !self.relation_from_fields.is_empty()
    }

    /// Name of the default generator, if the default is a generator.
    pub fn default_generator(&self) -> Option<&str> {
        match &self.default {
            Some(DefaultValue::Generator(generator)) => Some(generator.name.as_str()),
            _ => None,
        }
    }
}

/// Default value: a generator call or a literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Database or client generator such as `now()` or `autoincrement()`.
    Generator(DefaultGenerator),
    /// Literal JSON value; arrays are list defaults.
    Literal(Value),
}

/// Structured default generator descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultGenerator {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

impl DefaultGenerator {
    pub fn new(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// Model-level composite primary key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimaryKey {
    #[serde(default)]
    pub name: Option<String>,
    pub fields: Vec<String>,
}

/// Model-level unique constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UniqueIndex {
    #[serde(default)]
    pub name: Option<String>,
    pub fields: Vec<String>,
}

/// Index descriptor from the datamodel's global index list.
///
/// The list also repeats `@id` and `@unique` constraints, tagged by `type`;
/// only `normal` (or untagged) entries are plain indexes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDef {
    /// Model the index belongs to.
    pub model: String,
    #[serde(default)]
    pub name: Option<String>,
    pub fields: Vec<IndexField>,
    /// `normal`, `unique`, `id` or `fulltext`.
    #[serde(default, rename = "type")]
    pub index_type: Option<String>,
}

impl IndexDef {
    /// Whether this entry is a plain index rather than a key or unique constraint.
    pub fn is_plain(&self) -> bool {
        matches!(self.index_type.as_deref(), None | Some("normal"))
    }

    /// Field names in index order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(IndexField::name).collect()
    }
}

/// Index column, either a bare name or an object with a `name` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexField {
    Name(String),
    Detailed { name: String },
}

impl IndexField {
    pub fn name(&self) -> &str {
        match self {
            IndexField::Name(name) => name,
            IndexField::Detailed { name } => name,
        }
    }
}

/// Enum declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enum {
    pub name: String,
    #[serde(default)]
    pub db_name: Option<String>,
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

impl Enum {
    /// Storage name: `db_name` when set, otherwise `name`.
    pub fn type_name(&self) -> &str {
        self.db_name.as_deref().unwrap_or(&self.name)
    }
}

/// Enum member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,
    #[serde(default)]
    pub db_name: Option<String>,
}

impl EnumValue {
    /// Storage value: `db_name` when set, otherwise `name`.
    pub fn stored_value(&self) -> &str {
        self.db_name.as_deref().unwrap_or(&self.name)
    }
}

/// Scalar type tags understood by every dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Int,
    BigInt,
    Boolean,
    Bytes,
    DateTime,
    Decimal,
    Float,
    Json,
    String,
}

impl ScalarType {
    /// Parse a scalar type tag, ignoring case.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "int" => Some(ScalarType::Int),
            "bigint" => Some(ScalarType::BigInt),
            "boolean" => Some(ScalarType::Boolean),
            "bytes" => Some(ScalarType::Bytes),
            "datetime" => Some(ScalarType::DateTime),
            "decimal" => Some(ScalarType::Decimal),
            "float" => Some(ScalarType::Float),
            "json" => Some(ScalarType::Json),
            "string" => Some(ScalarType::String),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            ScalarType::Int => "Int",
            ScalarType::BigInt => "BigInt",
            ScalarType::Boolean => "Boolean",
            ScalarType::Bytes => "Bytes",
            ScalarType::DateTime => "DateTime",
            ScalarType::Decimal => "Decimal",
            ScalarType::Float => "Float",
            ScalarType::Json => "Json",
            ScalarType::String => "String",
        };
        write!(f, "{}", tag)
    }
}
