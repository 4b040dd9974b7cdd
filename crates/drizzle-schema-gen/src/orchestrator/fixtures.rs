//! Datamodel fixtures shared by the generator tests.

use serde_json::{json, Value};

use crate::core::schema::{Datamodel, Enum, Field, Model};

fn model(value: Value) -> Model {
    serde_json::from_value(value).expect("fixture model")
}

fn scalar(name: &str, type_name: &str, required: bool) -> Value {
    json!({
        "name": name,
        "kind": "scalar",
        "type": type_name,
        "isList": false,
        "isRequired": required,
        "isUnique": false,
        "isId": false
    })
}

fn autoincrement_id() -> Value {
    json!({
        "name": "id",
        "kind": "scalar",
        "type": "Int",
        "isRequired": true,
        "isId": true,
        "default": { "name": "autoincrement", "args": [] }
    })
}

/// `User { id, email @unique, name?, createdAt @default(now()) }`
pub fn simple_user() -> Model {
    model(json!({
        "name": "User",
        "dbName": null,
        "fields": [
            autoincrement_id(),
            {
                "name": "email",
                "kind": "scalar",
                "type": "String",
                "isRequired": true,
                "isUnique": true
            },
            scalar("name", "String", false),
            {
                "name": "createdAt",
                "kind": "scalar",
                "type": "DateTime",
                "isRequired": true,
                "default": { "name": "now", "args": [] }
            }
        ],
        "primaryKey": null,
        "uniqueIndexes": []
    }))
}

/// [`simple_user`] plus the inverse `posts` relation.
pub fn user_with_posts() -> Model {
    let mut user = simple_user();
    let posts: Field = serde_json::from_value(json!({
        "name": "posts",
        "kind": "object",
        "type": "Post",
        "isList": true,
        "isRequired": true,
        "relationName": "PostToUser",
        "relationFromFields": [],
        "relationToFields": []
    }))
    .expect("fixture field");
    user.fields.push(posts);
    user
}

/// `Post { id, title, userId, user -> User }` with an optional delete action.
pub fn post(on_delete: Option<&str>) -> Model {
    model(json!({
        "name": "Post",
        "fields": [
            autoincrement_id(),
            scalar("title", "String", true),
            scalar("userId", "Int", true),
            {
                "name": "user",
                "kind": "object",
                "type": "User",
                "isRequired": true,
                "relationName": "PostToUser",
                "relationFromFields": ["userId"],
                "relationToFields": ["id"],
                "relationOnDelete": on_delete
            }
        ],
        "primaryKey": null,
        "uniqueIndexes": []
    }))
}

/// Join model with a composite primary key over `userId` and `roleId`.
pub fn user_role() -> Model {
    model(json!({
        "name": "UserRole",
        "fields": [
            scalar("userId", "Int", true),
            scalar("roleId", "Int", true),
            {
                "name": "assignedAt",
                "kind": "scalar",
                "type": "DateTime",
                "isRequired": true,
                "default": { "name": "now", "args": [] }
            }
        ],
        "primaryKey": { "name": null, "fields": ["userId", "roleId"] },
        "uniqueIndexes": []
    }))
}

/// `Product` with a model-level unique constraint on `sku`.
pub fn product() -> Model {
    model(json!({
        "name": "Product",
        "fields": [
            autoincrement_id(),
            scalar("sku", "String", true),
            scalar("name", "String", true)
        ],
        "primaryKey": null,
        "uniqueIndexes": [{ "name": "Product_sku_key", "fields": ["sku"] }]
    }))
}

pub fn role_enum() -> Enum {
    serde_json::from_value(json!({
        "name": "Role",
        "values": [
            { "name": "USER", "dbName": null },
            { "name": "ADMIN", "dbName": null },
            { "name": "MODERATOR", "dbName": null }
        ],
        "dbName": null
    }))
    .expect("fixture enum")
}

/// `User` with a `role Role @default(USER)` enum column.
pub fn user_with_role() -> Model {
    model(json!({
        "name": "User",
        "fields": [
            autoincrement_id(),
            {
                "name": "email",
                "kind": "scalar",
                "type": "String",
                "isRequired": true,
                "isUnique": true
            },
            {
                "name": "role",
                "kind": "enum",
                "type": "Role",
                "isRequired": true,
                "default": "USER"
            }
        ],
        "primaryKey": null,
        "uniqueIndexes": []
    }))
}

/// One required column of every scalar type except `Bytes`.
pub fn all_types() -> Model {
    model(json!({
        "name": "AllTypes",
        "fields": [
            autoincrement_id(),
            scalar("bigIntField", "BigInt", true),
            scalar("boolField", "Boolean", true),
            scalar("dateField", "DateTime", true),
            scalar("decimalField", "Decimal", true),
            scalar("floatField", "Float", true),
            scalar("jsonField", "Json", true),
            scalar("stringField", "String", true)
        ],
        "primaryKey": null,
        "uniqueIndexes": []
    }))
}

/// Single-column model with the given type and default.
pub fn single_column(type_name: &str, list: bool, default: Value) -> Model {
    model(json!({
        "name": "Item",
        "fields": [{
            "name": "value",
            "kind": "scalar",
            "type": type_name,
            "isList": list,
            "isRequired": true,
            "default": default
        }]
    }))
}

/// `Post` and `Tag` joined by an implicit many-to-many relation.
pub fn posts_and_tags() -> Datamodel {
    serde_json::from_value(json!({
        "models": [
            {
                "name": "Post",
                "fields": [
                    autoincrement_id(),
                    {
                        "name": "tags",
                        "kind": "object",
                        "type": "Tag",
                        "isList": true,
                        "relationName": "PostToTag",
                        "relationFromFields": [],
                        "relationToFields": []
                    }
                ]
            },
            {
                "name": "Tag",
                "fields": [
                    autoincrement_id(),
                    {
                        "name": "posts",
                        "kind": "object",
                        "type": "Post",
                        "isList": true,
                        "relationName": "PostToTag",
                        "relationFromFields": [],
                        "relationToFields": []
                    }
                ]
            }
        ],
        "enums": []
    }))
    .expect("fixture datamodel")
}

pub fn datamodel(models: Vec<Model>, enums: Vec<Enum>) -> Datamodel {
    Datamodel {
        models,
        enums,
        indexes: Vec::new(),
    }
}
