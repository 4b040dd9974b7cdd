//! Relation handling: foreign keys, relation graph, implicit join tables.
//!
//! - [`foreign_key`]: `foreignKey(...)` declarations for owning relation fields
//! - [`graph`]: the `defineRelations(...)` map across all tables
//! - [`many_to_many`]: junction models for implicit many-to-many relations

pub mod foreign_key;
pub mod graph;
pub mod many_to_many;

pub use foreign_key::foreign_key;
pub use graph::RelationGraph;
pub use many_to_many::expand_many_to_many;

/// Referential action applied when the referenced row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteAction {
    Cascade,
    SetNull,
    SetDefault,
    Restrict,
    NoAction,
}

impl DeleteAction {
    /// Parse a raw action tag. An unset tag means `Cascade`.
    ///
    /// Returns `None` for tags outside the known set.
    pub fn parse(tag: Option<&str>) -> Option<Self> {
        match tag {
            None | Some("Cascade") => Some(DeleteAction::Cascade),
            Some("SetNull") => Some(DeleteAction::SetNull),
            Some("SetDefault") => Some(DeleteAction::SetDefault),
            Some("Restrict") => Some(DeleteAction::Restrict),
            Some("NoAction") => Some(DeleteAction::NoAction),
            Some(_) => None,
        }
    }

    /// Action name inside `.onDelete('...')`, or `None` when no clause is emitted.
    pub fn clause(&self) -> Option<&'static str> {
        match self {
            DeleteAction::Cascade => Some("cascade"),
            DeleteAction::SetNull => Some("set null"),
            DeleteAction::SetDefault => Some("set default"),
            DeleteAction::Restrict => Some("restrict"),
            DeleteAction::NoAction => None,
        }
    }
}
